//! Booking event types.
//!
//! `Event` is the persisted entity as the store sees it (camelCase JSON on
//! the wire). `EventForm` is the unvalidated dialog draft, and
//! `CalendarItem` is the display-only shape handed to calendar rendering.
//! Display colors and the two-line title are always derived client-side;
//! they are never part of the persisted entity.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::colors::colors_for;
use crate::title::{Viewport, derive_title};

/// A persisted booking event. `id` and the audit stamps are assigned by
/// the store; everything the client authors lives in [`EventData`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,

    #[serde(flatten)]
    pub data: EventData,

    /// Set by the store on create, read-only to the client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    /// Set by the store on every write, read-only to the client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<DateTime<Utc>>,
}

/// The client-authored fields of an event. This is the full payload of a
/// create call and, together with an id, of an update call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventData {
    pub bride_name: String,
    pub bride_surname: String,
    pub groom_name: String,
    pub groom_surname: String,

    pub event_date: NaiveDate,
    /// Time of day as `HH:MM`, kept as the opaque string the wire uses.
    pub event_time_start: String,
    pub event_time_finish: String,

    /// Wire code for the event category. Unknown codes are tolerated when
    /// reading (display falls back to the default colors) but rejected by
    /// validation on write. See [`EventType`].
    pub event_type: i32,

    /// Contract holder, also the first line of the derived title.
    pub hosted_name_surname: String,
    pub phone: String,
    pub number_of_guests: i32,
    #[serde(default)]
    pub description: String,

    /// Derived from `hosted_name_surname` and the time range; never
    /// authored directly.
    pub title: String,
}

/// Event category, as enumerated by the booking API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    Wedding,
    Engagement,
    HennaNight,
}

impl EventType {
    pub const ALL: [EventType; 3] = [
        EventType::Wedding,
        EventType::Engagement,
        EventType::HennaNight,
    ];

    pub fn from_code(code: i32) -> Option<EventType> {
        match code {
            0 => Some(EventType::Wedding),
            1 => Some(EventType::Engagement),
            2 => Some(EventType::HennaNight),
            _ => None,
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            EventType::Wedding => 0,
            EventType::Engagement => 1,
            EventType::HennaNight => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventType::Wedding => "Düğün",
            EventType::Engagement => "Nişan",
            EventType::HennaNight => "Kına",
        }
    }
}

/// The unvalidated dialog draft. All fields start empty/unset; nothing is
/// enforced until [`crate::validate::validate`] runs on submit.
///
/// The derived title is recomputed on every write to one of its three
/// inputs, so it is never stale after an edit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventForm {
    pub bride_name: String,
    pub bride_surname: String,
    pub groom_name: String,
    pub groom_surname: String,

    pub event_date: Option<NaiveDate>,
    pub event_time_start: String,
    pub event_time_finish: String,

    /// `None` means "not selected yet", which is a validation failure,
    /// not a default category.
    pub event_type: Option<EventType>,

    pub hosted_name_surname: String,
    pub phone: String,
    pub number_of_guests: Option<i32>,
    pub description: String,

    title: String,
}

impl EventForm {
    pub fn new() -> EventForm {
        EventForm::default()
    }

    /// A fresh creation draft for the clicked calendar day.
    pub fn for_date(date: NaiveDate) -> EventForm {
        EventForm {
            event_date: Some(date),
            ..EventForm::default()
        }
    }

    /// An editing draft prefilled from a persisted event.
    pub fn from_event(event: &Event, viewport: Viewport) -> EventForm {
        let data = &event.data;
        let mut form = EventForm {
            bride_name: data.bride_name.clone(),
            bride_surname: data.bride_surname.clone(),
            groom_name: data.groom_name.clone(),
            groom_surname: data.groom_surname.clone(),
            event_date: Some(data.event_date),
            event_time_start: data.event_time_start.clone(),
            event_time_finish: data.event_time_finish.clone(),
            event_type: EventType::from_code(data.event_type),
            hosted_name_surname: data.hosted_name_surname.clone(),
            phone: data.phone.clone(),
            number_of_guests: Some(data.number_of_guests),
            description: data.description.clone(),
            title: String::new(),
        };
        form.recompute_title(viewport);
        form
    }

    pub fn set_hosted_name_surname(&mut self, value: impl Into<String>, viewport: Viewport) {
        self.hosted_name_surname = value.into();
        self.recompute_title(viewport);
    }

    pub fn set_event_time_start(&mut self, value: impl Into<String>, viewport: Viewport) {
        self.event_time_start = value.into();
        self.recompute_title(viewport);
    }

    pub fn set_event_time_finish(&mut self, value: impl Into<String>, viewport: Viewport) {
        self.event_time_finish = value.into();
        self.recompute_title(viewport);
    }

    /// The current derived title. Read-only; only the three input setters
    /// change it.
    pub fn title(&self) -> &str {
        &self.title
    }

    fn recompute_title(&mut self, viewport: Viewport) {
        self.title = derive_title(
            &self.hosted_name_surname,
            &self.event_time_start,
            &self.event_time_finish,
            viewport,
        );
    }

    /// Build the store payload from the draft. Returns `None` when a
    /// required typed field is unset; callers run validation first, which
    /// reports those cases per-field.
    pub fn to_data(&self) -> Option<EventData> {
        let event_date = self.event_date?;
        let event_type = self.event_type?;
        let number_of_guests = self.number_of_guests?;

        Some(EventData {
            bride_name: self.bride_name.trim().to_string(),
            bride_surname: self.bride_surname.trim().to_string(),
            groom_name: self.groom_name.trim().to_string(),
            groom_surname: self.groom_surname.trim().to_string(),
            event_date,
            event_time_start: self.event_time_start.trim().to_string(),
            event_time_finish: self.event_time_finish.trim().to_string(),
            event_type: event_type.code(),
            hosted_name_surname: self.hosted_name_surname.trim().to_string(),
            phone: self.phone.trim().to_string(),
            number_of_guests,
            description: self.description.trim().to_string(),
            title: self.title.clone(),
        })
    }
}

/// What calendar rendering consumes: one displayable item per event.
///
/// Colors and the two-line title are re-derived from the event on every
/// render pass, so the same event can never show two different colors in
/// the same pass. The renderer only lays these out; it never mutates them
/// and they are never written back to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarItem {
    pub id: String,
    /// Two lines: host name, then `start - finish` (may be empty).
    pub title: String,
    pub date: NaiveDate,
    pub background_color: &'static str,
    pub text_color: &'static str,
    pub border_color: &'static str,
    pub all_day: bool,
}

impl CalendarItem {
    pub fn from_event(event: &Event, viewport: Viewport) -> CalendarItem {
        let scheme = colors_for(event.data.event_type);
        CalendarItem {
            id: event.id.clone(),
            title: derive_title(
                &event.data.hosted_name_surname,
                &event.data.event_time_start,
                &event.data.event_time_finish,
                viewport,
            ),
            date: event.data.event_date,
            background_color: scheme.background,
            text_color: scheme.text,
            border_color: scheme.border,
            all_day: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_event() -> Event {
        Event {
            id: "ev-1".to_string(),
            data: EventData {
                bride_name: "Ayşe".to_string(),
                bride_surname: "Yılmaz".to_string(),
                groom_name: "Mehmet".to_string(),
                groom_surname: "Demir".to_string(),
                event_date: NaiveDate::from_ymd_opt(2025, 6, 14).unwrap(),
                event_time_start: "14:00".to_string(),
                event_time_finish: "18:00".to_string(),
                event_type: 0,
                hosted_name_surname: "Ali Kaya".to_string(),
                phone: "(532) 123 45 67".to_string(),
                number_of_guests: 250,
                description: String::new(),
                title: "Ali Kaya\n14:00 - 18:00".to_string(),
            },
            created_date: None,
            updated_date: None,
        }
    }

    #[test]
    fn event_type_codes_round_trip() {
        for ty in EventType::ALL {
            assert_eq!(EventType::from_code(ty.code()), Some(ty));
        }
        assert_eq!(EventType::from_code(-1), None);
        assert_eq!(EventType::from_code(3), None);
    }

    #[test]
    fn wire_format_uses_camel_case_and_flattens_data() {
        let json = serde_json::to_value(make_test_event()).unwrap();
        assert_eq!(json["id"], "ev-1");
        assert_eq!(json["brideName"], "Ayşe");
        assert_eq!(json["eventDate"], "2025-06-14");
        assert_eq!(json["eventType"], 0);
        assert_eq!(json["numberOfGuests"], 250);
        // Audit stamps are absent until the store sets them
        assert!(json.get("createdDate").is_none());
        // Display-only fields are never part of the wire shape
        assert!(json.get("backgroundColor").is_none());
        assert!(json.get("allDay").is_none());
    }

    #[test]
    fn form_setters_recompute_title() {
        let mut form = EventForm::new();
        form.set_hosted_name_surname("Ali Kaya", Viewport::wide());
        assert_eq!(form.title(), "Ali Kaya");

        form.set_event_time_start("14:00", Viewport::wide());
        // Only one time set: no time line yet
        assert_eq!(form.title(), "Ali Kaya");

        form.set_event_time_finish("18:00", Viewport::wide());
        assert_eq!(form.title(), "Ali Kaya\n14:00 - 18:00");
    }

    #[test]
    fn to_data_requires_typed_fields() {
        let mut form = EventForm::new();
        assert!(form.to_data().is_none());

        form = EventForm::from_event(&make_test_event(), Viewport::wide());
        let data = form.to_data().unwrap();
        assert_eq!(data.event_type, 0);
        assert_eq!(data.title, "Ali Kaya\n14:00 - 18:00");
    }

    #[test]
    fn calendar_item_derives_colors_and_title() {
        let event = make_test_event();
        let item = CalendarItem::from_event(&event, Viewport::wide());
        assert_eq!(item.id, "ev-1");
        assert_eq!(item.title, "Ali Kaya\n14:00 - 18:00");
        assert_eq!(item.background_color, "#DC2626");
        assert!(item.all_day);

        let narrow = CalendarItem::from_event(&event, Viewport::new(375));
        assert_eq!(narrow.title, "Ali\n14:00 - 18:00");
    }
}
