//! Edit-session state machine.
//!
//! One `Session` per rendered calendar keeps the displayed event list, the
//! open dialog (if any) and the store consistent. Reads flow store →
//! session → calendar items; writes go form → validation → store, and a
//! successful mutation always triggers an unconditional full refetch so
//! the list reflects the store's truth rather than a local splice.
//!
//! Mutations are exclusive by construction: every transition takes
//! `&mut self` and is awaited to completion, so a second submit cannot
//! start while one is in flight.

use chrono::NaiveDate;

use crate::error::{SalonError, SalonResult};
use crate::event::{CalendarItem, Event, EventForm};
use crate::store::EventStore;
use crate::title::{Viewport, derive_title};
use crate::validate::{FieldError, merge_field_errors, validate};

const MSG_LOAD_FAILED: &str = "Eventler yüklenirken bir hata oluştu";
const MSG_CREATED: &str = "Event başarıyla eklendi";
const MSG_UPDATED: &str = "Event başarıyla güncellendi";
const MSG_DELETED: &str = "Event başarıyla silindi";
const MSG_CREATE_FAILED: &str = "Event eklenirken bir hata oluştu. Lütfen tekrar deneyin.";
const MSG_UPDATE_FAILED: &str = "Event güncellenirken bir hata oluştu. Lütfen tekrar deneyin.";
const MSG_DELETE_FAILED: &str = "Event silinirken bir hata oluştu. Lütfen tekrar deneyin.";
const MSG_SESSION_EXPIRED: &str = "Oturum süresi doldu, lütfen tekrar giriş yapın";

/// Where user-visible outcome messages go. The CLI prints them colored;
/// tests record them.
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// The state of one logical edit session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Calendar populated from the last successful list fetch.
    Viewing,
    /// Dialog open for a new event, defaulting to the clicked day.
    Composing { date: NaiveDate },
    /// Dialog open on a snapshot of an existing event.
    Editing { event: Event },
    /// A create/update/delete call is in flight.
    Submitting,
    /// Dialog dismissed; uncommitted edits discarded.
    Closed,
}

/// What a submit or delete attempt resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The store accepted the mutation; the list was refetched.
    Saved,
    /// Field errors (local or server-reported) are waiting in the form.
    InvalidFields,
    /// Opaque failure; a generic notification was emitted.
    Failed,
    /// The store rejected the token; the caller should discard it.
    Unauthorized,
}

pub struct Session<S, N> {
    store: S,
    notifier: N,
    viewport: Viewport,
    state: SessionState,
    /// `None` until the first successful fetch, distinguishing "not yet
    /// loaded" from "no events".
    events: Option<Vec<Event>>,
    errors: Vec<FieldError>,
}

impl<S: EventStore, N: Notifier> Session<S, N> {
    pub fn new(store: S, notifier: N, viewport: Viewport) -> Session<S, N> {
        Session {
            store,
            notifier,
            viewport,
            state: SessionState::Viewing,
            events: None,
            errors: Vec::new(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The displayed list, `None` while the first fetch is outstanding.
    pub fn events(&self) -> Option<&[Event]> {
        self.events.as_deref()
    }

    /// Display items for the calendar, re-derived on every call.
    pub fn calendar_items(&self) -> Option<Vec<CalendarItem>> {
        self.events.as_ref().map(|events| {
            events
                .iter()
                .map(|e| CalendarItem::from_event(e, self.viewport))
                .collect()
        })
    }

    /// Field errors from the last submission attempt.
    pub fn field_errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Fetch the authoritative event list. Failures surface through the
    /// notifier and are also returned so callers can react (401 handling).
    pub async fn load(&mut self) -> SalonResult<()> {
        match self.store.list().await {
            Ok(events) => {
                self.events = Some(events);
                Ok(())
            }
            Err(SalonError::Unauthorized) => {
                self.notifier.error(MSG_SESSION_EXPIRED);
                Err(SalonError::Unauthorized)
            }
            Err(err) => {
                self.notifier.error(MSG_LOAD_FAILED);
                Err(err)
            }
        }
    }

    /// Open a creation dialog for the clicked day.
    pub fn open_compose(&mut self, date: NaiveDate) -> bool {
        if !self.dialog_can_open() {
            return false;
        }
        self.errors.clear();
        self.state = SessionState::Composing { date };
        true
    }

    /// Open an editing dialog on a snapshot of the displayed event with
    /// the given id.
    pub fn open_edit(&mut self, id: &str) -> bool {
        if !self.dialog_can_open() {
            return false;
        }
        let Some(event) = self
            .events
            .as_ref()
            .and_then(|events| events.iter().find(|e| e.id == id).cloned())
        else {
            return false;
        };

        self.errors.clear();
        self.state = SessionState::Editing { event };
        true
    }

    fn dialog_can_open(&self) -> bool {
        matches!(self.state, SessionState::Viewing | SessionState::Closed)
    }

    /// A prefilled draft for the open dialog, or `None` when no dialog is
    /// open.
    pub fn draft(&self) -> Option<EventForm> {
        match &self.state {
            SessionState::Composing { date } => Some(EventForm::for_date(*date)),
            SessionState::Editing { event } => Some(EventForm::from_event(event, self.viewport)),
            _ => None,
        }
    }

    /// Dismiss the dialog, discarding uncommitted edits.
    pub fn close(&mut self) {
        self.errors.clear();
        self.state = SessionState::Closed;
    }

    /// Submit the form for the open dialog.
    ///
    /// A draft with local validation errors never reaches the store; the
    /// session stays in its dialog state with the errors recorded. Server
    /// field errors land the same way, taking precedence per field.
    pub async fn submit(&mut self, form: &EventForm) -> SubmitOutcome {
        let origin = match &self.state {
            SessionState::Composing { .. } | SessionState::Editing { .. } => self.state.clone(),
            _ => return SubmitOutcome::Failed,
        };

        // Cleared on every resubmission attempt
        self.errors.clear();

        let local_errors = validate(form);
        if !local_errors.is_empty() {
            self.errors = local_errors;
            return SubmitOutcome::InvalidFields;
        }

        let Some(mut data) = form.to_data() else {
            // validate() guarantees the typed fields; treat a gap as one
            // more invalid submission rather than panicking.
            self.errors = vec![FieldError::new("eventDate", "Etkinlik tarihi zorunludur")];
            return SubmitOutcome::InvalidFields;
        };

        // The title is never left stale: re-derive it from the final
        // field values at the moment of submission.
        data.title = derive_title(
            &data.hosted_name_surname,
            &data.event_time_start,
            &data.event_time_finish,
            self.viewport,
        );

        let editing = matches!(origin, SessionState::Editing { .. });
        self.state = SessionState::Submitting;

        let result = match &origin {
            SessionState::Editing { event } => self.store.update(&event.id, &data).await,
            _ => self.store.create(&data).await,
        };

        match result {
            Ok(_) => {
                self.notifier
                    .success(if editing { MSG_UPDATED } else { MSG_CREATED });
                self.state = SessionState::Viewing;
                // Refetch failure is already surfaced through the notifier
                let _ = self.load().await;
                SubmitOutcome::Saved
            }
            Err(SalonError::Validation(server_errors)) => {
                self.errors = merge_field_errors(local_errors, server_errors);
                self.state = origin;
                SubmitOutcome::InvalidFields
            }
            Err(SalonError::Unauthorized) => {
                self.notifier.error(MSG_SESSION_EXPIRED);
                self.state = origin;
                SubmitOutcome::Unauthorized
            }
            Err(_) => {
                self.notifier
                    .error(if editing { MSG_UPDATE_FAILED } else { MSG_CREATE_FAILED });
                self.state = origin;
                SubmitOutcome::Failed
            }
        }
    }

    /// Delete the event the dialog is editing. Delete failures are not
    /// expected to carry field errors; they surface as one generic
    /// notification and the dialog stays open.
    pub async fn delete(&mut self) -> SubmitOutcome {
        let origin = match &self.state {
            SessionState::Editing { .. } => self.state.clone(),
            _ => return SubmitOutcome::Failed,
        };
        let SessionState::Editing { event } = &origin else {
            return SubmitOutcome::Failed;
        };
        let id = event.id.clone();

        self.state = SessionState::Submitting;

        match self.store.delete(&id).await {
            Ok(()) => {
                self.notifier.success(MSG_DELETED);
                self.state = SessionState::Viewing;
                let _ = self.load().await;
                SubmitOutcome::Saved
            }
            Err(SalonError::Unauthorized) => {
                self.notifier.error(MSG_SESSION_EXPIRED);
                self.state = origin;
                SubmitOutcome::Unauthorized
            }
            Err(_) => {
                self.notifier.error(MSG_DELETE_FAILED);
                self.state = origin;
                SubmitOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventData, EventType};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Clone, Copy, PartialEq)]
    enum FailMode {
        None,
        FieldErrors,
        Opaque,
        Unauthorized,
    }

    #[derive(Default)]
    struct Counters {
        list: Cell<usize>,
        create: Cell<usize>,
        update: Cell<usize>,
        delete: Cell<usize>,
    }

    struct MockStore {
        events: RefCell<Vec<Event>>,
        counters: Rc<Counters>,
        fail: Cell<FailMode>,
    }

    impl MockStore {
        fn with_events(events: Vec<Event>) -> (MockStore, Rc<Counters>) {
            let counters = Rc::new(Counters::default());
            let store = MockStore {
                events: RefCell::new(events),
                counters: counters.clone(),
                fail: Cell::new(FailMode::None),
            };
            (store, counters)
        }

        fn mutation_error(&self) -> Option<SalonError> {
            match self.fail.get() {
                FailMode::None => None,
                FailMode::FieldErrors => Some(SalonError::Validation(vec![FieldError::new(
                    "phone",
                    "Geçerli bir telefon numarası giriniz",
                )])),
                FailMode::Opaque => Some(SalonError::Store("HTTP 500".to_string())),
                FailMode::Unauthorized => Some(SalonError::Unauthorized),
            }
        }
    }

    impl EventStore for MockStore {
        async fn list(&self) -> SalonResult<Vec<Event>> {
            self.counters.list.set(self.counters.list.get() + 1);
            Ok(self.events.borrow().clone())
        }

        async fn get(&self, id: &str) -> SalonResult<Event> {
            self.events
                .borrow()
                .iter()
                .find(|e| e.id == id)
                .cloned()
                .ok_or_else(|| SalonError::Store(format!("Event not found: {id}")))
        }

        async fn create(&self, data: &EventData) -> SalonResult<Event> {
            self.counters.create.set(self.counters.create.get() + 1);
            if let Some(err) = self.mutation_error() {
                return Err(err);
            }

            let event = Event {
                id: format!("mock-{}", self.counters.create.get()),
                data: data.clone(),
                created_date: None,
                updated_date: None,
            };
            self.events.borrow_mut().push(event.clone());
            Ok(event)
        }

        async fn update(&self, id: &str, data: &EventData) -> SalonResult<Event> {
            self.counters.update.set(self.counters.update.get() + 1);
            if let Some(err) = self.mutation_error() {
                return Err(err);
            }

            let mut events = self.events.borrow_mut();
            let event = events
                .iter_mut()
                .find(|e| e.id == id)
                .ok_or_else(|| SalonError::Store(format!("Event not found: {id}")))?;
            event.data = data.clone();
            Ok(event.clone())
        }

        async fn delete(&self, id: &str) -> SalonResult<()> {
            self.counters.delete.set(self.counters.delete.get() + 1);
            if let Some(err) = self.mutation_error() {
                return Err(err);
            }

            self.events.borrow_mut().retain(|e| e.id != id);
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct RecordingNotifier {
        log: Rc<RefCell<Vec<(bool, String)>>>,
    }

    impl RecordingNotifier {
        fn successes(&self) -> Vec<String> {
            self.log
                .borrow()
                .iter()
                .filter(|(ok, _)| *ok)
                .map(|(_, m)| m.clone())
                .collect()
        }

        fn errors(&self) -> Vec<String> {
            self.log
                .borrow()
                .iter()
                .filter(|(ok, _)| !*ok)
                .map(|(_, m)| m.clone())
                .collect()
        }
    }

    impl Notifier for RecordingNotifier {
        fn success(&self, message: &str) {
            self.log.borrow_mut().push((true, message.to_string()));
        }

        fn error(&self, message: &str) {
            self.log.borrow_mut().push((false, message.to_string()));
        }
    }

    fn make_event(id: &str, host: &str) -> Event {
        Event {
            id: id.to_string(),
            data: EventData {
                bride_name: "Ayşe".to_string(),
                bride_surname: "Yılmaz".to_string(),
                groom_name: "Mehmet".to_string(),
                groom_surname: "Demir".to_string(),
                event_date: NaiveDate::from_ymd_opt(2025, 6, 14).unwrap(),
                event_time_start: "14:00".to_string(),
                event_time_finish: "18:00".to_string(),
                event_type: 0,
                hosted_name_surname: host.to_string(),
                phone: "(532) 123 45 67".to_string(),
                number_of_guests: 250,
                description: String::new(),
                title: format!("{host}\n14:00 - 18:00"),
            },
            created_date: None,
            updated_date: None,
        }
    }

    fn make_valid_form() -> EventForm {
        let mut form = EventForm::new();
        form.bride_name = "Ayşe".to_string();
        form.bride_surname = "Yılmaz".to_string();
        form.groom_name = "Mehmet".to_string();
        form.groom_surname = "Demir".to_string();
        form.event_date = NaiveDate::from_ymd_opt(2025, 7, 5);
        form.event_type = Some(EventType::Engagement);
        form.phone = "(532) 123 45 67".to_string();
        form.number_of_guests = Some(120);
        form.set_hosted_name_surname("Ali Kaya", Viewport::wide());
        form.set_event_time_start("14:00", Viewport::wide());
        form.set_event_time_finish("18:00", Viewport::wide());
        form
    }

    fn make_session(
        events: Vec<Event>,
    ) -> (
        Session<MockStore, RecordingNotifier>,
        Rc<Counters>,
        RecordingNotifier,
    ) {
        let (store, counters) = MockStore::with_events(events);
        let notifier = RecordingNotifier::default();
        let session = Session::new(store, notifier.clone(), Viewport::wide());
        (session, counters, notifier)
    }

    #[tokio::test]
    async fn calendar_is_unloaded_until_the_first_fetch() {
        let (mut session, _, _) = make_session(vec![make_event("e1", "Ali Kaya")]);
        assert!(session.calendar_items().is_none());

        session.load().await.unwrap();
        let items = session.calendar_items().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Ali Kaya\n14:00 - 18:00");
        assert_eq!(items[0].background_color, "#DC2626");
    }

    #[tokio::test]
    async fn repeated_loads_yield_the_same_display_state() {
        let (mut session, _, _) = make_session(vec![
            make_event("e1", "Ali Kaya"),
            make_event("e2", "Veli Can"),
        ]);
        session.load().await.unwrap();
        let first = session.calendar_items().unwrap();
        session.load().await.unwrap();
        assert_eq!(session.calendar_items().unwrap(), first);
    }

    #[tokio::test]
    async fn local_validation_errors_block_the_network_call() {
        // Scenario A: eventType unset never reaches the store
        let (mut session, counters, _) = make_session(Vec::new());
        session.load().await.unwrap();

        let date = NaiveDate::from_ymd_opt(2025, 7, 5).unwrap();
        assert!(session.open_compose(date));

        let mut form = make_valid_form();
        form.event_type = None;

        assert_eq!(session.submit(&form).await, SubmitOutcome::InvalidFields);
        assert_eq!(session.state(), &SessionState::Composing { date });
        assert_eq!(counters.create.get(), 0);
        assert_eq!(
            session.field_error("eventType"),
            Some("Etkinlik tipi zorunludur")
        );
    }

    #[tokio::test]
    async fn successful_create_refetches_and_notifies() {
        // Scenario B: create succeeds -> Viewing, exactly one extra list()
        let (mut session, counters, notifier) = make_session(Vec::new());
        session.load().await.unwrap();
        assert_eq!(counters.list.get(), 1);

        session.open_compose(NaiveDate::from_ymd_opt(2025, 7, 5).unwrap());
        assert_eq!(session.submit(&make_valid_form()).await, SubmitOutcome::Saved);

        assert_eq!(session.state(), &SessionState::Viewing);
        assert_eq!(counters.create.get(), 1);
        assert_eq!(counters.list.get(), 2);
        assert_eq!(notifier.successes(), vec!["Event başarıyla eklendi"]);
        assert_eq!(session.calendar_items().unwrap().len(), 1);
        assert!(session.field_errors().is_empty());
    }

    #[tokio::test]
    async fn server_field_errors_reopen_the_dialog_with_messages() {
        // Scenario C: update fails with a phone error; the exact message
        // shows on that field, nothing else, and the dialog stays open.
        let target = make_event("e1", "Ali Kaya");
        let (mut session, counters, _) = make_session(vec![target.clone()]);
        session.load().await.unwrap();

        assert!(session.open_edit("e1"));
        session.store.fail.set(FailMode::FieldErrors);

        assert_eq!(
            session.submit(&make_valid_form()).await,
            SubmitOutcome::InvalidFields
        );
        assert_eq!(session.state(), &SessionState::Editing { event: target });
        assert_eq!(counters.update.get(), 1);
        assert_eq!(session.field_errors().len(), 1);
        assert_eq!(
            session.field_error("phone"),
            Some("Geçerli bir telefon numarası giriniz")
        );
        assert_eq!(session.field_error("brideName"), None);
    }

    #[tokio::test]
    async fn opaque_failures_surface_one_generic_notification() {
        let (mut session, _, notifier) = make_session(Vec::new());
        session.load().await.unwrap();

        let date = NaiveDate::from_ymd_opt(2025, 7, 5).unwrap();
        session.open_compose(date);
        session.store.fail.set(FailMode::Opaque);

        assert_eq!(session.submit(&make_valid_form()).await, SubmitOutcome::Failed);
        assert_eq!(session.state(), &SessionState::Composing { date });
        assert!(session.field_errors().is_empty());
        assert_eq!(
            notifier.errors(),
            vec!["Event eklenirken bir hata oluştu. Lütfen tekrar deneyin."]
        );
    }

    #[tokio::test]
    async fn unauthorized_submit_reports_the_expired_session() {
        let (mut session, _, notifier) = make_session(Vec::new());
        session.load().await.unwrap();

        session.open_compose(NaiveDate::from_ymd_opt(2025, 7, 5).unwrap());
        session.store.fail.set(FailMode::Unauthorized);

        assert_eq!(
            session.submit(&make_valid_form()).await,
            SubmitOutcome::Unauthorized
        );
        assert_eq!(
            notifier.errors(),
            vec!["Oturum süresi doldu, lütfen tekrar giriş yapın"]
        );
    }

    #[tokio::test]
    async fn delete_refetches_on_success_and_stays_open_on_failure() {
        let (mut session, counters, notifier) = make_session(vec![
            make_event("e1", "Ali Kaya"),
            make_event("e2", "Veli Can"),
        ]);
        session.load().await.unwrap();

        assert!(session.open_edit("e1"));
        assert_eq!(session.delete().await, SubmitOutcome::Saved);
        assert_eq!(session.state(), &SessionState::Viewing);
        assert_eq!(counters.list.get(), 2);
        assert_eq!(session.calendar_items().unwrap().len(), 1);
        assert_eq!(notifier.successes(), vec!["Event başarıyla silindi"]);

        assert!(session.open_edit("e2"));
        session.store.fail.set(FailMode::Opaque);
        assert_eq!(session.delete().await, SubmitOutcome::Failed);
        assert!(matches!(session.state(), SessionState::Editing { event } if event.id == "e2"));
        assert_eq!(
            notifier.errors(),
            vec!["Event silinirken bir hata oluştu. Lütfen tekrar deneyin."]
        );
    }

    #[tokio::test]
    async fn close_discards_errors_and_allows_reopening() {
        let (mut session, _, _) = make_session(Vec::new());
        session.load().await.unwrap();

        let date = NaiveDate::from_ymd_opt(2025, 7, 5).unwrap();
        session.open_compose(date);
        session.submit(&EventForm::new()).await;
        assert!(!session.field_errors().is_empty());

        session.close();
        assert_eq!(session.state(), &SessionState::Closed);
        assert!(session.field_errors().is_empty());

        // Dialogs reopen from Closed just like from Viewing
        assert!(session.open_compose(date));
    }

    #[tokio::test]
    async fn edit_snapshots_come_from_the_displayed_list() {
        let (mut session, _, _) = make_session(vec![make_event("e1", "Ali Kaya")]);
        session.load().await.unwrap();

        assert!(!session.open_edit("missing"));
        assert_eq!(session.state(), &SessionState::Viewing);

        assert!(session.open_edit("e1"));
        let draft = session.draft().unwrap();
        assert_eq!(draft.hosted_name_surname, "Ali Kaya");
        assert_eq!(draft.event_type, Some(EventType::Wedding));
    }

    #[tokio::test]
    async fn compose_draft_defaults_to_the_clicked_date() {
        let (mut session, _, _) = make_session(Vec::new());
        session.load().await.unwrap();

        let date = NaiveDate::from_ymd_opt(2025, 7, 5).unwrap();
        session.open_compose(date);
        assert_eq!(session.draft().unwrap().event_date, Some(date));
    }

    #[tokio::test]
    async fn failed_mutations_leave_the_displayed_list_alone() {
        let (mut session, _, notifier) = make_session(vec![make_event("e1", "Ali Kaya")]);
        session.load().await.unwrap();

        session.store.fail.set(FailMode::Opaque);
        session.open_compose(NaiveDate::from_ymd_opt(2025, 7, 5).unwrap());
        session.submit(&make_valid_form()).await;
        assert_eq!(session.calendar_items().unwrap().len(), 1);
        assert_eq!(notifier.errors().len(), 1);
    }
}
