//! Terminal rendering for salon types.
//!
//! This is the calendar-rendering collaborator: it lays out
//! `CalendarItem`s into a Monday-first month grid and renders event list
//! lines, using the color triples the items carry. It never mutates the
//! items and never talks to the store.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use owo_colors::OwoColorize;
use salon_core::colors::colors_for;
use salon_core::{CalendarItem, Event, EventType};

const CELL_WIDTH: usize = 14;

const MONTHS: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül", "Ekim",
    "Kasım", "Aralık",
];

const DAY_NAMES: [&str; 7] = ["Pzt", "Sal", "Çar", "Per", "Cum", "Cmt", "Paz"];

/// Extension trait for colored terminal rendering.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let scheme = colors_for(self.data.event_type);
        let (r, g, b) = rgb(scheme.background);
        let label = EventType::from_code(self.data.event_type)
            .map(|t| t.label())
            .unwrap_or("?");
        let time = format!(
            "{} - {}",
            self.data.event_time_start, self.data.event_time_finish
        );

        format!(
            "{} {}  {}  {}  {} {}",
            "■".truecolor(r, g, b),
            self.data.event_date,
            time.dimmed(),
            pad(label, 6),
            self.data.hosted_name_surname,
            format!("({} kişi) [{}]", self.data.number_of_guests, self.id).dimmed(),
        )
    }
}

/// Render a Monday-first month grid with one line per event under each
/// day number.
pub fn render_month(items: &[CalendarItem], year: i32, month: u32) -> String {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return String::new();
    };

    let mut by_day: BTreeMap<u32, Vec<&CalendarItem>> = BTreeMap::new();
    for item in items {
        if item.date.year() == year && item.date.month() == month {
            by_day.entry(item.date.day()).or_default().push(item);
        }
    }

    let mut out = String::new();
    out.push_str(&format!("{} {}\n", MONTHS[(month - 1) as usize], year));
    for name in DAY_NAMES {
        out.push_str(&pad(name, CELL_WIDTH));
        out.push(' ');
    }
    out.push('\n');

    let days = days_in_month(year, month);
    let offset = first.weekday().num_days_from_monday();

    let mut day: i64 = 1 - offset as i64;
    while day <= days as i64 {
        let week: Vec<Option<u32>> = (0..7)
            .map(|i| {
                let d = day + i;
                if d >= 1 && d <= days as i64 { Some(d as u32) } else { None }
            })
            .collect();

        let height = 1 + week
            .iter()
            .flatten()
            .map(|d| by_day.get(d).map_or(0, |v| v.len()))
            .max()
            .unwrap_or(0);

        for line in 0..height {
            for slot in &week {
                out.push_str(&render_cell_line(*slot, line, &by_day));
                out.push(' ');
            }
            // Cells are padded; drop the trailing run of spaces per row
            while out.ends_with(' ') {
                out.pop();
            }
            out.push('\n');
        }

        day += 7;
    }

    out
}

fn render_cell_line(
    day: Option<u32>,
    line: usize,
    by_day: &BTreeMap<u32, Vec<&CalendarItem>>,
) -> String {
    let Some(day) = day else {
        return " ".repeat(CELL_WIDTH);
    };

    if line == 0 {
        return pad(&day.to_string(), CELL_WIDTH);
    }

    let Some(item) = by_day.get(&day).and_then(|v| v.get(line - 1)) else {
        return " ".repeat(CELL_WIDTH);
    };

    // First title line only; the grid has no room for the time range
    let name = item.title.lines().next().unwrap_or_default();
    let text = pad(&format!("• {name}"), CELL_WIDTH);
    let (r, g, b) = rgb(item.background_color);
    text.truecolor(r, g, b).to_string()
}

/// Pad (or truncate) to a fixed visible width. Applied before coloring so
/// ANSI escapes never skew the layout.
fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.chars().take(width).collect()
    } else {
        format!("{}{}", text, " ".repeat(width - len))
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next.and_then(|d| d.pred_opt()).map_or(30, |d| d.day())
}

fn rgb(color: &str) -> (u8, u8, u8) {
    if let Some(hex) = color.strip_prefix('#') {
        if hex.len() == 6 {
            let channel = |range| u8::from_str_radix(&hex[range], 16);
            if let (Ok(r), Ok(g), Ok(b)) = (channel(0..2), channel(2..4), channel(4..6)) {
                return (r, g, b);
            }
        }
    }
    // Named colors on the scheme ("white") and anything unparsable
    (255, 255, 255)
}
