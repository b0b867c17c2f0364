//! Interactive event form.
//!
//! Prompts for every booking field, prefilled from the current draft so a
//! rejected submission re-prompts with the previous answers intact. All
//! enforcement lives in the core validation; the prompts only parse.

use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;
use salon_core::{EventForm, EventType, FieldError, Viewport};

/// Walk the draft through every field prompt.
pub fn prompt(draft: &mut EventForm, viewport: Viewport) -> Result<()> {
    println!("{}", "Gelin Bilgileri".bold());
    draft.bride_name = prompt_text("  Ad", &draft.bride_name)?;
    draft.bride_surname = prompt_text("  Soyad", &draft.bride_surname)?;

    println!("{}", "Damat Bilgileri".bold());
    draft.groom_name = prompt_text("  Ad", &draft.groom_name)?;
    draft.groom_surname = prompt_text("  Soyad", &draft.groom_surname)?;

    println!("{}", "Etkinlik".bold());
    draft.event_type = Some(prompt_event_type(draft.event_type)?);
    draft.event_date = Some(prompt_date("  Tarih (YYYY-AA-GG)", draft.event_date)?);

    let start = prompt_text("  Başlangıç saati (SS:DD)", &draft.event_time_start)?;
    draft.set_event_time_start(start, viewport);
    let finish = prompt_text("  Bitiş saati (SS:DD)", &draft.event_time_finish)?;
    draft.set_event_time_finish(finish, viewport);

    println!("{}", "Sözleşme".bold());
    let host = prompt_text("  Sözleşme sahibi adı soyadı", &draft.hosted_name_surname)?;
    draft.set_hosted_name_surname(host, viewport);
    draft.phone = prompt_text("  Telefon (5xx) xxx xx xx", &draft.phone)?;
    draft.number_of_guests = Some(prompt_guests(draft.number_of_guests)?);
    draft.description = prompt_optional("  Açıklama", &draft.description)?;

    Ok(())
}

/// Print the field errors of a rejected submission.
pub fn print_field_errors(errors: &[FieldError]) {
    for error in errors {
        eprintln!("  {} {}", "✗".red(), error.message.red());
    }
}

fn prompt_text(label: &str, current: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(label)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

fn prompt_optional(label: &str, current: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(format!("{label} (boş bırakılabilir)"))
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

fn prompt_event_type(current: Option<EventType>) -> Result<EventType> {
    let labels: Vec<&str> = EventType::ALL.iter().map(|t| t.label()).collect();
    let default = current.map(|t| t.code() as usize).unwrap_or(0);

    let index = Select::new()
        .with_prompt("  Etkinlik tipi")
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(EventType::ALL[index])
}

fn prompt_date(label: &str, current: Option<NaiveDate>) -> Result<NaiveDate> {
    let mut initial = current.map(|d| d.to_string()).unwrap_or_default();
    loop {
        let input: String = Input::new()
            .with_prompt(label)
            .with_initial_text(initial.as_str())
            .interact_text()?;

        match NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d") {
            Ok(date) => return Ok(date),
            Err(_) => {
                eprintln!("  {}", "Geçersiz tarih, örnek: 2025-06-14".red());
                initial = input;
            }
        }
    }
}

fn prompt_guests(current: Option<i32>) -> Result<i32> {
    let value: i32 = Input::new()
        .with_prompt("  Misafir sayısı")
        .default(current.unwrap_or(0))
        .interact_text()?;
    Ok(value)
}
