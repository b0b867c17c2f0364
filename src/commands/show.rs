use anyhow::Result;
use owo_colors::OwoColorize;
use salon_core::config::SalonConfig;
use salon_core::store::{Backend, EventStore};
use salon_core::{EventType, SalonError};

use super::{create_spinner, handle_unauthorized};

pub async fn run(id: &str, json: bool) -> Result<()> {
    let config = SalonConfig::load()?;
    let store = Backend::from_config(&config)?;

    let spinner = create_spinner("Etkinlik getiriliyor...");
    let result = store.get(id).await;
    spinner.finish_and_clear();

    let event = match result {
        Ok(event) => event,
        Err(SalonError::Unauthorized) => {
            handle_unauthorized()?;
            return Ok(());
        }
        Err(err) => anyhow::bail!("{err}"),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&event)?);
        return Ok(());
    }

    let data = &event.data;
    let type_label = EventType::from_code(data.event_type)
        .map(|t| t.label())
        .unwrap_or("?");

    println!("{} {}", "Etkinlik".bold(), event.id.dimmed());
    println!("  Tip:        {type_label}");
    println!(
        "  Tarih:      {} {} - {}",
        data.event_date, data.event_time_start, data.event_time_finish
    );
    println!("  Gelin:      {} {}", data.bride_name, data.bride_surname);
    println!("  Damat:      {} {}", data.groom_name, data.groom_surname);
    println!("  Sözleşme:   {}", data.hosted_name_surname);
    println!("  Telefon:    {}", data.phone);
    println!("  Misafir:    {}", data.number_of_guests);
    if !data.description.is_empty() {
        println!("  Açıklama:   {}", data.description);
    }
    if let Some(created) = event.created_date {
        println!("  {}", format!("Kayıt: {created}").dimmed());
    }
    Ok(())
}
