use anyhow::Result;
use chrono::Datelike;
use salon_core::Viewport;

use super::open_session;
use crate::render::Render;

pub async fn run(month: Option<&str>, viewport: Viewport) -> Result<()> {
    let filter = match month {
        Some(m) => Some(super::calendar::parse_month(Some(m))?),
        None => None,
    };

    let Some(session) = open_session(viewport).await? else {
        return Ok(());
    };

    let mut events: Vec<_> = session.events().unwrap_or_default().to_vec();
    if let Some((year, mon)) = filter {
        events.retain(|e| e.data.event_date.year() == year && e.data.event_date.month() == mon);
    }
    events.sort_by_key(|e| (e.data.event_date, e.data.event_time_start.clone()));

    if events.is_empty() {
        println!("Kayıtlı etkinlik yok.");
        return Ok(());
    }

    for event in &events {
        println!("{}", event.render());
    }
    Ok(())
}
