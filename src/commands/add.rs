use anyhow::Result;
use chrono::{Local, NaiveDate};
use salon_core::Viewport;

use super::{open_session, submit_loop};

pub async fn run(date: Option<&str>, viewport: Viewport) -> Result<()> {
    let date = match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| anyhow::anyhow!("Geçersiz tarih '{s}', beklenen biçim: YYYY-AA-GG"))?,
        None => Local::now().date_naive(),
    };

    let Some(mut session) = open_session(viewport).await? else {
        return Ok(());
    };
    if !session.open_compose(date) {
        anyhow::bail!("Form açılamadı");
    }

    submit_loop(&mut session, viewport).await
}
