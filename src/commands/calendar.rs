use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use salon_core::Viewport;

use super::open_session;
use crate::render::render_month;

pub async fn run(month: Option<&str>, viewport: Viewport) -> Result<()> {
    let (year, month) = parse_month(month)?;

    let Some(session) = open_session(viewport).await? else {
        return Ok(());
    };

    let items = session.calendar_items().unwrap_or_default();
    println!("{}", render_month(&items, year, month));
    Ok(())
}

pub(super) fn parse_month(arg: Option<&str>) -> Result<(i32, u32)> {
    match arg {
        None => {
            let today = Local::now().date_naive();
            Ok((today.year(), today.month()))
        }
        Some(s) => {
            let parsed = NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
                .map_err(|_| anyhow::anyhow!("Geçersiz ay '{s}', beklenen biçim: YYYY-AA"))?;
            Ok((parsed.year(), parsed.month()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_argument_parses() {
        assert_eq!(parse_month(Some("2025-06")).unwrap(), (2025, 6));
        assert!(parse_month(Some("haziran")).is_err());
        assert!(parse_month(Some("2025-13")).is_err());
    }
}
