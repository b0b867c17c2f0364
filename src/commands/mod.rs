pub mod add;
pub mod calendar;
pub mod delete;
pub mod edit;
pub mod list;
pub mod login;
pub mod show;

use std::time::Duration;

use anyhow::Result;
use indicatif::ProgressBar;
use salon_core::config::SalonConfig;
use salon_core::session::{Session, SubmitOutcome};
use salon_core::store::Backend;
use salon_core::{SalonError, Viewport};

use crate::notify::TermNotifier;

pub fn create_spinner(message: impl Into<String>) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message.into());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Open a session against the configured backend and run the initial
/// fetch, with a spinner while it is outstanding. Returns `None` when the
/// fetch failed; the session has already notified, and a 401 additionally
/// discards the saved token.
pub async fn open_session(viewport: Viewport) -> Result<Option<Session<Backend, TermNotifier>>> {
    let config = SalonConfig::load()?;
    let store = Backend::from_config(&config)?;
    let mut session = Session::new(store, TermNotifier, viewport);

    let spinner = create_spinner("Etkinlikler yükleniyor...");
    let result = session.load().await;
    spinner.finish_and_clear();

    match result {
        Ok(()) => Ok(Some(session)),
        Err(SalonError::Unauthorized) => {
            handle_unauthorized()?;
            Ok(None)
        }
        Err(_) => Ok(None),
    }
}

/// The 401 policy: drop the stale token and point at the login entry.
pub fn handle_unauthorized() -> Result<()> {
    SalonConfig::clear_token()?;
    println!("Kayıtlı oturum bilgisi silindi. Tekrar giriş için: salon login <TOKEN>");
    Ok(())
}

/// Prompt, submit, and re-prompt while the form has field errors. The
/// draft keeps the previous answers between attempts.
pub async fn submit_loop(
    session: &mut Session<Backend, TermNotifier>,
    viewport: Viewport,
) -> Result<()> {
    let Some(mut draft) = session.draft() else {
        return Ok(());
    };

    loop {
        crate::form::prompt(&mut draft, viewport)?;
        match session.submit(&draft).await {
            SubmitOutcome::Saved | SubmitOutcome::Failed => return Ok(()),
            SubmitOutcome::InvalidFields => {
                crate::form::print_field_errors(session.field_errors());
            }
            SubmitOutcome::Unauthorized => {
                handle_unauthorized()?;
                return Ok(());
            }
        }
    }
}
