use anyhow::Result;
use dialoguer::Confirm;
use salon_core::Viewport;
use salon_core::session::{SessionState, SubmitOutcome};

use super::{handle_unauthorized, open_session};

pub async fn run(id: &str, yes: bool, viewport: Viewport) -> Result<()> {
    let Some(mut session) = open_session(viewport).await? else {
        return Ok(());
    };
    if !session.open_edit(id) {
        anyhow::bail!("Bu id ile bir etkinlik bulunamadı: {id}");
    }

    if !yes {
        let host = match session.state() {
            SessionState::Editing { event } => event.data.hosted_name_surname.clone(),
            _ => String::new(),
        };
        let confirmed = Confirm::new()
            .with_prompt(format!("{host} etkinliği silinsin mi?"))
            .default(false)
            .interact()?;
        if !confirmed {
            session.close();
            return Ok(());
        }
    }

    if session.delete().await == SubmitOutcome::Unauthorized {
        handle_unauthorized()?;
    }
    Ok(())
}
