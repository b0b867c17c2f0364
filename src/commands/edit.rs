use anyhow::Result;
use salon_core::Viewport;

use super::{open_session, submit_loop};

pub async fn run(id: &str, viewport: Viewport) -> Result<()> {
    let Some(mut session) = open_session(viewport).await? else {
        return Ok(());
    };
    if !session.open_edit(id) {
        anyhow::bail!("Bu id ile bir etkinlik bulunamadı: {id}");
    }

    submit_loop(&mut session, viewport).await
}
