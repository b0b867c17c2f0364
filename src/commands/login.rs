use anyhow::Result;
use owo_colors::OwoColorize;
use salon_core::config::SalonConfig;

pub fn login(token: &str) -> Result<()> {
    SalonConfig::save_token(token)?;
    println!("{}", "Giriş bilgisi kaydedildi".green());
    Ok(())
}

pub fn logout() -> Result<()> {
    SalonConfig::clear_token()?;
    println!("{}", "Giriş bilgisi silindi".green());
    Ok(())
}
