//! Terminal notifier: the session's outcome messages as colored lines.

use owo_colors::OwoColorize;
use salon_core::session::Notifier;

pub struct TermNotifier;

impl Notifier for TermNotifier {
    fn success(&self, message: &str) {
        println!("{} {}", "✓".green(), message.green());
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message.red());
    }
}
