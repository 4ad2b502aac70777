use crate::form::Notifier;

use super::output;

/// Shows submission results in the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&mut self, title: &str, message: &str) {
        output::section(title);
        for line in message.lines() {
            println!("{line}");
        }
    }
}
