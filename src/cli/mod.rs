pub mod commands;
pub mod context;
pub mod notifier;
pub mod output;
pub mod registry;
pub mod screen;
mod shell;

pub use context::{CliMode, ShellContext};
pub use notifier::TerminalNotifier;
pub use shell::{run_cli, SCRIPT_MODE_ENV};
