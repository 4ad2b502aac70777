//! Shell state, command dispatch, and error reporting.

use dialoguer::{theme::ColorfulTheme, Confirm};
use strsim::levenshtein;

use crate::config::{Config, ConfigManager};
use crate::errors::{CliError, CommandError, FormError};
use crate::form::{Field, FormController};

use super::commands;
use super::notifier::TerminalNotifier;
use super::output;
use super::registry::CommandRegistry;
use super::screen;

const SUGGESTION_DISTANCE: usize = 3;

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub form: FormController<TerminalNotifier>,
    pub config_manager: ConfigManager,
    pub config: Config,
    rendered_revision: Option<u64>,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        Self::with_config_manager(mode, ConfigManager::new())
    }

    pub fn with_config_manager(
        mode: CliMode,
        config_manager: ConfigManager,
    ) -> Result<Self, CliError> {
        let config = config_manager.load()?;
        tracing::debug!(
            path = %config_manager.path().display(),
            mode = config.validation_mode.as_str(),
            "configuration loaded"
        );
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);
        let form = FormController::with_config(&config, TerminalNotifier);
        Ok(Self {
            mode,
            registry,
            form,
            config_manager,
            config,
            rendered_revision: None,
        })
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn render(&mut self) {
        screen::print_screen(&self.config.title, &self.form);
        self.rendered_revision = Some(self.form.revision());
    }

    /// Redraws the form in interactive mode whenever its state moved.
    pub fn refresh(&mut self) {
        if self.mode != CliMode::Interactive {
            return;
        }
        if self.rendered_revision != Some(self.form.revision()) {
            self.render();
        }
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));
        if let Some(best) = closest(self.registry.names(), input) {
            output::info(format!("Suggestion: `{}`?", best));
        }
    }

    pub(crate) fn suggest_field(&self, input: &str) {
        output::info(format!("Fields: {}", Field::keys().collect::<Vec<_>>().join(", ")));
        if let Some(best) = closest(Field::keys(), input) {
            output::info(format!("Suggestion: `{}`?", best));
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script || self.form.values().is_blank() {
            return Ok(true);
        }
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Discard the entered values and exit?")
            .default(false)
            .interact()
            .map_err(CliError::from)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::Form(FormError::UnknownField(name)) => {
                output::error(format!("Unknown field `{}`.", name));
                self.suggest_field(&name);
            }
            CommandError::ExitRequested => {}
            other => output::error(other),
        }
        Ok(())
    }
}

fn closest<'a>(candidates: impl Iterator<Item = &'a str>, input: &str) -> Option<&'a str> {
    let needle = input.to_ascii_lowercase();
    candidates
        .map(|candidate| (levenshtein(&candidate.to_ascii_lowercase(), &needle), candidate))
        .min_by_key(|(distance, _)| *distance)
        .filter(|(distance, _)| *distance <= SUGGESTION_DISTANCE)
        .map(|(_, candidate)| candidate)
}
