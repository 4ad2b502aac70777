use crate::errors::CommandError;
use crate::form::{Field, SubmitOutcome, ValidationMode};

use super::context::{CommandResult, ShellContext};
use super::output;
use super::registry::{CommandEntry, CommandRegistry};

pub fn register_all(registry: &mut CommandRegistry) {
    registry.register(CommandEntry::new(
        "set",
        "Set the value of a field",
        "set <field> <value...>",
        cmd_set,
    ));
    registry.register(CommandEntry::new(
        "clear",
        "Empty a single field",
        "clear <field>",
        cmd_clear,
    ));
    registry.register(CommandEntry::new(
        "show",
        "Display the form with current values and errors",
        "show",
        cmd_show,
    ));
    registry.register(CommandEntry::new(
        "submit",
        "Validate and submit the form",
        "submit",
        cmd_submit,
    ));
    registry.register(CommandEntry::new(
        "reset",
        "Clear every field and error",
        "reset",
        cmd_reset,
    ));
    registry.register(CommandEntry::new(
        "mode",
        "Show or change when fields are validated",
        "mode [on-submit|on-change]",
        cmd_mode,
    ));
    registry.register(CommandEntry::new(
        "config",
        "Show the configuration file and its values",
        "config",
        cmd_config,
    ));
    registry.register(CommandEntry::new(
        "help",
        "List commands or describe one",
        "help [command]",
        cmd_help,
    ));
    registry.register(CommandEntry::new("exit", "Leave the shell", "exit", cmd_exit));
    registry.register(CommandEntry::new("quit", "Leave the shell", "quit", cmd_exit));
}

fn usage_error(context: &ShellContext, name: &str) -> CommandError {
    let usage = context
        .registry
        .get(name)
        .map(|entry| entry.usage)
        .unwrap_or(name);
    CommandError::InvalidArguments(format!("Usage: {}", usage))
}

fn cmd_set(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((name, rest)) = args.split_first() else {
        return Err(usage_error(context, "set"));
    };
    if rest.is_empty() {
        return Err(usage_error(context, "set"));
    }
    let value = rest.join(" ");
    let field = context.form.set_field_by_name(name, value)?;
    // Only on-change mode re-checks the field; in on-submit mode the stored
    // error belongs to the last submit.
    if context.form.mode() == ValidationMode::OnChange {
        if let Some(message) = context.form.error(field) {
            output::warning(format!("{}: {}", field.label(), message));
        }
    }
    Ok(())
}

fn cmd_clear(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [name] = args else {
        return Err(usage_error(context, "clear"));
    };
    context.form.set_field_by_name(name, String::new())?;
    Ok(())
}

fn cmd_show(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.render();
    Ok(())
}

fn cmd_submit(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    match context.form.submit() {
        SubmitOutcome::Submitted(_) => {
            output::success("Form submitted. All fields were cleared.");
        }
        SubmitOutcome::Rejected(errors) => {
            output::warning(format!(
                "Form not submitted: {} field(s) need attention.",
                errors.len()
            ));
            for error in &errors {
                output::warning(format!("{}: {}", error.field.label(), error.message));
            }
        }
    }
    Ok(())
}

fn cmd_reset(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.form.reset();
    output::info("Form cleared.");
    Ok(())
}

fn parse_mode(raw: &str) -> Option<ValidationMode> {
    match raw.to_ascii_lowercase().as_str() {
        "on-submit" | "submit" => Some(ValidationMode::OnSubmit),
        "on-change" | "change" => Some(ValidationMode::OnChange),
        _ => None,
    }
}

fn cmd_mode(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {
            output::info(format!("Validation mode: {}", context.form.mode().as_str()));
            Ok(())
        }
        [raw] => {
            let mode = parse_mode(raw).ok_or_else(|| usage_error(context, "mode"))?;
            context.form.set_mode(mode);
            context.config.validation_mode = mode;
            context.config_manager.save(&context.config)?;
            output::success(format!("Validation mode set to {}.", mode.as_str()));
            Ok(())
        }
        _ => Err(usage_error(context, "mode")),
    }
}

fn cmd_config(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Configuration");
    output::info(format!("  File: {}", context.config_manager.path().display()));
    output::info(format!("  Title: {}", context.config.title));
    output::info(format!(
        "  Notification title: {}",
        context.config.notification_title
    ));
    output::info(format!(
        "  Validation mode: {}",
        context.config.validation_mode.as_str()
    ));
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first() {
        Some(name) => {
            let key = name.to_ascii_lowercase();
            match context.registry.get(&key) {
                Some(entry) => {
                    output::section(format!("Help: {}", entry.name));
                    output::info(format!("  Description: {}", entry.description));
                    output::info(format!("  Usage: {}", entry.usage));
                }
                None => context.suggest_command(name),
            }
        }
        None => {
            output::section("Available commands");
            for entry in context.registry.list() {
                output::info(format!("  {:<8} {}", entry.name, entry.description));
            }
            output::info(format!(
                "Fields: {}",
                Field::keys().collect::<Vec<_>>().join(", ")
            ));
        }
    }
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
