//! Terminal rendering of the form: one labelled line per field with its error
//! text directly underneath.

use crate::form::{FormController, Notifier};

use super::output::{self, MessageKind};

const EMPTY_PLACEHOLDER: &str = "(empty)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLine {
    pub kind: MessageKind,
    pub text: String,
}

impl ScreenLine {
    fn new(kind: MessageKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

pub fn render_lines<N: Notifier>(title: &str, form: &FormController<N>) -> Vec<ScreenLine> {
    let mut lines = vec![ScreenLine::new(MessageKind::Section, title)];
    for (field, value) in form.values().iter() {
        let shown = if value.is_empty() {
            EMPTY_PLACEHOLDER
        } else {
            value
        };
        lines.push(ScreenLine::new(
            MessageKind::Plain,
            format!("  {}: {}", field.label(), shown),
        ));
        if let Some(message) = form.error(field) {
            lines.push(ScreenLine::new(
                MessageKind::FieldError,
                format!("    {}", message),
            ));
        }
    }
    lines
}

pub fn print_screen<N: Notifier>(title: &str, form: &FormController<N>) {
    for line in render_lines(title, form) {
        output::print(line.kind, line.text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{Field, NotificationLog};

    fn texts(lines: &[ScreenLine]) -> Vec<&str> {
        lines.iter().map(|line| line.text.as_str()).collect()
    }

    #[test]
    fn renders_placeholders_for_empty_form() {
        let form = FormController::new(NotificationLog::new());
        let lines = render_lines("Interview", &form);
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0].kind, MessageKind::Section);
        assert_eq!(lines[3].text, "  Birth Date (dd/mm/yyyy): (empty)");
    }

    #[test]
    fn errors_follow_their_field() {
        let mut form = FormController::new(NotificationLog::new());
        form.set_field(Field::Name, "Ada");
        form.set_field(Field::Email, "not-an-email");
        form.submit();
        let lines = render_lines("Interview", &form);
        assert_eq!(
            texts(&lines),
            vec![
                "Interview",
                "  Name: Ada",
                "  Surname: (empty)",
                "    Surname is required",
                "  Birth Date (dd/mm/yyyy): (empty)",
                "    Birth date is required",
                "  Email: not-an-email",
                "    Invalid email format",
                "  Phone Number: (empty)",
                "    Phone number is required",
            ]
        );
        assert_eq!(lines[3].kind, MessageKind::FieldError);
    }
}
