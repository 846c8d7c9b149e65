use crossterm::event::KeyCode;
use tui::{
    backend::Backend,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::forms::{FieldErrors, Form};

pub enum FormEvent {
    Submit,
    Cancel,
    /// A key the editor has no use for, handed back to the screen
    Unhandled(KeyCode),
}

/// Field-by-field editor over any [`Form`]
pub struct FormEditor<F: Form> {
    form: F,
    current: usize,
    editing: bool,
    submittable: bool,
    errors: FieldErrors,
}

impl<F: Form> FormEditor<F> {
    pub fn new(form: F) -> Self {
        Self {
            form,
            current: 0,
            editing: false,
            submittable: true,
            errors: FieldErrors::default(),
        }
    }

    /// An editor whose `s` key does nothing
    pub fn without_submit(mut self) -> Self {
        self.submittable = false;
        self
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn current_field(&self) -> usize {
        self.current
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn set_errors(&mut self, errors: FieldErrors) {
        // Jump to the first failing field
        if let Some(first) = errors.iter().next() {
            if let Some(i) = F::FIELDS.iter().position(|f| f.name == first.field) {
                self.current = i;
            }
        }
        self.errors = errors;
    }

    pub fn clear_errors(&mut self) {
        self.errors = FieldErrors::default();
    }

    pub fn next_field(&mut self) {
        self.current = (self.current + 1) % F::FIELDS.len();
    }

    pub fn previous_field(&mut self) {
        self.current = (self.current + F::FIELDS.len() - 1) % F::FIELDS.len();
    }

    pub fn toggle_editing(&mut self) {
        // Choice fields are cycled, never typed into
        if F::FIELDS[self.current].choices.is_some() {
            self.editing = false;
            return;
        }
        self.editing = !self.editing;
    }

    fn cycle_choice(&mut self, forward: bool) {
        let Some(choices) = F::FIELDS[self.current].choices else {
            return;
        };
        let value = self.form.value_mut(self.current);
        let i = choices.iter().position(|c| *c == value.as_str());
        let next = match (i, forward) {
            (Some(i), true) => (i + 1) % choices.len(),
            (Some(i), false) => (i + choices.len() - 1) % choices.len(),
            (None, _) => 0,
        };
        *value = choices[next].to_string();
    }

    fn edit_current_field(&mut self, key: KeyCode) {
        let value = self.form.value_mut(self.current);
        match key {
            KeyCode::Char(c) => value.push(c),
            KeyCode::Backspace => {
                value.pop();
            }
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Option<FormEvent> {
        if self.editing {
            match key {
                KeyCode::Enter | KeyCode::Esc => self.toggle_editing(),
                _ => self.edit_current_field(key),
            }
            return None;
        }

        match key {
            KeyCode::Esc => return Some(FormEvent::Cancel),
            KeyCode::Enter => self.toggle_editing(),
            KeyCode::Up => self.previous_field(),
            KeyCode::Down | KeyCode::Tab => self.next_field(),
            KeyCode::Left => self.cycle_choice(false),
            KeyCode::Right => self.cycle_choice(true),
            KeyCode::Char('s') if self.submittable => return Some(FormEvent::Submit),
            other => return Some(FormEvent::Unhandled(other)),
        }
        None
    }

    pub fn help_text(&self) -> &'static str {
        if self.editing {
            "Enter/Esc - Done editing"
        } else if self.submittable {
            "Enter - Edit field | Up/Down - Navigate fields | Left/Right - Change choice | S - Submit | Esc - Cancel"
        } else {
            "Enter - Edit field | Up/Down - Navigate fields | Esc - Close"
        }
    }
}

pub fn render_form_editor<B: Backend, F: Form>(
    f: &mut Frame<B>,
    editor: &FormEditor<F>,
    area: Rect,
    title: &str,
) {
    let mut items: Vec<ListItem> = Vec::new();

    for (i, field) in F::FIELDS.iter().enumerate() {
        let raw = editor.form.value(i);
        let shown = if field.secret {
            "•".repeat(raw.chars().count())
        } else if field.choices.is_some() {
            format!("< {} >", raw)
        } else {
            raw.to_string()
        };

        let selected = i == editor.current;
        let label_style = if selected {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let value = if selected && editor.editing {
            Span::styled(format!("{}|", shown), Style::default().add_modifier(Modifier::BOLD))
        } else {
            Span::raw(shown)
        };

        let mut lines = vec![Spans::from(vec![
            Span::styled(format!("{}: ", field.label), label_style),
            value,
        ])];
        if let Some(message) = editor.errors.get(field.name) {
            lines.push(Spans::from(Span::styled(
                format!("  {}", message),
                Style::default().fg(Color::Red),
            )));
        }

        items.push(ListItem::new(lines));
    }

    let form_list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_string()),
    );

    f.render_widget(form_list, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{LoginForm, RegisterForm};

    fn type_text<F: Form>(editor: &mut FormEditor<F>, text: &str) {
        editor.handle_key(KeyCode::Enter);
        for c in text.chars() {
            editor.handle_key(KeyCode::Char(c));
        }
        editor.handle_key(KeyCode::Enter);
    }

    #[test]
    fn typing_fills_the_current_field() {
        let mut editor = FormEditor::new(LoginForm::default());
        type_text(&mut editor, "jane@example.com");
        editor.handle_key(KeyCode::Down);
        type_text(&mut editor, "secrets!x");
        editor.handle_key(KeyCode::Enter);
        editor.handle_key(KeyCode::Backspace);
        editor.handle_key(KeyCode::Enter);

        assert_eq!(editor.form().email, "jane@example.com");
        assert_eq!(editor.form().password, "secrets!");
    }

    #[test]
    fn s_submits_only_outside_edit_mode() {
        let mut editor = FormEditor::new(LoginForm::default());
        assert!(matches!(editor.handle_key(KeyCode::Char('s')), Some(FormEvent::Submit)));

        editor.handle_key(KeyCode::Enter);
        assert!(editor.handle_key(KeyCode::Char('s')).is_none());
        assert_eq!(editor.form().email, "s");
    }

    #[test]
    fn choice_fields_cycle_and_never_enter_edit_mode() {
        let mut editor = FormEditor::new(RegisterForm::default());
        for _ in 0..3 {
            editor.handle_key(KeyCode::Down);
        }
        editor.handle_key(KeyCode::Enter);
        assert!(!editor.is_editing());

        editor.handle_key(KeyCode::Right);
        assert_eq!(editor.form().account_type, "business");
        editor.handle_key(KeyCode::Right);
        assert_eq!(editor.form().account_type, "user");
        editor.handle_key(KeyCode::Left);
        assert_eq!(editor.form().account_type, "business");
    }

    #[test]
    fn errors_move_focus_to_first_bad_field() {
        let mut editor = FormEditor::new(LoginForm::default());
        editor.handle_key(KeyCode::Down);
        let errors = LoginForm {
            email: "bad".into(),
            password: "x".into(),
        }
        .check()
        .unwrap_err();

        editor.set_errors(errors);

        assert_eq!(editor.current_field(), 0);
        assert!(editor.errors().get("password").is_some());
    }

    #[test]
    fn unhandled_keys_are_returned() {
        let mut editor = FormEditor::new(LoginForm::default()).without_submit();
        assert!(matches!(
            editor.handle_key(KeyCode::Char('s')),
            Some(FormEvent::Unhandled(KeyCode::Char('s')))
        ));
    }
}
