use crossterm::event::KeyCode;
use tui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::actions::SubmitError;
use crate::forms::LoginForm;
use crate::route::Route;
use crate::ui::centered_rect;
use crate::ui::components::form_editor::{render_form_editor, FormEditor, FormEvent};

pub enum LoginAction {
    Submit(LoginForm),
    Go(Route),
}

pub struct LoginState {
    editor: FormEditor<LoginForm>,
}

impl LoginState {
    pub fn new() -> Self {
        Self {
            editor: FormEditor::new(LoginForm::default()),
        }
    }

    pub fn is_capturing_text(&self) -> bool {
        self.editor.is_editing()
    }

    pub fn help_text(&self) -> &'static str {
        self.editor.help_text()
    }

    /// Field errors come back onto the form; anything else is a notice
    pub fn rejected(&mut self, error: SubmitError) {
        if let SubmitError::Invalid(errors) = error {
            self.editor.set_errors(errors);
        }
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Option<LoginAction> {
        match self.editor.handle_key(key)? {
            FormEvent::Submit => {
                self.editor.clear_errors();
                Some(LoginAction::Submit(self.editor.form().clone()))
            }
            FormEvent::Cancel => Some(LoginAction::Go(Route::Home)),
            FormEvent::Unhandled(KeyCode::Char('r')) => Some(LoginAction::Go(Route::Register)),
            FormEvent::Unhandled(_) => None,
        }
    }
}

pub fn render_login<B: Backend>(f: &mut Frame<B>, state: &LoginState, area: Rect) {
    let area = centered_rect(60, 60, area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(1)])
        .split(area);

    render_form_editor(f, &state.editor, chunks[0], "Welcome back");

    let hint = Paragraph::new("Don't have an account? Press R to sign up.")
        .style(Style::default().fg(Color::Gray));
    f.render_widget(hint, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::Form;

    #[test]
    fn submit_hands_over_the_typed_form() {
        let mut state = LoginState::new();
        state.handle_key(KeyCode::Enter);
        for c in "jane@example.com".chars() {
            state.handle_key(KeyCode::Char(c));
        }
        state.handle_key(KeyCode::Enter);

        let Some(LoginAction::Submit(form)) = state.handle_key(KeyCode::Char('s')) else {
            panic!("expected submit");
        };
        assert_eq!(form.email, "jane@example.com");
    }

    #[test]
    fn rejected_fields_show_on_the_form() {
        let mut state = LoginState::new();
        let errors = LoginForm::default().check().unwrap_err();
        state.rejected(SubmitError::Invalid(errors));
        assert!(state.editor.errors().get("email").is_some());
    }

    #[test]
    fn r_switches_to_sign_up() {
        let mut state = LoginState::new();
        assert!(matches!(
            state.handle_key(KeyCode::Char('r')),
            Some(LoginAction::Go(Route::Register))
        ));
    }
}
