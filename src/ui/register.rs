use crossterm::event::KeyCode;
use tui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::actions::SubmitError;
use crate::forms::RegisterForm;
use crate::route::Route;
use crate::ui::centered_rect;
use crate::ui::components::form_editor::{render_form_editor, FormEditor, FormEvent};

pub enum RegisterAction {
    Submit(RegisterForm),
    Go(Route),
}

pub struct RegisterState {
    editor: FormEditor<RegisterForm>,
}

impl RegisterState {
    pub fn new() -> Self {
        Self {
            editor: FormEditor::new(RegisterForm::default()),
        }
    }

    pub fn is_capturing_text(&self) -> bool {
        self.editor.is_editing()
    }

    pub fn help_text(&self) -> &'static str {
        self.editor.help_text()
    }

    pub fn rejected(&mut self, error: SubmitError) {
        if let SubmitError::Invalid(errors) = error {
            self.editor.set_errors(errors);
        }
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Option<RegisterAction> {
        match self.editor.handle_key(key)? {
            FormEvent::Submit => {
                self.editor.clear_errors();
                Some(RegisterAction::Submit(self.editor.form().clone()))
            }
            FormEvent::Cancel => Some(RegisterAction::Go(Route::Home)),
            FormEvent::Unhandled(KeyCode::Char('l')) => Some(RegisterAction::Go(Route::Login)),
            FormEvent::Unhandled(_) => None,
        }
    }
}

pub fn render_register<B: Backend>(f: &mut Frame<B>, state: &RegisterState, area: Rect) {
    let area = centered_rect(60, 70, area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(1)])
        .split(area);

    render_form_editor(f, &state.editor, chunks[0], "Create an account");

    let hint = Paragraph::new("Already have an account? Press L to log in.")
        .style(Style::default().fg(Color::Gray));
    f.render_widget(hint, chunks[1]);
}
