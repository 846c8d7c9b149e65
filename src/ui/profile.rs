use crossterm::event::KeyCode;
use tui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, Borders, Tabs},
    Frame,
};

use crate::actions::{Notice, SubmitError};
use crate::forms::ProfileForm;
use crate::models::ProfileView;
use crate::ui::components::form_editor::{render_form_editor, FormEditor, FormEvent};
use crate::ui::{heading, text_panel};

const TABS: [&str; 2] = ["Profile", "Job History"];

pub enum ProfileAction {
    Save(ProfileForm),
}

pub struct ProfileState {
    /// `None` until a fetch succeeds
    view: Option<ProfileView>,
    tab: usize,
    editor: Option<FormEditor<ProfileForm>>,
}

impl ProfileState {
    pub fn new(view: Option<ProfileView>) -> Self {
        Self {
            view,
            tab: 0,
            editor: None,
        }
    }

    pub fn view(&self) -> Option<&ProfileView> {
        self.view.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    pub fn is_capturing_text(&self) -> bool {
        self.editor.as_ref().is_some_and(FormEditor::is_editing)
    }

    pub fn help_text(&self) -> &'static str {
        match &self.editor {
            Some(editor) => editor.help_text(),
            None if self.view.is_some() => {
                "Left/Right - Tabs | E - Edit profile | M - Menu | Q - Quit"
            }
            None => "M - Menu | Q - Quit",
        }
    }

    /// The update went through; leave edit mode and show the re-fetched data.
    /// When the re-fetch failed the submitted values are shown instead and
    /// the fetch notice is handed back.
    pub fn saved(
        &mut self,
        submitted: &ProfileForm,
        refreshed: Result<ProfileView, Notice>,
    ) -> Option<Notice> {
        self.editor = None;
        match refreshed {
            Ok(view) => {
                self.view = Some(view);
                None
            }
            Err(notice) => {
                let view = self.view.get_or_insert_with(ProfileView::default);
                submitted.apply_to(view);
                Some(notice)
            }
        }
    }

    /// The update was refused; the form stays open
    pub fn save_failed(&mut self, error: SubmitError) {
        if let (Some(editor), SubmitError::Invalid(errors)) = (&mut self.editor, error) {
            editor.set_errors(errors);
        }
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Option<ProfileAction> {
        if let Some(editor) = &mut self.editor {
            match editor.handle_key(key) {
                Some(FormEvent::Submit) => {
                    editor.clear_errors();
                    return Some(ProfileAction::Save(editor.form().clone()));
                }
                Some(FormEvent::Cancel) => self.editor = None,
                _ => {}
            }
            return None;
        }

        let view = self.view.as_ref()?;
        match key {
            KeyCode::Char('e') => self.editor = Some(FormEditor::new(ProfileForm::from(view))),
            KeyCode::Right => self.tab = (self.tab + 1) % TABS.len(),
            KeyCode::Left => self.tab = (self.tab + TABS.len() - 1) % TABS.len(),
            _ => {}
        }
        None
    }
}

fn profile_lines(view: &ProfileView) -> Vec<Spans<'static>> {
    let or_dash = |value: &str| {
        if value.is_empty() {
            "-".to_string()
        } else {
            value.to_string()
        }
    };

    let mut lines = vec![
        Spans::from(vec![
            Span::styled(
                format!("({}) ", view.initials()),
                Style::default().fg(Color::Magenta),
            ),
            Span::styled(
                view.full_name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Spans::from(Span::styled(view.title.clone(), Style::default().fg(Color::Cyan))),
        Spans::from(""),
        Spans::from(format!("Email: {}", or_dash(&view.email))),
        Spans::from(format!("Phone: {}", or_dash(&view.phone))),
        Spans::from(format!("Location: {}", or_dash(&view.location))),
    ];
    if !view.join_date.is_empty() {
        lines.push(Spans::from(format!("Member since {}", view.join_date)));
    }
    lines.push(Spans::from(format!(
        "{} Jobs Completed | {}/5 Rating",
        view.completed_jobs, view.rating
    )));
    lines.push(Spans::from(""));
    lines.push(heading("About"));
    lines.push(Spans::from(if view.bio.is_empty() {
        "No biography yet.".to_string()
    } else {
        view.bio.clone()
    }));
    if !view.skills.is_empty() {
        lines.push(Spans::from(""));
        lines.push(heading("Skills"));
        lines.push(Spans::from(view.skills.join(", ")));
    }
    lines
}

pub fn render_profile<B: Backend>(f: &mut Frame<B>, state: &ProfileState, area: Rect) {
    let Some(view) = &state.view else {
        let lines = vec![
            heading("Profile unavailable"),
            Spans::from("Your profile could not be loaded. Log in and open this page again."),
        ];
        text_panel(f, "My Profile", lines, area);
        return;
    };

    if let Some(editor) = &state.editor {
        render_form_editor(f, editor, area, "Edit Profile");
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let titles = TABS.iter().map(|t| Spans::from(*t)).collect();
    let tabs = Tabs::new(titles)
        .select(state.tab)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    f.render_widget(tabs, chunks[0]);

    let lines = match state.tab {
        0 => profile_lines(view),
        _ => vec![Spans::from("No job history available yet.")],
    };
    text_panel(f, TABS[state.tab], lines, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::submit_profile_update;
    use crate::api::fake::{FakeApi, Reply};
    use crate::forms::{FieldErrors, Form};
    use crate::session::{MemoryTokenStore, Session};

    fn view() -> ProfileView {
        ProfileView {
            full_name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: "5551234567".into(),
            location: "Austin, TX, USA".into(),
            title: "Designer".into(),
            ..ProfileView::default()
        }
    }

    #[test]
    fn edit_form_is_prefilled_from_the_view() {
        let mut state = ProfileState::new(Some(view()));
        state.handle_key(KeyCode::Char('e'));
        assert!(state.is_editing());

        let Some(ProfileAction::Save(form)) = state.handle_key(KeyCode::Char('s')) else {
            panic!("expected save");
        };
        assert_eq!(form.full_name, "Jane Doe");
        assert_eq!(form.location, "Austin, TX, USA");
    }

    #[test]
    fn failed_save_keeps_form_open() {
        let mut state = ProfileState::new(Some(view()));
        state.handle_key(KeyCode::Char('e'));

        state.save_failed(SubmitError::Failed(Notice::error("Failed to update profile.")));
        assert!(state.is_editing());

        let errors: FieldErrors = ProfileForm::default().check().unwrap_err();
        state.save_failed(SubmitError::Invalid(errors));
        assert!(state.is_editing());
    }

    #[test]
    fn successful_save_closes_form_and_swaps_view() {
        let mut state = ProfileState::new(Some(view()));
        state.handle_key(KeyCode::Char('e'));

        let mut updated = view();
        updated.title = "Lead Designer".into();
        let notice = state.saved(&ProfileForm::from(&view()), Ok(updated));

        assert_eq!(notice, None);
        assert!(!state.is_editing());
        assert_eq!(state.view().unwrap().title, "Lead Designer");
    }

    #[tokio::test]
    async fn failed_refetch_shows_submitted_values_and_its_notice() {
        let api = FakeApi {
            update: Reply::Ok(()),
            user_data: Reply::Status(500, None),
            ..FakeApi::default()
        };
        let session = Session::new(Box::new(MemoryTokenStore::with_token("tok")));
        let mut state = ProfileState::new(Some(view()));
        state.handle_key(KeyCode::Char('e'));
        let mut form = ProfileForm::from(&view());
        form.title = "Lead Designer".into();

        let saved = submit_profile_update(&api, &session, &form).await.unwrap();
        let notice = state.saved(&form, saved.refreshed);

        assert_eq!(notice.unwrap().message, "Failed to fetch user data.");
        assert!(!state.is_editing());
        assert_eq!(state.view().unwrap().title, "Lead Designer");
        assert_eq!(state.view().unwrap().full_name, "Jane Doe");
    }

    #[test]
    fn nothing_to_edit_without_a_profile() {
        let mut state = ProfileState::new(None);
        state.handle_key(KeyCode::Char('e'));
        assert!(!state.is_editing());
    }
}
