use crossterm::event::KeyCode;
use tui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::catalog::detail::{self, JobDetail, SIMILAR_JOBS};
use crate::forms::ApplicationForm;
use crate::ui::components::form_editor::{render_form_editor, FormEditor, FormEvent};
use crate::ui::{bullet_lines, heading, skill_line, text_panel};

const TABS: [&str; 3] = ["Description", "Requirements", "Company"];

pub enum JobDetailAction {
    Back,
}

pub struct JobDetailState {
    detail: Option<JobDetail>,
    tab: usize,
    apply: Option<FormEditor<ApplicationForm>>,
}

impl JobDetailState {
    /// Looks the id up in the compiled-in table; an unknown id gives the
    /// not-found screen
    pub fn new(id: &str) -> Self {
        Self {
            detail: detail::lookup(id),
            tab: 0,
            apply: None,
        }
    }

    pub fn is_found(&self) -> bool {
        self.detail.is_some()
    }

    pub fn is_applying(&self) -> bool {
        self.apply.is_some()
    }

    pub fn is_capturing_text(&self) -> bool {
        self.apply.as_ref().is_some_and(FormEditor::is_editing)
    }

    pub fn help_text(&self) -> &'static str {
        match &self.apply {
            Some(editor) if editor.is_editing() => editor.help_text(),
            Some(_) => "Enter - Edit field | Up/Down - Navigate fields | A/Esc - Close application",
            None if self.detail.is_some() => {
                "Left/Right - Tabs | A - Apply Now | Esc - Back to jobs | M - Menu | Q - Quit"
            }
            None => "Esc - Back to jobs | M - Menu | Q - Quit",
        }
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Option<JobDetailAction> {
        if let Some(editor) = &mut self.apply {
            match editor.handle_key(key) {
                Some(FormEvent::Cancel) | Some(FormEvent::Unhandled(KeyCode::Char('a'))) => {
                    self.apply = None;
                }
                _ => {}
            }
            return None;
        }

        match key {
            KeyCode::Esc | KeyCode::Backspace => return Some(JobDetailAction::Back),
            _ if self.detail.is_none() => {}
            KeyCode::Right => self.tab = (self.tab + 1) % TABS.len(),
            KeyCode::Left => self.tab = (self.tab + TABS.len() - 1) % TABS.len(),
            KeyCode::Char('a') => {
                self.apply = Some(FormEditor::new(ApplicationForm::default()).without_submit());
            }
            _ => {}
        }
        None
    }
}

fn tab_lines(detail: &JobDetail, tab: usize) -> Vec<Spans<'static>> {
    let mut lines = Vec::new();
    match tab {
        0 => {
            lines.push(heading("Job Description"));
            lines.extend(detail.description.split('\n').map(|p| Spans::from(p.to_string())));
            lines.push(Spans::from(""));
            lines.push(heading("Responsibilities"));
            lines.extend(bullet_lines(detail.responsibilities));
            lines.push(Spans::from(""));
            lines.push(heading("Benefits"));
            lines.extend(bullet_lines(detail.benefits));
        }
        1 => {
            lines.push(heading("Requirements"));
            lines.extend(bullet_lines(detail.requirements));
            lines.push(Spans::from(""));
            lines.push(heading("Skills"));
            lines.push(skill_line(detail.job.skills));
            lines.push(Spans::from(""));
            lines.push(heading("Nice to Have"));
            lines.extend(bullet_lines(detail.nice_to_have));
        }
        _ => match detail.company {
            Some(company) => {
                lines.push(heading(company.name));
                lines.push(Spans::from(company.about));
                lines.push(Spans::from(""));
                lines.push(Spans::from(format!("Website: {}", company.website)));
                lines.push(Spans::from(format!("Industry: {}", company.industry)));
                lines.push(Spans::from(format!("Founded: {}", company.founded)));
                lines.push(Spans::from(format!("Employees: {}", company.employees)));
                lines.push(Spans::from(format!("Location: {}", company.location)));
            }
            None => {
                lines.push(heading(detail.job.company));
                lines.push(Spans::from("No further company information is available."));
            }
        },
    }
    lines
}

fn sidebar_lines(detail: &JobDetail) -> Vec<Spans<'static>> {
    let job = detail.job;
    let mut lines = vec![
        heading("Job Summary"),
        Spans::from(format!("Job Type: {}", job.job_type)),
        Spans::from(format!("Salary: {}", job.salary)),
        Spans::from(format!("Location: {}", job.location)),
        Spans::from(format!("Posted: {}", job.posted)),
        Spans::from(format!("Deadline: {}", job.deadline)),
        Spans::from(""),
        heading("Required Skills"),
        skill_line(job.skills),
        Spans::from(""),
        heading("Similar Jobs"),
    ];
    for similar in SIMILAR_JOBS {
        lines.push(Spans::from(similar.title));
        lines.push(Spans::from(Span::styled(
            format!("  {} | {}", similar.location, similar.salary),
            Style::default().fg(Color::Gray),
        )));
    }
    lines
}

pub fn render_job_detail<B: Backend>(f: &mut Frame<B>, state: &JobDetailState, area: Rect) {
    let Some(detail) = &state.detail else {
        let lines = vec![
            heading("Job Not Found"),
            Spans::from("The job you're looking for doesn't exist or has been removed."),
            Spans::from(""),
            Spans::from("Press Esc to browse all jobs."),
        ];
        text_panel(f, "Job Details", lines, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(5)])
        .split(area);

    let job = detail.job;
    let header = Paragraph::new(vec![
        Spans::from(Span::styled(job.title, Style::default().add_modifier(Modifier::BOLD))),
        Spans::from(format!(
            "{} | {} | {} | Posted {}",
            job.company, job.location, job.job_type, job.posted
        )),
    ])
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[1]);

    if let Some(editor) = &state.apply {
        render_form_editor(f, editor, body[0], "Apply for this Position");
    } else {
        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(3)])
            .split(body[0]);

        let titles = TABS.iter().map(|t| Spans::from(*t)).collect();
        let tabs = Tabs::new(titles)
            .select(state.tab)
            .block(Block::default().borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
        f.render_widget(tabs, main[0]);

        text_panel(f, TABS[state.tab], tab_lines(detail, state.tab), main[1]);
    }

    text_panel(f, "Overview", sidebar_lines(detail), body[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_id_shows_not_found() {
        let mut state = JobDetailState::new("missing");
        assert!(!state.is_found());
        state.handle_key(KeyCode::Char('a'));
        assert!(!state.is_applying());
        assert!(matches!(state.handle_key(KeyCode::Esc), Some(JobDetailAction::Back)));
    }

    #[test]
    fn apply_form_toggles_and_cancels() {
        let mut state = JobDetailState::new("1");
        state.handle_key(KeyCode::Char('a'));
        assert!(state.is_applying());

        // typing 'a' into a field does not close the form
        state.handle_key(KeyCode::Enter);
        state.handle_key(KeyCode::Char('a'));
        assert!(state.is_applying());
        assert!(state.is_capturing_text());
        state.handle_key(KeyCode::Enter);

        state.handle_key(KeyCode::Esc);
        assert!(!state.is_applying());
    }

    #[test]
    fn tabs_wrap_around() {
        let mut state = JobDetailState::new("2");
        state.handle_key(KeyCode::Left);
        assert_eq!(state.tab, 2);
        let lines = tab_lines(state.detail.as_ref().unwrap(), state.tab);
        assert_eq!(lines[0], heading("Creative Studios"));
    }
}
