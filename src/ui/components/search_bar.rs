use crossterm::event::KeyCode;
use tui::{
    backend::Backend,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::catalog::search::{Category, SearchFilters};
use crate::models::JobType;

pub enum SearchEvent {
    Search(SearchFilters),
    Close,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum SearchField {
    Keyword,
    Location,
    Category,
    JobType,
}

/// Draft filters being typed into; nothing is applied until Enter
pub struct SearchBarState {
    draft: SearchFilters,
    field: SearchField,
    advanced_open: bool,
}

impl SearchBarState {
    pub fn new(current: &SearchFilters) -> Self {
        Self {
            draft: current.clone(),
            field: SearchField::Keyword,
            advanced_open: current.category.is_some() || current.job_type.is_some(),
        }
    }

    fn fields(&self) -> &'static [SearchField] {
        if self.advanced_open {
            &[
                SearchField::Keyword,
                SearchField::Location,
                SearchField::Category,
                SearchField::JobType,
            ]
        } else {
            &[SearchField::Keyword, SearchField::Location]
        }
    }

    fn move_field(&mut self, forward: bool) {
        let fields = self.fields();
        let i = fields.iter().position(|f| *f == self.field).unwrap_or(0);
        let next = if forward {
            (i + 1) % fields.len()
        } else {
            (i + fields.len() - 1) % fields.len()
        };
        self.field = fields[next];
    }

    fn toggle_advanced(&mut self) {
        self.advanced_open = !self.advanced_open;
        if !self.advanced_open && matches!(self.field, SearchField::Category | SearchField::JobType) {
            self.field = SearchField::Keyword;
        }
    }

    pub fn reset(&mut self) {
        self.draft = SearchFilters::default();
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Option<SearchEvent> {
        match key {
            KeyCode::Enter => return Some(SearchEvent::Search(self.draft.clone())),
            KeyCode::Esc => return Some(SearchEvent::Close),
            KeyCode::Tab => self.toggle_advanced(),
            KeyCode::Delete => self.reset(),
            KeyCode::Down => self.move_field(true),
            KeyCode::Up => self.move_field(false),
            KeyCode::Left | KeyCode::Right => {
                let forward = key == KeyCode::Right;
                match self.field {
                    SearchField::Category => {
                        self.draft.category = cycle(&Category::ALL, self.draft.category, forward)
                    }
                    SearchField::JobType => {
                        self.draft.job_type = cycle(&JobType::ALL, self.draft.job_type, forward)
                    }
                    _ => {}
                }
            }
            KeyCode::Char(c) => {
                if let Some(text) = self.text_field() {
                    text.push(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(text) = self.text_field() {
                    text.pop();
                }
            }
            _ => {}
        }
        None
    }

    fn text_field(&mut self) -> Option<&mut String> {
        match self.field {
            SearchField::Keyword => Some(&mut self.draft.keyword),
            SearchField::Location => Some(&mut self.draft.location),
            _ => None,
        }
    }
}

/// Steps through `None` and every option in order
fn cycle<T: Copy + PartialEq>(all: &[T], current: Option<T>, forward: bool) -> Option<T> {
    let position = current.and_then(|c| all.iter().position(|o| *o == c));
    let slots = all.len() + 1;
    let slot = position.map_or(0, |i| i + 1);
    let next = if forward {
        (slot + 1) % slots
    } else {
        (slot + slots - 1) % slots
    };
    next.checked_sub(1).map(|i| all[i])
}

pub fn render_search_bar<B: Backend>(f: &mut Frame<B>, state: &SearchBarState, area: Rect) {
    let field_line = |field: SearchField, label: &str, value: String| {
        let selected = state.field == field;
        let style = if selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let cursor = if selected && matches!(field, SearchField::Keyword | SearchField::Location) {
            "|"
        } else {
            ""
        };
        Spans::from(vec![
            Span::styled(format!("{}: ", label), style),
            Span::raw(format!("{}{}", value, cursor)),
        ])
    };

    let mut lines = vec![
        field_line(SearchField::Keyword, "Job title or keyword", state.draft.keyword.clone()),
        field_line(SearchField::Location, "Location", state.draft.location.clone()),
    ];
    if state.advanced_open {
        lines.push(field_line(
            SearchField::Category,
            "Category",
            format!("< {} >", state.draft.category.map_or("Any", Category::label)),
        ));
        lines.push(field_line(
            SearchField::JobType,
            "Job Type",
            format!("< {} >", state.draft.job_type.map_or("Any", JobType::label)),
        ));
    }
    lines.push(Spans::from(Span::styled(
        "Enter - Search | Tab - Advanced filters | Del - Reset | Esc - Close",
        Style::default().fg(Color::Gray),
    )));

    let search = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Search"));
    f.render_widget(search, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submit(state: &mut SearchBarState) -> SearchFilters {
        match state.handle_key(KeyCode::Enter) {
            Some(SearchEvent::Search(filters)) => filters,
            _ => panic!("expected search"),
        }
    }

    #[test]
    fn collects_all_four_criteria() {
        let mut state = SearchBarState::new(&SearchFilters::default());
        for c in "react".chars() {
            state.handle_key(KeyCode::Char(c));
        }
        state.handle_key(KeyCode::Down);
        for c in "NY".chars() {
            state.handle_key(KeyCode::Char(c));
        }
        state.handle_key(KeyCode::Tab);
        state.handle_key(KeyCode::Down);
        state.handle_key(KeyCode::Right);
        state.handle_key(KeyCode::Right);
        state.handle_key(KeyCode::Down);
        state.handle_key(KeyCode::Left);

        let filters = submit(&mut state);
        assert_eq!(filters.keyword, "react");
        assert_eq!(filters.location, "NY");
        assert_eq!(filters.category, Some(Category::Development));
        assert_eq!(filters.job_type, Some(JobType::Remote));
    }

    #[test]
    fn reset_clears_the_draft() {
        let current = SearchFilters {
            keyword: "seo".into(),
            job_type: Some(JobType::Contract),
            ..SearchFilters::default()
        };
        let mut state = SearchBarState::new(&current);
        assert!(state.advanced_open);

        state.handle_key(KeyCode::Delete);
        assert!(submit(&mut state).is_empty());
    }

    #[test]
    fn cycle_passes_through_any() {
        let all = [1, 2];
        assert_eq!(cycle(&all, None, true), Some(1));
        assert_eq!(cycle(&all, Some(2), true), None);
        assert_eq!(cycle(&all, None, false), Some(2));
    }
}
