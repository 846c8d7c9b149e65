use crossterm::event::KeyCode;
use tui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::catalog::search::SearchFilters;
use crate::catalog::{featured_jobs, top_freelancers};
use crate::route::Route;
use crate::ui::components::search_bar::{render_search_bar, SearchBarState, SearchEvent};

pub enum HomeAction {
    /// Open the jobs screen with these filters applied
    SearchJobs(SearchFilters),
    Go(Route),
}

pub struct HomeState {
    search: SearchBarState,
    searching: bool,
    featured: ListState,
}

impl HomeState {
    pub fn new() -> Self {
        let mut featured = ListState::default();
        featured.select(Some(0));
        Self {
            search: SearchBarState::new(&SearchFilters::default()),
            searching: false,
            featured,
        }
    }

    pub fn is_capturing_text(&self) -> bool {
        self.searching
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Option<HomeAction> {
        if self.searching {
            match self.search.handle_key(key) {
                Some(SearchEvent::Search(filters)) => {
                    self.searching = false;
                    return Some(HomeAction::SearchJobs(filters));
                }
                Some(SearchEvent::Close) => self.searching = false,
                None => {}
            }
            return None;
        }

        let count = featured_jobs().len();
        match key {
            KeyCode::Char('/') => self.searching = true,
            KeyCode::Char('j') => return Some(HomeAction::Go(Route::Jobs)),
            KeyCode::Char('f') => return Some(HomeAction::Go(Route::Freelancers)),
            KeyCode::Down => {
                let i = self.featured.selected().map_or(0, |i| (i + 1) % count);
                self.featured.select(Some(i));
            }
            KeyCode::Up => {
                let i = self.featured.selected().map_or(0, |i| (i + count - 1) % count);
                self.featured.select(Some(i));
            }
            KeyCode::Enter => {
                let job = self.featured.selected().and_then(|i| featured_jobs().get(i))?;
                return Some(HomeAction::Go(Route::JobDetail(job.id.to_string())));
            }
            _ => {}
        }
        None
    }
}

pub fn render_home<B: Backend>(f: &mut Frame<B>, state: &mut HomeState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(8),
            Constraint::Min(5),
        ])
        .split(area);

    let hero = Paragraph::new(vec![
        Spans::from(Span::styled(
            "Find the perfect job or hire top talent",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Spans::from("Connect with thousands of employers and skilled freelancers."),
    ])
    .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(hero, chunks[0]);

    if state.searching {
        render_search_bar(f, &state.search, chunks[1]);
    } else {
        let hint = Paragraph::new("Press / to search jobs by keyword, location, category or type.")
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL).title("Search"));
        f.render_widget(hint, chunks[1]);
    }

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);

    let jobs: Vec<ListItem> = featured_jobs()
        .iter()
        .map(|job| {
            ListItem::new(vec![
                Spans::from(Span::styled(job.title, Style::default().add_modifier(Modifier::BOLD))),
                Spans::from(format!("  {} | {} | {}", job.company, job.location, job.salary)),
            ])
        })
        .collect();
    let jobs = List::new(jobs)
        .block(Block::default().borders(Borders::ALL).title("Featured Jobs (j - all)"))
        .highlight_style(Style::default().bg(Color::Blue).fg(Color::White));
    f.render_stateful_widget(jobs, body[0], &mut state.featured);

    let freelancers: Vec<ListItem> = top_freelancers()
        .iter()
        .map(|fl| {
            ListItem::new(vec![
                Spans::from(vec![
                    Span::styled(format!("({}) ", fl.initials()), Style::default().fg(Color::Magenta)),
                    Span::styled(fl.name, Style::default().add_modifier(Modifier::BOLD)),
                ]),
                Spans::from(format!("  {} | ${}/hr | {:.1}", fl.title, fl.hourly_rate, fl.rating)),
            ])
        })
        .collect();
    let freelancers = List::new(freelancers)
        .block(Block::default().borders(Borders::ALL).title("Top Freelancers (f - all)"));
    f.render_widget(freelancers, body[1]);
}

pub const HOME_HELP: &str =
    "/ - Search | Up/Down - Select | Enter - Open job | J - Jobs | F - Freelancers | M - Menu | Q - Quit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_from_home_hands_filters_to_jobs() {
        let mut home = HomeState::new();
        assert!(home.handle_key(KeyCode::Char('/')).is_none());
        for c in "design".chars() {
            home.handle_key(KeyCode::Char(c));
        }
        let Some(HomeAction::SearchJobs(filters)) = home.handle_key(KeyCode::Enter) else {
            panic!("expected a job search");
        };
        assert_eq!(filters.keyword, "design");
        assert!(!home.is_capturing_text());
    }

    #[test]
    fn enter_opens_highlighted_featured_job() {
        let mut home = HomeState::new();
        home.handle_key(KeyCode::Up);
        let Some(HomeAction::Go(route)) = home.handle_key(KeyCode::Enter) else {
            panic!("expected navigation");
        };
        assert_eq!(route, Route::JobDetail("3".into()));
    }
}
