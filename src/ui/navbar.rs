use crossterm::event::KeyCode;
use tui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::route::Route;
use crate::session::{initials, Session};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEntry {
    Go(Route),
    SignOut,
}

impl NavEntry {
    pub fn label(&self) -> &'static str {
        match self {
            NavEntry::Go(route) => route.title(),
            NavEntry::SignOut => "Sign Out",
        }
    }
}

/// Links offered for the current session
pub fn entries(session: &Session) -> Vec<NavEntry> {
    let mut entries = vec![
        NavEntry::Go(Route::Home),
        NavEntry::Go(Route::Jobs),
        NavEntry::Go(Route::Freelancers),
    ];
    if session.shows_business_link() {
        entries.push(NavEntry::Go(Route::Business));
    }
    if session.is_authenticated() {
        entries.push(NavEntry::Go(Route::Profile));
        entries.push(NavEntry::SignOut);
    } else {
        entries.push(NavEntry::Go(Route::Login));
        entries.push(NavEntry::Go(Route::Register));
    }
    entries
}

#[derive(Default)]
pub struct NavbarState {
    menu_open: bool,
    selected: usize,
}

impl NavbarState {
    pub fn is_open(&self) -> bool {
        self.menu_open
    }

    /// Purely visual; the session is left alone
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        self.selected = 0;
    }

    /// Menu input while open. `count` is the number of entries on offer.
    pub fn handle_key(&mut self, key: KeyCode, count: usize) -> Option<usize> {
        match key {
            KeyCode::Esc | KeyCode::Char('m') => self.toggle_menu(),
            KeyCode::Down if count > 0 => self.selected = (self.selected + 1) % count,
            KeyCode::Up if count > 0 => self.selected = (self.selected + count - 1) % count,
            KeyCode::Enter if self.selected < count => {
                let chosen = self.selected;
                self.toggle_menu();
                return Some(chosen);
            }
            _ => {}
        }
        None
    }
}

pub fn render_navbar<B: Backend>(f: &mut Frame<B>, session: &Session, route: &Route, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(32)])
        .split(area);

    let brand = Paragraph::new(Spans::from(vec![
        Span::styled(
            "JobPortal",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("  /  {}", route.title())),
    ]))
    .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(brand, chunks[0]);

    let user = match session.display_name() {
        Some(name) => Spans::from(vec![
            Span::styled(
                format!("({}) ", initials(name)),
                Style::default().fg(Color::Magenta),
            ),
            Span::raw(name.to_string()),
        ]),
        None => Spans::from(Span::styled("Guest", Style::default().fg(Color::Gray))),
    };
    let user = Paragraph::new(user).block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(user, chunks[1]);
}

pub fn render_menu<B: Backend>(f: &mut Frame<B>, state: &NavbarState, entries: &[NavEntry]) {
    let height = entries.len() as u16 + 2;
    let size = f.size();
    let area = Rect::new(size.width.saturating_sub(26), 1, 26.min(size.width), height.min(size.height));

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| ListItem::new(entry.label()))
        .collect();
    let menu = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Menu"))
        .highlight_style(Style::default().bg(Color::Blue).fg(Color::White));

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));

    f.render_widget(Clear, area);
    f.render_stateful_widget(menu, area, &mut list_state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeApi;
    use crate::models::Role;
    use crate::session::{MemoryTokenStore, SessionState};

    #[tokio::test]
    async fn anonymous_links() {
        let api = FakeApi::default();
        let mut session = Session::new(Box::new(MemoryTokenStore::default()));
        session.refresh(&api).await;

        let labels: Vec<_> = entries(&session).iter().map(NavEntry::label).collect();
        assert_eq!(
            labels,
            ["Home", "Find Jobs", "Find Freelancers", "For Businesses", "Log In", "Sign Up"]
        );
    }

    #[tokio::test]
    async fn signed_in_job_seeker_links() {
        let api = FakeApi::default();
        let mut session = Session::new(Box::new(MemoryTokenStore::with_token("tok-123")));
        session.refresh(&api).await;
        assert_eq!(session.role(), Some(Role::User));

        let entries = entries(&session);
        assert!(!entries.contains(&NavEntry::Go(Route::Business)));
        assert_eq!(entries.last(), Some(&NavEntry::SignOut));
        assert!(entries.contains(&NavEntry::Go(Route::Profile)));
    }

    #[tokio::test]
    async fn menu_toggle_leaves_session_alone() {
        let api = FakeApi::default();
        let mut session = Session::new(Box::new(MemoryTokenStore::with_token("tok-123")));
        session.refresh(&api).await;
        let calls = api.calls();
        let before = session.state().clone();

        let mut navbar = NavbarState::default();
        navbar.toggle_menu();
        assert!(navbar.is_open());
        navbar.handle_key(KeyCode::Esc, entries(&session).len());
        assert!(!navbar.is_open());

        assert_eq!(session.state(), &before);
        assert!(matches!(before, SessionState::Authenticated { .. }));
        assert_eq!(api.calls(), calls);
    }

    #[test]
    fn enter_picks_the_highlighted_entry() {
        let mut navbar = NavbarState::default();
        navbar.toggle_menu();
        navbar.handle_key(KeyCode::Down, 6);
        navbar.handle_key(KeyCode::Down, 6);
        assert_eq!(navbar.handle_key(KeyCode::Enter, 6), Some(2));
        assert!(!navbar.is_open());

        navbar.toggle_menu();
        navbar.handle_key(KeyCode::Up, 6);
        assert_eq!(navbar.handle_key(KeyCode::Enter, 6), Some(5));
    }
}
