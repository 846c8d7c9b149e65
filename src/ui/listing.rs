use crossterm::event::KeyCode;
use tui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    text::Spans,
    Frame,
};

use crate::catalog::search::{Listing, SearchFilters, Searchable, SortOption};
use crate::ui::components::search_bar::{render_search_bar, SearchBarState, SearchEvent};

/// How a record shows up in a listing screen
pub trait ListingRow: Searchable {
    /// Plural noun for the "N ... Available" header
    const NOUN: &'static str;

    fn id(&self) -> &'static str;

    fn row(&self) -> ListItem<'static>;

    fn details(&self) -> Vec<Spans<'static>>;
}

pub enum ListingAction {
    Open(&'static str),
}

pub struct ListingState<T: ListingRow> {
    listing: Listing<T>,
    list_state: ListState,
    search: Option<SearchBarState>,
}

impl<T: ListingRow> ListingState<T> {
    pub fn new(items: &'static [T], filters: SearchFilters) -> Self {
        let mut listing = Listing::new(items);
        listing.set_filters(filters);
        let mut state = Self {
            listing,
            list_state: ListState::default(),
            search: None,
        };
        state.reset_selection();
        state
    }

    pub fn listing(&self) -> &Listing<T> {
        &self.listing
    }

    /// True while the search bar has the keyboard
    pub fn is_capturing_text(&self) -> bool {
        self.search.is_some()
    }

    fn reset_selection(&mut self) {
        let selected = (!self.listing.page_items().is_empty()).then_some(0);
        self.list_state.select(selected);
    }

    pub fn selected(&self) -> Option<&'static T> {
        self.list_state
            .selected()
            .and_then(|i| self.listing.page_items().get(i).copied())
    }

    pub fn next(&mut self) {
        let len = self.listing.page_items().len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.listing.page_items().len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Option<ListingAction> {
        if let Some(search) = &mut self.search {
            match search.handle_key(key) {
                Some(SearchEvent::Search(filters)) => {
                    self.search = None;
                    self.listing.set_filters(filters);
                    self.reset_selection();
                }
                Some(SearchEvent::Close) => self.search = None,
                None => {}
            }
            return None;
        }

        match key {
            KeyCode::Char('/') => self.search = Some(SearchBarState::new(self.listing.filters())),
            KeyCode::Char('s') => {
                self.listing.cycle_sort();
                self.reset_selection();
            }
            KeyCode::Down => self.next(),
            KeyCode::Up => self.previous(),
            KeyCode::Right => {
                if self.listing.next_page() {
                    self.reset_selection();
                }
            }
            KeyCode::Left => {
                if self.listing.previous_page() {
                    self.reset_selection();
                }
            }
            KeyCode::Enter => return self.selected().map(|item| ListingAction::Open(item.id())),
            _ => {}
        }
        None
    }
}

pub fn render_listing<B: Backend, T: ListingRow>(
    f: &mut Frame<B>,
    state: &mut ListingState<T>,
    area: Rect,
) {
    let search_height = match &state.search {
        Some(_) => 8,
        None => 0,
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(search_height),
            Constraint::Length(3),
            Constraint::Min(5),
        ])
        .split(area);

    if let Some(search) = &state.search {
        render_search_bar(f, search, chunks[0]);
    }

    let listing = &state.listing;
    let summary = format!(
        "{} {} Available | Sort: {} | Page {} of {}",
        listing.total(),
        T::NOUN,
        listing.sort().label(),
        listing.page() + 1,
        listing.page_count(),
    );
    let header = Paragraph::new(summary)
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[1]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[2]);

    let items: Vec<ListItem> = listing.page_items().iter().map(|item| item.row()).collect();
    let list = List::new(items)
        .block(Block::default().title(T::NOUN).borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
    f.render_stateful_widget(list, body[0], &mut state.list_state);

    let details = state
        .selected()
        .map(|item| item.details())
        .unwrap_or_else(|| vec![Spans::from(format!("No {} match your search.", T::NOUN.to_lowercase()))]);
    crate::ui::text_panel(f, "Details", details, body[1]);
}

pub const LISTING_HELP: &str =
    "/ - Search | S - Sort | Up/Down - Select | Left/Right - Page | Enter - Open | M - Menu | Q - Quit";
