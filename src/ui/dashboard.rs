use crossterm::event::KeyCode;
use tui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::catalog::dashboard::{
    APPLICATIONS, CONTRACTS, MESSAGES, NOTIFICATIONS, POSTED_JOBS, STATS,
};
use crate::models::PostingStatus;
use crate::ui::text_panel;

const TABS: [&str; 4] = ["My Jobs", "Applications", "Contracts", "Messages"];

#[derive(Default)]
pub struct DashboardState {
    tab: usize,
}

impl DashboardState {
    pub fn tab(&self) -> &'static str {
        TABS[self.tab]
    }

    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Right => self.tab = (self.tab + 1) % TABS.len(),
            KeyCode::Left => self.tab = (self.tab + TABS.len() - 1) % TABS.len(),
            _ => {}
        }
    }
}

fn status_style(status: PostingStatus) -> Style {
    match status {
        PostingStatus::Active => Style::default().fg(Color::Green),
        PostingStatus::ExpiringSoon => Style::default().fg(Color::Yellow),
        PostingStatus::Closed => Style::default().fg(Color::Gray),
    }
}

fn tab_lines(tab: usize) -> Vec<Spans<'static>> {
    let mut lines = Vec::new();
    match tab {
        0 => {
            for job in POSTED_JOBS {
                lines.push(Spans::from(vec![
                    Span::styled(job.title, Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw("  "),
                    Span::styled(job.status.label(), status_style(job.status)),
                ]));
                lines.push(Spans::from(format!(
                    "  Posted {} | {} | {} | {} applications",
                    job.posted, job.job_type, job.location, job.applications
                )));
            }
        }
        1 => {
            for application in APPLICATIONS {
                lines.push(Spans::from(Span::styled(
                    application.applicant,
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                lines.push(Spans::from(format!(
                    "  Applied for {} {}",
                    application.job_title, application.applied
                )));
            }
        }
        2 => {
            for contract in CONTRACTS {
                lines.push(Spans::from(vec![
                    Span::styled(contract.project, Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw("  "),
                    Span::styled(contract.status.label(), Style::default().fg(Color::Cyan)),
                ]));
                lines.push(Spans::from(format!(
                    "  {} ({:.1}) | Started {} | {}",
                    contract.freelancer, contract.rating, contract.started, contract.total
                )));
            }
        }
        _ => {
            for message in MESSAGES {
                let from_style = if message.unread {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().add_modifier(Modifier::BOLD)
                };
                lines.push(Spans::from(vec![
                    Span::styled(message.from, from_style),
                    Span::styled(format!("  {}", message.at), Style::default().fg(Color::Gray)),
                ]));
                lines.push(Spans::from(format!("  {}", message.body)));
            }
        }
    }
    lines
}

pub fn render_dashboard<B: Backend>(f: &mut Frame<B>, state: &DashboardState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(5),
        ])
        .split(area);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(chunks[0]);
    let stats = [
        ("Active Jobs", STATS.active_jobs.to_string(), String::new()),
        ("Total Applications", STATS.total_applications.to_string(), String::new()),
        ("Active Contracts", STATS.active_contracts.to_string(), String::new()),
        ("Total Spent", STATS.total_spent.to_string(), STATS.spent_trend.to_string()),
    ];
    for ((label, value, note), area) in stats.into_iter().zip(cards.iter()) {
        let card = Paragraph::new(vec![
            Spans::from(Span::styled(value, Style::default().add_modifier(Modifier::BOLD))),
            Spans::from(Span::styled(note, Style::default().fg(Color::Green))),
        ])
        .block(Block::default().borders(Borders::ALL).title(label));
        f.render_widget(card, *area);
    }

    let titles = TABS.iter().map(|t| Spans::from(*t)).collect();
    let tabs = Tabs::new(titles)
        .select(state.tab)
        .block(Block::default().borders(Borders::ALL).title("Business Dashboard"))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    f.render_widget(tabs, chunks[1]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[2]);

    text_panel(f, TABS[state.tab], tab_lines(state.tab), body[0]);

    let notifications = NOTIFICATIONS
        .iter()
        .flat_map(|n| {
            [
                Spans::from(vec![
                    Span::styled(n.headline, Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(format!(" {}", n.detail)),
                ]),
                Spans::from(Span::styled(n.at, Style::default().fg(Color::Gray))),
            ]
        })
        .collect();
    text_panel(f, "Notifications", notifications, body[1]);
}

pub const DASHBOARD_HELP: &str = "Left/Right - Tabs | M - Menu | Q - Quit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_cycle_both_ways() {
        let mut state = DashboardState::default();
        assert_eq!(state.tab(), "My Jobs");
        state.handle_key(KeyCode::Left);
        assert_eq!(state.tab(), "Messages");
        state.handle_key(KeyCode::Right);
        state.handle_key(KeyCode::Right);
        assert_eq!(state.tab(), "Applications");
    }

    #[test]
    fn every_tab_has_content() {
        for tab in 0..TABS.len() {
            assert!(!tab_lines(tab).is_empty());
        }
    }
}
