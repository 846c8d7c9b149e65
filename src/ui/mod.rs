pub mod components;
pub mod dashboard;
pub mod freelancers;
pub mod home;
pub mod job_detail;
pub mod jobs;
pub mod listing;
pub mod login;
pub mod navbar;
pub mod profile;
pub mod register;

use tui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::actions::{Notice, NoticeLevel};

// Helper function to create a centered rect
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Bottom line: the pending notice if there is one, otherwise key help
pub fn render_status<B: Backend>(f: &mut Frame<B>, notice: Option<&Notice>, help: &str, area: Rect) {
    let line = match notice {
        Some(notice) => {
            let color = match notice.level {
                NoticeLevel::Success => Color::Green,
                NoticeLevel::Error => Color::Red,
                NoticeLevel::Info => Color::Cyan,
            };
            Span::styled(
                notice.message.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
        None => Span::styled(help.to_string(), Style::default().fg(Color::Gray)),
    };

    let status = Paragraph::new(Spans::from(line)).block(Block::default().borders(Borders::TOP));
    f.render_widget(status, area);
}

pub fn bullet_lines(items: &[&str]) -> Vec<Spans<'static>> {
    items
        .iter()
        .map(|item| Spans::from(format!("• {}", item)))
        .collect()
}

pub fn heading(text: &str) -> Spans<'static> {
    Spans::from(Span::styled(
        text.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

pub fn skill_line(skills: &[&str]) -> Spans<'static> {
    let spans: Vec<Span> = skills
        .iter()
        .map(|s| Span::styled(format!("[{}] ", s), Style::default().fg(Color::Cyan)))
        .collect();
    Spans::from(spans)
}

pub fn text_panel<B: Backend>(f: &mut Frame<B>, title: &str, lines: Vec<Spans<'static>>, area: Rect) {
    let panel = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .wrap(Wrap { trim: false });
    f.render_widget(panel, area);
}
