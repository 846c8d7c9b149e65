use tui::{
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::ListItem,
};

use crate::models::Job;
use crate::ui::listing::{ListingRow, ListingState};
use crate::ui::{heading, skill_line};

pub type JobsState = ListingState<Job>;

impl ListingRow for Job {
    const NOUN: &'static str = "Jobs";

    fn id(&self) -> &'static str {
        self.id
    }

    fn row(&self) -> ListItem<'static> {
        ListItem::new(vec![
            Spans::from(Span::styled(
                self.title,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Spans::from(format!("  {} | {} | {}", self.company, self.location, self.job_type)),
        ])
    }

    fn details(&self) -> Vec<Spans<'static>> {
        vec![
            heading(self.title),
            Spans::from(Span::styled(self.company, Style::default().fg(Color::Cyan))),
            Spans::from(""),
            Spans::from(format!("Location: {}", self.location)),
            Spans::from(format!("Type: {}", self.job_type)),
            Spans::from(format!("Salary: {}", self.salary)),
            Spans::from(format!("Posted: {}", self.posted)),
            Spans::from(format!("Deadline: {}", self.deadline)),
            Spans::from(""),
            Spans::from(self.description),
            Spans::from(""),
            skill_line(self.skills),
            Spans::from(""),
            Spans::from(Span::styled(
                "Enter - View details and apply",
                Style::default().fg(Color::Gray),
            )),
        ]
    }
}
