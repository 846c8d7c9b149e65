use tui::{
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::ListItem,
};

use crate::models::Freelancer;
use crate::ui::listing::{ListingRow, ListingState};
use crate::ui::{heading, skill_line};

pub type FreelancersState = ListingState<Freelancer>;

fn stars(rating: f32) -> String {
    let full = rating.floor() as usize;
    format!("{}{} {:.1}", "★".repeat(full), "☆".repeat(5 - full.min(5)), rating)
}

impl ListingRow for Freelancer {
    const NOUN: &'static str = "Freelancers";

    fn id(&self) -> &'static str {
        self.id
    }

    fn row(&self) -> ListItem<'static> {
        let (skills, more) = self.card_skills();
        let mut skill_spans = skill_line(skills).0;
        if more > 0 {
            skill_spans.push(Span::styled(
                format!("+{} more", more),
                Style::default().fg(Color::Gray),
            ));
        }

        ListItem::new(vec![
            Spans::from(vec![
                Span::styled(
                    format!("({}) ", self.initials()),
                    Style::default().fg(Color::Magenta),
                ),
                Span::styled(self.name, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(format!("  ${}/hr", self.hourly_rate)),
            ]),
            Spans::from(format!("  {} | {}", self.title, stars(self.rating))),
            Spans::from(skill_spans),
        ])
    }

    fn details(&self) -> Vec<Spans<'static>> {
        vec![
            heading(self.name),
            Spans::from(Span::styled(self.title, Style::default().fg(Color::Cyan))),
            Spans::from(""),
            Spans::from(format!("Rating: {}", stars(self.rating))),
            Spans::from(format!("Location: {}", self.location)),
            Spans::from(format!("Rate: ${}/hr", self.hourly_rate)),
            Spans::from(format!(
                "{} jobs completed | {} hours worked",
                self.total_jobs, self.total_hours
            )),
            Spans::from(""),
            Spans::from(self.description),
            Spans::from(""),
            heading("Skills"),
            skill_line(self.skills),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_round_down() {
        assert_eq!(stars(4.9), "★★★★☆ 4.9");
        assert_eq!(stars(5.0), "★★★★★ 5.0");
    }
}
