#[derive(Debug, Clone)]
pub struct Freelancer {
    pub id: &'static str,
    pub name: &'static str,
    pub avatar: &'static str,
    pub title: &'static str,
    pub rating: f32,
    pub location: &'static str,
    /// Whole dollars per hour, as displayed
    pub hourly_rate: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
    pub total_jobs: u32,
    pub total_hours: u32,
}

/// Skills shown on a listing row before collapsing into "+N more"
const CARD_SKILLS: usize = 4;

impl Freelancer {
    pub fn initials(&self) -> String {
        self.name.chars().take(2).collect::<String>().to_uppercase()
    }

    pub fn card_skills(&self) -> (&[&'static str], usize) {
        let shown = self.skills.len().min(CARD_SKILLS);
        (&self.skills[..shown], self.skills.len() - shown)
    }

    pub fn hourly_rate_value(&self) -> Option<f64> {
        self.hourly_rate.trim().trim_start_matches('$').parse().ok()
    }
}
