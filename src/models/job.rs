use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Freelance,
    Remote,
}

impl JobType {
    pub const ALL: [JobType; 5] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Contract,
        JobType::Freelance,
        JobType::Remote,
    ];

    pub fn label(self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
            JobType::Freelance => "Freelance",
            JobType::Remote => "Remote",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone)]
pub struct Job {
    pub id: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub job_type: JobType,
    pub salary: &'static str,
    pub description: &'static str,
    pub posted: &'static str,
    pub deadline: &'static str,
    pub skills: &'static [&'static str],
}
