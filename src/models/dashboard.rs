#[derive(Debug, Clone)]
pub struct DashboardStats {
    pub active_jobs: u32,
    pub total_applications: u32,
    pub active_contracts: u32,
    pub total_spent: &'static str,
    pub spent_trend: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostingStatus {
    Active,
    ExpiringSoon,
    Closed,
}

impl PostingStatus {
    pub fn label(self) -> &'static str {
        match self {
            PostingStatus::Active => "Active",
            PostingStatus::ExpiringSoon => "Expiring Soon",
            PostingStatus::Closed => "Closed",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PostedJob {
    pub title: &'static str,
    pub posted: &'static str,
    pub job_type: &'static str,
    pub location: &'static str,
    pub applications: u32,
    pub status: PostingStatus,
}

#[derive(Debug, Clone)]
pub struct Application {
    pub applicant: &'static str,
    pub job_title: &'static str,
    pub applied: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractStatus {
    InProgress,
    ReviewPending,
}

impl ContractStatus {
    pub fn label(self) -> &'static str {
        match self {
            ContractStatus::InProgress => "In Progress",
            ContractStatus::ReviewPending => "Review Pending",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Contract {
    pub project: &'static str,
    pub freelancer: &'static str,
    pub rating: f32,
    pub started: &'static str,
    pub total: &'static str,
    pub status: ContractStatus,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub from: &'static str,
    pub at: &'static str,
    pub body: &'static str,
    pub unread: bool,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub headline: &'static str,
    pub detail: &'static str,
    pub at: &'static str,
}
