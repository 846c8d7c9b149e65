use crate::models::{
    Application, Contract, ContractStatus, DashboardStats, Message, Notification, PostedJob,
    PostingStatus,
};

pub const STATS: DashboardStats = DashboardStats {
    active_jobs: 5,
    total_applications: 27,
    active_contracts: 3,
    total_spent: "$2,580",
    spent_trend: "12% from last month",
};

pub const POSTED_JOBS: &[PostedJob] = &[
    PostedJob {
        title: "Web Developer",
        posted: "2 days ago",
        job_type: "Full-time",
        location: "Remote",
        applications: 12,
        status: PostingStatus::Active,
    },
    PostedJob {
        title: "UI/UX Designer",
        posted: "5 days ago",
        job_type: "Part-time",
        location: "New York, NY",
        applications: 8,
        status: PostingStatus::Active,
    },
    PostedJob {
        title: "Marketing Specialist",
        posted: "1 week ago",
        job_type: "Contract",
        location: "Los Angeles, CA",
        applications: 7,
        status: PostingStatus::Active,
    },
    PostedJob {
        title: "Content Writer",
        posted: "2 weeks ago",
        job_type: "Freelance",
        location: "Remote",
        applications: 0,
        status: PostingStatus::ExpiringSoon,
    },
    PostedJob {
        title: "Data Analyst",
        posted: "3 weeks ago",
        job_type: "Full-time",
        location: "Chicago, IL",
        applications: 5,
        status: PostingStatus::Closed,
    },
];

pub const APPLICATIONS: &[Application] = &[
    Application {
        applicant: "Alex Johnson",
        job_title: "Web Developer",
        applied: "2 days ago",
    },
    Application {
        applicant: "Sarah Miller",
        job_title: "UI/UX Designer",
        applied: "3 days ago",
    },
    Application {
        applicant: "Michael Lee",
        job_title: "Marketing Specialist",
        applied: "4 days ago",
    },
];

pub const CONTRACTS: &[Contract] = &[
    Contract {
        project: "Website Development",
        freelancer: "Alex Johnson",
        rating: 4.9,
        started: "May 15, 2023",
        total: "$2,500",
        status: ContractStatus::InProgress,
    },
    Contract {
        project: "Logo Design & Branding",
        freelancer: "Sarah Miller",
        rating: 4.8,
        started: "June 2, 2023",
        total: "$800",
        status: ContractStatus::ReviewPending,
    },
    Contract {
        project: "Social Media Campaign",
        freelancer: "Michael Lee",
        rating: 4.7,
        started: "May 28, 2023",
        total: "$1,200",
        status: ContractStatus::InProgress,
    },
];

pub const MESSAGES: &[Message] = &[
    Message {
        from: "Alex Johnson",
        at: "2:45 PM",
        body: "I've completed the initial wireframes for the website redesign. Would you like to schedule a review call?",
        unread: true,
    },
    Message {
        from: "Sarah Miller",
        at: "10:23 AM",
        body: "I've sent over the final logo files in both JPG and PNG formats. Let me know if you need any adjustments!",
        unread: true,
    },
    Message {
        from: "Michael Lee",
        at: "Yesterday",
        body: "We need to discuss the target demographics for the upcoming social media campaign. When are you available for a call?",
        unread: false,
    },
    Message {
        from: "Emily Davis",
        at: "2 days ago",
        body: "Thank you for the opportunity! I'm excited to work on this content writing project with you.",
        unread: false,
    },
];

pub const NOTIFICATIONS: &[Notification] = &[
    Notification {
        headline: "New application",
        detail: "received for Web Developer position.",
        at: "10 minutes ago",
    },
    Notification {
        headline: "Sarah Miller",
        detail: "submitted deliverables for Logo Design project.",
        at: "2 hours ago",
    },
    Notification {
        headline: "3 new messages",
        detail: "from your active contracts.",
        at: "4 hours ago",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_count_matches_stats() {
        assert_eq!(CONTRACTS.len() as u32, STATS.active_contracts);
        assert_eq!(POSTED_JOBS.len() as u32, STATS.active_jobs);
    }
}
