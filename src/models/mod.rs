mod dashboard;
mod freelancer;
mod job;
mod profile;
mod role;

pub use dashboard::{
    Application, Contract, ContractStatus, DashboardStats, Message, Notification, PostedJob,
    PostingStatus,
};
pub use freelancer::Freelancer;
pub use job::{Job, JobType};
pub use profile::ProfileView;
pub use role::{Role, UnknownRole};
