use std::fmt;
use std::str::FromStr;

/// Account role reported by the user-name lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Business,
    Freelancer,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown user role `{0}`")]
pub struct UnknownRole(pub String);

impl Role {
    /// Business tooling ("For Businesses") is only offered to business accounts
    pub fn can_post_jobs(self) -> bool {
        matches!(self, Role::Business)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Business => "business",
            Role::Freelancer => "freelancer",
        }
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "user" => Ok(Role::User),
            "business" => Ok(Role::Business),
            "freelancer" => Ok(Role::Freelancer),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
