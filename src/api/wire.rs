use serde::{Deserialize, Serialize};

use crate::models::Role;

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewAccount {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginResponse {
    pub token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserNameResponse {
    pub user: UserNameRecord,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserNameRecord {
    pub name: String,
    pub user_role: String,
}

/// Result of the user-name lookup with the role already validated
#[derive(Debug, Clone, PartialEq)]
pub struct UserName {
    pub name: String,
    pub role: Role,
}

impl TryFrom<UserNameRecord> for UserName {
    type Error = crate::models::UnknownRole;

    fn try_from(record: UserNameRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            role: record.user_role.parse()?,
            name: record.name,
        })
    }
}

/// Error body the API sends alongside non-2xx statuses
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: Option<String>,
}

/// One element of the `user_data` array
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileRecord {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub biography: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
}

/// Body of `PUT /users/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub biography: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_record_tolerates_missing_fields() {
        let records: Vec<ProfileRecord> = serde_json::from_str(
            r#"[{"first_name":"Jane","city":"Austin","createdAt":"2024-03-05T10:00:00.000Z","extra":1}]"#,
        )
        .unwrap();
        assert_eq!(records[0].first_name.as_deref(), Some("Jane"));
        assert_eq!(records[0].last_name, None);
        assert!(records[0].created_at.is_some());
    }

    #[test]
    fn user_name_rejects_unknown_role() {
        let record = UserNameRecord {
            name: "Jane".into(),
            user_role: "root".into(),
        };
        assert!(UserName::try_from(record).is_err());
    }
}
