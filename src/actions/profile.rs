use chrono::DateTime;
use tracing::{info, warn};

use super::{Notice, SubmitError};
use crate::api::{PortalApi, ProfileRecord};
use crate::forms::parse::{join_location, join_name};
use crate::forms::{Form, ProfileForm};
use crate::models::ProfileView;
use crate::session::Session;

const FETCH_FAILED: &str = "Failed to fetch user data.";
const UPDATE_FAILED: &str = "Failed to update profile.";

/// Wire record → display model
pub fn profile_view(record: &ProfileRecord) -> ProfileView {
    let text = |value: &Option<String>| value.as_deref().unwrap_or_default().trim().to_string();

    ProfileView {
        full_name: join_name(
            record.first_name.as_deref().unwrap_or_default(),
            record.last_name.as_deref().unwrap_or_default(),
        ),
        email: text(&record.email),
        phone: text(&record.phone_number),
        location: join_location(
            record.city.as_deref().unwrap_or_default(),
            record.state.as_deref().unwrap_or_default(),
            record.country.as_deref().unwrap_or_default(),
        ),
        bio: record.biography.clone().unwrap_or_default(),
        title: text(&record.title),
        join_date: record
            .created_at
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|at| at.format("%B %Y").to_string())
            .unwrap_or_default(),
        ..ProfileView::default()
    }
}

/// Fetch the signed-in user's profile; failures come back as the notice to show
pub async fn load_profile(api: &dyn PortalApi, session: &Session) -> Result<ProfileView, Notice> {
    let Some(token) = session.token() else {
        warn!("profile requested without a session token");
        return Err(Notice::error(FETCH_FAILED));
    };

    let records = api.user_data(&token).await.map_err(|e| {
        warn!(error = %e, "profile fetch failed");
        Notice::error(FETCH_FAILED)
    })?;

    records.first().map(profile_view).ok_or_else(|| {
        warn!("profile fetch returned no records");
        Notice::error(FETCH_FAILED)
    })
}

#[derive(Debug)]
pub struct ProfileSaved {
    pub notice: Notice,
    /// Result of re-fetching the profile after the update
    pub refreshed: Result<ProfileView, Notice>,
}

pub async fn submit_profile_update(
    api: &dyn PortalApi,
    session: &Session,
    form: &ProfileForm,
) -> Result<ProfileSaved, SubmitError> {
    form.check().map_err(SubmitError::Invalid)?;

    let Some(token) = session.token() else {
        warn!("profile update without a session token");
        return Err(SubmitError::Failed(Notice::error(UPDATE_FAILED)));
    };

    if let Err(e) = api.update_profile(&token, &form.to_update()).await {
        warn!(error = %e, "profile update failed");
        return Err(SubmitError::Failed(Notice::error(UPDATE_FAILED)));
    }
    info!("profile updated");

    Ok(ProfileSaved {
        notice: Notice::success("Profile updated successfully!"),
        refreshed: load_profile(api, session).await,
    })
}
