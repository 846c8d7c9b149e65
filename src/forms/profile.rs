use validator::{Validate, ValidationError};

use super::parse::{join_location, join_name, split_location, split_name};
use super::{invalid, FieldSpec, Form};
use crate::api::ProfileUpdate;
use crate::models::ProfileView;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("full_name", "Full Name"),
    FieldSpec::text("title", "Professional Title"),
    FieldSpec::text("email", "Email"),
    FieldSpec::text("phone", "Phone"),
    FieldSpec::text("location", "Location"),
    FieldSpec::text("bio", "Biography"),
];

fn city_state_country(location: &str) -> Result<(), ValidationError> {
    split_location(location)
        .map(|_| ())
        .map_err(|_| invalid("location_parts", "Location must be City, State, Country."))
}

/// Editable subset of the profile display model
#[derive(Debug, Clone, Default, Validate)]
pub struct ProfileForm {
    #[validate(length(min = 2, message = "Name must be at least 2 characters."))]
    pub full_name: String,
    #[validate(length(min = 2, message = "Title must be at least 2 characters."))]
    pub title: String,
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,
    #[validate(length(min = 10, message = "Please enter a valid phone number."))]
    pub phone: String,
    #[validate(
        length(min = 2, message = "Location must be at least 2 characters."),
        custom(function = "city_state_country")
    )]
    pub location: String,
    #[validate(length(max = 500, message = "Bio must not exceed 500 characters."))]
    pub bio: String,
}

impl From<&ProfileView> for ProfileForm {
    fn from(view: &ProfileView) -> Self {
        Self {
            full_name: view.full_name.clone(),
            title: view.title.clone(),
            email: view.email.clone(),
            phone: view.phone.clone(),
            location: view.location.clone(),
            bio: view.bio.clone(),
        }
    }
}

impl ProfileForm {
    /// Wire payload for `PUT /users/`; call after [`Form::check`] passed
    pub fn to_update(&self) -> ProfileUpdate {
        let name = split_name(&self.full_name);
        let location = split_location(&self.location).unwrap_or_default();
        ProfileUpdate {
            first_name: name.first,
            last_name: name.last,
            email: self.email.trim().to_string(),
            phone_number: self.phone.trim().to_string(),
            city: location.city,
            state: location.state,
            country: location.country,
            biography: self.bio.clone(),
            title: self.title.trim().to_string(),
        }
    }

    /// Write the submitted values over `view` the way the API would echo them back
    pub fn apply_to(&self, view: &mut ProfileView) {
        let update = self.to_update();
        view.full_name = join_name(&update.first_name, &update.last_name);
        view.location = join_location(&update.city, &update.state, &update.country);
        view.email = update.email;
        view.phone = update.phone_number;
        view.title = update.title;
        view.bio = update.biography;
    }
}

impl Form for ProfileForm {
    const FIELDS: &'static [FieldSpec] = FIELDS;

    fn value(&self, index: usize) -> &str {
        match index {
            0 => &self.full_name,
            1 => &self.title,
            2 => &self.email,
            3 => &self.phone,
            4 => &self.location,
            _ => &self.bio,
        }
    }

    fn value_mut(&mut self, index: usize) -> &mut String {
        match index {
            0 => &mut self.full_name,
            1 => &mut self.title,
            2 => &mut self.email,
            3 => &mut self.phone,
            4 => &mut self.location,
            _ => &mut self.bio,
        }
    }
}
