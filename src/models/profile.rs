/// Display model of the signed-in user's own profile
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileView {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub bio: String,
    pub title: String,
    /// e.g. "March 2024"; empty when the API gave no usable date
    pub join_date: String,
    pub completed_jobs: u32,
    pub rating: f32,
    pub skills: Vec<String>,
}

impl ProfileView {
    pub fn initials(&self) -> String {
        crate::session::initials(&self.full_name)
    }
}
