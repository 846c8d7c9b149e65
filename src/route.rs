/// Screens the client can navigate to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Jobs,
    JobDetail(String),
    Freelancers,
    Business,
    Login,
    Register,
    Profile,
}

impl Route {
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Jobs => "Find Jobs",
            Route::JobDetail(_) => "Job Details",
            Route::Freelancers => "Find Freelancers",
            Route::Business => "For Businesses",
            Route::Login => "Log In",
            Route::Register => "Sign Up",
            Route::Profile => "My Profile",
        }
    }
}
