//! Which view the console shows, given the session state.

/// Views of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Dashboard,
    EditProfile,
}

impl Route {
    pub fn requires_identity(&self) -> bool {
        matches!(self, Self::Dashboard | Self::EditProfile)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "Welcome to Surger",
            Self::Register => "Create Account",
            Self::Dashboard => "Surgeon Dashboard",
            Self::EditProfile => "Edit Profile",
        }
    }
}

/// Route actually shown when `requested` is asked for.
///
/// Anonymous users are kept on the login/register screens; signed-in users
/// are sent to the dashboard instead of login or register.
pub fn resolve(requested: Route, authenticated: bool) -> Route {
    match (requested.requires_identity(), authenticated) {
        (true, false) => Route::Login,
        (false, true) => Route::Dashboard,
        _ => requested,
    }
}
