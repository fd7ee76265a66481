use std::fmt;

use crate::session::Session;

/// The three screens of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Home,
    Profile,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Home => "/home",
            Route::Profile => "/perfil",
        }
    }

    pub fn requires_session(&self) -> bool {
        !matches!(self, Route::Login)
    }

    fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "/login" => Some(Route::Login),
            "/home" => Some(Route::Home),
            "/perfil" => Some(Route::Profile),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Route guard. Protected routes need a session; `/` and unknown paths
/// land on the login view.
pub fn resolve(path: &str, session: &Session) -> Route {
    match Route::from_path(path) {
        Some(route) if route.requires_session() && !session.is_authenticated() => {
            tracing::debug!(path, "No session, redirecting to login");
            Route::Login
        }
        Some(route) => route,
        None => Route::Login,
    }
}

/// Guard for a route already known by value.
pub fn guard(route: Route, session: &Session) -> Route {
    resolve(route.path(), session)
}
