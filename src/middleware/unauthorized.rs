use reqwest::StatusCode;

use crate::session::Session;

/// Response interceptor: a 401 seen while a session exists ends it and
/// signals `SessionEvent::Unauthorized`. The caller still gets the
/// 401 failure. Returns whether the session was expired.
pub fn observe_status(status: StatusCode, session: &Session) -> bool {
    if status == StatusCode::UNAUTHORIZED && session.is_authenticated() {
        session.expire();
        return true;
    }
    false
}
