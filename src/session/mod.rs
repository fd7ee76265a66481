pub mod claims;
pub mod store;

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::{info, warn};

use crate::error::Result;
use crate::models::Role;

pub use claims::{decode_claims, role_from_token, UserClaims};
pub use store::{FileSessionStore, MemorySessionStore, SessionStore, TOKEN_KEY};

const EVENT_CAPACITY: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    SignedIn,
    SignedOut,
    /// The server rejected the token; the session was dropped and the shell
    /// should send the user back to the login view.
    Unauthorized,
}

/// Shared handle over the token store. Presence of a non-empty token means
/// "authenticated"; nothing about the token is validated locally.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
    events: broadcast::Sender<SessionEvent>,
}

impl Session {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self { store, events }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemorySessionStore::new()))
    }

    pub fn token(&self) -> Option<String> {
        self.store.get().filter(|token| !token.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn sign_in(&self, token: &str) -> Result<()> {
        self.store.set(token)?;
        info!("Session started");
        self.emit(SessionEvent::SignedIn);
        Ok(())
    }

    pub fn logout(&self) -> Result<()> {
        self.store.clear()?;
        info!("Session ended");
        self.emit(SessionEvent::SignedOut);
        Ok(())
    }

    /// Forced logout after the server answered 401.
    pub fn expire(&self) {
        if let Err(err) = self.store.clear() {
            warn!(error = %err, "Failed to clear rejected session token");
        }
        warn!("Session rejected by server, logging out");
        self.emit(SessionEvent::Unauthorized);
    }

    pub fn user_data(&self) -> Option<UserClaims> {
        self.token().as_deref().and_then(decode_claims)
    }

    pub fn role(&self) -> Role {
        role_from_token(self.token().as_deref())
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    fn emit(&self, event: SessionEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::store::MockSessionStore;

    #[test]
    fn empty_token_is_not_a_session() {
        let session = Session::new(Arc::new(MemorySessionStore::with_token("")));
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
        assert_eq!(session.role(), Role::Free);
    }

    #[test]
    fn sign_in_and_logout_toggle_authentication() {
        let session = Session::in_memory();
        let mut events = session.subscribe();

        session.sign_in("tok").unwrap();
        assert!(session.is_authenticated());
        assert_eq!(events.try_recv().unwrap(), SessionEvent::SignedIn);

        session.logout().unwrap();
        assert!(!session.is_authenticated());
        assert_eq!(events.try_recv().unwrap(), SessionEvent::SignedOut);
    }

    #[test]
    fn expire_clears_store_and_signals() {
        let mut store = MockSessionStore::new();
        store.expect_clear().times(1).returning(|| Ok(()));
        store.expect_get().returning(|| None);

        let session = Session::new(Arc::new(store));
        let mut events = session.subscribe();
        session.expire();

        assert_eq!(events.try_recv().unwrap(), SessionEvent::Unauthorized);
        assert!(!session.is_authenticated());
    }
}
