//! Explicit session state for the access-code gate.
//!
//! One `SessionContext` exists per running session; it is created at
//! startup, filled in by `login`, and emptied by `logout`. Components that
//! need the code receive the context, there is no ambient global.

use std::sync::RwLock;

/// The access code the original deployment ships with when none is
/// configured. Deployments should set their own; the default is accepted
/// so a fresh install works out of the box.
pub const DEFAULT_ACCESS_CODE: &str = "Alpha#12345";

pub struct SessionContext {
    configured_code: String,
    active_code: RwLock<Option<String>>,
}

impl SessionContext {
    pub fn new(configured_code: impl Into<String>) -> Self {
        SessionContext {
            configured_code: configured_code.into(),
            active_code: RwLock::new(None),
        }
    }

    pub fn with_default_code() -> Self {
        Self::new(DEFAULT_ACCESS_CODE)
    }

    /// Compares the entered code (whitespace-trimmed, exact) against the
    /// configured one and opens the session on a match.
    pub fn login(&self, code: &str) -> bool {
        let entered = code.trim();
        if entered == self.configured_code.trim() {
            *self.active_code.write().unwrap() = Some(entered.to_string());
            true
        } else {
            false
        }
    }

    pub fn logout(&self) {
        *self.active_code.write().unwrap() = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.active_code.read().unwrap().is_some()
    }

    /// The code to send with sync requests; `None` while logged out.
    pub fn access_code(&self) -> Option<String> {
        self.active_code.read().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_trims_whitespace_but_compares_exactly() {
        let session = SessionContext::new("secret-1");
        assert!(!session.is_authenticated());

        assert!(!session.login("secret"));
        assert!(!session.is_authenticated());

        assert!(session.login("  secret-1  "));
        assert!(session.is_authenticated());
        assert_eq!(session.access_code().as_deref(), Some("secret-1"));
    }

    #[test]
    fn logout_clears_the_session() {
        let session = SessionContext::with_default_code();
        assert!(session.login(DEFAULT_ACCESS_CODE));
        session.logout();
        assert!(!session.is_authenticated());
        assert_eq!(session.access_code(), None);
    }
}
