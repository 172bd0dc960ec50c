use std::sync::LazyLock;

use regex::Regex;

use crate::common::Identity;
use crate::storage::IdentityStore;

pub const EMPTY_FIELDS_ERROR: &str = "Por favor, preencha todos os campos.";
pub const INVALID_EMAIL_ERROR: &str = "Por favor, insira um e-mail válido.";
pub const SAVE_FAILED_ERROR: &str = "Não foi possível salvar seus dados. Tente novamente.";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\S+@\S+\.\S+").expect("email pattern is a valid regex")
});

/// Trạng thái form đăng nhập.
#[derive(Debug, Default)]
pub struct LoginForm {
    pub name: String,
    pub email: String,
    pub error: Option<String>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the inputs and persists the identity.
    ///
    /// Returns the new identity only when it was written to the store; on any
    /// failure `error` is set and nothing is persisted.
    pub fn submit(&mut self, store: &dyn IdentityStore) -> Option<Identity> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() {
            self.error = Some(EMPTY_FIELDS_ERROR.to_string());
            return None;
        }
        if !is_valid_email(&self.email) {
            self.error = Some(INVALID_EMAIL_ERROR.to_string());
            return None;
        }

        let identity = Identity::new(self.name.clone(), self.email.clone());
        if let Err(err) = store.save(&identity) {
            log::error!("Failed to persist identity: {err}");
            self.error = Some(SAVE_FAILED_ERROR.to_string());
            return None;
        }

        self.error = None;
        Some(identity)
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryIdentityStore;

    fn form(name: &str, email: &str) -> LoginForm {
        LoginForm {
            name: name.to_string(),
            email: email.to_string(),
            error: None,
        }
    }

    #[test]
    fn valid_input_persists_identity_once() {
        let store = MemoryIdentityStore::new();
        let mut login = form("Ana", "ana@x.com");

        let identity = login.submit(&store);

        assert_eq!(identity, Some(Identity::new("Ana", "ana@x.com")));
        assert_eq!(store.writes(), 1);
        assert_eq!(store.load(), identity);
        assert!(login.error.is_none());
    }

    #[test]
    fn blank_fields_are_rejected() {
        let store = MemoryIdentityStore::new();

        for (name, email) in [("", "ana@x.com"), ("Ana", ""), ("   ", "ana@x.com"), ("Ana", " \t")] {
            let mut login = form(name, email);
            assert_eq!(login.submit(&store), None);
            assert_eq!(login.error.as_deref(), Some(EMPTY_FIELDS_ERROR));
        }
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn malformed_email_is_rejected() {
        let store = MemoryIdentityStore::new();

        for email in ["ana", "ana@x", "@x.com", "ana@.com", "ana x@y .com", "ana@x."] {
            let mut login = form("Ana", email);
            assert_eq!(login.submit(&store), None, "{email} should be rejected");
            assert_eq!(login.error.as_deref(), Some(INVALID_EMAIL_ERROR));
        }
        assert_eq!(store.writes(), 0);
        assert_eq!(store.load(), None);
    }

    #[test]
    fn email_pattern_matches_loose_shape() {
        assert!(is_valid_email("ana@x.com"));
        assert!(is_valid_email("a.b+c@mail.example.org"));
        assert!(!is_valid_email("ana@xcom"));
    }

    #[test]
    fn successful_retry_clears_previous_error() {
        let store = MemoryIdentityStore::new();
        let mut login = form("Ana", "ana");
        assert!(login.submit(&store).is_none());

        login.email = "ana@x.com".to_string();
        assert!(login.submit(&store).is_some());
        assert!(login.error.is_none());
    }
}
