use crate::common::Identity;
use crate::storage::IdentityStore;

use super::login::LoginForm;
use super::session::ChatSession;

/// Exactly one screen is mounted, decided by whether an identity exists.
pub enum Screen {
    Login(LoginForm),
    Chat(Box<ChatSession>),
}

/// Owns the identity lifecycle and switches between login and chat.
pub struct RootController {
    store: Box<dyn IdentityStore>,
    screen: Screen,
}

impl RootController {
    /// Restores a persisted identity, if any. A corrupted record has already
    /// been discarded by the store and simply leads to the login screen.
    pub fn start(store: Box<dyn IdentityStore>) -> Self {
        let screen = match store.load() {
            Some(identity) => {
                log::info!("Restored session for {}", identity.email);
                Screen::Chat(Box::new(ChatSession::new(identity)))
            }
            None => Screen::Login(LoginForm::new()),
        };
        Self { store, screen }
    }

    #[cfg(test)]
    pub fn identity(&self) -> Option<&Identity> {
        match &self.screen {
            Screen::Chat(session) => Some(session.identity()),
            Screen::Login(_) => None,
        }
    }

    #[cfg(test)]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    pub fn session_mut(&mut self) -> Option<&mut ChatSession> {
        match &mut self.screen {
            Screen::Chat(session) => Some(session.as_mut()),
            Screen::Login(_) => None,
        }
    }

    /// Persisting is the login form's job; this only mounts the chat.
    pub fn login(&mut self, identity: Identity) {
        log::info!("User {} logged in", identity.email);
        self.screen = Screen::Chat(Box::new(ChatSession::new(identity)));
    }

    /// Submits the mounted login form and logs in on success.
    pub fn submit_login(&mut self) {
        let identity = match &mut self.screen {
            Screen::Login(form) => form.submit(self.store.as_ref()),
            Screen::Chat(_) => None,
        };
        if let Some(identity) = identity {
            self.login(identity);
        }
    }

    pub fn logout(&mut self) {
        if let Err(err) = self.store.clear() {
            log::error!("Failed to clear stored identity: {err}");
        }
        log::info!("User logged out");
        self.screen = Screen::Login(LoginForm::new());
    }
}
