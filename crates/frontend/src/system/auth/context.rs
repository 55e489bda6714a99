use contracts::shared::error::AppError;
use contracts::system::auth::Session;
use leptos::prelude::*;

use super::storage::LocalStore;

/// Current session, shared through Leptos context.
///
/// Created once by [`provide_auth`]; components reach it with [`use_auth`].
#[derive(Clone, Copy, Debug)]
pub struct AuthContext {
    session: RwSignal<Option<Session>>,
}

impl AuthContext {
    /// Restore whatever session survived the last page load.
    pub fn hydrate() -> Self {
        let session = Session::hydrate(&LocalStore);
        if let Some(session) = &session {
            log::debug!("restored session for {}", session.email);
        }
        Self {
            session: RwSignal::new(session),
        }
    }

    pub fn session(&self) -> Signal<Option<Session>> {
        self.session.into()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(Option::is_some)
    }

    pub fn email(&self) -> Option<String> {
        self.session.with(|s| s.as_ref().map(|s| s.email.clone()))
    }

    /// Persist `session` and make it current. Nothing changes if storage
    /// refuses the write.
    pub fn login(&self, session: Session) -> Result<(), AppError> {
        session.persist(&LocalStore)?;
        log::info!("logged in as {}", session.email);
        self.session.set(Some(session));
        Ok(())
    }

    pub fn logout(&self) {
        Session::clear(&LocalStore);
        self.session.set(None);
        log::info!("logged out");
    }
}

pub fn provide_auth() -> AuthContext {
    let auth = AuthContext::hydrate();
    provide_context(auth);
    auth
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext not provided")
}
