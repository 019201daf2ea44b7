use std::rc::Rc;

use shared::{AdminCredentials, Authenticator, Session, SessionError};
use yew::prelude::*;

use crate::services::{BrowserSessionStore, Logger};

/// Current session plus the login/logout actions, shared through context
#[derive(Clone)]
pub struct SessionHandle {
    session: UseStateHandle<Option<Session>>,
    authenticator: Rc<Authenticator<BrowserSessionStore>>,
}

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        *self.session == *other.session
    }
}

impl SessionHandle {
    pub fn current(&self) -> Option<Session> {
        (*self.session).clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.as_ref().is_some_and(|session| session.is_logged_in)
    }

    pub fn login(&self, email: &str, password: &str) -> Result<(), SessionError> {
        let session = self.authenticator.login(email, password)?;
        self.session.set(Some(session));
        Ok(())
    }

    pub fn logout(&self) {
        if let Err(e) = self.authenticator.logout() {
            Logger::error_with_component("Session", &e.to_string());
        }
        self.session.set(None);
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub credentials: AdminCredentials,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let authenticator = use_memo(props.credentials.clone(), |credentials| {
        Authenticator::new(credentials.clone(), BrowserSessionStore)
    });

    // Pick up a session saved by an earlier visit
    let session = {
        let authenticator = authenticator.clone();
        use_state(move || authenticator.restore())
    };

    let handle = SessionHandle {
        session,
        authenticator,
    };

    html! {
        <ContextProvider<SessionHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<SessionHandle>>
    }
}

#[hook]
pub fn use_session() -> Option<SessionHandle> {
    use_context::<SessionHandle>()
}
