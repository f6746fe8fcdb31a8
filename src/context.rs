//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::session::Session;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Signed-in session, if any - read
    pub session: ReadSignal<Option<Session>>,
    /// Signed-in session - write
    set_session: WriteSignal<Option<Session>>,
    /// Transient toast notice - read
    pub toast: ReadSignal<Option<String>>,
    /// Transient toast notice - write
    set_toast: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(
        session: (ReadSignal<Option<Session>>, WriteSignal<Option<Session>>),
        toast: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
    ) -> Self {
        Self {
            session: session.0,
            set_session: session.1,
            toast: toast.0,
            set_toast: toast.1,
        }
    }

    /// Persist and publish a fresh session after login.
    pub fn sign_in(&self, session: Session) {
        session.store();
        self.set_session.set(Some(session));
    }

    /// Wholesale logout: browser storage and signal both cleared.
    pub fn sign_out(&self) {
        Session::clear();
        self.set_session.set(None);
    }

    /// Show a non-blocking notice; the toast component auto-dismisses.
    pub fn notify(&self, message: impl Into<String>) {
        self.set_toast.set(Some(message.into()));
    }

    pub fn clear_toast(&self) {
        self.set_toast.set(None);
    }

    /// Doctor identifier of the signed-in doctor, if any.
    pub fn doctor_id(&self) -> Option<String> {
        self.session
            .with_untracked(|session| session.as_ref().and_then(|s| s.doctor_id.clone()))
    }
}
