//! Session context: login flag plus the role fetched from the auth probe.

use common::user_admin::UserRole;
use dioxus::prelude::*;

use crate::config::use_archive_api;

#[derive(Clone, Copy)]
pub struct UserSession {
    pub is_logged_in: Signal<bool>,
    pub role: Signal<Option<UserRole>>,
}

impl UserSession {
    pub fn is_admin(&self) -> bool {
        matches!(*self.role.read(), Some(UserRole::Admin))
    }
}

pub fn provide_user_session() -> UserSession {
    let api = use_archive_api();
    let is_logged_in = use_signal(|| false);
    let mut role = use_signal(|| None);
    let session = UserSession { is_logged_in, role };
    use_context_provider(move || session);

    // the role follows the login flag; it is never set optimistically
    use_effect(move || {
        let logged = *is_logged_in.read();
        if !logged {
            role.set(None);
            return;
        }
        let api = api.clone();
        spawn(async move {
            match api.session_role().await {
                Ok(parsed) => role.set(parsed),
                Err(err) => {
                    dioxus::logger::tracing::error!("fetching session role failed: {err:#}");
                }
            }
        });
    });

    session
}

pub fn use_user_session() -> UserSession {
    use_context::<UserSession>()
}
