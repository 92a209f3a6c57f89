//! Session context and hooks for the UI.

use api::{SessionError, SessionState, StorefrontConfig, SupabaseClient};
use dioxus::prelude::*;
use store::{PlatformStore, SessionCache};

use crate::routes;
use crate::Icon;
use crate::icons::FaRightFromBracket;

/// Backend client for the current platform.
pub type StorefrontClient = SupabaseClient<PlatformStore>;

/// Everything session operations need, shared through context.
/// `client` is `None` when the backend is not configured; the cache is always there.
#[derive(Clone)]
pub struct SessionServices {
    pub client: Option<StorefrontClient>,
    pub cache: SessionCache<PlatformStore>,
    pub config: StorefrontConfig,
}

/// Build the platform services from the config file and environment.
pub fn make_services() -> SessionServices {
    let config = api::load_config();
    let storage = PlatformStore::new();
    let client = match SupabaseClient::new(&config, storage.clone()) {
        Ok(client) => Some(client),
        Err(e) => {
            tracing::error!("Backend unavailable: {}", e);
            None
        }
    };
    SessionServices {
        client,
        cache: SessionCache::with_key(storage, config.cache.key.clone()),
        config,
    }
}

/// Resolve the startup session: a full bootstrap with a backend, the cache alone without one.
pub async fn restore_session(services: &SessionServices) -> Result<SessionState, SessionError> {
    match &services.client {
        Some(client) => api::bootstrap(client, &services.cache, &services.config).await,
        None => api::restore_offline(&services.cache, &services.config),
    }
}

/// Get the current session state.
/// Returns a signal that updates on bootstrap, sign-in and sign-out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Get the shared session services.
pub fn use_services() -> SessionServices {
    use_context::<SessionServices>()
}

/// Provider component that owns the session state.
/// Wrap your app with this component; it bootstraps the session once on mount.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let services = use_context_provider(make_services);
    let mut session = use_context_provider(|| Signal::new(SessionState::Init));

    let _ = use_resource(move || {
        let services = services.clone();
        async move {
            match restore_session(&services).await {
                Ok(state) => session.set(state),
                Err(e) => {
                    tracing::error!("Session bootstrap failed: {}", e);
                    session.set(SessionState::Cleared);
                }
            }
        }
    });

    rsx! {
        {children}
    }
}

/// Button that signs the user out and returns to the sign-in page.
#[component]
pub fn SignOutButton(
    #[props(default = "Sign out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut session = use_session();
    let services = use_services();
    let nav = use_navigator();

    let onclick = move |_| {
        let services = services.clone();
        async move {
            let next = match &services.client {
                Some(client) => api::sign_out(client, &services.cache).await,
                None => {
                    services.cache.clear();
                    SessionState::Cleared
                }
            };
            session.set(next);
            nav.push(routes::SIGN_IN);
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            Icon { icon: FaRightFromBracket, width: 14, height: 14 }
            " {label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{LocalStore, UserDetails, USER_DETAILS_KEY};

    fn offline_services() -> (PlatformStore, SessionServices) {
        let storage = PlatformStore::new();
        let services = SessionServices {
            client: None,
            cache: SessionCache::new(storage.clone()),
            config: StorefrontConfig::default(),
        };
        (storage, services)
    }

    #[tokio::test]
    async fn test_unconfigured_backend_still_restores_cached_user() {
        let (_, services) = offline_services();
        let user = UserDetails {
            id: 7,
            email: "owner@cafe.test".to_string(),
            business: Some("Cafe".to_string()),
            image: None,
        };
        services.cache.save(&user).unwrap();

        let state = restore_session(&services).await.unwrap();

        assert!(state.logged_in());
        assert_eq!(state.user(), Some(&user));
    }

    #[tokio::test]
    async fn test_unconfigured_backend_without_cache_is_logged_out() {
        let (storage, services) = offline_services();

        let state = restore_session(&services).await.unwrap();

        assert_eq!(state, SessionState::Cleared);
        assert!(storage.get_item(USER_DETAILS_KEY).is_none());
    }
}
