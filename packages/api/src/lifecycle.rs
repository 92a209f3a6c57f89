//! # Session lifecycle — bootstrap, sign-in, sign-out
//!
//! [`SessionState`] is the single owned value describing who is signed in to the
//! dashboard. It moves through three phases:
//!
//! ```text
//! Init ──bootstrap/sign_in──▶ Hydrated ──sign_out──▶ Cleared
//!   └──────────bootstrap (no session)────────────────▶ Cleared
//! ```
//!
//! `logged_in()` is derived from the phase, so a state can never claim to be logged
//! in without a [`UserDetails`] value or hold one while logged out.
//!
//! ## Bootstrap
//!
//! [`bootstrap`] restores the session once at startup:
//!
//! 1. A cached `userDetails` value wins. It is decoded and hydrated without any
//!    network call. A malformed value is returned as an error; a value written by
//!    an unknown format version is discarded and bootstrap continues as if the slot
//!    were empty.
//! 2. Otherwise the backend is asked for an active auth session. Without one the
//!    state is `Cleared` and the cache is left alone.
//! 3. With one, the profile row is looked up by the session's email. A found row
//!    hydrates the state and rewrites the cache. A lookup error and a missing row
//!    both leave the user logged out for this load; they are logged separately.
//!
//! [`restore_offline`] is the cache-only half of the same rules, used when no
//! backend is configured: a cached user is still restored, anything else is
//! `Cleared`.
//!
//! ## Sign-in
//!
//! [`sign_in`] only hydrates when the credentials belong to a dashboard user. When
//! the profile row is missing or cannot be fetched, the freshly issued auth session
//! is dropped again (best effort) so no stray token is left behind.
//!
//! ## Sign-out
//!
//! [`sign_out`] never fails: the remote call is best effort and the local state and
//! cache are cleared regardless.

use store::{CacheError, LocalStore, SessionCache, StorefrontConfig, UserDetails};
use tracing::{debug, error, info, warn};

use crate::auth::Session;
use crate::backend::Backend;
use crate::error::{BackendError, SessionError};
use crate::supabase::object_public_url;

/// In-memory session state owned by the application root.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionState {
    /// Bootstrap has not resolved yet.
    #[default]
    Init,
    /// A dashboard user is signed in.
    Hydrated {
        user: UserDetails,
        profile_image: Option<String>,
    },
    /// Resolved as signed out.
    Cleared,
}

impl SessionState {
    pub fn hydrated(user: UserDetails, profile_image: Option<String>) -> Self {
        Self::Hydrated {
            user,
            profile_image,
        }
    }

    pub fn logged_in(&self) -> bool {
        matches!(self, Self::Hydrated { .. })
    }

    /// Whether bootstrap has finished, whatever its outcome.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Init)
    }

    pub fn user(&self) -> Option<&UserDetails> {
        match self {
            Self::Hydrated { user, .. } => Some(user),
            _ => None,
        }
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user().map(|u| u.id)
    }

    pub fn profile_image(&self) -> Option<&str> {
        match self {
            Self::Hydrated { profile_image, .. } => profile_image.as_deref(),
            _ => None,
        }
    }
}

/// Public URL of the user's logo, or `None` when there is no image or the resolver
/// produced nothing.
pub fn resolve_profile_image<B: Backend>(
    backend: &B,
    config: &StorefrontConfig,
    image: Option<&str>,
) -> Option<String> {
    let file_name = image.filter(|name| !name.is_empty())?;
    backend.public_url(&config.storage.logo_bucket, file_name)
}

fn hydrate<B: Backend>(backend: &B, config: &StorefrontConfig, user: UserDetails) -> SessionState {
    let profile_image = resolve_profile_image(backend, config, user.image.as_deref());
    SessionState::hydrated(user, profile_image)
}

/// Hydrate from a freshly fetched row, rewriting the cache with it.
fn hydrate_fresh<B: Backend, S: LocalStore>(
    backend: &B,
    cache: &SessionCache<S>,
    config: &StorefrontConfig,
    user: UserDetails,
) -> SessionState {
    if let Err(e) = cache.save(&user) {
        warn!("Failed to cache user details: {}", e);
    }
    hydrate(backend, config, user)
}

/// Load the cached user, discarding a value written by an unknown format version.
fn load_cached<S: LocalStore>(
    cache: &SessionCache<S>,
) -> Result<Option<UserDetails>, CacheError> {
    match cache.load() {
        Err(CacheError::UnsupportedVersion(version)) => {
            warn!(version, "Discarding cached user details with unsupported version");
            cache.clear();
            Ok(None)
        }
        other => other,
    }
}

async fn lookup_user<B: Backend>(
    backend: &B,
    session: &Session,
) -> Result<Option<UserDetails>, BackendError> {
    match session.email() {
        Some(email) => backend.fetch_user_details(email).await,
        None => Ok(None),
    }
}

/// Restore the session at application start.
pub async fn bootstrap<B: Backend, S: LocalStore>(
    backend: &B,
    cache: &SessionCache<S>,
    config: &StorefrontConfig,
) -> Result<SessionState, SessionError> {
    if let Some(user) = load_cached(cache)? {
        debug!(user_id = user.id, "Restored session from local cache");
        return Ok(hydrate(backend, config, user));
    }

    let session = match backend.get_session().await {
        Ok(Some(session)) => session,
        Ok(None) => {
            debug!("No active backend session");
            return Ok(SessionState::Cleared);
        }
        Err(e) => {
            error!("Error checking backend session: {}", e);
            return Ok(SessionState::Cleared);
        }
    };

    match lookup_user(backend, &session).await {
        Ok(Some(user)) => {
            info!(user_id = user.id, "Session hydrated from backend");
            Ok(hydrate_fresh(backend, cache, config, user))
        }
        Ok(None) => {
            warn!(
                email = session.email().unwrap_or_default(),
                "Active session has no matching user row"
            );
            Ok(SessionState::Cleared)
        }
        Err(e) => {
            error!("Error fetching user data: {}", e);
            Ok(SessionState::Cleared)
        }
    }
}

/// Restore the session from the local cache alone, without a backend client.
/// The logo URL is built from the configured backend URL when there is one.
pub fn restore_offline<S: LocalStore>(
    cache: &SessionCache<S>,
    config: &StorefrontConfig,
) -> Result<SessionState, SessionError> {
    let Some(user) = load_cached(cache)? else {
        return Ok(SessionState::Cleared);
    };
    debug!(user_id = user.id, "Restored session from local cache without a backend");
    let bucket = &config.storage.logo_bucket;
    let profile_image = user
        .image
        .as_deref()
        .and_then(|file| object_public_url(&config.backend.url, bucket, file));
    Ok(SessionState::hydrated(user, profile_image))
}

/// Sign in with email and password and hydrate the session like a fresh bootstrap.
pub async fn sign_in<B: Backend, S: LocalStore>(
    backend: &B,
    cache: &SessionCache<S>,
    config: &StorefrontConfig,
    email: &str,
    password: &str,
) -> Result<SessionState, SessionError> {
    let session = backend.sign_in_with_password(email, password).await?;
    let rejection = match lookup_user(backend, &session).await {
        Ok(Some(user)) => {
            info!(user_id = user.id, "Signed in");
            return Ok(hydrate_fresh(backend, cache, config, user));
        }
        Ok(None) => SessionError::NotAnAdmin(email.to_string()),
        Err(e) => SessionError::Backend(e),
    };

    if let Err(e) = backend.sign_out().await {
        warn!("Failed to drop rejected sign-in session: {}", e);
    }
    Err(rejection)
}

/// Sign out remotely (best effort) and clear all local session state.
pub async fn sign_out<B: Backend, S: LocalStore>(
    backend: &B,
    cache: &SessionCache<S>,
) -> SessionState {
    if let Err(e) = backend.sign_out().await {
        warn!("Remote sign-out failed, clearing local session anyway: {}", e);
    }
    cache.clear();
    SessionState::Cleared
}
