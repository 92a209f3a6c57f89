//! The seam between the session lifecycle and the hosted backend.

use std::future::Future;

use store::UserDetails;

use crate::auth::Session;
use crate::error::BackendError;

/// Async interface to the backend's auth, row and storage services.
pub trait Backend {
    /// The currently active auth session, if any.
    fn get_session(&self) -> impl Future<Output = Result<Option<Session>, BackendError>>;

    /// Look up the profile row whose `email` matches exactly.
    /// Zero rows is `Ok(None)`; more than one is an error.
    fn fetch_user_details(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<UserDetails>, BackendError>>;

    /// Public URL of `file_name` in `bucket`. Pure; never touches the network.
    fn public_url(&self, bucket: &str, file_name: &str) -> Option<String>;

    fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<Session, BackendError>>;

    fn sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<(), BackendError>>;

    fn reset_password_for_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<(), BackendError>>;

    /// End the auth session. The local token is dropped even when this fails.
    fn sign_out(&self) -> impl Future<Output = Result<(), BackendError>>;
}
