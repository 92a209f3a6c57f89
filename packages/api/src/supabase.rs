//! # Supabase implementation of [`Backend`]
//!
//! Talks to the three hosted services the storefront depends on:
//!
//! | Service | Endpoint | Used by |
//! |---------|----------|---------|
//! | Auth (GoTrue) | `/auth/v1/token`, `/auth/v1/user`, `/auth/v1/logout`, `/auth/v1/signup`, `/auth/v1/recover` | sign-in, session check, sign-out, sign-up, password reset |
//! | Rows (PostgREST) | `/rest/v1/<admin table>` | profile lookup by email |
//! | Storage | `/storage/v1/object/public/<bucket>/<file>` | logo URLs (built locally, never fetched) |
//!
//! Every request carries the project's anon key in the `apikey` header.
//! Authenticated requests add `Authorization: Bearer <access token>`.
//!
//! ## Token persistence
//!
//! The auth session is kept in a [`LocalStore`] under `sb-<project ref>-auth-token`,
//! the same slot the official JS client uses. [`get_session`](Backend::get_session)
//! reads that slot and confirms the token with `/auth/v1/user`; a token the backend
//! rejects (401/403) is dropped and reported as "no session". Expired tokens are not
//! refreshed.

use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::Deserialize;
use serde_json::json;
use store::{LocalStore, StorefrontConfig, UserDetails};

use crate::auth::{AuthUser, Session};
use crate::backend::Backend;
use crate::error::BackendError;

/// Columns selected from the admin table.
pub const USER_DETAILS_COLUMNS: &str = "id,email,business,image";

/// Error body shapes returned by the auth and row services.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    msg: Option<String>,
    error_description: Option<String>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        self.message.or(self.msg).or(self.error_description)
    }
}

/// HTTP client for a single Supabase project.
#[derive(Clone, Debug)]
pub struct SupabaseClient<S: LocalStore> {
    http: Client,
    base_url: String,
    anon_key: String,
    admin_table: String,
    tokens: S,
    token_key: String,
}

impl<S: LocalStore> SupabaseClient<S> {
    /// Create a client from `config`, persisting auth tokens in `tokens`.
    pub fn new(config: &StorefrontConfig, tokens: S) -> Result<Self, BackendError> {
        if !config.is_configured() {
            return Err(BackendError::NotConfigured);
        }
        let url = Url::parse(&config.backend.url)
            .map_err(|e| BackendError::InvalidUrl(e.to_string()))?;
        let project_ref = url
            .host_str()
            .and_then(|host| host.split('.').next())
            .unwrap_or("local");

        Ok(Self {
            http: Client::new(),
            base_url: config.backend.url.trim_end_matches('/').to_string(),
            anon_key: config.backend.anon_key.clone(),
            admin_table: config.tables.admin.clone(),
            token_key: format!("sb-{project_ref}-auth-token"),
            tokens,
        })
    }

    /// Storage key holding the persisted auth session.
    pub fn token_key(&self) -> &str {
        &self.token_key
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.http
            .get(self.endpoint(path))
            .header("apikey", &self.anon_key)
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.http
            .post(self.endpoint(path))
            .header("apikey", &self.anon_key)
    }

    fn stored_session(&self) -> Option<Session> {
        let raw = self.tokens.get_item(&self.token_key)?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!("Dropping unreadable auth token: {}", e);
                self.tokens.remove_item(&self.token_key);
                None
            }
        }
    }

    fn store_session(&self, session: &Session) -> Result<(), BackendError> {
        let raw = serde_json::to_string(session)?;
        self.tokens.set_item(&self.token_key, &raw);
        Ok(())
    }

    /// Bearer token for row queries: the user's access token, else the anon key.
    fn bearer(&self) -> String {
        self.stored_session()
            .map(|s| s.access_token)
            .unwrap_or_else(|| self.anon_key.clone())
    }
}

/// Build the public URL of an object in a public storage bucket.
pub fn object_public_url(base_url: &str, bucket: &str, file_name: &str) -> Option<String> {
    if file_name.is_empty() || bucket.is_empty() {
        return None;
    }
    let mut url = Url::parse(base_url).ok()?;
    {
        let mut segments = url.path_segments_mut().ok()?;
        segments
            .pop_if_empty()
            .extend(["storage", "v1", "object", "public", bucket])
            .extend(file_name.split('/').filter(|s| !s.is_empty()));
    }
    Some(url.to_string())
}

async fn status_error(response: Response) -> BackendError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(ErrorBody::into_message)
        .unwrap_or(body);
    BackendError::Status { status, message }
}

async fn expect_success(response: Response) -> Result<Response, BackendError> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(status_error(response).await)
    }
}

impl<S: LocalStore> Backend for SupabaseClient<S> {
    async fn get_session(&self) -> Result<Option<Session>, BackendError> {
        let Some(stored) = self.stored_session() else {
            return Ok(None);
        };

        let response = self
            .get("auth/v1/user")
            .bearer_auth(&stored.access_token)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => {
                let user: AuthUser = response.json().await?;
                Ok(Some(Session { user, ..stored }))
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                tracing::info!("Stored auth token rejected, treating as signed out");
                self.tokens.remove_item(&self.token_key);
                Ok(None)
            }
            _ => Err(status_error(response).await),
        }
    }

    async fn fetch_user_details(&self, email: &str) -> Result<Option<UserDetails>, BackendError> {
        let filter = format!("eq.{email}");
        let response = self
            .get(&format!("rest/v1/{}", self.admin_table))
            .bearer_auth(self.bearer())
            .query(&[("select", USER_DETAILS_COLUMNS), ("email", filter.as_str())])
            .send()
            .await?;

        let mut rows: Vec<UserDetails> = expect_success(response).await?.json().await?;
        match rows.len() {
            0 => Ok(None),
            1 => Ok(rows.pop()),
            n => Err(BackendError::MultipleRows(n)),
        }
    }

    fn public_url(&self, bucket: &str, file_name: &str) -> Option<String> {
        object_public_url(&self.base_url, bucket, file_name)
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, BackendError> {
        let response = self
            .post("auth/v1/token")
            .query(&[("grant_type", "password")])
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;

        let session: Session = expect_success(response).await?.json().await?;
        self.store_session(&session)?;
        Ok(session)
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<(), BackendError> {
        let response = self
            .post("auth/v1/signup")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;
        expect_success(response).await?;
        Ok(())
    }

    async fn reset_password_for_email(&self, email: &str) -> Result<(), BackendError> {
        let response = self
            .post("auth/v1/recover")
            .json(&json!({ "email": email }))
            .send()
            .await?;
        expect_success(response).await?;
        Ok(())
    }

    async fn sign_out(&self) -> Result<(), BackendError> {
        let Some(stored) = self.stored_session() else {
            return Ok(());
        };
        self.tokens.remove_item(&self.token_key);

        let response = self
            .post("auth/v1/logout")
            .bearer_auth(&stored.access_token)
            .send()
            .await?;
        expect_success(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryStore;

    fn config() -> StorefrontConfig {
        StorefrontConfig::new("https://abcd1234.supabase.co/", "anon")
    }

    fn session() -> Session {
        Session {
            access_token: "jwt".to_string(),
            refresh_token: Some("refresh".to_string()),
            user: AuthUser {
                id: "u-1".to_string(),
                email: Some("a@b.com".to_string()),
            },
        }
    }

    #[test]
    fn test_requires_configuration() {
        let result = SupabaseClient::new(&StorefrontConfig::default(), MemoryStore::new());
        assert!(matches!(result, Err(BackendError::NotConfigured)));
    }

    #[test]
    fn test_token_key_uses_project_ref() {
        let client = SupabaseClient::new(&config(), MemoryStore::new()).unwrap();
        assert_eq!(client.token_key(), "sb-abcd1234-auth-token");
        assert_eq!(
            client.endpoint("auth/v1/user"),
            "https://abcd1234.supabase.co/auth/v1/user"
        );
    }

    #[test]
    fn test_public_url() {
        let client = SupabaseClient::new(&config(), MemoryStore::new()).unwrap();
        assert_eq!(
            client.public_url("food-logo", "logo.png").as_deref(),
            Some("https://abcd1234.supabase.co/storage/v1/object/public/food-logo/logo.png")
        );
        assert!(client.public_url("food-logo", "").is_none());
    }

    #[test]
    fn test_public_url_escapes_file_names() {
        let url = object_public_url("https://abcd.supabase.co", "food-logo", "my logo.png").unwrap();
        assert_eq!(
            url,
            "https://abcd.supabase.co/storage/v1/object/public/food-logo/my%20logo.png"
        );
    }

    #[test]
    fn test_stored_session_roundtrip() {
        let tokens = MemoryStore::new();
        let client = SupabaseClient::new(&config(), tokens.clone()).unwrap();
        assert!(client.stored_session().is_none());
        assert_eq!(client.bearer(), "anon");

        client.store_session(&session()).unwrap();
        assert_eq!(client.stored_session(), Some(session()));
        assert_eq!(client.bearer(), "jwt");
    }

    #[test]
    fn test_unreadable_token_is_dropped() {
        let tokens = MemoryStore::new();
        let client = SupabaseClient::new(&config(), tokens.clone()).unwrap();
        tokens.set_item(client.token_key(), "garbage");

        assert!(client.stored_session().is_none());
        assert!(tokens.get_item("sb-abcd1234-auth-token").is_none());
    }

    #[tokio::test]
    async fn test_no_token_means_no_session() {
        let client = SupabaseClient::new(&config(), MemoryStore::new()).unwrap();
        assert!(client.get_session().await.unwrap().is_none());
        // Signing out without a session makes no request.
        assert!(client.sign_out().await.is_ok());
    }

    #[test]
    fn test_error_body_message_precedence() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"msg":"m","error_description":"d"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("m"));
        assert!(ErrorBody::default().into_message().is_none());
    }
}
