//! # API crate — backend client and session lifecycle for the storefront
//!
//! This crate is everything between the views and the hosted backend. It knows how
//! to talk to the backend's auth, row and storage services, and it owns the rules
//! for turning "is there a session?" into the dashboard's signed-in state.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Auth session types and configuration from `storefront.toml` plus the environment (`SUPABASE_URL`, `SUPABASE_ANON_KEY`) |
//! | [`backend`] | The [`Backend`] trait: session check, profile lookup, public URLs, sign-in/up/out, password reset |
//! | [`supabase`] | [`SupabaseClient`], the `reqwest` implementation of [`Backend`] |
//! | [`lifecycle`] | [`SessionState`] and the operations that move it: [`bootstrap`], [`restore_offline`], [`sign_in`], [`sign_out`], [`resolve_profile_image`] |
//! | [`error`] | [`BackendError`] and [`SessionError`] |
//!
//! Views never call the backend for session data directly; they go through the
//! lifecycle functions so the cached `userDetails` slot stays in step with memory.

pub mod auth;
pub mod backend;
pub mod error;
pub mod lifecycle;
pub mod supabase;

pub use auth::{load_config, AuthUser, Session};
pub use backend::Backend;
pub use error::{BackendError, SessionError};
pub use lifecycle::{
    bootstrap, resolve_profile_image, restore_offline, sign_in, sign_out, SessionState,
};
pub use supabase::SupabaseClient;

pub use store::{StorefrontConfig, UserDetails};
