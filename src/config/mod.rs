//! Deployment configuration: resolution with defaults, plus fail-fast checks.
//!
//! # Module layout
//!
//! - **keys**: Recognised variable names, the required set, defaults.
//! - **source**: The [`EnvSource`] trait and its implementations
//!   (`ProcessEnv`, maps, `Layered`).
//! - **types**: The resolved structs handed to the application
//!   ([`ResolvedConfig`], [`ApiConfig`], [`AuthConfig`], [`FeatureFlags`]).
//! - **resolve**: `resolve`, `validate_required`, `validate_numeric`,
//!   `validate`, `load_from`.
//! - **env_files**: `.env` / `.env.<mode>` layering.

pub mod env_files;
pub mod keys;
mod resolve;
mod source;
mod types;

pub use resolve::{
    flag, load_from, resolve, validate, validate_numeric, validate_required,
};
pub use source::{EnvSource, Layered, ProcessEnv};
pub use types::*;
