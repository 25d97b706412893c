//! Access control extractors.
//!
//! - [`auth::RequireAdmin`] -- Requires valid admin Basic-Auth credentials.

pub mod auth;
