//! Shared cryptographic helpers for Caffeine Haven services.
//!
//! - `jwt`: HS256 access-token signing and validation

pub mod jwt;

pub use jwt::{Claims, TokenSigner};
