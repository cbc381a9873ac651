/// Shared JWT module for Caffeine Haven services
///
/// Access tokens are signed with HS256 using a single shared secret
/// (`ACCESS_WEB_TOKEN`). The web client posts whatever identity payload it
/// holds for the signed-in user; the only claim the backend relies on is
/// `email`, which the admin gate uses to look the user up.
///
/// ## Usage
///
/// ```rust
/// use crypto_core::jwt::TokenSigner;
/// use chrono::Duration;
///
/// let signer = TokenSigner::new("a-long-shared-secret", Duration::hours(1)).unwrap();
/// let token = signer
///     .sign(serde_json::json!({ "email": "barista@example.com" }))
///     .unwrap();
/// let claims = signer.validate(&token).unwrap();
/// assert_eq!(claims.email, "barista@example.com");
/// ```
use anyhow::{anyhow, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// Constants
// ============================================================================

/// Default access token lifetime
pub const ACCESS_TOKEN_EXPIRY_HOURS: i64 = 1;

const JWT_ALGORITHM: Algorithm = Algorithm::HS256;

/// Claim names managed by the signer; client-supplied values are dropped
const RESERVED_CLAIMS: [&str; 3] = ["email", "iat", "exp"];

// ============================================================================
// Data Structures
// ============================================================================

/// JWT claims: the registered timestamps, the user's email and any extra
/// fields the client included when requesting the token
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    /// Email address of the signed-in user
    pub email: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Remaining client-supplied claims, carried through verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Claims {
    /// Build claims from a client payload, stamping `iat`/`exp` from `ttl`
    ///
    /// The payload must be a JSON object with a string `email` field.
    pub fn from_payload(payload: Value, ttl: Duration) -> Result<Self> {
        let Value::Object(mut fields) = payload else {
            return Err(anyhow!("Token payload must be a JSON object"));
        };

        let email = match fields.get("email") {
            Some(Value::String(email)) if !email.trim().is_empty() => email.clone(),
            _ => return Err(anyhow!("Token payload must contain an email")),
        };

        for reserved in RESERVED_CLAIMS {
            fields.remove(reserved);
        }

        let now = Utc::now();
        Ok(Self {
            email,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            extra: fields,
        })
    }
}

// ============================================================================
// Signer
// ============================================================================

/// Holds the HS256 keys derived from the shared secret
///
/// Built once at startup and shared through application state.
#[derive(Clone)]
pub struct TokenSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl std::fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSigner")
            .field("ttl_secs", &self.ttl.num_seconds())
            .finish_non_exhaustive()
    }
}

impl TokenSigner {
    /// Create a signer from the shared secret
    ///
    /// ## Errors
    ///
    /// Returns error if the secret is empty or the lifetime is not positive.
    pub fn new(secret: &str, ttl: Duration) -> Result<Self> {
        if secret.is_empty() {
            return Err(anyhow!("JWT secret must not be empty"));
        }
        if ttl <= Duration::zero() {
            return Err(anyhow!("JWT lifetime must be positive"));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        })
    }

    /// Token lifetime in seconds
    pub fn ttl_secs(&self) -> i64 {
        self.ttl.num_seconds()
    }

    /// Sign a client payload into an access token
    pub fn sign(&self, payload: Value) -> Result<String> {
        let claims = Claims::from_payload(payload, self.ttl)?;
        self.sign_claims(&claims)
    }

    /// Sign prepared claims
    pub fn sign_claims(&self, claims: &Claims) -> Result<String> {
        encode(&Header::new(JWT_ALGORITHM), claims, &self.encoding_key)
            .map_err(|e| anyhow!("Failed to generate access token: {e}"))
    }

    /// Validate signature and expiry, returning the decoded claims
    ///
    /// ## Errors
    ///
    /// Returns error if:
    /// - Token signature is invalid
    /// - Token is expired
    /// - Token format is malformed
    pub fn validate(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::new(JWT_ALGORITHM);
        validation.validate_exp = true;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(error = %e, "token validation failed");
                anyhow!("Token validation failed: {e}")
            })
    }
}

// ============================================================================
// Tests
// ============================================================================
