use crate::config::AuthConfig;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Represents the claims encoded within a JWT (JSON Web Token).
///
/// The subject is the stringified user id; expiry is in epoch seconds.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject of the token: the user's unique identifier, string-encoded.
    pub sub: String,
    /// Expiration timestamp (seconds since epoch) for the token.
    pub exp: usize,
}

/// Issues and verifies signed, time-limited bearer tokens.
///
/// Holds the signing keys, algorithm, and default lifetime, all built once
/// from [`AuthConfig`] at startup and shared read-only across requests.
/// Verification is stateless: a token is valid iff its signature checks out
/// against the configured secret, its algorithm matches the configured one,
/// and the current time is before its expiry.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    algorithm: Algorithm,
    default_ttl: Duration,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        let algorithm = config
            .algorithm
            .parse::<Algorithm>()
            .expect("ALGORITHM must be a valid JWT algorithm name");
        Self {
            encoding: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.secret.as_bytes()),
            algorithm,
            default_ttl: Duration::minutes(config.token_ttl_minutes),
        }
    }

    /// Signs a token for `user_id` expiring after the configured lifetime.
    pub fn issue(&self, user_id: i32) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_with_ttl(user_id, self.default_ttl)
    }

    pub fn issue_with_ttl(
        &self,
        user_id: i32,
        ttl: Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let expiration = (Utc::now() + ttl).timestamp();

        let claims = Claims {
            sub: user_id.to_string(),
            exp: expiration as usize,
        };

        encode(&Header::new(self.algorithm), &claims, &self.encoding)
    }

    /// Decodes and signature-checks a token, returning the subject user id.
    ///
    /// Returns `None` when the signature is invalid, the token is malformed,
    /// the algorithm differs from the configured one, the token is expired,
    /// or the subject is missing or not an integer. Expiry is checked with
    /// zero leeway: a token is accepted strictly while `now < exp`.
    pub fn verify(&self, token: &str) -> Option<i32> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let data = decode::<Claims>(token, &self.decoding, &validation).ok()?;
        data.claims.sub.parse::<i32>().ok()
    }
}
