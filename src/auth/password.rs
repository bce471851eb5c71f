use bcrypt::{hash, verify};

// Work factor for the salted, iterated bcrypt scheme. Deliberately CPU-costly
// to slow offline brute force.
const BCRYPT_COST: u32 = 12;

/// Hashes a plaintext password with a per-call random salt.
///
/// Two calls with the same input produce different digests; matching is done
/// by `verify_password`, never by comparing digests.
pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    hash(password, BCRYPT_COST)
}

/// Returns true iff `digest` was produced from `password`.
///
/// A malformed digest counts as a mismatch rather than an error, so callers
/// can treat any `false` as failed credentials.
pub fn verify_password(password: &str, digest: &str) -> bool {
    verify(password, digest).unwrap_or(false)
}
