// ============================
// crates/userhub-lib/src/auth/password.rs
// ============================
//! Password hashing and verification.
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use zeroize::Zeroize;

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length accepted at registration
pub const MAX_PASSWORD_LENGTH: usize = 40;

/// Hash a password using Argon2id with a fresh random salt.
///
/// Output is a PHC string carrying the algorithm tag, parameters and salt,
/// safe to store directly.
pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("failed to hash password: {e}"))?
        .to_string();
    Ok(hash)
}

/// Verify a password against a stored hash.
///
/// A malformed stored hash and a wrong password both collapse to `false`;
/// the caller never learns which check failed. Comparison is delegated to
/// the argon2 verifier, which does not exit early.
pub fn verify_password(hash: &str, plain: &str) -> bool {
    let parsed_hash = match PasswordHash::new(hash) {
        Ok(h) => h,
        Err(_) => return false,
    };
    Argon2::default()
        .verify_password(plain.as_bytes(), &parsed_hash)
        .is_ok()
}

/// Check that a password length is within the accepted bounds
pub fn password_length_ok(password: &str) -> bool {
    (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&password.len())
}

/// Securely hash a password and zeroize the original
pub fn hash_password_secure(plain: &mut String) -> anyhow::Result<String> {
    let hash = hash_password(plain)?;
    plain.zeroize();
    Ok(hash)
}
