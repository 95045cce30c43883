// ============================
// crates/userhub-lib/src/auth/mod.rs
// ============================
//! Authentication module.

pub mod extract;
pub mod password;
pub mod service;
pub mod token;

pub use extract::CurrentUser;
pub use password::{
    hash_password, hash_password_secure, verify_password, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH,
};
pub use service::AuthService;
pub use token::TokenCodec;
