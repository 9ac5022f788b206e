// src/auth/token.rs
//
// Opaque bearer tokens for verification links and session cookies.
// Only the SHA-256 of a token is ever written to the database.
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

pub const TOKEN_BYTES: usize = 32;

pub type TokenHash = [u8; 32];

/// 32 random bytes from the OS RNG, URL-safe base64 without padding (43 chars).
pub fn new_token() -> String {
    new_token_from(&mut OsRng)
}

pub fn new_token_from<R: RngCore>(rng: &mut R) -> String {
    let mut buf = [0u8; TOKEN_BYTES];
    rng.fill_bytes(&mut buf);
    URL_SAFE_NO_PAD.encode(buf)
}

pub fn hash_token(token: &str) -> TokenHash {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Sha256::digest(token.as_bytes()));
    out
}
