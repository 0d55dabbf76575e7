//! Bearer token minting and verification.
//!
//! The credential hash serves as both the HMAC secret and the token's only
//! claim: knowledge of the stored secret is necessary and sufficient to
//! mint or verify a token, and rotating the credential invalidates every
//! token issued before the rotation.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
}

/// Mint a bearer token for the given credential hash.
pub fn mint(credential_hash: &str) -> Result<String> {
    let claims = Claims {
        sub: credential_hash.to_string(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(credential_hash.as_bytes()),
    )
    .map_err(|e| Error::Internal(format!("token signing failed: {e}")))
}

/// Verify a bearer token against the current credential hash.
///
/// Tokens carry no expiry; validity is tied entirely to the credential
/// still being the one that signed them.
pub fn verify(token: &str, credential_hash: &str) -> Result<()> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.required_spec_claims.clear();
    validation.validate_exp = false;

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(credential_hash.as_bytes()),
        &validation,
    )
    .map_err(|_| Error::InvalidToken)?;

    if data.claims.sub != credential_hash {
        return Err(Error::InvalidToken);
    }
    Ok(())
}
