//! JWT session-token validation.

use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

use jobsify_domain::user::UserRole;

/// Identity extracted from a validated session token.
#[derive(Debug, Clone)]
pub struct TokenInfo {
    /// Token subject: the user's email address.
    pub email: String,
    pub role: UserRole,
    /// Expiration timestamp (seconds since UNIX epoch).
    pub exp: u64,
}

/// Errors returned by [`validate_access_token`].
///
/// Signature failures are deliberately folded into [`Malformed`] — a token
/// whose signature does not verify is indistinguishable from garbage to the
/// caller, and the distinction must not leak to clients.
///
/// [`Malformed`]: TokenError::Malformed
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
}

/// JWT claims payload shared by token creation and validation.
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Subject: user email.
    pub sub: String,
    /// User role as its string wire value.
    pub role: String,
    /// Issued-at timestamp (seconds since UNIX epoch).
    pub iat: u64,
    /// Expiration timestamp (seconds since UNIX epoch).
    pub exp: u64,
}

/// Validate a bearer token and return the parsed identity.
///
/// Validation: HS256, exp checked with zero leeway (expiry is the only bound
/// on a token's validity), required claims: `exp` + `sub`. The signature
/// covers every claim, so any mutation of subject or expiry fails here.
pub fn validate_access_token(token: &str, secret: &str) -> Result<TokenInfo, TokenError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.leeway = 0;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Malformed,
    })?;

    let role = UserRole::from_str(&data.claims.role).ok_or(TokenError::Malformed)?;
    Ok(TokenInfo {
        email: data.claims.sub,
        role,
        exp: data.claims.exp,
    })
}
