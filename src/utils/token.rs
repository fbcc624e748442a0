use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::error::{ErrorMessage, HttpError};

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub iat: usize,
    pub exp: usize,
}

/// Verify a token minted by the identity provider and return its subject
/// (the user id). This service never mints tokens itself.
pub fn decode_token<T: Into<String>>(token: T, secret: &[u8]) -> Result<String, HttpError> {
    let decoded = decode::<TokenClaims>(
        &token.into(),
        &DecodingKey::from_secret(secret),
        &Validation::default(),
    );

    match decoded {
        Ok(token) => Ok(token.claims.sub),
        Err(_) => Err(HttpError::unauthorized(
            ErrorMessage::InvalidToken.to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &[u8] = b"test-secret";

    fn mint_token(user_id: &str, secret: &[u8], expires_in_seconds: i64) -> String {
        let now = Utc::now();
        let claims = TokenClaims {
            sub: user_id.to_string(),
            iat: now.timestamp() as usize,
            exp: (now + Duration::seconds(expires_in_seconds)).timestamp() as usize,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret),
        )
        .unwrap()
    }

    #[test]
    fn extracts_the_subject() {
        let token = mint_token("a39c5036-7f49-4b9a-92e4-5a8b0b7a5f64", SECRET, 60);
        let sub = decode_token(token, SECRET).unwrap();
        assert_eq!(sub, "a39c5036-7f49-4b9a-92e4-5a8b0b7a5f64");
    }

    #[test]
    fn rejects_a_token_signed_with_a_different_secret() {
        let token = mint_token("user", SECRET, 60);
        assert!(decode_token(token, b"other-secret").is_err());
    }

    #[test]
    fn rejects_an_expired_token() {
        let token = mint_token("user", SECRET, -60);
        assert!(decode_token(token, SECRET).is_err());
    }
}
