use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::{Error, Role, User};

/// Lifetime of issued tokens.
const TOKEN_TTL_HOURS: i64 = 1;

/// Claim set embedded in every bearer token: enough to identify the caller
/// and authorize routes without touching the credential store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaim {
    /// User id.
    pub sub: i32,
    pub account_number: String,
    pub role: Role,
    pub iat: usize,
    pub exp: usize,
}

impl TokenClaim {
    /// Signs a one-hour HS256 token for the given user.
    pub fn issue(user: &User, secret: &str) -> Result<String, Error> {
        let now = Utc::now();
        let claims = TokenClaim {
            sub: user.id,
            account_number: user.account_number.clone(),
            role: user.role,
            iat: now.timestamp() as usize,
            exp: (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp() as usize,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_ref()),
        )
        .map_err(|e| Error::Internal(e.to_string()))
    }

    /// Verifies signature and expiry, returning the embedded claims.
    pub fn verify(token: &str, secret: &str) -> Result<TokenClaim, Error> {
        decode::<TokenClaim>(
            token,
            &DecodingKey::from_secret(secret.as_ref()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|_| Error::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    const SECRET: &str = "test-secret";

    fn sample_user() -> User {
        User {
            id: 7,
            full_name: "Thandi Mokoena".to_string(),
            id_number: "9001015800084".to_string(),
            account_number: "10012345".to_string(),
            password_hash: "irrelevant".to_string(),
            role: Role::User,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn issue_and_verify_roundtrip() {
        let token = TokenClaim::issue(&sample_user(), SECRET).unwrap();
        let claims = TokenClaim::verify(&token, SECRET).unwrap();

        assert_eq!(claims.sub, 7);
        assert_eq!(claims.account_number, "10012345");
        assert_eq!(claims.role, Role::User);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = TokenClaim::issue(&sample_user(), SECRET).unwrap();
        let result = TokenClaim::verify(&token, "another-secret");
        assert!(matches!(result, Err(Error::InvalidToken)));
    }

    #[test]
    fn garbage_token_is_rejected() {
        let result = TokenClaim::verify("not.a.token", SECRET);
        assert!(matches!(result, Err(Error::InvalidToken)));
    }

    #[test]
    fn expired_token_is_rejected() {
        let now = Utc::now();
        let claims = TokenClaim {
            sub: 7,
            account_number: "10012345".to_string(),
            role: Role::User,
            iat: (now - Duration::hours(2)).timestamp() as usize,
            exp: (now - Duration::hours(1)).timestamp() as usize,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_ref()),
        )
        .unwrap();

        let result = TokenClaim::verify(&token, SECRET);
        assert!(matches!(result, Err(Error::InvalidToken)));
    }
}
