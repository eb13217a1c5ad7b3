use crate::{abstract_trait::JwtServiceTrait, utils::AppError};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{
    DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind as JwtError,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub admin_id: i64,
    pub exp: usize,
    pub iat: usize,
}

impl Claims {
    pub fn new(admin_id: i64, exp: usize, iat: usize) -> Self {
        Claims { admin_id, exp, iat }
    }
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub jwt_secret: String,
}

impl JwtConfig {
    pub fn new(jwt_secret: &str) -> Self {
        JwtConfig {
            jwt_secret: jwt_secret.to_string(),
        }
    }
}

#[async_trait]
impl JwtServiceTrait for JwtConfig {
    fn generate_token(&self, admin_id: i64) -> Result<String, AppError> {
        let now = Utc::now();
        let iat = now.timestamp() as usize;
        let exp = (now + Duration::minutes(60)).timestamp() as usize;

        let claims = Claims::new(admin_id, exp, iat);

        match encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        ) {
            Ok(token) => Ok(token),
            Err(err) => Err(AppError::TokenGenerationError(err)),
        }
    }

    fn verify_token(&self, token: &str) -> Result<i64, AppError> {
        let decoding_key = DecodingKey::from_secret(self.jwt_secret.as_ref());

        match decode::<Claims>(token, &decoding_key, &Validation::default()) {
            Ok(token_data) => Ok(token_data.claims.admin_id),
            Err(err) => {
                if let JwtError::ExpiredSignature = err.kind() {
                    Err(AppError::TokenExpiredError)
                } else {
                    Err(AppError::TokenValidationError)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_trait::JwtServiceTrait;

    #[test]
    fn token_roundtrip_preserves_admin_id() {
        let jwt = JwtConfig::new("test-secret");

        let token = jwt.generate_token(42).expect("token");
        let admin_id = jwt.verify_token(&token).expect("verify");

        assert_eq!(admin_id, 42);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let signer = JwtConfig::new("secret-a");
        let verifier = JwtConfig::new("secret-b");

        let token = signer.generate_token(7).expect("token");

        assert!(matches!(
            verifier.verify_token(&token),
            Err(AppError::TokenValidationError)
        ));
    }

    #[test]
    fn garbage_token_is_rejected() {
        let jwt = JwtConfig::new("test-secret");

        assert!(jwt.verify_token("not-a-jwt").is_err());
    }
}
