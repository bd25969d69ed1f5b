use actix_web::{dev::ServiceRequest, web, Error, HttpMessage};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use tracing::{debug, error};

use crate::error::ApiError;
use crate::models::Claims;

/// Tokens are valid for two hours from issuance.
const TOKEN_TTL_HOURS: i64 = 2;

/// Why a token was rejected. The HTTP boundary collapses all three into a
/// single 403 so the response never hints at which check failed.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("token signature invalid")]
    Invalid,
    #[error("token malformed")]
    Malformed,
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;
        match err.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidToken
            | ErrorKind::Base64(_)
            | ErrorKind::Json(_)
            | ErrorKind::Utf8(_) => TokenError::Malformed,
            _ => TokenError::Invalid,
        }
    }
}

/// Signs and verifies bearer tokens with the secret configured at startup.
/// Constructed once in `main` and shared through app data; the secret is
/// never read from the environment after that.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        TokenService {
            encoding: EncodingKey::from_secret(secret.as_ref()),
            decoding: DecodingKey::from_secret(secret.as_ref()),
        }
    }

    pub fn issue(&self, id: i64, username: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let expiration = chrono::Utc::now()
            .checked_add_signed(chrono::Duration::hours(TOKEN_TTL_HOURS))
            .expect("valid timestamp")
            .timestamp() as usize;

        let claims = Claims {
            id,
            username: username.to_owned(),
            exp: expiration,
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::default();
        // No leeway: the two-hour bound is exact.
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(TokenError::from)
    }
}

/// Bearer validator for the protected scope. A missing header is 401, a
/// token that fails verification is 403; on success the decoded claims are
/// attached to the request for the handler to pick up via `ReqData`.
pub async fn validator(
    req: ServiceRequest,
    credentials: Option<BearerAuth>,
) -> Result<ServiceRequest, (Error, ServiceRequest)> {
    let Some(credentials) = credentials else {
        return Err((ApiError::MissingToken.into(), req));
    };

    let Some(tokens) = req.app_data::<web::Data<TokenService>>() else {
        error!("TokenService missing from app data");
        return Err((ApiError::Internal.into(), req));
    };

    match tokens.verify(credentials.token()) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            Ok(req)
        }
        Err(err) => {
            debug!("rejected bearer token: {err}");
            Err((ApiError::InvalidToken.into(), req))
        }
    }
}
