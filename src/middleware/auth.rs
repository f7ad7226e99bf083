use crate::config::Environment;
use crate::utils::error::CustomError;
use actix_web::body::{EitherBody, MessageBody};
use actix_web::cookie::{Cookie, SameSite};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::Next;
use actix_web::{Error, HttpMessage, ResponseError, web};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const TOKEN_COOKIE: &str = "token";

/// One year, counted as 365.25 days.
const TOKEN_TTL_SECONDS: i64 = 31_557_600;

/// A signed payload. Whatever object the client posted to `/jwt` is kept
/// verbatim in `payload`; `iat`/`exp` are owned by the server.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    #[serde(flatten)]
    pub payload: Map<String, Value>,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }
}

/// Signs and verifies `token` cookies, and knows the cookie attributes for the
/// current environment.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    environment: Environment,
}

impl TokenService {
    pub fn new(secret: &str, environment: Environment) -> Self {
        // `aud` is part of the client payload, not an audience we enforce.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_aud = false;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            environment,
        }
    }

    pub fn create_token(&self, mut payload: Map<String, Value>) -> Result<String, CustomError> {
        payload.remove("iat");
        payload.remove("exp");

        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            payload,
            iat: now,
            exp: now + TOKEN_TTL_SECONDS,
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            CustomError::InternalServerError(format!("Token generation failed: {}", e))
        })
    }

    pub fn verify_token(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        decode::<Claims>(token, &self.decoding_key, &self.validation).map(|data| data.claims)
    }

    fn base_cookie(&self, value: String) -> Cookie<'static> {
        let production = self.environment.is_production();
        Cookie::build(TOKEN_COOKIE, value)
            .path("/")
            .http_only(true)
            .secure(production)
            .same_site(if production {
                SameSite::None
            } else {
                SameSite::Strict
            })
            .finish()
    }

    pub fn session_cookie(&self, token: String) -> Cookie<'static> {
        self.base_cookie(token)
    }

    /// Same attributes as the session cookie, empty value, already expired.
    pub fn removal_cookie(&self) -> Cookie<'static> {
        let mut cookie = self.base_cookie(String::new());
        cookie.make_removal();
        cookie
    }
}

/// Reject the request with 401 unless it carries a valid `token` cookie.
/// On success the decoded [`Claims`] are stored in the request extensions.
pub async fn verify_token<B: MessageBody>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, Error> {
    match authenticate(&req) {
        Ok(claims) => {
            debug!("value in the token: {:?}", claims.payload);
            req.extensions_mut().insert(claims);
            next.call(req)
                .await
                .map(ServiceResponse::map_into_left_body)
        }
        Err(err) => {
            let response = err.error_response();
            Ok(req.into_response(response).map_into_right_body())
        }
    }
}

/// 403 unless `query` equals `field` of the token payload. Both absent counts
/// as equal; a non-string payload value never equals a query string.
pub fn ensure_matches_claim(
    query: Option<&str>,
    claims: Option<&Claims>,
    field: &str,
) -> Result<(), CustomError> {
    let claimed = claims.and_then(|claims| claims.field(field));
    let same = match (query, claimed) {
        (None, None) => true,
        (Some(query), Some(Value::String(claimed))) => query == claimed,
        _ => false,
    };

    if same {
        Ok(())
    } else {
        Err(CustomError::forbidden())
    }
}

fn authenticate(req: &ServiceRequest) -> Result<Claims, CustomError> {
    let tokens = req
        .app_data::<web::Data<TokenService>>()
        .ok_or_else(|| CustomError::InternalServerError("Token service not configured".into()))?;

    let token = req
        .cookie(TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
        .ok_or_else(CustomError::unauthorized)?;

    tokens.verify_token(&token).map_err(|e| {
        warn!("Rejected token: {}", e);
        CustomError::unauthorized()
    })
}
