use crate::middleware::auth::TokenService;
use crate::utils::error::CustomError;
use actix_web::{HttpResponse, web};
use log::info;
use serde_json::{Map, Value, json};

/// POST /jwt
///
/// Signs whatever object the client sends and hands it back as the `token` cookie.
pub async fn issue_token(
    token_service: web::Data<TokenService>,
    payload: web::Json<Map<String, Value>>,
) -> Result<HttpResponse, CustomError> {
    let payload = payload.into_inner();
    info!("issuing token for {:?}", payload.get("email"));

    let token = token_service.create_token(payload)?;

    Ok(HttpResponse::Ok()
        .cookie(token_service.session_cookie(token))
        .json(json!({ "success": true })))
}

/// POST /logout
pub async fn logout(
    token_service: web::Data<TokenService>,
    body: Option<web::Json<Value>>,
) -> HttpResponse {
    info!("logging out {:?}", body.map(web::Json::into_inner));

    HttpResponse::Ok()
        .cookie(token_service.removal_cookie())
        .json(json!({ "success": true }))
}
