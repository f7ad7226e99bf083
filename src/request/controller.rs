use crate::middleware::auth::{Claims, ensure_matches_claim};
use crate::request::model::RequestQuery;
use crate::request::service::RequestService;
use crate::utils::error::CustomError;
use crate::utils::helpers::document_to_json;
use actix_web::{HttpResponse, web};
use log::debug;
use serde_json::{Map, Value};

/// GET /requested?email=&volunteerEmail=
pub async fn list_requests(
    request_service: web::Data<RequestService>,
    query: web::Query<RequestQuery>,
    claims: Option<web::ReqData<Claims>>,
) -> Result<HttpResponse, CustomError> {
    let claims = claims.map(web::ReqData::into_inner);
    debug!("valid token: {:?}", claims.as_ref().map(|c| &c.payload));

    ensure_matches_claim(query.email.as_deref(), claims.as_ref(), "volunteerEmail")?;

    let requests = request_service
        .list_by_volunteer(query.volunteer_email.as_deref())
        .await?;
    let requests: Vec<Value> = requests.into_iter().map(document_to_json).collect();

    Ok(HttpResponse::Ok().json(requests))
}

/// POST /requested
pub async fn create_request(
    request_service: web::Data<RequestService>,
    body: web::Json<Map<String, Value>>,
) -> Result<HttpResponse, CustomError> {
    let ack = request_service.create_request(body.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ack))
}

/// DELETE /requested/{id}
pub async fn delete_request(
    request_service: web::Data<RequestService>,
    path: web::Path<String>,
) -> Result<HttpResponse, CustomError> {
    let ack = request_service.delete_request(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ack))
}
