use crate::middleware::auth::{Claims, ensure_matches_claim};
use crate::utils::error::CustomError;
use crate::utils::helpers::document_to_json;
use crate::volunteer::model::{OwnerQuery, VolunteerPostFields};
use crate::volunteer::service::VolunteerService;
use actix_web::{HttpResponse, web};
use log::debug;
use serde_json::{Map, Value};

/// GET /volunteers
pub async fn list_volunteers(
    volunteer_service: web::Data<VolunteerService>,
) -> Result<HttpResponse, CustomError> {
    let posts = volunteer_service.list_by_deadline().await?;
    let posts: Vec<Value> = posts.into_iter().map(document_to_json).collect();

    Ok(HttpResponse::Ok().json(posts))
}

/// GET /volunteers/{id}
///
/// An unknown id answers `null` rather than 404.
pub async fn get_volunteer(
    volunteer_service: web::Data<VolunteerService>,
    path: web::Path<String>,
) -> Result<HttpResponse, CustomError> {
    let post = volunteer_service.get_post(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(post.map(document_to_json)))
}

/// GET /volunteer?email=
pub async fn list_own_volunteers(
    volunteer_service: web::Data<VolunteerService>,
    query: web::Query<OwnerQuery>,
    claims: Option<web::ReqData<Claims>>,
) -> Result<HttpResponse, CustomError> {
    let claims = claims.map(web::ReqData::into_inner);
    debug!("valid token: {:?}", claims.as_ref().map(|c| &c.payload));

    let email = query.email.as_deref();
    ensure_matches_claim(email, claims.as_ref(), "email")?;

    let posts = volunteer_service.list_by_owner(email).await?;
    let posts: Vec<Value> = posts.into_iter().map(document_to_json).collect();

    Ok(HttpResponse::Ok().json(posts))
}

/// POST /volunteers
pub async fn create_volunteer(
    volunteer_service: web::Data<VolunteerService>,
    body: web::Json<Map<String, Value>>,
) -> Result<HttpResponse, CustomError> {
    let ack = volunteer_service.create_post(body.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ack))
}

/// PUT /volunteers/{id}
pub async fn update_volunteer(
    volunteer_service: web::Data<VolunteerService>,
    path: web::Path<String>,
    body: web::Json<VolunteerPostFields>,
) -> Result<HttpResponse, CustomError> {
    let ack = volunteer_service
        .update_post(&path.into_inner(), body.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ack))
}

/// DELETE /volunteers/{id}
pub async fn delete_volunteer(
    volunteer_service: web::Data<VolunteerService>,
    path: web::Path<String>,
) -> Result<HttpResponse, CustomError> {
    let ack = volunteer_service.delete_post(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ack))
}
