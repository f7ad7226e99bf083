use super::controller::{create_request, delete_request, list_requests};
use crate::config::{AuthPolicy, RouteName};
use crate::router::index::endpoint;
use actix_web::http::Method;
use actix_web::web;

pub fn request_routes(cfg: &mut web::ServiceConfig, policy: &AuthPolicy) {
    cfg.service(endpoint(
        policy,
        RouteName::ListRequests,
        Method::GET,
        "/requested",
        list_requests,
    ));
    cfg.service(endpoint(
        policy,
        RouteName::CreateRequest,
        Method::POST,
        "/requested",
        create_request,
    ));
    cfg.service(endpoint(
        policy,
        RouteName::DeleteRequest,
        Method::DELETE,
        "/requested/{id}",
        delete_request,
    ));
}
