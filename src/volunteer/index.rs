use super::controller::{
    create_volunteer, delete_volunteer, get_volunteer, list_own_volunteers, list_volunteers,
    update_volunteer,
};
use crate::config::{AuthPolicy, RouteName};
use crate::router::index::endpoint;
use actix_web::http::Method;
use actix_web::web;

pub fn volunteer_routes(cfg: &mut web::ServiceConfig, policy: &AuthPolicy) {
    cfg.service(endpoint(
        policy,
        RouteName::ListVolunteers,
        Method::GET,
        "/volunteers",
        list_volunteers,
    ));
    cfg.service(endpoint(
        policy,
        RouteName::CreateVolunteer,
        Method::POST,
        "/volunteers",
        create_volunteer,
    ));
    cfg.service(endpoint(
        policy,
        RouteName::GetVolunteer,
        Method::GET,
        "/volunteers/{id}",
        get_volunteer,
    ));
    cfg.service(endpoint(
        policy,
        RouteName::UpdateVolunteer,
        Method::PUT,
        "/volunteers/{id}",
        update_volunteer,
    ));
    cfg.service(endpoint(
        policy,
        RouteName::DeleteVolunteer,
        Method::DELETE,
        "/volunteers/{id}",
        delete_volunteer,
    ));
    cfg.service(endpoint(
        policy,
        RouteName::ListOwnVolunteers,
        Method::GET,
        "/volunteer",
        list_own_volunteers,
    ));
}
