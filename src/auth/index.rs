use super::controller::{issue_token, logout};
use actix_web::web;

pub fn auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/jwt", web::post().to(issue_token))
        .route("/logout", web::post().to(logout));
}
