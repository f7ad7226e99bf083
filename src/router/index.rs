use crate::auth::index::auth_routes;
use crate::config::{AuthPolicy, RouteName};
use crate::middleware::auth::verify_token;
use crate::request::index::request_routes;
use crate::volunteer::index::volunteer_routes;
use actix_web::dev::HttpServiceFactory;
use actix_web::http::Method;
use actix_web::middleware::{Condition, from_fn};
use actix_web::{FromRequest, Handler, HttpResponse, Responder, get, guard, web};

#[get("/")]
async fn default() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Volunteer Management server is running")
}

pub fn routes(cfg: &mut web::ServiceConfig, policy: &AuthPolicy) {
    cfg.configure(auth_routes);
    volunteer_routes(cfg, policy);
    request_routes(cfg, policy);
    cfg.service(default);
}

/// A single method on a single path, behind token verification when the
/// policy asks for it. Each endpoint is its own resource so that routes
/// sharing a path can carry different auth requirements.
pub fn endpoint<F, Args>(
    policy: &AuthPolicy,
    name: RouteName,
    method: Method,
    path: &str,
    handler: F,
) -> impl HttpServiceFactory + use<F, Args>
where
    F: Handler<Args>,
    Args: FromRequest + 'static,
    F::Output: Responder + 'static,
{
    web::resource(path)
        .guard(guard::Method(method))
        .route(web::route().to(handler))
        .wrap(Condition::new(
            policy.requires_token(name),
            from_fn(verify_token),
        ))
}
