use actix_cors::Cors;
use actix_web::http::header;

/// Cross-origin access for the configured front-ends, with cookies allowed.
pub fn cors(origins: &[String]) -> Cors {
    origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
        .supports_credentials()
        .max_age(3600)
}
