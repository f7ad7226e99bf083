use crate::config::{AuthPolicy, Environment};
use crate::database::memory::MemoryStore;
use crate::middleware::auth::{TOKEN_COOKIE, TokenService};
use crate::request::service::RequestService;
use crate::router::index::routes;
use crate::volunteer::service::VolunteerService;
use actix_web::cookie::Cookie;
use actix_web::web;
use serde_json::Value;
use std::sync::Arc;

pub const TEST_SECRET: &str = "test_secret";

/// Everything a handler test needs: both collections in memory and a signer.
pub struct TestContext {
    pub volunteers: Arc<MemoryStore>,
    pub requests: Arc<MemoryStore>,
    pub tokens: TokenService,
    pub policy: AuthPolicy,
    pub allow_unfiltered_listing: bool,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            volunteers: Arc::new(MemoryStore::new()),
            requests: Arc::new(MemoryStore::new()),
            tokens: TokenService::new(TEST_SECRET, Environment::Development),
            policy: AuthPolicy::default(),
            allow_unfiltered_listing: true,
        }
    }

    pub fn with_policy(mut self, policy: AuthPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn without_unfiltered_listing(mut self) -> Self {
        self.allow_unfiltered_listing = false;
        self
    }

    pub fn config(&self) -> impl FnOnce(&mut web::ServiceConfig) + use<> {
        let volunteers =
            VolunteerService::new(self.volunteers.clone(), self.allow_unfiltered_listing);
        let requests = RequestService::new(self.requests.clone(), self.allow_unfiltered_listing);
        let tokens = self.tokens.clone();
        let policy = self.policy.clone();

        move |cfg: &mut web::ServiceConfig| {
            cfg.app_data(web::Data::new(tokens))
                .app_data(web::Data::new(volunteers))
                .app_data(web::Data::new(requests));
            routes(cfg, &policy);
        }
    }

    pub fn cookie_for(&self, payload: Value) -> Cookie<'static> {
        let token = self
            .tokens
            .create_token(payload.as_object().cloned().unwrap())
            .unwrap();
        Cookie::new(TOKEN_COOKIE, token)
    }
}
