use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{error::ErrorUnauthorized, http::header, Error, HttpMessage};
use futures::future::LocalBoxFuture;

use crate::auth::config::AuthConfig;
use crate::auth::session::verify_session_token;
use crate::auth::Principal;

const PUBLIC_PATHS: &[&str] = &["/", "/health", "/account/register", "/account/login"];

#[derive(Clone)]
pub struct AuthLayer {
    cfg: AuthConfig,
}

impl AuthLayer {
    pub fn new(cfg: AuthConfig) -> Self {
        Self { cfg }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthLayer
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = AuthMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddleware {
            service: Rc::new(service),
            inner: self.clone(),
        }))
    }
}

pub struct AuthMiddleware<S> {
    service: Rc<S>,
    inner: AuthLayer,
}

impl<S, B> Service<ServiceRequest> for AuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let path = req.path().to_string();
        if PUBLIC_PATHS.contains(&path.as_str()) {
            let fut = self.service.call(req);
            #[allow(clippy::redundant_async_block)]
            return Box::pin(async move { fut.await });
        }

        let token_opt = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.strip_prefix("Bearer "))
            .map(|s| s.to_string());
        if token_opt.as_deref().unwrap_or("").is_empty() {
            return Box::pin(async { Err(ErrorUnauthorized("missing or invalid auth header")) });
        }

        let token = token_opt.unwrap();
        let inner = self.inner.clone();
        let srv = self.service.clone();
        Box::pin(async move {
            match verify_session_token(&token, &inner.cfg) {
                Ok((user_id, role)) => {
                    req.extensions_mut().insert(Principal { user_id, role });
                    srv.call(req).await
                }
                Err(_) => Err(ErrorUnauthorized("authentication required")),
            }
        })
    }
}
