use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    web, Error, HttpMessage,
};
use futures::future::{ready, LocalBoxFuture, Ready};

use crate::auth::identity;
use crate::auth::token::TokenService;
use crate::error::AppError;

/// Bearer-token gate for the authenticated API scope.
///
/// Verifies the `Authorization: Bearer` header against the [`TokenService`]
/// registered in app data and inserts the resolved user id into request
/// extensions, where the `AuthenticatedUserId` extractor picks it up.
/// Registration and login are the only paths inside the scope that skip the
/// check.
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService { service }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // Credential endpoints are reachable without a token.
        let path = req.path();
        if path == "/api/v1/register" || path == "/api/v1/login" {
            let fut = self.service.call(req);
            return Box::pin(fut);
        }

        let tokens = req.app_data::<web::Data<TokenService>>().cloned();

        let auth_header = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        let tokens = match tokens {
            Some(tokens) => tokens,
            None => {
                let app_err =
                    AppError::InternalServerError("TokenService not registered in app data".into());
                return Box::pin(async move { Err(app_err.into()) });
            }
        };

        match auth_header {
            Some(token) => match identity::resolve(&tokens, token) {
                Ok(user_id) => {
                    req.extensions_mut().insert(user_id);
                    let fut = self.service.call(req);
                    Box::pin(fut)
                }
                Err(app_err) => {
                    log::debug!("rejected bearer token on {}", req.path());
                    Box::pin(async move { Err(app_err.into()) })
                }
            },
            None => {
                let app_err = AppError::Unauthorized("Missing token".into());
                Box::pin(async move { Err(app_err.into()) })
            }
        }
    }
}
