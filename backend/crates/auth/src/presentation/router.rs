//! Auth route entries

use axum::extract::FromRef;
use kernel::route::RouteSpec;

use crate::domain::repository::UserRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// `POST /register` and `POST /login`; both public.
pub fn auth_routes<R, S>() -> Vec<RouteSpec<S>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
    S: Clone + Send + Sync + 'static,
    AuthAppState<R>: FromRef<S>,
{
    vec![
        RouteSpec::post("/register", handlers::register::<R>),
        RouteSpec::post("/login", handlers::login::<R>),
    ]
}
