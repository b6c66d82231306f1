//! Route table and middleware chain

use auth::domain::repository::UserRepository;
use auth::handlers::AuthAppState;
use auth::middleware::require_bearer;
use auth::{AuthConfig, auth_routes};
use axum::extract::FromRef;
use axum::http::{HeaderValue, Method, header};
use axum::{Router, middleware};
use contacts::domain::repository::ContactRepository;
use contacts::{ContactsAppState, contact_routes};
use kernel::route::{Access, RouteSpec};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state; handlers pull their slice out via [`FromRef`]
#[derive(Clone)]
pub struct AppState<U, C>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    C: ContactRepository + Clone + Send + Sync + 'static,
{
    pub auth: AuthAppState<U>,
    pub contacts: ContactsAppState<C>,
}

impl<U, C> AppState<U, C>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    C: ContactRepository + Clone + Send + Sync + 'static,
{
    pub fn new(users: U, contacts: C, auth_config: &AuthConfig) -> Self {
        Self {
            auth: AuthAppState::new(users, auth_config),
            contacts: ContactsAppState::new(contacts),
        }
    }
}

impl<U, C> FromRef<AppState<U, C>> for AuthAppState<U>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    C: ContactRepository + Clone + Send + Sync + 'static,
{
    fn from_ref(state: &AppState<U, C>) -> Self {
        state.auth.clone()
    }
}

impl<U, C> FromRef<AppState<U, C>> for ContactsAppState<C>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    C: ContactRepository + Clone + Send + Sync + 'static,
{
    fn from_ref(state: &AppState<U, C>) -> Self {
        state.contacts.clone()
    }
}

/// GET /
async fn liveness() -> &'static str {
    "Server is Live!"
}

/// Every endpoint the server exposes
pub fn route_table<U, C>() -> Vec<RouteSpec<AppState<U, C>>>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    C: ContactRepository + Clone + Send + Sync + 'static,
{
    let mut routes = vec![RouteSpec::get("/", liveness)];
    routes.extend(auth_routes::<U, _>());
    routes.extend(contact_routes::<C, _>());
    routes
}

/// Build the full router
///
/// Authenticated entries get the bearer gate as a route layer, so it runs
/// after routing and before any body is read.
pub fn build_router<U, C>(state: AppState<U, C>, cors: CorsLayer) -> Router
where
    U: UserRepository + Clone + Send + Sync + 'static,
    C: ContactRepository + Clone + Send + Sync + 'static,
{
    let gate = state.auth.gate();
    let mut router = Router::new();

    for spec in route_table::<U, C>() {
        tracing::debug!(
            method = %spec.method,
            path = spec.path,
            access = ?spec.access,
            "Registering route"
        );

        let handler = match spec.access {
            Access::Public => spec.handler,
            Access::Authenticated => spec.handler.route_layer(
                middleware::from_fn_with_state(gate.clone(), require_bearer),
            ),
        };
        router = router.route(spec.path, handler);
    }

    router
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// CORS for the browser frontend
///
/// Tokens travel in the `Authorization` header, so no credentials mode.
pub fn cors_layer(origins: Option<&[HeaderValue]>) -> CorsLayer {
    let allow_origin = match origins {
        Some(origins) => AllowOrigin::list(origins.iter().cloned()),
        None => AllowOrigin::any(),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
}
