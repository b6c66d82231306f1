//! Declarative route entries
//!
//! Each crate describes its endpoints as [`RouteSpec`] values; the API binary
//! assembles them into one router and puts the bearer-token gate in front of
//! every entry marked [`Access::Authenticated`].

use axum::handler::Handler;
use axum::http::Method;
use axum::routing::{self, MethodRouter};

/// Capability a caller needs to reach a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Anyone
    Public,
    /// A valid bearer token
    Authenticated,
}

/// One verb + path pair with its handler
pub struct RouteSpec<S> {
    pub method: Method,
    pub path: &'static str,
    pub access: Access,
    pub handler: MethodRouter<S>,
}

impl<S> RouteSpec<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn get<H, T>(path: &'static str, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        Self::public(Method::GET, path, routing::get(handler))
    }

    pub fn post<H, T>(path: &'static str, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        Self::public(Method::POST, path, routing::post(handler))
    }

    pub fn patch<H, T>(path: &'static str, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        Self::public(Method::PATCH, path, routing::patch(handler))
    }

    pub fn delete<H, T>(path: &'static str, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        Self::public(Method::DELETE, path, routing::delete(handler))
    }

    /// Require a valid bearer token for this entry
    pub fn authenticated(mut self) -> Self {
        self.access = Access::Authenticated;
        self
    }

    fn public(method: Method, path: &'static str, handler: MethodRouter<S>) -> Self {
        Self {
            method,
            path,
            access: Access::Public,
            handler,
        }
    }
}

impl<S> std::fmt::Debug for RouteSpec<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteSpec")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("access", &self.access)
            .finish()
    }
}
