//! Contact route entries

use axum::extract::FromRef;
use kernel::route::RouteSpec;

use crate::domain::repository::ContactRepository;
use crate::presentation::handlers::{self, ContactsAppState};

/// The five contact endpoints, all behind the bearer gate
pub fn contact_routes<R, S>() -> Vec<RouteSpec<S>>
where
    R: ContactRepository + Clone + Send + Sync + 'static,
    S: Clone + Send + Sync + 'static,
    ContactsAppState<R>: FromRef<S>,
{
    vec![
        RouteSpec::get("/contacts", handlers::list_contacts::<R>).authenticated(),
        RouteSpec::post("/contacts", handlers::create_contact::<R>).authenticated(),
        RouteSpec::get("/contacts/{id}", handlers::get_contact::<R>).authenticated(),
        RouteSpec::patch("/contacts/{id}", handlers::update_contact::<R>).authenticated(),
        RouteSpec::delete("/contacts/{id}", handlers::delete_contact::<R>).authenticated(),
    ]
}
