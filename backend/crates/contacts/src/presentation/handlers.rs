//! HTTP Handlers
//!
//! Mounted behind the bearer gate, which puts the caller's [`Identity`]
//! into request extensions.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::{Extension, Json};
use kernel::id::ContactId;
use kernel::identity::Identity;
use std::sync::Arc;

use crate::application::{
    CreateContactUseCase, DeleteContactUseCase, GetContactUseCase, ListContactsUseCase,
    UpdateContactUseCase,
};
use crate::domain::repository::ContactRepository;
use crate::error::{ContactsError, ContactsResult};
use crate::presentation::dto::{ActionResponse, ContactRequest, ContactResponse};

/// Shared state for contact handlers
#[derive(Clone)]
pub struct ContactsAppState<R>
where
    R: ContactRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

impl<R> ContactsAppState<R>
where
    R: ContactRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: R) -> Self {
        Self {
            repo: Arc::new(repo),
        }
    }
}

fn parse_id(raw: &str) -> ContactsResult<ContactId> {
    ContactId::parse_str(raw).map_err(|_| ContactsError::InvalidId(raw.to_string()))
}

/// GET /contacts
pub async fn list_contacts<R>(
    State(state): State<ContactsAppState<R>>,
    Extension(actor): Extension<Identity>,
) -> ContactsResult<Json<Vec<ContactResponse>>>
where
    R: ContactRepository + Clone + Send + Sync + 'static,
{
    let contacts = ListContactsUseCase::new(state.repo.clone())
        .execute(&actor)
        .await?;

    Ok(Json(contacts.into_iter().map(ContactResponse::from).collect()))
}

/// POST /contacts
pub async fn create_contact<R>(
    State(state): State<ContactsAppState<R>>,
    Extension(actor): Extension<Identity>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> ContactsResult<Json<ActionResponse>>
where
    R: ContactRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload?;

    CreateContactUseCase::new(state.repo.clone())
        .execute(&actor, req.into_create_input())
        .await?;

    Ok(Json(ActionResponse::now("Contact is added successfully!")))
}

/// GET /contacts/{id}
///
/// Unknown ids answer `null` with 200.
pub async fn get_contact<R>(
    State(state): State<ContactsAppState<R>>,
    Extension(actor): Extension<Identity>,
    Path(id): Path<String>,
) -> ContactsResult<Json<Option<ContactResponse>>>
where
    R: ContactRepository + Clone + Send + Sync + 'static,
{
    let id = parse_id(&id)?;

    let contact = GetContactUseCase::new(state.repo.clone())
        .execute(&actor, id)
        .await?;

    Ok(Json(contact.map(ContactResponse::from)))
}

/// PATCH /contacts/{id}
pub async fn update_contact<R>(
    State(state): State<ContactsAppState<R>>,
    Extension(actor): Extension<Identity>,
    Path(id): Path<String>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> ContactsResult<Json<ActionResponse>>
where
    R: ContactRepository + Clone + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    let Json(req) = payload?;

    UpdateContactUseCase::new(state.repo.clone())
        .execute(&actor, id, req.into_update())
        .await?;

    Ok(Json(ActionResponse::now("Contact has been updated")))
}

/// DELETE /contacts/{id}
pub async fn delete_contact<R>(
    State(state): State<ContactsAppState<R>>,
    Extension(actor): Extension<Identity>,
    Path(id): Path<String>,
) -> ContactsResult<Json<ActionResponse>>
where
    R: ContactRepository + Clone + Send + Sync + 'static,
{
    let id = parse_id(&id)?;

    DeleteContactUseCase::new(state.repo.clone())
        .execute(&actor, id)
        .await?;

    Ok(Json(ActionResponse::now("Contact is deleted")))
}
