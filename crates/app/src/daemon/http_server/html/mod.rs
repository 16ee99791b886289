use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;

use common::prelude::{CredentialsError, StoreError};

mod create;
mod delete;
mod duplicate;
mod file_editor;
mod file_viewer;
mod index;
mod rename;
mod sort;
mod users;

use super::session::{found, Session};
use crate::ServiceState;

pub fn router(state: ServiceState) -> Router<ServiceState> {
    Router::new()
        .route("/", get(index::handler))
        .route("/sort/:mode", post(sort::handler))
        .route("/new", get(create::form))
        .route("/create", post(create::handler))
        .route("/users/signin", get(users::signin_form).post(users::signin))
        .route("/users/signout", post(users::signout))
        .route("/:filename", get(file_viewer::handler).post(file_editor::update))
        .route("/:filename/edit", get(file_editor::handler))
        .route("/:filename/rename", get(rename::form).post(rename::handler))
        .route("/:filename/duplicate", post(duplicate::handler))
        .route("/:filename/delete", post(delete::handler))
        .with_state(state)
}

/// Read `name` from the store, `None` if there is no such document
async fn read_document(state: &ServiceState, name: &str) -> Result<Option<Vec<u8>>, StoreError> {
    if !state.store().exists(name).await? {
        return Ok(None);
    }

    match state.store().cat(name).await {
        Ok(content) => Ok(Some(content)),
        // removed between the check and the read
        Err(StoreError::NotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Flash "<name> does not exist." and send the browser back to the index
fn does_not_exist(mut session: Session, name: &str) -> Response {
    session.flash(format!("{} does not exist.", name));
    (session, found("/")).into_response()
}

/// Faults the HTML handlers do not recover from.
///
/// Bad user input never ends up here: it is answered with a 422
///  form or a redirect by the handler itself.
#[derive(Debug, thiserror::Error)]
pub enum HtmlError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("credentials error: {0}")]
    Credentials(#[from] CredentialsError),
}

impl IntoResponse for HtmlError {
    fn into_response(self) -> Response {
        match self {
            HtmlError::Store(StoreError::InvalidName(name)) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid document name: {}", name),
            )
                .into_response(),
            e => {
                tracing::error!("unhandled fault: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Unexpected error".to_string(),
                )
                    .into_response()
            }
        }
    }
}
