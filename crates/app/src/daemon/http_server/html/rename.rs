use askama::Template;
use askama_axum::IntoResponse;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Form;
use serde::Deserialize;
use tracing::instrument;

use common::prelude::{validate_filename, StoreError};

use super::{does_not_exist, HtmlError};
use crate::daemon::http_server::gate::SignedIn;
use crate::daemon::http_server::session::{found, PageContext};
use crate::ServiceState;

#[derive(Template)]
#[template(path = "rename.html")]
pub struct RenameTemplate {
    pub page: PageContext,
    pub file_name: String,
    pub new_file_name: String,
}

#[derive(Debug, Deserialize)]
pub struct RenameForm {
    #[serde(default)]
    pub new_filename: String,
}

#[instrument(skip(signed_in))]
pub async fn form(signed_in: SignedIn, Path(file_name): Path<String>) -> Response {
    let SignedIn { mut session, .. } = signed_in;
    let template = RenameTemplate {
        page: session.page(),
        new_file_name: file_name.clone(),
        file_name,
    };
    (session, template).into_response()
}

/// Rename a document after checking the new name like a new document's
#[instrument(skip(state, signed_in), fields(user = %signed_in.username))]
pub async fn handler(
    signed_in: SignedIn,
    State(state): State<ServiceState>,
    Path(file_name): Path<String>,
    Form(form): Form<RenameForm>,
) -> Result<Response, HtmlError> {
    let SignedIn { mut session, .. } = signed_in;
    let new_file_name = form.new_filename;

    let existing = state.store().names().await?;
    let check = validate_filename(&new_file_name, &existing);

    if let Some(message) = check.message() {
        tracing::debug!(?check, name = %new_file_name, "rejected new name");
        let template = RenameTemplate {
            page: session.page_with(message),
            file_name,
            new_file_name,
        };
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, session, template).into_response());
    }

    match state.store().mv(&file_name, &new_file_name).await {
        Ok(()) => {}
        Err(StoreError::NotFound(_)) => return Ok(does_not_exist(session, &file_name)),
        Err(e) => return Err(e.into()),
    }
    tracing::info!("renamed {} to {}", file_name, new_file_name);

    session.flash("File has been renamed.");
    Ok((session, found("/")).into_response())
}
