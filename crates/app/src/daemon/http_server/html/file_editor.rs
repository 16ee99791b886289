use askama::Template;
use askama_axum::IntoResponse;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Form;
use serde::Deserialize;
use tracing::instrument;

use super::{does_not_exist, read_document, HtmlError};
use crate::daemon::http_server::gate::SignedIn;
use crate::daemon::http_server::session::{found, PageContext};
use crate::ServiceState;

#[derive(Template)]
#[template(path = "edit.html")]
pub struct FileEditorTemplate {
    pub page: PageContext,
    pub file_name: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateForm {
    #[serde(default)]
    pub content: String,
}

/// Edit form for an existing document
#[instrument(skip(state, signed_in))]
pub async fn handler(
    signed_in: SignedIn,
    State(state): State<ServiceState>,
    Path(file_name): Path<String>,
) -> Result<Response, HtmlError> {
    let SignedIn { mut session, .. } = signed_in;

    let Some(content) = read_document(&state, &file_name).await? else {
        return Ok(does_not_exist(session, &file_name));
    };

    let template = FileEditorTemplate {
        page: session.page(),
        file_name,
        content: String::from_utf8_lossy(&content).into_owned(),
    };

    Ok((session, template).into_response())
}

/// Overwrite a document with the submitted content.
///
/// The content is stored verbatim and a missing document is
///  simply created.
#[instrument(skip(state, signed_in, form), fields(user = %signed_in.username))]
pub async fn update(
    signed_in: SignedIn,
    State(state): State<ServiceState>,
    Path(file_name): Path<String>,
    Form(form): Form<UpdateForm>,
) -> Result<Response, HtmlError> {
    let SignedIn { mut session, .. } = signed_in;

    state
        .store()
        .write(&file_name, form.content.as_bytes())
        .await?;
    tracing::info!(bytes = form.content.len(), "updated {}", file_name);

    session.flash(format!("{} has been updated.", file_name));
    Ok((session, found("/")).into_response())
}
