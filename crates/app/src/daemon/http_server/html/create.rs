use askama::Template;
use askama_axum::IntoResponse;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use axum::Form;
use serde::Deserialize;
use tracing::instrument;

use common::prelude::validate_filename;

use super::HtmlError;
use crate::daemon::http_server::gate::SignedIn;
use crate::daemon::http_server::session::{found, PageContext};
use crate::ServiceState;

#[derive(Template)]
#[template(path = "new.html")]
pub struct NewDocumentTemplate {
    pub page: PageContext,
    pub file_name: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateForm {
    #[serde(default)]
    pub filename: String,
}

#[instrument(skip(signed_in))]
pub async fn form(signed_in: SignedIn) -> Response {
    let SignedIn { mut session, .. } = signed_in;
    let template = NewDocumentTemplate {
        page: session.page(),
        file_name: String::new(),
    };
    (session, template).into_response()
}

/// Create an empty document, or send the form back with what was wrong
#[instrument(skip(state, signed_in), fields(user = %signed_in.username))]
pub async fn handler(
    signed_in: SignedIn,
    State(state): State<ServiceState>,
    Form(form): Form<CreateForm>,
) -> Result<Response, HtmlError> {
    let SignedIn { mut session, .. } = signed_in;
    let file_name = form.filename;

    let existing = state.store().names().await?;
    let check = validate_filename(&file_name, &existing);

    if let Some(message) = check.message() {
        tracing::debug!(?check, name = %file_name, "rejected new document name");
        let template = NewDocumentTemplate {
            page: session.page_with(message),
            file_name,
        };
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, session, template).into_response());
    }

    state.store().write(&file_name, b"").await?;
    tracing::info!("created {}", file_name);

    session.flash(format!("{} has been created.", file_name));
    Ok((session, found("/")).into_response())
}
