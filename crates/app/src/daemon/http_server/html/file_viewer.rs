use askama::Template;
use askama_axum::IntoResponse;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::Response;
use tracing::instrument;

use common::prelude::{render_markdown, DocumentKind};

use super::{does_not_exist, read_document, HtmlError};
use crate::daemon::http_server::session::{PageContext, Session};
use crate::ServiceState;

#[derive(Template)]
#[template(path = "document.html")]
pub struct DocumentTemplate {
    pub page: PageContext,
    pub file_name: String,
    /// Rendered markdown, inserted unescaped
    pub body: String,
}

/// Show a document to anyone, signed in or not.
///
/// Markdown is rendered into the page layout. Text and anything
///  else goes out as raw bytes and leaves the session untouched,
///  so a pending flash survives until the next HTML page.
#[instrument(skip(state, session))]
pub async fn handler(
    State(state): State<ServiceState>,
    mut session: Session,
    Path(file_name): Path<String>,
) -> Result<Response, HtmlError> {
    let Some(content) = read_document(&state, &file_name).await? else {
        return Ok(does_not_exist(session, &file_name));
    };

    match DocumentKind::from_name(&file_name) {
        DocumentKind::Markdown => {
            let body = render_markdown(&String::from_utf8_lossy(&content));
            let template = DocumentTemplate {
                page: session.page(),
                file_name,
                body,
            };
            Ok((session, template).into_response())
        }
        kind => Ok((
            [(header::CONTENT_TYPE, kind.content_type().to_string())],
            content,
        )
            .into_response()),
    }
}
