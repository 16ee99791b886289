use std::time::SystemTime;

use askama::Template;
use askama_axum::IntoResponse;
use axum::extract::State;
use axum::response::Response;
use tracing::instrument;

use common::prelude::sort_documents;

use super::HtmlError;
use crate::daemon::http_server::session::{PageContext, Session};
use crate::ServiceState;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub page: PageContext,
    pub documents: Vec<DocumentDisplayInfo>,
}

#[derive(Debug, Clone)]
pub struct DocumentDisplayInfo {
    pub name: String,
    pub modified: String,
}

#[instrument(skip(state, session))]
pub async fn handler(
    State(state): State<ServiceState>,
    mut session: Session,
) -> Result<Response, HtmlError> {
    let mut documents = state.store().ls().await?;
    sort_documents(&mut documents, session.sort());

    tracing::debug!(
        count = documents.len(),
        sort = ?session.sort(),
        "listing documents"
    );

    let documents = documents
        .into_iter()
        .map(|doc| DocumentDisplayInfo {
            modified: format_timestamp(doc.modified),
            name: doc.name,
        })
        .collect();

    let template = IndexTemplate {
        page: session.page(),
        documents,
    };

    Ok((session, template).into_response())
}

fn format_timestamp(ts: SystemTime) -> String {
    let ts = time::OffsetDateTime::from(ts);
    ts.format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| ts.to_string())
}
