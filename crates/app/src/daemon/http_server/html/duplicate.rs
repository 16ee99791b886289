use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use tracing::instrument;

use common::prelude::{duplicate_name, StoreError};

use super::{does_not_exist, HtmlError};
use crate::daemon::http_server::gate::SignedIn;
use crate::daemon::http_server::session::found;
use crate::ServiceState;

/// Copy a document to `<stem>copy.<ext>`.
///
/// The copy name is not checked: duplicating the same document
///  twice overwrites the first copy.
#[instrument(skip(state, signed_in), fields(user = %signed_in.username))]
pub async fn handler(
    signed_in: SignedIn,
    State(state): State<ServiceState>,
    Path(file_name): Path<String>,
) -> Result<Response, HtmlError> {
    let SignedIn { mut session, .. } = signed_in;
    let copy_name = duplicate_name(&file_name);

    match state.store().cp(&file_name, &copy_name).await {
        Ok(()) => {}
        Err(StoreError::NotFound(_)) => return Ok(does_not_exist(session, &file_name)),
        Err(e) => return Err(e.into()),
    }
    tracing::info!("duplicated {} as {}", file_name, copy_name);

    session.flash(format!("{} has been duplicated as {}.", file_name, copy_name));
    Ok((session, found("/")).into_response())
}
