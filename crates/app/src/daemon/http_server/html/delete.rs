use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use tracing::instrument;

use super::HtmlError;
use crate::daemon::http_server::gate::SignedIn;
use crate::daemon::http_server::session::found;
use crate::ServiceState;

#[instrument(skip(state, signed_in), fields(user = %signed_in.username))]
pub async fn handler(
    signed_in: SignedIn,
    State(state): State<ServiceState>,
    Path(file_name): Path<String>,
) -> Result<Response, HtmlError> {
    let SignedIn { mut session, .. } = signed_in;

    if state.store().rm(&file_name).await? {
        tracing::info!("deleted {}", file_name);
    } else {
        tracing::debug!("{} was already gone", file_name);
    }

    session.flash(format!("{} has been deleted.", file_name));
    Ok((session, found("/")).into_response())
}
