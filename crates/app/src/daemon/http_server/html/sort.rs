use axum::extract::Path;
use axum::response::{IntoResponse, Response};
use tracing::instrument;

use common::prelude::SortMode;

use crate::daemon::http_server::session::{found, Session};

/// Remember the index order for the rest of the session
#[instrument(skip(session))]
pub async fn handler(mut session: Session, Path(mode): Path<SortMode>) -> Response {
    session.set_sort(mode);
    (session, found("/")).into_response()
}
