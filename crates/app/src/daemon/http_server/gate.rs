use axum::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::Key;
use http::request::Parts;

use super::session::{found, Session};

pub const SIGN_IN_REQUIRED: &str = "You must be signed in to perform this action.";

/// Extractor for actions only signed in users may take.
///
/// Put it first in a handler's arguments so it runs before the
///  body is read: a signed out request is turned away with a
///  flash and a redirect to the index, and the handler never runs.
#[derive(Debug)]
pub struct SignedIn {
    pub session: Session,
    pub username: String,
}

#[derive(Debug)]
pub struct Unauthorized(Session);

#[async_trait]
impl<S> FromRequestParts<S> for SignedIn
where
    S: Send + Sync,
    Key: FromRef<S>,
{
    type Rejection = Unauthorized;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let mut session = match Session::from_request_parts(parts, state).await {
            Ok(session) => session,
            Err(never) => match never {},
        };

        match session.username().map(str::to_string) {
            Some(username) => Ok(Self { session, username }),
            None => {
                tracing::info!(
                    method = %parts.method,
                    path = %parts.uri.path(),
                    "signed out request turned away"
                );
                session.flash(SIGN_IN_REQUIRED);
                Err(Unauthorized(session))
            }
        }
    }
}

impl IntoResponse for Unauthorized {
    fn into_response(self) -> Response {
        (self.0, found("/")).into_response()
    }
}
