use askama::Template;
use askama_axum::IntoResponse;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use axum::Form;
use serde::Deserialize;
use tracing::instrument;

use super::HtmlError;
use crate::daemon::http_server::session::{found, PageContext, Session};
use crate::ServiceState;

pub const WELCOME: &str = "Welcome";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const SIGNED_OUT: &str = "You have been signed out.";

#[derive(Template)]
#[template(path = "signin.html")]
pub struct SigninTemplate {
    pub page: PageContext,
    pub username: String,
}

#[derive(Deserialize)]
pub struct SigninForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[instrument(skip(session))]
pub async fn signin_form(mut session: Session) -> Response {
    let template = SigninTemplate {
        page: session.page(),
        username: String::new(),
    };
    (session, template).into_response()
}

#[instrument(skip(state, session, form), fields(username = %form.username))]
pub async fn signin(
    State(state): State<ServiceState>,
    mut session: Session,
    Form(form): Form<SigninForm>,
) -> Result<Response, HtmlError> {
    let SigninForm { username, password } = form;

    if state
        .credentials()
        .authenticate(&username, &password)
        .await?
    {
        tracing::info!("signed in");
        session.sign_in(username);
        session.flash(WELCOME);
        return Ok((session, found("/")).into_response());
    }

    tracing::info!("sign in refused");
    let template = SigninTemplate {
        page: session.page_with(INVALID_CREDENTIALS),
        username,
    };
    Ok((StatusCode::UNPROCESSABLE_ENTITY, session, template).into_response())
}

/// Always succeeds, whether or not anyone was signed in
#[instrument(skip(session), fields(username = ?session.username()))]
pub async fn signout(mut session: Session) -> Response {
    session.sign_out();
    session.flash(SIGNED_OUT);
    (session, found("/")).into_response()
}
