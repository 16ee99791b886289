use std::convert::Infallible;

use axum::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, IntoResponseParts, Response, ResponseParts};
use axum_extra::extract::cookie::{Cookie, Key, SameSite, SignedCookieJar};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use http::request::Parts;
use serde::{Deserialize, Serialize};

use common::prelude::SortMode;

/// Name of the signed cookie the session travels in
pub const SESSION_COOKIE: &str = "cms_session";

/**
 * Sessions
 * ========
 * Everything the server remembers about a browser lives in
 *  one signed cookie: who is signed in, a one-shot flash
 *  message and the index sort order. Nothing is kept server
 *  side, so there is no global session table to look up.
 *
 * `Session` is both an extractor and a response part. Handlers
 *  take it in, change it, and hand it back in their return
 *  value, which is the only way a change (a flash message
 *  included) reaches the browser.
 */
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortMode>,
}

impl SessionData {
    /// Cookie value: url-safe base64 of the json encoding
    pub fn encode(&self) -> String {
        serde_json::to_vec(self)
            .map(|json| URL_SAFE_NO_PAD.encode(json))
            .unwrap_or_default()
    }

    /// Anything that fails to decode is treated as a fresh session
    pub fn decode(value: &str) -> Option<Self> {
        let json = URL_SAFE_NO_PAD.decode(value).ok()?;
        serde_json::from_slice(&json).ok()
    }
}

/// Per-request view of the session cookie
#[derive(Debug)]
pub struct Session {
    jar: SignedCookieJar,
    data: SessionData,
}

/// What every rendered page needs to know about the session
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    pub username: Option<String>,
    pub flash: Option<String>,
}

impl Session {
    pub fn data(&self) -> &SessionData {
        &self.data
    }

    pub fn username(&self) -> Option<&str> {
        self.data.username.as_deref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.data.username.is_some()
    }

    pub fn sign_in(&mut self, username: impl Into<String>) {
        self.data.username = Some(username.into());
    }

    pub fn sign_out(&mut self) {
        self.data.username = None;
    }

    pub fn sort(&self) -> Option<SortMode> {
        self.data.sort
    }

    pub fn set_sort(&mut self, mode: SortMode) {
        self.data.sort = Some(mode);
    }

    /// Queue a message for the next rendered page. Replaces any pending one.
    pub fn flash(&mut self, message: impl Into<String>) {
        self.data.flash = Some(message.into());
    }

    pub fn take_flash(&mut self) -> Option<String> {
        self.data.flash.take()
    }

    /// Context for rendering a page now. Consumes the pending flash.
    pub fn page(&mut self) -> PageContext {
        PageContext {
            username: self.data.username.clone(),
            flash: self.take_flash(),
        }
    }

    /// Context for re-rendering a form with `message`, in place of any pending flash.
    pub fn page_with(&mut self, message: impl Into<String>) -> PageContext {
        let mut page = self.page();
        page.flash = Some(message.into());
        page
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
    Key: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = SignedCookieJar::<Key>::from_request_parts(parts, state).await?;
        let data = jar
            .get(SESSION_COOKIE)
            .and_then(|cookie| SessionData::decode(cookie.value()))
            .unwrap_or_default();
        Ok(Self { jar, data })
    }
}

impl IntoResponseParts for Session {
    type Error = Infallible;

    fn into_response_parts(self, res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        let cookie = Cookie::build((SESSION_COOKIE, self.data.encode()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax);
        self.jar.add(cookie).into_response_parts(res)
    }
}

/// `302 Found` to `location`.
///
/// axum's `Redirect` only offers 303/307/308, browsers and form
///  posts here expect the classic 302.
pub fn found(location: impl Into<String>) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.into())]).into_response()
}
