//! Session cookie middleware
//!
//! Resolves the `sessionId` cookie to a session before the item handlers
//! run, and sends a fresh cookie back whenever a new session was issued.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::{Cookie, CookieJar};
use std::sync::Arc;

use pantry_core::{Resolution, Session};

use crate::state::AppState;

/// Name of the cookie carrying the session token
pub const SESSION_COOKIE: &str = "sessionId";

/// The caller's session, inserted into request extensions by the middleware
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Arc<Session>);

pub async fn resolve_session(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> (CookieJar, Response) {
    let token = jar.get(SESSION_COOKIE).map(|c| c.value().to_string());
    let Resolution { session, issued } = state.pantry().resolve_session(token.as_deref());

    request
        .extensions_mut()
        .insert(CurrentSession(Arc::clone(&session)));

    let response = next.run(request).await;

    if issued {
        (jar.add(session_cookie(&session)), response)
    } else {
        (jar, response)
    }
}

/// Cookie for a newly issued session, valid for the session's remaining lifetime
pub fn session_cookie(session: &Session) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, session.id.clone()))
        .path("/")
        .http_only(true)
        .max_age(time::Duration::seconds(session.remaining_secs()))
        .build()
}
