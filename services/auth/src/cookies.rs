//! Browser cookies issued and cleared by the authentication service

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use common::session::SESSION_COOKIE;
use time::{Duration, OffsetDateTime};

/// Cookies cleared on logout besides the session cookie
pub const PROFILE_COOKIES: [&str; 2] = ["auth-email", "auth-nome-completo"];

/// Build the session cookie with a fixed expiry `minutes` from now
pub fn session_cookie(token: String, minutes: i64, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .expires(OffsetDateTime::now_utc() + Duration::minutes(minutes))
        .build()
}

fn removal_cookie(name: &'static str) -> Cookie<'static> {
    let mut cookie = Cookie::build((name, "")).path("/").build();
    cookie.make_removal();
    cookie
}

/// Expire the session cookie and the profile cookies
///
/// Removal cookies are always emitted, whether or not the browser sent them.
pub fn clear_auth_cookies(jar: CookieJar) -> CookieJar {
    std::iter::once(SESSION_COOKIE)
        .chain(PROFILE_COOKIES)
        .fold(jar, |jar, name| jar.add(removal_cookie(name)))
}
