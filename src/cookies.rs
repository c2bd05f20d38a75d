use hyper::header::{self, HeaderMap};

pub const SESSION_COOKIE: &str = "session";

pub fn session_token(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}

pub fn session_cookie(token: &str) -> String {
    format!("{}={}; HttpOnly; Path=/", SESSION_COOKIE, token)
}

pub fn clear_session_cookie() -> String {
    format!("{}=; Max-Age=0; HttpOnly; Path=/", SESSION_COOKIE)
}
