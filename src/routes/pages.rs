use crate::{
    cookies, database,
    routes::{redirect, server_error},
    state::ServerState,
};
use http_body_util::Full;
use hyper::{
    body::{Bytes, Incoming as Body},
    header, Request, Response, StatusCode,
};
use log::error;

const INDEX_HTML: &str = include_str!("../../views/index.html");
const DASHBOARD_HTML: &str = include_str!("../../views/dashboard.html");

pub fn handle_index() -> Response<Full<Bytes>> {
    html_response(INDEX_HTML.to_string())
}

pub async fn handle_dashboard(req: Request<Body>, state: ServerState) -> Response<Full<Bytes>> {
    let token = cookies::session_token(req.headers());
    dashboard(&state, token.as_deref()).await
}

pub async fn dashboard(state: &ServerState, token: Option<&str>) -> Response<Full<Bytes>> {
    let account_id = match token.and_then(|token| state.sessions.resolve(token)) {
        Some(id) => id,
        None => return redirect("/"),
    };

    match database::get_account_by_id(&state.db_pool, account_id).await {
        Ok(Some(account)) => {
            let page = DASHBOARD_HTML
                .replace("{{username}}", &escape_html(&account.username))
                .replace("{{balance}}", &account.balance.to_string());
            html_response(page)
        }
        Ok(None) => redirect("/"),
        Err(e) => {
            error!("dashboard query failed: {}", e);
            server_error()
        }
    }
}

fn html_response(body: String) -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
        .body(Full::new(Bytes::from(body)))
        .unwrap()
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::seed_account;
    use crate::routes::test_util::{body_string, location, test_state};

    #[test]
    fn index_serves_login_and_signup_forms() {
        let response = handle_index();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(INDEX_HTML.contains("action=\"/login\""));
        assert!(INDEX_HTML.contains("action=\"/signup\""));
    }

    #[tokio::test]
    async fn dashboard_requires_a_session() {
        let state = test_state("").await;
        let response = dashboard(&state, None).await;
        assert_eq!(location(&response), Some("/"));

        let response = dashboard(&state, Some("bogus-token")).await;
        assert_eq!(location(&response), Some("/"));
    }

    #[tokio::test]
    async fn dashboard_shows_username_and_balance() {
        let state = test_state("").await;
        let alice = seed_account(&state.db_pool, "alice", 100).await;
        let token = state.sessions.create(alice.id);

        let response = dashboard(&state, Some(&token)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("alice"));
        assert!(body.contains("100"));
    }

    #[tokio::test]
    async fn dashboard_escapes_the_username() {
        let state = test_state("").await;
        let account = seed_account(&state.db_pool, "<script>x</script>", 1).await;
        let token = state.sessions.create(account.id);

        let body = body_string(dashboard(&state, Some(&token)).await).await;
        assert!(body.contains("&lt;script&gt;x&lt;/script&gt;"));
        assert!(!body.contains("<script>x"));
    }

    #[test]
    fn escape_html_covers_the_meta_characters() {
        assert_eq!(escape_html("a&b<c>\"d'"), "a&amp;b&lt;c&gt;&quot;d&#39;");
        assert_eq!(escape_html("plain"), "plain");
    }
}
