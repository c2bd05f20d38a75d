use crate::{
    auth, cookies, database,
    model::account::{LoginForm, SignupForm},
    routes::{bad_request, parse_form, redirect, server_error},
    state::ServerState,
};
use http_body_util::{BodyExt, Full};
use hyper::{
    body::{Bytes, Incoming as Body},
    header, Request, Response,
};
use log::{debug, error};
use std::collections::HashMap;

pub async fn handle_login(req: Request<Body>, state: ServerState) -> Response<Full<Bytes>> {
    let body_bytes = match req.into_body().collect().await {
        Ok(body) => body.to_bytes(),
        Err(_) => return bad_request(),
    };
    login(&state, &parse_form(&body_bytes)).await
}

pub async fn login(state: &ServerState, pairs: &HashMap<String, String>) -> Response<Full<Bytes>> {
    let form = match LoginForm::from_pairs(pairs) {
        Some(form) => form,
        None => return redirect("/"),
    };

    match auth::verify_login(&state.db_pool, &form.username, &form.password).await {
        Ok(Some(account)) => {
            let token = state.sessions.create(account.id);
            let mut response = redirect("/dashboard");
            response.headers_mut().insert(
                header::SET_COOKIE,
                cookies::session_cookie(&token).parse().unwrap(),
            );
            response
        }
        Ok(None) => {
            debug!("login failed for {:?}", form.username);
            redirect("/")
        }
        Err(e) => {
            error!("login query failed: {}", e);
            server_error()
        }
    }
}

pub async fn handle_logout(req: Request<Body>, state: ServerState) -> Response<Full<Bytes>> {
    let token = cookies::session_token(req.headers());
    logout(&state, token.as_deref())
}

pub fn logout(state: &ServerState, token: Option<&str>) -> Response<Full<Bytes>> {
    if let Some(token) = token {
        state.sessions.destroy(token);
    }
    let mut response = redirect("/");
    response.headers_mut().insert(
        header::SET_COOKIE,
        cookies::clear_session_cookie().parse().unwrap(),
    );
    response
}

pub async fn handle_signup(req: Request<Body>, state: ServerState) -> Response<Full<Bytes>> {
    let body_bytes = match req.into_body().collect().await {
        Ok(body) => body.to_bytes(),
        Err(_) => return bad_request(),
    };
    signup(&state, &parse_form(&body_bytes)).await
}

// Bad passphrase, taken username and success all redirect to the same
// place: responses must not reveal whether a username exists.
pub async fn signup(state: &ServerState, pairs: &HashMap<String, String>) -> Response<Full<Bytes>> {
    let form = match SignupForm::from_pairs(pairs) {
        Some(form) => form,
        None => return redirect("/"),
    };

    if !auth::verify_admin_passphrase(&state.config, &form.admin_password) {
        debug!("signup rejected: bad admin passphrase");
        return redirect("/");
    }

    match database::get_account_by_username(&state.db_pool, &form.username).await {
        Ok(Some(_)) => {
            debug!("signup rejected: username {:?} taken", form.username);
            return redirect("/");
        }
        Ok(None) => {}
        Err(e) => {
            error!("signup lookup failed: {}", e);
            return server_error();
        }
    }

    let password_hash = match auth::hash_password(&form.password) {
        Ok(hash) => hash,
        Err(e) => {
            error!("password hashing failed: {}", e);
            return server_error();
        }
    };

    match database::create_account(&state.db_pool, &form.username, &password_hash).await {
        Ok(account) => {
            debug!("created account {} ({:?})", account.id, account.username);
            redirect("/")
        }
        Err(e) => {
            error!("account insert failed: {}", e);
            server_error()
        }
    }
}
