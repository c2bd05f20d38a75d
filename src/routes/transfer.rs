use crate::{
    cookies, database,
    model::account::TransferForm,
    routes::{bad_request, parse_form, redirect, server_error},
    state::ServerState,
};
use http_body_util::{BodyExt, Full};
use hyper::{
    body::{Bytes, Incoming as Body},
    Request, Response,
};
use log::{debug, error};
use std::collections::HashMap;

pub async fn handle_transfer(req: Request<Body>, state: ServerState) -> Response<Full<Bytes>> {
    let token = cookies::session_token(req.headers());
    let body_bytes = match req.into_body().collect().await {
        Ok(body) => body.to_bytes(),
        Err(_) => return bad_request(),
    };
    transfer(&state, token.as_deref(), &parse_form(&body_bytes)).await
}

pub async fn transfer(
    state: &ServerState,
    token: Option<&str>,
    pairs: &HashMap<String, String>,
) -> Response<Full<Bytes>> {
    let sender_id = match token.and_then(|token| state.sessions.resolve(token)) {
        Some(id) => id,
        None => return redirect("/"),
    };

    let form = match TransferForm::from_pairs(pairs) {
        Some(form) => form,
        None => return redirect("/dashboard"),
    };
    let amount = match form.amount.trim().parse::<i64>() {
        Ok(amount) if amount > 0 => amount,
        _ => return redirect("/dashboard"),
    };

    match database::transfer(&state.db_pool, sender_id, &form.recipient, amount).await {
        Ok(outcome) => {
            debug!("transfer from {}: {:?}", sender_id, outcome);
            redirect("/dashboard")
        }
        Err(e) => {
            error!("transfer failed: {}", e);
            server_error()
        }
    }
}
