use crate::{
    routes::{auth, pages, transfer},
    state::ServerState,
};
use http_body_util::Full;
use hyper::{
    body::{Bytes, Incoming as Body},
    Method, Request, Response, StatusCode,
};

pub async fn router(
    req: Request<Body>,
    state: ServerState,
) -> Result<Response<Full<Bytes>>, hyper::Error> {
    let response = match (req.method(), req.uri().path()) {
        (&Method::GET, "/") => pages::handle_index(),
        (&Method::POST, "/login") => auth::handle_login(req, state).await,
        (&Method::GET, "/dashboard") => pages::handle_dashboard(req, state).await,
        (&Method::POST, "/transfer") => transfer::handle_transfer(req, state).await,
        (&Method::GET, "/logout") => auth::handle_logout(req, state).await,
        (&Method::POST, "/signup") => auth::handle_signup(req, state).await,
        _ => Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Full::new(Bytes::new()))
            .unwrap(),
    };

    Ok(response)
}
