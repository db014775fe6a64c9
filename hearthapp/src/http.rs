use axum::{
    Router,
    extract::Request,
    middleware::{
        self,
        Next,
    },
    response::{
        Html,
        IntoResponse,
        Redirect,
        Response,
    },
    routing::get,
};
use hearthcore::ac::Agent;
use hearthctrl::Platform;
use http::StatusCode;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::Config;

pub mod item;
pub mod location;
pub mod page;
pub mod room;

mod form;

#[derive(Clone)]
pub struct AppContext {
    pub platform: Arc<Platform>,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("400 Bad Request")]
    BadRequest,
    #[error("404 Not Found")]
    NotFound,
    #[error("authentication required")]
    Unauthenticated,
    #[error("500 Internal Server Error")]
    Server,
}

impl From<hearthctrl::error::Error> for Error {
    fn from(err: hearthctrl::error::Error) -> Self {
        match err {
            hearthctrl::error::Error::NotFound => Error::NotFound,
            hearthctrl::error::Error::Anonymous => Error::Unauthenticated,
            hearthctrl::error::Error::Validation(_) => Error::BadRequest,
            hearthctrl::error::Error::Backend(e) => {
                log::error!("backend error: {e}");
                Error::Server
            }
            _ => Error::Server,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            // the login flow is handled by the fronting collaborator
            Error::Unauthenticated => Redirect::to("/login").into_response(),
            Error::NotFound => (
                StatusCode::NOT_FOUND,
                Html(page::error_page("404 Not Found")),
            ).into_response(),
            Error::BadRequest => (
                StatusCode::BAD_REQUEST,
                Html(page::error_page("400 Bad Request")),
            ).into_response(),
            Error::Server => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(page::error_page("500 Internal Server Error")),
            ).into_response(),
        }
    }
}

/// Every route below requires a signed-in identity.
fn require_user(agent: &Agent) -> Result<&str> {
    agent.user_id().ok_or(Error::Unauthenticated)
}

/// The fronting authentication collaborator conveys the signed-in
/// identity through this header; absence means anonymous.
const REMOTE_USER_HEADER: &str = "x-remote-user";

async fn remote_user(mut req: Request, next: Next) -> Response {
    let agent = req.headers()
        .get(REMOTE_USER_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(Agent::from)
        .unwrap_or_default();
    req.extensions_mut().insert(agent);
    next.run(req).await
}

fn router() -> Router {
    Router::new()
        .route("/", get(render_dashboard))
        .route("/login", get(render_login))
        .nest("/locations/", location::router())
        .nest("/rooms", room::router())
        .nest("/items", item::router())
}

/// The full application with its layers, ready to serve.
pub fn app(platform: Arc<Platform>) -> Router {
    router()
        .layer(middleware::from_fn(remote_user))
        .layer(axum::Extension(AppContext { platform }))
        .layer(TraceLayer::new_for_http())
}

pub async fn serve(
    config: Config,
    platform: Arc<Platform>,
) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(&config.http_listen).await?;
    log::info!("serving on http://{}", config.http_listen);
    axum::serve(listener, app(platform)).await?;
    Ok(())
}

async fn render_dashboard(
    ctx: axum::Extension<AppContext>,
    agent: axum::Extension<Agent>,
) -> Result<Html<String>> {
    require_user(&agent)?;
    let dashboard = ctx.platform.dashboard(&agent).await?;
    Ok(Html(page::dashboard(&agent, &dashboard)))
}

async fn render_login() -> Html<String> {
    Html(page::login())
}
