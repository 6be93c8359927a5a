use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::{
    ServeArgs,
    config::Config,
    paths::{base_path_from_config, page_route},
    render::PageRenderer,
    store::{MemoryStore, StoreError},
    wiki::{Wiki, WikiError},
};

/// Routes: `{prefix}/{title}` serves pages, `/` redirects to the home page.
pub fn router(wiki: Arc<Wiki>) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route(&page_route(wiki.route_prefix()), get(page_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(wiki)
}

async fn home_handler(State(wiki): State<Arc<Wiki>>) -> Redirect {
    Redirect::to(&wiki.home_url())
}

async fn page_handler(State(wiki): State<Arc<Wiki>>, Path(title): Path<String>) -> Response {
    // Page lookup reads from disk and renders the template
    let lookup_title = title.clone();
    let page = tokio::task::spawn_blocking(move || wiki.render_page(&lookup_title)).await;

    match page {
        Ok(Ok(Some(html))) => Html(html).into_response(),
        Ok(Ok(None)) => {
            (StatusCode::NOT_FOUND, format!("page not found: {title}")).into_response()
        }
        Ok(Err(WikiError::Store(StoreError::InvalidTitle(_)))) => {
            (StatusCode::BAD_REQUEST, "invalid page title").into_response()
        }
        Ok(Err(e)) => {
            error!(title = %title, error = %e, "failed to render page");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        }
        Err(e) => {
            error!(title = %title, error = %e, "page render task failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        }
    }
}

pub async fn run(args: &ServeArgs) -> Result<(), anyhow::Error> {
    let config_path = Config::path_from_arg(args.config_file.as_deref())?;
    let mut config = Config::load_from_file(&config_path).await?;

    if let Some(bind) = &args.bind {
        config.server.bind = bind.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let base_path = base_path_from_config(&config_path);
    let wiki = if args.demo {
        info!(home = %config.pages.home, "serving the built-in sample page");
        let renderer = PageRenderer::from_config(config.theme.path.as_deref(), &base_path)?;
        Wiki::new(&config, MemoryStore::with_sample(&config.pages.home), renderer)
    } else {
        Wiki::from_config(&config, &base_path)?
    };
    info!(engine = wiki.engine_name(), "markup engine ready");

    let app = router(Arc::new(wiki));

    let addr: SocketAddr = format!("{}:{}", config.server.bind, config.server.port).parse()?;

    let display_host = if config.server.bind == "0.0.0.0" {
        "localhost"
    } else {
        &config.server.bind
    };
    let url = format!("http://{}:{}", display_host, config.server.port);

    println!("\nServing wiki at {}", url);
    println!("Press Ctrl+C to stop\n");

    if args.open
        && let Err(e) = open::that(&url)
    {
        eprintln!("Failed to open browser: {}", e);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
