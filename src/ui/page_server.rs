use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use serde_json::json;
use tokio::sync::oneshot;
use warp::Filter;

use crate::config::constants::{sleep_duration_millis, SERVER_SHUTDOWN_GRACE_PERIOD_MS};
use crate::enums::page_event::PageEvent;
use crate::errors::{ConsoleError, ConsoleResult};
use crate::structs::config::server_config::ServerConfig;
use crate::ui::page_controller::PageController;

/// Serves the webhooks page on localhost.
pub struct PageServer {
    controller: Arc<PageController>,
    config: ServerConfig,
    port: Option<u16>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl PageServer {
    /// A server that is not listening yet.
    pub fn new(controller: Arc<PageController>, config: ServerConfig) -> Self {
        Self {
            controller,
            config,
            port: None,
            shutdown_tx: None,
        }
    }

    /// Bound port once started.
    pub const fn port(&self) -> Option<u16> {
        self.port
    }

    /// Page address once started.
    pub fn url(&self) -> Option<String> {
        self.port.map(|port| format!("http://127.0.0.1:{}/", port))
    }

    /// Binds the first free port, trying `preferred_port` first.
    pub async fn start(&mut self, preferred_port: Option<u16>) -> ConsoleResult<u16> {
        let port = self.find_available_port(preferred_port).await?;
        self.port = Some(port);

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        self.shutdown_tx = Some(shutdown_tx);

        let page_route = warp::path::end()
            .and(warp::get())
            .and_then(serve_page);

        let api_routes = Self::create_api_routes(Arc::clone(&self.controller));

        let routes = page_route
            .or(api_routes)
            .with(warp::cors()
                .allow_origin("http://127.0.0.1")
                .allow_origin("http://localhost")
                .allow_headers(vec!["content-type"])
                .allow_methods(vec!["GET", "POST"]));

        let addr: SocketAddr = ([127, 0, 0, 1], port).into();
        let (_, server) = warp::serve(routes)
            .try_bind_with_graceful_shutdown(addr, async {
                shutdown_rx.await.ok();
            })
            .map_err(|e| ConsoleError::system_error("bind page server", &e.to_string()))?;

        tokio::spawn(server);

        log::info!("🌐 Webhooks page served on port {}", port);
        Ok(port)
    }

    /// Stops the server and waits for it to finish.
    pub async fn shutdown(&mut self) -> ConsoleResult<()> {
        log::info!("🛑 Shutting down page server...");

        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            shutdown_tx.send(()).map_err(|()|
                ConsoleError::system_error("shutdown", "Failed to send shutdown signal")
            )?;
        }

        tokio::time::sleep(sleep_duration_millis(SERVER_SHUTDOWN_GRACE_PERIOD_MS)).await;
        log::info!("✅ Page server shutdown complete");

        Ok(())
    }

    fn create_api_routes(
        controller: Arc<PageController>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let controller_filter = warp::any().map(move || Arc::clone(&controller));

        let get_page = warp::path!("api" / "page")
            .and(warp::get())
            .and(controller_filter.clone())
            .and_then(get_page_handler);

        let event = warp::path!("api" / "event")
            .and(warp::post())
            .and(warp::body::json())
            .and(controller_filter.clone())
            .and_then(event_handler);

        let save = warp::path!("api" / "save")
            .and(warp::post())
            .and(controller_filter.clone())
            .and_then(save_handler);

        let create = warp::path!("api" / "create")
            .and(warp::post())
            .and(controller_filter.clone())
            .and_then(create_handler);

        let delete = warp::path!("api" / "delete")
            .and(warp::post())
            .and(controller_filter.clone())
            .and_then(delete_handler);

        let refresh = warp::path!("api" / "refresh")
            .and(warp::post())
            .and(controller_filter)
            .and_then(refresh_handler);

        get_page
            .or(event)
            .or(save)
            .or(create)
            .or(delete)
            .or(refresh)
    }

    async fn find_available_port(&self, preferred_port: Option<u16>) -> ConsoleResult<u16> {
        let candidates = preferred_port
            .into_iter()
            .chain(self.config.port_range_start..self.config.port_range_end);

        for port in candidates {
            if let Ok(listener) = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await {
                drop(listener);
                return Ok(port);
            }
        }
        Err(ConsoleError::validation_error(
            "server.port_range_start",
            &format!("{}..{}", self.config.port_range_start, self.config.port_range_end),
            "must contain a free port",
            Some("Pick another range in the [server] section or pass --port"),
        ))
    }
}

async fn serve_page() -> Result<impl warp::Reply, Infallible> {
    Ok(warp::reply::html(include_str!("static/index.html")))
}

/// The current view, plus the error of the request when there was one.
async fn page_reply(controller: &PageController, result: ConsoleResult<()>) -> warp::reply::Json {
    let view = controller.view().await;
    match result {
        Ok(()) => warp::reply::json(&json!({ "view": view })),
        Err(e) => warp::reply::json(&json!({
            "error": e.form_message(),
            "view": view
        })),
    }
}

async fn get_page_handler(controller: Arc<PageController>) -> Result<impl warp::Reply, Infallible> {
    Ok(page_reply(&controller, Ok(())).await)
}

async fn event_handler(event: PageEvent, controller: Arc<PageController>) -> Result<impl warp::Reply, Infallible> {
    let result = controller.dispatch(event).await.map(|_| ());
    Ok(page_reply(&controller, result).await)
}

async fn save_handler(controller: Arc<PageController>) -> Result<impl warp::Reply, Infallible> {
    let result = controller.save().await.map(|_| ());
    Ok(page_reply(&controller, result).await)
}

async fn create_handler(controller: Arc<PageController>) -> Result<impl warp::Reply, Infallible> {
    let result = controller.create().await.map(|_| ());
    Ok(page_reply(&controller, result).await)
}

async fn delete_handler(controller: Arc<PageController>) -> Result<impl warp::Reply, Infallible> {
    let result = controller.delete_active().await.map(|_| ());
    Ok(page_reply(&controller, result).await)
}

async fn refresh_handler(controller: Arc<PageController>) -> Result<impl warp::Reply, Infallible> {
    let result = controller.fetch_webhooks().await;
    Ok(page_reply(&controller, result).await)
}
