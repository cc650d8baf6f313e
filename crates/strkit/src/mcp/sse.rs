use crate::prelude::{eprintln, *};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse, Response,
    },
    routing::{get, post},
    Json, Router,
};
use futures::stream::{self, Stream, StreamExt};
use serde::Deserialize;
use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::mpsc;
use tower_http::cors::{Any, CorsLayer};

use super::Server;

/// Open `/sse` streams, keyed by session id.
#[derive(Default)]
pub struct Sessions {
    next_id: AtomicU64,
    senders: Mutex<HashMap<String, mpsc::UnboundedSender<String>>>,
}

impl Sessions {
    /// Register a new stream and return its id along with the receiving half.
    pub fn open(&self) -> (String, mpsc::UnboundedReceiver<String>) {
        let id = format!("{:016x}", self.next_id.fetch_add(1, Ordering::Relaxed));
        let (tx, rx) = mpsc::unbounded_channel();
        self.senders().insert(id.clone(), tx);
        (id, rx)
    }

    /// Push `message` onto a session's stream.
    ///
    /// Returns `false` when the session is unknown or its stream is gone; a gone stream
    /// is forgotten.
    pub fn deliver(&self, id: &str, message: String) -> bool {
        let mut senders = self.senders();
        let Some(tx) = senders.get(id) else {
            return false;
        };

        if tx.send(message).is_ok() {
            return true;
        }
        senders.remove(id);
        false
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.senders().len()
    }

    fn senders(&self) -> MutexGuard<'_, HashMap<String, mpsc::UnboundedSender<String>>> {
        self.senders
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

pub struct SseState {
    pub server: Server,
    pub sessions: Sessions,
}

/// Where the response to a `/message` request went.
#[derive(Debug, PartialEq)]
pub enum Delivery {
    /// Sent as a `message` event on the session's stream.
    Streamed,
    /// No session was named; the response goes back in the HTTP body.
    Inline(serde_json::Value),
    UnknownSession,
}

pub async fn run_sse(options: super::cli::SseOptions, server: Server) -> Result<()> {
    let verbose = server.global.verbose;

    if verbose {
        eprintln!(
            "Starting MCP server with SSE transport on {}:{}...",
            options.host, options.port
        );
    }

    let addr = format!("{}:{}", options.host, options.port);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let state = Arc::new(SseState {
        server,
        sessions: Sessions::default(),
    });

    let app_router = Router::new()
        .route("/sse", get(sse_handler))
        .route("/message", post(message_handler))
        .layer(cors)
        .with_state(state);

    if verbose {
        eprintln!("MCP server listening on http://{}", addr);
        eprintln!("SSE endpoint: http://{}/sse", addr);
        eprintln!("Message endpoint: http://{}/message?sessionId=<id>", addr);
    }

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    axum::serve(listener, app_router)
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}

/// Open a session. The first event names the endpoint to POST requests to; every
/// response for the session follows as a `message` event.
async fn sse_handler(
    State(state): State<Arc<SseState>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let (id, rx) = state.sessions.open();
    log::debug!("sse session opened: {id}");

    let endpoint = Event::default()
        .event("endpoint")
        .data(format!("/message?sessionId={id}"));

    let messages = stream::unfold(rx, |mut rx| async move {
        let message = rx.recv().await?;
        Some((
            Ok::<_, Infallible>(Event::default().event("message").data(message)),
            rx,
        ))
    });

    Sse::new(stream::once(async move { Ok::<_, Infallible>(endpoint) }).chain(messages))
        .keep_alive(KeepAlive::default())
}

#[derive(Debug, Deserialize)]
struct MessageQuery {
    #[serde(rename = "sessionId")]
    session_id: Option<String>,
}

async fn message_handler(
    State(state): State<Arc<SseState>>,
    Query(query): Query<MessageQuery>,
    Json(request): Json<serde_json::Value>,
) -> Response {
    match dispatch_message(&state, query.session_id.as_deref(), &request) {
        Delivery::Streamed => StatusCode::ACCEPTED.into_response(),
        Delivery::Inline(body) => Json(body).into_response(),
        Delivery::UnknownSession => (StatusCode::NOT_FOUND, "Unknown session").into_response(),
    }
}

pub fn dispatch_message(
    state: &SseState,
    session_id: Option<&str>,
    request: &serde_json::Value,
) -> Delivery {
    let response = super::handle_request(&request.to_string(), &state.server);
    let body = serde_json::to_value(response).unwrap_or(serde_json::Value::Null);

    match session_id {
        None => Delivery::Inline(body),
        Some(id) if state.sessions.deliver(id, body.to_string()) => Delivery::Streamed,
        Some(_) => Delivery::UnknownSession,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use strkit_core::{PluginConfig, StringPlugin};

    fn state() -> SseState {
        let app = crate::App::parse_from(["strkit", "list"]);
        SseState {
            server: Server {
                plugin: StringPlugin::on_start(PluginConfig::default()),
                global: app.global,
            },
            sessions: Sessions::default(),
        }
    }

    fn rot13_call() -> serde_json::Value {
        serde_json::json!({
            "jsonrpc": "2.0",
            "id": 7,
            "method": "tools/call",
            "params": {"name": "rot13", "arguments": {"input": "abc"}}
        })
    }

    // ============================================================================
    // Sessions tests
    // ============================================================================

    #[test]
    fn test_sessions_get_distinct_ids() {
        let sessions = Sessions::default();

        let (first, _rx1) = sessions.open();
        let (second, _rx2) = sessions.open();

        assert_ne!(first, second);
        assert_eq!(sessions.len(), 2);
    }

    #[test]
    fn test_deliver_reaches_open_session() {
        let sessions = Sessions::default();
        let (id, mut rx) = sessions.open();

        assert!(sessions.deliver(&id, "hello".to_string()));
        assert_eq!(rx.try_recv().unwrap(), "hello");
    }

    #[test]
    fn test_deliver_to_unknown_session() {
        let sessions = Sessions::default();
        assert!(!sessions.deliver("missing", "hello".to_string()));
    }

    #[test]
    fn test_closed_stream_is_forgotten() {
        let sessions = Sessions::default();
        let (id, rx) = sessions.open();
        drop(rx);

        assert!(!sessions.deliver(&id, "hello".to_string()));
        assert_eq!(sessions.len(), 0);
    }

    // ============================================================================
    // dispatch_message tests
    // ============================================================================

    #[test]
    fn test_response_goes_to_the_session_stream() {
        let state = state();
        let (id, mut rx) = state.sessions.open();

        let delivery = dispatch_message(&state, Some(&id), &rot13_call());

        assert_eq!(delivery, Delivery::Streamed);
        let event: serde_json::Value = serde_json::from_str(&rx.try_recv().unwrap()).unwrap();
        assert_eq!(event["id"], 7);
        assert_eq!(event["result"]["content"][0]["text"], "nop\tPress Enter to copy");
    }

    #[test]
    fn test_response_without_session_is_inline() {
        let state = state();

        let Delivery::Inline(body) = dispatch_message(&state, None, &rot13_call()) else {
            panic!("expected an inline response");
        };

        assert_eq!(body["id"], 7);
        assert!(body["result"]["content"].is_array());
    }

    #[test]
    fn test_unknown_session_is_reported() {
        let state = state();

        assert_eq!(
            dispatch_message(&state, Some("missing"), &rot13_call()),
            Delivery::UnknownSession
        );
    }
}
