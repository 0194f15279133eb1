//! SSE server for the demo feed.
//!
//! Streams a JSON-encoded [`SnapshotFrame`] roughly once per second to
//! every client on `GET /sse`. `GET /` serves a minimal page that logs the
//! stream through an `EventSource`, for eyeballing the feed without a real
//! display client.
//!
//! Frames fan out through a broadcast channel: one generator task, any
//! number of subscribed connections. A client that falls behind skips ahead
//! to the most recent frame.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::time::Duration;

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use futures::stream::{self, Stream};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use super::rng::FeedRng;
use super::snapshot::{random_snapshot, SnapshotFrame};

const INDEX_HTML: &str = r#"<html>
    <head><title>scoreboard feed</title></head>
    <body>
        <ul id="events"></ul>
        <script type="text/javascript">
            var source = new EventSource('/sse');
            var eventsUl = document.getElementById('events');
            function logEvent(text) {
                var li = document.createElement('li');
                li.innerText = text;
                eventsUl.appendChild(li);
            }
            source.addEventListener('message', function(e) {
                logEvent('message: ' + e.data);
            }, false);
            source.addEventListener('open', function(e) {
                logEvent('open');
            }, false);
            source.addEventListener('error', function(e) {
                logEvent('error');
            }, false);
        </script>
    </body>
</html>
"#;

/// Configuration for the demo feed server.
#[derive(Clone, Debug)]
pub struct FeedConfig {
    /// Host address to bind to.
    pub host: String,
    /// TCP port to listen on.
    pub port: u16,
    /// Delay between generated frames.
    pub interval: Duration,
    /// RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Away team short name.
    pub away_team: String,
    /// Home team short name.
    pub home_team: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8080,
            interval: Duration::from_secs(1),
            seed: None,
            away_team: String::from("CLE"),
            home_team: String::from("HOU"),
        }
    }
}

/// Errors from starting or running the feed server.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// Failed to bind to the network address.
    #[error("bind error: {0}")]
    Bind(String),

    /// The server encountered a fatal I/O error.
    #[error("serve error: {0}")]
    Serve(String),
}

/// Start the feed server and run until the process is terminated.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server hits a
/// fatal I/O error.
pub async fn serve(config: FeedConfig) -> Result<(), FeedError> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| FeedError::Bind(format!("invalid address: {e}")))?;

    let (tx, _) = broadcast::channel(16);
    tokio::spawn(generate(tx.clone(), config.clone()));

    let app = Router::new()
        .route("/", get(index))
        .route("/sse", get(sse_feed))
        .with_state(tx);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| FeedError::Bind(format!("bind failed on {addr}: {e}")))?;

    info!(%addr, "feed server listening");

    axum::serve(listener, app)
        .await
        .map_err(|e| FeedError::Serve(e.to_string()))?;

    Ok(())
}

/// Generator task: one random frame per interval.
async fn generate(tx: broadcast::Sender<SnapshotFrame>, config: FeedConfig) {
    let mut rng = match config.seed {
        Some(seed) => FeedRng::new(seed),
        None => FeedRng::from_entropy(),
    };
    info!(seed = rng.seed(), "snapshot generator started");

    let mut ticker = tokio::time::interval(config.interval);
    loop {
        ticker.tick().await;
        let frame = SnapshotFrame::new(
            config.away_team.clone(),
            config.home_team.clone(),
            random_snapshot(&mut rng),
        );
        // send only fails with zero subscribers; keep generating so the
        // next client picks the stream up mid-game.
        let _ = tx.send(frame);
    }
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// `GET /sse`: subscribe to the broadcast channel and forward each frame
/// as an SSE message.
async fn sse_feed(
    State(tx): State<broadcast::Sender<SnapshotFrame>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = tx.subscribe();
    debug!("sse client connected");

    let stream = stream::unfold(rx, |mut rx| async move {
        loop {
            match rx.recv().await {
                Ok(frame) => match serde_json::to_string(&frame) {
                    Ok(json) => {
                        return Some((Ok::<_, Infallible>(Event::default().data(json)), rx))
                    }
                    Err(e) => warn!("failed to serialize frame: {e}"),
                },
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    debug!(skipped, "sse client lagged, skipping ahead");
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
