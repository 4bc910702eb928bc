//! # Parapharm Storefront Library
//!
//! Client-state service for the Parapharm storefront: cart, detail panels
//! and the favorites counter, written through to local storage.
//!
//! ## Module Organization
//! ```text
//! parapharm_storefront/
//! ├── lib.rs          ◄─── You are here (startup & stdin session)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── store.rs    ◄─── Store: reducer + effects under one lock
//! │   ├── notifier.rs ◄─── Notification port and policy
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── action.rs   ◄─── Raw JSON actions
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   ├── details.rs  ◄─── Detail panel commands
//! │   ├── favorites.rs◄─── Favorites counter commands
//! │   └── config.rs   ◄─── Configuration commands
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Session Protocol
//! One JSON action per input line; one JSON reply per line:
//! ```text
//! > {"type":"ADD_TO_CART","payload":{"id":3,"isPack":false,"name":"Vitamin C","priceCents":899}}
//! < {"cartItems":[...],"cartAmount":1,"selectedProduct":null,...,"favoritesCount":0}
//! > {"type":"ADD_TO_BASKET"}
//! < {"error":{"code":"MALFORMED_ACTION","message":"..."}}
//! > {"type":"SET_VIEWPORT_WIDTH","payload":{"width":375}}
//! < {"width":375,"quiet":true}
//! ```
//!
//! `SET_VIEWPORT_WIDTH` is handled by the session itself; every other line
//! is decoded as a store action.

pub mod commands;
pub mod error;
pub mod state;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use parapharm_core::ClientStateView;
use parapharm_db::{Database, DbConfig, KeyValueStore};

use commands::config::ViewportResponse;
use error::{ApiError, ErrorCode};
use state::{ConfigState, Notifier, Store, TracingNotifier};

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "info,parapharm=debug,sqlx=warn";

/// Runs the storefront service until stdin closes.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter (stderr)                       │
/// │     • Default: info, parapharm=debug; override with RUST_LOG            │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • Defaults + PARAPHARM_* overrides                                  │
/// │                                                                         │
/// │  3. Open Database ────────────────────────────────────────────────────► │
/// │     • SQLite with WAL mode, pending migrations applied                  │
/// │                                                                         │
/// │  4. Hydrate Store ────────────────────────────────────────────────────► │
/// │     • cartItems / cartAmount / favoritesCount, repaired if needed       │
/// │                                                                         │
/// │  5. Serve stdin ──────────────────────────────────────────────────────► │
/// │     • One action per line until EOF                                     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_tracing();

    let config = ConfigState::from_env();
    info!(store = %config.store_name, "Starting Parapharm storefront");

    let db_path = get_database_path()?;
    info!(?db_path, "Database path determined");

    let db = open_database(db_path).await?;
    info!("Database connected and migrations applied");

    let store = Store::hydrate(db.kv(), TracingNotifier, config.notification_policy()).await;

    let processed = run_session(
        &store,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await?;

    info!(processed, "Input closed, shutting down");
    db.close().await;

    Ok(())
}

/// Opens the database, hiding driver details behind a `DATABASE_ERROR`.
async fn open_database(path: PathBuf) -> Result<Database, ApiError> {
    Database::new(DbConfig::new(path)).await.map_err(ApiError::from)
}

/// One reply line of the stdin session.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum SessionReply {
    State(ClientStateView),
    Viewport(ViewportResponse),
    Error { error: ApiError },
}

const SET_VIEWPORT_WIDTH: &str = "SET_VIEWPORT_WIDTH";

/// Messages the session answers without going through the store reducer.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
enum SessionCommand {
    SetViewportWidth { width: u32 },
}

#[derive(Deserialize)]
struct TypeTag {
    #[serde(rename = "type")]
    kind: Option<String>,
}

/// Answers one non-blank input line.
async fn handle_line<S: KeyValueStore, N: Notifier>(
    store: &Store<S, N>,
    line: &str,
) -> SessionReply {
    let is_session_command = serde_json::from_str::<TypeTag>(line)
        .ok()
        .and_then(|tag| tag.kind)
        .is_some_and(|kind| kind == SET_VIEWPORT_WIDTH);

    let result = if is_session_command {
        match serde_json::from_str::<SessionCommand>(line) {
            Ok(SessionCommand::SetViewportWidth { width }) => {
                let viewport = commands::config::set_viewport_width(store, width).await;
                return SessionReply::Viewport(viewport);
            }
            Err(e) => Err(ApiError::new(
                ErrorCode::MalformedAction,
                format!("invalid {} payload: {}", SET_VIEWPORT_WIDTH, e),
            )),
        }
    } else {
        commands::action::dispatch_json(store, line).await
    };

    match result {
        Ok(view) => SessionReply::State(view),
        Err(error) => {
            debug!(%error, "Action rejected");
            SessionReply::Error { error }
        }
    }
}

/// Reads newline-delimited JSON actions from `input`, dispatches each, and
/// writes the resulting state (or the error) to `output`, one line per
/// action. Blank lines are skipped. Returns the number of lines answered.
pub async fn run_session<S, N, R, W>(
    store: &Store<S, N>,
    input: R,
    mut output: W,
) -> std::io::Result<usize>
where
    S: KeyValueStore,
    N: Notifier,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let mut processed = 0;

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        processed += 1;

        let reply = handle_line(store, line).await;

        let mut bytes = serde_json::to_vec(&reply)?;
        bytes.push(b'\n');
        output.write_all(&bytes).await?;
        output.flush().await?;
    }

    Ok(processed)
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr; stdout carries the session replies.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=parapharm=trace` - Show trace for parapharm crates only
/// - Default: `info,parapharm=debug,sqlx=warn`
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    log_subscriber(filter).init();
}

/// The stderr subscriber; `filter` alone decides what is enabled.
fn log_subscriber(filter: EnvFilter) -> impl tracing::Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish()
}

/// Determines the database file path based on the platform.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.parapharm.storefront/storefront.db`
/// - **Windows**: `%APPDATA%\parapharm\storefront\data\storefront.db`
/// - **Linux**: `~/.local/share/storefront/storefront.db`
///
/// ## Development Override
/// Set `PARAPHARM_DB_PATH` to use a custom path.
fn get_database_path() -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>> {
    if let Ok(path) = std::env::var(state::ENV_DB_PATH) {
        return Ok(PathBuf::from(path));
    }

    let proj_dirs = ProjectDirs::from("com", "parapharm", "storefront")
        .ok_or("Could not determine app data directory")?;

    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)?;

    Ok(data_dir.join("storefront.db"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use parapharm_db::MemoryStore;
    use serde_json::Value;
    use state::{NotificationPolicy, RecordingNotifier};
    use tracing::Level;

    async fn session(input: &str) -> (Vec<Value>, usize, Store<MemoryStore, RecordingNotifier>) {
        let store = Store::new(
            MemoryStore::new(),
            RecordingNotifier::new(),
            NotificationPolicy::default(),
        );
        let mut output = Vec::new();

        let processed = run_session(&store, input.as_bytes(), &mut output)
            .await
            .unwrap();

        let replies = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        (replies, processed, store)
    }

    #[tokio::test]
    async fn test_session_replies_per_line() {
        let input = concat!(
            r#"{"type":"ADD_TO_CART","payload":{"id":3,"name":"Vitamin C","priceCents":899}}"#,
            "\n\n",
            r#"{"type":"ADD_TO_BASKET"}"#,
            "\n",
            r#"{"type":"INCREASE_QUANTITY","payload":{"id":3,"isPack":false}}"#,
            "\n",
        );

        let (replies, processed, store) = session(input).await;

        assert_eq!(processed, 3);
        assert_eq!(replies.len(), 3);
        assert_eq!(replies[0]["cartAmount"], 1);
        assert_eq!(replies[1]["error"]["code"], "MALFORMED_ACTION");
        assert_eq!(replies[2]["cartItems"][0]["quantity"], 2);
        assert_eq!(store.notifier().messages().len(), 2);
    }

    #[tokio::test]
    async fn test_session_without_trailing_newline() {
        let (replies, processed, _) = session(r#"{"type":"setFvoritesCount","payload":{"count":1}}"#).await;

        assert_eq!(processed, 1);
        assert_eq!(replies[0]["favoritesCount"], 1);
    }

    #[tokio::test]
    async fn test_session_sets_viewport_width() {
        let input = concat!(
            r#"{"type":"SET_VIEWPORT_WIDTH","payload":{"width":375}}"#,
            "\n",
            r#"{"type":"ADD_TO_CART","payload":{"id":3,"name":"Vitamin C","priceCents":899}}"#,
            "\n",
            r#"{"type":"SET_VIEWPORT_WIDTH","payload":{"width":"wide"}}"#,
            "\n",
        );

        let (replies, processed, store) = session(input).await;

        assert_eq!(processed, 3);
        assert_eq!(replies[0]["width"], 375);
        assert_eq!(replies[0]["quiet"], true);
        assert_eq!(replies[1]["cartAmount"], 1);
        assert_eq!(replies[2]["error"]["code"], "MALFORMED_ACTION");
        assert!(store.notifier().notifications()[0].quiet);
        assert_eq!(store.policy().await.viewport_width, Some(375));
    }

    #[tokio::test]
    async fn test_empty_input() {
        let (replies, processed, _) = session("").await;
        assert_eq!(processed, 0);
        assert!(replies.is_empty());
    }

    #[test]
    fn test_default_log_filter_is_not_overridden() {
        let subscriber = log_subscriber(EnvFilter::new(DEFAULT_LOG_FILTER));

        tracing::subscriber::with_default(subscriber, || {
            assert!(tracing::enabled!(target: "parapharm_storefront", Level::DEBUG));
            assert!(tracing::enabled!(target: "sqlx::query", Level::WARN));
            assert!(!tracing::enabled!(target: "sqlx::query", Level::DEBUG));
            assert!(!tracing::enabled!(target: "hyper", Level::TRACE));
        });
    }

    #[tokio::test]
    async fn test_unopenable_database_is_a_database_error() {
        let path = std::env::temp_dir()
            .join(format!("parapharm-missing-{}", std::process::id()))
            .join("nested")
            .join("storefront.db");

        let err = open_database(path).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.message, "Database connection failed");
    }
}
