//! # Client State Store
//!
//! The imperative shell around the pure reducer.
//!
//! ## Dispatch
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  dispatch(action)                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  lock ─────────────────────────────────────────────────────────┐       │
//! │       │                                                         │       │
//! │       ▼                                                         │ held  │
//! │  reduce(&mut state, action) ──► [Effect, ...]                  │       │
//! │       │                                                         │       │
//! │       ▼                                                         │       │
//! │  PersistCart           write cartItems, cartAmount             │       │
//! │  ForgetCart            remove cartItems, cartAmount            │       │
//! │  PersistFavoritesCount write favoritesCount                    │       │
//! │  Notify                policy.apply ─► Notifier                │       │
//! │  MissedLineItem        log                                     │       │
//! │       │                                                         │       │
//! │       ▼                                                         │       │
//! │  unlock ◄──────────────────────────────────────────────────────┘       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  return state snapshot                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Storage failures never fail a dispatch. The in-memory state is the source
//! of truth for the session; storage only matters at the next start.

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use parapharm_core::{
    hydrate, reduce, Action, ClientState, Effect, Hydrated, ItemKey, CART_AMOUNT_KEY,
    CART_ITEMS_KEY, FAVORITES_COUNT_KEY,
};
use parapharm_db::{load_persisted, KeyValueStore};

use super::notifier::{NotificationPolicy, Notifier};

#[derive(Debug)]
struct Inner {
    state: ClientState,
    policy: NotificationPolicy,
}

/// Single writer over the client state.
///
/// ## Usage
/// ```rust,ignore
/// let store = Store::hydrate(db.kv(), TracingNotifier, policy).await;
/// let state = store.dispatch(Action::AddToCart(item)).await;
/// ```
pub struct Store<S, N> {
    inner: Mutex<Inner>,
    storage: S,
    notifier: N,
}

impl<S: KeyValueStore, N: Notifier> Store<S, N> {
    /// Creates a store with an empty state. Storage is not read.
    pub fn new(storage: S, notifier: N, policy: NotificationPolicy) -> Self {
        Store::with_state(ClientState::new(), storage, notifier, policy)
    }

    fn with_state(state: ClientState, storage: S, notifier: N, policy: NotificationPolicy) -> Self {
        Store {
            inner: Mutex::new(Inner { state, policy }),
            storage,
            notifier,
        }
    }

    /// Builds the initial state from what `storage` holds.
    ///
    /// Unreadable or malformed values fall back to defaults; each problem
    /// is logged.
    pub async fn hydrate(storage: S, notifier: N, policy: NotificationPolicy) -> Self {
        let persisted = load_persisted(&storage).await;
        let Hydrated { state, issues } = hydrate(&persisted);

        for issue in &issues {
            warn!(issue = %issue, "Persisted client state needed repair");
        }

        info!(
            cart_amount = state.cart_amount(),
            favorites_count = state.favorites_count(),
            repaired = issues.len(),
            "Client state hydrated"
        );

        Store::with_state(state, storage, notifier, policy)
    }

    /// Applies `action` and runs its effects before the next dispatch can
    /// start. Returns the resulting state.
    pub async fn dispatch(&self, action: Action) -> ClientState {
        let tag = action.tag();
        let mut inner = self.inner.lock().await;

        let effects = reduce(&mut inner.state, action);
        debug!(action = tag, effects = effects.len(), "Action reduced");

        for effect in effects {
            self.run_effect(&inner, effect).await;
        }

        inner.state.clone()
    }

    /// Current state without dispatching anything.
    pub async fn snapshot(&self) -> ClientState {
        self.inner.lock().await.state.clone()
    }

    /// Records the front end's viewport width; decides the quiet flag of
    /// later notifications.
    pub async fn set_viewport_width(&self, width: u32) {
        let mut inner = self.inner.lock().await;
        inner.policy.viewport_width = Some(width);
        debug!(width, quiet = inner.policy.is_quiet(), "Viewport width updated");
    }

    pub async fn policy(&self) -> NotificationPolicy {
        self.inner.lock().await.policy
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    // =========================================================================
    // Effects
    // =========================================================================

    async fn run_effect(&self, inner: &Inner, effect: Effect) {
        match effect {
            Effect::PersistCart => self.persist_cart(&inner.state).await,
            Effect::ForgetCart => {
                self.remove(CART_ITEMS_KEY).await;
                self.remove(CART_AMOUNT_KEY).await;
            }
            Effect::PersistFavoritesCount(count) => {
                self.write(FAVORITES_COUNT_KEY, &count.to_string()).await;
            }
            Effect::Notify(notification) => {
                self.notifier.notify(&inner.policy.apply(notification));
            }
            Effect::MissedLineItem { key, action } => log_missed_line(key, action),
        }
    }

    async fn persist_cart(&self, state: &ClientState) {
        match serde_json::to_string(state.cart_items()) {
            Ok(json) => self.write(CART_ITEMS_KEY, &json).await,
            Err(e) => warn!(error = %e, "Could not serialize cart items"),
        }
        self.write(CART_AMOUNT_KEY, &state.cart_amount().to_string())
            .await;
    }

    async fn write(&self, key: &str, value: &str) {
        if let Err(e) = self.storage.write(key, value).await {
            warn!(key = %key, error = %e, "Storage write failed, keeping in-memory state");
        }
    }

    async fn remove(&self, key: &str) {
        if let Err(e) = self.storage.remove(key).await {
            warn!(key = %key, error = %e, "Storage remove failed, keeping in-memory state");
        }
    }
}

fn log_missed_line(key: ItemKey, action: &str) {
    if cfg!(debug_assertions) {
        warn!(item = %key, action, "No cart line for item, action ignored");
    } else {
        debug!(item = %key, action, "No cart line for item, action ignored");
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
