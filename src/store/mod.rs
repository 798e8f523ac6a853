//! Session-scoped persistence of last-used filter parameters.
//!
//! Each report page remembers the filters the operator last submitted, for
//! the lifetime of one browsing session. Entries live under a namespaced
//! key (`query_<page>`) and are overwritten wholesale on every save.
//!
//! Failures never reach the caller as errors: by contract the UI degrades
//! to "no remembered filters". The outcome enums still say whether storage
//! misbehaved, so callers that care can tell `Empty` from `Degraded`.

mod sqlite;

pub use sqlite::SqliteStore;

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::warn;

use crate::error::StoreResult;

/// Filter parameters as submitted: field name to value.
pub type QueryParams = HashMap<String, String>;

/// Session-scoped key/value backend.
///
/// The browser analogue is `sessionStorage`; server-side implementations
/// key every entry by a session identifier so sessions never observe each
/// other's state.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read a value, `None` when absent.
    async fn get(&self, session_id: &str, key: &str) -> StoreResult<Option<String>>;

    /// Write a value, replacing any prior one.
    async fn put(&self, session_id: &str, key: &str, value: &str) -> StoreResult<()>;

    /// Delete a value; deleting an absent key is not an error.
    async fn remove(&self, session_id: &str, key: &str) -> StoreResult<()>;

    /// Drop every entry belonging to a session (session end).
    async fn remove_session(&self, session_id: &str) -> StoreResult<()>;
}

/// Result of a save or clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The write took effect.
    Applied,
    /// Storage failed; the failure was logged and swallowed.
    Degraded,
}

impl WriteOutcome {
    /// Whether storage misbehaved.
    pub fn is_degraded(self) -> bool {
        matches!(self, WriteOutcome::Degraded)
    }
}

/// Result of a restore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// Previously saved parameters.
    Restored(QueryParams),
    /// No entry for this page.
    Empty,
    /// Storage failed or the stored value was corrupt; logged and swallowed.
    Degraded,
}

impl RestoreOutcome {
    /// Collapse to the UI default: the saved parameters, or an empty map.
    pub fn into_params(self) -> QueryParams {
        match self {
            RestoreOutcome::Restored(params) => params,
            RestoreOutcome::Empty | RestoreOutcome::Degraded => QueryParams::new(),
        }
    }

    /// Whether storage misbehaved.
    pub fn is_degraded(&self) -> bool {
        matches!(self, RestoreOutcome::Degraded)
    }
}

/// Per-page filter-state store over a session-scoped backend.
pub struct QueryStateStore<S> {
    backend: S,
    namespace: String,
}

impl<S: SessionStore> QueryStateStore<S> {
    /// Create a store with the default `query` namespace.
    pub fn new(backend: S) -> Self {
        Self::with_namespace(backend, "query")
    }

    /// Create a store with a custom namespace prefix.
    pub fn with_namespace(backend: S, namespace: impl Into<String>) -> Self {
        Self {
            backend,
            namespace: namespace.into(),
        }
    }

    /// Access the underlying backend.
    pub fn backend(&self) -> &S {
        &self.backend
    }

    fn storage_key(&self, page: &str) -> String {
        format!("{}_{}", self.namespace, page)
    }

    /// Persist a page's filter parameters, overwriting any prior entry.
    ///
    /// Fire-and-forget: failures are logged as warnings and reported as
    /// `Degraded`, never raised.
    pub async fn save(&self, session_id: &str, page: &str, params: &QueryParams) -> WriteOutcome {
        let key = self.storage_key(page);
        let encoded = match serde_json::to_string(params) {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!(page, error = %e, "Failed to encode query state");
                return WriteOutcome::Degraded;
            }
        };

        match self.backend.put(session_id, &key, &encoded).await {
            Ok(()) => WriteOutcome::Applied,
            Err(e) => {
                warn!(page, error = %e, "Failed to save query state");
                WriteOutcome::Degraded
            }
        }
    }

    /// Look up a page's remembered filter parameters.
    pub async fn restore(&self, session_id: &str, page: &str) -> RestoreOutcome {
        let key = self.storage_key(page);
        match self.backend.get(session_id, &key).await {
            Ok(Some(encoded)) => match serde_json::from_str(&encoded) {
                Ok(params) => RestoreOutcome::Restored(params),
                Err(e) => {
                    warn!(page, error = %e, "Corrupt query state, ignoring");
                    RestoreOutcome::Degraded
                }
            },
            Ok(None) => RestoreOutcome::Empty,
            Err(e) => {
                warn!(page, error = %e, "Failed to restore query state");
                RestoreOutcome::Degraded
            }
        }
    }

    /// Forget a page's remembered filters. Idempotent.
    pub async fn clear(&self, session_id: &str, page: &str) -> WriteOutcome {
        let key = self.storage_key(page);
        match self.backend.remove(session_id, &key).await {
            Ok(()) => WriteOutcome::Applied,
            Err(e) => {
                warn!(page, error = %e, "Failed to clear query state");
                WriteOutcome::Degraded
            }
        }
    }

    /// Drop everything a session remembered, across all pages.
    pub async fn end_session(&self, session_id: &str) -> WriteOutcome {
        match self.backend.remove_session(session_id).await {
            Ok(()) => WriteOutcome::Applied,
            Err(e) => {
                warn!(session_id, error = %e, "Failed to end session");
                WriteOutcome::Degraded
            }
        }
    }
}

/// Render filter parameters as a percent-encoded query string.
///
/// Keys are sorted so the same parameters always produce the same string.
pub fn to_query_string(params: &QueryParams) -> String {
    let mut pairs: Vec<_> = params.iter().collect();
    pairs.sort_by(|a, b| a.0.cmp(b.0));

    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}
