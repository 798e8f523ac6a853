//! Integration tests for the SQLite session store
//!
//! Tests storage operations using in-memory and file-backed SQLite databases.

use std::collections::HashMap;

use backoffice_query::config::DatabaseConfig;
use backoffice_query::store::{
    QueryParams, QueryStateStore, RestoreOutcome, SessionStore, SqliteStore, WriteOutcome,
};

/// Create an in-memory store instance for testing
async fn create_test_store() -> SqliteStore {
    SqliteStore::new_in_memory()
        .await
        .expect("Failed to create in-memory store")
}

fn params(pairs: &[(&str, &str)]) -> QueryParams {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[cfg(test)]
mod backend_tests {
    use super::*;

    #[tokio::test]
    async fn test_put_and_get() {
        let backend = create_test_store().await;

        backend
            .put("sess-1", "query_bets", r#"{"status":"1"}"#)
            .await
            .unwrap();

        let value = backend.get("sess-1", "query_bets").await.unwrap();
        assert_eq!(value.as_deref(), Some(r#"{"status":"1"}"#));
    }

    #[tokio::test]
    async fn test_get_absent_key() {
        let backend = create_test_store().await;

        let value = backend.get("sess-1", "query_bets").await.unwrap();
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_put_replaces_prior_value() {
        let backend = create_test_store().await;

        backend.put("sess-1", "query_bets", "first").await.unwrap();
        backend.put("sess-1", "query_bets", "second").await.unwrap();

        let value = backend.get("sess-1", "query_bets").await.unwrap();
        assert_eq!(value.as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn test_remove_absent_key_is_ok() {
        let backend = create_test_store().await;

        let result = backend.remove("sess-1", "query_bets").await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_remove_session_scopes_to_one_session() {
        let backend = create_test_store().await;

        backend.put("sess-1", "query_bets", "a").await.unwrap();
        backend.put("sess-1", "query_players", "b").await.unwrap();
        backend.put("sess-2", "query_bets", "c").await.unwrap();

        backend.remove_session("sess-1").await.unwrap();

        assert!(backend.get("sess-1", "query_bets").await.unwrap().is_none());
        assert!(backend
            .get("sess-1", "query_players")
            .await
            .unwrap()
            .is_none());
        assert_eq!(
            backend.get("sess-2", "query_bets").await.unwrap().as_deref(),
            Some("c")
        );
    }
}

#[cfg(test)]
mod file_backed_tests {
    use super::*;

    #[tokio::test]
    async fn test_state_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let config = DatabaseConfig {
            path: dir.path().join("query_state.db"),
            max_connections: 2,
        };

        {
            let backend = SqliteStore::new(&config).await.unwrap();
            let store = QueryStateStore::new(backend);
            store
                .save("sess-1", "bets", &params(&[("game_type", "百家乐")]))
                .await;
        }

        let backend = SqliteStore::new(&config).await.unwrap();
        let store = QueryStateStore::new(backend);
        let restored = store.restore("sess-1", "bets").await.into_params();
        assert_eq!(restored, params(&[("game_type", "百家乐")]));
    }

    #[tokio::test]
    async fn test_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = DatabaseConfig {
            path: dir.path().join("nested/dir/query_state.db"),
            max_connections: 2,
        };

        let result = SqliteStore::new(&config).await;
        assert!(result.is_ok());
    }
}

#[cfg(test)]
mod store_contract_tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip_within_session() {
        let store = QueryStateStore::new(create_test_store().await);

        let submitted = params(&[
            ("start_date", "2024-03-11"),
            ("end_date", "2024-03-15"),
            ("status", "1"),
        ]);

        assert_eq!(
            store.save("sess-1", "transactions", &submitted).await,
            WriteOutcome::Applied
        );
        assert_eq!(
            store.restore("sess-1", "transactions").await,
            RestoreOutcome::Restored(submitted)
        );
    }

    #[tokio::test]
    async fn test_restore_after_clear_is_empty_mapping() {
        let store = QueryStateStore::new(create_test_store().await);

        store.save("sess-1", "bets", &params(&[("status", "1")])).await;
        store.clear("sess-1", "bets").await;

        let restored = store.restore("sess-1", "bets").await;
        assert_eq!(restored, RestoreOutcome::Empty);
        assert_eq!(restored.into_params(), HashMap::new());
    }

    #[tokio::test]
    async fn test_double_clear_equals_single_clear() {
        let store = QueryStateStore::new(create_test_store().await);

        store.save("sess-1", "bets", &params(&[("status", "1")])).await;

        let first = store.clear("sess-1", "bets").await;
        let second = store.clear("sess-1", "bets").await;
        assert_eq!(first, second);
        assert_eq!(store.restore("sess-1", "bets").await, RestoreOutcome::Empty);
    }

    #[tokio::test]
    async fn test_empty_params_round_trip() {
        let store = QueryStateStore::new(create_test_store().await);

        store.save("sess-1", "bets", &QueryParams::new()).await;

        assert_eq!(
            store.restore("sess-1", "bets").await,
            RestoreOutcome::Restored(QueryParams::new())
        );
    }

    #[tokio::test]
    async fn test_corrupt_entry_degrades_not_raises() {
        let backend = create_test_store().await;
        backend
            .put("sess-1", "query_bets", "[1,2,3]")
            .await
            .unwrap();

        let store = QueryStateStore::new(backend);
        let restored = store.restore("sess-1", "bets").await;
        assert!(restored.is_degraded());
        assert!(restored.into_params().is_empty());
    }

    #[tokio::test]
    async fn test_unavailable_storage_degrades_never_raises() {
        let backend = create_test_store().await;
        backend.pool().close().await;

        let store = QueryStateStore::new(backend);

        assert_eq!(
            store.save("sess-1", "bets", &params(&[("status", "1")])).await,
            WriteOutcome::Degraded
        );
        assert_eq!(store.clear("sess-1", "bets").await, WriteOutcome::Degraded);
        assert!(store.restore("sess-1", "bets").await.is_degraded());
        assert_eq!(store.end_session("sess-1").await, WriteOutcome::Degraded);
    }

    #[tokio::test]
    async fn test_multibyte_values_round_trip() {
        let store = QueryStateStore::new(create_test_store().await);

        let submitted = params(&[("game_type", "龙虎"), ("username", "玩家一号")]);
        store.save("sess-1", "bets", &submitted).await;

        assert_eq!(
            store.restore("sess-1", "bets").await.into_params(),
            submitted
        );
    }
}
