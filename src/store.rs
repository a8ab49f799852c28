//! Process-wide conference data store.
//!
//! Holds the single snapshot fetched at startup and publishes its lifecycle
//! to any number of readers through a `tokio::sync::watch` channel:
//!
//! ```text
//! Loading ──► Ready(data)
//!    └──────► Failed(error)
//! ```
//!
//! Neither terminal state is ever left for the rest of the session.

use std::sync::Arc;

use tokio::sync::watch;

use crate::conference::ConferenceClient;
use crate::error::FetchError;
use crate::models::ConferenceData;
use crate::traits::HttpClient;

/// Lifecycle of the conference snapshot.
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(Arc<ConferenceData>),
    Failed(FetchError),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// The snapshot, when one was published.
    pub fn data(&self) -> Option<&ConferenceData> {
        match self {
            LoadState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Single source of truth for the conference snapshot.
///
/// Cloning yields another handle to the same store.
#[derive(Debug, Clone)]
pub struct ConferenceStore {
    state_tx: Arc<watch::Sender<LoadState>>,
}

impl ConferenceStore {
    /// Create a store in the `Loading` state.
    pub fn new() -> Self {
        let (state_tx, _) = watch::channel(LoadState::Loading);
        Self {
            state_tx: Arc::new(state_tx),
        }
    }

    /// Subscribe to state transitions.
    pub fn subscribe(&self) -> watch::Receiver<LoadState> {
        self.state_tx.subscribe()
    }

    /// Current state.
    pub fn current(&self) -> LoadState {
        self.state_tx.borrow().clone()
    }

    /// Publish a fetch result.
    ///
    /// Only the first result is accepted; returns `false` if the store had
    /// already settled. Publication does not require live receivers.
    pub fn publish(&self, result: Result<ConferenceData, FetchError>) -> bool {
        let mut result = Some(result);
        let accepted = self.state_tx.send_if_modified(|state| {
            if !state.is_loading() {
                return false;
            }
            *state = match result.take() {
                Some(Ok(data)) => LoadState::Ready(Arc::new(data)),
                Some(Err(err)) => LoadState::Failed(err),
                None => return false,
            };
            true
        });

        if !accepted {
            tracing::warn!("Ignoring conference data result: store already settled");
        }
        accepted
    }

    /// Run the fetch on a background task and publish its outcome.
    ///
    /// Fire-and-forget: completion is only observable through
    /// [`subscribe`](Self::subscribe). Failures are logged and never retried.
    pub fn spawn_fetch<C>(&self, client: ConferenceClient<C>)
    where
        C: HttpClient + 'static,
    {
        let store = self.clone();
        tokio::spawn(async move {
            let result = client.fetch().await;
            if let Err(e) = &result {
                tracing::error!("Error fetching conference data: {}", e);
            }
            store.publish(result);
        });
    }
}

impl Default for ConferenceStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait until `rx` observes a settled (`Ready` or `Failed`) state.
pub async fn settled(rx: &mut watch::Receiver<LoadState>) -> LoadState {
    let waited = rx
        .wait_for(|state| !state.is_loading())
        .await
        .map(|state| state.clone());
    match waited {
        Ok(state) => state,
        Err(_) => rx.borrow().clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ConferenceData {
        serde_json::from_str(r#"{"rooms": [{"id": 1, "name": "Hall"}]}"#).unwrap()
    }

    #[test]
    fn test_new_store_is_loading() {
        let store = ConferenceStore::new();
        let state = store.current();
        assert!(state.is_loading());
        assert!(state.data().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_publish_ready() {
        let store = ConferenceStore::new();
        assert!(store.publish(Ok(sample())));

        let state = store.current();
        assert!(!state.is_loading());
        assert_eq!(state.data().unwrap().rooms[0].name, "Hall");
    }

    #[test]
    fn test_publish_failed_keeps_no_data() {
        let store = ConferenceStore::new();
        assert!(store.publish(Err(FetchError::Connection("refused".into()))));

        let state = store.current();
        assert!(!state.is_loading());
        assert!(state.data().is_none());
        assert_eq!(state.error(), Some(&FetchError::Connection("refused".into())));
    }

    #[test]
    fn test_settled_state_is_terminal() {
        let store = ConferenceStore::new();
        assert!(store.publish(Err(FetchError::Timeout("slow".into()))));
        assert!(!store.publish(Ok(sample())));
        assert!(store.current().error().is_some());

        let store = ConferenceStore::new();
        assert!(store.publish(Ok(sample())));
        assert!(!store.publish(Err(FetchError::Other("late".into()))));
        assert!(store.current().data().is_some());
    }

    #[test]
    fn test_publish_without_receivers() {
        let store = ConferenceStore::new();
        let rx = store.subscribe();
        drop(rx);
        assert!(store.publish(Ok(sample())));
        assert!(store.current().data().is_some());
    }

    #[tokio::test]
    async fn test_all_readers_see_same_snapshot() {
        let store = ConferenceStore::new();
        let mut first = store.subscribe();
        let mut second = store.clone().subscribe();

        store.publish(Ok(sample()));

        let a = settled(&mut first).await;
        let b = settled(&mut second).await;
        match (a, b) {
            (LoadState::Ready(a), LoadState::Ready(b)) => assert!(Arc::ptr_eq(&a, &b)),
            other => panic!("expected two ready states, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_settled_after_store_dropped_returns_last_state() {
        let store = ConferenceStore::new();
        let mut rx = store.subscribe();
        drop(store);

        assert!(settled(&mut rx).await.is_loading());
    }
}
