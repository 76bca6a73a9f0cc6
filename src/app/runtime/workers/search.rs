use std::sync::Arc;

use tokio::sync::mpsc;

use crate::sources::MovieSearch;
use crate::state::{SearchKey, SearchResponse};

/// What: Spawn the background worker that executes search requests.
///
/// Inputs:
/// - `client`: Search backend shared by the spawned request tasks.
/// - `request_rx`: Keys issued by the fetch coordinator.
/// - `response_tx`: Responses tagged with the key they answer.
///
/// Details:
/// - Requests already queued behind a newer one are skipped; only the newest key
///   can still be active in the coordinator.
/// - Each request runs on its own task so a slow page never blocks a newer one.
///   Ordering of the responses is left to the coordinator's key matching.
/// - Exits when the request channel closes.
pub fn spawn_search_worker<C: MovieSearch>(
    client: Arc<C>,
    mut request_rx: mpsc::UnboundedReceiver<SearchKey>,
    response_tx: mpsc::UnboundedSender<SearchResponse>,
) {
    tokio::spawn(async move {
        while let Some(mut key) = request_rx.recv().await {
            while let Ok(newer) = request_rx.try_recv() {
                tracing::debug!(
                    skipped = %key.query,
                    page = key.page,
                    "coalescing superseded search request"
                );
                key = newer;
            }
            let client = Arc::clone(&client);
            let tx = response_tx.clone();
            tokio::spawn(async move {
                let outcome = client.search(&key.query, key.page).await;
                if tx.send(SearchResponse { key, outcome }).is_err() {
                    tracing::debug!("event loop gone; dropping search response");
                }
            });
        }
        tracing::debug!("search request channel closed; worker exiting");
    });
}
