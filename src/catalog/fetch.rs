use std::future::Future;

use reqwest::Client;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::RawFoodRecord;

/// Fetch the catalog JSON from a URL.
pub async fn fetch_catalog(client: &Client, url: &str) -> Result<Catalog> {
    debug!("Fetching food catalog from {}", url);
    let raw: Vec<RawFoodRecord> = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    let catalog = Catalog::from_raw(raw);
    info!("Fetched {} foods from {}", catalog.len(), url);
    Ok(catalog)
}

/// Load progress of a catalog handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogStatus {
    Loading,
    Ready(usize),
    Unavailable,
}

/// Result of polling a `PendingCatalog`.
#[derive(Debug, PartialEq)]
pub enum CatalogPoll {
    Pending,
    Ready(Catalog),
    Closed,
}

/// A catalog that resolves exactly once, at some point in the future.
///
/// Polling never blocks. If the producer fails or goes away the handle
/// polls as `Closed` and never yields a catalog.
#[derive(Debug)]
pub struct PendingCatalog {
    receiver: Option<oneshot::Receiver<Catalog>>,
}

impl PendingCatalog {
    /// Start fetching `url` on the current tokio runtime.
    pub fn spawn_fetch(url: String) -> Self {
        Self::from_future(async move {
            let client = Client::new();
            fetch_catalog(&client, &url).await
        })
    }

    /// Spawn any catalog-producing future on the current tokio runtime.
    pub fn from_future<F>(future: F) -> Self
    where
        F: Future<Output = Result<Catalog>> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            match future.await {
                Ok(catalog) => {
                    if tx.send(catalog).is_err() {
                        debug!("Catalog resolved after its handle was dropped");
                    }
                }
                Err(e) => warn!("Food catalog could not be loaded: {}", e),
            }
        });
        Self { receiver: Some(rx) }
    }

    /// A handle that is already resolved.
    pub fn resolved(catalog: Catalog) -> Self {
        let (tx, rx) = oneshot::channel();
        // The receiver is alive, so this cannot fail.
        let _ = tx.send(catalog);
        Self { receiver: Some(rx) }
    }

    /// Take the catalog if it has arrived. `Ready` is returned at most once;
    /// every later poll is `Closed`.
    pub fn try_take(&mut self) -> CatalogPoll {
        let Some(receiver) = self.receiver.as_mut() else {
            return CatalogPoll::Closed;
        };

        match receiver.try_recv() {
            Ok(catalog) => {
                self.receiver = None;
                CatalogPoll::Ready(catalog)
            }
            Err(TryRecvError::Empty) => CatalogPoll::Pending,
            Err(TryRecvError::Closed) => {
                self.receiver = None;
                CatalogPoll::Closed
            }
        }
    }
}
