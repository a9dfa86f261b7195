//! Segmentation cache contract and in-memory implementation.
//!
//! The cache maps a normalized wallet address to its last computed
//! classification. It is advisory, not authoritative: entries are
//! overwritten (never versioned) on refresh, there is no expiry, and
//! concurrent refreshes for the same wallet race with last-write-wins.

use std::collections::HashMap;
use std::future::Future;

use openarena_types::{Result, SegmentationResult, WalletAddress};
use tokio::sync::Mutex;

/// Persistence contract for the segmentation cache.
///
/// Keys are normalized wallet addresses (enforced by [`WalletAddress`]).
/// `upsert` overwrites on conflict.
pub trait SegmentationStore: Send + Sync {
    fn get(
        &self,
        wallet: &WalletAddress,
    ) -> impl Future<Output = Result<Option<SegmentationResult>>> + Send;

    fn upsert(&self, result: SegmentationResult) -> impl Future<Output = Result<()>> + Send;
}

impl<C: SegmentationStore> SegmentationStore for std::sync::Arc<C> {
    fn get(
        &self,
        wallet: &WalletAddress,
    ) -> impl Future<Output = Result<Option<SegmentationResult>>> + Send {
        (**self).get(wallet)
    }

    fn upsert(&self, result: SegmentationResult) -> impl Future<Output = Result<()>> + Send {
        (**self).upsert(result)
    }
}

/// In-memory segmentation cache.
///
/// The mutex is never held across an await point.
#[derive(Debug, Default)]
pub struct InMemorySegmentationCache {
    entries: Mutex<HashMap<WalletAddress, SegmentationResult>>,
}

impl InMemorySegmentationCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached classifications.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

impl SegmentationStore for InMemorySegmentationCache {
    async fn get(&self, wallet: &WalletAddress) -> Result<Option<SegmentationResult>> {
        Ok(self.entries.lock().await.get(wallet).cloned())
    }

    async fn upsert(&self, result: SegmentationResult) -> Result<()> {
        self.entries
            .lock()
            .await
            .insert(result.wallet.clone(), result);
        Ok(())
    }
}
