//! Segmentation resolver — cache-first wallet classification.
//!
//! `resolve` reads the cache and falls back to the oracle on a miss;
//! `resolve_fresh` bypasses the cache for callers that need the current
//! tree position (the admission engine's forced refresh).
//!
//! ## Failure policy
//!
//! - Cache writes are best-effort: a failed write-back is logged and the
//!   computed result is still returned.
//! - A failed cache read degrades to a miss.
//! - An unreachable or timed-out oracle degrades to the unbalanced/zero
//!   default so downstream admission fails closed instead of crashing.
//!   The degraded result is tagged [`Provenance::OracleUnavailable`] and is
//!   NOT written back — an outage is not a stable fact about the wallet,
//!   unlike a genuinely unregistered one.

use std::time::Duration;

use openarena_types::{SegmentationResult, WalletAddress};
use tokio::time::timeout;

use crate::cache::SegmentationStore;
use crate::oracle::ReferralOracle;

/// Where a resolution came from. Logged at every decision point so an
/// oracle outage can be told apart from an unregistered wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Served verbatim from the cache, no freshness check.
    Cache,
    /// Fetched from the oracle and written back.
    Oracle,
    /// The oracle has no node for this wallet; the default classification
    /// was cached as a stable fact.
    Unregistered,
    /// The oracle was unreachable or timed out; the default classification
    /// was returned but not cached.
    OracleUnavailable,
}

impl std::fmt::Display for Provenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cache => write!(f, "CACHE"),
            Self::Oracle => write!(f, "ORACLE"),
            Self::Unregistered => write!(f, "UNREGISTERED"),
            Self::OracleUnavailable => write!(f, "ORACLE_UNAVAILABLE"),
        }
    }
}

/// A classification plus where it came from.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub segmentation: SegmentationResult,
    pub provenance: Provenance,
}

impl Resolution {
    /// Whether the classification reflects actual oracle state (as opposed
    /// to the degraded outage default).
    #[must_use]
    pub fn is_authoritative(&self) -> bool {
        self.provenance != Provenance::OracleUnavailable
    }
}

/// Resolves a wallet's segmentation: cache, then oracle, with write-back.
pub struct SegmentationResolver<O, C> {
    oracle: O,
    cache: C,
    /// Bound on a single oracle call; elapsed is treated as unreachable.
    oracle_timeout: Duration,
}

impl<O: ReferralOracle, C: SegmentationStore> SegmentationResolver<O, C> {
    #[must_use]
    pub fn new(oracle: O, cache: C, oracle_timeout: Duration) -> Self {
        Self {
            oracle,
            cache,
            oracle_timeout,
        }
    }

    /// Resolve a wallet's classification, cache-first.
    ///
    /// A cache hit is returned verbatim — staleness is accepted; callers
    /// needing a current value use [`Self::resolve_fresh`].
    pub async fn resolve(&self, wallet: &WalletAddress) -> Resolution {
        match self.cache.get(wallet).await {
            Ok(Some(cached)) => {
                return Resolution {
                    segmentation: cached,
                    provenance: Provenance::Cache,
                };
            }
            Ok(None) => {}
            Err(err) => {
                // Degrade a broken cache read to a miss.
                tracing::warn!(
                    wallet = %wallet.short(),
                    error = %err,
                    "Segmentation cache read failed; falling through to oracle"
                );
            }
        }
        self.fetch_and_store(wallet).await
    }

    /// Resolve directly against the oracle, bypassing the cache.
    ///
    /// The fetched result is still written back so later cache-first
    /// lookups observe it.
    pub async fn resolve_fresh(&self, wallet: &WalletAddress) -> Resolution {
        self.fetch_and_store(wallet).await
    }

    async fn fetch_and_store(&self, wallet: &WalletAddress) -> Resolution {
        let lookup = timeout(self.oracle_timeout, self.oracle.node_data(wallet)).await;

        let (segmentation, provenance) = match lookup {
            Err(_elapsed) => {
                tracing::warn!(
                    wallet = %wallet.short(),
                    timeout = ?self.oracle_timeout,
                    "Referral oracle timed out; degrading to unbalanced/zero"
                );
                (
                    SegmentationResult::unregistered(wallet.clone()),
                    Provenance::OracleUnavailable,
                )
            }
            Ok(Err(err)) => {
                tracing::warn!(
                    wallet = %wallet.short(),
                    error = %err,
                    "Referral oracle unreachable; degrading to unbalanced/zero"
                );
                (
                    SegmentationResult::unregistered(wallet.clone()),
                    Provenance::OracleUnavailable,
                )
            }
            Ok(Ok(None)) => {
                // Unregistered is a stable, cacheable fact.
                let seg = SegmentationResult::unregistered(wallet.clone());
                self.write_back(&seg).await;
                (seg, Provenance::Unregistered)
            }
            Ok(Ok(Some(node))) => {
                let seg = SegmentationResult::from_node(wallet.clone(), &node);
                self.write_back(&seg).await;
                (seg, Provenance::Oracle)
            }
        };

        tracing::debug!(
            wallet = %wallet.short(),
            provenance = %provenance,
            is_balanced = segmentation.is_balanced,
            left = segmentation.left_count,
            right = segmentation.right_count,
            point = ?segmentation.equilibrium_point,
            "Segmentation resolved"
        );

        Resolution {
            segmentation,
            provenance,
        }
    }

    /// Best-effort cache write: a failure must not fail the resolve.
    async fn write_back(&self, seg: &SegmentationResult) {
        if let Err(err) = self.cache.upsert(seg.clone()).await {
            tracing::warn!(
                wallet = %seg.wallet.short(),
                error = %err,
                "Segmentation cache write-back failed; returning result anyway"
            );
        }
    }
}
