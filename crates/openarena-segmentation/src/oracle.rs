//! Referral Tree Oracle contract.
//!
//! The oracle is the read-only source of truth for a wallet's position in
//! the external binary referral tree. It lives outside this process; the
//! [`ReferralOracle`] trait is the seam the resolver calls through.

use std::collections::HashMap;
use std::future::Future;

use openarena_types::{OracleNode, Result, WalletAddress};

/// Read-only access to the external binary referral tree.
///
/// `node_data` returns `Ok(None)` when the oracle has no node for the
/// wallet (unregistered — a stable fact) and `Err` when the oracle itself
/// is unreachable (a transient condition the resolver must not conflate
/// with unregistered).
///
/// Returned futures are `Send` so callers can run lookups on spawned tasks.
pub trait ReferralOracle: Send + Sync {
    fn node_data(
        &self,
        wallet: &WalletAddress,
    ) -> impl Future<Output = Result<Option<OracleNode>>> + Send;
}

impl<O: ReferralOracle> ReferralOracle for std::sync::Arc<O> {
    fn node_data(
        &self,
        wallet: &WalletAddress,
    ) -> impl Future<Output = Result<Option<OracleNode>>> + Send {
        (**self).node_data(wallet)
    }
}

/// In-memory oracle backed by a fixed node table.
///
/// Used as a fixture in tests and local runs; production deployments plug
/// in a chain-backed implementation of [`ReferralOracle`].
#[derive(Debug, Default)]
pub struct StaticOracle {
    nodes: HashMap<WalletAddress, OracleNode>,
}

impl StaticOracle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node for a wallet. Last insert wins.
    pub fn insert(&mut self, wallet: WalletAddress, node: OracleNode) {
        self.nodes.insert(wallet, node);
    }

    /// Number of registered nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl ReferralOracle for StaticOracle {
    async fn node_data(&self, wallet: &WalletAddress) -> Result<Option<OracleNode>> {
        Ok(self.nodes.get(wallet).cloned())
    }
}
