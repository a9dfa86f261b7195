//! Referral-tree segmentation model.
//!
//! The oracle reports a wallet's position in the external binary referral
//! tree; [`SegmentationResult`] is the classification derived from it and
//! cached per wallet. The classification is advisory — staleness is
//! accepted, and callers that need a fresher value force a refresh.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::WalletAddress;

/// Raw node data from the Referral Tree Oracle.
///
/// The zero address is the oracle's sentinel for "no child"; the depth
/// counters may be unset (0) even when a child exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleNode {
    pub left_child: WalletAddress,
    pub right_child: WalletAddress,
    pub depth_left: u32,
    pub depth_right: u32,
    /// Equilibrium point reported for this wallet.
    pub point: i64,
}

impl OracleNode {
    #[must_use]
    pub fn has_left(&self) -> bool {
        !self.left_child.is_zero()
    }

    #[must_use]
    pub fn has_right(&self) -> bool {
        !self.right_child.is_zero()
    }
}

/// A wallet's cached segmentation classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentationResult {
    /// Normalized wallet address — the canonical cache key.
    pub wallet: WalletAddress,
    /// Both a left and a right child existed at the last refresh.
    pub is_balanced: bool,
    pub left_count: u32,
    pub right_count: u32,
    /// Equilibrium point, absent for unregistered wallets.
    pub equilibrium_point: Option<i64>,
    pub refreshed_at: DateTime<Utc>,
}

impl SegmentationResult {
    /// Classification for a wallet the oracle has no node for. Treated as a
    /// stable, cacheable fact.
    #[must_use]
    pub fn unregistered(wallet: WalletAddress) -> Self {
        Self {
            wallet,
            is_balanced: false,
            left_count: 0,
            right_count: 0,
            equilibrium_point: None,
            refreshed_at: Utc::now(),
        }
    }

    /// Classify an oracle node.
    ///
    /// Branch counts prefer the oracle's depth counters when positive and
    /// fall back to 0/1 presence flags when unset.
    #[must_use]
    pub fn from_node(wallet: WalletAddress, node: &OracleNode) -> Self {
        let has_left = node.has_left();
        let has_right = node.has_right();
        let left_count = if node.depth_left > 0 {
            node.depth_left
        } else {
            u32::from(has_left)
        };
        let right_count = if node.depth_right > 0 {
            node.depth_right
        } else {
            u32::from(has_right)
        };
        Self {
            wallet,
            is_balanced: has_left && has_right,
            left_count,
            right_count,
            equilibrium_point: Some(node.point),
            refreshed_at: Utc::now(),
        }
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl OracleNode {
    /// A node with both children present and the given point.
    pub fn dummy_balanced(point: i64) -> Self {
        Self {
            left_child: WalletAddress::random(),
            right_child: WalletAddress::random(),
            depth_left: 0,
            depth_right: 0,
            point,
        }
    }

    /// A node with only a left child.
    pub fn dummy_left_only(point: i64) -> Self {
        Self {
            left_child: WalletAddress::random(),
            right_child: WalletAddress::zero(),
            depth_left: 0,
            depth_right: 0,
            point,
        }
    }
}
