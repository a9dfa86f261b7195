//! Participation ledger model.
//!
//! One row per (tournament, wallet). `coins_burned` only ever accumulates:
//! a repeat join adds to the running total, it never replaces it, and rows
//! are never deleted by this subsystem.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{TournamentId, TournamentKind, WalletAddress};

/// A participation ledger row: cumulative coins burned by one wallet into
/// one tournament.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub tournament_id: TournamentId,
    pub wallet: WalletAddress,
    /// Cumulative coins burned across all joins. Monotonically non-decreasing.
    pub coins_burned: Decimal,
    /// Tournament kind snapshot, refreshed on every join.
    pub eligibility: TournamentKind,
    pub joined_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Participant {
    /// First join for a (tournament, wallet) pair.
    #[must_use]
    pub fn first_join(
        tournament_id: TournamentId,
        wallet: WalletAddress,
        coins_burned: Decimal,
        eligibility: TournamentKind,
    ) -> Self {
        let now = Utc::now();
        Self {
            tournament_id,
            wallet,
            coins_burned,
            eligibility,
            joined_at: now,
            updated_at: now,
        }
    }

    /// Accumulate a repeat join: adds to the running total and refreshes
    /// the eligibility snapshot.
    pub fn credit(&mut self, amount: Decimal, eligibility: TournamentKind) {
        self.coins_burned += amount;
        self.eligibility = eligibility;
        self.updated_at = Utc::now();
    }
}
