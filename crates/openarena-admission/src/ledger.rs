//! Participation ledger contract and in-memory implementation.
//!
//! At most one row exists per (tournament, wallet), and `coins_burned`
//! only accumulates. `upsert_add` is a single insert-or-accumulate storage
//! operation — never a read followed by a conditional write. Two concurrent
//! joins for the same pair must end up as one row holding the sum, with
//! neither a uniqueness violation nor a lost update.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use openarena_types::{Participant, Result, TournamentId, TournamentKind, WalletAddress};
use rust_decimal::Decimal;
use tokio::sync::Mutex;

/// Persistence contract for the participation ledger.
///
/// Implementations back `upsert_add` with an atomic conditional write
/// (native upsert with an additive update clause, or equivalent).
pub trait ParticipationLedger: Send + Sync {
    fn get(
        &self,
        tournament_id: &TournamentId,
        wallet: &WalletAddress,
    ) -> impl Future<Output = Result<Option<Participant>>> + Send;

    /// Insert a row with `amount`, or add `amount` to the existing row's
    /// total, in one storage operation. The eligibility snapshot is
    /// refreshed either way. Returns the row as committed.
    fn upsert_add(
        &self,
        tournament_id: TournamentId,
        wallet: WalletAddress,
        amount: Decimal,
        eligibility: TournamentKind,
    ) -> impl Future<Output = Result<Participant>> + Send;
}

impl<L: ParticipationLedger> ParticipationLedger for std::sync::Arc<L> {
    fn get(
        &self,
        tournament_id: &TournamentId,
        wallet: &WalletAddress,
    ) -> impl Future<Output = Result<Option<Participant>>> + Send {
        (**self).get(tournament_id, wallet)
    }

    fn upsert_add(
        &self,
        tournament_id: TournamentId,
        wallet: WalletAddress,
        amount: Decimal,
        eligibility: TournamentKind,
    ) -> impl Future<Output = Result<Participant>> + Send {
        (**self).upsert_add(tournament_id, wallet, amount, eligibility)
    }
}

/// In-memory participation ledger.
///
/// Cheap to clone (shared inner map); the engine relies on this to run the
/// commit on a spawned task. The mutex spans the whole insert-or-accumulate,
/// which makes it atomic, and is never held across an await.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedger {
    rows: Arc<Mutex<HashMap<(TournamentId, WalletAddress), Participant>>>,
}

impl InMemoryLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of ledger rows across all tournaments.
    pub async fn row_count(&self) -> usize {
        self.rows.lock().await.len()
    }
}

impl ParticipationLedger for InMemoryLedger {
    async fn get(
        &self,
        tournament_id: &TournamentId,
        wallet: &WalletAddress,
    ) -> Result<Option<Participant>> {
        Ok(self
            .rows
            .lock()
            .await
            .get(&(*tournament_id, wallet.clone()))
            .cloned())
    }

    async fn upsert_add(
        &self,
        tournament_id: TournamentId,
        wallet: WalletAddress,
        amount: Decimal,
        eligibility: TournamentKind,
    ) -> Result<Participant> {
        let mut rows = self.rows.lock().await;
        let row = rows
            .entry((tournament_id, wallet.clone()))
            .and_modify(|p| p.credit(amount, eligibility))
            .or_insert_with(|| Participant::first_join(tournament_id, wallet, amount, eligibility));
        Ok(row.clone())
    }
}
