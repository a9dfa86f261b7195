//! Tournament admission engine — the ordered join pipeline.
//!
//! `join` runs seven checks in a fixed order, each short-circuiting with
//! its own error kind. The order is a behavioral contract, not an
//! implementation detail:
//!
//! ```text
//! Start → ExistenceChecked → WindowChecked → SegmentationChecked
//!       → MinimumChecked → RangeChecked → BurnAuthorized
//!       → LedgerCommitted (terminal success)
//! ```
//!
//! No ledger mutation happens before the burn is authorized, and the
//! ledger commit is a single atomic insert-or-accumulate.

use chrono::Utc;
use openarena_segmentation::{ReferralOracle, SegmentationResolver, SegmentationStore};
use openarena_types::{
    JoinReceipt, OpenarenaError, ReceiptId, Result, TournamentId, TournamentKind, WalletAddress,
};
use rust_decimal::Decimal;

use crate::burn::{BurnAuthority, BurnDecision, BurnRequest};
use crate::ledger::ParticipationLedger;
use crate::store::TournamentStore;

/// Orchestrates tournament admission across the tournament store, the
/// segmentation resolver, the burn authority, and the participation ledger.
///
/// All collaborators are injected; the engine holds no global state and a
/// single instance serves concurrent join requests.
pub struct AdmissionEngine<T, O, C, B, L> {
    tournaments: T,
    resolver: SegmentationResolver<O, C>,
    burn_authority: B,
    ledger: L,
}

impl<T, O, C, B, L> AdmissionEngine<T, O, C, B, L>
where
    T: TournamentStore,
    O: ReferralOracle,
    C: SegmentationStore,
    B: BurnAuthority,
    L: ParticipationLedger + Clone + 'static,
{
    #[must_use]
    pub fn new(
        tournaments: T,
        resolver: SegmentationResolver<O, C>,
        burn_authority: B,
        ledger: L,
    ) -> Self {
        Self {
            tournaments,
            resolver,
            burn_authority,
            ledger,
        }
    }

    /// Attempt to join a tournament, burning `coins_burned`.
    ///
    /// # Errors
    /// Each failed check returns its own kind, in pipeline order:
    /// [`OpenarenaError::TournamentNotFound`], [`OpenarenaError::NotJoinable`],
    /// [`OpenarenaError::NotEligible`], [`OpenarenaError::BelowMinimum`],
    /// [`OpenarenaError::EquilibriumUnavailable`], [`OpenarenaError::OutOfRange`],
    /// [`OpenarenaError::BurnRejected`].
    pub async fn join(
        &self,
        tournament_id: &TournamentId,
        wallet: &WalletAddress,
        coins_burned: Decimal,
    ) -> Result<JoinReceipt> {
        // 1. Existence
        let tournament = self
            .tournaments
            .get(tournament_id)
            .await?
            .ok_or(OpenarenaError::TournamentNotFound(*tournament_id))?;

        // 2. Status + time window
        let now = Utc::now();
        if !tournament.is_joinable_at(now) {
            let reason = if now < tournament.starts_at {
                "window not open yet"
            } else if now >= tournament.ends_at {
                "window closed"
            } else {
                "not accepting joins"
            };
            tracing::debug!(
                tournament = %tournament_id,
                wallet = %wallet.short(),
                status = %tournament.status,
                reason,
                "Join rejected: not joinable"
            );
            return Err(OpenarenaError::NotJoinable {
                status: tournament.status,
                reason: reason.to_string(),
            });
        }

        // 3. Segmentation eligibility
        let resolution = self.resolver.resolve(wallet).await;
        let is_balanced = resolution.segmentation.is_balanced;
        let eligible = match tournament.kind {
            TournamentKind::Balanced => is_balanced,
            TournamentKind::Unbalanced => !is_balanced,
        };
        if !eligible {
            tracing::debug!(
                tournament = %tournament_id,
                wallet = %wallet.short(),
                kind = %tournament.kind,
                is_balanced,
                provenance = %resolution.provenance,
                "Join rejected: segmentation mismatch"
            );
            return Err(OpenarenaError::NotEligible {
                required: tournament.kind,
                is_balanced,
            });
        }

        // 4. Minimum coins (decimal comparison). The floor applies to the
        //    cumulative total including this join, so a wallet that already
        //    cleared it can top up with any positive amount. This read is
        //    advisory only; the commit itself stays atomic in step 7.
        if let Some(min_coins) = tournament.min_coins {
            let already_burned = self
                .ledger
                .get(tournament_id, wallet)
                .await?
                .map_or(Decimal::ZERO, |p| p.coins_burned);
            if already_burned + coins_burned < min_coins {
                return Err(OpenarenaError::BelowMinimum {
                    needed: min_coins,
                    offered: coins_burned,
                });
            }
        }

        // 5. Equilibrium range. The point comes from the step-3 resolution;
        //    if it is absent, one forced refresh against the oracle is the
        //    only retry.
        if tournament.has_equilibrium_gate() {
            let point = match resolution.segmentation.equilibrium_point {
                Some(point) => Some(point),
                None => {
                    self.resolver
                        .resolve_fresh(wallet)
                        .await
                        .segmentation
                        .equilibrium_point
                }
            };
            let Some(point) = point else {
                tracing::warn!(
                    tournament = %tournament_id,
                    wallet = %wallet.short(),
                    "Join rejected: equilibrium point unresolvable after forced refresh"
                );
                return Err(OpenarenaError::EquilibriumUnavailable);
            };
            if !tournament.equilibrium_contains(point) {
                return Err(OpenarenaError::OutOfRange {
                    point,
                    min: tournament.equilibrium_min,
                    max: tournament.equilibrium_max,
                });
            }
        }

        // 6. Burn authorization
        let request = BurnRequest {
            wallet: wallet.clone(),
            amount: coins_burned,
            tournament_id: *tournament_id,
        };
        match self.burn_authority.burn(&request).await? {
            BurnDecision::Accepted => {}
            BurnDecision::Rejected { message } => {
                tracing::debug!(
                    tournament = %tournament_id,
                    wallet = %wallet.short(),
                    amount = %coins_burned,
                    "Join rejected: burn authority declined"
                );
                return Err(OpenarenaError::BurnRejected { message });
            }
        }

        // 7. Ledger commit. The burn is already authorized, so the commit
        //    runs on its own task: dropping the join future from here on
        //    cannot leave a burn without its ledger entry.
        let ledger = self.ledger.clone();
        let commit_tournament = *tournament_id;
        let commit_wallet = wallet.clone();
        let commit_kind = tournament.kind;
        let participant = tokio::spawn(async move {
            ledger
                .upsert_add(commit_tournament, commit_wallet, coins_burned, commit_kind)
                .await
        })
        .await
        .map_err(|err| OpenarenaError::Internal(format!("ledger commit task failed: {err}")))??;

        tracing::info!(
            tournament = %tournament_id,
            wallet = %wallet.short(),
            amount = %coins_burned,
            total = %participant.coins_burned,
            kind = %tournament.kind,
            "Join admitted"
        );

        Ok(JoinReceipt {
            receipt_id: ReceiptId::new(),
            tournament_id: *tournament_id,
            wallet: participant.wallet,
            amount_burned: coins_burned,
            total_burned: participant.coins_burned,
            eligibility: participant.eligibility,
            admitted_at: participant.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use openarena_segmentation::{InMemorySegmentationCache, StaticOracle};
    use openarena_types::{EngineConfig, OracleNode, Tournament, TournamentStatus};

    use super::*;
    use crate::burn::ValidatingBurnAuthority;
    use crate::ledger::InMemoryLedger;
    use crate::store::InMemoryTournamentStore;

    type TestEngine = AdmissionEngine<
        InMemoryTournamentStore,
        StaticOracle,
        InMemorySegmentationCache,
        ValidatingBurnAuthority,
        InMemoryLedger,
    >;

    async fn engine_with(tournament: Tournament, oracle: StaticOracle) -> TestEngine {
        let store = InMemoryTournamentStore::new();
        store.put(tournament).await;
        AdmissionEngine::new(
            store,
            SegmentationResolver::new(
                oracle,
                InMemorySegmentationCache::new(),
                EngineConfig::default().oracle_timeout(),
            ),
            ValidatingBurnAuthority::new(),
            InMemoryLedger::new(),
        )
    }

    #[tokio::test]
    async fn unknown_tournament_is_not_found() {
        let engine = engine_with(
            Tournament::dummy_active(TournamentKind::Balanced),
            StaticOracle::new(),
        )
        .await;

        let err = engine
            .join(&TournamentId::new(), &WalletAddress::random(), Decimal::ONE)
            .await
            .unwrap_err();
        assert!(matches!(err, OpenarenaError::TournamentNotFound(_)));
    }

    #[tokio::test]
    async fn ended_tournament_is_not_joinable() {
        let mut t = Tournament::dummy_active(TournamentKind::Balanced);
        t.status = TournamentStatus::Ended;
        let id = t.id;
        let engine = engine_with(t, StaticOracle::new()).await;

        let err = engine
            .join(&id, &WalletAddress::random(), Decimal::ONE)
            .await
            .unwrap_err();
        assert!(matches!(err, OpenarenaError::NotJoinable { .. }));
    }

    #[tokio::test]
    async fn window_precedes_segmentation() {
        // An out-of-window join must fail with NotJoinable even for a
        // wallet that would also fail segmentation — check order matters.
        let mut t = Tournament::dummy_active(TournamentKind::Balanced);
        t.status = TournamentStatus::Upcoming;
        let id = t.id;
        let engine = engine_with(t, StaticOracle::new()).await;

        let err = engine
            .join(&id, &WalletAddress::random(), Decimal::ONE)
            .await
            .unwrap_err();
        assert!(matches!(err, OpenarenaError::NotJoinable { .. }));
    }

    #[tokio::test]
    async fn unbalanced_wallet_rejected_from_balanced_tournament() {
        let t = Tournament::dummy_active(TournamentKind::Balanced);
        let id = t.id;
        let wallet = WalletAddress::random();
        let mut oracle = StaticOracle::new();
        oracle.insert(wallet.clone(), OracleNode::dummy_left_only(5));
        let engine = engine_with(t, oracle).await;

        let err = engine.join(&id, &wallet, Decimal::ONE).await.unwrap_err();
        assert!(matches!(
            err,
            OpenarenaError::NotEligible {
                required: TournamentKind::Balanced,
                is_balanced: false,
            }
        ));
    }

    #[tokio::test]
    async fn balanced_wallet_rejected_from_unbalanced_tournament() {
        let t = Tournament::dummy_active(TournamentKind::Unbalanced);
        let id = t.id;
        let wallet = WalletAddress::random();
        let mut oracle = StaticOracle::new();
        oracle.insert(wallet.clone(), OracleNode::dummy_balanced(5));
        let engine = engine_with(t, oracle).await;

        let err = engine.join(&id, &wallet, Decimal::ONE).await.unwrap_err();
        assert!(matches!(
            err,
            OpenarenaError::NotEligible {
                required: TournamentKind::Unbalanced,
                is_balanced: true,
            }
        ));
    }

    #[tokio::test]
    async fn below_minimum_rejected() {
        let mut t = Tournament::dummy_active(TournamentKind::Balanced);
        t.min_coins = Some(Decimal::new(50, 0));
        let id = t.id;
        let wallet = WalletAddress::random();
        let mut oracle = StaticOracle::new();
        oracle.insert(wallet.clone(), OracleNode::dummy_balanced(0));
        let engine = engine_with(t, oracle).await;

        let err = engine
            .join(&id, &wallet, Decimal::new(49, 0))
            .await
            .unwrap_err();
        assert!(matches!(err, OpenarenaError::BelowMinimum { .. }));

        // Exactly the minimum passes.
        engine.join(&id, &wallet, Decimal::new(50, 0)).await.unwrap();
    }

    #[tokio::test]
    async fn top_up_below_floor_allowed_after_first_join() {
        // The floor is cumulative: once a wallet has cleared it, repeat
        // joins may add any positive amount.
        let mut t = Tournament::dummy_active(TournamentKind::Balanced);
        t.min_coins = Some(Decimal::new(50, 0));
        let id = t.id;
        let wallet = WalletAddress::random();
        let mut oracle = StaticOracle::new();
        oracle.insert(wallet.clone(), OracleNode::dummy_balanced(0));
        let engine = engine_with(t, oracle).await;

        engine.join(&id, &wallet, Decimal::new(75, 0)).await.unwrap();
        let receipt = engine.join(&id, &wallet, Decimal::new(25, 0)).await.unwrap();
        assert_eq!(receipt.total_burned, Decimal::new(100, 0));
    }

    #[tokio::test]
    async fn nonpositive_burn_rejected_by_authority() {
        let t = Tournament::dummy_active(TournamentKind::Unbalanced);
        let id = t.id;
        let engine = engine_with(t, StaticOracle::new()).await;

        // An unregistered wallet passes the Unbalanced eligibility check,
        // so the zero amount reaches the authority.
        let err = engine
            .join(&id, &WalletAddress::random(), Decimal::ZERO)
            .await
            .unwrap_err();
        assert!(matches!(err, OpenarenaError::BurnRejected { .. }));
    }
}
