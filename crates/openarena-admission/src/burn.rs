//! Coin Burn Authority contract.
//!
//! The authority accepts or rejects a proposed coin burn for a tournament
//! join. The current implementation is a validating stub (positive amounts
//! always pass) standing in for a future ledger-backed deduction system;
//! the engine treats it as an opaque, possibly-failing, possibly
//! side-effecting dependency.

use std::future::Future;

use openarena_types::{Result, TournamentId, WalletAddress};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A proposed coin burn for a tournament join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurnRequest {
    pub wallet: WalletAddress,
    pub amount: Decimal,
    pub tournament_id: TournamentId,
}

/// The authority's verdict on a burn request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BurnDecision {
    Accepted,
    /// Declined; the message is surfaced to the caller verbatim.
    Rejected { message: String },
}

/// External contract consumed by the admission engine.
///
/// `Err` means the authority itself failed; `Ok(Rejected)` means it ran
/// and declined the burn.
pub trait BurnAuthority: Send + Sync {
    fn burn(&self, request: &BurnRequest) -> impl Future<Output = Result<BurnDecision>> + Send;
}

impl<B: BurnAuthority> BurnAuthority for std::sync::Arc<B> {
    fn burn(&self, request: &BurnRequest) -> impl Future<Output = Result<BurnDecision>> + Send {
        (**self).burn(request)
    }
}

/// Validating no-op authority: rejects non-positive amounts, accepts
/// everything else without deducting anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatingBurnAuthority;

impl ValidatingBurnAuthority {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl BurnAuthority for ValidatingBurnAuthority {
    async fn burn(&self, request: &BurnRequest) -> Result<BurnDecision> {
        if request.amount <= Decimal::ZERO {
            return Ok(BurnDecision::Rejected {
                message: format!(
                    "burn amount must be a positive decimal, got {}",
                    request.amount
                ),
            });
        }
        Ok(BurnDecision::Accepted)
    }
}
