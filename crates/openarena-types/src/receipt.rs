//! Join receipts — the Ack returned by a successful admission.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{ReceiptId, TournamentId, TournamentKind, WalletAddress};

/// Acknowledgement of a successful tournament join.
///
/// Carries both the amount burned by this join and the wallet's cumulative
/// total after it, so callers don't need a follow-up ledger read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinReceipt {
    pub receipt_id: ReceiptId,
    pub tournament_id: TournamentId,
    pub wallet: WalletAddress,
    /// Coins burned by this join alone.
    pub amount_burned: Decimal,
    /// Cumulative coins burned by this wallet into this tournament.
    pub total_burned: Decimal,
    /// Tournament kind at admission time.
    pub eligibility: TournamentKind,
    pub admitted_at: DateTime<Utc>,
}
