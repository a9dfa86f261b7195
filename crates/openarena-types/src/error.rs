//! Error types for the OpenArena admission engine.
//!
//! All errors use the `OA_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Tournament errors
//! - 2xx: Eligibility errors
//! - 3xx: Coin-burn errors
//! - 4xx: Oracle / storage errors
//! - 9xx: General / internal errors
//!
//! Each failed admission check short-circuits the pipeline with its own
//! distinct kind, so callers can map every rejection to a stable
//! user-facing status.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{TournamentId, TournamentKind, TournamentStatus};

/// Central error enum for all OpenArena operations.
#[derive(Debug, Error)]
pub enum OpenarenaError {
    // =================================================================
    // Tournament Errors (1xx)
    // =================================================================
    /// The requested tournament id is unknown.
    #[error("OA_ERR_100: Tournament not found: {0}")]
    TournamentNotFound(TournamentId),

    /// The tournament is not accepting joins (wrong status or outside the
    /// time window).
    #[error("OA_ERR_101: Tournament not joinable: status {status}, {reason}")]
    NotJoinable {
        status: TournamentStatus,
        reason: String,
    },

    // =================================================================
    // Eligibility Errors (2xx)
    // =================================================================
    /// The wallet's referral-tree shape doesn't match the tournament kind.
    #[error("OA_ERR_200: Wallet not eligible for {required} tournament (is_balanced = {is_balanced})")]
    NotEligible {
        required: TournamentKind,
        is_balanced: bool,
    },

    /// Burn amount under the configured floor.
    #[error("OA_ERR_201: Coin burn below minimum: need {needed}, offered {offered}")]
    BelowMinimum { needed: Decimal, offered: Decimal },

    /// A range is configured but the equilibrium point could not be
    /// resolved, even after a forced oracle refresh.
    #[error("OA_ERR_202: Equilibrium point unavailable for wallet")]
    EquilibriumUnavailable,

    /// The resolved equilibrium point falls outside the configured bounds.
    #[error("OA_ERR_203: Equilibrium point {point} outside range [{min:?}, {max:?}]")]
    OutOfRange {
        point: i64,
        min: Option<i64>,
        max: Option<i64>,
    },

    // =================================================================
    // Coin-Burn Errors (3xx)
    // =================================================================
    /// The Coin Burn Authority declined; its message is passed through
    /// verbatim.
    #[error("OA_ERR_300: Coin burn rejected: {message}")]
    BurnRejected { message: String },

    // =================================================================
    // Oracle / Storage Errors (4xx)
    // =================================================================
    /// The Referral Tree Oracle was unreachable or timed out. Absorbed by
    /// the resolver's degrade-to-unbalanced fallback; surfaced directly
    /// only where no fallback applies.
    #[error("OA_ERR_400: Referral oracle unavailable: {reason}")]
    OracleUnavailable { reason: String },

    /// A persistence operation failed.
    #[error("OA_ERR_401: Storage error: {0}")]
    Storage(String),

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error.
    #[error("OA_ERR_900: Internal error: {0}")]
    Internal(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, OpenarenaError>;
