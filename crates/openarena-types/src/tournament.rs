//! Tournament model.
//!
//! Tournaments are created and updated by an external admin workflow; the
//! admission engine only ever reads them. A join is legal while the status
//! is ACTIVE and the current time falls inside `[starts_at, ends_at)`.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::TournamentId;

/// Admission class: which referral-tree shape a joining wallet must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TournamentKind {
    /// Requires both referral children present (`is_balanced`).
    Balanced,
    /// Requires zero or one referral child (`!is_balanced`).
    Unbalanced,
}

impl std::fmt::Display for TournamentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Balanced => write!(f, "BALANCED"),
            Self::Unbalanced => write!(f, "UNBALANCED"),
        }
    }
}

/// Lifecycle status of a tournament.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TournamentStatus {
    Upcoming,
    Active,
    Ended,
    Settled,
}

impl std::fmt::Display for TournamentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upcoming => write!(f, "UPCOMING"),
            Self::Active => write!(f, "ACTIVE"),
            Self::Ended => write!(f, "ENDED"),
            Self::Settled => write!(f, "SETTLED"),
        }
    }
}

/// A tournament as seen by the admission engine (read-only).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub kind: TournamentKind,
    pub status: TournamentStatus,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    /// Minimum coin burn required to join, if configured.
    pub min_coins: Option<Decimal>,
    /// Lower equilibrium bound. Meaningful only for [`TournamentKind::Balanced`].
    pub equilibrium_min: Option<i64>,
    /// Upper equilibrium bound. Meaningful only for [`TournamentKind::Balanced`].
    pub equilibrium_max: Option<i64>,
}

impl Tournament {
    /// Whether a join is legal at `now`: ACTIVE status and
    /// `now ∈ [starts_at, ends_at)`.
    #[must_use]
    pub fn is_joinable_at(&self, now: DateTime<Utc>) -> bool {
        self.status == TournamentStatus::Active && now >= self.starts_at && now < self.ends_at
    }

    /// Whether the equilibrium-range gate applies: Balanced kind with at
    /// least one bound configured.
    #[must_use]
    pub fn has_equilibrium_gate(&self) -> bool {
        self.kind == TournamentKind::Balanced
            && (self.equilibrium_min.is_some() || self.equilibrium_max.is_some())
    }

    /// Whether `point` falls inside `[equilibrium_min ?? -∞, equilibrium_max ?? +∞]`.
    #[must_use]
    pub fn equilibrium_contains(&self, point: i64) -> bool {
        point >= self.equilibrium_min.unwrap_or(i64::MIN)
            && point <= self.equilibrium_max.unwrap_or(i64::MAX)
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Tournament {
    /// An ACTIVE tournament whose window comfortably brackets `Utc::now()`,
    /// with no minimum coins and no equilibrium bounds.
    pub fn dummy_active(kind: TournamentKind) -> Self {
        let now = Utc::now();
        Self {
            id: TournamentId::new(),
            name: format!("{kind} test tournament"),
            kind,
            status: TournamentStatus::Active,
            starts_at: now - chrono::Duration::hours(1),
            ends_at: now + chrono::Duration::hours(1),
            min_coins: None,
            equilibrium_min: None,
            equilibrium_max: None,
        }
    }
}
