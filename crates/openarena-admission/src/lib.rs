//! # openarena-admission
//!
//! **Admission Plane**: the ordered join pipeline, coin-burn authority
//! contract, and participation ledger.
//!
//! ## Architecture
//!
//! 1. **TournamentStore**: read-only tournament lookup (owned by the
//!    external admin workflow)
//! 2. **BurnAuthority**: accepts or rejects a proposed coin burn
//! 3. **ParticipationLedger**: per-(tournament, wallet) cumulative burn
//!    record with an atomic insert-or-accumulate upsert
//! 4. **AdmissionEngine**: orchestrates the seven ordered checks
//!
//! ## Join Flow
//!
//! ```text
//! join(tournament, wallet, coins)
//!   → existence → window → segmentation eligibility → minimum coins
//!   → equilibrium range (forced oracle refresh when the point is missing)
//!   → burn authorization → atomic ledger upsert → JoinReceipt
//! ```
//!
//! Every check short-circuits with a distinct [`openarena_types::OpenarenaError`]
//! kind; no ledger mutation happens before the burn is authorized.

pub mod burn;
pub mod engine;
pub mod ledger;
pub mod store;

pub use burn::{BurnAuthority, BurnDecision, BurnRequest, ValidatingBurnAuthority};
pub use engine::AdmissionEngine;
pub use ledger::{InMemoryLedger, ParticipationLedger};
pub use store::{InMemoryTournamentStore, TournamentStore};
