//! # openarena-types
//!
//! Shared types, errors, and configuration for the **OpenArena** tournament
//! admission engine.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`TournamentId`], [`ReceiptId`], [`WalletAddress`]
//! - **Tournament model**: [`Tournament`], [`TournamentKind`], [`TournamentStatus`]
//! - **Segmentation model**: [`OracleNode`], [`SegmentationResult`]
//! - **Ledger model**: [`Participant`]
//! - **Receipt model**: [`JoinReceipt`]
//! - **Configuration**: [`EngineConfig`]
//! - **Errors**: [`OpenarenaError`] with `OA_ERR_` prefix codes
//! - **Constants**: system-wide limits and defaults

pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod participant;
pub mod receipt;
pub mod segmentation;
pub mod tournament;

// Re-export all primary types at crate root for ergonomic imports:
//   use openarena_types::{Tournament, WalletAddress, SegmentationResult, ...};

pub use config::*;
pub use error::*;
pub use ids::*;
pub use participant::*;
pub use receipt::*;
pub use segmentation::*;
pub use tournament::*;

// Constants are accessed via `openarena_types::constants::FOO`
// (not re-exported to avoid name collisions).
