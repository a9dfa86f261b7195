//! # openarena-segmentation
//!
//! **Segmentation Plane**: referral-tree oracle contract, segmentation
//! cache, and the cache-first resolver.
//!
//! ## Architecture
//!
//! 1. **ReferralOracle**: read-only source of truth for a wallet's position
//!    in the external binary referral tree
//! 2. **SegmentationStore**: persisted wallet → classification cache,
//!    keyed by normalized address, overwrite-on-refresh
//! 3. **SegmentationResolver**: cache hit → verbatim; miss → oracle with a
//!    bounded timeout, classify, best-effort write-back
//!
//! ## Resolution Flow
//!
//! ```text
//! resolve(wallet) → cache.get() ── hit ──→ Resolution(CACHE)
//!                        │ miss
//!                        ▼
//!                  oracle.node_data()  [bounded timeout]
//!                    ├─ node        → classify → cache.upsert() → Resolution(ORACLE)
//!                    ├─ no node     → default  → cache.upsert() → Resolution(UNREGISTERED)
//!                    └─ error/timed → default  (not cached)     → Resolution(ORACLE_UNAVAILABLE)
//! ```
//!
//! The cache is advisory: staleness is accepted, and the admission engine
//! forces a refresh (`resolve_fresh`) when it needs the current state.

pub mod cache;
pub mod oracle;
pub mod resolver;

pub use cache::{InMemorySegmentationCache, SegmentationStore};
pub use oracle::{ReferralOracle, StaticOracle};
pub use resolver::{Provenance, Resolution, SegmentationResolver};
