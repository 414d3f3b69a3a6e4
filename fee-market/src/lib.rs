//! # EIP-7002 Withdrawal Request Fee
//!
//! The execution-layer withdrawal request contract charges a fee that grows
//! **exponentially** with the number of requests queued above target (the
//! *excess*). The exponential is approximated with integer math only, via
//! [`calculator::fake_exponential`], so every client computes the same fee.
//!
//! This crate implements that rule and generates the JSON test vectors used to
//! check independent implementations against it.
//!
//! ## Quick start
//!
//! ```rust
//! use eip7002_fee_market::{calculator, vectors, VectorConfig};
//!
//! // Per-request fee once 128 requests are in excess.
//! let fee = calculator::withdrawal_request_fee(128).unwrap();
//! assert_eq!(fee, 1_857);
//!
//! // Full fixture: 10 excess values × 7 request counts.
//! let doc = vectors::generate_document(&VectorConfig::default()).unwrap();
//! assert_eq!(doc.vectors.len(), 70);
//! ```
//!
//! See [`vectors`] for the generation order and [`writer`] for the file format.

pub mod calculator;
pub mod config;
pub mod error;
pub mod vectors;
pub mod writer;


// Re-exports for convenience.
pub use config::{FeeConstants, VectorConfig};
pub use error::FeeError;
pub use vectors::{TestVector, TestVectorDocument};
