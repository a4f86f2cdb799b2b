//! `samplereg-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** types (no infrastructure concerns):
//! the account and sample records, their creation payloads, and the
//! domain-level error taxonomy.

pub mod account;
pub mod error;
pub mod sample;

pub use account::{Account, NewAccount};
pub use error::{DomainError, DomainResult};
pub use sample::{NewSample, Sample};
