//! Data models for Loyalicos API payloads.
//!
//! Only the accrual payload is typed; member profiles are upstream-defined
//! and passed through as raw JSON.

pub mod accrual;

pub use accrual::{Accrual, AccrualReceipt};
