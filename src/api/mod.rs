//! REST client module for the Loyalicos Web API.
//!
//! `Client` owns the HTTP transport and the resolved credentials. `Members`
//! and `Transactions` are lightweight handles borrowing it; every operation
//! is a single independent request/response exchange.

pub mod client;
pub mod members;
pub mod transactions;

pub use client::Client;
pub use members::Members;
pub use transactions::Transactions;
