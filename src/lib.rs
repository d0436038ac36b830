//! Rust client for the Loyalicos loyalty-platform Web API.
//!
//! Covers membership enrollment and lookup, member token refresh, and
//! point-accrual transactions. Credentials come from explicit configuration
//! or the `LOYALICOS_*` environment variables; when only an OAuth
//! client/secret pair is available, [`Client::connect`] performs one
//! Basic-Auth exchange against `/oauth/authapi` to obtain its bearer token.
//!
//! The [`Client`] is immutable once connected and cheap to clone, so a
//! single instance can serve concurrent calls. Resource operations live on
//! the [`Members`] and [`Transactions`] handles returned by
//! [`Client::members`] and [`Client::transactions`].

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;

pub use api::{Client, Members, Transactions};
pub use auth::UserToken;
pub use config::Config;
pub use error::Error;
pub use models::{Accrual, AccrualReceipt};
