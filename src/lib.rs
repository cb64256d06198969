//! Redemption Points Engine for grocery orders
//!
//! This crate decides how many loyalty points a completed order earns. An
//! order total is matched against a tiered table of redemption rules and the
//! best qualifying tier is awarded; rule tables can be validated before an
//! administrator saves them.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
