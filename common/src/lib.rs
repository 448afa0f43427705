//! # srcbind common
//!
//! Shared model for source-address binding:
//!
//! * **[`network::address`]**: literal classification and the address-family policy.
//! * **[`network::source`]**: validated source selections ready to bind.
//! * **[`error`]**: typed errors for layers that must refuse a source address.
//! * **[`config`]**: runtime settings gathered from the command line.

pub mod config;
pub mod error;
pub mod logging;
pub mod network;
