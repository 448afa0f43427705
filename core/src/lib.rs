//! Operations built on the source-address policy: interface checks, route
//! lookups, socket binding and bulk validation.

pub mod batch;
pub mod network;
pub mod suite;
