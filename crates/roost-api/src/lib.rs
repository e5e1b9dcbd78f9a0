//! # roost-api
//!
//! HTTP API server for roost. The binary lives in `main.rs`; this library
//! exposes the service layer so integration tests can drive the search
//! orchestrator directly.

pub mod services;
