//! In-memory library catalog: books, members, loans and overdue fines,
//! driven by an interactive numbered menu.
//!
//! Layers:
//! - `domain`: records and pure loan rules
//! - `ports`: storage traits for the three ledgers
//! - `adapters`: in-memory implementations of the ports
//! - `application`: catalog, membership and loan operations
//! - `cli`: argument parsing and the menu session
//! - `config`: layered configuration

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod ports;
