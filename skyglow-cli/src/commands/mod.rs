//! CLI command implementations.
//!
//! Each subcommand has its own module with its handler.
//!
//! # Command Modules
//!
//! - [`query`] - Index lookup at a single coordinate
//! - [`enrich`] - CSV dataset enrichment
//! - [`search`] - Darker-site search around a coordinate
//! - [`validate`] - Load and audit configured maps
//! - [`regions`] - List configured regions
//! - [`init`] - Configuration initialization

pub mod common;
pub mod enrich;
pub mod init;
pub mod query;
pub mod regions;
pub mod search;
pub mod validate;
