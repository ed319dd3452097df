//! # Linkdrop Core
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! The link-creation workflow and the infrastructure around it:
//! - `config`: user configuration loading and validation
//! - `coordinator`: runs validation and creation off the calling task, reports one `LinkResult`
//! - `error`: the classified `LinkError` and application error types
//! - `naming`: default link names and the Auto/Manual name resolver
//! - `request`: `LinkRequest` and `LinkResult`
//!
//! The filesystem-facing pieces the coordinator drives (provider, validator,
//! link creator) live in `common::fs`.
//!
pub mod config;
pub mod coordinator;
pub mod error;
pub mod naming;
pub mod request;
