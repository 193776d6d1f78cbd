#![doc(hidden)]

//! Core library for repo-trust
//!
//! This library consolidates all functionality for the repo-trust tool, which
//! scores the trustworthiness of software packages and repositories.
//!
//! # Module Organization
//!
//! - [`commands`]: Command-line interface and batch orchestration
//! - [`validate`]: Syntactic URL validation
//! - [`resolve`]: Package-registry to source-repository resolution
//! - [`hosting`]: Source-hosting API client and repository identification
//! - [`metrics`]: The individual trust metric evaluators
//! - [`scoring`]: Weighted aggregation of metric results
//! - [`reports`]: Record serialization

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

#[cfg(any(debug_assertions, test))]
pub mod hosting;
#[cfg(not(any(debug_assertions, test)))]
mod hosting;

#[cfg(any(debug_assertions, test))]
pub mod metrics;
#[cfg(not(any(debug_assertions, test)))]
mod metrics;

#[cfg(any(debug_assertions, test))]
pub mod reports;
#[cfg(not(any(debug_assertions, test)))]
mod reports;

#[cfg(any(debug_assertions, test))]
pub mod resolve;
#[cfg(not(any(debug_assertions, test)))]
mod resolve;

#[cfg(any(debug_assertions, test))]
pub mod scoring;
#[cfg(not(any(debug_assertions, test)))]
mod scoring;

#[cfg(any(debug_assertions, test))]
pub mod validate;
#[cfg(not(any(debug_assertions, test)))]
mod validate;

pub use crate::commands::{Host, run};
