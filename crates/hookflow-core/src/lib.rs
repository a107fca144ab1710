//! # hookflow-core
//!
//! Core crate for HookFlow. Contains the configuration schemas and the
//! unified application error system shared by the hook engine, plugins,
//! and the command-line front end.
//!
//! This crate has **no** internal dependencies on other HookFlow crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
