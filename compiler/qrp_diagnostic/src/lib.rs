//! Diagnostic system for error reporting.
//!
//! Every failure in the pipeline converts into a [`Diagnostic`]:
//! - an error code for searchability
//! - a message saying what went wrong
//! - labelled positions saying where
//! - notes and help lines saying why and how to fix it

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
