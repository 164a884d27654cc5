//! Common types and utilities for the veld compiler.
//!
//! This crate provides foundational types used across all veld crates:
//! - Source spans (`Span`)
//! - Diagnostics (`Diagnostic`, `DiagnosticCategory`, code/message tables)
//! - The concurrent diagnostic sink (`DiagnosticSink`)
//! - Cooperative cancellation (`CancellationToken`)
//! - Compiler limits and thresholds

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::Span;

// Diagnostic types and message lookup
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory, diagnostic_codes, diagnostic_messages};

// Shared diagnostic accumulator
pub mod sink;
pub use sink::DiagnosticSink;

// Cooperative cancellation
pub mod cancel;
pub use cancel::CancellationToken;

// Centralized limits and thresholds
pub mod limits;
