//! Inline-usage validation for the veld compiler.
//!
//! Inline functions have their bodies substituted at every call site, which
//! imposes static constraints beyond ordinary type checking. This crate
//! validates them over the resolved-call stream of each inline function
//! body:
//! - `resolved_call` - the post-resolution call representation consumed here
//! - `usage` - syntactic enclosure frames and the splice-position predicate
//! - `inline_checker` - the per-body `InlineChecker` and its rules
//! - `pass` - the (optionally parallel) per-function driver with
//!   cooperative cancellation
//!
//! The checker only reports; it never fails and never decides overall
//! compilation success.

pub mod inline_checker;
pub mod pass;
pub mod resolved_call;
pub mod usage;

pub mod diagnostics {
    pub use veld_common::diagnostics::{
        Diagnostic, DiagnosticCategory, diagnostic_codes, diagnostic_messages, format_message,
    };
}

// Re-export key types
pub use inline_checker::{InlineChecker, InlineViolation};
pub use pass::{FunctionBody, PassOptions, check_bodies};
pub use resolved_call::{ArgumentMapping, ResolvedArgument, ResolvedCall, UsageSite};
pub use usage::Enclosure;
