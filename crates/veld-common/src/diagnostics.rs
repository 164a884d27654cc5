//! Diagnostic types and message lookup for the inline-usage checker.
//!
//! Codes and message templates form a closed table; messages use `{0}`,
//! `{1}` placeholders filled in by `format_message`.

use serde::Serialize;

use crate::span::Span;

// =============================================================================
// Diagnostic Types
// =============================================================================

/// Diagnostic category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCategory {
    Warning = 0,
    Error = 1,
    Suggestion = 2,
    Message = 3,
}

/// A checker diagnostic anchored to a source location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub file: String,
    pub start: u32,
    pub length: u32,
    pub message_text: String,
    pub category: DiagnosticCategory,
    pub code: u32,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    #[must_use]
    pub const fn error(file: String, start: u32, length: u32, message: String, code: u32) -> Self {
        Self {
            file,
            start,
            length,
            message_text: message,
            category: DiagnosticCategory::Error,
            code,
        }
    }

    /// Create an error diagnostic covering `span`.
    #[must_use]
    pub fn error_at(file: &str, span: Span, message: String, code: u32) -> Self {
        Self::error(file.to_string(), span.start, span.len(), message, code)
    }
}

/// Format a diagnostic message by replacing {0}, {1}, etc. with arguments.
#[must_use]
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}

/// A diagnostic message definition with code, category, and message template.
#[derive(Clone, Copy, Debug)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

/// Diagnostic codes reported by the inline-usage checker.
///
/// The taxonomy is closed: every diagnostic this pass can produce is one of
/// these five, and all of them are ordinary compiler errors, never fatal.
pub mod diagnostic_codes {
    /// An inlinable parameter is used in a position the inliner cannot splice.
    pub const USAGE_NOT_INLINABLE: u32 = 3201;
    /// A non-local-return-capable parameter usage cannot transfer control
    /// back to the enclosing call, or is forwarded into a context that
    /// forbids non-local returns.
    pub const NON_LOCAL_RETURN_NOT_ALLOWED: u32 = 3202;
    /// An inline function calls itself, directly or via instantiation.
    pub const RECURSION_IN_INLINE: u32 = 3203;
    /// A public-API inline function references a symbol its callers cannot see.
    pub const INVISIBLE_MEMBER_FROM_INLINE: u32 = 3204;
    /// A non-private inline function accesses a private class member.
    pub const PRIVATE_CLASS_MEMBER_FROM_INLINE: u32 = 3205;
}

/// Message templates, indexed by the same names as `diagnostic_codes`.
pub mod diagnostic_messages {
    pub const USAGE_NOT_INLINABLE: &str =
        "Illegal usage of inline parameter '{0}' in '{1}'. Add 'noinline' to the parameter declaration.";
    pub const NON_LOCAL_RETURN_NOT_ALLOWED: &str =
        "Cannot inline '{0}' here: it may contain non-local returns. Add 'crossinline' to the parameter declaration.";
    pub const RECURSION_IN_INLINE: &str = "Inline function '{0}' cannot call itself.";
    pub const INVISIBLE_MEMBER_FROM_INLINE: &str =
        "Public-API inline function '{1}' cannot access non-public-API symbol '{0}'.";
    pub const PRIVATE_CLASS_MEMBER_FROM_INLINE: &str =
        "Non-private inline function '{1}' cannot access private class member '{0}'.";
}

/// The closed message table for this pass.
pub const DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
    DiagnosticMessage {
        code: diagnostic_codes::USAGE_NOT_INLINABLE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::USAGE_NOT_INLINABLE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::NON_LOCAL_RETURN_NOT_ALLOWED,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::NON_LOCAL_RETURN_NOT_ALLOWED,
    },
    DiagnosticMessage {
        code: diagnostic_codes::RECURSION_IN_INLINE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::RECURSION_IN_INLINE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::INVISIBLE_MEMBER_FROM_INLINE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::INVISIBLE_MEMBER_FROM_INLINE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::PRIVATE_CLASS_MEMBER_FROM_INLINE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::PRIVATE_CLASS_MEMBER_FROM_INLINE,
    },
];

/// Look up a diagnostic message definition by code.
#[must_use]
pub fn get_diagnostic_message(code: u32) -> Option<&'static DiagnosticMessage> {
    DIAGNOSTIC_MESSAGES.iter().find(|m| m.code == code)
}
