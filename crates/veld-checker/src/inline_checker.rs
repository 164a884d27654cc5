//! Usage checking for inline function bodies.
//!
//! One `InlineChecker` is built per inline-function body and fed every
//! resolved call inside that body, in source order. It enforces:
//! - inlinable parameters are only invoked, or consumed by inline targets
//!   that can splice them;
//! - non-local-return-capable lambdas sit where control can still reach the
//!   enclosing call's continuation;
//! - public-API inline bodies reference only symbols their callers can see;
//! - non-private inline bodies stay out of private class members;
//! - an inline function never calls itself.
//!
//! Every violation is an ordinary diagnostic; the checker itself never
//! fails, and a call without a resolved target is skipped.

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;
use tracing::debug;

use veld_common::diagnostics::{
    Diagnostic, diagnostic_codes, diagnostic_messages, format_message,
};
use veld_common::span::Span;
use veld_sema::{SymbolArena, SymbolId, Visibility, symbol_flags};

use crate::resolved_call::{ArgumentMapping, ResolvedCall, UsageSite};
use crate::usage;

/// The closed set of rules this checker enforces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InlineViolation {
    UsageNotInlinable,
    NonLocalReturnNotAllowed,
    RecursionInInline,
    InvisibleMemberFromInline,
    PrivateClassMemberFromInline,
}

impl InlineViolation {
    #[must_use]
    pub const fn code(self) -> u32 {
        match self {
            InlineViolation::UsageNotInlinable => diagnostic_codes::USAGE_NOT_INLINABLE,
            InlineViolation::NonLocalReturnNotAllowed => {
                diagnostic_codes::NON_LOCAL_RETURN_NOT_ALLOWED
            }
            InlineViolation::RecursionInInline => diagnostic_codes::RECURSION_IN_INLINE,
            InlineViolation::InvisibleMemberFromInline => {
                diagnostic_codes::INVISIBLE_MEMBER_FROM_INLINE
            }
            InlineViolation::PrivateClassMemberFromInline => {
                diagnostic_codes::PRIVATE_CLASS_MEMBER_FROM_INLINE
            }
        }
    }

    #[must_use]
    pub const fn message_template(self) -> &'static str {
        match self {
            InlineViolation::UsageNotInlinable => diagnostic_messages::USAGE_NOT_INLINABLE,
            InlineViolation::NonLocalReturnNotAllowed => {
                diagnostic_messages::NON_LOCAL_RETURN_NOT_ALLOWED
            }
            InlineViolation::RecursionInInline => diagnostic_messages::RECURSION_IN_INLINE,
            InlineViolation::InvisibleMemberFromInline => {
                diagnostic_messages::INVISIBLE_MEMBER_FROM_INLINE
            }
            InlineViolation::PrivateClassMemberFromInline => {
                diagnostic_messages::PRIVATE_CLASS_MEMBER_FROM_INLINE
            }
        }
    }
}

/// Insertion-ordered set of the enclosing function's inlinable parameters.
type InlinableParamSet = IndexSet<SymbolId, FxBuildHasher>;

/// Per-body validator for inline-parameter usage.
///
/// The inlinable parameter set is fixed at construction and immutable for
/// the checker's lifetime; checks are call-local, so calls may be fed in any
/// order, though source order keeps diagnostic output reproducible.
pub struct InlineChecker<'a> {
    arena: &'a SymbolArena,
    file: &'a str,
    function: SymbolId,
    is_effectively_public: bool,
    inlinable_parameters: InlinableParamSet,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> InlineChecker<'a> {
    /// Build the checker for one inline function body. `function` must be
    /// the uninstantiated declaration the body belongs to.
    #[must_use]
    pub fn new(arena: &'a SymbolArena, file: &'a str, function: SymbolId) -> Self {
        debug_assert!(
            arena.is_inline(function),
            "inline checker built for non-inline function '{}'",
            arena.name(function)
        );

        let inlinable_parameters: InlinableParamSet = arena
            .parameters_of(function)
            .into_iter()
            .filter(|&param| arena.is_inlinable_parameter(param))
            .collect();
        let is_effectively_public = arena.is_effectively_public(function);

        debug!(
            function = arena.name(function),
            inlinable = inlinable_parameters.len(),
            public_api = is_effectively_public,
            "inline checker"
        );

        Self {
            arena,
            file,
            function,
            is_effectively_public,
            inlinable_parameters,
            diagnostics: Vec::new(),
        }
    }

    #[must_use]
    pub fn function(&self) -> SymbolId {
        self.function
    }

    /// Apply every rule to one resolved call. A call with no target carries
    /// nothing to check.
    pub fn check(&mut self, call: &ResolvedCall) {
        let Some(target) = call.target else {
            return;
        };

        // Only invoke or an inline extension may consume an inlinable
        // parameter in receiver position.
        self.check_receiver(target, call.dispatch_receiver.as_ref());
        self.check_receiver(target, call.extension_receiver.as_ref());

        // The parameter referenced as a plain value must still sit in a
        // position the inliner can splice.
        if self.inlinable_parameters.contains(&target)
            && !usage::reaches_enclosing_call(&call.callee.enclosure)
        {
            self.report_usage_not_inlinable(call.callee.span, target);
        }

        for argument in &call.arguments {
            if let ArgumentMapping::Supplied(exprs) = &argument.mapping {
                for expr in exprs {
                    self.check_value_argument(target, argument.parameter, expr);
                }
            }
        }

        self.check_visibility_and_access(target, call.callee.span);
        for receiver in [call.dispatch_receiver.as_ref(), call.extension_receiver.as_ref()] {
            if let Some(symbol) = receiver.and_then(|r| r.denoted) {
                if symbol != target {
                    self.check_visibility_and_access(symbol, receiver.map_or(call.callee.span, |r| r.span));
                }
            }
        }

        self.check_recursion(target, call.callee.span);
    }

    /// Consume the checker and yield the diagnostics of this body.
    #[must_use]
    pub fn finish(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    fn check_receiver(&mut self, target: SymbolId, receiver: Option<&UsageSite>) {
        let Some(receiver) = receiver else {
            return;
        };
        let Some(bound) = receiver.denoted else {
            return;
        };
        if !self.inlinable_parameters.contains(&bound) {
            return;
        }

        if self.is_invoke_or_inline_extension(target) {
            self.check_non_local_return(bound, receiver);
        } else {
            self.report_usage_not_inlinable(receiver.span, bound);
        }
    }

    fn check_value_argument(&mut self, target: SymbolId, parameter: SymbolId, expr: &UsageSite) {
        let Some(forwarded) = expr.denoted else {
            return;
        };
        if !self.inlinable_parameters.contains(&forwarded) {
            return;
        }

        if self.arena.is_inline(target) && self.arena.is_inlinable_parameter(parameter) {
            if self.arena.allows_non_local_returns(forwarded)
                && !self.arena.allows_non_local_returns(parameter)
            {
                self.report(
                    InlineViolation::NonLocalReturnNotAllowed,
                    expr.span,
                    &[self.arena.name(forwarded)],
                );
            } else {
                self.check_non_local_return(forwarded, expr);
            }
        } else {
            self.report_usage_not_inlinable(expr.span, forwarded);
        }
    }

    /// The placement sub-check: only run for parameters whose lambdas may
    /// contain non-local returns at all.
    fn check_non_local_return(&mut self, parameter: SymbolId, usage_site: &UsageSite) {
        if !self.arena.allows_non_local_returns(parameter) {
            return;
        }
        if !usage::reaches_enclosing_call(&usage_site.enclosure) {
            self.report(
                InlineViolation::NonLocalReturnNotAllowed,
                usage_site.span,
                &[self.arena.name(parameter)],
            );
        }
    }

    fn check_visibility_and_access(&mut self, referenced: SymbolId, span: Span) {
        let referenced_is_public_api = self.arena.is_effectively_public(referenced)
            || self.arena.is_declared_within(referenced, self.function);
        if self.is_effectively_public
            && !referenced_is_public_api
            && self.arena.visibility(referenced) != Visibility::Local
        {
            self.report(
                InlineViolation::InvisibleMemberFromInline,
                span,
                &[self.arena.name(referenced), self.arena.name(self.function)],
            );
        }

        if !self.arena.visibility(self.function).is_private()
            && self.arena.is_private_class_member(referenced)
        {
            self.report(
                InlineViolation::PrivateClassMemberFromInline,
                span,
                &[self.arena.name(referenced), self.arena.name(self.function)],
            );
        }
    }

    fn check_recursion(&mut self, target: SymbolId, span: Span) {
        if self.arena.original(target) == self.function {
            self.report(
                InlineViolation::RecursionInInline,
                span,
                &[self.arena.name(self.function)],
            );
        }
    }

    fn is_invoke_or_inline_extension(&self, target: SymbolId) -> bool {
        self.arena.has_flags(target, symbol_flags::FUNCTION)
            && (self.arena.is_invoke_operator(target) || self.arena.is_inline(target))
    }

    fn report_usage_not_inlinable(&mut self, span: Span, parameter: SymbolId) {
        self.report(
            InlineViolation::UsageNotInlinable,
            span,
            &[self.arena.name(parameter), self.arena.name(self.function)],
        );
    }

    fn report(&mut self, violation: InlineViolation, span: Span, args: &[&str]) {
        let message = format_message(violation.message_template(), args);
        self.diagnostics.push(Diagnostic::error_at(
            self.file,
            span,
            message,
            violation.code(),
        ));
    }
}
