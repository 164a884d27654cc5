//! Post-resolution call representation.
//!
//! The call resolver delivers one `ResolvedCall` per resolved reference in a
//! function body, in source order: ordinary calls, operator calls, and bare
//! value references (whose "callee" is the reference itself). This pass
//! consumes that stream read-only.

use smallvec::SmallVec;
use veld_common::Span;
use veld_sema::SymbolId;

use crate::usage::Enclosure;

/// A resolved expression position inside the body under analysis: its span,
/// the symbol it denotes when it is a simple name or `this` reference, and
/// the syntactic frames between it and its nearest enclosing call.
#[derive(Clone, Debug)]
pub struct UsageSite {
    pub span: Span,
    pub denoted: Option<SymbolId>,
    pub enclosure: SmallVec<[Enclosure; 4]>,
}

impl UsageSite {
    /// An expression that does not denote a single symbol.
    #[must_use]
    pub fn expression(span: Span) -> Self {
        Self {
            span,
            denoted: None,
            enclosure: SmallVec::new(),
        }
    }

    /// A simple name (or `this`) reference to `symbol`.
    #[must_use]
    pub fn reference(span: Span, symbol: SymbolId) -> Self {
        Self {
            span,
            denoted: Some(symbol),
            enclosure: SmallVec::new(),
        }
    }

    /// Attach the enclosure frames, innermost first.
    #[must_use]
    pub fn enclosed_by(mut self, frames: impl IntoIterator<Item = Enclosure>) -> Self {
        self.enclosure = frames.into_iter().collect();
        self
    }
}

/// What the resolver bound to one target parameter.
#[derive(Clone, Debug)]
pub enum ArgumentMapping {
    /// No argument was supplied; the parameter's default applies.
    Default,
    /// One expression, or several for a variadic parameter.
    Supplied(SmallVec<[UsageSite; 1]>),
}

/// One entry of the parameter-to-argument mapping of a resolved call.
#[derive(Clone, Debug)]
pub struct ResolvedArgument {
    pub parameter: SymbolId,
    pub mapping: ArgumentMapping,
}

impl ResolvedArgument {
    #[must_use]
    pub fn defaulted(parameter: SymbolId) -> Self {
        Self {
            parameter,
            mapping: ArgumentMapping::Default,
        }
    }

    #[must_use]
    pub fn supplied(parameter: SymbolId, expr: UsageSite) -> Self {
        Self {
            parameter,
            mapping: ArgumentMapping::Supplied(SmallVec::from_iter([expr])),
        }
    }

    #[must_use]
    pub fn variadic(parameter: SymbolId, exprs: impl IntoIterator<Item = UsageSite>) -> Self {
        Self {
            parameter,
            mapping: ArgumentMapping::Supplied(exprs.into_iter().collect()),
        }
    }
}

/// A call expression after resolution: the chosen target, the receiver the
/// call is made on (dispatch) and/or the extension receiver, and the
/// parameter-to-argument mapping. `target` is `None` when resolution failed;
/// such calls carry nothing to check.
#[derive(Clone, Debug)]
pub struct ResolvedCall {
    pub span: Span,
    pub callee: UsageSite,
    pub target: Option<SymbolId>,
    pub dispatch_receiver: Option<UsageSite>,
    pub extension_receiver: Option<UsageSite>,
    pub arguments: Vec<ResolvedArgument>,
}

impl ResolvedCall {
    #[must_use]
    pub fn new(callee: UsageSite, target: SymbolId) -> Self {
        Self {
            span: callee.span,
            callee,
            target: Some(target),
            dispatch_receiver: None,
            extension_receiver: None,
            arguments: Vec::new(),
        }
    }

    /// A reference the resolver could not bind to any symbol.
    #[must_use]
    pub fn unresolved(callee: UsageSite) -> Self {
        Self {
            span: callee.span,
            callee,
            target: None,
            dispatch_receiver: None,
            extension_receiver: None,
            arguments: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    #[must_use]
    pub fn dispatched_on(mut self, receiver: UsageSite) -> Self {
        self.dispatch_receiver = Some(receiver);
        self
    }

    #[must_use]
    pub fn extended_on(mut self, receiver: UsageSite) -> Self {
        self.extension_receiver = Some(receiver);
        self
    }

    #[must_use]
    pub fn with_argument(mut self, argument: ResolvedArgument) -> Self {
        self.arguments.push(argument);
        self
    }
}
