//! Per-function driver for the inline-usage pass.
//!
//! Every inline function body is validated independently by its own
//! `InlineChecker` over immutable symbol data, so bodies fan out across
//! rayon workers when `PassOptions::parallel` is set. Within one body,
//! calls are visited in source order for reproducible diagnostics.
//!
//! Cancellation is cooperative: the token is polled between calls, and a
//! cancelled body discards its partial diagnostics; bodies that already
//! committed are unaffected.

use rayon::prelude::*;
use tracing::debug;

use veld_common::limits::CANCEL_CHECK_INTERVAL;
use veld_common::{CancellationToken, DiagnosticSink};
use veld_sema::{SymbolArena, SymbolId};

use crate::inline_checker::InlineChecker;
use crate::resolved_call::ResolvedCall;

/// One function body's worth of input: the declaring file, the function
/// symbol, and the resolved calls inside the body in source order.
#[derive(Clone, Debug)]
pub struct FunctionBody {
    pub file: String,
    pub function: SymbolId,
    pub calls: Vec<ResolvedCall>,
}

impl FunctionBody {
    #[must_use]
    pub fn new(file: impl Into<String>, function: SymbolId, calls: Vec<ResolvedCall>) -> Self {
        Self {
            file: file.into(),
            function,
            calls,
        }
    }
}

/// Driver knobs.
#[derive(Clone, Copy, Debug)]
pub struct PassOptions {
    /// Validate bodies on rayon workers instead of the calling thread.
    pub parallel: bool,
    /// How many calls to process between cancellation polls.
    pub cancel_check_interval: usize,
}

impl Default for PassOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            cancel_check_interval: CANCEL_CHECK_INTERVAL,
        }
    }
}

/// Validate every inline function body, committing each body's diagnostics
/// to `sink` as it completes. Bodies whose function is not inline are
/// skipped; a cancelled run commits nothing for in-flight bodies.
pub fn check_bodies(
    arena: &SymbolArena,
    bodies: &[FunctionBody],
    options: PassOptions,
    cancel: &CancellationToken,
    sink: &DiagnosticSink,
) {
    if options.parallel {
        bodies
            .par_iter()
            .for_each(|body| check_body(arena, body, options, cancel, sink));
    } else {
        for body in bodies {
            check_body(arena, body, options, cancel, sink);
        }
    }
}

fn check_body(
    arena: &SymbolArena,
    body: &FunctionBody,
    options: PassOptions,
    cancel: &CancellationToken,
    sink: &DiagnosticSink,
) {
    if !arena.is_inline(body.function) {
        debug!(
            function = arena.name(body.function),
            "not inline, nothing to validate"
        );
        return;
    }
    if cancel.is_cancelled() {
        return;
    }

    let mut checker = InlineChecker::new(arena, &body.file, body.function);
    let interval = options.cancel_check_interval.max(1);
    for (index, call) in body.calls.iter().enumerate() {
        if index % interval == 0 && cancel.is_cancelled() {
            debug!(
                function = arena.name(body.function),
                checked = index,
                "cancelled, discarding partial diagnostics"
            );
            return;
        }
        checker.check(call);
    }

    sink.extend(checker.finish());
}
