//! Recursion rule: inlining a function into itself never terminates, so a
//! self-call is reported at every offending site, with generic
//! instantiations compared by their uninstantiated declaration.

use veld_checker::diagnostics::{Diagnostic, diagnostic_codes};
use veld_checker::{InlineChecker, ResolvedCall, UsageSite};
use veld_common::Span;
use veld_sema::{Symbol, SymbolArena, SymbolId, Visibility};

struct World {
    arena: SymbolArena,
    root: SymbolId,
    repeat: SymbolId,
}

fn world() -> World {
    let mut arena = SymbolArena::new();
    let root = arena.alloc(Symbol::module("main"));
    let repeat = arena.alloc(
        Symbol::function("repeat", Visibility::Public)
            .inline()
            .contained_in(root),
    );
    World { arena, root, repeat }
}

fn check_all(world: &World, calls: &[ResolvedCall]) -> Vec<Diagnostic> {
    let mut checker = InlineChecker::new(&world.arena, "test.veld", world.repeat);
    for call in calls {
        checker.check(call);
    }
    checker.finish()
}

fn codes(diagnostics: &[Diagnostic]) -> Vec<u32> {
    diagnostics.iter().map(|d| d.code).collect()
}

fn call_to(target: SymbolId, at: u32) -> ResolvedCall {
    ResolvedCall::new(UsageSite::expression(Span::new(at, at + 6)), target)
}

#[test]
fn direct_self_call_reports() {
    let world = world();
    let diagnostics = check_all(&world, &[call_to(world.repeat, 10)]);
    assert_eq!(codes(&diagnostics), vec![diagnostic_codes::RECURSION_IN_INLINE]);
    assert!(diagnostics[0].message_text.contains("'repeat'"));
}

#[test]
fn each_self_call_site_reports_once() {
    let world = world();
    let diagnostics = check_all(
        &world,
        &[call_to(world.repeat, 10), call_to(world.repeat, 40)],
    );
    assert_eq!(
        codes(&diagnostics),
        vec![
            diagnostic_codes::RECURSION_IN_INLINE,
            diagnostic_codes::RECURSION_IN_INLINE
        ]
    );
    assert_eq!(diagnostics[0].start, 10);
    assert_eq!(diagnostics[1].start, 40);
}

#[test]
fn generic_instantiation_still_counts_as_self() {
    let mut world = world();
    let instantiated = world.arena.alloc(
        Symbol::function("repeat", Visibility::Public)
            .inline()
            .contained_in(world.root)
            .instantiation_of(world.repeat),
    );
    assert_eq!(
        codes(&check_all(&world, &[call_to(instantiated, 10)])),
        vec![diagnostic_codes::RECURSION_IN_INLINE]
    );
}

#[test]
fn calling_a_different_inline_function_is_silent() {
    let mut world = world();
    let other = world.arena.alloc(
        Symbol::function("other", Visibility::Public)
            .inline()
            .contained_in(world.root),
    );
    assert!(check_all(&world, &[call_to(other, 10)]).is_empty());
}

#[test]
fn instantiation_of_a_different_function_is_silent() {
    let mut world = world();
    let other = world.arena.alloc(
        Symbol::function("other", Visibility::Public)
            .inline()
            .contained_in(world.root),
    );
    let instantiated = world.arena.alloc(
        Symbol::function("other", Visibility::Public)
            .inline()
            .contained_in(world.root)
            .instantiation_of(other),
    );
    assert!(check_all(&world, &[call_to(instantiated, 10)]).is_empty());
}
