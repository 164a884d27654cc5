//! Access-leak rules: an inline body becomes part of its callers' compiled
//! output, so a public-API inline function must not reference symbols its
//! callers cannot see, and a non-private inline function must stay out of
//! private class members.

use veld_checker::diagnostics::{Diagnostic, diagnostic_codes};
use veld_checker::{InlineChecker, ResolvedCall, UsageSite};
use veld_common::Span;
use veld_sema::{Symbol, SymbolArena, SymbolId, Visibility};

struct World {
    arena: SymbolArena,
    root: SymbolId,
}

fn world() -> World {
    let mut arena = SymbolArena::new();
    let root = arena.alloc(Symbol::module("main"));
    World { arena, root }
}

fn inline_fn(world: &mut World, visibility: Visibility) -> SymbolId {
    world.arena.alloc(
        Symbol::function("render", visibility)
            .inline()
            .contained_in(world.root),
    )
}

fn check_one(world: &World, function: SymbolId, call: ResolvedCall) -> Vec<Diagnostic> {
    let mut checker = InlineChecker::new(&world.arena, "test.veld", function);
    checker.check(&call);
    checker.finish()
}

fn codes(diagnostics: &[Diagnostic]) -> Vec<u32> {
    diagnostics.iter().map(|d| d.code).collect()
}

fn call_to(target: SymbolId) -> ResolvedCall {
    ResolvedCall::new(UsageSite::expression(Span::new(10, 15)), target)
}

#[test]
fn public_inline_function_calling_internal_helper_reports() {
    let mut world = world();
    let function = inline_fn(&mut world, Visibility::Public);
    let helper = world
        .arena
        .alloc(Symbol::function("helper", Visibility::Internal).contained_in(world.root));

    let diagnostics = check_one(&world, function, call_to(helper));
    assert_eq!(
        codes(&diagnostics),
        vec![diagnostic_codes::INVISIBLE_MEMBER_FROM_INLINE]
    );
    assert!(diagnostics[0].message_text.contains("'helper'"));
    assert!(diagnostics[0].message_text.contains("'render'"));
}

#[test]
fn public_inline_function_calling_public_helper_is_silent() {
    let mut world = world();
    let function = inline_fn(&mut world, Visibility::Public);
    let helper = world
        .arena
        .alloc(Symbol::function("helper", Visibility::Public).contained_in(world.root));
    assert!(check_one(&world, function, call_to(helper)).is_empty());
}

#[test]
fn symbols_declared_inside_the_inline_function_are_exempt() {
    let mut world = world();
    let function = inline_fn(&mut world, Visibility::Public);
    // a function declared lexically inside the inline body
    let nested = world
        .arena
        .alloc(Symbol::function("step", Visibility::Local).contained_in(function));
    assert!(check_one(&world, function, call_to(nested)).is_empty());
}

#[test]
fn internal_inline_function_calling_internal_helper_is_silent() {
    let mut world = world();
    let function = inline_fn(&mut world, Visibility::Internal);
    let helper = world
        .arena
        .alloc(Symbol::function("helper", Visibility::Internal).contained_in(world.root));
    assert!(check_one(&world, function, call_to(helper)).is_empty());
}

#[test]
fn public_function_in_internal_class_is_not_public_api() {
    let mut world = world();
    let wrapper = world
        .arena
        .alloc(Symbol::class("Wrapper", Visibility::Internal).contained_in(world.root));
    let function = world.arena.alloc(
        Symbol::function("render", Visibility::Public)
            .inline()
            .contained_in(wrapper),
    );
    let helper = world
        .arena
        .alloc(Symbol::function("helper", Visibility::Internal).contained_in(world.root));
    assert!(check_one(&world, function, call_to(helper)).is_empty());
}

#[test]
fn internal_inline_function_accessing_private_class_member_reports() {
    let mut world = world();
    let owner = world
        .arena
        .alloc(Symbol::class("Owner", Visibility::Public).contained_in(world.root));
    let function = world.arena.alloc(
        Symbol::function("render", Visibility::Internal)
            .inline()
            .contained_in(owner),
    );
    let secret = world
        .arena
        .alloc(Symbol::property("secret", Visibility::Private).contained_in(owner));

    assert_eq!(
        codes(&check_one(&world, function, call_to(secret))),
        vec![diagnostic_codes::PRIVATE_CLASS_MEMBER_FROM_INLINE]
    );
}

#[test]
fn public_inline_function_accessing_private_class_member_reports_both_rules() {
    let mut world = world();
    let owner = world
        .arena
        .alloc(Symbol::class("Owner", Visibility::Public).contained_in(world.root));
    let function = world.arena.alloc(
        Symbol::function("render", Visibility::Public)
            .inline()
            .contained_in(owner),
    );
    let secret = world
        .arena
        .alloc(Symbol::property("secret", Visibility::Private).contained_in(owner));

    let mut reported = codes(&check_one(&world, function, call_to(secret)));
    reported.sort_unstable();
    assert_eq!(
        reported,
        vec![
            diagnostic_codes::INVISIBLE_MEMBER_FROM_INLINE,
            diagnostic_codes::PRIVATE_CLASS_MEMBER_FROM_INLINE
        ]
    );
}

#[test]
fn private_inline_function_accessing_private_member_is_silent() {
    let mut world = world();
    let owner = world
        .arena
        .alloc(Symbol::class("Owner", Visibility::Public).contained_in(world.root));
    let function = world.arena.alloc(
        Symbol::function("render", Visibility::Private)
            .inline()
            .contained_in(owner),
    );
    let secret = world
        .arena
        .alloc(Symbol::property("secret", Visibility::Private).contained_in(owner));
    assert!(check_one(&world, function, call_to(secret)).is_empty());
}

#[test]
fn member_of_a_private_class_reports_for_non_private_functions() {
    let mut world = world();
    let hidden = world
        .arena
        .alloc(Symbol::class("Hidden", Visibility::Private).contained_in(world.root));
    let member = world
        .arena
        .alloc(Symbol::function("peek", Visibility::Public).contained_in(hidden));
    let function = inline_fn(&mut world, Visibility::Internal);

    assert_eq!(
        codes(&check_one(&world, function, call_to(member))),
        vec![diagnostic_codes::PRIVATE_CLASS_MEMBER_FROM_INLINE]
    );
}

#[test]
fn receiver_symbols_are_checked_too() {
    let mut world = world();
    let function = inline_fn(&mut world, Visibility::Public);
    let registry = world
        .arena
        .alloc(Symbol::property("registry", Visibility::Internal).contained_in(world.root));
    let method = world
        .arena
        .alloc(Symbol::function("update", Visibility::Public).contained_in(world.root));

    // registry.update() - the target is public but the receiver leaks
    let call = ResolvedCall::new(UsageSite::expression(Span::new(10, 16)), method)
        .dispatched_on(UsageSite::reference(Span::new(10, 18), registry));
    assert_eq!(
        codes(&check_one(&world, function, call)),
        vec![diagnostic_codes::INVISIBLE_MEMBER_FROM_INLINE]
    );
}

#[test]
fn local_symbols_never_leak() {
    let mut world = world();
    let other = world
        .arena
        .alloc(Symbol::function("other", Visibility::Public).contained_in(world.root));
    let function = inline_fn(&mut world, Visibility::Public);
    // a local declared in some enclosing scope, Local visibility
    let local = world
        .arena
        .alloc(Symbol::local("tmp").contained_in(other));
    assert!(check_one(&world, function, call_to(local)).is_empty());
}
