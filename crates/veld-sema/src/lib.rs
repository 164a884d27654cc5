//! Symbol model for the veld compiler.
//!
//! This crate holds the post-resolution symbol representation consumed by
//! semantic-analysis passes:
//! - `SymbolArena` / `SymbolId` / `Symbol` - the symbol store
//! - `symbol_flags` - classification bits
//! - `Visibility` - visibility tiers with an explicit narrowness order
//! - `InlineMode` / `ParamData` - parameter inlining attributes
//! - attribute queries (`is_inline`, `is_effectively_public`, ...) used by
//!   the inline-usage checker

pub mod symbols;
pub use symbols::{InlineMode, ParamData, Symbol, SymbolArena, SymbolId, Visibility, symbol_flags};

mod queries;
