//! Symbol storage: arena, flags, visibility tiers, parameter attributes.
//!
//! Symbols are allocated by the resolver in declaration order and never
//! mutated afterwards; checkers see an immutable arena.

use tracing::trace;

/// Index of a symbol in a `SymbolArena`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymbolId(pub u32);

impl SymbolId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Symbol classification bits.
pub mod symbol_flags {
    pub const FUNCTION: u32 = 1 << 0;
    pub const CLASS: u32 = 1 << 1;
    pub const PARAMETER: u32 = 1 << 2;
    pub const PROPERTY: u32 = 1 << 3;
    pub const VARIABLE: u32 = 1 << 4;
    pub const MODULE: u32 = 1 << 5;
    /// Function or property declared `inline`.
    pub const INLINE: u32 = 1 << 6;
    /// On a class: one of the builtin function-type classes (the owners of
    /// the `invoke` operator). On a parameter: the parameter's declared type
    /// is a function type.
    pub const FUNCTION_TYPE: u32 = 1 << 7;
}

/// Visibility tiers, ordered by narrowness: `Public` is the broadest,
/// `Local` the narrowest. `Internal` is module-wide; `Private` is limited
/// to the containing declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Visibility {
    Public,
    Internal,
    Private,
    Local,
}

impl Visibility {
    #[must_use]
    pub const fn is_private(self) -> bool {
        matches!(self, Visibility::Private)
    }
}

/// How a function-typed parameter of an inline function participates in
/// inlining. `Inlined` parameters are spliced at the call site and permit
/// non-local returns; `Crossinline` parameters are spliced but forbid
/// non-local returns; `Noinline` parameters are ordinary values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InlineMode {
    Inlined,
    Noinline,
    Crossinline,
}

/// Inlining attributes of a value parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParamData {
    pub mode: InlineMode,
    pub is_nullable: bool,
}

/// A resolved declaration: function, class, parameter, property, variable,
/// or module. Containing declarations form a tree rooted at a module symbol;
/// generic instantiations point back at their uninstantiated declaration
/// through `original`.
#[derive(Clone, Debug)]
pub struct Symbol {
    pub name: String,
    pub flags: u32,
    pub visibility: Visibility,
    pub containing: Option<SymbolId>,
    pub original: Option<SymbolId>,
    pub param: Option<ParamData>,
}

impl Symbol {
    #[must_use]
    pub fn function(name: impl Into<String>, visibility: Visibility) -> Self {
        Self {
            name: name.into(),
            flags: symbol_flags::FUNCTION,
            visibility,
            containing: None,
            original: None,
            param: None,
        }
    }

    #[must_use]
    pub fn class(name: impl Into<String>, visibility: Visibility) -> Self {
        Self {
            name: name.into(),
            flags: symbol_flags::CLASS,
            visibility,
            containing: None,
            original: None,
            param: None,
        }
    }

    #[must_use]
    pub fn property(name: impl Into<String>, visibility: Visibility) -> Self {
        Self {
            name: name.into(),
            flags: symbol_flags::PROPERTY,
            visibility,
            containing: None,
            original: None,
            param: None,
        }
    }

    #[must_use]
    pub fn module(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            flags: symbol_flags::MODULE,
            visibility: Visibility::Public,
            containing: None,
            original: None,
            param: None,
        }
    }

    /// A variable declared in a function body.
    #[must_use]
    pub fn local(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            flags: symbol_flags::VARIABLE,
            visibility: Visibility::Local,
            containing: None,
            original: None,
            param: None,
        }
    }

    /// A function-typed value parameter.
    #[must_use]
    pub fn lambda_parameter(name: impl Into<String>, mode: InlineMode) -> Self {
        Self {
            name: name.into(),
            flags: symbol_flags::PARAMETER | symbol_flags::FUNCTION_TYPE,
            visibility: Visibility::Local,
            containing: None,
            original: None,
            param: Some(ParamData {
                mode,
                is_nullable: false,
            }),
        }
    }

    /// A value parameter of non-function type.
    #[must_use]
    pub fn value_parameter(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            flags: symbol_flags::PARAMETER,
            visibility: Visibility::Local,
            containing: None,
            original: None,
            param: Some(ParamData {
                mode: InlineMode::Inlined,
                is_nullable: false,
            }),
        }
    }

    /// Mark the declaration `inline`.
    #[must_use]
    pub fn inline(mut self) -> Self {
        self.flags |= symbol_flags::INLINE;
        self
    }

    /// Mark a class as one of the builtin function-type classes.
    #[must_use]
    pub fn function_type(mut self) -> Self {
        self.flags |= symbol_flags::FUNCTION_TYPE;
        self
    }

    /// Mark a parameter's type as nullable.
    #[must_use]
    pub fn nullable(mut self) -> Self {
        if let Some(param) = self.param.as_mut() {
            param.is_nullable = true;
        }
        self
    }

    #[must_use]
    pub fn contained_in(mut self, owner: SymbolId) -> Self {
        self.containing = Some(owner);
        self
    }

    /// Link a generic instantiation back to its uninstantiated declaration.
    #[must_use]
    pub fn instantiation_of(mut self, declaration: SymbolId) -> Self {
        self.original = Some(declaration);
        self
    }
}

/// Flat store of all symbols of one module, indexed by `SymbolId`.
#[derive(Debug, Default)]
pub struct SymbolArena {
    symbols: Vec<Symbol>,
}

impl SymbolArena {
    #[must_use]
    pub fn new() -> Self {
        Self {
            symbols: Vec::new(),
        }
    }

    pub fn alloc(&mut self, symbol: Symbol) -> SymbolId {
        let id = SymbolId(self.symbols.len() as u32);
        trace!(name = %symbol.name, flags = symbol.flags, "alloc symbol");
        self.symbols.push(symbol);
        id
    }

    #[must_use]
    pub fn get(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(id.index())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SymbolId, &Symbol)> {
        self.symbols
            .iter()
            .enumerate()
            .map(|(i, symbol)| (SymbolId(i as u32), symbol))
    }
}
