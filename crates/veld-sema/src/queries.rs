//! Symbol attribute queries consumed by the inline-usage checker.
//!
//! All queries treat missing symbols as "no information": boolean queries
//! answer `false` and `visibility` answers `Public`, so that dangling ids
//! coming out of a partial resolution can never manufacture diagnostics.

use smallvec::SmallVec;

use crate::symbols::{InlineMode, Symbol, SymbolArena, SymbolId, Visibility, symbol_flags};

impl SymbolArena {
    #[must_use]
    pub fn name(&self, id: SymbolId) -> &str {
        self.get(id).map_or("<missing>", |symbol| &symbol.name)
    }

    #[must_use]
    pub fn has_flags(&self, id: SymbolId, flags: u32) -> bool {
        self.get(id)
            .is_some_and(|symbol| symbol.flags & flags == flags)
    }

    /// Whether the symbol is a function or property declared `inline`.
    #[must_use]
    pub fn is_inline(&self, id: SymbolId) -> bool {
        self.get(id).is_some_and(|symbol| {
            symbol.flags & symbol_flags::INLINE != 0
                && symbol.flags & (symbol_flags::FUNCTION | symbol_flags::PROPERTY) != 0
        })
    }

    #[must_use]
    pub fn visibility(&self, id: SymbolId) -> Visibility {
        self.get(id)
            .map_or(Visibility::Public, |symbol| symbol.visibility)
    }

    #[must_use]
    pub fn containing_declaration(&self, id: SymbolId) -> Option<SymbolId> {
        self.get(id).and_then(|symbol| symbol.containing)
    }

    /// The uninstantiated declaration behind a (possibly generic-substituted)
    /// symbol. Follows `original` links to their root; a symbol with no link
    /// is its own original.
    #[must_use]
    pub fn original(&self, id: SymbolId) -> SymbolId {
        let mut current = id;
        while let Some(next) = self.get(current).and_then(|symbol| symbol.original) {
            if next == current {
                break;
            }
            current = next;
        }
        current
    }

    /// Whether the symbol is reachable by code outside its declaring module:
    /// the symbol and every containing declaration is `Public`.
    #[must_use]
    pub fn is_effectively_public(&self, id: SymbolId) -> bool {
        let Some(symbol) = self.get(id) else {
            return false;
        };
        if symbol.visibility != Visibility::Public {
            return false;
        }
        let mut owner = symbol.containing;
        while let Some(current) = owner {
            let Some(symbol) = self.get(current) else {
                return false;
            };
            // Module containers do not narrow visibility.
            if symbol.flags & symbol_flags::MODULE == 0 && symbol.visibility != Visibility::Public {
                return false;
            }
            owner = symbol.containing;
        }
        true
    }

    /// Whether `id` is declared lexically within `ancestor` (strictly below it).
    #[must_use]
    pub fn is_declared_within(&self, id: SymbolId, ancestor: SymbolId) -> bool {
        let mut owner = self.containing_declaration(id);
        while let Some(current) = owner {
            if current == ancestor {
                return true;
            }
            owner = self.containing_declaration(current);
        }
        false
    }

    /// Whether some containing declaration of `id` is a private class.
    #[must_use]
    pub fn is_inside_private_class(&self, id: SymbolId) -> bool {
        let mut owner = self.containing_declaration(id);
        while let Some(current) = owner {
            if self.has_flags(current, symbol_flags::CLASS)
                && self.visibility(current).is_private()
            {
                return true;
            }
            owner = self.containing_declaration(current);
        }
        false
    }

    /// Whether a reference to `id` would drag a private declaration along:
    /// `id` is a private member of a class, or sits inside a private class.
    #[must_use]
    pub fn is_private_class_member(&self, id: SymbolId) -> bool {
        if self.is_inside_private_class(id) {
            return true;
        }
        self.visibility(id).is_private()
            && self
                .containing_declaration(id)
                .is_some_and(|owner| self.has_flags(owner, symbol_flags::CLASS))
    }

    /// Whether the symbol is the builtin function-invocation operator: a
    /// function named `invoke` owned by one of the function-type classes.
    #[must_use]
    pub fn is_invoke_operator(&self, id: SymbolId) -> bool {
        let Some(symbol) = self.get(id) else {
            return false;
        };
        symbol.flags & symbol_flags::FUNCTION != 0
            && symbol.name == "invoke"
            && symbol.containing.is_some_and(|owner| {
                self.has_flags(owner, symbol_flags::CLASS | symbol_flags::FUNCTION_TYPE)
            })
    }

    /// Whether the parameter is a function-typed parameter of an inline
    /// function that has not been excluded with `noinline`.
    #[must_use]
    pub fn is_inline_lambda_parameter(&self, id: SymbolId) -> bool {
        self.has_flags(id, symbol_flags::PARAMETER | symbol_flags::FUNCTION_TYPE)
            && self.parameter_data(id).is_some_and(|p| p.mode != InlineMode::Noinline)
    }

    /// Whether the parameter is eligible for call-site splicing: an inline
    /// lambda parameter whose type is non-nullable.
    #[must_use]
    pub fn is_inlinable_parameter(&self, id: SymbolId) -> bool {
        self.is_inline_lambda_parameter(id)
            && self.parameter_data(id).is_some_and(|p| !p.is_nullable)
    }

    /// Whether a lambda spliced for this parameter may contain non-local
    /// returns. `crossinline` forbids them; the plain inlined mode permits
    /// them.
    #[must_use]
    pub fn allows_non_local_returns(&self, id: SymbolId) -> bool {
        self.parameter_data(id)
            .is_some_and(|p| p.mode != InlineMode::Crossinline)
    }

    /// The declared inlining mode of a parameter.
    #[must_use]
    pub fn parameter_mode(&self, id: SymbolId) -> Option<InlineMode> {
        self.parameter_data(id).map(|p| p.mode)
    }

    /// Whether a parameter's declared type is marked nullable.
    #[must_use]
    pub fn is_nullable_parameter(&self, id: SymbolId) -> bool {
        self.parameter_data(id).is_some_and(|p| p.is_nullable)
    }

    /// The function's own value parameters, in declaration order.
    #[must_use]
    pub fn parameters_of(&self, function: SymbolId) -> SmallVec<[SymbolId; 4]> {
        self.iter()
            .filter(|(_, symbol)| {
                symbol.flags & symbol_flags::PARAMETER != 0 && symbol.containing == Some(function)
            })
            .map(|(id, _)| id)
            .collect()
    }

    fn parameter_data(&self, id: SymbolId) -> Option<&crate::symbols::ParamData> {
        self.get(id).and_then(|symbol: &Symbol| symbol.param.as_ref())
    }
}
