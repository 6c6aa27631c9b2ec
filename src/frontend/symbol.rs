//! The scope-aware symbol table.
//!
//! At most two scopes exist at any time: the global scope, which holds
//! subroutine names (and, while `main`'s body is parsed, its variables),
//! and the local scope of the subroutine currently being parsed. Each
//! scope maps owned identifier strings to [`IdProps`]; the maps are
//! insertion-ordered, so printing a scope is deterministic.
//!
//! Variables receive consecutive frame offsets starting at 1 in
//! definition order; the frame width is one past the highest offset
//! assigned, which is the size a code generator needs for the local
//! variable frame.

use crate::frontend::types::ValType;
use indexmap::IndexMap;

/// The properties of a named entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdProps {
    /// The value type of the entity
    pub typ: ValType,
    /// The local frame offset; meaningful only for variables
    pub offset: u32,
    /// Parameter types in header order; empty for variables
    pub params: Vec<ValType>,
}

impl IdProps {
    /// Properties for a variable. The offset is assigned on insertion.
    pub fn variable(typ: ValType) -> Self {
        Self { typ, offset: 0, params: Vec::new() }
    }

    /// Properties for a subroutine with the given parameter types.
    pub fn subroutine(typ: ValType, params: Vec<ValType>) -> Self {
        Self { typ, offset: 0, params }
    }
}

/// A two-level scoped mapping from identifier names to their properties.
#[derive(Debug)]
pub struct SymbolTable {
    global: IndexMap<String, IdProps>,
    local: Option<IndexMap<String, IdProps>>,
    frame_width: u32,
}

impl SymbolTable {
    /// Create a symbol table holding only the (empty) global scope.
    pub fn new() -> Self {
        Self {
            global: IndexMap::new(),
            local: None,
            frame_width: 1,
        }
    }

    /// Insert a subroutine into the global scope and open its local
    /// scope. Returns false (and opens nothing) if the name is already
    /// defined globally.
    pub fn open_subroutine(&mut self, name: String, props: IdProps) -> bool {
        if self.global.contains_key(&name) {
            return false;
        }
        self.global.insert(name, props);
        self.local = Some(IndexMap::new());
        self.frame_width = 1;
        true
    }

    /// Destroy the current local scope and reactivate the global scope.
    pub fn close_subroutine(&mut self) {
        self.local = None;
        self.frame_width = 1;
    }

    /// Insert a name into the active scope. A non-callable entry is a
    /// variable: it receives the current frame width as its offset, and
    /// the width grows by one. Returns false on a duplicate in the
    /// active scope.
    pub fn insert_name(&mut self, name: String, mut props: IdProps) -> bool {
        let scope = self.local.as_mut().unwrap_or(&mut self.global);
        if scope.contains_key(&name) {
            return false;
        }
        if !props.typ.is_callable() {
            props.offset = self.frame_width;
            self.frame_width += 1;
        }
        scope.insert(name, props);
        true
    }

    /// Look up a name: the active scope first, then, while a local scope
    /// is open, the global scope, where only callable entries are
    /// visible. Variables of an enclosing scope never leak into a
    /// subroutine body, while sibling subroutines remain callable.
    pub fn find_name(&self, name: &str) -> Option<&IdProps> {
        match &self.local {
            Some(local) => local.get(name).or_else(|| {
                self.global.get(name).filter(|props| props.typ.is_callable())
            }),
            None => self.global.get(name),
        }
    }

    /// The current frame width: 1 + the number of variables in the
    /// active scope.
    pub fn variables_width(&self) -> u32 {
        self.frame_width
    }

    /// Iterate over the active scope in definition order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &IdProps)> {
        self.local
            .as_ref()
            .unwrap_or(&self.global)
            .iter()
            .map(|(name, props)| (name.as_str(), props))
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
