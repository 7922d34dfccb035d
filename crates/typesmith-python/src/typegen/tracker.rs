//! Per-type declaration state.
//!
//! Only the emitter writes it. Rendering reads it to decide whether a class
//! or enum reference has to be quoted.

use std::collections::HashMap;

use typesmith_core::TypeId;

use crate::{Result, TypegenError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeclState {
    /// Body not started; references must be quoted.
    #[default]
    Unseen,
    /// Body being emitted; references (including from inside the body) must
    /// be quoted.
    InDeclaration,
    /// Body complete; references are direct.
    Declared,
}

#[derive(Clone, Debug, Default)]
pub struct DeclarationTracker {
    states: HashMap<TypeId, DeclState>,
}

impl DeclarationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, id: TypeId) -> DeclState {
        self.states.get(&id).copied().unwrap_or_default()
    }

    pub fn is_declared(&self, id: TypeId) -> bool {
        self.state(id) == DeclState::Declared
    }

    /// Number of types whose body has been started.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Mark the start of a body. A type is declared at most once.
    pub(crate) fn begin(&mut self, id: TypeId, name: &str) -> Result<()> {
        if self.state(id) != DeclState::Unseen {
            return Err(TypegenError::AlreadyDeclared {
                name: name.to_string(),
            });
        }
        self.states.insert(id, DeclState::InDeclaration);
        Ok(())
    }

    /// Mark the body complete.
    pub(crate) fn finish(&mut self, id: TypeId) {
        self.states.insert(id, DeclState::Declared);
    }
}
