//! Lexical scopes
//!
//! A scope is a chain of frames. Forking pushes an empty frame whose parent
//! is the current frame, shared through an `Rc`. A frame that already has a
//! child is copied on its next write, so nothing declared later is ever
//! visible through a fork taken earlier, and nothing declared in a fork
//! reaches the scope it came from.
//!
//! Every binding also gets a name that is unique within its function, since
//! the emitted `var`s all live at function level.

use super::errors::TranslateError;
use casm_common::{SourceLocation, Type};
use log::trace;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

/// A named variable or function
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub name: String,
    /// Identifier used in the generated code
    pub emitted_name: String,
    pub declared_type: Type,
    pub intended_type: Option<Type>,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, Default)]
struct Frame {
    bindings: HashMap<String, Binding>,
    parent: Option<Rc<Frame>>,
}

impl Frame {
    fn find(&self, name: &str) -> Option<&Binding> {
        match self.bindings.get(name) {
            Some(binding) => Some(binding),
            None => self.parent.as_deref().and_then(|parent| parent.find(name)),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Scope {
    frame: Rc<Frame>,
    return_type: Option<Type>,
    // Emitted names taken in the enclosing function, shared by all its forks
    emitted: Rc<RefCell<HashSet<String>>>,
}

impl Scope {
    /// Create an empty module-level scope
    pub fn new() -> Self {
        Self::default()
    }

    /// Child scope; reads fall through, writes stay in the child
    pub fn fork(&self) -> Scope {
        let scope = Scope {
            frame: Rc::new(Frame {
                bindings: HashMap::new(),
                parent: Some(Rc::clone(&self.frame)),
            }),
            return_type: self.return_type.clone(),
            emitted: Rc::clone(&self.emitted),
        };
        trace!("forked scope at depth {}", scope.depth());
        scope
    }

    /// Child scope for a function body with its return type fixed
    pub fn for_function(&self, return_type: Type) -> Scope {
        let mut scope = self.fork();
        scope.return_type = Some(return_type);
        scope.emitted = Rc::default();
        scope
    }

    /// Bind `name` in the current frame and return its emitted name.
    ///
    /// Shadowing an ancestor is allowed; a second binding in the same frame
    /// fails with `RedefinedSymbol`.
    pub fn declare(
        &mut self,
        name: &str,
        declared_type: Type,
        location: SourceLocation,
    ) -> Result<String, TranslateError> {
        if let Some(previous) = self.local_binding(name) {
            return Err(TranslateError::RedefinedSymbol {
                name: name.to_string(),
                original_location: previous.location.clone(),
                location,
            });
        }

        let emitted_name = self.unique_name(name);
        let binding = Binding {
            name: name.to_string(),
            emitted_name: emitted_name.clone(),
            intended_type: declared_type.intended(),
            declared_type,
            location,
        };
        Rc::make_mut(&mut self.frame).bindings.insert(name.to_string(), binding);
        Ok(emitted_name)
    }

    /// `name` itself unless it is taken in this function or would hide a
    /// visible binding, else `name$1`, `name$2`, ...
    fn unique_name(&self, name: &str) -> String {
        let mut emitted = self.emitted.borrow_mut();
        let mut candidate = name.to_string();
        let mut suffix = 0;
        while emitted.contains(&candidate) || self.frame.find(&candidate).is_some() {
            suffix += 1;
            candidate = format!("{name}${suffix}");
        }
        if suffix > 0 {
            trace!("renamed '{name}' to '{candidate}'");
        }
        emitted.insert(candidate.clone());
        candidate
    }

    pub fn binding(&self, name: &str) -> Option<&Binding> {
        self.frame.find(name)
    }

    /// Binding in the current frame only, ignoring ancestors
    pub fn local_binding(&self, name: &str) -> Option<&Binding> {
        self.frame.bindings.get(name)
    }

    /// Nearest binding for `name`
    pub fn resolve(&self, name: &str, location: &SourceLocation) -> Result<&Binding, TranslateError> {
        self.binding(name).ok_or_else(|| TranslateError::UndefinedVariable {
            name: name.to_string(),
            location: location.clone(),
        })
    }

    /// Type of the nearest binding for `name`
    pub fn lookup(&self, name: &str, location: &SourceLocation) -> Result<Type, TranslateError> {
        self.resolve(name, location).map(|binding| binding.declared_type.clone())
    }

    pub fn return_type(&self) -> Option<&Type> {
        self.return_type.as_ref()
    }

    /// Number of frames in the chain
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut frame = self.frame.parent.as_deref();
        while let Some(parent) = frame {
            depth += 1;
            frame = parent.parent.as_deref();
        }
        depth
    }
}
