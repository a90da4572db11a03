//! Types as they appear in fields, parameters and return positions.

use crate::{Declarator, TypeDeclaration, TypeSpecifier};

/// A C type, either spelled verbatim or structured.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// An opaque spelling, written as-is and followed by ` identifier`.
    Raw(String),
    /// A structured declaration, spelled by the declarator renderer.
    Declaration(TypeDeclaration),
}

impl Type {
    /// Create a raw type from its literal spelling.
    pub fn raw(spelling: impl Into<String>) -> Self {
        Self::Raw(spelling.into())
    }

    /// Create a structured type around a bare type name.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Declaration(TypeDeclaration::named(name))
    }

    /// Create a structured `struct` type.
    pub fn structure(name: impl Into<String>) -> Self {
        Self::Declaration(TypeDeclaration::structure(name))
    }

    /// Convenience: a pointer to `name`.
    pub fn pointer_to(name: impl Into<String>) -> Self {
        Self::Declaration(TypeDeclaration::named(name).declarator(Declarator::pointer()))
    }

    /// Spell this type bound to `identifier`, or alone when `None`.
    pub fn declare(&self, identifier: Option<&str>) -> String {
        match self {
            Self::Raw(spelling) => match identifier {
                Some(identifier) => format!("{} {}", spelling, identifier),
                None => spelling.clone(),
            },
            Self::Declaration(decl) => decl.declare(identifier),
        }
    }

    /// Whether this is the bare `void` type.
    pub fn is_void(&self) -> bool {
        match self {
            Self::Raw(spelling) => spelling.trim() == "void",
            Self::Declaration(decl) => {
                decl.qualifiers.is_empty()
                    && decl.declarators.is_empty()
                    && decl.specifier == TypeSpecifier::Name("void".to_string())
            }
        }
    }
}

impl From<TypeDeclaration> for Type {
    fn from(decl: TypeDeclaration) -> Self {
        Self::Declaration(decl)
    }
}

impl From<TypeSpecifier> for Type {
    fn from(specifier: TypeSpecifier) -> Self {
        Self::Declaration(TypeDeclaration::new(specifier))
    }
}

/// A function parameter: a type with an optional name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
    pub ty: Type,
    pub name: Option<String>,
}

impl Parameter {
    /// Create an unnamed parameter.
    pub fn new(ty: impl Into<Type>) -> Self {
        Self {
            ty: ty.into(),
            name: None,
        }
    }

    /// Create a named parameter.
    pub fn named(name: impl Into<String>, ty: impl Into<Type>) -> Self {
        Self::new(ty).name(name)
    }

    /// The unnamed `void` parameter, spelling an empty C parameter list.
    pub fn void() -> Self {
        Self::new(Type::raw("void"))
    }

    /// Set the parameter name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Spell the parameter, without trailing punctuation.
    pub fn declare(&self) -> String {
        self.ty.declare(self.name.as_deref())
    }
}
