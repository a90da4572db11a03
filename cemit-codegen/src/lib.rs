//! C syntax elements and declarator rendering for cemit.
//!
//! This crate builds an in-memory tree of C declarations and renders it
//! to text through a [`cemit_core::Writer`].
//!
//! # Module Organization
//!
//! - [`declarator`] - Type specifiers, declarators and the declarator renderer
//! - [`ast`] - The closed set of syntax elements ([`Element`])
//! - [`builder`] - Fluent assembly of element sequences ([`Elements`])
//!
//! # Example
//!
//! ```
//! use cemit_codegen::{Declarator, Field, Renderable, Struct, TypeDeclaration};
//! use cemit_core::Indent;
//!
//! let grid = TypeDeclaration::named("int").declarators([
//!     Declarator::const_pointer(),
//!     Declarator::array(2),
//!     Declarator::array(3),
//! ]);
//! let code = Struct::new("Foo")
//!     .field(Field::new("test", grid))
//!     .render_to_string(Indent::default())
//!     .unwrap();
//!
//! assert_eq!(code, "struct Foo {\n    int (*const test)[2][3];\n};\n");
//! ```

pub mod ast;
pub mod builder;
mod children;
pub mod declarator;
mod renderable;
mod ty;

pub use ast::{
    Attribute, Element, Field, Function, ImportAttribute, Include, IncludeStyle, Struct, Typedef,
};
pub use builder::Elements;
pub use children::Children;
pub use declarator::{Declarator, TypeDeclaration, TypeQualifier, TypeSpecifier};
pub use renderable::Renderable;
pub use ty::{Parameter, Type};
