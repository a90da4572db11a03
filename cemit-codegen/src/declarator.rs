//! C type declarations and the declarator renderer.
//!
//! A [`TypeDeclaration`] is a specifier plus an ordered list of
//! [`Declarator`]s. The list reads from the identifier outwards:
//! `[Pointer, Array(2)]` is "pointer to array of 2", spelled `(*x)[2]`,
//! while `[Array(2), Pointer]` is "array of 2 pointers", spelled `*x[2]`.
//!
//! Rendering follows the right-left rule directly: pointers go on the
//! left of the identifier (walked innermost-last), array and function
//! suffixes on the right (walked innermost-first), and a suffix that
//! directly follows a pointer gets the pointer and everything inside it
//! wrapped in parentheses.

use std::fmt;

use crate::Parameter;

/// A type qualifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeQualifier {
    /// `const`
    Const,
}

impl TypeQualifier {
    /// The C keyword for this qualifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Const => "const",
        }
    }
}

/// The base type a declaration is built around.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeSpecifier {
    /// A bare type name, e.g. `int` or `uint32_t`.
    Name(String),
    /// A tagged struct reference, e.g. `struct Bar`.
    Struct(String),
}

impl TypeSpecifier {
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    pub fn structure(name: impl Into<String>) -> Self {
        Self::Struct(name.into())
    }
}

impl fmt::Display for TypeSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Struct(name) => write!(f, "struct {}", name),
        }
    }
}

/// One level of declarator nesting.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Declarator {
    /// `*`, or `*const` when the pointer itself is const.
    Pointer { is_const: bool },
    /// `[n]`, or `[]` for an incomplete array.
    Array(Option<u64>),
    /// A parameter list suffix, e.g. `(int code, char *msg)`.
    Function(Vec<Parameter>),
}

impl Declarator {
    pub fn pointer() -> Self {
        Self::Pointer { is_const: false }
    }

    pub fn const_pointer() -> Self {
        Self::Pointer { is_const: true }
    }

    pub fn array(size: u64) -> Self {
        Self::Array(Some(size))
    }

    pub fn incomplete_array() -> Self {
        Self::Array(None)
    }

    pub fn function(params: impl IntoIterator<Item = Parameter>) -> Self {
        Self::Function(params.into_iter().collect())
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self, Self::Pointer { .. })
    }

    /// Whether this declarator is written after the identifier.
    pub fn is_suffix(&self) -> bool {
        matches!(self, Self::Array(_) | Self::Function(_))
    }
}

/// A structured C type: qualifiers, a specifier and ordered declarators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeDeclaration {
    pub qualifiers: Vec<TypeQualifier>,
    pub specifier: TypeSpecifier,
    pub declarators: Vec<Declarator>,
}

impl TypeDeclaration {
    /// Create a declaration with no qualifiers or declarators.
    pub fn new(specifier: TypeSpecifier) -> Self {
        Self {
            qualifiers: Vec::new(),
            specifier,
            declarators: Vec::new(),
        }
    }

    /// Shorthand for a bare named type.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(TypeSpecifier::name(name))
    }

    /// Shorthand for a `struct` type.
    pub fn structure(name: impl Into<String>) -> Self {
        Self::new(TypeSpecifier::structure(name))
    }

    /// Add a qualifier.
    pub fn qualifier(mut self, qualifier: TypeQualifier) -> Self {
        self.qualifiers.push(qualifier);
        self
    }

    /// Add a `const` qualifier.
    pub fn constant(self) -> Self {
        self.qualifier(TypeQualifier::Const)
    }

    /// Append a declarator (one level further from the identifier).
    pub fn declarator(mut self, declarator: Declarator) -> Self {
        self.declarators.push(declarator);
        self
    }

    /// Append multiple declarators.
    pub fn declarators(mut self, declarators: impl IntoIterator<Item = Declarator>) -> Self {
        self.declarators.extend(declarators);
        self
    }

    /// Spell this type as a C declaration of `identifier`, or as an
    /// abstract declarator when `identifier` is `None`.
    pub fn declare(&self, identifier: Option<&str>) -> String {
        let mut out = String::new();

        for qualifier in &self.qualifiers {
            out.push_str(qualifier.as_str());
            out.push(' ');
        }
        out.push_str(&self.specifier.to_string());

        let mut left = self.left_part();
        match identifier {
            Some(identifier) => {
                out.push(' ');
                out.push_str(&left);
                out.push_str(identifier);
            }
            None => {
                // Nothing follows, so a trailing `const ` would leave a stray space.
                left.truncate(left.trim_end().len());
                out.push_str(&left);
            }
        }

        self.write_right_part(&mut out);
        out
    }

    /// Pointers and opening parentheses, innermost declarator last.
    fn left_part(&self) -> String {
        let mut left = String::new();
        for (i, declarator) in self.declarators.iter().enumerate().rev() {
            if declarator.is_suffix() {
                if i > 0 && self.declarators[i - 1].is_pointer() {
                    left.push('(');
                }
            } else if let Declarator::Pointer { is_const } = declarator {
                left.push('*');
                if *is_const {
                    left.push_str("const ");
                }
            }
        }
        left
    }

    /// Closing parentheses and suffixes, innermost declarator first.
    fn write_right_part(&self, out: &mut String) {
        let mut after_pointer = false;
        for declarator in &self.declarators {
            match declarator {
                Declarator::Pointer { .. } => {
                    after_pointer = true;
                    continue;
                }
                Declarator::Array(size) => {
                    if after_pointer {
                        out.push(')');
                    }
                    out.push('[');
                    if let Some(size) = size {
                        out.push_str(&size.to_string());
                    }
                    out.push(']');
                }
                Declarator::Function(params) => {
                    if after_pointer {
                        out.push(')');
                    }
                    out.push('(');
                    let params: Vec<_> = params.iter().map(Parameter::declare).collect();
                    out.push_str(&params.join(", "));
                    out.push(')');
                }
            }
            after_pointer = false;
        }
    }
}

impl From<TypeSpecifier> for TypeDeclaration {
    fn from(specifier: TypeSpecifier) -> Self {
        Self::new(specifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Type;

    fn int() -> TypeDeclaration {
        TypeDeclaration::named("int")
    }

    #[test]
    fn test_no_declarators() {
        assert_eq!(int().declare(Some("x")), "int x");
        assert_eq!(int().declare(None), "int");
    }

    #[test]
    fn test_pointer() {
        let ty = int().declarator(Declarator::pointer());
        assert_eq!(ty.declare(Some("foo")), "int *foo");
        assert_eq!(ty.declare(None), "int*");
    }

    #[test]
    fn test_const_pointer() {
        let ty = int().declarator(Declarator::const_pointer());
        assert_eq!(ty.declare(Some("p")), "int *const p");
        assert_eq!(ty.declare(None), "int*const");
    }

    #[test]
    fn test_const_pointer_to_arrays() {
        let ty = int().declarators([
            Declarator::const_pointer(),
            Declarator::array(2),
            Declarator::array(3),
        ]);
        assert_eq!(ty.declare(Some("test")), "int (*const test)[2][3]");
        assert_eq!(ty.declare(None), "int(*const)[2][3]");
    }

    #[test]
    fn test_pointer_to_array() {
        let ty = int().declarators([Declarator::pointer(), Declarator::array(4)]);
        assert_eq!(ty.declare(Some("rows")), "int (*rows)[4]");
        assert_eq!(ty.declare(None), "int(*)[4]");
    }

    #[test]
    fn test_array_of_pointers() {
        let ty = int().declarators([Declarator::array(4), Declarator::pointer()]);
        assert_eq!(ty.declare(Some("slots")), "int *slots[4]");
    }

    #[test]
    fn test_incomplete_and_zero_arrays() {
        let ty = TypeDeclaration::named("char").declarator(Declarator::incomplete_array());
        assert_eq!(ty.declare(Some("name")), "char name[]");

        let ty = TypeDeclaration::named("char").declarator(Declarator::array(0));
        assert_eq!(ty.declare(Some("tail")), "char tail[0]");
    }

    #[test]
    fn test_nested_pointer_array_pairs() {
        let ty = int().declarators([
            Declarator::pointer(),
            Declarator::array(2),
            Declarator::pointer(),
            Declarator::array(3),
        ]);
        assert_eq!(ty.declare(Some("x")), "int (*(*x)[2])[3]");
    }

    #[test]
    fn test_pointer_to_pointer() {
        let ty = TypeDeclaration::named("char").declarators([
            Declarator::pointer(),
            Declarator::const_pointer(),
        ]);
        assert_eq!(ty.declare(Some("argv")), "char *const *argv");
    }

    #[test]
    fn test_qualifiers_and_struct_specifier() {
        let ty = TypeDeclaration::structure("Bar")
            .constant()
            .declarator(Declarator::pointer());
        assert_eq!(ty.declare(Some("bar")), "const struct Bar *bar");
    }

    #[test]
    fn test_function_pointer() {
        let ty = TypeDeclaration::named("void").declarators([
            Declarator::pointer(),
            Declarator::function([
                Parameter::new(Type::raw("int")).name("code"),
                Parameter::new(TypeDeclaration::named("char").declarator(Declarator::pointer()))
                    .name("msg"),
            ]),
        ]);
        assert_eq!(
            ty.declare(Some("callback")),
            "void (*callback)(int code, char *msg)"
        );
        assert_eq!(ty.declare(None), "void(*)(int code, char *msg)");
    }

    #[test]
    fn test_function_returning_pointer() {
        let ty = int().declarators([
            Declarator::function([Parameter::new(Type::raw("void"))]),
            Declarator::pointer(),
        ]);
        assert_eq!(ty.declare(Some("make")), "int *make(void)");
    }

    #[test]
    fn test_single_paren_pair_per_pointer() {
        let ty = int().declarators([
            Declarator::pointer(),
            Declarator::array(1),
            Declarator::array(2),
            Declarator::array(3),
        ]);
        let rendered = ty.declare(Some("m"));
        assert_eq!(rendered, "int (*m)[1][2][3]");
        assert_eq!(rendered.matches('(').count(), 1);
        assert_eq!(rendered.matches(')').count(), 1);
    }

    #[test]
    fn test_declaration_order_is_preserved() {
        let ty = int().declarators([Declarator::array(2), Declarator::array(3)]);
        assert_eq!(ty.declare(Some("grid")), "int grid[2][3]");
        assert_eq!(ty.declarators[0], Declarator::array(2));
    }

    #[test]
    fn test_suffix_classification() {
        assert!(Declarator::array(2).is_suffix());
        assert!(Declarator::incomplete_array().is_suffix());
        assert!(Declarator::function([]).is_suffix());
        assert!(!Declarator::const_pointer().is_suffix());
        // A function suffix after a pointer opens the same single pair as an array.
        let ty = int().declarators([Declarator::pointer(), Declarator::function([])]);
        assert_eq!(ty.declare(Some("f")), "int (*f)()");
    }
}
