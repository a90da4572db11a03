//! Type spellings as written in a manifest.
//!
//! A type is either a string, used verbatim, or a table:
//!
//! ```toml
//! type = { name = "int", declarators = ["const-pointer", { array = 2 }, { array = 3 }] }
//! type = { struct = "Node", qualifiers = ["const"], declarators = ["pointer"] }
//! ```

use std::fmt;

use cemit_codegen::{Declarator, Parameter, Type, TypeDeclaration, TypeQualifier, TypeSpecifier};
use serde::{
    Deserialize, Deserializer,
    de::{self, MapAccess, Visitor, value::MapAccessDeserializer},
};

/// A type in a field, parameter, typedef or return position.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDef {
    /// Verbatim spelling, e.g. `"unsigned long"`.
    Raw(String),
    /// Structured declaration.
    Declaration(DeclarationDef),
}

impl TypeDef {
    pub fn to_type(&self) -> Type {
        match self {
            Self::Raw(spelling) => Type::raw(spelling),
            Self::Declaration(decl) => Type::Declaration(decl.to_declaration()),
        }
    }

    /// Parameters of any function declarators, for nested validation.
    pub fn nested_params(&self) -> Vec<&ParamDef> {
        match self {
            Self::Raw(_) => Vec::new(),
            Self::Declaration(decl) => decl
                .declarators
                .iter()
                .flat_map(|d| match d {
                    DeclaratorDef::Function(params) => params.iter().collect(),
                    _ => Vec::new(),
                })
                .collect(),
        }
    }
}

// Dispatch on the value's shape so errors inside a type table (both
// `name` and `struct`, unknown keys, unknown declarators) reach the user.
impl<'de> Deserialize<'de> for TypeDef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TypeDefVisitor;

        impl<'de> Visitor<'de> for TypeDefVisitor {
            type Value = TypeDef;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a type spelling string or a type table")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<TypeDef, E> {
                Ok(TypeDef::Raw(value.to_string()))
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<TypeDef, A::Error> {
                DeclarationDef::deserialize(MapAccessDeserializer::new(map))
                    .map(TypeDef::Declaration)
            }
        }

        deserializer.deserialize_any(TypeDefVisitor)
    }
}

/// A structured type: exactly one of `name` or `struct`, plus qualifiers and declarators.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawDeclarationDef")]
pub struct DeclarationDef {
    pub specifier: SpecifierDef,
    pub qualifiers: Vec<QualifierDef>,
    pub declarators: Vec<DeclaratorDef>,
}

impl DeclarationDef {
    pub fn to_declaration(&self) -> TypeDeclaration {
        let specifier = match &self.specifier {
            SpecifierDef::Name(name) => TypeSpecifier::name(name),
            SpecifierDef::Struct(name) => TypeSpecifier::structure(name),
        };
        TypeDeclaration {
            qualifiers: self.qualifiers.iter().map(|q| q.to_qualifier()).collect(),
            specifier,
            declarators: self.declarators.iter().map(|d| d.to_declarator()).collect(),
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDeclarationDef {
    name: Option<String>,
    #[serde(rename = "struct")]
    structure: Option<String>,
    #[serde(default)]
    qualifiers: Vec<QualifierDef>,
    #[serde(default)]
    declarators: Vec<DeclaratorDef>,
}

impl TryFrom<RawDeclarationDef> for DeclarationDef {
    type Error = String;

    fn try_from(raw: RawDeclarationDef) -> Result<Self, Self::Error> {
        let specifier = match (raw.name, raw.structure) {
            (Some(name), None) => SpecifierDef::Name(name),
            (None, Some(name)) => SpecifierDef::Struct(name),
            (Some(_), Some(_)) => {
                return Err("a type sets either `name` or `struct`, not both".to_string());
            }
            (None, None) => return Err("a type table needs `name` or `struct`".to_string()),
        };
        Ok(Self {
            specifier,
            qualifiers: raw.qualifiers,
            declarators: raw.declarators,
        })
    }
}

/// The base of a structured type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecifierDef {
    Name(String),
    Struct(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QualifierDef {
    Const,
}

impl QualifierDef {
    pub fn to_qualifier(self) -> TypeQualifier {
        match self {
            Self::Const => TypeQualifier::Const,
        }
    }
}

/// One declarator, listed from the identifier outwards.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeclaratorDef {
    /// `"pointer"`
    Pointer,
    /// `"const-pointer"`
    ConstPointer,
    /// `"incomplete-array"`
    IncompleteArray,
    /// `{ array = N }`
    Array(u64),
    /// `{ function = [{ name = "x", type = "int" }] }`
    Function(Vec<ParamDef>),
}

impl DeclaratorDef {
    pub fn to_declarator(&self) -> Declarator {
        match self {
            Self::Pointer => Declarator::pointer(),
            Self::ConstPointer => Declarator::const_pointer(),
            Self::IncompleteArray => Declarator::incomplete_array(),
            Self::Array(size) => Declarator::array(*size),
            Self::Function(params) => Declarator::function(params.iter().map(ParamDef::to_parameter)),
        }
    }
}

/// A function parameter, optionally named.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParamDef {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub ty: TypeDef,
}

impl ParamDef {
    pub fn to_parameter(&self) -> Parameter {
        Parameter {
            ty: self.ty.to_type(),
            name: self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(rename = "type")]
        ty: TypeDef,
    }

    fn parse(src: &str) -> Result<TypeDef, toml::de::Error> {
        toml::from_str::<Holder>(src).map(|h| h.ty)
    }

    #[test]
    fn test_raw_type() {
        let ty = parse(r#"type = "unsigned long""#).unwrap();
        assert_eq!(ty, TypeDef::Raw("unsigned long".into()));
        assert_eq!(ty.to_type().declare(Some("n")), "unsigned long n");
    }

    #[test]
    fn test_structured_type() {
        let ty = parse(
            r#"type = { name = "int", declarators = ["const-pointer", { array = 2 }, { array = 3 }] }"#,
        )
        .unwrap();
        assert_eq!(ty.to_type().declare(Some("test")), "int (*const test)[2][3]");
    }

    #[test]
    fn test_struct_type_with_qualifier() {
        let ty = parse(r#"type = { struct = "Node", qualifiers = ["const"], declarators = ["pointer"] }"#)
            .unwrap();
        assert_eq!(ty.to_type().declare(Some("head")), "const struct Node *head");
    }

    #[test]
    fn test_function_declarator() {
        let ty = parse(
            r#"type = { name = "void", declarators = ["pointer", { function = [{ type = "int" }] }] }"#,
        )
        .unwrap();
        assert_eq!(ty.to_type().declare(Some("cb")), "void (*cb)(int)");
        assert_eq!(ty.nested_params().len(), 1);
    }

    #[test]
    fn test_incomplete_array() {
        let ty = parse(r#"type = { name = "char", declarators = ["incomplete-array"] }"#).unwrap();
        assert_eq!(ty.to_type().declare(Some("data")), "char data[]");
    }

    #[test]
    fn test_rejects_name_and_struct() {
        let err = parse(r#"type = { name = "int", struct = "Foo" }"#).unwrap_err();
        assert!(err.message().contains("either `name` or `struct`, not both"));

        let err = parse(r#"type = { declarators = ["pointer"] }"#).unwrap_err();
        assert!(err.message().contains("needs `name` or `struct`"));
    }

    #[test]
    fn test_rejects_unknown_declarator() {
        let err = parse(r#"type = { name = "int", declarators = ["reference"] }"#).unwrap_err();
        assert!(err.message().contains("reference"));
    }

    #[test]
    fn test_rejects_unknown_key() {
        let err = parse(r#"type = { name = "int", volatile = true }"#).unwrap_err();
        assert!(err.message().contains("volatile"));
    }

    #[test]
    fn test_rejects_non_type_value() {
        let err = parse("type = 3").unwrap_err();
        assert!(err.message().contains("a type spelling string or a type table"));
    }

    #[test]
    fn test_json_type_table_errors_are_kept() {
        let err = serde_json::from_str::<TypeDef>(r#"{ "name": "int", "struct": "Foo" }"#)
            .unwrap_err();
        assert!(err.to_string().contains("not both"));
    }
}
