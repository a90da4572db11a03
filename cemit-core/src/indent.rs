//! Indentation configuration for emitted C code.

use std::fmt;

use serde::Deserialize;

/// The unit pushed onto a [`Writer`](crate::Writer) prefix for each nested block.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "IndentRepr")]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
    /// Any other unit string, used verbatim.
    Custom(String),
}

impl Indent {
    /// 4-space indentation, the default for generated C.
    pub const DEFAULT: Self = Self::Spaces(4);

    /// 2-space indentation.
    pub const COMPACT: Self = Self::Spaces(2);

    /// The text of one indentation unit.
    pub fn unit(&self) -> String {
        match self {
            Self::Spaces(width) => " ".repeat(usize::from(*width)),
            Self::Tab => "\t".to_string(),
            Self::Custom(unit) => unit.clone(),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spaces(width) => write!(f, "{} spaces", width),
            Self::Tab => write!(f, "tab"),
            Self::Custom(unit) => write!(f, "{:?}", unit),
        }
    }
}

/// Manifest spelling of an indent: a width or the string `"tab"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum IndentRepr {
    Width(u8),
    Name(String),
}

impl TryFrom<IndentRepr> for Indent {
    type Error = String;

    fn try_from(repr: IndentRepr) -> Result<Self, Self::Error> {
        match repr {
            IndentRepr::Width(0) => Err("indent width must be at least 1".to_string()),
            IndentRepr::Width(width) => Ok(Self::Spaces(width)),
            IndentRepr::Name(name) if name == "tab" => Ok(Self::Tab),
            IndentRepr::Name(name) => Err(format!(
                "invalid indent '{}', expected a width or \"tab\"",
                name
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_unit() {
        assert_eq!(Indent::Spaces(2).unit(), "  ");
        assert_eq!(Indent::Spaces(4).unit(), "    ");
        assert_eq!(Indent::Tab.unit(), "\t");
        assert_eq!(Indent::Custom("--".into()).unit(), "--");
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::Spaces(4));
    }

    #[test]
    fn test_try_from_repr() {
        assert_eq!(Indent::try_from(IndentRepr::Width(2)), Ok(Indent::Spaces(2)));
        assert_eq!(
            Indent::try_from(IndentRepr::Name("tab".into())),
            Ok(Indent::Tab)
        );
        assert!(Indent::try_from(IndentRepr::Width(0)).is_err());
        assert!(Indent::try_from(IndentRepr::Name("spaces".into())).is_err());
    }
}
