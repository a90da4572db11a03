//! Validation context and utilities for manifest parsing.

use std::{collections::HashMap, path::Path, sync::Arc};

use miette::SourceSpan;

use super::{HeaderConfig, ParamDef, SpecifierDef, TypeDef};
use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// Holds the source content, filename, and the current path through the
/// manifest so nested errors can say where they came from.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "cemit.toml");
/// ctx.validate_name("Point", "struct")?;
///
/// let nested = ctx.push("Point");
/// nested.validate_name("x", "field")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["Point", "x"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        self.source.src()
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        self.source.filename()
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "field in 'Point'" or just "struct" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of a `name = "..."` entry in the source.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.source.src(), name)
    }

    /// Validate that a name is a usable C identifier.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        self.validate_name_at(name, kind, self.find_span(name))
    }

    /// Like [`validate_name`](Self::validate_name), labelling a known span.
    pub fn validate_name_at(&self, name: &str, kind: &str, span: Option<SourceSpan>) -> Result<()> {
        let span = span.or_else(|| self.find_span(name));

        if is_c_keyword(name) {
            return Err(self.source.reserved_keyword_error(name, self.context_for(kind), span));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                span,
            ));
        }

        Ok(())
    }

    /// Validate the `[header]` table.
    pub fn validate_header(&self, header: &HeaderConfig) -> Result<()> {
        if !(header.name.ends_with(".h") || header.name.ends_with(".c")) {
            return Err(self.source.validation_error(
                format!("output name '{}' must end in .h or .c", header.name),
                self.find_span(&header.name),
            ));
        }

        // The output lands next to the manifest.
        if header.name.contains(['/', '\\']) || Path::new(&header.name).is_absolute() {
            return Err(self.source.validation_error(
                format!(
                    "output name '{}' must be a plain file name, without directories",
                    header.name
                ),
                self.find_span(&header.name),
            ));
        }

        if let Some(guard) = &header.guard {
            if is_c_keyword(guard) {
                return Err(self.source.reserved_keyword_error(
                    guard,
                    "include guard",
                    find_value_span(self.src(), "guard", guard),
                ));
            }
            if let Some(reason) = validate_identifier(guard) {
                return Err(self.source.invalid_identifier_error(
                    guard,
                    "include guard",
                    reason,
                    find_value_span(self.src(), "guard", guard),
                ));
            }
        }

        Ok(())
    }

    /// Validate the module of a wasm import, which is emitted inside a C string literal.
    pub fn validate_import_module(&self, module: &str) -> Result<()> {
        let reason = if module.is_empty() {
            Some("cannot be empty")
        } else if module.contains(['"', '\\']) {
            Some("cannot contain quotes or backslashes")
        } else if module.chars().any(char::is_control) {
            Some("cannot contain control characters")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(self.source.validation_error(
                format!("{} {}", self.context_for("import module"), reason),
                find_value_span(self.src(), "module", module),
            )),
            None => Ok(()),
        }
    }

    /// Validate the identifiers reachable from a type.
    pub fn validate_type(&self, ty: &TypeDef) -> Result<()> {
        let TypeDef::Declaration(decl) = ty else {
            return Ok(());
        };

        if let SpecifierDef::Struct(tag) = &decl.specifier {
            if let Some(reason) = validate_identifier(tag) {
                return Err(self.source.invalid_identifier_error(
                    tag,
                    self.context_for("struct tag"),
                    reason,
                    find_value_span(self.src(), "struct", tag),
                ));
            }
        }

        let params = ty.nested_params();
        if !params.is_empty() {
            self.validate_param_refs(&params, &[])?;
        }
        Ok(())
    }

    /// Validate a parameter list.
    ///
    /// `spans[i]` locates the name of `params[i]`; missing entries fall back
    /// to a text search.
    pub fn validate_params(&self, params: &[ParamDef], spans: &[Option<SourceSpan>]) -> Result<()> {
        let refs: Vec<&ParamDef> = params.iter().collect();
        self.validate_param_refs(&refs, spans)
    }

    fn validate_param_refs(&self, params: &[&ParamDef], spans: &[Option<SourceSpan>]) -> Result<()> {
        let span_of = |index: usize| spans.get(index).copied().flatten();

        for (index, param) in params.iter().enumerate() {
            if let Some(name) = &param.name {
                self.validate_name_at(name, "parameter", span_of(index))?;
            }
            self.validate_type(&param.ty)?;

            if param.ty.to_type().is_void() && (params.len() > 1 || param.name.is_some()) {
                return Err(self.source.validation_error(
                    format!(
                        "{} takes 'void' only as its sole, unnamed parameter",
                        self.context_for("parameter list")
                    ),
                    span_of(index).or_else(|| {
                        param.name.as_deref().and_then(|name| self.find_span(name))
                    }),
                ));
            }
        }

        self.check_unique(
            params
                .iter()
                .enumerate()
                .filter_map(|(index, p)| p.name.as_deref().map(|name| (name, span_of(index)))),
            "parameter",
        )
    }

    /// Reject the second occurrence of any name in `names`.
    ///
    /// Each name comes with the span of that occurrence, and both occurrences
    /// are labelled in the error.
    pub fn check_unique<'n>(
        &self,
        names: impl IntoIterator<Item = (&'n str, Option<SourceSpan>)>,
        kind: &str,
    ) -> Result<()> {
        let mut seen: HashMap<&str, Option<SourceSpan>> = HashMap::new();
        for (name, span) in names {
            if let Some(first) = seen.get(name) {
                return Err(self.source.duplicate_error(
                    name,
                    self.context_for(kind),
                    *first,
                    span,
                ));
            }
            seen.insert(name, span);
        }
        Ok(())
    }
}

/// C reserved keywords, including the C23 additions.
pub(crate) const C_KEYWORDS: &[&str] = &[
    // C89/C99
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
    "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef",
    "union", "unsigned", "void", "volatile", "while",
    // C11
    "_Alignas", "_Alignof", "_Atomic", "_Bool", "_Complex", "_Generic", "_Imaginary",
    "_Noreturn", "_Static_assert", "_Thread_local",
    // C23
    "alignas", "alignof", "bool", "constexpr", "false", "nullptr", "static_assert",
    "thread_local", "true", "typeof", "typeof_unqual",
];

/// Check if a name is a C reserved keyword
pub(crate) fn is_c_keyword(name: &str) -> bool {
    C_KEYWORDS.contains(&name)
}

/// Find the span of `name` where it is the value of a `name` key.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    find_value_span(src, "name", name)
}

/// Find the first span of `value` assigned to `key`, in TOML or JSON spelling.
pub(crate) fn find_value_span(src: &str, key: &str, value: &str) -> Option<SourceSpan> {
    find_value_spans(src, key, value).into_iter().next()
}

/// Find every span of `value` assigned to `key`, in source order.
///
/// Matches `key = "value"`, `key = 'value'`, `key="value"` and `"key": "value"`.
pub(crate) fn find_value_spans(src: &str, key: &str, value: &str) -> Vec<SourceSpan> {
    let patterns = [
        format!("{} = \"{}\"", key, value),
        format!("{} = '{}'", key, value),
        format!("{}=\"{}\"", key, value),
        format!("\"{}\": \"{}\"", key, value),
        format!("\"{}\":\"{}\"", key, value),
    ];

    let mut spans: Vec<SourceSpan> = patterns
        .iter()
        .flat_map(|pattern| {
            // The value sits right before the closing quote.
            let skip = pattern.len() - value.len() - 1;
            src.match_indices(pattern.as_str())
                .map(move |(pos, _)| SourceSpan::from((pos + skip, value.len())))
        })
        .collect();
    spans.sort_by_key(|span| span.offset());
    spans
}

/// Validate that a name is a valid C identifier.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("name cannot be empty");
    }

    if is_c_keyword(name) {
        return Some("name is a C reserved keyword");
    }

    let mut chars = name.chars();

    // First character must be a letter or underscore
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Some("name must contain only letters, numbers, and underscores");
    }

    None
}
