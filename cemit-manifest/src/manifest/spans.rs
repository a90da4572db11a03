//! Source locations of manifest names, addressed by their position in the manifest.
//!
//! Text search alone cannot tell two fields named `x` in different structs
//! apart, so diagnostics look names up here by section and index instead.

use std::collections::HashMap;

use miette::SourceSpan;
use serde::Deserialize;
use toml::Spanned;

use super::{Manifest, parse::Format, validate::find_value_spans};

/// Spans of every declared name, in manifest order.
#[derive(Debug, Default)]
pub(crate) struct NameSpans {
    typedefs: Vec<Option<SourceSpan>>,
    structs: Vec<ScopeSpans>,
    functions: Vec<ScopeSpans>,
}

/// Spans of a struct or function name and of its fields or parameters.
#[derive(Debug, Default)]
pub(crate) struct ScopeSpans {
    name: Option<SourceSpan>,
    members: Vec<Option<SourceSpan>>,
}

static NO_SPANS: ScopeSpans = ScopeSpans {
    name: None,
    members: Vec::new(),
};

impl NameSpans {
    pub fn new(src: &str, format: Format, manifest: &Manifest) -> Self {
        match format {
            Format::Toml => toml::from_str::<Mirror>(src)
                .map(|mirror| Self::from_mirror(src, mirror))
                .unwrap_or_default(),
            Format::Json => Self::from_search(src, manifest),
        }
    }

    pub fn typedef(&self, index: usize) -> Option<SourceSpan> {
        self.typedefs.get(index).copied().flatten()
    }

    pub fn structure(&self, index: usize) -> &ScopeSpans {
        self.structs.get(index).unwrap_or(&NO_SPANS)
    }

    pub fn function(&self, index: usize) -> &ScopeSpans {
        self.functions.get(index).unwrap_or(&NO_SPANS)
    }

    fn from_mirror(src: &str, mirror: Mirror) -> Self {
        let span = |name: &Option<Spanned<String>>| name.as_ref().map(|n| value_span(src, n));
        let members = |items: &[NamedMirror]| -> Vec<Option<SourceSpan>> {
            items.iter().map(|m| span(&m.name)).collect()
        };

        Self {
            typedefs: mirror.typedefs.iter().map(|t| span(&t.name)).collect(),
            structs: mirror
                .structs
                .iter()
                .map(|s| ScopeSpans {
                    name: span(&s.name),
                    members: members(s.fields.as_slice()),
                })
                .collect(),
            functions: mirror
                .functions
                .iter()
                .map(|f| ScopeSpans {
                    name: span(&f.name),
                    members: members(f.params.as_slice()),
                })
                .collect(),
        }
    }

    // JSON has no span-aware deserializer. A name gets a span only when it
    // occurs in the text exactly as often as the manifest declares it, and
    // occurrences are then handed out in manifest order.
    fn from_search(src: &str, manifest: &Manifest) -> Self {
        let mut names = Vec::new();
        names.push(manifest.header.name.as_str());
        names.extend(manifest.typedefs.iter().map(|t| t.name.as_str()));
        for structure in &manifest.structs {
            names.push(structure.name.as_str());
            names.extend(structure.fields.iter().map(|f| f.name.as_str()));
        }
        for function in &manifest.functions {
            names.push(function.name.as_str());
            names.extend(function.params.iter().filter_map(|p| p.name.as_deref()));
            names.extend(function.import.iter().filter_map(|i| i.name.as_deref()));
        }

        let mut cursor = SearchCursor::new(src, &names);
        cursor.next(&manifest.header.name);

        let typedefs = manifest
            .typedefs
            .iter()
            .map(|t| cursor.next(&t.name))
            .collect();

        let structs = manifest
            .structs
            .iter()
            .map(|s| ScopeSpans {
                name: cursor.next(&s.name),
                members: s.fields.iter().map(|f| cursor.next(&f.name)).collect(),
            })
            .collect();

        let functions = manifest
            .functions
            .iter()
            .map(|f| {
                let scope = ScopeSpans {
                    name: cursor.next(&f.name),
                    members: f
                        .params
                        .iter()
                        .map(|p| p.name.as_deref().and_then(|n| cursor.next(n)))
                        .collect(),
                };
                if let Some(name) = f.import.as_ref().and_then(|i| i.name.as_deref()) {
                    cursor.next(name);
                }
                scope
            })
            .collect();

        Self {
            typedefs,
            structs,
            functions,
        }
    }
}

impl ScopeSpans {
    pub fn name(&self) -> Option<SourceSpan> {
        self.name
    }

    pub fn member(&self, index: usize) -> Option<SourceSpan> {
        self.members.get(index).copied().flatten()
    }

    pub fn members(&self) -> &[Option<SourceSpan>] {
        &self.members
    }
}

struct SearchCursor<'a> {
    src: &'a str,
    declared: HashMap<&'a str, usize>,
    found: HashMap<&'a str, (Vec<SourceSpan>, usize)>,
}

impl<'a> SearchCursor<'a> {
    fn new(src: &'a str, names: &[&'a str]) -> Self {
        let mut declared = HashMap::new();
        for name in names {
            *declared.entry(*name).or_insert(0) += 1;
        }
        Self {
            src,
            declared,
            found: HashMap::new(),
        }
    }

    fn next(&mut self, name: &'a str) -> Option<SourceSpan> {
        let declared = self.declared.get(name).copied().unwrap_or(0);
        let src = self.src;
        let (spans, taken) = self
            .found
            .entry(name)
            .or_insert_with(|| (find_value_spans(src, "name", name), 0));

        if spans.len() != declared {
            return None;
        }
        let span = spans.get(*taken).copied();
        *taken += 1;
        span
    }
}

/// Narrow a string value's span to its contents, without the quotes.
fn value_span(src: &str, value: &Spanned<String>) -> SourceSpan {
    let range = value.span();
    let text = value.get_ref();
    match src.get(range.clone()).and_then(|raw| raw.find(text.as_str())) {
        Some(pos) if !text.is_empty() => SourceSpan::from((range.start + pos, text.len())),
        _ => SourceSpan::from(range),
    }
}

#[derive(Deserialize)]
struct Mirror {
    #[serde(default)]
    typedefs: Vec<NamedMirror>,
    #[serde(default)]
    structs: Vec<StructMirror>,
    #[serde(default)]
    functions: Vec<FunctionMirror>,
}

#[derive(Deserialize)]
struct NamedMirror {
    name: Option<Spanned<String>>,
}

#[derive(Deserialize)]
struct StructMirror {
    name: Option<Spanned<String>>,
    #[serde(default)]
    fields: Vec<NamedMirror>,
}

#[derive(Deserialize)]
struct FunctionMirror {
    name: Option<Spanned<String>>,
    #[serde(default)]
    params: Vec<NamedMirror>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offsets(scope: &ScopeSpans) -> Vec<Option<usize>> {
        scope.members().iter().map(|s| s.map(|s| s.offset())).collect()
    }

    #[test]
    fn test_toml_fields_are_scoped_per_struct() {
        let src = r#"
[header]
name = "api.h"

[[structs]]
name = "A"
fields = [{ name = "x", type = "int" }]

[[structs]]
name = "B"
fields = [{ name = "x", type = "int" }, { name = "y", type = "int" }]
"#;
        let manifest: Manifest = src.parse().unwrap();
        let spans = NameSpans::new(src, Format::Toml, &manifest);

        let first_x = src.find("name = \"x\"").unwrap() + 8;
        let second_x = src.rfind("name = \"x\"").unwrap() + 8;
        assert_eq!(offsets(spans.structure(0)), [Some(first_x)]);
        assert_eq!(spans.structure(1).member(0).map(|s| s.offset()), Some(second_x));
        assert_eq!(spans.structure(1).name().map(|s| s.len()), Some(1));
    }

    #[test]
    fn test_toml_unnamed_params_keep_their_index() {
        let src = r#"
[header]
name = "api.h"

[[functions]]
name = "f"
returns = "int"
params = [{ type = "int" }, { name = "n", type = "int" }]
"#;
        let manifest: Manifest = src.parse().unwrap();
        let spans = NameSpans::new(src, Format::Toml, &manifest);

        let n = src.find("name = \"n\"").unwrap() + 8;
        assert_eq!(offsets(spans.function(0)), [None, Some(n)]);
    }

    #[test]
    fn test_json_spans_follow_manifest_order() {
        let src = r#"{
  "header": { "name": "api.h" },
  "structs": [
    { "name": "A", "fields": [{ "name": "x", "type": "int" }] },
    { "name": "B", "fields": [{ "name": "x", "type": "int" }] }
  ]
}"#;
        let manifest = super::super::parse_manifest(src, "api.json", Format::Json).unwrap();
        let spans = NameSpans::new(src, Format::Json, &manifest);

        let first_x = src.find("\"name\": \"x\"").unwrap() + 9;
        let second_x = src.rfind("\"name\": \"x\"").unwrap() + 9;
        assert_eq!(offsets(spans.structure(0)), [Some(first_x)]);
        assert_eq!(offsets(spans.structure(1)), [Some(second_x)]);
    }

    #[test]
    fn test_out_of_range_lookups_are_empty() {
        let spans = NameSpans::default();
        assert!(spans.typedef(3).is_none());
        assert!(spans.structure(0).name().is_none());
        assert!(spans.function(1).member(0).is_none());
    }
}
