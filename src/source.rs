use std::str::FromStr;

use crate::error::GenerateError;
use crate::operation::Operation;

/// First line of every generated source unit, in the form Go tooling
/// recognizes as machine-generated.
pub const GENERATED_HEADER: &str = "// Code generated by listgen. DO NOT EDIT.";

/// A list type and its element type, e.g. `stringList:string`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSpec {
    pub list_name: String,
    pub type_name: String,
}

impl ListSpec {
    pub fn new(list_name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            list_name: list_name.into(),
            type_name: type_name.into(),
        }
    }

    /// Parse a comma-separated list such as `"stringList:string, intList:int"`.
    ///
    /// Empty entries are skipped. The first malformed entry is returned as the error.
    pub fn parse_many(specs: &str) -> Result<Vec<ListSpec>, GenerateError> {
        specs
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::parse)
            .collect()
    }

    /// Render one method for this list.
    pub fn generate(&self, operation: Operation) -> String {
        crate::generate(operation, &self.list_name, &self.type_name)
    }
}

impl FromStr for ListSpec {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = |reason: &str| GenerateError::MalformedListSpec {
            spec: s.to_string(),
            reason: reason.to_string(),
        };

        let (list_name, type_name) = s
            .split_once(':')
            .ok_or_else(|| malformed("expected `list:elem`"))?;
        let (list_name, type_name) = (list_name.trim(), type_name.trim());

        if list_name.is_empty() {
            return Err(malformed("missing list name"));
        }
        if type_name.is_empty() {
            return Err(malformed("missing element type"));
        }

        Ok(ListSpec::new(list_name, type_name))
    }
}

/// Options controlling how a whole source unit is assembled.
#[derive(Debug, Clone)]
pub struct SourceOptions {
    /// Go package clause name.
    pub package: String,
    /// Methods to emit for each list, in this order.
    pub operations: Vec<Operation>,
    /// Emit `type <list> []<elem>` before each list's methods.
    pub declare_types: bool,
    /// Emit the generated-code marker as the first line.
    pub header: bool,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            package: "main".to_string(),
            operations: Operation::ALL.to_vec(),
            declare_types: true,
            header: true,
        }
    }
}

/// Assemble a Go source unit holding the selected methods for every list.
///
/// Items are separated by one blank line; `import "sync"` is added only when
/// a selected operation needs it.
pub fn render_source(specs: &[ListSpec], options: &SourceOptions) -> String {
    let mut items: Vec<String> = Vec::new();

    if options.header {
        items.push(format!("{GENERATED_HEADER}\n"));
    }
    items.push(format!("package {}\n", options.package));

    if !specs.is_empty() && options.operations.iter().any(|op| op.needs_sync()) {
        items.push("import \"sync\"\n".to_string());
    }

    for spec in specs {
        if options.declare_types {
            items.push(format!("type {} []{}\n", spec.list_name, spec.type_name));
        }
        for &operation in &options.operations {
            items.push(spec.generate(operation));
        }
    }

    let source = items.join("\n");
    tracing::debug!(
        package = %options.package,
        lists = specs.len(),
        methods = specs.len() * options.operations.len(),
        bytes = source.len(),
        "rendered source unit"
    );
    source
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_spec_parse() {
        let spec: ListSpec = "stringList:string".parse().unwrap();
        assert_eq!(spec, ListSpec::new("stringList", "string"));
    }

    #[test]
    fn test_list_spec_parse_trims() {
        let spec: ListSpec = "  pts : *Point ".parse().unwrap();
        assert_eq!(spec.list_name, "pts");
        assert_eq!(spec.type_name, "*Point");
    }

    #[test]
    fn test_list_spec_parse_splits_at_first_colon() {
        let spec: ListSpec = "chans:chan map[string]int".parse().unwrap();
        assert_eq!(spec.type_name, "chan map[string]int");
        let spec: ListSpec = "a:b:c".parse().unwrap();
        assert_eq!(spec, ListSpec::new("a", "b:c"));
    }

    #[test]
    fn test_list_spec_parse_missing_separator() {
        let err = "stringList".parse::<ListSpec>().unwrap_err();
        assert!(matches!(err, GenerateError::MalformedListSpec { ref spec, .. } if spec == "stringList"));
        assert!(err.to_string().contains("expected `list:elem`"));
    }

    #[test]
    fn test_list_spec_parse_empty_sides() {
        let err = ":string".parse::<ListSpec>().unwrap_err();
        assert!(err.to_string().contains("missing list name"));
        let err = "stringList: ".parse::<ListSpec>().unwrap_err();
        assert!(err.to_string().contains("missing element type"));
    }

    #[test]
    fn test_list_spec_parse_many() {
        let specs = ListSpec::parse_many("stringList:string, intList:int,,").unwrap();
        assert_eq!(
            specs,
            vec![
                ListSpec::new("stringList", "string"),
                ListSpec::new("intList", "int")
            ]
        );
        assert!(ListSpec::parse_many("").unwrap().is_empty());
    }

    #[test]
    fn test_list_spec_parse_many_reports_bad_entry() {
        let err = ListSpec::parse_many("a:b, oops, c:d").unwrap_err();
        assert_eq!(
            err,
            GenerateError::MalformedListSpec {
                spec: "oops".to_string(),
                reason: "expected `list:elem`".to_string(),
            }
        );
    }

    #[test]
    fn test_default_options() {
        let options = SourceOptions::default();
        assert_eq!(options.package, "main");
        assert_eq!(options.operations, Operation::ALL);
        assert!(options.declare_types);
        assert!(options.header);
    }

    #[test]
    fn test_render_source_minimal() {
        let options = SourceOptions {
            operations: vec![Operation::Take],
            header: false,
            ..Default::default()
        };
        let source = render_source(&[ListSpec::new("intList", "int")], &options);
        let expected = format!(
            "package main\n\ntype intList []int\n\n{}",
            crate::method::take("intList", "int")
        );
        assert_eq!(source, expected);
    }

    #[test]
    fn test_render_source_header_first() {
        let source = render_source(&[], &SourceOptions::default());
        assert_eq!(source, format!("{GENERATED_HEADER}\n\npackage main\n"));
    }

    #[test]
    fn test_render_source_no_sync_without_specs() {
        let source = render_source(&[], &SourceOptions::default());
        assert!(!source.contains("import"));
    }
}
