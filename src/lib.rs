pub mod error;
pub mod method;
pub mod normalize;
pub mod operation;
pub mod source;
pub mod template;

pub use error::GenerateError;
pub use method::{
    drop, drop_while, each, each_i, filter, pfilter, reduce, reduce_right, take, take_while,
};
pub use normalize::normalize;
pub use operation::Operation;
pub use source::{GENERATED_HEADER, ListSpec, SourceOptions, render_source};
pub use template::MethodTemplate;

/// Generate the Go source of one list method.
///
/// `list_name` is used for the receiver and list-typed results, `type_name`
/// for every element type, including in the doc comment. Names are not
/// validated, and the same inputs always produce the same text.
pub fn generate(operation: Operation, list_name: &str, type_name: &str) -> String {
    let source = operation.template().render(list_name, type_name);
    tracing::debug!(
        operation = %operation,
        list = list_name,
        elem = type_name,
        bytes = source.len(),
        "rendered list method"
    );
    source
}

/// Generate every operation in `operations` for one list, separated by blank lines.
pub fn generate_all(operations: &[Operation], list_name: &str, type_name: &str) -> String {
    operations
        .iter()
        .map(|&op| generate(op, list_name, type_name))
        .collect::<Vec<_>>()
        .join("\n")
}
