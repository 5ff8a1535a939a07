/// Errors that can occur while parsing generator inputs.
///
/// Rendering itself is total; only the string-parsing entry points fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error("unknown list operation: {name}")]
    UnknownOperation { name: String },

    #[error("malformed list spec `{spec}`: {reason}")]
    MalformedListSpec { spec: String, reason: String },
}
