use std::fmt;
use std::str::FromStr;

use crate::error::GenerateError;
use crate::method::{each, filter, reduce, slice};
use crate::template::MethodTemplate;

/// The list operations a method can be generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Filter,
    PFilter,
    Each,
    EachI,
    DropWhile,
    TakeWhile,
    Take,
    Drop,
    Reduce,
    ReduceRight,
}

impl Operation {
    /// Every operation, in the order methods are emitted by default.
    pub const ALL: [Operation; 10] = [
        Operation::Filter,
        Operation::PFilter,
        Operation::Each,
        Operation::EachI,
        Operation::DropWhile,
        Operation::TakeWhile,
        Operation::Take,
        Operation::Drop,
        Operation::Reduce,
        Operation::ReduceRight,
    ];

    /// The template this operation renders.
    pub fn template(self) -> &'static MethodTemplate {
        match self {
            Operation::Filter => &filter::FILTER,
            Operation::PFilter => &filter::PFILTER,
            Operation::Each => &each::EACH,
            Operation::EachI => &each::EACH_I,
            Operation::DropWhile => &slice::DROP_WHILE,
            Operation::TakeWhile => &slice::TAKE_WHILE,
            Operation::Take => &slice::TAKE,
            Operation::Drop => &slice::DROP,
            Operation::Reduce => &reduce::REDUCE,
            Operation::ReduceRight => &reduce::REDUCE_RIGHT,
        }
    }

    /// The Go method name, e.g. `"EachI"`.
    pub fn name(self) -> &'static str {
        self.template().name
    }

    /// Whether the generated method refers to package `sync`.
    pub fn needs_sync(self) -> bool {
        matches!(self, Operation::PFilter)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fold `_`/`-` away and lowercase, so `take_while` matches `TakeWhile`.
fn fold_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for Operation {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(op) = Self::ALL.into_iter().find(|op| op.name() == trimmed) {
            return Ok(op);
        }

        let folded = fold_name(trimmed);
        Self::ALL
            .into_iter()
            .find(|op| fold_name(op.name()) == folded)
            .ok_or_else(|| GenerateError::UnknownOperation {
                name: s.to_string(),
            })
    }
}
