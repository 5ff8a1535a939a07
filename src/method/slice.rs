//! Prefix and suffix operations: `DropWhile`, `TakeWhile`, `Take`, `Drop`.
//!
//! The "empty list" results are a zero-valued `var l2 <list>`, i.e. a nil
//! slice of the list type.

use crate::operation::Operation;
use crate::template::{MethodTemplate, line};

pub const DROP_WHILE: MethodTemplate = MethodTemplate {
    name: "DropWhile",
    doc: "DropWhile is a method on $list that takes a function of type $elem -> bool and returns a list of type $list which excludes the first members from the original list for which the function returned true",
    params: "f func($elem) bool",
    returns: "$list",
    body: &[
        line(0, "for i, t := range l {"),
        line(1, "if !f(t) {"),
        line(2, "return l[i:]"),
        line(1, "}"),
        line(0, "}"),
        line(0, "var l2 $list"),
        line(0, "return l2"),
    ],
};

pub const TAKE_WHILE: MethodTemplate = MethodTemplate {
    name: "TakeWhile",
    doc: "TakeWhile is a method on $list that takes a function of type $elem -> bool and returns a list of type $list which includes only the first members from the original list for which the function returned true",
    params: "f func($elem) bool",
    returns: "$list",
    body: &[
        line(0, "for i, t := range l {"),
        line(1, "if !f(t) {"),
        line(2, "return l[:i]"),
        line(1, "}"),
        line(0, "}"),
        line(0, "return l"),
    ],
};

pub const TAKE: MethodTemplate = MethodTemplate {
    name: "Take",
    doc: "Take is a method on $list that takes an integer n and returns the first n elements of the original list. If the list contains fewer than n elements then the entire list is returned.",
    params: "n int",
    returns: "$list",
    body: &[
        line(0, "if len(l) >= n {"),
        line(1, "return l[:n]"),
        line(0, "}"),
        line(0, "return l"),
    ],
};

pub const DROP: MethodTemplate = MethodTemplate {
    name: "Drop",
    doc: "Drop is a method on $list that takes an integer n and returns all but the first n elements of the original list. If the list contains fewer than n elements then an empty list is returned.",
    params: "n int",
    returns: "$list",
    body: &[
        line(0, "if len(l) >= n {"),
        line(1, "return l[n:]"),
        line(0, "}"),
        line(0, "var l2 $list"),
        line(0, "return l2"),
    ],
};

/// Render `DropWhile`: the suffix starting at the first element for which `f` is false.
pub fn drop_while(list_name: &str, type_name: &str) -> String {
    crate::generate(Operation::DropWhile, list_name, type_name)
}

/// Render `TakeWhile`: the prefix before the first element for which `f` is false.
pub fn take_while(list_name: &str, type_name: &str) -> String {
    crate::generate(Operation::TakeWhile, list_name, type_name)
}

/// Render `Take`: the first `n` elements, or the whole list if it is shorter.
pub fn take(list_name: &str, type_name: &str) -> String {
    crate::generate(Operation::Take, list_name, type_name)
}

/// Render `Drop`: everything after the first `n` elements, or an empty list.
pub fn drop(list_name: &str, type_name: &str) -> String {
    crate::generate(Operation::Drop, list_name, type_name)
}
