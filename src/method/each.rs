use crate::operation::Operation;
use crate::template::{MethodTemplate, line};

pub const EACH: MethodTemplate = MethodTemplate {
    name: "Each",
    doc: "Each is a method on $list that takes a function of type $elem -> void and applies the function to each member of the list and then returns the original list.",
    params: "f func($elem)",
    returns: "$list",
    body: &[
        line(0, "for _, t := range l {"),
        line(1, "f(t)"),
        line(0, "}"),
        line(0, "return l"),
    ],
};

pub const EACH_I: MethodTemplate = MethodTemplate {
    name: "EachI",
    doc: "EachI is a method on $list that takes a function of type (int, $elem) -> void and applies the function to each member of the list and then returns the original list. The int parameter to the function is the index of the element.",
    params: "f func(int, $elem)",
    returns: "$list",
    body: &[
        line(0, "for i, t := range l {"),
        line(1, "f(i, t)"),
        line(0, "}"),
        line(0, "return l"),
    ],
};

/// Render `Each`: call `f` on every element in order, return the list unchanged.
pub fn each(list_name: &str, type_name: &str) -> String {
    crate::generate(Operation::Each, list_name, type_name)
}

/// Render `EachI`: like `Each`, with the zero-based index passed first.
pub fn each_i(list_name: &str, type_name: &str) -> String {
    crate::generate(Operation::EachI, list_name, type_name)
}
