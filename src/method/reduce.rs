use crate::operation::Operation;
use crate::template::{MethodTemplate, line};

pub const REDUCE: MethodTemplate = MethodTemplate {
    name: "Reduce",
    doc: "Reduce is a method on $list that takes a function of type ($elem, $elem) -> $elem and returns a $elem which is the result of applying the function to all members of the original list starting from the first member",
    params: "t1 $elem, f func($elem, $elem) $elem",
    returns: "$elem",
    body: &[
        line(0, "for _, t := range l {"),
        line(1, "t1 = f(t1, t)"),
        line(0, "}"),
        line(0, "return t1"),
    ],
};

/// Walks the list back to front; the element is passed first, the accumulator second.
pub const REDUCE_RIGHT: MethodTemplate = MethodTemplate {
    name: "ReduceRight",
    doc: "ReduceRight is a method on $list that takes a function of type ($elem, $elem) -> $elem and returns a $elem which is the result of applying the function to all members of the original list starting from the last member",
    params: "t1 $elem, f func($elem, $elem) $elem",
    returns: "$elem",
    body: &[
        line(0, "for i := len(l) - 1; i >= 0; i-- {"),
        line(1, "t := l[i]"),
        line(1, "t1 = f(t, t1)"),
        line(0, "}"),
        line(0, "return t1"),
    ],
};

/// Render `Reduce`: left fold seeded by `t1`.
pub fn reduce(list_name: &str, type_name: &str) -> String {
    crate::generate(Operation::Reduce, list_name, type_name)
}

/// Render `ReduceRight`: right fold seeded by `t1`.
pub fn reduce_right(list_name: &str, type_name: &str) -> String {
    crate::generate(Operation::ReduceRight, list_name, type_name)
}
