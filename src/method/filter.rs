use crate::operation::Operation;
use crate::template::{MethodTemplate, line};

pub const FILTER: MethodTemplate = MethodTemplate {
    name: "Filter",
    doc: "Filter is a method on $list that takes a function of type $elem -> bool returns a list of type $list which contains all members from the original list for which the function returned true",
    params: "f func($elem) bool",
    returns: "$list",
    body: &[
        line(0, "l2 := []$elem{}"),
        line(0, "for _, t := range l {"),
        line(1, "if f(t) {"),
        line(2, "l2 = append(l2, t)"),
        line(1, "}"),
        line(0, "}"),
        line(0, "return l2"),
    ],
};

/// One goroutine per element; `mutex` guards `l2` and `wg` waits for all of them.
pub const PFILTER: MethodTemplate = MethodTemplate {
    name: "PFilter",
    doc: "PFilter is similar to the Filter method except that the filter is applied to all the elements in parallel. The order of resulting elements cannot be guaranteed.",
    params: "f func($elem) bool",
    returns: "$list",
    body: &[
        line(0, "wg := sync.WaitGroup{}"),
        line(0, "mutex := sync.Mutex{}"),
        line(0, "l2 := []$elem{}"),
        line(0, "for _, t := range l {"),
        line(1, "wg.Add(1)"),
        line(1, "go func(t $elem){"),
        line(2, "if f(t) {"),
        line(3, "mutex.Lock()"),
        line(3, "l2 = append(l2, t)"),
        line(3, "mutex.Unlock()"),
        line(2, "}"),
        line(2, "wg.Done()"),
        line(1, "}(t)"),
        line(0, "}"),
        line(0, "wg.Wait()"),
        line(0, "return l2"),
    ],
};

/// Render `Filter`: keep the elements for which `f` returns true, in order.
pub fn filter(list_name: &str, type_name: &str) -> String {
    crate::generate(Operation::Filter, list_name, type_name)
}

/// Render `PFilter`: `Filter` evaluated concurrently, result order unspecified.
pub fn pfilter(list_name: &str, type_name: &str) -> String {
    crate::generate(Operation::PFilter, list_name, type_name)
}
