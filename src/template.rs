/// Placeholder replaced by the list type name.
pub const LIST: &str = "$list";
/// Placeholder replaced by the element type name.
pub const ELEM: &str = "$elem";

/// One body line of a method template, indented `depth` levels inside the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub depth: usize,
    pub text: &'static str,
}

/// Shorthand for building body lines in `const` templates.
pub const fn line(depth: usize, text: &'static str) -> Line {
    Line { depth, text }
}

/// A Go method on a list type, with `$list`/`$elem` placeholders in every
/// part except the method name.
///
/// Renders as a `//` doc line, the `func (l <list>) Name(...) Ret {` signature,
/// the body indented with tabs, and a closing brace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodTemplate {
    pub name: &'static str,
    pub doc: &'static str,
    pub params: &'static str,
    pub returns: &'static str,
    pub body: &'static [Line],
}

impl MethodTemplate {
    /// Render the method for a concrete list and element type.
    ///
    /// Names are inserted verbatim, without validation.
    pub fn render(&self, list_name: &str, type_name: &str) -> String {
        let mut out = String::with_capacity(self.size_hint(list_name, type_name));

        out.push_str("// ");
        substitute_into(&mut out, self.doc, list_name, type_name);
        out.push('\n');

        out.push_str("func (l ");
        out.push_str(list_name);
        out.push_str(") ");
        out.push_str(self.name);
        out.push('(');
        substitute_into(&mut out, self.params, list_name, type_name);
        out.push_str(") ");
        substitute_into(&mut out, self.returns, list_name, type_name);
        out.push_str(" {\n");

        for line in self.body {
            for _ in 0..=line.depth {
                out.push('\t');
            }
            substitute_into(&mut out, line.text, list_name, type_name);
            out.push('\n');
        }

        out.push_str("}\n");
        out
    }

    fn size_hint(&self, list_name: &str, type_name: &str) -> usize {
        let names = 8 * (list_name.len() + type_name.len());
        let body: usize = self.body.iter().map(|l| l.text.len() + l.depth + 2).sum();
        self.doc.len() + self.params.len() + self.returns.len() + body + names + 32
    }
}

/// Replace `$list` and `$elem` in `template` with the given names.
///
/// Substitution is a single left-to-right pass: placeholder text that comes
/// from the names themselves is never expanded again. A `$` that does not
/// start a placeholder is kept as is.
pub fn substitute(template: &str, list_name: &str, type_name: &str) -> String {
    let mut out = String::with_capacity(template.len());
    substitute_into(&mut out, template, list_name, type_name);
    out
}

fn substitute_into(out: &mut String, template: &str, list_name: &str, type_name: &str) {
    let mut rest = template;
    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        if let Some(after) = tail.strip_prefix(LIST) {
            out.push_str(list_name);
            rest = after;
        } else if let Some(after) = tail.strip_prefix(ELEM) {
            out.push_str(type_name);
            rest = after;
        } else {
            out.push('$');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: MethodTemplate = MethodTemplate {
        name: "First",
        doc: "First returns the first $elem of a $list",
        params: "d $elem",
        returns: "$elem",
        body: &[
            line(0, "if len(l) > 0 {"),
            line(1, "return l[0]"),
            line(0, "}"),
            line(0, "return d"),
        ],
    };

    #[test]
    fn test_substitute_both_placeholders() {
        assert_eq!(
            substitute("func($elem) $list", "intList", "int"),
            "func(int) intList"
        );
    }

    #[test]
    fn test_substitute_repeated_placeholders() {
        assert_eq!(
            substitute("($elem, $elem) -> $elem", "l", "rune"),
            "(rune, rune) -> rune"
        );
    }

    #[test]
    fn test_substitute_no_placeholders() {
        assert_eq!(substitute("return l", "a", "b"), "return l");
        assert_eq!(substitute("", "a", "b"), "");
    }

    #[test]
    fn test_substitute_lone_dollar_kept() {
        assert_eq!(substitute("$ $x $li $elem$", "L", "E"), "$ $x $li E$");
    }

    #[test]
    fn test_substitute_single_pass() {
        // The list name contains the element placeholder; it must survive verbatim.
        assert_eq!(substitute("$list/$elem", "$elem", "$list"), "$elem/$list");
    }

    #[test]
    fn test_substitute_unicode_names() {
        assert_eq!(substitute("[]$elem", "목록", "文字"), "[]文字");
    }

    #[test]
    fn test_render_layout() {
        let rendered = SAMPLE.render("intList", "int");
        assert_eq!(
            rendered,
            "// First returns the first int of a intList\n\
             func (l intList) First(d int) int {\n\
             \tif len(l) > 0 {\n\
             \t\treturn l[0]\n\
             \t}\n\
             \treturn d\n\
             }\n"
        );
    }

    #[test]
    fn test_render_empty_names() {
        let rendered = SAMPLE.render("", "");
        assert!(rendered.starts_with("// First returns the first  of a \n"));
        assert!(rendered.contains("func (l ) First(d )  {\n"));
    }

    #[test]
    fn test_render_deterministic() {
        assert_eq!(SAMPLE.render("a", "b"), SAMPLE.render("a", "b"));
    }
}
