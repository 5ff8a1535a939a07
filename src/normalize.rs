/// Canonicalize source text for whitespace-insensitive comparison:
/// trim each line, drop blank lines, join with `\n` and no trailing newline.
///
/// Idempotent: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(source: &str) -> String {
    let mut result = String::with_capacity(source.len());
    for line in source.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if !result.is_empty() {
            result.push('\n');
        }
        result.push_str(line);
    }
    result
}
