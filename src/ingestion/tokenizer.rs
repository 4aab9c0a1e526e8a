/// Splits one line of raw text into word tokens.
///
/// Mid-word dashes become separators ("tel-aviv" -> "tel", "aviv"), then the
/// line is split on whitespace. Consecutive separators produce no empty
/// tokens. There is no alphabetic filtering: "data," and "(who?)," are valid
/// tokens if present verbatim in the input. Case is not normalized here;
/// lowercasing is the caller's responsibility, applied once per token before
/// indexing.
pub fn tokenize_line(line: &str) -> Vec<String> {
    line.replace('-', " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
