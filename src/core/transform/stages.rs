//! Individual stages. Every stage is total over any input string.

const LINE_BREAK: char = '\n';

/// Replace every non-overlapping occurrence of `find` with `replace`, left to right.
///
/// `find` is matched as an exact character sequence and `replace` is inserted verbatim,
/// so `.`, `\` and `$` carry no special meaning in either.
pub fn replace_literal(text: &str, find: &str, replace: &str) -> String {
    if text.is_empty() || find.is_empty() {
        return text.to_string();
    }
    text.replace(find, replace)
}

/// Drop everything up to and including the first `marker` on each line.
///
/// Lines without the marker are kept as they are.
pub fn cut_prefix(text: &str, marker: &str) -> String {
    if text.is_empty() || marker.is_empty() {
        return text.to_string();
    }
    map_lines(text, |line| match line.find(marker) {
        Some(index) => &line[index + marker.len()..],
        None => line,
    })
}

/// Turn every backslash into a forward slash.
pub fn convert_slashes(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    text.replace('\\', "/")
}

/// Strip leading and trailing whitespace from each line.
pub fn trim_lines(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    map_lines(text, str::trim)
}

fn map_lines<'a, F>(text: &'a str, f: F) -> String
where
    F: Fn(&'a str) -> &'a str,
{
    text.split(LINE_BREAK)
        .map(f)
        .collect::<Vec<_>>()
        .join("\n")
}
