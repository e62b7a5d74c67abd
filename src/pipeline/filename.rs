use crate::styles::DocumentStyle;
use itertools::Itertools;

/// Collapses whitespace runs to `_` and drops characters that are not safe
/// in a file name.
pub fn sanitize_name(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| !c.is_control() && !matches!(*c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|'))
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .join("_")
}

/// `<Name>_<Label><StyleSuffix>.<ext>`, e.g. `Jane_Doe_Portfolio_Professional.pdf`.
pub fn document_filename(
    name: Option<&str>,
    fallback: &str,
    label: &str,
    style: DocumentStyle,
    extension: &str,
) -> String {
    let sanitized = name
        .map(sanitize_name)
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| sanitize_name(fallback));
    format!(
        "{}_{}{}.{}",
        sanitized,
        sanitize_name(label),
        style.filename_suffix(),
        extension
    )
}
