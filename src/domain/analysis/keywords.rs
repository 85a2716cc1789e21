//! Keyword Matcher - case-insensitive any-token substring test.

/// Returns true if any token occurs anywhere in the lowercased text.
///
/// No tokenization and no word-boundary checks: partial-word matches are
/// accepted on purpose (e.g. `"emoc"` matches `"emocional"`). Tokens are
/// expected to be lowercase already.
pub fn contains_any(text: &str, tokens: &[&str]) -> bool {
    let lowered = text.to_lowercase();
    tokens.iter().any(|token| lowered.contains(token))
}

/// Joins the parts with a single space and runs [`contains_any`] over the
/// widened surface.
///
/// The join matters: multi-word tokens such as `"plan b"` may match across a
/// field boundary, and that behavior is part of the rule semantics.
pub fn contains_any_joined<S: AsRef<str>>(parts: &[S], tokens: &[&str]) -> bool {
    let joined = parts
        .iter()
        .map(|part| part.as_ref())
        .collect::<Vec<_>>()
        .join(" ");
    contains_any(&joined, tokens)
}
