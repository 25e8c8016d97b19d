//! Tokenizer for group-code text streams
//!
//! DXF text is a flat alternation of lines: an integer group code naming a
//! field's role, then the field's value. The tokenizer pairs consecutive
//! trimmed lines into [`GroupCode`]s and leaves all interpretation to the
//! decoder. Codes stay strings; a malformed code simply never matches any
//! field lookup.
//!
//! A trailing line without a partner is dropped — iteration is bounds-safe
//! and no pair-count parity is enforced.

/// One (code, value) pair from a group-code stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupCode<'a> {
    /// The group code, e.g. `"0"` for a record start or `"10"` for an X
    /// coordinate.
    pub code: &'a str,
    /// The value line following the code.
    pub value: &'a str,
}

/// Splits a text buffer into (code, value) pairs.
pub fn tokenize(text: &str) -> Vec<GroupCode<'_>> {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    let mut pairs = Vec::with_capacity(lines.len() / 2);
    let mut i = 0;
    while i + 1 < lines.len() {
        pairs.push(GroupCode {
            code: lines[i],
            value: lines[i + 1],
        });
        i += 2;
    }
    pairs
}
