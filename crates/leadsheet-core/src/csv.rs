//! CSV line tokenizer.
//!
//! Splits a single line of a spreadsheet export into trimmed field values.
//! Quoting follows the usual export rules (`"a,b"` keeps the comma, `""`
//! inside quotes is a literal quote). Malformed quoting is never an error:
//! an unterminated quote simply swallows the rest of the line.

/// Tokenize one line into trimmed fields. Always returns at least one field.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut in_quote = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quote && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quote = !in_quote,
            ',' if !in_quote => {
                values.push(current.trim().to_string());
                current.clear();
            }
            other => current.push(other),
        }
    }
    values.push(current.trim().to_string());
    values
}

/// Quote a value so that [`parse_line`] reads it back unchanged.
///
/// Values that are already trim-stable and contain no `,` or `"` are written
/// bare; everything else is wrapped in quotes with inner quotes doubled.
pub fn quote_field(value: &str) -> String {
    if value.contains([',', '"']) || value.trim() != value {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
