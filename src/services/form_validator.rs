//! Form validation engine.
//!
//! Pure functions over submitted strings. Handlers invoke the field
//! validators in order and collect every failure into one list before
//! deciding success or failure, so a redisplayed form reports all problems
//! at once instead of stopping at the first.
//!
//! Each validator returns the normalized value (trimmed, HTML-escaped) even
//! when the field fails its rule; the caller echoes those values back into
//! the form so nothing the user typed is lost.

/// A single failed field rule, in submission order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Bounds applied to the optional numeric item fields
pub const QUANTITY_MIN: i64 = 1;
pub const QUANTITY_MAX: i64 = 1_000_000;

/// Escape a string for safe embedding in HTML output.
///
/// The escaped form is what gets persisted, so stored values are
/// embeddable as-is.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            '/' => escaped.push_str("&#x2F;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Trim and escape a submitted value without applying any rule
pub fn sanitize(raw: &str) -> String {
    escape_html(raw.trim())
}

/// Required text field with a character-length window.
///
/// The length check runs on the trimmed value, before escaping; escape
/// expansion never counts against the limit.
pub fn text_field(
    field: &'static str,
    raw: &str,
    min: usize,
    max: usize,
    message: &str,
    errors: &mut Vec<FieldError>,
) -> String {
    let trimmed = raw.trim();
    let len = trimmed.chars().count();
    if len < min || len > max {
        errors.push(FieldError::new(field, message));
    }
    escape_html(trimmed)
}

/// Required field that only has to be non-empty after trimming
pub fn required_field(
    field: &'static str,
    raw: &str,
    message: &str,
    errors: &mut Vec<FieldError>,
) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.push(FieldError::new(field, message));
    }
    escape_html(trimmed)
}

/// Optional positive-integer field (price, number in stock).
///
/// An empty submission means the field was omitted and is accepted as
/// absent. Anything else must be a plain decimal integer without leading
/// zeroes, within [`QUANTITY_MIN`, `QUANTITY_MAX`]. Returns the sanitized
/// submitted text for redisplay alongside the parsed value, which is `None`
/// both for omitted fields and for rejected ones.
pub fn quantity_field(
    field: &'static str,
    raw: &str,
    message: &str,
    errors: &mut Vec<FieldError>,
) -> (String, Option<i64>) {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return (String::new(), None);
    }

    let sanitized = escape_html(trimmed);
    match parse_quantity(trimmed) {
        Some(value) => (sanitized, Some(value)),
        None => {
            errors.push(FieldError::new(field, message));
            (sanitized, None)
        }
    }
}

fn parse_quantity(text: &str) -> Option<i64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Leading-zero forms like "007" are not accepted as integers
    if text.len() > 1 && text.starts_with('0') {
        return None;
    }
    let value: i64 = text.parse().ok()?;
    if (QUANTITY_MIN..=QUANTITY_MAX).contains(&value) {
        Some(value)
    } else {
        None
    }
}
