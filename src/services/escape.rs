//! HTML escaping for server-supplied text.
//!
//! Every string the backend hands us that ends up inside markup (currently
//! feature names) goes through here. Numeric values are formatted from
//! typed floats and never pass through string interpolation.

/// Characters that must never reach markup raw, with their entities.
const ESCAPES: [(char, &str); 9] = [
    ('&', "&amp;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('"', "&quot;"),
    ('\'', "&#x27;"),
    ('/', "&#x2F;"),
    ('\\', "&#x5C;"),
    ('`', "&#x60;"),
    ('=', "&#x3D;"),
];

fn entity_for(c: char) -> Option<&'static str> {
    ESCAPES.iter().find(|(ch, _)| *ch == c).map(|(_, e)| *e)
}

/// Replace each unsafe character with its HTML entity in a single pass.
///
/// The replacement entities only contain characters outside the scanned
/// set (apart from the leading `&`, which maps to `&amp;` and stays valid
/// entity syntax under repeated escaping), so no output is ever corrupted
/// by a second pass.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match entity_for(c) {
            Some(entity) => out.push_str(entity),
            None => out.push(c),
        }
    }
    out
}
