//! Naming-convention utilities for generated members and parameters.
//!
//! Declared DSL names may use `snake_case`, `kebab-case`, or already-cased
//! identifiers. Generated C# uses PascalCase for fields/properties and
//! camelCase for constructor parameters.

/// PascalCase form of a declared name, used for fields and property accessors.
pub fn member_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for word in words(name) {
        push_capitalized(&mut out, word);
    }
    out
}

/// camelCase form of a declared name, used for constructor parameters.
pub fn parameter_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for (i, word) in words(name).enumerate() {
        if i == 0 {
            push_lowered(&mut out, word);
        } else {
            push_capitalized(&mut out, word);
        }
    }
    out
}

fn words(name: &str) -> impl Iterator<Item = &str> {
    name.split(['_', '-']).filter(|w| !w.is_empty())
}

// Only the first character of a word is case-adjusted; the rest is kept
// as written, so "orderId" stays "OrderId" rather than "Orderid".
fn push_capitalized(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
}

fn push_lowered(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_lowercase());
        out.push_str(chars.as_str());
    }
}
