//! Formatting helpers for `SCREAMING_SNAKE` constant names.

/// `NEW_YORK` -> `new_york`.
pub fn lower_name(name: &str) -> String {
    name.to_lowercase()
}

/// `NEW_YORK` -> `newYork`.
pub fn camel_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for (i, word) in words(name).enumerate() {
        if i == 0 {
            out.push_str(&word.to_lowercase());
        } else {
            push_capitalized(&mut out, word);
        }
    }
    out
}

/// `NEW_YORK` -> `New York`.
pub fn label(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for (i, word) in words(name).enumerate() {
        if i > 0 {
            out.push(' ');
        }
        push_capitalized(&mut out, word);
    }
    out
}

fn words(name: &str) -> impl Iterator<Item = &str> {
    name.split('_').filter(|w| !w.is_empty())
}

fn push_capitalized(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(&chars.as_str().to_lowercase());
    }
}

#[cfg(test)]
#[path = "../tests/names_tests.rs"]
mod tests;
