//! Identifier case conversions exposed to templates.
//!
//! All conversions split the input into words first. A word ends at any
//! non-alphanumeric character (`_`, `-`, whitespace, `.`), at a lower-to-upper
//! transition (`fooBar`), and before the last capital of an acronym that is
//! followed by a lowercase letter (`HTTPServer` -> `HTTP`, `Server`).
//!
//! The camel conversions rebuild every word as one capital followed by
//! lowercase letters, so acronyms are normalised rather than preserved:
//! `userID` becomes `UserId` and `HTTPServer` becomes `HttpServer`. Keep a
//! literal spelling in the template itself when an acronym must survive.

/// Splits an identifier into its words, preserving the original casing.
pub fn split_words(s: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start: Option<usize> = None;
    let chars: Vec<(usize, char)> = s.char_indices().collect();

    for (i, &(offset, c)) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if let Some(begin) = start.take() {
                words.push(&s[begin..offset]);
            }
            continue;
        }

        if let Some(begin) = start {
            let prev = chars[i - 1].1;
            let next = chars.get(i + 1).map(|&(_, n)| n);
            let lower_to_upper = (prev.is_lowercase() || prev.is_numeric()) && c.is_uppercase();
            let acronym_end =
                prev.is_uppercase() && c.is_uppercase() && next.is_some_and(char::is_lowercase);
            if lower_to_upper || acronym_end {
                words.push(&s[begin..offset]);
                start = Some(offset);
            }
        } else {
            start = Some(offset);
        }
    }

    if let Some(begin) = start {
        words.push(&s[begin..]);
    }
    words
}

pub fn to_upper(s: &str) -> String {
    s.to_uppercase()
}

pub fn to_lower(s: &str) -> String {
    s.to_lowercase()
}

/// `FooBar` -> `foo_bar`
pub fn to_snake_case(s: &str) -> String {
    join_lowercase(s, "_")
}

/// `FooBar` -> `foo-bar`
pub fn to_kebab_case(s: &str) -> String {
    join_lowercase(s, "-")
}

/// `foo_bar` -> `FooBar`, `userID` -> `UserId`
pub fn to_camel_case(s: &str) -> String {
    split_words(s).into_iter().map(capitalize).collect()
}

/// `foo_bar` -> `fooBar`
pub fn to_lower_camel_case(s: &str) -> String {
    let mut words = split_words(s).into_iter();
    let mut out = match words.next() {
        Some(first) => first.to_lowercase(),
        None => return String::new(),
    };
    out.extend(words.map(capitalize));
    out
}

fn join_lowercase(s: &str, sep: &str) -> String {
    split_words(s)
        .into_iter()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(sep)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
    }
}
