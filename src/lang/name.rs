/// Characters that may never appear in a variable, method or parameter name.
/// The two-character comparison operators are covered by their parts.
pub const RESERVED: &[char] = &[
    '=', '<', '>', '!', '+', '-', '*', '/', '(', ')', '{', '}', ';', ':', ',', '.', ' ', '"',
];

pub fn is_reserved(s: &str) -> bool {
    s.contains(RESERVED)
}

pub fn parse_int(s: &str) -> Option<i32> {
    s.parse::<i32>().ok()
}

pub fn is_integer(s: &str) -> bool {
    parse_int(s).is_some()
}

/// Names must be non-empty, must not start like a number
/// and must not contain a reserved character.
pub fn is_valid_name(s: &str) -> bool {
    match s.chars().next() {
        None => false,
        Some(c) if c.is_ascii_digit() => false,
        Some(_) => !is_reserved(s),
    }
}
