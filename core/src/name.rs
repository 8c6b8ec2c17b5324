//! Identifier rule shared by construction and renaming.

/// Reports whether `name` is an acceptable worm name.
///
/// A valid name holds at least two characters, starts with an uppercase
/// ASCII letter and continues with ASCII letters, apostrophes, double quotes
/// or spaces only.
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_ascii_uppercase() {
        return false;
    }

    let mut remaining = 0_usize;
    for character in chars {
        if !(character.is_ascii_alphabetic() || matches!(character, '\'' | '"' | ' ')) {
            return false;
        }
        remaining += 1;
    }
    remaining > 0
}
