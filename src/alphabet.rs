//! Character sets that passwords are drawn from.

/// Lowercase, uppercase and digits (62 characters).
pub const BASE_CHARSET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Special characters appended when `-s` is given (28 characters).
pub const SPECIAL_CHARSET: &str = "!@#$%^&*()-_=+[]{}|;:',.<>?/";

/// Ordered, non-empty set of characters eligible for a password.
///
/// Order matters: a digest byte `b` selects the character at
/// `b % len()`, so two alphabets with the same characters in a different
/// order produce different passwords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// The base alphanumeric alphabet, optionally extended with specials.
    pub fn new(special: bool) -> Self {
        let mut chars: Vec<char> = BASE_CHARSET.chars().collect();
        if special {
            chars.extend(SPECIAL_CHARSET.chars());
        }
        Self { chars }
    }

    /// Build an alphabet from arbitrary characters.
    /// Returns `None` if `chars` is empty.
    pub fn from_chars(chars: impl IntoIterator<Item = char>) -> Option<Self> {
        let chars: Vec<char> = chars.into_iter().collect();
        if chars.is_empty() {
            None
        } else {
            Some(Self { chars })
        }
    }

    /// Map a byte onto the alphabet by modulo indexing.
    pub fn select(&self, byte: u8) -> char {
        self.chars[byte as usize % self.chars.len()]
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false: an empty alphabet cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_alphabet_len() {
        assert_eq!(Alphabet::new(false).len(), 62);
        assert_eq!(Alphabet::default(), Alphabet::new(false));
    }

    #[test]
    fn test_special_alphabet_appends_specials() {
        let alphabet = Alphabet::new(true);
        assert_eq!(alphabet.len(), 62 + 28);
        assert_eq!(alphabet.chars()[..62], Alphabet::new(false).chars()[..]);
        assert_eq!(alphabet.chars()[62], '!');
        assert_eq!(alphabet.chars()[89], '/');
    }

    #[test]
    fn test_select_wraps_modulo_len() {
        let alphabet = Alphabet::new(false);
        assert_eq!(alphabet.select(0), 'a');
        assert_eq!(alphabet.select(61), '9');
        assert_eq!(alphabet.select(62), 'a');
        assert_eq!(alphabet.select(255), alphabet.chars()[255 % 62]);
    }

    #[test]
    fn test_from_chars_rejects_empty() {
        assert!(Alphabet::from_chars(std::iter::empty()).is_none());
        let ab = Alphabet::from_chars("ab".chars()).unwrap();
        assert_eq!(ab.select(3), 'b');
        assert!(!ab.is_empty());
    }

    #[test]
    fn test_contains() {
        let alphabet = Alphabet::new(false);
        assert!(alphabet.contains('Z'));
        assert!(!alphabet.contains('!'));
        assert!(Alphabet::new(true).contains('!'));
    }
}
