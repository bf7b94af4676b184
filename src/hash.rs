//! Hash functions pluggable into either map.

use std::{fmt, str::FromStr};

use crate::{Error, Result};

/// A hash function maps a key to a non-negative integer.
///
/// It must be pure: the same key always hashes to the same value.
pub type HashFunction = fn(&str) -> usize;

/// Sums the code points of the key's characters.
///
/// Anagrams collide, which makes it a handy worst case for tests.
#[must_use]
pub fn hash_function_1(key: &str) -> usize {
    key.chars().fold(0_usize, |hash, c| hash.wrapping_add(c as usize))
}

/// Sums each code point weighted by its one-based position in the key.
#[must_use]
pub fn hash_function_2(key: &str) -> usize {
    key.chars().zip(1_usize..).fold(0_usize, |hash, (c, position)| {
        hash.wrapping_add(position.wrapping_mul(c as usize))
    })
}

/// The built-in hash functions, selectable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuiltinHash {
    /// [`hash_function_1`]
    #[default]
    Additive,
    /// [`hash_function_2`]
    Positional,
}

impl BuiltinHash {
    /// Every built-in, in declaration order
    pub const ALL: [Self; 2] = [Self::Additive, Self::Positional];

    /// Returns the function pointer for this built-in
    #[must_use]
    pub fn function(self) -> HashFunction {
        match self {
            Self::Additive => hash_function_1,
            Self::Positional => hash_function_2,
        }
    }
}

impl fmt::Display for BuiltinHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Additive => f.write_str("additive"),
            Self::Positional => f.write_str("positional"),
        }
    }
}

impl FromStr for BuiltinHash {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "hash1" | "additive" => Ok(Self::Additive),
            "hash2" | "positional" => Ok(Self::Positional),
            _ => Err(Error::UnknownHashFunction(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_function_1() {
        assert_eq!(hash_function_1(""), 0);
        assert_eq!(hash_function_1("a"), 97);
        assert_eq!(hash_function_1("ab"), 97 + 98);
        assert_eq!(hash_function_1("ab"), hash_function_1("ba"));
    }

    #[test]
    fn test_hash_function_2() {
        assert_eq!(hash_function_2(""), 0);
        assert_eq!(hash_function_2("a"), 97);
        assert_eq!(hash_function_2("ab"), 97 + 2 * 98);
        assert_ne!(hash_function_2("ab"), hash_function_2("ba"));
    }

    #[test]
    fn test_parse_builtin() {
        assert_eq!("hash1".parse::<BuiltinHash>(), Ok(BuiltinHash::Additive));
        assert_eq!("Positional".parse::<BuiltinHash>(), Ok(BuiltinHash::Positional));
        assert_eq!(
            "sha256".parse::<BuiltinHash>(),
            Err(Error::UnknownHashFunction("sha256".to_string()))
        );
    }

    #[test]
    fn test_display_parses_back() {
        for builtin in BuiltinHash::ALL {
            assert_eq!(builtin.to_string().parse::<BuiltinHash>(), Ok(builtin));
        }
    }

    #[test]
    fn test_function_dispatch() {
        assert_eq!(BuiltinHash::Additive.function()("key"), hash_function_1("key"));
        assert_eq!(BuiltinHash::Positional.function()("key"), hash_function_2("key"));
    }
}
