// Copyright (c) 2025 Alphabet Table Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Alphabet classification for the Alphabet Table hash.
//!
//! Two fixed uppercase alphabets are recognised. Their ordering determines
//! every hash value the table produces, so the letter sequences must never
//! be reordered.

use std::fmt;

use crate::data_structures::alphabet_table::error::{AlphabetTableError, Result};

/// The uppercase Latin alphabet, 26 letters.
pub const LATIN: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// The uppercase Cyrillic alphabet, 33 letters with Ё after Е.
pub const CYRILLIC: &str = "АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯ";

/// One of the two alphabets a key may start with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alphabet {
    /// A–Z
    Latin,
    /// А–Я and Ё
    Cyrillic,
}

impl Alphabet {
    /// Returns the letters of this alphabet in hash order.
    pub fn letters(self) -> &'static str {
        match self {
            Self::Latin => LATIN,
            Self::Cyrillic => CYRILLIC,
        }
    }

    /// Returns the number of letters, which is also the hash base.
    pub fn size(self) -> usize {
        match self {
            Self::Latin => 26,
            Self::Cyrillic => 33,
        }
    }

    /// Returns the zero-based position of `ch` in this alphabet, if present.
    pub fn position(self, ch: char) -> Option<usize> {
        self.letters().chars().position(|letter| letter == ch)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latin => f.write_str("Latin"),
            Self::Cyrillic => f.write_str("Cyrillic"),
        }
    }
}

/// Classifies an already uppercased character.
///
/// # Arguments
///
/// * `ch` - The character to classify.
/// * `position` - Where the character sits in the key, carried into the error.
///
/// # Returns
///
/// The alphabet the character belongs to and its index within it, or
/// `AlphabetTableError::UnsupportedCharacter` when it belongs to neither.
pub fn classify(ch: char, position: usize) -> Result<(Alphabet, usize)> {
    [Alphabet::Cyrillic, Alphabet::Latin]
        .into_iter()
        .find_map(|alphabet| alphabet.position(ch).map(|index| (alphabet, index)))
        .ok_or(AlphabetTableError::UnsupportedCharacter {
            character: ch,
            position,
        })
}
