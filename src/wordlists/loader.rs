//! Word list tokenizing and loading utilities
//!
//! Word lists are plain text: whitespace-separated tokens, one word per line in practice.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Split raw list text into lowercase tokens, in order of appearance
///
/// # Examples
/// ```
/// use termo::wordlists::loader::tokenize;
///
/// let tokens: Vec<String> = tokenize("Casa  TERMO\nfácil\r\n").collect();
/// assert_eq!(tokens, vec!["casa", "termo", "fácil"]);
/// ```
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().map(str::to_lowercase)
}

/// Read a word list file as raw text
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn read_list<P: AsRef<Path>>(path: P) -> io::Result<String> {
    fs::read_to_string(path)
}

/// Convert embedded string slice to Word vector, skipping invalid entries
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
