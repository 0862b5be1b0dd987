//! The letters round: find the longest words spelt from a set of letters

mod core;
mod errors;

pub use core::{WordMatch, find_words, is_valid, load_word_list, normalise_letters};
pub use errors::LettersError;

/// Word list read when none is given
pub const WORD_LIST_DEFAULT: &str = "yawl.txt";
