//! Terminal output formatting
//!
//! Colored tiles, keyboard and reports for the CLI.

pub mod display;
pub mod formatters;

pub use display::{
    print_banner, print_board, print_dictionary_report, print_feedback, print_game_result,
    print_solution, print_word_check,
};
