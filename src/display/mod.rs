//! Display formatting for terminal output

pub mod book;

pub use book::{
    format_book_details, format_book_list, format_book_summary, format_most_borrowed,
    format_most_borrowed_table,
};
