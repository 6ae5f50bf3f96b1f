//! Catalog engine for a small library: books, newspapers and the categories
//! attached to books, plus sample generation, search and sorting over them.

pub mod data;
pub mod diagnostic;
pub mod generate;
pub mod search;
pub mod sort;

pub use data::{Book, CatalogItem, Category, Newspaper};
pub use diagnostic::{ConsoleDiagnostics, Diagnostic, DiagnosticSink};
pub use generate::{
    generate_some_books, generate_some_newspapers, generate_some_newspapers_within,
    PublicationWindow,
};
pub use search::{
    find_by_name, get_book_by_name, get_book_by_name_and_author, get_newspaper_by_name,
};
pub use sort::{check_if_book_has_category, get_books_by_category, sort_newspapers_by_date};
