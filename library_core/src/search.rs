//! Lookups over an ordered collection. Matching is exact and case-sensitive,
//! and the first match in input order wins.

use crate::data::{Book, CatalogItem, Newspaper};

/// Returns the first item whose name is exactly `name`.
pub fn find_by_name<'a, T: CatalogItem>(name: &str, items: &'a [T]) -> Option<&'a T> {
    items.iter().find(|item| item.name() == name)
}

pub fn get_book_by_name<'a>(name: &str, books: &'a [Book]) -> Option<&'a Book> {
    find_by_name(name, books)
}

/// Returns the first book matching both `name` and `author`. Any book found
/// here would also satisfy `get_book_by_name` with the same name.
pub fn get_book_by_name_and_author<'a>(
    name: &str,
    author: &str,
    books: &'a [Book],
) -> Option<&'a Book> {
    books.iter().find(|book| book.name() == name && book.author() == author)
}

pub fn get_newspaper_by_name<'a>(name: &str, newspapers: &'a [Newspaper]) -> Option<&'a Newspaper> {
    find_by_name(name, newspapers)
}
