use log::debug;

use crate::{
    data::{Book, Category, Newspaper},
    diagnostic::{Diagnostic, DiagnosticSink},
};

/// Sorts the newspapers in place, earliest first. Newspapers with the same
/// date may end up in any order relative to each other.
pub fn sort_newspapers_by_date(newspapers: &mut [Newspaper]) {
    newspapers.sort_unstable_by_key(Newspaper::date);
}

/// Newspapers have no categories, so they can never take part in sorting by
/// category. This only reports that fact; the newspaper is left untouched.
pub fn check_if_book_has_category(_newspaper: &Newspaper, diagnostics: &mut impl DiagnosticSink) {
    diagnostics.report(Diagnostic::NewspapersHaveNoCategories);
}

/// Returns the books whose category has the same name as `category`, in the
/// order they appear in `books`. If there are none, this is reported to the
/// sink and the result is empty. A category without a name matches nothing.
pub fn get_books_by_category<'a>(
    books: &'a [Book],
    category: &Category,
    diagnostics: &mut impl DiagnosticSink,
) -> Vec<&'a Book> {
    let matching: Vec<&Book> = if category.has_name() {
        books
            .iter()
            .filter(|book| book.category().is_some_and(|c| c.name() == category.name()))
            .collect()
    } else {
        Vec::new()
    };

    debug!(
        "event=filter_by_category module=sort category={:?} matched={}",
        category.name(),
        matching.len()
    );
    if matching.is_empty() {
        diagnostics.report(Diagnostic::NoBooksWithCategory);
    }
    matching
}
