mod book;
mod category;
mod newspaper;

pub use book::Book;
pub use category::Category;
pub use newspaper::Newspaper;

/// Anything the catalog holds. The only capability shared by every kind of
/// item is having a name; sorting and category filtering are specific to
/// each kind.
pub trait CatalogItem {
    fn name(&self) -> &str;
}

impl CatalogItem for Book {
    fn name(&self) -> &str {
        Book::name(self)
    }
}

impl CatalogItem for Newspaper {
    fn name(&self) -> &str {
        Newspaper::name(self)
    }
}
