use std::rc::Rc;

use log::warn;

use super::category::Category;
use crate::diagnostic::{Diagnostic, DiagnosticSink};

/// A book in the catalog. The category is the only part of a book that can
/// change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    name: String,
    author: String,
    /// The category this book belongs to, if any. Only categories with a
    /// usable name are ever stored here.
    category: Option<Rc<Category>>,
}

impl Book {
    pub fn new(name: impl Into<String>, author: impl Into<String>) -> Self {
        Book { name: name.into(), author: author.into(), category: None }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn category(&self) -> Option<&Category> {
        self.category.as_deref()
    }

    /// Attaches the category to this book. A category without a usable name
    /// is rejected and the previously attached category (if any) is kept.
    pub fn try_set_category(&mut self, category: Rc<Category>) -> Result<(), Diagnostic> {
        if !category.has_name() {
            warn!("event=set_category module=data status=rejected book={:?}", self.name);
            return Err(Diagnostic::CategoryHasNoName);
        }
        self.category = Some(category);
        Ok(())
    }

    /// Same as `try_set_category`, but a rejection is reported to the given
    /// sink instead of being returned.
    pub fn set_category(&mut self, category: Rc<Category>, diagnostics: &mut impl DiagnosticSink) {
        if let Err(diagnostic) = self.try_set_category(category) {
            diagnostics.report(diagnostic);
        }
    }
}
