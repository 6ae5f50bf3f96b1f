/// A named tag that can be attached to books. The same category is usually
/// shared by many books through an `Rc<Category>`.
///
/// Two categories are equal when their names are equal, regardless of
/// whether they are the same instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Category {
    /// The name of the category, e.g. "Adventure". Stored exactly as given,
    /// so it may be missing or empty.
    name: Option<String>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Category { name: Some(name.into()) }
    }

    /// A category without any name. It can never be attached to a book.
    pub fn unnamed() -> Self {
        Category { name: None }
    }

    pub fn from_name(name: Option<String>) -> Self {
        Category { name }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether the category has a usable name, i.e. one that is present and
    /// non-empty.
    pub fn has_name(&self) -> bool {
        self.name.as_deref().is_some_and(|name| !name.is_empty())
    }
}
