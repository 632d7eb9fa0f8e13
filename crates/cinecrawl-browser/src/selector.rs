use std::fmt;

use fantoccini::Locator;

/// A structural query against the current page.
///
/// Selectors are fixed at compile time — the site contract is a set of
/// constants — so the variants borrow `'static` strings and the type stays
/// `Copy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    Css(&'static str),
    XPath(&'static str),
}

impl Selector {
    pub fn locator(self) -> Locator<'static> {
        match self {
            Selector::Css(css) => Locator::Css(css),
            Selector::XPath(xpath) => Locator::XPath(xpath),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Css(css) => write!(f, "css `{css}`"),
            Selector::XPath(xpath) => write!(f, "xpath `{xpath}`"),
        }
    }
}
