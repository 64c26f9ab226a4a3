use scraper::{ElementRef, Selector};

use crate::error::ExtractError;
use crate::platform::Platform;

/// Visible text of an element: every text node trimmed, empty pieces dropped,
/// the rest concatenated with no separator.
pub fn stripped_text(el: ElementRef<'_>) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

/// A compiled selector paired with its source, so lookup failures can say
/// what was missing.
pub struct Sel {
    pub css: &'static str,
    pub selector: Selector,
}

impl Sel {
    /// Panics on an invalid selector; only called for the literals in this crate.
    pub fn new(css: &'static str) -> Self {
        Sel {
            css,
            selector: Selector::parse(css).unwrap(),
        }
    }
}

/// Lookup context for one container element of one platform.
#[derive(Clone, Copy)]
pub struct Scope<'a> {
    pub platform: Platform,
    pub container: &'static str,
    pub el: ElementRef<'a>,
}

impl<'a> Scope<'a> {
    pub fn new(platform: Platform, container: &Sel, el: ElementRef<'a>) -> Self {
        Scope {
            platform,
            container: container.css,
            el,
        }
    }

    /// First descendant matching `sel`; absent is a structural fault.
    pub fn one(&self, sel: &Sel) -> Result<ElementRef<'a>, ExtractError> {
        self.el
            .select(&sel.selector)
            .next()
            .ok_or(ExtractError::MissingElement {
                platform: self.platform,
                container: self.container,
                selector: sel.css,
            })
    }

    pub fn text_of(&self, sel: &Sel) -> Result<String, ExtractError> {
        self.one(sel).map(stripped_text)
    }

    /// Stripped text of every descendant matching `sel`, in document order.
    pub fn all_text(&self, sel: &Sel) -> Vec<String> {
        self.el.select(&sel.selector).map(stripped_text).collect()
    }

    /// Narrow the scope to `el`, keeping the platform and container for errors.
    pub fn within(&self, el: ElementRef<'a>) -> Scope<'a> {
        Scope { el, ..*self }
    }

    /// Attribute of the first descendant matching `sel`; a missing element or
    /// attribute is a structural fault.
    pub fn attr_of(&self, sel: &Sel, attribute: &'static str) -> Result<String, ExtractError> {
        self.one(sel)?
            .value()
            .attr(attribute)
            .map(str::to_string)
            .ok_or(ExtractError::MissingAttribute {
                platform: self.platform,
                selector: sel.css,
                attribute,
            })
    }
}
