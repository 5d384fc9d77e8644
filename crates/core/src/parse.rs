//! HTML parsing and typed element access.
//!
//! This module provides the [`Document`] and [`Element`] types. A document
//! is parsed once and then passed explicitly to the selector and classifier;
//! nothing queries a global document. Element "type" checks go through
//! [`ElementKind`] instead of comparing tag strings at every call site.
//!
//! # Example
//!
//! ```rust
//! use pagelift_core::parse::{Document, ElementKind};
//!
//! let html = r#"
//!     <html>
//!         <body>
//!             <h2>Title</h2>
//!             <p class="content">Paragraph</p>
//!         </body>
//!     </html>
//! "#;
//!
//! let doc = Document::parse(html).unwrap();
//! let headings = doc.select("h2").unwrap();
//! assert_eq!(headings[0].kind(), ElementKind::Heading(2));
//! ```

use scraper::{ElementRef, Html, Selector};

use crate::{PageliftError, Result, sanitize};

/// Structural role of an element, derived from its tag name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// `h1`..`h6`, carrying the numeric level.
    Heading(u8),
    Paragraph,
    /// `ul` (`ordered: false`) or `ol` (`ordered: true`).
    List { ordered: bool },
    ListItem,
    Preformatted,
    Code,
    Main,
    Article,
    Body,
    Other,
}

impl ElementKind {
    /// Classifies a tag name. Matching is case-insensitive.
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "h1" => Self::Heading(1),
            "h2" => Self::Heading(2),
            "h3" => Self::Heading(3),
            "h4" => Self::Heading(4),
            "h5" => Self::Heading(5),
            "h6" => Self::Heading(6),
            "p" => Self::Paragraph,
            "ul" => Self::List { ordered: false },
            "ol" => Self::List { ordered: true },
            "li" => Self::ListItem,
            "pre" => Self::Preformatted,
            "code" => Self::Code,
            "main" => Self::Main,
            "article" => Self::Article,
            "body" => Self::Body,
            _ => Self::Other,
        }
    }

    pub fn is_list(self) -> bool {
        matches!(self, Self::List { .. })
    }
}

/// Represents a parsed HTML document.
///
/// # Example
///
/// ```rust
/// use pagelift_core::parse::Document;
///
/// let html = "<html><head><title>Test</title></head><body><p>Hello</p></body></html>";
/// let doc = Document::parse(html).unwrap();
/// assert_eq!(doc.title(), Some("Test".to_string()));
/// ```
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string as-is.
    pub fn parse(html: &str) -> Result<Self> {
        let html = Html::parse_document(html);
        Ok(Self { html })
    }

    /// Parses HTML with non-content elements removed (see [`sanitize`]).
    pub fn parse_sanitized(html: &str) -> Result<Self> {
        sanitize::sanitize_document(html)
    }

    /// Serializes the document back to markup.
    pub fn as_string(&self) -> String {
        self.html.html()
    }

    /// Detaches every element matching `selector`, subtree included, and
    /// returns how many matched.
    ///
    /// # Errors
    ///
    /// Returns [`PageliftError::ExtractionFailed`] if the selector is invalid.
    pub fn remove(&mut self, selector: &str) -> Result<usize> {
        let sel = parse_selector(selector)?;
        let ids: Vec<_> = self.html.select(&sel).map(|el| el.id()).collect();

        for id in &ids {
            if let Some(mut node) = self.html.tree.get_mut(*id) {
                node.detach();
            }
        }
        Ok(ids.len())
    }

    /// Selects elements in document order using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`PageliftError::ExtractionFailed`] if the selector is invalid.
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel = parse_selector(selector)?;
        Ok(self.html.select(&sel).map(Element::new).collect())
    }

    /// Gets the first element matching a selector, if any.
    pub fn select_first(&'_ self, selector: &str) -> Result<Option<Element<'_>>> {
        let sel = parse_selector(selector)?;
        Ok(self.html.select(&sel).next().map(Element::new))
    }

    /// Gets the document's `<body>` element, falling back to the root element
    /// for fragments the parser could not place in a body.
    pub fn body(&'_ self) -> Element<'_> {
        match self.select_first("body") {
            Ok(Some(body)) => body,
            _ => Element::new(self.html.root_element()),
        }
    }

    /// Gets the raw text of the first `<title>` element.
    pub fn title(&self) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        self.html
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>())
    }

    /// Gets all text content from the document.
    pub fn text_content(&self) -> String {
        self.html.root_element().text().collect()
    }
}

/// A typed wrapper around scraper's `ElementRef`.
///
/// # Example
///
/// ```rust
/// use pagelift_core::parse::Document;
///
/// let html = r#"<a href="https://example.com">Link text</a>"#;
/// let doc = Document::parse(html).unwrap();
/// let link = &doc.select("a").unwrap()[0];
///
/// assert_eq!(link.text(), "Link text");
/// assert_eq!(link.attr("href"), Some("https://example.com"));
/// ```
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: ElementRef<'a>,
}

impl<'a> Element<'a> {
    fn new(element: ElementRef<'a>) -> Self {
        Self { element }
    }

    /// Gets the structural kind of this element.
    pub fn kind(&self) -> ElementKind {
        ElementKind::from_tag(self.element.value().name())
    }

    /// Gets the lowercase tag name.
    pub fn tag_name(&self) -> String {
        self.element.value().name().to_lowercase()
    }

    /// Gets the value of an attribute.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.element.value().attr(name)
    }

    /// Whether the element carries `class` among its class tokens.
    pub fn has_class(&self, class: &str) -> bool {
        self.element.value().classes().any(|c| c == class)
    }

    /// Gets the `id` attribute.
    pub fn id(&self) -> Option<&str> {
        self.element.value().id()
    }

    /// Gets the concatenation of all text nodes within this element.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Gets the element's text while skipping every nested `ul`/`ol`
    /// subtree.
    ///
    /// ```rust
    /// use pagelift_core::parse::Document;
    ///
    /// let doc = Document::parse("<ul><li>A<ul><li>B</li></ul></li></ul>").unwrap();
    /// let items = doc.select("li").unwrap();
    /// assert_eq!(items[0].text_outside_lists(), "A");
    /// ```
    pub fn text_outside_lists(&self) -> String {
        let mut out = String::new();
        collect_text_outside_lists(self.element, &mut out);
        out
    }

    /// Gets the direct element children of this element.
    pub fn child_elements(&self) -> Vec<Element<'a>> {
        self.element.children().filter_map(ElementRef::wrap).map(Element::new).collect()
    }

    /// Selects descendant elements in document order.
    ///
    /// The element itself is never part of the result.
    ///
    /// # Errors
    ///
    /// Returns [`PageliftError::ExtractionFailed`] if the selector is invalid.
    pub fn select(&self, selector: &str) -> Result<Vec<Element<'a>>> {
        let sel = parse_selector(selector)?;
        let own_id = self.element.id();

        Ok(self
            .element
            .select(&sel)
            .filter(|el| el.id() != own_id)
            .map(Element::new)
            .collect())
    }
}

fn collect_text_outside_lists(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(child_el) = ElementRef::wrap(child)
            && !ElementKind::from_tag(child_el.value().name()).is_list()
        {
            collect_text_outside_lists(child_el, out);
        }
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| PageliftError::ExtractionFailed(format!("Invalid selector: {}", e)))
}
