//! Parsed-document model over the raw markup string.
//!
//! A [`Page`] keeps both views of the fixture: the DOM tree for structural
//! queries and the raw source for utility-token checks. Parsing is total;
//! malformed input degrades to whatever tree the HTML parser recovers.

use scraper::{Html, Node, Selector};

use crate::error::{Error, Result};
use crate::PageSnapshot;

/// A parsed page plus the source it was parsed from
#[derive(Debug, Clone)]
pub struct Page {
    html: Html,
    source: String,
}

impl Page {
    /// Parse a markup string into a page. Never fails; the parser recovers
    /// from malformed input.
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
            source: source.to_string(),
        }
    }

    fn selector(selector: &str) -> Result<Selector> {
        Selector::parse(selector).map_err(|_| Error::Selector(selector.to_string()))
    }

    /// Name of the document type declaration, if the page carries one
    pub fn doctype_name(&self) -> Option<String> {
        self.html.tree.root().children().find_map(|node| match node.value() {
            Node::Doctype(doctype) => Some(doctype.name().to_string()),
            _ => None,
        })
    }

    /// Page title, empty when the document has none
    pub fn title(&self) -> String {
        let title = Selector::parse("title").unwrap();
        self.html
            .select(&title)
            .next()
            .map(|n| n.text().collect::<String>())
            .unwrap_or_default()
    }

    /// Language attribute of the root element
    pub fn lang(&self) -> Option<String> {
        self.html.root_element().value().attr("lang").map(str::to_string)
    }

    /// Concatenated text content of `<body>`
    pub fn body_text(&self) -> String {
        let body = Selector::parse("body").unwrap();
        self.html
            .select(&body)
            .next()
            .map(|b| b.text().collect::<String>())
            .unwrap_or_default()
    }

    /// Number of elements matching `selector`
    pub fn count(&self, selector: &str) -> Result<usize> {
        let sel = Self::selector(selector)?;
        Ok(self.html.select(&sel).count())
    }

    /// Whether at least one element matches `selector`
    pub fn exists(&self, selector: &str) -> Result<bool> {
        Ok(self.count(selector)? > 0)
    }

    /// Class list of the first element matching `selector`
    pub fn classes(&self, selector: &str) -> Result<Vec<String>> {
        let sel = Self::selector(selector)?;
        let element = self
            .html
            .select(&sel)
            .next()
            .ok_or_else(|| Error::NoMatch(selector.to_string()))?;
        Ok(element.value().classes().map(str::to_string).collect())
    }

    /// Whether the first element matching `selector` carries every one of
    /// the given classes
    pub fn has_classes(&self, selector: &str, classes: &[&str]) -> Result<bool> {
        let found = self.classes(selector)?;
        Ok(classes.iter().all(|c| found.iter().any(|f| f == c)))
    }

    /// Class lists of every element matching `selector`, in document order
    pub fn all_classes(&self, selector: &str) -> Result<Vec<Vec<String>>> {
        let sel = Self::selector(selector)?;
        Ok(self
            .html
            .select(&sel)
            .map(|e| e.value().classes().map(str::to_string).collect())
            .collect())
    }

    /// Trimmed text content of every element matching `selector`
    pub fn texts(&self, selector: &str) -> Result<Vec<String>> {
        let sel = Self::selector(selector)?;
        Ok(self
            .html
            .select(&sel)
            .map(|e| e.text().collect::<String>().trim().to_string())
            .collect())
    }

    /// Tag names of every element matching `selector`, in document order
    pub fn tag_names(&self, selector: &str) -> Result<Vec<String>> {
        let sel = Self::selector(selector)?;
        Ok(self
            .html
            .select(&sel)
            .map(|e| e.value().name().to_string())
            .collect())
    }

    /// Descendant `<div>` count for every element matching `selector`.
    /// Used to measure ripple nesting depth under a stone container.
    pub fn nested_div_counts(&self, selector: &str) -> Result<Vec<usize>> {
        let sel = Self::selector(selector)?;
        let div = Selector::parse("div").unwrap();
        Ok(self
            .html
            .select(&sel)
            .map(|e| e.select(&div).count())
            .collect())
    }

    /// Total number of elements in the tree
    pub fn element_count(&self) -> usize {
        let any = Selector::parse("*").unwrap();
        self.html.select(&any).count()
    }

    /// Produce a textual snapshot of the parsed page
    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            title: self.title(),
            lang: self.lang().unwrap_or_default(),
            text: self.body_text(),
        }
    }

    /// Raw markup the page was parsed from
    pub fn source(&self) -> &str {
        &self.source
    }
}
