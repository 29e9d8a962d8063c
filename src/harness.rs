//! Per-test document reset.
//!
//! Every check observes an identical, freshly parsed DOM: the cached
//! markup is re-parsed in full before each use. Isolation comes from the
//! full rebuild, not from cloning or rolling back mutations left by a
//! previous test.

use crate::fixture;
use crate::media::{MediaQueries, MediaQueryList, StaticMediaQueries};
use crate::page::Page;

/// Language the document is pinned to on every rebuild
pub const DOCUMENT_LANG: &str = "en";

/// A freshly rebuilt document plus the deterministic media stub
pub struct TestDom {
    page: Page,
    media: StaticMediaQueries,
}

impl TestDom {
    /// Rebuild the document from the cached markup.
    pub fn fresh() -> Self {
        TestDom {
            page: Page::parse(fixture::markup()),
            media: StaticMediaQueries::new(),
        }
    }

    /// The rebuilt page
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// The document language. Pinned so suites observe a stable value
    /// even when the fixture omits the attribute.
    pub fn lang(&self) -> &'static str {
        DOCUMENT_LANG
    }

    /// Raw markup under test, for utility-token checks
    pub fn source(&self) -> &'static str {
        fixture::markup()
    }

    /// Evaluate a media query against the harness stub. Deterministically
    /// non-matching for every query.
    pub fn match_media(&self, query: &str) -> MediaQueryList {
        self.media.match_media(query)
    }
}
