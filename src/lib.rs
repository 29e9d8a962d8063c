//! Zen Garden
//!
//! A static decorative page (three stones with ripple rings, vertical
//! corner text, and a curved background) plus the harness that verifies
//! its markup.
//!
//! The page lives at `pages/index.html`. The library reads that file once
//! per process, re-parses it into a fresh document for every test, and
//! exposes the query surface the assertion suites are written against:
//! selector counts, class membership, text extraction, and raw-source
//! token access for utility classes that only exist as class names.
//!
//! # Example
//!
//! ```
//! use zengarden::TestDom;
//!
//! let dom = TestDom::fresh();
//! assert_eq!(dom.page().title(), "Zen Garden");
//! assert_eq!(dom.lang(), "en");
//! assert!(!dom.match_media("(min-width: 768px)").matches);
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod fixture;
pub mod harness;
pub mod media;
pub mod page;

pub use harness::TestDom;
pub use page::Page;

/// Viewport dimensions used when evaluating media queries
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

/// A textual snapshot of a parsed page
///
/// Returned by [`Page::snapshot`]; a simple representation of the page
/// suitable for textual tests and quick inspection.
#[derive(Debug, Clone)]
pub struct PageSnapshot {
    /// Page title
    pub title: String,
    /// Document language declared on the root element
    pub lang: String,
    /// Extracted body text
    pub text: String,
}

/// Parse the cached fixture markup into a fresh page
pub fn load_page() -> Page {
    Page::parse(fixture::markup())
}
