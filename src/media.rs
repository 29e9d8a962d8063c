//! Media query hooks for deterministic breakpoint checks in tests

use crate::Viewport;

/// Result of evaluating a media query string
#[derive(Debug, Clone, PartialEq)]
pub struct MediaQueryList {
    /// The query as given
    pub media: String,
    /// Whether the query matched
    pub matches: bool,
}

pub trait MediaQueries: Send + Sync {
    fn match_media(&self, query: &str) -> MediaQueryList;
}

/// Evaluates `(min-width: <N>px)` queries against a fixed viewport width.
/// Queries it does not recognize evaluate to non-matching.
pub struct ViewportMediaQueries {
    viewport: Viewport,
}

impl ViewportMediaQueries {
    pub fn new(viewport: Viewport) -> Self {
        ViewportMediaQueries { viewport }
    }
}

impl MediaQueries for ViewportMediaQueries {
    fn match_media(&self, query: &str) -> MediaQueryList {
        let matches = parse_min_width(query)
            .map(|w| self.viewport.width >= w)
            .unwrap_or(false);
        MediaQueryList {
            media: query.to_string(),
            matches,
        }
    }
}

/// Stub that reports every query as non-matching. Suites running against
/// it assert breakpoint-prefixed classes as source tokens, never as
/// applied style.
pub struct StaticMediaQueries;

impl StaticMediaQueries {
    pub fn new() -> Self {
        StaticMediaQueries
    }
}

impl Default for StaticMediaQueries {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaQueries for StaticMediaQueries {
    fn match_media(&self, query: &str) -> MediaQueryList {
        MediaQueryList {
            media: query.to_string(),
            matches: false,
        }
    }
}

// Parse the pixel value out of a "(min-width: 768px)" query
fn parse_min_width(query: &str) -> Option<u32> {
    let (_, rest) = query.split_once("min-width")?;
    let rest = rest.trim_start().strip_prefix(':')?.trim_start();
    let end = rest.find("px")?;
    rest[..end].trim().parse().ok()
}
