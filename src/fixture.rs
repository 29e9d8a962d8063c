//! Load-once fixture management for the page under test.
//!
//! The markup file is read exactly once per process and cached for the
//! remainder of the run. A failed read is logged and replaced with a
//! minimal fallback shell so the suite keeps running; checks that depend
//! on stone content then fail one by one instead of the harness crashing.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::{Error, Result};

/// Relative path of the markup document under test
pub const FIXTURE_PATH: &str = "pages/index.html";

/// Minimal document shell substituted when the fixture file cannot be
/// read. It parses cleanly but carries no stone content.
pub const FALLBACK_MARKUP: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>Zen Garden</title>
    <script src="https://cdn.tailwindcss.com"></script>
  </head>
  <body class="bg-stone-100">
    <section class="md:relative md:h-screen overflow-hidden"></section>
  </body>
</html>
"#;

static MARKUP: OnceLock<String> = OnceLock::new();

/// Read a markup file in a single attempt, as UTF-8.
pub fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::Fixture(format!("{}: {}", path.display(), e)))
}

/// Read a markup file, substituting the fallback shell when the read
/// fails. The failure is logged, never propagated.
pub fn read_or_fallback(path: &Path) -> String {
    match read(path) {
        Ok(markup) => markup,
        Err(e) => {
            log::error!("{}; substituting fallback markup", e);
            FALLBACK_MARKUP.to_string()
        }
    }
}

/// The cached markup under test. The file at [`FIXTURE_PATH`] is read on
/// first access; the result is shared for the rest of the process.
pub fn markup() -> &'static str {
    MARKUP
        .get_or_init(|| read_or_fallback(Path::new(FIXTURE_PATH)))
        .as_str()
}
