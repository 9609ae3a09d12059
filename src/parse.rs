//! Page-number resolution and navigation extraction from fetched pages.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};

use crate::{Error, Result};

/// Numeric permanent-link shape: optional scheme, any prefix, then a final
/// path segment of 1-4 decimal digits with an optional trailing slash.
static PAGE_NUM_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:https?://)?.*/(\d{1,4})/?$").expect("page number pattern is a valid regex")
});

/// A resolved page number: the digit string exactly as captured (the dedup
/// key) plus its numeric value for backward arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PageNum {
    text: String,
    value: u32,
}

impl PageNum {
    fn parse(text: &str) -> Option<Self> {
        let value = text.parse().ok()?;
        Some(Self {
            text: text.to_string(),
            value,
        })
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.text
    }

    pub(crate) fn value(&self) -> u32 {
        self.value
    }
}

/// Extracts the page number from a URL like `{base}/{number}/`.
/// `None` for URLs without a numeric final segment, e.g. the archive root.
pub(crate) fn num_from_url(url: &str) -> Option<PageNum> {
    let caps = PAGE_NUM_PATTERN.captures(url)?;
    PageNum::parse(&caps[1])
}

/// Falls back to the permanent link embedded in the page: the first
/// hyperlink in document order whose target looks like a numeric page URL,
/// absolute or relative. First match wins, even in markup where several
/// numeric-looking links would make that ambiguous.
pub(crate) fn num_from_document(doc: &Html) -> Result<Option<PageNum>> {
    let anchors = create_selector("a")?;

    for element in doc.select(&anchors) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        if let Some(num) = num_from_url(href) {
            return Ok(Some(num));
        }
    }
    Ok(None)
}

/// The target of the `rel="prev"` navigation link with path delimiters
/// stripped: the previous page number, or the bare terminal marker on the
/// archive's first page. Its absence is fatal for the walk.
pub(crate) fn prev_page_token(doc: &Html, page_url: &str) -> Result<String> {
    let prev = create_selector(r#"a[rel="prev"]"#)?;

    let href = doc
        .select(&prev)
        .next()
        .and_then(|element| element.value().attr("href"))
        .ok_or_else(|| Error::MissingPrevLink {
            url: page_url.to_string(),
        })?;
    Ok(href.replace('/', ""))
}

/// The comic image inside the `#comic` container, scheme-qualified (the
/// markup carries scheme-relative sources). `None` on pages without a
/// downloadable image.
pub(crate) fn image_url(doc: &Html) -> Result<Option<String>> {
    let img = create_selector("#comic img")?;

    let Some(src) = doc
        .select(&img)
        .next()
        .and_then(|element| element.value().attr("src"))
    else {
        return Ok(None);
    };

    let url = if src.starts_with("//") {
        format!("https:{src}")
    } else {
        src.to_string()
    };
    Ok(Some(url))
}

#[inline]
fn create_selector(sel_str: &str) -> Result<Selector> {
    Selector::parse(sel_str).map_err(|_| Error::InvalidSelector(sel_str.into()))
}
