use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The selector you are trying to scrape for is invalid. Selector: {0}")]
    InvalidSelector(String),

    /// Every archive page except the very first carries a `rel="prev"` link;
    /// a page without one leaves the walk with no way backward.
    #[error("No previous-page navigation link on {url}")]
    MissingPrevLink { url: String },

    /// Neither the URL nor the document body yielded a page number.
    #[error("Could not resolve a page number for {url}")]
    UnresolvedPageNumber { url: String },

    /// A page request failed while no page number was known, so the walk
    /// cannot even skip backward by arithmetic.
    #[error("Failed to fetch {url} with no page number known: {source}")]
    PageFetch {
        url: String,
        source: reqwest::Error,
    },

    #[error("Could not parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Io Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Reqwest Error: {0}")]
    Reqwest(#[from] reqwest::Error),
}
