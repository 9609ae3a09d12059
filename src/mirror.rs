//! The backward traversal over the archive, newest page toward the origin.

use std::fs;

use scraper::Html;
use tracing::{debug, warn};

use crate::inventory;
use crate::parse::{image_url, num_from_document, num_from_url, prev_page_token};
use crate::request::{build_client, fetch_image, fetch_page};
use crate::storage::save_image;
use crate::{progress, Config, Error, Result};

/// The archive marks the end of the walk by linking "previous" to this
/// token on its first page.
const STOP_MARKER: char = '#';

/// Walks the archive backward from the configured start page, downloading
/// every image whose page number is not already in the local inventory.
/// Returns the number of files written in this run.
///
/// One page request and at most one image request per iteration, strictly
/// in sequence. Pages whose number is known from the URL alone are skipped
/// without any request at all.
pub async fn mirror_archive(config: &Config) -> Result<usize> {
    fs::create_dir_all(&config.dir_storage)?;
    let local_storage = inventory::scan(&config.dir_storage)?;
    debug!(
        files = local_storage.len(),
        dir = %config.dir_storage.display(),
        "local inventory loaded"
    );

    let client = build_client()?;
    let mut page_url = config.start_url().to_string();
    let mut downloaded = 0;

    while !page_url.ends_with(STOP_MARKER) && downloaded < config.download_limit {
        let num = num_from_url(&page_url);

        // Number known from the URL alone: stop at the origin, or skip an
        // already-mirrored page without issuing any request.
        if let Some(num) = &num {
            if num.value() == 0 {
                break;
            }
            if local_storage.contains_key(num.as_str()) {
                page_url = prev_url_by_number(&config.basic_url, num.value());
                continue;
            }
        }

        let body = match fetch_page(&client, &page_url).await {
            Ok(body) => body,
            Err(err) => match &num {
                // Single attempt only: log and step backward by arithmetic.
                Some(num) => {
                    warn!(num = num.as_str(), url = %page_url, %err, "page request failed, skipping");
                    page_url = prev_url_by_number(&config.basic_url, num.value());
                    continue;
                }
                // Without a number there is nothing to decrement.
                None => {
                    return Err(Error::PageFetch {
                        url: page_url,
                        source: err,
                    })
                }
            },
        };
        let doc = Html::parse_document(&body);

        let num = match num {
            Some(num) => num,
            None => {
                num_from_document(&doc)?.ok_or_else(|| Error::UnresolvedPageNumber {
                    url: page_url.clone(),
                })?
            }
        };
        if num.value() == 0 {
            break;
        }

        // The URL did not carry the number, but the page is already local:
        // advance through the page's own navigation link.
        if local_storage.contains_key(num.as_str()) {
            page_url = prev_url_by_token(&config.basic_url, &prev_page_token(&doc, &page_url)?);
            continue;
        }

        let Some(img_url) = image_url(&doc)? else {
            // Nothing to download on this page.
            debug!(num = num.as_str(), url = %page_url, "no comic image, skipping");
            page_url = prev_url_by_number(&config.basic_url, num.value());
            continue;
        };

        // Best effort: a failed image request is logged and whatever body
        // was received (possibly nothing) is persisted, the walk goes on.
        let bytes = match fetch_image(&client, &img_url).await {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(num = num.as_str(), img = %img_url, %err, "image request failed");
                Vec::new()
            }
        };

        let path = save_image(&config.dir_storage, num.as_str(), &img_url, &bytes).await?;

        downloaded += 1;
        debug!(
            done = downloaded,
            num = num.as_str(),
            img = %img_url,
            page = %page_url,
            file = %path.display(),
            "saved"
        );
        progress!(downloaded, num.as_str(), img_url, page_url, path.display());

        page_url = prev_url_by_token(&config.basic_url, &prev_page_token(&doc, &page_url)?);
    }

    Ok(downloaded)
}

/// Previous-page URL by arithmetic, for iterations where the number came
/// from the URL itself and no document is at hand.
fn prev_url_by_number(basic_url: &str, value: u32) -> String {
    format!("{basic_url}/{}", value.saturating_sub(1))
}

/// Previous-page URL from the navigation-link token. On the first page the
/// token is the terminal marker, which ends the walk at the loop head.
fn prev_url_by_token(basic_url: &str, token: &str) -> String {
    format!("{basic_url}/{token}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_advance_decrements_the_number() {
        assert_eq!(
            prev_url_by_number("https://xkcd.com", 614),
            "https://xkcd.com/613"
        );
    }

    #[test]
    fn token_advance_keeps_the_terminal_marker() {
        assert_eq!(prev_url_by_token("https://xkcd.com", "#"), "https://xkcd.com/#");
    }
}
