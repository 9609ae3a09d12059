use std::path::{Path, PathBuf};

use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::Result;

/// Writes the image bytes to `{dir}/{num}_{basename(img_url)}`, overwriting
/// any file of the same name. The file is flushed before returning so the
/// bytes are durable before the walk advances.
pub(crate) async fn save_image(
    dir: &Path,
    num: &str,
    img_url: &str,
    bytes: &[u8],
) -> Result<PathBuf> {
    let path = dir.join(format!("{num}_{}", basename(img_url)));

    let mut file = File::create(&path).await?;
    file.write_all(bytes).await?;
    file.flush().await?;

    Ok(path)
}

fn basename(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}
