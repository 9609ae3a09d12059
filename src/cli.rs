use std::path::PathBuf;

use clap::Parser;

use crate::Config;

#[derive(Parser)]
#[command(name = "comic-mirror")]
#[command(about = "Incrementally mirrors a paginated web comic archive", long_about = None)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Archive origin, e.g. https://xkcd.com
    #[arg(long)]
    pub basic_url: Option<String>,

    /// Page URL to resume from instead of the archive origin
    #[arg(long)]
    pub start_url: Option<String>,

    /// Directory the images are mirrored into
    #[arg(short, long)]
    pub dir_storage: Option<PathBuf>,

    /// Maximum number of downloads for this run
    #[arg(short = 'l', long)]
    pub download_limit: Option<usize>,
}

impl Cli {
    /// Overrides config-file values with whatever was given on the command line.
    pub fn apply(self, config: &mut Config) {
        if let Some(basic_url) = self.basic_url {
            config.basic_url = basic_url;
        }
        if self.start_url.is_some() {
            config.start_url = self.start_url;
        }
        if let Some(dir_storage) = self.dir_storage {
            config.dir_storage = dir_storage;
        }
        if let Some(download_limit) = self.download_limit {
            config.download_limit = download_limit;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "comic-mirror",
            "--basic-url",
            "https://comics.example",
            "--download-limit",
            "3",
        ]);
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config.basic_url, "https://comics.example");
        assert_eq!(config.download_limit, 3);
        // untouched fields keep their defaults
        assert_eq!(config.start_url, None);
    }
}
