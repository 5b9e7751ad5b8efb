//! `bundle` command: write the self-initializing runtime script.

use std::path::Path;

use anyhow::Result;

use super::common::write_output;
use crate::config::StudioConfig;
use crate::embed::bundle;

pub fn write_bundle(config: &StudioConfig, output: Option<&Path>) -> Result<()> {
    write_output(output, &bundle(config.embed.minify), "bundle")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_minified_bundle_is_smaller() {
        let dir = TempDir::new().unwrap();
        let plain_path = dir.path().join("share-buttons.js");
        let min_path = dir.path().join("share-buttons.min.js");

        let mut config = StudioConfig::default();
        write_bundle(&config, Some(&plain_path)).unwrap();
        config.embed.minify = true;
        write_bundle(&config, Some(&min_path)).unwrap();

        let plain = std::fs::read_to_string(plain_path).unwrap();
        let minified = std::fs::read_to_string(min_path).unwrap();
        assert!(minified.len() < plain.len());
    }
}
