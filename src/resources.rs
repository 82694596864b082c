// ABOUTME: Asset handling for the artifact-showcase application
// ABOUTME: Attaches local or remote stylesheets and scripts to rendered pages

use crate::errors::{Result, ShowcaseError};
use log::{debug, warn};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Stylesheet,
    Script,
}

/// A stylesheet or script that can be either local or remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub path: String,
    pub kind: AssetKind,
    pub is_remote: bool,
}

impl Asset {
    /// Create a new Asset from a path string, which may be a file path or a URL.
    pub fn new(path: &str, kind: AssetKind) -> Self {
        let is_remote = path.starts_with("http://") || path.starts_with("https://");
        Self {
            path: path.to_string(),
            kind,
            is_remote,
        }
    }

    pub fn stylesheet(path: &str) -> Self {
        Self::new(path, AssetKind::Stylesheet)
    }

    pub fn script(path: &str) -> Self {
        Self::new(path, AssetKind::Script)
    }

    /// Read a local asset from the filesystem.
    fn read_local_content(&self) -> Result<String> {
        debug!("Reading local asset: {}", self.path);
        let path = Path::new(&self.path);
        if !path.exists() {
            return Err(ShowcaseError::PathNotFoundError(path.to_path_buf()));
        }
        Ok(fs::read_to_string(path)?)
    }

    /// HTML tag for the asset. Remote assets are always linked; local ones
    /// are inlined when `embed` is set.
    pub fn tag(&self, embed: bool) -> Result<String> {
        if self.is_remote || !embed {
            Ok(match self.kind {
                AssetKind::Stylesheet => format!(r#"<link rel="stylesheet" href="{}">"#, self.path),
                AssetKind::Script => format!(r#"<script src="{}"></script>"#, self.path),
            })
        } else {
            let content = self.read_local_content()?;
            Ok(match self.kind {
                AssetKind::Stylesheet => format!("<style>{}</style>", content),
                AssetKind::Script => format!("<script>{}</script>", content),
            })
        }
    }
}

/// Tags for every asset of `kind`, skipping the ones that fail to load.
pub fn tags_for(assets: &[Asset], kind: AssetKind, embed: bool) -> Vec<String> {
    assets
        .iter()
        .filter(|asset| asset.kind == kind)
        .filter_map(|asset| match asset.tag(embed) {
            Ok(tag) => Some(tag),
            Err(e) => {
                warn!("Failed to include asset {}: {}", asset.path, e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_remote_assets_are_linked() {
        let css = Asset::stylesheet("https://example.com/style.css");
        assert!(css.is_remote);
        assert_eq!(
            css.tag(true).unwrap(),
            r#"<link rel="stylesheet" href="https://example.com/style.css">"#
        );

        let js = Asset::script("https://example.com/script.js");
        assert_eq!(
            js.tag(true).unwrap(),
            r#"<script src="https://example.com/script.js"></script>"#
        );
    }

    #[test]
    fn test_local_asset_embedding() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(b"body { margin: 0; }")
            .expect("Failed to write temp file");
        let path = file.path().to_str().unwrap();

        let css = Asset::stylesheet(path);
        assert_eq!(css.tag(true).unwrap(), "<style>body { margin: 0; }</style>");
        assert_eq!(
            css.tag(false).unwrap(),
            format!(r#"<link rel="stylesheet" href="{}">"#, path)
        );
    }

    #[test]
    fn test_missing_local_asset_is_skipped() {
        let assets = vec![
            Asset::stylesheet("/no/such/style.css"),
            Asset::stylesheet("https://example.com/a.css"),
            Asset::script("https://example.com/a.js"),
        ];
        let tags = tags_for(&assets, AssetKind::Stylesheet, true);
        assert_eq!(tags.len(), 1);
        assert!(tags[0].contains("a.css"));
    }
}
