// ABOUTME: Static export module for the artifact-showcase application
// ABOUTME: Writes one linked HTML page per slide so the deck works without a server

use crate::content::{self, ContentDescriptor, ContentSource};
use crate::errors::Result;
use crate::links::Links;
use crate::page::{self, PageOptions};
use crate::resources::Asset;
use crate::utils;
use crate::viewer::{Action, LoadState, Viewer};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration for a static export
pub struct ExportConfig {
    pub source: ContentSource,
    pub output_dir: PathBuf,
    pub base_name: String,
    pub fetch_timeout: Duration,
    pub assets: Vec<Asset>,
    pub embed_resources: bool,
}

impl ExportConfig {
    fn page_options(&self) -> PageOptions {
        PageOptions {
            assets: self.assets.clone(),
            embed_resources: self.embed_resources,
            links: Links::Export {
                base_name: self.base_name.clone(),
            },
        }
    }
}

/// Load the content and write `<base_name>_0001.html`, ... plus an
/// `index.html` showing the first slide. When the content cannot be loaded
/// only `index.html` is written, carrying the error message.
pub fn export_slides(config: &ExportConfig) -> Result<Vec<PathBuf>> {
    info!("Exporting slides to {:?}", config.output_dir);
    utils::ensure_directory_exists(&config.output_dir)?;

    let mut viewer = Viewer::new();
    viewer.load(content::load_content(&config.source, config.fetch_timeout));

    let options = config.page_options();
    let mut output_files = Vec::new();

    if let LoadState::Failed = viewer.load_state() {
        warn!("Content failed to load, exporting the error page only");
        let index = config.output_dir.join("index.html");
        page::write_html_to_file(&page::generate_html(&viewer, &options), &index)?;
        output_files.push(index);
        return Ok(output_files);
    }

    let total = viewer.navigator().total_slides();
    for slide in 0..total {
        viewer.dispatch(Action::JumpTo(slide))?;
        let html = page::generate_html(&viewer, &options);

        let file_name = Links::export_file_name(&config.base_name, slide);
        let output_file = config.output_dir.join(&file_name);
        info!("Rendering {}", file_name);
        page::write_html_to_file(&html, &output_file)?;

        if slide == 0 {
            let index = config.output_dir.join("index.html");
            page::write_html_to_file(&html, &index)?;
            output_files.push(index);
        }
        output_files.push(output_file);
    }

    if let (Some(content), Some(base_dir)) = (viewer.content(), config.source.base_dir()) {
        let copied = copy_media(content, base_dir, &config.output_dir)?;
        info!("Copied {} media files", copied);
    }

    info!("Exported {} slides", total);
    Ok(output_files)
}

/// Copy local media referenced by the content next to the exported pages.
/// Remote references, absolute paths and paths escaping the content
/// directory are left alone.
fn copy_media(content: &ContentDescriptor, base_dir: &Path, output_dir: &Path) -> Result<usize> {
    let links = std::iter::once(content.intro_image.as_str())
        .chain(content.artifacts.iter().map(|a| a.link.as_str()));

    let mut copied = 0;
    for link in links {
        if link.starts_with("http://") || link.starts_with("https://") {
            continue;
        }
        let relative = Path::new(link);
        if !utils::is_contained_relative_path(relative) {
            warn!("Not copying media outside the content directory: {}", link);
            continue;
        }

        let from = base_dir.join(relative);
        if !from.is_file() {
            warn!("Referenced media not found: {:?}", from);
            continue;
        }
        let to = output_dir.join(relative);
        if from == to {
            continue;
        }
        utils::ensure_parent_directory_exists(&to)?;
        fs::copy(&from, &to)?;
        debug!("Copied {:?} -> {:?}", from, to);
        copied += 1;
    }
    Ok(copied)
}
