// ABOUTME: Content loading for the artifact-showcase application
// ABOUTME: Fetches and parses the JSON content descriptor from a file or URL

use crate::errors::{Result, ShowcaseError};
use log::info;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// The whole slideshow: a title slide followed by one slide per artifact.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDescriptor {
    pub intro_image: String,
    pub title: String,
    /// Paragraphs separated by a blank line.
    pub intro: String,
    pub artifacts: Vec<Artifact>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Artifact {
    pub link: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub citations: Vec<String>,
}

impl ContentDescriptor {
    /// Parse a descriptor from JSON text.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Number of slides this descriptor produces.
    pub fn slide_count(&self) -> usize {
        self.artifacts.len() + 1
    }

    pub fn intro_paragraphs(&self) -> impl Iterator<Item = &str> {
        self.intro.split("\n\n")
    }
}

/// Where the content descriptor lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    Local(PathBuf),
    Remote(Url),
}

impl ContentSource {
    /// Interpret a location string; `http://` and `https://` are remote,
    /// everything else is a filesystem path.
    pub fn parse(location: &str) -> Result<Self> {
        if location.starts_with("http://") || location.starts_with("https://") {
            let url = Url::parse(location)
                .map_err(|e| ShowcaseError::InvalidResourcePath(format!("{}: {}", location, e)))?;
            Ok(ContentSource::Remote(url))
        } else {
            Ok(ContentSource::Local(PathBuf::from(location)))
        }
    }

    pub fn location(&self) -> String {
        match self {
            ContentSource::Local(path) => path.display().to_string(),
            ContentSource::Remote(url) => url.to_string(),
        }
    }

    /// Directory that relative media references resolve against, if local.
    pub fn base_dir(&self) -> Option<&Path> {
        match self {
            ContentSource::Local(path) => match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => Some(parent),
                _ => Some(Path::new(".")),
            },
            ContentSource::Remote(_) => None,
        }
    }
}

/// Fetch and parse the content descriptor once. Every failure, whether
/// transport or parse, comes back as `ContentLoadFailure`; there is no retry.
pub fn load_content(source: &ContentSource, timeout: Duration) -> Result<ContentDescriptor> {
    let location = source.location();
    info!("Loading content from {}", location);

    let text = match source {
        ContentSource::Local(path) => {
            fs::read_to_string(path).map_err(|e| ShowcaseError::content_load(&location, e))?
        }
        ContentSource::Remote(url) => fetch_remote(url, timeout)
            .map_err(|e| ShowcaseError::content_load(&location, e))?,
    };

    let content = ContentDescriptor::from_json(&text)
        .map_err(|e| ShowcaseError::content_load(&location, e))?;

    info!(
        "Loaded \"{}\" with {} artifacts",
        content.title,
        content.artifacts.len()
    );
    Ok(content)
}

fn fetch_remote(url: &Url, timeout: Duration) -> Result<String> {
    let client = Client::builder().timeout(timeout).build()?;
    let response = client.get(url.as_str()).send()?;
    if !response.status().is_success() {
        return Err(ShowcaseError::ValidationError(format!(
            "HTTP error: {}",
            response.status()
        )));
    }
    Ok(response.text()?)
}
