// ABOUTME: Library module for the artifact-showcase program.
// ABOUTME: Contains the content loader, slide navigator, rendering and the serve/export bindings.

// Reexport modules
pub mod config;
pub mod content;
pub mod errors;
pub mod export;
pub mod lightbox;
pub mod links;
pub mod media;
pub mod navigator;
pub mod page;
pub mod render;
pub mod resources;
pub mod server;
pub mod utils;
pub mod viewer;
pub mod watch;

// Reexport common types and functions
pub use config::Config;
pub use content::{Artifact, ContentDescriptor, ContentSource, load_content};
pub use errors::{Result, ShowcaseError};
pub use export::{ExportConfig, export_slides};
pub use lightbox::{CloseTrigger, Lightbox};
pub use links::Links;
pub use media::{MediaKind, classify};
pub use navigator::{Direction, NavControls, NavigatorState, PaginationIndicator, Transition};
pub use page::{PageOptions, generate_html, write_html_to_file};
pub use render::{SlideBody, SlideView, render};
pub use resources::{Asset, AssetKind};
pub use server::{ServeConfig, serve};
pub use viewer::{Action, Key, LOAD_ERROR_MESSAGE, LoadState, Viewer};
pub use watch::watch_content;

#[cfg(test)]
mod tests;
