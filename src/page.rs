// ABOUTME: Page assembly module for the artifact-showcase application
// ABOUTME: Builds the full HTML document with slides, controls, pagination and lightbox

use crate::errors::Result;
use crate::lightbox::CloseTrigger;
use crate::links::Links;
use crate::navigator::{Direction, NavigatorState};
use crate::resources::{self, Asset, AssetKind};
use crate::viewer::{Action, Key, LoadState, Viewer, LOAD_ERROR_MESSAGE};
use log::info;
use std::fs;
use std::path::Path;

const DEFAULT_TITLE: &str = "Artifacts";

/// Visibility rules the viewer depends on; everything visual is left to
/// attached stylesheets.
const BASE_STYLE: &str = ".slide{display:none}.slide.active{display:flex}\
.lightbox{display:none}.lightbox.active{display:flex}\
.nav-btn.disabled{pointer-events:none;opacity:.4}";

/// Follows the href stored on the body for the pressed key.
const KEYBOARD_SCRIPT: &str = r#"<script>
document.addEventListener("keydown", function (e) {
  var attrs = { ArrowLeft: "keyArrowLeft", ArrowRight: "keyArrowRight", Escape: "keyEscape" };
  var target = attrs[e.key] && document.body.dataset[attrs[e.key]];
  if (target) { window.location.href = target; }
});
</script>"#;

/// Options shared by every page rendered in a session.
#[derive(Debug, Clone)]
pub struct PageOptions {
    pub assets: Vec<Asset>,
    pub embed_resources: bool,
    pub links: Links,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            assets: Vec::new(),
            embed_resources: true,
            links: Links::Server,
        }
    }
}

/// Render the whole document for the viewer's current state.
pub fn generate_html(viewer: &Viewer, options: &PageOptions) -> String {
    let nav = viewer.navigator();
    let links = &options.links;
    let title = viewer
        .content()
        .map(|c| c.title.as_str())
        .unwrap_or(DEFAULT_TITLE);

    let mut html_doc = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html_doc.push_str("<meta charset=\"UTF-8\">\n");
    html_doc.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    html_doc.push_str(&format!("<title>{}</title>\n", title));
    html_doc.push_str(&format!("<style>{}</style>\n", BASE_STYLE));
    for tag in resources::tags_for(&options.assets, AssetKind::Stylesheet, options.embed_resources)
    {
        html_doc.push_str(&tag);
        html_doc.push('\n');
    }
    html_doc.push_str("</head>\n");

    html_doc.push_str(&format!("<body{}>\n", key_attributes(links, nav)));

    html_doc.push_str("<div id=\"slides-container\">\n");
    match viewer.load_state() {
        LoadState::Loaded(_) => {
            for slide in viewer.slides() {
                html_doc.push_str(&slide.to_html(links, nav));
            }
        }
        LoadState::Failed => {
            html_doc.push_str(&format!(
                "<div class=\"loading\">{}</div>\n",
                LOAD_ERROR_MESSAGE
            ));
        }
        LoadState::Unloaded => {
            html_doc.push_str("<div class=\"loading\">Loading content...</div>\n");
        }
    }
    html_doc.push_str("</div>\n");

    html_doc.push_str(&navigation_html(links, nav));
    html_doc.push_str(&pagination_html(links, nav));
    html_doc.push_str(&lightbox_html(viewer, links));

    html_doc.push_str(KEYBOARD_SCRIPT);
    html_doc.push('\n');
    for tag in resources::tags_for(&options.assets, AssetKind::Script, options.embed_resources) {
        html_doc.push_str(&tag);
        html_doc.push('\n');
    }

    html_doc.push_str("</body>\n</html>");
    html_doc
}

fn key_attributes(links: &Links, nav: &NavigatorState) -> String {
    [
        (Key::ArrowLeft, "data-key-arrow-left"),
        (Key::ArrowRight, "data-key-arrow-right"),
        (Key::Escape, "data-key-escape"),
    ]
    .iter()
    .filter(|(key, _)| key.action(nav).is_some())
    .filter_map(|(key, attr)| {
        links
            .href(&Action::Key(*key), nav)
            .map(|href| format!(" {}=\"{}\"", attr, href))
    })
    .collect()
}

/// The four navigation buttons; absent while nothing is loaded.
fn navigation_html(links: &Links, nav: &NavigatorState) -> String {
    let Some(controls) = nav.controls() else {
        return String::new();
    };

    let buttons = [
        ("firstBtn", "First", Action::First, controls.first_disabled),
        (
            "prevBtn",
            "Previous",
            Action::Advance(Direction::Previous),
            controls.prev_disabled,
        ),
        (
            "nextBtn",
            "Next",
            Action::Advance(Direction::Next),
            controls.next_disabled,
        ),
        ("lastBtn", "Last", Action::Last, controls.last_disabled),
    ];

    let mut html = String::from("<nav class=\"navigation\">\n");
    for (id, label, action, disabled) in buttons {
        let href = if disabled {
            None
        } else {
            links.href(&action, nav)
        };
        match href {
            Some(href) => html.push_str(&format!(
                "<a id=\"{}\" class=\"nav-btn\" href=\"{}\">{}</a>\n",
                id, href, label
            )),
            None => html.push_str(&format!(
                "<a id=\"{}\" class=\"nav-btn disabled\" aria-disabled=\"true\">{}</a>\n",
                id, label
            )),
        }
    }
    html.push_str("</nav>\n");
    html
}

fn pagination_html(links: &Links, nav: &NavigatorState) -> String {
    let mut html = String::from("<div id=\"pagination\">\n");
    for indicator in nav.pagination() {
        let class = if indicator.active {
            "pagination-number active"
        } else {
            "pagination-number"
        };
        let href = links
            .href(&Action::JumpTo(indicator.index), nav)
            .map(|href| format!(" href=\"{}\"", href))
            .unwrap_or_default();
        html.push_str(&format!(
            "<a class=\"{}\"{}>{}</a>\n",
            class, href, indicator.number
        ));
    }
    html.push_str("</div>\n");
    html
}

fn lightbox_html(viewer: &Viewer, links: &Links) -> String {
    let nav = viewer.navigator();
    let lightbox = viewer.lightbox();
    let class = if lightbox.is_shown() {
        "lightbox active"
    } else {
        "lightbox"
    };

    let mut html = format!("<div id=\"imageLightbox\" class=\"{}\">\n", class);
    if let Some(href) = links.href(&Action::CloseLightbox(CloseTrigger::Backdrop), nav) {
        html.push_str(&format!(
            "<a class=\"lightbox-backdrop\" href=\"{}\"></a>\n",
            href
        ));
    }
    if let Some(href) = links.href(&Action::CloseLightbox(CloseTrigger::CloseButton), nav) {
        html.push_str(&format!(
            "<a id=\"closeLightbox\" class=\"lightbox-close\" href=\"{}\">&times;</a>\n",
            href
        ));
    }
    html.push_str(&format!(
        "<img id=\"lightboxImage\" src=\"{}\" alt=\"\">\n",
        lightbox.src().unwrap_or_default()
    ));
    html.push_str("</div>\n");
    html
}

/// Utility function to write a rendered page to a file
pub fn write_html_to_file(html_content: &str, output_path: &Path) -> Result<()> {
    info!("Writing HTML to file: {:?}", output_path);

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(output_path, html_content)?;
    Ok(())
}
