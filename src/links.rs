// ABOUTME: Link schemes binding viewer actions to hrefs
// ABOUTME: Serves both the live server routes and the static export file names

use crate::lightbox::CloseTrigger;
use crate::navigator::{Direction, NavigatorState};
use crate::viewer::Action;

/// How rendered controls reach the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Links {
    /// Actions are routes on the local server.
    Server,
    /// Every navigator state is its own file; the lightbox is never shown.
    Export { base_name: String },
}

impl Links {
    /// Href that performs `action` from the navigator state `nav`, or `None`
    /// when the action has no target in this scheme.
    pub fn href(&self, action: &Action, nav: &NavigatorState) -> Option<String> {
        match self {
            Links::Server => Some(server_route(action)),
            Links::Export { base_name } => export_target(base_name, action, nav),
        }
    }

    pub fn export_file_name(base_name: &str, index: usize) -> String {
        format!("{}_{:04}.html", base_name, index + 1)
    }
}

fn server_route(action: &Action) -> String {
    match action {
        Action::Advance(Direction::Previous) => "/nav/prev".to_string(),
        Action::Advance(Direction::Next) => "/nav/next".to_string(),
        Action::JumpTo(index) => format!("/nav/goto/{}", index),
        Action::First => "/nav/first".to_string(),
        Action::Last => "/nav/last".to_string(),
        Action::Key(key) => format!("/key/{}", key.name()),
        Action::OpenLightbox(src) => {
            format!("/lightbox/open?src={}", urlencoding::encode(src))
        }
        Action::CloseLightbox(CloseTrigger::CloseButton) => "/lightbox/close".to_string(),
        Action::CloseLightbox(CloseTrigger::Backdrop) => "/lightbox/backdrop".to_string(),
        Action::CloseLightbox(CloseTrigger::EscapeKey) => "/key/Escape".to_string(),
    }
}

/// Run the action against a copy of the navigator and link to the page of
/// the state it lands on.
fn export_target(base_name: &str, action: &Action, nav: &NavigatorState) -> Option<String> {
    let mut target = *nav;
    let moved = match action {
        Action::Advance(direction) => target.advance(*direction),
        Action::JumpTo(index) => target.jump_to(*index).ok().flatten(),
        Action::First => target.first(),
        Action::Last => target.last(),
        Action::Key(key) => {
            return key
                .action(nav)
                .and_then(|action| export_target(base_name, &action, nav));
        }
        Action::OpenLightbox(src) => return Some(src.clone()),
        Action::CloseLightbox(_) => return None,
    };
    moved.map(|t| Links::export_file_name(base_name, t.to))
}
