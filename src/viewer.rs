// ABOUTME: Viewer component owning all mutable slideshow state
// ABOUTME: Dispatches clicks and key presses onto the navigator and lightbox

use crate::content::ContentDescriptor;
use crate::errors::Result;
use crate::lightbox::{CloseTrigger, Lightbox};
use crate::navigator::{Direction, NavigatorState, Transition};
use crate::render::{self, SlideView};
use log::{error, info, warn};

/// Message shown in place of the slides when the content cannot be loaded.
pub const LOAD_ERROR_MESSAGE: &str =
    "Error loading content. Please ensure content.json is in the same directory.";

/// Keys the viewer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
}

impl Key {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            "Escape" => Some(Key::Escape),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Key::ArrowLeft => "ArrowLeft",
            Key::ArrowRight => "ArrowRight",
            Key::Escape => "Escape",
        }
    }

    /// The action this key triggers in the given navigator state. Arrow keys
    /// stop at either end instead of wrapping like the buttons do.
    pub fn action(&self, nav: &NavigatorState) -> Option<Action> {
        match self {
            Key::ArrowLeft if nav.is_loaded() && !nav.is_first() => {
                Some(Action::Advance(Direction::Previous))
            }
            Key::ArrowRight if nav.is_loaded() && !nav.is_last() => {
                Some(Action::Advance(Direction::Next))
            }
            Key::Escape => Some(Action::CloseLightbox(CloseTrigger::EscapeKey)),
            _ => None,
        }
    }
}

/// A user interaction the viewer understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Advance(Direction),
    JumpTo(usize),
    First,
    Last,
    Key(Key),
    OpenLightbox(String),
    CloseLightbox(CloseTrigger),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Unloaded,
    Loaded(ContentDescriptor),
    Failed,
}

#[derive(Debug, Default)]
pub struct Viewer {
    load_state: LoadState,
    navigator: NavigatorState,
    lightbox: Lightbox,
}

impl Viewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the outcome of the initial load. A failure is logged and
    /// rendered as the error message; it never propagates further.
    pub fn load(&mut self, result: Result<ContentDescriptor>) {
        match result {
            Ok(content) => {
                self.navigator = NavigatorState::new(content.slide_count());
                info!("Viewer ready with {} slides", content.slide_count());
                self.load_state = LoadState::Loaded(content);
            }
            Err(e) => self.fail(e),
        }
        self.lightbox = Lightbox::Hidden;
    }

    /// Replace the content after a change on disk, staying on the current
    /// slide when it still exists.
    pub fn reload(&mut self, result: Result<ContentDescriptor>) {
        match result {
            Ok(content) => {
                self.navigator = self.navigator.resized(content.slide_count());
                info!(
                    "Reloaded content, showing slide {} of {}",
                    self.navigator.current_slide() + 1,
                    content.slide_count()
                );
                self.load_state = LoadState::Loaded(content);
            }
            Err(e) => self.fail(e),
        }
        self.lightbox = Lightbox::Hidden;
    }

    fn fail(&mut self, err: crate::errors::ShowcaseError) {
        error!("Error loading content: {}", err);
        self.load_state = LoadState::Failed;
        self.navigator = NavigatorState::unloaded();
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn content(&self) -> Option<&ContentDescriptor> {
        match &self.load_state {
            LoadState::Loaded(content) => Some(content),
            _ => None,
        }
    }

    pub fn navigator(&self) -> &NavigatorState {
        &self.navigator
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    /// Slide views for the current state; empty unless content is loaded.
    pub fn slides(&self) -> Vec<SlideView> {
        self.content()
            .map(|content| render::render(content, &self.navigator))
            .unwrap_or_default()
    }

    /// Apply one action. Returns the slide transition it caused, if any.
    pub fn dispatch(&mut self, action: Action) -> Result<Option<Transition>> {
        let transition = match action {
            Action::Advance(direction) => self.navigator.advance(direction),
            Action::JumpTo(index) => self.navigator.jump_to(index)?,
            Action::First => self.navigator.first(),
            Action::Last => self.navigator.last(),
            Action::Key(key) => match key.action(&self.navigator) {
                Some(action) => return self.dispatch(action),
                None => None,
            },
            Action::OpenLightbox(src) => {
                if self.is_slide_image(&src) {
                    self.lightbox.open(src);
                } else {
                    warn!("Ignoring lightbox request for unknown image {}", src);
                }
                None
            }
            Action::CloseLightbox(trigger) => {
                self.lightbox.close(trigger);
                None
            }
        };
        Ok(transition)
    }

    /// Only images rendered inside slide media can be enlarged.
    fn is_slide_image(&self, src: &str) -> bool {
        self.slides()
            .iter()
            .any(|slide| slide.image_src() == Some(src))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Artifact;
    use crate::errors::ShowcaseError;

    fn content(artifacts: usize) -> ContentDescriptor {
        ContentDescriptor {
            intro_image: "intro.jpg".to_string(),
            title: "Deck".to_string(),
            intro: "Hello".to_string(),
            artifacts: (0..artifacts)
                .map(|i| Artifact {
                    link: format!("artifact{}.png", i),
                    title: format!("A{}", i),
                    description: "D".to_string(),
                    citations: vec![],
                })
                .collect(),
        }
    }

    fn loaded(artifacts: usize) -> Viewer {
        let mut viewer = Viewer::new();
        viewer.load(Ok(content(artifacts)));
        viewer
    }

    #[test]
    fn test_load_sets_slide_count() {
        let viewer = loaded(3);
        assert_eq!(viewer.navigator().total_slides(), 4);
        assert_eq!(viewer.navigator().current_slide(), 0);
        assert_eq!(viewer.slides().len(), 4);
    }

    #[test]
    fn test_failed_load_leaves_navigator_unloaded() {
        let mut viewer = Viewer::new();
        viewer.load(Err(ShowcaseError::content_load("content.json", "boom")));
        assert_eq!(viewer.load_state(), &LoadState::Failed);
        assert_eq!(viewer.navigator().total_slides(), 0);
        assert!(viewer.slides().is_empty());
        assert_eq!(viewer.dispatch(Action::Advance(Direction::Next)).unwrap(), None);
    }

    #[test]
    fn test_arrow_keys_do_not_wrap() {
        let mut viewer = loaded(2);
        assert_eq!(viewer.dispatch(Action::Key(Key::ArrowLeft)).unwrap(), None);
        assert_eq!(viewer.navigator().current_slide(), 0);

        viewer.dispatch(Action::Key(Key::ArrowRight)).unwrap();
        viewer.dispatch(Action::Key(Key::ArrowRight)).unwrap();
        assert_eq!(viewer.navigator().current_slide(), 2);
        assert_eq!(viewer.dispatch(Action::Key(Key::ArrowRight)).unwrap(), None);
        assert_eq!(viewer.navigator().current_slide(), 2);

        viewer.dispatch(Action::Key(Key::ArrowLeft)).unwrap();
        assert_eq!(viewer.navigator().current_slide(), 1);
    }

    #[test]
    fn test_buttons_wrap() {
        let mut viewer = loaded(2);
        viewer.dispatch(Action::Advance(Direction::Previous)).unwrap();
        assert_eq!(viewer.navigator().current_slide(), 2);
        viewer.dispatch(Action::Advance(Direction::Next)).unwrap();
        assert_eq!(viewer.navigator().current_slide(), 0);
    }

    #[test]
    fn test_first_last_and_jump() {
        let mut viewer = loaded(4);
        viewer.dispatch(Action::Last).unwrap();
        assert_eq!(viewer.navigator().current_slide(), 4);
        viewer.dispatch(Action::JumpTo(2)).unwrap();
        assert_eq!(viewer.navigator().current_slide(), 2);
        viewer.dispatch(Action::First).unwrap();
        assert_eq!(viewer.navigator().current_slide(), 0);
        assert!(viewer.dispatch(Action::JumpTo(9)).is_err());
        assert_eq!(viewer.navigator().current_slide(), 0);
    }

    #[test]
    fn test_lightbox_does_not_touch_navigation() {
        let mut viewer = loaded(1);
        viewer.dispatch(Action::JumpTo(1)).unwrap();
        viewer
            .dispatch(Action::OpenLightbox("artifact0.png".to_string()))
            .unwrap();
        assert_eq!(viewer.lightbox().src(), Some("artifact0.png"));
        assert_eq!(viewer.navigator().current_slide(), 1);

        viewer.dispatch(Action::Key(Key::Escape)).unwrap();
        assert!(!viewer.lightbox().is_shown());
        assert_eq!(viewer.navigator().current_slide(), 1);
    }

    #[test]
    fn test_lightbox_ignores_unknown_images() {
        let mut viewer = loaded(1);
        viewer
            .dispatch(Action::OpenLightbox("elsewhere.png".to_string()))
            .unwrap();
        assert!(!viewer.lightbox().is_shown());
    }

    #[test]
    fn test_reload_keeps_position_when_possible() {
        let mut viewer = loaded(3);
        viewer.dispatch(Action::JumpTo(2)).unwrap();
        viewer.reload(Ok(content(5)));
        assert_eq!(viewer.navigator().current_slide(), 2);
        viewer.reload(Ok(content(1)));
        assert_eq!(viewer.navigator().current_slide(), 0);
        assert_eq!(viewer.navigator().total_slides(), 2);
    }

    #[test]
    fn test_key_names() {
        for key in [Key::ArrowLeft, Key::ArrowRight, Key::Escape] {
            assert_eq!(Key::from_name(key.name()), Some(key));
        }
        assert_eq!(Key::from_name("Enter"), None);
    }
}
