// ABOUTME: Lightbox overlay state
// ABOUTME: Shows an enlarged copy of a clicked image until it is dismissed

use log::debug;

/// What dismissed the lightbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    CloseButton,
    Backdrop,
    EscapeKey,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Lightbox {
    #[default]
    Hidden,
    Shown {
        src: String,
    },
}

impl Lightbox {
    pub fn open(&mut self, src: impl Into<String>) {
        let src = src.into();
        debug!("Opening lightbox for {}", src);
        *self = Lightbox::Shown { src };
    }

    pub fn close(&mut self, trigger: CloseTrigger) {
        if self.is_shown() {
            debug!("Closing lightbox via {:?}", trigger);
        }
        *self = Lightbox::Hidden;
    }

    pub fn is_shown(&self) -> bool {
        matches!(self, Lightbox::Shown { .. })
    }

    pub fn src(&self) -> Option<&str> {
        match self {
            Lightbox::Shown { src } => Some(src),
            Lightbox::Hidden => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_then_close() {
        let mut lightbox = Lightbox::default();
        assert!(!lightbox.is_shown());

        lightbox.open("photo.png");
        assert_eq!(lightbox.src(), Some("photo.png"));

        lightbox.close(CloseTrigger::Backdrop);
        assert_eq!(lightbox, Lightbox::Hidden);
    }

    #[test]
    fn test_opening_replaces_image() {
        let mut lightbox = Lightbox::default();
        lightbox.open("a.png");
        lightbox.open("b.png");
        assert_eq!(lightbox.src(), Some("b.png"));
    }

    #[test]
    fn test_close_when_hidden_is_harmless() {
        let mut lightbox = Lightbox::default();
        lightbox.close(CloseTrigger::EscapeKey);
        assert_eq!(lightbox, Lightbox::Hidden);
    }
}
