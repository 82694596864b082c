// ABOUTME: Slide rendering module for the artifact-showcase application
// ABOUTME: Turns content and navigator state into slide views and their HTML markup

use crate::content::ContentDescriptor;
use crate::links::Links;
use crate::media::{self, MediaKind};
use crate::navigator::NavigatorState;
use crate::viewer::Action;

/// Media shown on the left half of a slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaView {
    pub src: String,
    pub alt: String,
    pub kind: MediaKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlideBody {
    Intro {
        image: MediaView,
        title: String,
        paragraphs: Vec<String>,
    },
    Artifact {
        /// 1-based position among the artifacts.
        number: usize,
        count: usize,
        title: String,
        description: String,
        media: MediaView,
        citations: Vec<String>,
    },
}

/// One rendered slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideView {
    pub index: usize,
    pub active: bool,
    pub body: SlideBody,
}

/// Build the slide views for `content`, marking the navigator's current
/// slide active. The intro comes first, then one slide per artifact.
pub fn render(content: &ContentDescriptor, nav: &NavigatorState) -> Vec<SlideView> {
    let count = content.artifacts.len();

    let intro = SlideBody::Intro {
        image: MediaView {
            src: content.intro_image.clone(),
            alt: content.title.clone(),
            kind: MediaKind::Image,
        },
        title: content.title.clone(),
        paragraphs: content.intro_paragraphs().map(str::to_string).collect(),
    };

    let artifacts = content
        .artifacts
        .iter()
        .enumerate()
        .map(|(i, artifact)| SlideBody::Artifact {
            number: i + 1,
            count,
            title: artifact.title.clone(),
            description: artifact.description.clone(),
            media: MediaView {
                src: artifact.link.clone(),
                alt: artifact.title.clone(),
                kind: media::classify(&artifact.link),
            },
            citations: artifact.citations.clone(),
        });

    std::iter::once(intro)
        .chain(artifacts)
        .enumerate()
        .map(|(index, body)| SlideView {
            index,
            active: index == nav.current_slide(),
            body,
        })
        .collect()
}

impl SlideBody {
    pub fn label(&self) -> String {
        match self {
            SlideBody::Intro { .. } => "Introduction".to_string(),
            SlideBody::Artifact { number, count, .. } => {
                format!("Artifact {} of {}", number, count)
            }
        }
    }

    pub fn title(&self) -> &str {
        match self {
            SlideBody::Intro { title, .. } | SlideBody::Artifact { title, .. } => title,
        }
    }

    pub fn media(&self) -> &MediaView {
        match self {
            SlideBody::Intro { image, .. } => image,
            SlideBody::Artifact { media, .. } => media,
        }
    }
}

impl SlideView {
    /// Source of the slide's image, if its media is an image.
    pub fn image_src(&self) -> Option<&str> {
        let media = self.body.media();
        match media.kind {
            MediaKind::Image => Some(media.src.as_str()),
            MediaKind::Video => None,
        }
    }

    /// Markup for this slide. Text is inserted verbatim; content authors are
    /// responsible for sanitizing it.
    pub fn to_html(&self, links: &Links, nav: &NavigatorState) -> String {
        let mut html = String::new();
        let class = if self.active {
            "slide artifact-slide active"
        } else {
            "slide artifact-slide"
        };
        html.push_str(&format!(
            "<div class=\"{}\" data-slide=\"{}\">\n",
            class, self.index
        ));

        html.push_str("<div class=\"artifact-left\">\n<div class=\"artifact-media\">\n");
        html.push_str(&media_html(self.body.media(), links, nav));
        html.push_str("\n</div>\n</div>\n");

        html.push_str("<div class=\"artifact-right\">\n");
        html.push_str(&format!(
            "<div class=\"artifact-number\">{}</div>\n",
            self.body.label()
        ));
        html.push_str(&format!("<h2>{}</h2>\n", self.body.title()));

        match &self.body {
            SlideBody::Intro { paragraphs, .. } => {
                for paragraph in paragraphs {
                    html.push_str(&format!("<p>{}</p>", paragraph));
                }
                html.push('\n');
            }
            SlideBody::Artifact {
                description,
                citations,
                ..
            } => {
                html.push_str(&format!("<p>{}</p>\n", description));
                html.push_str("<div class=\"citations\">\n<h3>Sources</h3>\n<ul>\n");
                for cite in citations {
                    html.push_str(&format!("<li>{}</li>\n", cite));
                }
                html.push_str("</ul>\n</div>\n");
            }
        }

        html.push_str("</div>\n</div>\n");
        html
    }
}

fn media_html(media: &MediaView, links: &Links, nav: &NavigatorState) -> String {
    match media.kind {
        MediaKind::Video => format!(
            "<video controls preload=\"metadata\"><source src=\"{}\" type=\"video/{}\">Your browser does not support the video tag.</video>",
            media.src,
            media::extension(&media.src)
        ),
        MediaKind::Image => {
            let img = format!("<img src=\"{}\" alt=\"{}\">", media.src, media.alt);
            match links.href(&Action::OpenLightbox(media.src.clone()), nav) {
                Some(href) => format!("<a class=\"lightbox-trigger\" href=\"{}\">{}</a>", href, img),
                None => img,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Artifact;

    fn scenario() -> ContentDescriptor {
        ContentDescriptor {
            intro_image: "a.jpg".to_string(),
            title: "T".to_string(),
            intro: "P1\n\nP2".to_string(),
            artifacts: vec![Artifact {
                link: "v.mp4".to_string(),
                title: "A1".to_string(),
                description: "D1".to_string(),
                citations: vec!["C1".to_string()],
            }],
        }
    }

    #[test]
    fn test_scenario_slides() {
        let content = scenario();
        let nav = NavigatorState::new(content.slide_count());
        let slides = render(&content, &nav);
        assert_eq!(slides.len(), 2);

        match &slides[0].body {
            SlideBody::Intro {
                title, paragraphs, ..
            } => {
                assert_eq!(title, "T");
                assert_eq!(paragraphs, &vec!["P1".to_string(), "P2".to_string()]);
            }
            other => panic!("expected intro slide, got {:?}", other),
        }

        match &slides[1].body {
            SlideBody::Artifact {
                media, citations, ..
            } => {
                assert_eq!(media.kind, MediaKind::Video);
                assert_eq!(media.src, "v.mp4");
                assert_eq!(citations, &vec!["C1".to_string()]);
            }
            other => panic!("expected artifact slide, got {:?}", other),
        }
    }

    #[test]
    fn test_exactly_one_active_slide() {
        let content = scenario();
        let mut nav = NavigatorState::new(content.slide_count());
        for _ in 0..3 {
            let slides = render(&content, &nav);
            let active: Vec<_> = slides.iter().filter(|s| s.active).collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].index, nav.current_slide());
            nav.advance(crate::navigator::Direction::Next);
        }
    }

    #[test]
    fn test_intro_markup() {
        let content = scenario();
        let nav = NavigatorState::new(content.slide_count());
        let html = render(&content, &nav)[0].to_html(&Links::Server, &nav);
        assert!(html.contains("class=\"slide artifact-slide active\""));
        assert!(html.contains("<div class=\"artifact-number\">Introduction</div>"));
        assert!(html.contains("<h2>T</h2>"));
        assert!(html.contains("<p>P1</p><p>P2</p>"));
        assert!(html.contains("<a class=\"lightbox-trigger\" href=\"/lightbox/open?src=a.jpg\"><img src=\"a.jpg\" alt=\"T\"></a>"));
    }

    #[test]
    fn test_video_artifact_markup() {
        let content = scenario();
        let nav = NavigatorState::new(content.slide_count());
        let html = render(&content, &nav)[1].to_html(&Links::Server, &nav);
        assert!(html.contains("class=\"slide artifact-slide\""));
        assert!(html.contains("<source src=\"v.mp4\" type=\"video/mp4\">"));
        assert!(html.contains("Artifact 1 of 1"));
        assert!(html.contains("<li>C1</li>"));
        assert!(!html.contains("lightbox-trigger"));
    }

    #[test]
    fn test_image_artifact_in_export_links_to_raw_image() {
        let mut content = scenario();
        content.artifacts[0].link = "photo.PNG".to_string();
        let nav = NavigatorState::new(content.slide_count());
        let links = Links::Export {
            base_name: "slide".to_string(),
        };
        let html = render(&content, &nav)[1].to_html(&links, &nav);
        assert!(html.contains("<a class=\"lightbox-trigger\" href=\"photo.PNG\"><img src=\"photo.PNG\" alt=\"A1\"></a>"));
    }
}
