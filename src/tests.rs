use super::*;
use std::io::Write;
use std::time::Duration;
use tempfile::{NamedTempFile, TempDir};

const SCENARIO: &str = r#"{
    "introImage": "a.jpg",
    "title": "T",
    "intro": "P1\n\nP2",
    "artifacts": [
        {"link": "v.mp4", "title": "A1", "description": "D1", "citations": ["C1"]}
    ]
}"#;

fn create_temp_content_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

fn loaded_viewer(json: &str) -> Viewer {
    let file = create_temp_content_file(json);
    let source = ContentSource::Local(file.path().to_path_buf());
    let mut viewer = Viewer::new();
    viewer.load(load_content(&source, Duration::from_secs(1)));
    viewer
}

#[test]
fn test_scenario_from_content_file() {
    let viewer = loaded_viewer(SCENARIO);
    assert_eq!(viewer.navigator().total_slides(), 2);

    let html = generate_html(&viewer, &PageOptions::default());
    assert!(html.contains("<h2>T</h2>"));
    assert!(html.contains("<p>P1</p><p>P2</p>"));
    assert!(html.contains("<source src=\"v.mp4\" type=\"video/mp4\">"));
    assert_eq!(html.matches("<li>").count(), 1);
    assert!(html.contains("<li>C1</li>"));
}

#[test]
fn test_fetch_failure_shows_message_and_no_slides() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let source = ContentSource::Local(dir.path().join("content.json"));
    let mut viewer = Viewer::new();
    viewer.load(load_content(&source, Duration::from_secs(1)));

    assert_eq!(viewer.load_state(), &LoadState::Failed);
    assert_eq!(viewer.navigator().total_slides(), 0);

    let html = generate_html(&viewer, &PageOptions::default());
    assert_eq!(html.matches(LOAD_ERROR_MESSAGE).count(), 1);
    assert!(!html.contains("data-slide="));
}

#[test]
fn test_unreachable_remote_content_fails_cleanly() {
    let source = ContentSource::parse("http://127.0.0.1:9/content.json").unwrap();
    let mut viewer = Viewer::new();
    viewer.load(load_content(&source, Duration::from_millis(500)));
    assert_eq!(viewer.load_state(), &LoadState::Failed);
}

#[test]
fn test_every_transition_keeps_views_and_pagination_in_sync() {
    let json = r#"{"title":"T","introImage":"i.png","intro":"x","artifacts":[
        {"link":"1.png","title":"1","description":"d","citations":[]},
        {"link":"2.webm","title":"2","description":"d","citations":[]},
        {"link":"3.jpg","title":"3","description":"d","citations":[]}
    ]}"#;
    let mut viewer = loaded_viewer(json);

    let actions = vec![
        Action::Advance(Direction::Next),
        Action::Advance(Direction::Next),
        Action::Key(Key::ArrowLeft),
        Action::Last,
        Action::Advance(Direction::Next),
        Action::Advance(Direction::Previous),
        Action::JumpTo(2),
        Action::First,
        Action::Key(Key::ArrowRight),
    ];

    for action in actions {
        viewer.dispatch(action).unwrap();
        let nav = *viewer.navigator();

        let active: Vec<_> = viewer.slides().into_iter().filter(|s| s.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].index, nav.current_slide());

        let pagination = nav.pagination();
        assert_eq!(pagination.len(), nav.total_slides());
        assert_eq!(pagination.iter().filter(|i| i.active).count(), 1);
        assert!(pagination[nav.current_slide()].active);

        let controls = nav.controls().unwrap();
        assert_eq!(controls.prev_disabled, nav.current_slide() == 0);
        assert_eq!(controls.first_disabled, nav.current_slide() == 0);
        assert_eq!(
            controls.next_disabled,
            nav.current_slide() == nav.total_slides() - 1
        );
        assert_eq!(
            controls.last_disabled,
            nav.current_slide() == nav.total_slides() - 1
        );
    }
    assert_eq!(viewer.navigator().current_slide(), 1);
}

#[test]
fn test_media_classification_drives_markup() {
    assert_eq!(classify("clip.MP4"), MediaKind::Video);
    assert_eq!(classify("photo.png"), MediaKind::Image);
    assert_eq!(classify("clip.mov"), MediaKind::Video);
    assert_eq!(classify("doc.pdf"), MediaKind::Image);

    let json = r#"{"title":"T","introImage":"i.png","intro":"x","artifacts":[
        {"link":"doc.pdf","title":"Doc","description":"d","citations":[]}
    ]}"#;
    let viewer = loaded_viewer(json);
    let html = generate_html(&viewer, &PageOptions::default());
    assert!(html.contains("<img src=\"doc.pdf\" alt=\"Doc\">"));
    assert!(!html.contains("<video"));
}

#[test]
fn test_error_conversion_from_anyhow() {
    let err: ShowcaseError = anyhow::anyhow!("something odd").into();
    assert!(matches!(err, ShowcaseError::UnknownError(ref msg) if msg == "something odd"));
}
