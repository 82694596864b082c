// ABOUTME: Media classification for artifact links
// ABOUTME: Decides between image and video markup from the link's file extension

/// Extensions rendered with the video player.
const VIDEO_EXTENSIONS: [&str; 3] = ["mp4", "webm", "mov"];

/// The two kinds of media an artifact slide can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

/// The lower-cased text after the last `.` of a media reference.
/// A reference without any `.` yields the whole reference.
pub fn extension(link: &str) -> String {
    link.rsplit('.').next().unwrap_or(link).to_lowercase()
}

/// Classify a media reference by its extension; anything that is not a known
/// video extension is treated as an image.
pub fn classify(link: &str) -> MediaKind {
    let ext = extension(link);
    if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
        MediaKind::Video
    } else {
        MediaKind::Image
    }
}
