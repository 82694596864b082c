// ABOUTME: HTTP server binding the viewer to a browser
// ABOUTME: Maps navigation routes onto viewer actions and serves media files

use log::{debug, error, info, warn};
use parking_lot::Mutex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tiny_http::{Header, Response, Server, StatusCode};

use crate::content::{self, ContentSource};
use crate::errors::{Result, ShowcaseError};
use crate::lightbox::CloseTrigger;
use crate::navigator::Direction;
use crate::page::{self, PageOptions};
use crate::utils;
use crate::viewer::{Action, Key, Viewer};
use crate::watch;

/// Configuration for serve mode
pub struct ServeConfig {
    pub source: ContentSource,
    pub host: String,
    pub port: u16,
    pub fetch_timeout: Duration,
    /// Reload the content file when it changes on disk.
    pub watch: bool,
    pub debounce_ms: u64,
    pub page: PageOptions,
}

/// Shared state behind every request.
pub struct ServerState {
    pub viewer: Arc<Mutex<Viewer>>,
    pub page: PageOptions,
    pub media_root: Option<PathBuf>,
}

/// What the server answers to a request, independent of the HTTP library.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    Page(String),
    Redirect(String),
    File {
        data: Vec<u8>,
        content_type: &'static str,
    },
    BadRequest(String),
    NotFound,
    Error(String),
}

/// Parse an action route such as `/nav/goto/3` or `/lightbox/open?src=a.png`.
pub fn parse_route(url: &str) -> Option<Action> {
    let (path, query) = match url.split_once('?') {
        Some((path, query)) => (path, query),
        None => (url, ""),
    };
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    match segments.as_slice() {
        ["nav", "first"] => Some(Action::First),
        ["nav", "prev"] => Some(Action::Advance(Direction::Previous)),
        ["nav", "next"] => Some(Action::Advance(Direction::Next)),
        ["nav", "last"] => Some(Action::Last),
        ["nav", "goto", index] => index.parse().ok().map(Action::JumpTo),
        ["key", name] => Key::from_name(name).map(Action::Key),
        ["lightbox", "open"] => url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == "src")
            .map(|(_, src)| Action::OpenLightbox(src.into_owned())),
        ["lightbox", "close"] => Some(Action::CloseLightbox(CloseTrigger::CloseButton)),
        ["lightbox", "backdrop"] => Some(Action::CloseLightbox(CloseTrigger::Backdrop)),
        _ => None,
    }
}

/// Content type for a served file, by extension.
pub fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "html" => "text/html; charset=utf-8",
        "css" => "text/css",
        "js" => "application/javascript",
        "json" => "application/json",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        _ => "application/octet-stream",
    }
}

/// Decide the reply for a request URL, applying any action to the viewer.
pub fn respond_to(url: &str, state: &ServerState) -> Reply {
    let path = url.split('?').next().unwrap_or("/");
    if path == "/" || path == "/index.html" {
        let viewer = state.viewer.lock();
        return Reply::Page(page::generate_html(&viewer, &state.page));
    }

    if let Some(action) = parse_route(url) {
        let mut viewer = state.viewer.lock();
        return match viewer.dispatch(action) {
            Ok(transition) => {
                if let Some(t) = transition {
                    debug!("Transition {} -> {} (reset media: {})", t.from, t.to, t.reset_media);
                }
                Reply::Redirect("/".to_string())
            }
            Err(e @ ShowcaseError::SlideOutOfRange { .. }) => Reply::BadRequest(e.to_string()),
            Err(e) => Reply::Error(e.to_string()),
        };
    }

    serve_file(path, state.media_root.as_deref())
}

fn serve_file(url_path: &str, media_root: Option<&Path>) -> Reply {
    let Some(root) = media_root else {
        return Reply::NotFound;
    };
    let decoded = match urlencoding::decode(url_path.trim_start_matches('/')) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => return Reply::BadRequest(format!("Malformed path: {}", url_path)),
    };
    let relative = Path::new(&decoded);
    if !utils::is_contained_relative_path(relative) {
        return Reply::NotFound;
    }

    let file_path = root.join(relative);
    debug!("Request for {:?} -> {:?}", url_path, file_path);
    if !file_path.is_file() {
        return Reply::NotFound;
    }

    match fs::read(&file_path) {
        Ok(data) => Reply::File {
            data,
            content_type: content_type_for(&file_path),
        },
        Err(e) => {
            error!("Failed to read file {:?}: {}", file_path, e);
            Reply::Error(format!("Failed to read file: {}", e))
        }
    }
}

fn header(name: &str, value: &str) -> Result<Header> {
    Header::from_bytes(name.as_bytes(), value.as_bytes())
        .map_err(|_| ShowcaseError::ServerError(format!("Invalid header {}: {}", name, value)))
}

fn send(request: tiny_http::Request, reply: Reply) -> Result<()> {
    let response = match reply {
        Reply::Page(html) => Response::from_string(html)
            .with_header(header("Content-Type", "text/html; charset=utf-8")?)
            .boxed(),
        Reply::Redirect(location) => Response::empty(StatusCode(303))
            .with_header(header("Location", &location)?)
            .boxed(),
        Reply::File { data, content_type } => Response::from_data(data)
            .with_header(header("Content-Type", content_type)?)
            .boxed(),
        Reply::BadRequest(message) => Response::from_string(message)
            .with_status_code(StatusCode(400))
            .boxed(),
        Reply::NotFound => Response::from_string("404 Not Found")
            .with_status_code(StatusCode(404))
            .boxed(),
        Reply::Error(message) => Response::from_string(message)
            .with_status_code(StatusCode(500))
            .boxed(),
    };
    request.respond(response)?;
    Ok(())
}

/// Bind the HTTP server and handle requests on a background thread.
pub fn start_server(config: &ServeConfig, viewer: Arc<Mutex<Viewer>>) -> Result<JoinHandle<()>> {
    let address = format!("{}:{}", config.host, config.port);
    let server = Server::http(&address)
        .map_err(|e| ShowcaseError::ServerError(format!("Failed to start HTTP server: {}", e)))?;

    let state = ServerState {
        viewer,
        page: config.page.clone(),
        media_root: config.source.base_dir().map(Path::to_path_buf),
    };

    let handle = thread::spawn(move || {
        info!("HTTP server listening on http://{}", address);
        println!("Showcase available at http://{}", address);

        for request in server.incoming_requests() {
            let url = request.url().to_string();
            let reply = respond_to(&url, &state);
            if let Reply::NotFound = reply {
                warn!("Not found: {}", url);
            }
            if let Err(e) = send(request, reply) {
                error!("Failed to send response for {}: {}", url, e);
            }
        }
    });

    Ok(handle)
}

/// Load the content, start the server and, when requested, keep the content
/// in sync with the file on disk. Blocks until the server stops.
pub fn serve(config: ServeConfig) -> Result<()> {
    let mut viewer = Viewer::new();
    viewer.load(content::load_content(&config.source, config.fetch_timeout));
    let viewer = Arc::new(Mutex::new(viewer));

    let watch_target = match (&config.source, config.watch) {
        (ContentSource::Local(path), true) => Some(watch::resolve_watch_target(path)?),
        (ContentSource::Remote(url), true) => {
            warn!("Cannot watch remote content {}, serving without reload", url);
            None
        }
        _ => None,
    };

    let handle = start_server(&config, viewer.clone())?;

    if let Some(path) = watch_target {
        watch::watch_content(&path, config.debounce_ms, config.fetch_timeout, viewer)?;
    }

    handle
        .join()
        .map_err(|_| ShowcaseError::ServerError("Server thread panicked".to_string()))
}
