//! Offline caching worker policy.
//!
//! The worker itself is a browser-managed process; this module holds the
//! decisions it makes so they can be tested without a browser:
//!
//! 1. On install, pre-fetch [`STATIC_ASSETS`] into [`STATIC_CACHE`].
//! 2. On activate, delete every cache that is not current ([`stale_caches`]).
//! 3. On fetch, pick a strategy ([`classify_request`]) and, once the cache
//!    and network outcomes are known, decide what to answer with
//!    ([`resolve_fetch`]).
//! 4. Answer control messages ([`handle_message`]) and push notifications.

use serde::{Deserialize, Serialize};

pub const CACHE_VERSION: &str = "floor-plan-generator-v1.0.0";
pub const STATIC_CACHE: &str = "static-v1.0.0";
pub const DYNAMIC_CACHE: &str = "dynamic-v1.0.0";

/// Assets pre-fetched on install.
pub const STATIC_ASSETS: &[&str] = &[
    "/",
    "/index.html",
    "/styles.css",
    "/script.js",
    "/manifest.json",
    "/icon-16.png",
    "/icon-32.png",
    "/icon-192.png",
    "/icon-512.png",
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.0.0/css/all.min.css",
];

/// URL fragments that are never cached (analytics, tracking).
pub const NEVER_CACHE: &[&str] = &[
    "/analytics/",
    "/tracking/",
    "google-analytics.com",
    "googletagmanager.com",
];

const STATIC_EXTENSIONS: &[&str] = &[
    ".css", ".js", ".png", ".jpg", ".jpeg", ".gif", ".svg", ".ico", ".woff", ".woff2", ".ttf",
];

/// Document served when the app shell is requested offline.
pub const APP_SHELL: &str = "/index.html";

/// How a request is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStrategy {
    /// Let the browser handle it untouched.
    Bypass,
    /// Serve from cache, fall back to the network.
    CacheFirst,
    /// Try the network, fall back to cache, then to the offline page.
    NetworkFirst,
}

/// Path component of an absolute or root-relative URL, without query or
/// fragment.
fn url_path(url: &str) -> &str {
    let after_scheme = match url.find("://") {
        Some(i) => {
            let rest = &url[i + 3..];
            match rest.find('/') {
                Some(j) => &rest[j..],
                None => "/",
            }
        }
        None => url,
    };
    let end = after_scheme
        .find(|c| c == '?' || c == '#')
        .unwrap_or(after_scheme.len());
    &after_scheme[..end]
}

pub fn should_never_cache(url: &str) -> bool {
    NEVER_CACHE.iter().any(|pattern| url.contains(pattern))
}

/// Recognised static file extension, or an entry from the install manifest.
///
/// The root path "/" appears in the manifest, so the manifest match is
/// exact on the path (or on the full URL for cross-origin entries).
pub fn is_static_asset(url: &str) -> bool {
    let path = url_path(url);
    STATIC_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
        || STATIC_ASSETS
            .iter()
            .any(|asset| *asset == path || *asset == url)
}

/// Pick the strategy for one request.
pub fn classify_request(method: &str, url: &str) -> FetchStrategy {
    if !method.eq_ignore_ascii_case("GET") || should_never_cache(url) {
        FetchStrategy::Bypass
    } else if is_static_asset(url) {
        FetchStrategy::CacheFirst
    } else {
        FetchStrategy::NetworkFirst
    }
}

/// What the network did with a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkOutcome {
    Response { status: u16 },
    Failed,
}

/// Everything known about one fetch once cache and network have been tried.
#[derive(Debug, Clone, Copy)]
pub struct FetchContext {
    pub strategy: FetchStrategy,
    pub cached: bool,
    /// `None` when the strategy never reached the network.
    pub network: Option<NetworkOutcome>,
    /// Request destination is a document (navigation).
    pub is_document: bool,
    pub app_shell_cached: bool,
}

/// The worker's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResolution {
    /// Not intercepted.
    PassThrough,
    FromCache,
    /// Network response; `store_in` names the cache it is copied into.
    FromNetwork { store_in: Option<&'static str> },
    AppShell,
    /// Generated offline page, HTTP 503.
    OfflinePage,
    /// Status 503 with a plain-text body.
    Unavailable,
    /// Propagate the network error.
    Error,
}

/// Decide the answer for a fetch.
pub fn resolve_fetch(ctx: &FetchContext) -> FetchResolution {
    match ctx.strategy {
        FetchStrategy::Bypass => FetchResolution::PassThrough,
        FetchStrategy::CacheFirst => {
            if ctx.cached {
                return FetchResolution::FromCache;
            }
            match ctx.network {
                Some(NetworkOutcome::Response { status }) => FetchResolution::FromNetwork {
                    store_in: (status == 200).then_some(STATIC_CACHE),
                },
                _ if ctx.is_document && ctx.app_shell_cached => FetchResolution::AppShell,
                _ if ctx.is_document => FetchResolution::Unavailable,
                _ => FetchResolution::Error,
            }
        }
        FetchStrategy::NetworkFirst => match ctx.network {
            Some(NetworkOutcome::Response { status }) => FetchResolution::FromNetwork {
                store_in: (status == 200).then_some(DYNAMIC_CACHE),
            },
            _ if ctx.cached => FetchResolution::FromCache,
            _ if ctx.is_document && ctx.app_shell_cached => FetchResolution::AppShell,
            _ if ctx.is_document => FetchResolution::OfflinePage,
            _ => FetchResolution::Error,
        },
    }
}

/// Caches to delete when a new worker activates.
pub fn stale_caches<'a>(existing: &[&'a str]) -> Vec<&'a str> {
    existing
        .iter()
        .copied()
        .filter(|name| *name != STATIC_CACHE && *name != DYNAMIC_CACHE)
        .collect()
}

// ── Messages ───────────────────────────────────────────────────────────

/// Control messages posted from the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkerMessage {
    SkipWaiting,
    GetVersion,
    ClearCache,
}

/// Side effect or reply for a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WorkerReply {
    /// Activate the waiting worker now.
    Activate,
    /// Reply posted on the message port.
    Version { version: String },
    /// Delete every named cache.
    PurgeAll { caches: Vec<String> },
}

pub fn handle_message(message: &WorkerMessage, existing: &[&str]) -> WorkerReply {
    match message {
        WorkerMessage::SkipWaiting => WorkerReply::Activate,
        WorkerMessage::GetVersion => WorkerReply::Version {
            version: CACHE_VERSION.to_string(),
        },
        WorkerMessage::ClearCache => WorkerReply::PurgeAll {
            caches: existing.iter().map(|s| s.to_string()).collect(),
        },
    }
}

/// Parse a JSON message. Unknown or malformed messages are ignored.
pub fn parse_message(json: &str) -> Option<WorkerMessage> {
    match serde_json::from_str(json) {
        Ok(m) => Some(m),
        Err(e) => {
            log::debug!("ignoring worker message {:?}: {}", json, e);
            None
        }
    }
}

// ── Push notifications ─────────────────────────────────────────────────

pub const NOTIFICATION_TITLE: &str = "Dinamik Kat Planı Çizici";
const NOTIFICATION_ICON: &str = "/icon-192.png";
const DEFAULT_PUSH_BODY: &str = "Yeni bir bildirim alındı";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationAction {
    pub action: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationOptions {
    pub body: String,
    pub icon: String,
    pub badge: String,
    pub vibrate: Vec<u32>,
    pub actions: Vec<NotificationAction>,
}

/// Notification shown for a push; `payload` is the push text, if any.
pub fn push_notification(payload: Option<&str>) -> NotificationOptions {
    NotificationOptions {
        body: payload.unwrap_or(DEFAULT_PUSH_BODY).to_string(),
        icon: NOTIFICATION_ICON.to_string(),
        badge: NOTIFICATION_ICON.to_string(),
        vibrate: vec![100, 50, 100],
        actions: vec![
            NotificationAction {
                action: "explore".into(),
                title: "Uygulamayı Aç".into(),
            },
            NotificationAction {
                action: "close".into(),
                title: "Kapat".into(),
            },
        ],
    }
}

/// Window to open when a notification action is clicked.
pub fn notification_click_target(action: &str) -> Option<&'static str> {
    (action == "explore").then_some("/")
}

/// The generated page served for offline navigations.
pub fn offline_page() -> String {
    let mut html = String::with_capacity(1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"tr\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    html.push_str("<title>Offline - Dinamik Kat Planı Çizici</title>\n");
    html.push_str(
        "<style>body{font-family:'Segoe UI',sans-serif;\
         background:linear-gradient(135deg,#667eea 0%,#764ba2 100%);color:white;\
         text-align:center;padding:2rem;min-height:100vh;display:flex;\
         align-items:center;justify-content:center;margin:0}\
         .offline-container{background:rgba(255,255,255,0.1);padding:3rem;\
         border-radius:20px;max-width:500px}</style>\n",
    );
    html.push_str("</head>\n<body>\n<div class=\"offline-container\">\n");
    html.push_str("<h1>Bağlantı Yok</h1>\n");
    html.push_str(
        "<p>İnternet bağlantınızı kontrol edin ve tekrar deneyin. \
         Uygulama çevrimdışı çalışmaya devam edecek.</p>\n",
    );
    html.push_str(
        "<button class=\"retry-btn\" onclick=\"window.location.reload()\">Yeniden Dene</button>\n",
    );
    html.push_str("</div>\n</body>\n</html>\n");
    html
}
