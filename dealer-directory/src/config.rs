use shared_types::StateFilter;
use url::Url;

/// Port the Django dev server listens on when the UI runs under `dx serve`.
pub const DEV_API_PORT: &str = "8000";
pub const DEFAULT_DEALERS_PATH: &str = "djangoapp/get_dealers";
pub const DEFAULT_DEALER_ROUTE: &str = "/dealer";
pub const DEFAULT_REVIEW_ROUTE: &str = "/postreview";
pub const DEFAULT_REVIEW_ICON: &str = "/static/reviewicon.png";
pub const DEFAULT_SESSION_KEY: &str = "username";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("No browser window available")]
    NoWindow,
    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("API base URL '{0}' cannot carry a path")]
    NotABase(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryConfig {
    /// Origin the listing endpoints hang off
    pub api_base: Url,
    /// Path of the unfiltered listing, relative to `api_base`
    pub dealers_path: String,
    /// Detail page route, suffixed with the dealer id
    pub dealer_route: String,
    /// Review submission route, suffixed with the dealer id
    pub review_route: String,
    pub review_icon: String,
    /// sessionStorage key whose presence means "logged in"
    pub session_key: String,
}

impl DirectoryConfig {
    pub fn new(api_base: &str) -> Result<Self, ConfigError> {
        let api_base = Url::parse(api_base).map_err(|e| ConfigError::InvalidBaseUrl {
            url: api_base.to_string(),
            reason: e.to_string(),
        })?;
        if api_base.cannot_be_a_base() {
            return Err(ConfigError::NotABase(api_base.to_string()));
        }

        Ok(Self {
            api_base,
            dealers_path: DEFAULT_DEALERS_PATH.to_string(),
            dealer_route: DEFAULT_DEALER_ROUTE.to_string(),
            review_route: DEFAULT_REVIEW_ROUTE.to_string(),
            review_icon: DEFAULT_REVIEW_ICON.to_string(),
            session_key: DEFAULT_SESSION_KEY.to_string(),
        })
    }

    /// Build the config from the page the app is served on.
    pub fn from_window() -> Result<Self, ConfigError> {
        let location = web_sys::window()
            .map(|w| w.location())
            .ok_or(ConfigError::NoWindow)?;
        let origin = location.origin().map_err(|_| ConfigError::NoWindow)?;
        let hostname = location.hostname().unwrap_or_default();
        let port = location.port().unwrap_or_default();

        Self::new(&resolve_api_base(&origin, &hostname, &port))
    }

    /// Listing URL for a filter. The state code becomes one percent-encoded
    /// path segment.
    pub fn dealers_url(&self, filter: &StateFilter) -> Result<Url, ConfigError> {
        let mut url = self.api_base.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ConfigError::NotABase(self.api_base.to_string()))?;
            segments.pop_if_empty();
            for segment in self.dealers_path.split('/').filter(|s| !s.is_empty()) {
                segments.push(segment);
            }
            if let Some(state) = filter.state() {
                segments.push(state);
            }
        }
        Ok(url)
    }

    pub fn dealer_href(&self, dealer_id: i64) -> String {
        format!("{}/{}", self.dealer_route.trim_end_matches('/'), dealer_id)
    }

    pub fn review_href(&self, dealer_id: i64) -> String {
        format!("{}/{}", self.review_route.trim_end_matches('/'), dealer_id)
    }
}

/// Pick the API origin for the current page.
/// - Served by Django itself (or any non-local host): same origin
/// - Local dev server on another port: the Django dev server
pub fn resolve_api_base(origin: &str, hostname: &str, port: &str) -> String {
    let is_local = hostname == "localhost" || hostname == "127.0.0.1";
    if is_local && port != DEV_API_PORT {
        format!("http://localhost:{DEV_API_PORT}")
    } else {
        origin.to_string()
    }
}
