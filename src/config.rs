pub const DEFAULT_API_URL: &str = "http://127.0.0.1:3000";
pub const DEFAULT_TOKEN_KEY: &str = "access_token";

/// Where the external blog API lives and where the client keeps its token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub token_key: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.into(),
            token_key: DEFAULT_TOKEN_KEY.into(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base(base_url.into()),
            ..Self::default()
        }
    }

    /// Storage key for the access token. Blank keys keep the default.
    pub fn with_token_key(mut self, key: &str) -> Self {
        let key = key.trim();
        if !key.is_empty() {
            self.token_key = key.to_string();
        }
        self
    }

    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn normalize_base(raw: String) -> String {
    let base = raw.trim().trim_end_matches('/').to_string();
    if base.starts_with("http://") || base.starts_with("https://") {
        base
    } else {
        format!("http://{base}")
    }
}
