/// Base URL used when `EASYRIDE_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "/api";

/// Client configuration.
///
/// The web client runs inside the browser and cannot read the process environment, so values
/// are captured from the build environment instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::with_api_url(option_env!("EASYRIDE_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn with_api_url(api_url: &str) -> Self {
        let trimmed = api_url.trim().trim_end_matches('/');

        Self {
            api_url: if trimmed.is_empty() {
                DEFAULT_API_URL.to_string()
            } else {
                trimmed.to_string()
            },
        }
    }

    /// Joins `path` onto the API base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_api_url(DEFAULT_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expect trailing slashes to be trimmed from the base URL
    #[test]
    fn trims_trailing_slash() {
        let config = ClientConfig::with_api_url("https://rides.example.com/api/");

        assert_eq!(config.api_url, "https://rides.example.com/api");
        assert_eq!(
            config.endpoint("/auth/user"),
            "https://rides.example.com/api/auth/user"
        );
    }

    /// Expect the default base URL when given a blank value
    #[test]
    fn blank_url_falls_back_to_default() {
        assert_eq!(ClientConfig::with_api_url("  "), ClientConfig::default());
        assert_eq!(ClientConfig::default().endpoint("users/abc"), "/api/users/abc");
    }
}
