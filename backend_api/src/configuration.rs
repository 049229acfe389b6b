use nutype::nutype;

/// Base used when no explicit address is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[nutype(
    derive(Clone, Debug, Display),
    sanitize(with = strip_trailing_slash),
    validate(predicate = looks_like_http_url)
)]
pub struct ApiUrl(String);

fn strip_trailing_slash(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

fn looks_like_http_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

/// Injected at client construction, nothing in the client reads ambient
/// process state.
#[derive(Clone, Debug)]
pub struct Configuration {
    pub base_path: ApiUrl,
}

impl Configuration {
    pub fn new(base_path: ApiUrl) -> Self { Self { base_path } }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let url = ApiUrl::try_new("http://localhost:8000/".to_string())
            .expect("valid url");
        assert_eq!(url.to_string(), "http://localhost:8000");
    }

    #[test]
    fn non_http_base_is_rejected() {
        assert!(ApiUrl::try_new("localhost:8000".to_string()).is_err());
        assert!(ApiUrl::try_new("ftp://localhost".to_string()).is_err());
    }
}
