use ::scraper::error::SelectorErrorKind;

/// Errors returned while scraping id-mpl.com.
///
/// Only fetching a page can fail at runtime. Missing or malformed markup never
/// surfaces here; the parsers fall back to empty or default values instead.
#[derive(thiserror::Error, Debug)]
pub enum MplError {
    /// The page request never got a response (connection refused, DNS, TLS, timeout).
    #[error("could not reach id-mpl.com page {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// The site answered with a non-2xx status, e.g. a 404 for an unknown team slug.
    #[error("id-mpl.com page {url} answered with status {status}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The response body was cut off or was not valid text.
    #[error("could not read body of id-mpl.com page {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// A built-in CSS selector failed to parse.
    #[error("bad page selector: {0}")]
    Selector(String),
}

impl<'a> From<SelectorErrorKind<'a>> for MplError {
    fn from(err: SelectorErrorKind<'a>) -> Self {
        MplError::Selector(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MplError>;

#[cfg(test)]
mod tests {
    use ::scraper::Selector;

    use super::*;

    #[test]
    fn test_unexpected_status_names_the_page() {
        let err = MplError::UnexpectedStatus {
            url: "https://id-mpl.com/team/unknown".to_string(),
            status: reqwest::StatusCode::NOT_FOUND,
        };
        assert_eq!(
            err.to_string(),
            "id-mpl.com page https://id-mpl.com/team/unknown answered with status 404 Not Found"
        );
    }

    #[test]
    fn test_invalid_selector_converts() {
        let err: MplError = Selector::parse("div[").unwrap_err().into();
        assert!(matches!(err, MplError::Selector(_)));
        assert!(err.to_string().starts_with("bad page selector: "));
    }
}
