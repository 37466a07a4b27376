/// Errors raised while bootstrapping the feed page.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedError {
    /// A required page element is absent or is not the expected element type.
    MissingElement(String),
    /// The page URL could not be used as a base for the endpoint URL.
    InvalidPageUrl(String),
    /// The reader constructor never became available on the page.
    ReaderUnavailable(String),
    /// The reader constructor threw synchronously.
    ReaderConstruction(String),
}

impl std::fmt::Display for FeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingElement(id) => write!(f, "page element #{id} not found"),
            Self::InvalidPageUrl(msg) => write!(f, "invalid page URL: {msg}"),
            Self::ReaderUnavailable(name) => write!(f, "{name} is not available on this page"),
            Self::ReaderConstruction(msg) => write!(f, "failed to start stream reader: {msg}"),
        }
    }
}

impl std::error::Error for FeedError {}
