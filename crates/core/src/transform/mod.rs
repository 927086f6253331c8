//! Transformation collaborators.
//!
//! Each endpoint in the transformation group delegates to exactly one of these
//! narrow traits. The default implementations wrap a library primitive; tests
//! substitute fakes to exercise failure paths.

pub mod hash;
pub mod markdown;
pub mod memo;
pub mod serialize;
pub mod shuffle;
pub mod template;
pub mod token;
pub mod uri;

pub use hash::{Hasher, Sha256Hasher};
pub use markdown::{CommonMarkRenderer, MarkdownRenderer};
pub use memo::{Doubler, Memoizer};
pub use serialize::{JsonSerializer, Serializer};
pub use shuffle::{RandomShuffler, Shuffler};
pub use template::{HandlebarsEngine, TemplateEngine};
pub use token::{HmacTokenSigner, TokenSigner};
pub use uri::{ParsedUrl, PercentDecoder, UriDecoder, UrlParser, WhatwgUrlParser};

/// A collaborator rejected its input or failed internally
///
/// The display text is what callers echo back to the client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    #[error("{0}")]
    Hash(String),

    #[error("{0}")]
    Markdown(String),

    #[error("{0}")]
    Template(String),

    #[error("{0}")]
    Serialize(String),

    #[error("{0}")]
    Token(String),

    #[error("{0}")]
    UrlParse(String),

    #[error("{0}")]
    Decode(String),
}
