/// Reasons a hero configuration cannot be rendered
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeroError {
    #[error("hero {field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("call-to-action href must be an absolute http(s) URL, got {href:?}")]
    InvalidHref { href: String },
}
