use thiserror::Error;

/// Why a wishlist click did not complete.
///
/// Every variant except [`WishlistError::InFlight`] is reported to the user
/// with a toast; none of them is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WishlistError {
    #[error("csrf token cookie is missing")]
    MissingCredential,
    #[error("server rejected the session (403)")]
    AuthenticationFailure,
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected response: {0}")]
    Malformed(String),
    #[error("server refused the request: {0}")]
    Rejected(String),
    #[error("a request for this movie is already in flight")]
    InFlight,
}

pub type WishlistResult<T> = Result<T, WishlistError>;
