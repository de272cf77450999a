use thiserror::Error;

pub type AuthResult<T> = Result<T, AuthError>;

/// Describes things that can go wrong around a dashboard session
#[derive(Debug, Error)]
pub enum AuthError {
  #[error("ProfileHttpClient response is not 20x: {source}")]
  HttpErrorResponse {
    source: Box<dyn std::error::Error + Send + Sync>,
    code: u16,
  },

  #[cfg(feature = "reqwest")]
  #[error(transparent)]
  ReqwestClientError(#[from] reqwest::Error),

  #[error("Failed to build backend api url")]
  UrlError,
  #[error("Failed to access session store: {0}")]
  StoreIo(#[from] std::io::Error),
  #[error("Failed to (de)serialize session data: {0}")]
  Json(#[from] serde_json::Error),

  #[error("No usable session token")]
  NotAuthenticated,
  #[error("Backend rejected the session token")]
  Unauthorized,

  // black hole
  #[error(transparent)]
  Other(#[from] anyhow::Error),
}

impl AuthError {
  /// Status code of a non-20x backend response, if this error carries one
  pub fn status_code(&self) -> Option<u16> {
    match self {
      AuthError::HttpErrorResponse { code, .. } => Some(*code),
      #[cfg(feature = "reqwest")]
      AuthError::ReqwestClientError(e) => e.status().map(|s| s.as_u16()),
      _ => None,
    }
  }
}
