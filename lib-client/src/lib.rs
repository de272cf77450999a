mod constants;
mod error;
mod guard;
#[cfg(feature = "reqwest")]
mod http;
mod log;
mod message;
mod session;
mod store;
mod token_store;

#[cfg(test)]
mod testing;

use libcommon::{token_fields::RolePriority, EXPIRY_BUFFER_SECS};
use url::Url;

pub use constants::DEFAULT_REDIRECT_PATH;
pub use error::{AuthError, AuthResult};
pub use guard::{AuthGuard, Navigator};
#[cfg(feature = "reqwest")]
pub use http::ReqwestProfileClient;
pub use message::UserProfile;
pub use session::{ProfileHttpClient, SessionClient};
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use token_store::{TokenStore, ValidToken};
pub mod token {
  pub use libcommon::*;
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct SessionConfig {
  /// Roles scanned for a usable token, highest priority first
  pub priority: RolePriority,
  /// Seconds before `exp` at which a token stops being used
  pub expiry_buffer_secs: i64,
  /// Base url of the backend api
  pub api_base: Url,
  /// Profile endpoint relative to `api_base`
  pub profile_path: String,
}

impl SessionConfig {
  pub fn new(api_base: Url) -> Self {
    Self {
      priority: RolePriority::default(),
      expiry_buffer_secs: EXPIRY_BUFFER_SECS,
      api_base,
      profile_path: constants::ENDPOINT_PROFILE_PATH.to_string(),
    }
  }
}
