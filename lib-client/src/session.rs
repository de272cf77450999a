use crate::{
  constants::*,
  error::*,
  guard::{AuthGuard, Navigator},
  log::*,
  store::KeyValueStore,
  token_store::TokenStore,
  SessionConfig,
};
use async_trait::async_trait;
use libcommon::{token_fields::BearerToken, ExpiryPolicy};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use url::Url;

/// Trait defining http client used to reach the backend with a session token
#[async_trait]
pub trait ProfileHttpClient {
  /// Send GET request with `Authorization: Bearer` header and get JSON response.
  /// Non-20x responses must come back as `AuthError::HttpErrorResponse` carrying the status code.
  async fn get_json_with_bearer_token<R>(&self, url: &Url, bearer_token: &BearerToken) -> AuthResult<R>
  where
    R: DeserializeOwned + Send + Sync;
}

/// Dashboard session: the auth guard plus authenticated backend access
pub struct SessionClient<S, N, H>
where
  S: KeyValueStore,
  N: Navigator,
  H: ProfileHttpClient,
{
  config: SessionConfig,
  guard: AuthGuard<S, N>,
  http_client: Arc<H>,
}

impl<S, N, H> SessionClient<S, N, H>
where
  S: KeyValueStore,
  N: Navigator,
  H: ProfileHttpClient + Send + Sync,
{
  pub fn new(config: &SessionConfig, store: Arc<S>, navigator: Arc<N>, http_client: Arc<H>) -> Self {
    let tokens = TokenStore::new(
      store,
      config.priority.clone(),
      ExpiryPolicy::new(config.expiry_buffer_secs),
    );
    Self {
      config: config.clone(),
      guard: AuthGuard::new(tokens, navigator),
      http_client,
    }
  }

  pub fn guard(&self) -> &AuthGuard<S, N> {
    &self.guard
  }

  fn profile_url(&self) -> AuthResult<Url> {
    let mut url = self.config.api_base.clone();
    url
      .path_segments_mut()
      .map_err(|_| AuthError::UrlError)?
      .pop_if_empty()
      .extend(self.config.profile_path.split('/').filter(|s| !s.is_empty()));
    Ok(url)
  }

  /// Fetch the profile of the current session.
  /// A 401 from the backend logs out to `/`; any other failure keeps the session.
  pub async fn fetch_profile<R>(&self, redirect_path: &str) -> AuthResult<R>
  where
    R: DeserializeOwned + Send + Sync,
  {
    let Some(valid) = self.guard.require_session_or_logout(redirect_path) else {
      return Err(AuthError::NotAuthenticated);
    };
    let url = self.profile_url()?;
    debug!("Fetching profile from {url} as {}", valid.role);

    match self
      .http_client
      .get_json_with_bearer_token::<R>(&url, &valid.token)
      .await
    {
      Ok(profile) => Ok(profile),
      Err(e) if e.status_code() == Some(UNAUTHORIZED_STATUS) => {
        warn!("Backend rejected {} token: {e}", valid.role);
        self.guard.logout(DEFAULT_REDIRECT_PATH);
        Err(AuthError::Unauthorized)
      }
      Err(e) => {
        warn!("Failed to fetch profile, keeping session: {e}");
        Err(e)
      }
    }
  }
}
