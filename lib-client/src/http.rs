use crate::{error::*, session::ProfileHttpClient};
use async_trait::async_trait;
use libcommon::token_fields::BearerToken;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// `ProfileHttpClient` backed by reqwest
pub struct ReqwestProfileClient {
  inner: reqwest::Client,
  timeout: Option<Duration>,
}

impl ReqwestProfileClient {
  pub fn new(timeout: Option<Duration>) -> Self {
    Self {
      inner: reqwest::Client::new(),
      timeout,
    }
  }
}

#[async_trait]
impl ProfileHttpClient for ReqwestProfileClient {
  async fn get_json_with_bearer_token<R>(&self, url: &Url, bearer_token: &BearerToken) -> AuthResult<R>
  where
    R: DeserializeOwned + Send + Sync,
  {
    let mut req = self
      .inner
      .get(url.to_owned())
      .header(reqwest::header::AUTHORIZATION, bearer_token.authorization_header());
    if let Some(timeout) = self.timeout {
      req = req.timeout(timeout);
    }
    let res = req.send().await?;
    if let Err(e) = res.error_for_status_ref() {
      return Err(AuthError::HttpErrorResponse {
        code: res.status().as_u16(),
        source: Box::new(e),
      });
    }
    let json_res = res.json::<R>().await?;
    Ok(json_res)
  }
}
