use crate::guard::Navigator;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use libcommon::now_epoch_secs;
use std::sync::Mutex;

pub(crate) fn token_expiring_in(role: &str, secs: i64) -> String {
  let now = now_epoch_secs();
  let payload = serde_json::json!({
    "id": 7,
    "email": format!("{role}@example.com"),
    "role": role,
    "userType": role,
    "iat": now - 60,
    "exp": now + secs,
  });
  let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
  let body = URL_SAFE_NO_PAD.encode(payload.to_string());
  format!("{header}.{body}.c2lnbmF0dXJl")
}

pub(crate) fn valid_token(role: &str) -> String {
  token_expiring_in(role, 3600)
}

pub(crate) fn expired_token(role: &str) -> String {
  token_expiring_in(role, -60)
}

#[derive(Default)]
pub(crate) struct RecordingNavigator {
  pub visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
  pub(crate) fn visited(&self) -> Vec<String> {
    self.visited.lock().unwrap().clone()
  }
}

impl Navigator for RecordingNavigator {
  fn navigate(&self, path: &str) {
    self.visited.lock().unwrap().push(path.to_string());
  }
}
