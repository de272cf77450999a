use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
/// Profile record returned by the backend for the session's bearer token.
/// Unknown fields are kept as is.
pub struct UserProfile {
  #[serde(default)]
  pub id: Option<i64>,
  #[serde(default)]
  pub email: Option<String>,
  #[serde(default)]
  pub username: Option<String>,
  #[serde(default)]
  pub role: Option<String>,
  #[serde(default, rename = "userType")]
  pub user_type: Option<String>,
  #[serde(flatten)]
  pub extra: serde_json::Map<String, serde_json::Value>,
}
