use chrono::{DateTime, Local, TimeZone};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
/// Claims read from the payload segment of a role token.
/// Only meaningful together with the raw token it was decoded from.
/// Each claim is read on its own; one claim of an unexpected type never spoils the others.
pub struct DecodedClaims {
  pub id: Option<i64>,
  pub email: Option<String>,
  pub username: Option<String>,
  pub role: Option<String>,
  #[serde(rename = "userType")]
  pub user_type: Option<String>,
  /// issued at, epoch seconds
  pub iat: Option<i64>,
  /// expires at, epoch seconds
  pub exp: Option<i64>,
}

/// Integer claim given as integer, float (truncated) or numeric string
fn lenient_i64(value: Option<&Value>) -> Option<i64> {
  match value? {
    Value::Number(n) => n.as_i64().or_else(|| {
      n.as_f64()
        .filter(|f| f.is_finite() && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
        .map(|f| f.trunc() as i64)
    }),
    Value::String(s) => s.trim().parse::<i64>().ok(),
    _ => None,
  }
}

/// String claim; scalar non-strings are rendered as text
fn lenient_string(value: Option<&Value>) -> Option<String> {
  match value? {
    Value::String(s) => Some(s.clone()),
    Value::Number(n) => Some(n.to_string()),
    Value::Bool(b) => Some(b.to_string()),
    _ => None,
  }
}

impl From<&Map<String, Value>> for DecodedClaims {
  fn from(object: &Map<String, Value>) -> Self {
    Self {
      id: lenient_i64(object.get("id")),
      email: lenient_string(object.get("email")),
      username: lenient_string(object.get("username")),
      role: lenient_string(object.get("role")),
      user_type: lenient_string(object.get("userType")),
      iat: lenient_i64(object.get("iat")),
      exp: lenient_i64(object.get("exp")),
    }
  }
}

impl DecodedClaims {
  pub fn issued_at(&self) -> Option<DateTime<Local>> {
    self.iat.and_then(|v| Local.timestamp_opt(v, 0).single())
  }

  pub fn expires_at(&self) -> Option<DateTime<Local>> {
    self.exp.and_then(|v| Local.timestamp_opt(v, 0).single())
  }
}

fn or_dash<T: fmt::Display>(v: &Option<T>) -> String {
  v.as_ref().map(|x| x.to_string()).unwrap_or_else(|| "-".to_string())
}

impl fmt::Display for DecodedClaims {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "id: {}, role: {}, userType: {}, iat: {}, exp: {}",
      or_dash(&self.id),
      or_dash(&self.role),
      or_dash(&self.user_type),
      or_dash(&self.issued_at()),
      or_dash(&self.expires_at())
    )
  }
}
