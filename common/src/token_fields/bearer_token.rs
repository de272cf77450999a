use super::{Field, TryNewField};
use anyhow::Result;
use serde::{
  de::{self, Visitor},
  Deserialize, Serialize,
};
use std::borrow::Cow;
use validator::Validate;

#[derive(Debug, Clone, Eq, PartialEq, Validate)]
/// Opaque bearer credential as persisted under a role key.
/// Nothing here checks its signature; the backend is the authority.
pub struct BearerToken {
  #[validate(length(min = 1))]
  value: String,
}
impl<'a, T> TryNewField<T> for BearerToken
where
  T: Into<Cow<'a, str>>,
{
  fn new(token_str: T) -> Result<Self> {
    let value = token_str.into().trim().to_string();
    let object = Self { value };
    object.validate()?;
    Ok(object)
  }
}
impl Field for BearerToken {
  fn as_str(&self) -> &str {
    &self.value
  }
  fn into_string(self) -> String {
    self.value
  }
}
impl BearerToken {
  /// Value of the `Authorization` header carrying this token
  pub fn authorization_header(&self) -> String {
    format!("Bearer {}", self.value)
  }
}
impl Serialize for BearerToken {
  fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    serializer.serialize_str(self.as_str())
  }
}
impl<'de> Deserialize<'de> for BearerToken {
  fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
  where
    D: serde::Deserializer<'de>,
  {
    struct BearerTokenVisitor;
    impl<'de> Visitor<'de> for BearerTokenVisitor {
      type Value = String;
      fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("bearer token string")
      }
      fn visit_str<E>(self, str: &str) -> Result<Self::Value, E>
      where
        E: de::Error,
      {
        Ok(str.to_owned())
      }
    }

    let value = deserializer.deserialize_str(BearerTokenVisitor)?;
    BearerToken::new(value).map_err(de::Error::custom)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_token_is_rejected() {
    assert!(BearerToken::new("").is_err());
    assert!(BearerToken::new("   ").is_err());
  }

  #[test]
  fn token_is_trimmed_and_formatted_as_header() -> Result<()> {
    let token = BearerToken::new(" aaa.bbb.ccc\n")?;
    assert_eq!(token.as_str(), "aaa.bbb.ccc");
    assert_eq!(token.authorization_header(), "Bearer aaa.bbb.ccc");
    Ok(())
  }

  #[test]
  fn deserialize_rejects_empty_string() {
    assert!(serde_json::from_str::<BearerToken>("\"\"").is_err());
    let token = serde_json::from_str::<BearerToken>("\"x.y.z\"").unwrap();
    assert_eq!(token.into_string(), "x.y.z");
  }
}
