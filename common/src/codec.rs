use crate::{claim::DecodedClaims, constants::TOKEN_SEGMENT_DELIMITER, log::*};
use anyhow::{anyhow, bail, ensure, Result};
use base64::{
  alphabet,
  engine::{general_purpose::GeneralPurpose, DecodePaddingMode, GeneralPurposeConfig},
  Engine,
};

const PADDING_INDIFFERENT: GeneralPurposeConfig =
  GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);
const URL_SAFE_ANY_PAD: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, PADDING_INDIFFERENT);
const STANDARD_ANY_PAD: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, PADDING_INDIFFERENT);

/// Decode the payload segment of a token into claims.
///
/// Advisory only: the signature is never checked. Any structural, base64 or json
/// problem yields `None`, so callers can fail closed without handling errors.
pub fn decode(token: &str) -> Option<DecodedClaims> {
  match try_decode(token) {
    Ok(claims) => Some(claims),
    Err(e) => {
      debug!("Failed to decode token payload: {e}");
      None
    }
  }
}

fn try_decode(token: &str) -> Result<DecodedClaims> {
  let payload = token
    .split(TOKEN_SEGMENT_DELIMITER)
    .nth(1)
    .ok_or_else(|| anyhow!("No payload segment in token"))?;
  ensure!(!payload.is_empty(), "Empty payload segment");

  let bytes = URL_SAFE_ANY_PAD
    .decode(payload)
    .or_else(|_| STANDARD_ANY_PAD.decode(payload))?;
  let json_string = String::from_utf8(bytes)?;
  let value = serde_json::from_str::<serde_json::Value>(&json_string)?;
  let Some(object) = value.as_object() else {
    bail!("Token payload is not a json object");
  };
  Ok(DecodedClaims::from(object))
}
