use crate::{codec::decode, constants::EXPIRY_BUFFER_SECS};
use chrono::Local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Decides whether a stored token is still usable.
/// A token counts as expired `buffer_secs` before its `exp` claim so that a request
/// is never sent with a token that dies in flight.
pub struct ExpiryPolicy {
  pub buffer_secs: i64,
}

impl Default for ExpiryPolicy {
  fn default() -> Self {
    Self {
      buffer_secs: EXPIRY_BUFFER_SECS,
    }
  }
}

impl ExpiryPolicy {
  pub fn new(buffer_secs: i64) -> Self {
    Self { buffer_secs }
  }

  /// Undecodable tokens and tokens without `exp` are expired.
  pub fn is_expired_at(&self, token: &str, now: i64) -> bool {
    match decode(token).and_then(|c| c.exp) {
      Some(exp) => exp < now.saturating_add(self.buffer_secs),
      None => true,
    }
  }

  pub fn is_expired(&self, token: &str) -> bool {
    self.is_expired_at(token, now_epoch_secs())
  }

  /// Seconds until the `exp` claim, without the buffer applied
  pub fn remaining_seconds_at(&self, token: &str, now: i64) -> Option<i64> {
    decode(token).and_then(|c| c.exp).and_then(|exp| exp.checked_sub(now))
  }

  pub fn remaining_seconds(&self, token: &str) -> Option<i64> {
    self.remaining_seconds_at(token, now_epoch_secs())
  }
}

pub fn now_epoch_secs() -> i64 {
  Local::now().timestamp()
}
