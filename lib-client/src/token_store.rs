use crate::{error::*, log::*, store::KeyValueStore};
use libcommon::{
  token_fields::{BearerToken, Field, Role, RolePriority, TryNewField},
  DecodedClaims, ExpiryPolicy, CUSTOMER_TOKEN_KEY,
};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Unexpired token found by a scan, together with the slot it came from.
/// Built fresh on every lookup.
pub struct ValidToken {
  pub token: BearerToken,
  pub role: Role,
}

impl ValidToken {
  /// Storage key the token was read from
  pub fn key(&self) -> &'static str {
    self.role.storage_key()
  }
}

/// Role-scoped token slots on top of a key-value store
pub struct TokenStore<S>
where
  S: KeyValueStore,
{
  store: Arc<S>,
  priority: RolePriority,
  policy: ExpiryPolicy,
}

impl<S> TokenStore<S>
where
  S: KeyValueStore,
{
  pub fn new(store: Arc<S>, priority: RolePriority, policy: ExpiryPolicy) -> Self {
    Self {
      store,
      priority,
      policy,
    }
  }

  pub fn store(&self) -> &Arc<S> {
    &self.store
  }

  pub fn policy(&self) -> &ExpiryPolicy {
    &self.policy
  }

  /// Role token keys in scan order
  pub fn token_keys(&self) -> Vec<&'static str> {
    self.priority.keys()
  }

  pub fn is_token_key(&self, key: &str) -> bool {
    key == CUSTOMER_TOKEN_KEY || Role::from_storage_key(key).is_some()
  }

  fn read(&self, role: Role) -> Option<BearerToken> {
    let raw = self.store.get(role.storage_key())?;
    BearerToken::new(raw).ok()
  }

  /// First unexpired token in priority order. Read-only.
  pub fn get_valid(&self) -> Option<ValidToken> {
    self.priority.roles().iter().find_map(|role| {
      let token = self.read(*role)?;
      if self.policy.is_expired(token.as_str()) {
        None
      } else {
        Some(ValidToken { token, role: *role })
      }
    })
  }

  /// Sweeps every slot, removing expired tokens, and returns the first unexpired one.
  /// Lower priority slots are purged even when a higher one is already valid.
  pub fn cleanup_and_get_valid(&self) -> Option<ValidToken> {
    let mut found: Option<ValidToken> = None;
    for role in self.priority.roles() {
      let Some(raw) = self.store.get(role.storage_key()) else {
        continue;
      };
      let token = BearerToken::new(raw).ok();
      match token {
        Some(token) if !self.policy.is_expired(token.as_str()) => {
          if found.is_none() {
            found = Some(ValidToken { token, role: *role });
          }
        }
        _ => {
          debug!("Removing expired token in {}", role.storage_key());
          if let Err(e) = self.store.remove(role.storage_key()) {
            warn!("Failed to remove expired token in {}: {e}", role.storage_key());
          }
        }
      }
    }
    found
  }

  /// Removes every role token and the customer token
  pub fn clear_all(&self) {
    let keys = Role::ALL
      .iter()
      .map(Role::storage_key)
      .chain(std::iter::once(CUSTOMER_TOKEN_KEY));
    for key in keys {
      if let Err(e) = self.store.remove(key) {
        error!("Failed to clear {key}: {e}");
      }
    }
  }

  /// Stores a token for the role, replacing whatever was there
  pub fn set_token(&self, role: Role, token: &BearerToken) -> AuthResult<()> {
    self.store.set(role.storage_key(), token.as_str())?;
    debug!("Token stored in {}", role.storage_key());
    Ok(())
  }

  /// Raw slot content, expired or not
  pub fn get_token(&self, role: Role) -> Option<BearerToken> {
    self.read(role)
  }

  /// Claims of the currently usable token, for display
  pub fn decoded_claims(&self) -> Option<(Role, DecodedClaims)> {
    let valid = self.get_valid()?;
    let claims = libcommon::decode(valid.token.as_str())?;
    Some((valid.role, claims))
  }
}
