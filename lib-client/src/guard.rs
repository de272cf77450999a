use crate::{
  constants::DEFAULT_REDIRECT_PATH,
  log::*,
  store::KeyValueStore,
  token_store::{TokenStore, ValidToken},
};
use std::sync::Arc;

/// Full navigation away from the current page, dropping all in-memory state
pub trait Navigator: Send + Sync {
  fn navigate(&self, path: &str);
}

/// Answers "is there a usable session" for dashboard pages.
/// Nothing is cached: every call re-scans the store.
pub struct AuthGuard<S, N>
where
  S: KeyValueStore,
  N: Navigator,
{
  tokens: TokenStore<S>,
  navigator: Arc<N>,
}

impl<S, N> AuthGuard<S, N>
where
  S: KeyValueStore,
  N: Navigator,
{
  pub fn new(tokens: TokenStore<S>, navigator: Arc<N>) -> Self {
    Self { tokens, navigator }
  }

  pub fn tokens(&self) -> &TokenStore<S> {
    &self.tokens
  }

  /// Purges expired slots as a side effect
  pub fn is_authenticated(&self) -> bool {
    self.tokens.cleanup_and_get_valid().is_some()
  }

  /// Used by every dashboard page on mount and before each authenticated fetch.
  /// `None` means not authenticated, even if the first check passed.
  pub fn require_session_or_logout(&self, redirect_path: &str) -> Option<ValidToken> {
    if !self.is_authenticated() {
      self.logout(redirect_path);
      return None;
    }
    let valid = self.tokens.get_valid();
    if valid.is_none() {
      debug!("Session vanished between checks");
    }
    valid
  }

  pub fn logout(&self, redirect_path: &str) {
    self.tokens.clear_all();
    info!("Logged out, redirecting to {redirect_path}");
    self.navigator.navigate(redirect_path);
  }

  pub fn logout_default(&self) {
    self.logout(DEFAULT_REDIRECT_PATH)
  }

  /// Re-validates after another context changed the store.
  /// `key` is `None` when the whole store was cleared. Returns `None` for keys
  /// unrelated to sessions; never logs out by itself.
  pub fn handle_storage_event(&self, key: Option<&str>) -> Option<bool> {
    match key {
      Some(k) if !self.tokens.is_token_key(k) => None,
      _ => {
        let authenticated = self.is_authenticated();
        debug!("Storage change on {:?} re-validated: authenticated={authenticated}", key);
        Some(authenticated)
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{store::MemoryStore, testing::*};
  use libcommon::{token_fields::RolePriority, ExpiryPolicy};

  fn guard(store: &Arc<MemoryStore>) -> (AuthGuard<MemoryStore, RecordingNavigator>, Arc<RecordingNavigator>) {
    let navigator = Arc::new(RecordingNavigator::default());
    let tokens = TokenStore::new(store.clone(), RolePriority::default(), ExpiryPolicy::default());
    (AuthGuard::new(tokens, navigator.clone()), navigator)
  }

  #[test]
  fn empty_store_is_unauthenticated_without_navigation() {
    let store = Arc::new(MemoryStore::new());
    let (guard, navigator) = guard(&store);
    assert!(!guard.is_authenticated());
    assert!(navigator.visited().is_empty());
  }

  #[test]
  fn is_authenticated_is_idempotent_and_purges() {
    let store = Arc::new(MemoryStore::new());
    store.set("courier_token", &valid_token("courier")).unwrap();
    store.set("su_token", &expired_token("su")).unwrap();
    let (guard, _) = guard(&store);

    assert!(guard.is_authenticated());
    assert!(store.get("su_token").is_none());
    assert!(guard.is_authenticated());

    store.remove("courier_token").unwrap();
    assert!(!guard.is_authenticated());
    assert!(!guard.is_authenticated());
  }

  #[test]
  fn require_session_returns_token_when_alive() {
    let store = Arc::new(MemoryStore::new());
    let admin = valid_token("admin");
    store.set("admin_token", &admin).unwrap();
    store.set("token", "customer").unwrap();
    let (guard, navigator) = guard(&store);

    let valid = guard.require_session_or_logout("/admin/login").unwrap();
    assert_eq!(valid.key(), "admin_token");
    assert!(navigator.visited().is_empty());
    assert!(store.get("token").is_some());
  }

  #[test]
  fn require_session_logs_out_when_dead() {
    let store = Arc::new(MemoryStore::new());
    store.set("vendor_token", &expired_token("vendor")).unwrap();
    store.set("token", "customer").unwrap();
    let (guard, navigator) = guard(&store);

    assert!(guard.require_session_or_logout("/vendor/login").is_none());
    assert_eq!(navigator.visited(), vec!["/vendor/login".to_string()]);
    assert!(store.is_empty());
  }

  #[test]
  fn logout_clears_everything_and_redirects() {
    let store = Arc::new(MemoryStore::new());
    for key in ["su_token", "admin_token", "vendor_token", "courier_token", "token"] {
      store.set(key, &valid_token("su")).unwrap();
    }
    let (guard, navigator) = guard(&store);
    guard.logout_default();
    assert!(store.is_empty());
    assert_eq!(navigator.visited(), vec!["/".to_string()]);
  }

  #[test]
  fn storage_events_revalidate_only_session_keys() {
    let store = Arc::new(MemoryStore::new());
    store.set("admin_token", &valid_token("admin")).unwrap();
    let (guard, navigator) = guard(&store);

    assert_eq!(guard.handle_storage_event(Some("theme")), None);
    assert_eq!(guard.handle_storage_event(Some("admin_token")), Some(true));

    store.remove("admin_token").unwrap();
    assert_eq!(guard.handle_storage_event(Some("admin_token")), Some(false));
    assert_eq!(guard.handle_storage_event(None), Some(false));
    assert!(navigator.visited().is_empty());
  }
}
