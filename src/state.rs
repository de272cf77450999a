use crate::navigator::ConsoleNavigator;
use libclient::{
  token::{token_fields::RolePriority, ExpiryPolicy},
  AuthGuard, FileStore, TokenStore,
};
use std::{path::PathBuf, sync::Arc};

/// Settings shared by every subcommand
pub struct AppState {
  pub store: Arc<FileStore>,
  pub priority: RolePriority,
  pub expiry_buffer_secs: i64,
}

impl AppState {
  pub fn new(store_path: PathBuf, priority: RolePriority, expiry_buffer_secs: i64) -> Self {
    Self {
      store: Arc::new(FileStore::new(store_path)),
      priority,
      expiry_buffer_secs,
    }
  }

  pub fn policy(&self) -> ExpiryPolicy {
    ExpiryPolicy::new(self.expiry_buffer_secs)
  }

  pub fn token_store(&self) -> TokenStore<FileStore> {
    TokenStore::new(self.store.clone(), self.priority.clone(), self.policy())
  }

  pub fn guard(&self) -> AuthGuard<FileStore, ConsoleNavigator> {
    AuthGuard::new(self.token_store(), Arc::new(ConsoleNavigator))
  }
}
