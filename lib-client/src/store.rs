use crate::{error::*, log::*};
use std::{
  collections::{BTreeMap, HashMap},
  fs,
  path::{Path, PathBuf},
  sync::{Mutex, RwLock},
};

/// Persistent string key-value store shared by every page of one context.
/// Each single call is atomic per key; nothing spans several calls.
pub trait KeyValueStore: Send + Sync {
  fn get(&self, key: &str) -> Option<String>;
  fn set(&self, key: &str, value: &str) -> AuthResult<()>;
  fn remove(&self, key: &str) -> AuthResult<()>;
}

/* ---------------------------------------------------- */
#[derive(Debug, Default)]
/// In-process store, mainly for tests and embedding
pub struct MemoryStore {
  inner: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.inner.read().unwrap_or_else(|e| e.into_inner()).len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

impl KeyValueStore for MemoryStore {
  fn get(&self, key: &str) -> Option<String> {
    let lock = self.inner.read().unwrap_or_else(|e| e.into_inner());
    lock.get(key).cloned()
  }

  fn set(&self, key: &str, value: &str) -> AuthResult<()> {
    let mut lock = self.inner.write().unwrap_or_else(|e| e.into_inner());
    lock.insert(key.to_string(), value.to_string());
    Ok(())
  }

  fn remove(&self, key: &str) -> AuthResult<()> {
    let mut lock = self.inner.write().unwrap_or_else(|e| e.into_inner());
    lock.remove(key);
    Ok(())
  }
}

/* ---------------------------------------------------- */
#[derive(Debug)]
/// Store persisted as a single json object file.
/// Reads always hit the file so that mutations from other processes are seen.
pub struct FileStore {
  path: PathBuf,
  write_lock: Mutex<()>,
}

impl FileStore {
  pub fn new(path: impl AsRef<Path>) -> Self {
    Self {
      path: path.as_ref().to_path_buf(),
      write_lock: Mutex::new(()),
    }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  fn load(&self) -> AuthResult<BTreeMap<String, String>> {
    if !self.path.exists() {
      return Ok(BTreeMap::new());
    }
    let content = fs::read_to_string(&self.path)?;
    if content.trim().is_empty() {
      return Ok(BTreeMap::new());
    }
    Ok(serde_json::from_str(&content)?)
  }

  fn persist(&self, map: &BTreeMap<String, String>) -> AuthResult<()> {
    if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
      fs::create_dir_all(parent)?;
    }
    let mut tmp = self.path.clone().into_os_string();
    tmp.push(".tmp");
    fs::write(&tmp, serde_json::to_string_pretty(map)?)?;
    fs::rename(&tmp, &self.path)?;
    Ok(())
  }

  fn mutate<F>(&self, f: F) -> AuthResult<()>
  where
    F: FnOnce(&mut BTreeMap<String, String>) -> bool,
  {
    let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
    let mut map = self.load()?;
    if f(&mut map) {
      self.persist(&map)?;
    }
    Ok(())
  }
}

impl KeyValueStore for FileStore {
  fn get(&self, key: &str) -> Option<String> {
    match self.load() {
      Ok(map) => map.get(key).cloned(),
      Err(e) => {
        warn!("Failed to read session store {}: {e}", self.path.display());
        None
      }
    }
  }

  fn set(&self, key: &str, value: &str) -> AuthResult<()> {
    self.mutate(|map| {
      map.insert(key.to_string(), value.to_string());
      true
    })
  }

  fn remove(&self, key: &str) -> AuthResult<()> {
    self.mutate(|map| map.remove(key).is_some())
  }
}
