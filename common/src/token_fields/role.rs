use anyhow::{bail, ensure, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Dashboard role owning its own token slot in the store
pub enum Role {
  Su,
  Admin,
  Vendor,
  Courier,
}

impl Role {
  pub const ALL: [Role; 4] = [Role::Su, Role::Admin, Role::Vendor, Role::Courier];

  /// Storage key under which the role's token is persisted
  pub fn storage_key(&self) -> &'static str {
    match self {
      Role::Su => "su_token",
      Role::Admin => "admin_token",
      Role::Vendor => "vendor_token",
      Role::Courier => "courier_token",
    }
  }

  /// Reverse lookup from a storage key
  pub fn from_storage_key(key: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|r| r.storage_key() == key)
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Role::Su => "su",
      Role::Admin => "admin",
      Role::Vendor => "vendor",
      Role::Courier => "courier",
    }
  }
}

impl fmt::Display for Role {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl FromStr for Role {
  type Err = anyhow::Error;
  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "su" => Ok(Role::Su),
      "admin" => Ok(Role::Admin),
      "vendor" => Ok(Role::Vendor),
      "courier" => Ok(Role::Courier),
      other => bail!("Unknown role: {other}"),
    }
  }
}

#[derive(Debug, Clone, Eq, PartialEq)]
/// Ordered list of roles scanned for a usable token.
/// The first role holding an unexpired token wins.
pub struct RolePriority {
  roles: Vec<Role>,
}

impl RolePriority {
  pub fn new(roles: Vec<Role>) -> Result<Self> {
    ensure!(!roles.is_empty(), "Role priority must not be empty");
    for (i, role) in roles.iter().enumerate() {
      ensure!(!roles[..i].contains(role), "Role {role} listed twice in priority");
    }
    Ok(Self { roles })
  }

  pub fn roles(&self) -> &[Role] {
    &self.roles
  }

  /// Storage keys in scan order
  pub fn keys(&self) -> Vec<&'static str> {
    self.roles.iter().map(Role::storage_key).collect()
  }
}

impl Default for RolePriority {
  fn default() -> Self {
    Self {
      roles: Role::ALL.to_vec(),
    }
  }
}

impl FromStr for RolePriority {
  type Err = anyhow::Error;
  /// Comma separated like "su,admin,vendor,courier"
  fn from_str(s: &str) -> Result<Self> {
    let roles = s
      .split(',')
      .filter(|v| !v.trim().is_empty())
      .map(Role::from_str)
      .collect::<Result<Vec<_>>>()?;
    Self::new(roles)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_priority_is_su_admin_vendor_courier() {
    let priority = RolePriority::default();
    assert_eq!(
      priority.keys(),
      vec!["su_token", "admin_token", "vendor_token", "courier_token"]
    );
  }

  #[test]
  fn priority_rejects_empty_and_duplicates() {
    assert!(RolePriority::new(vec![]).is_err());
    assert!(RolePriority::new(vec![Role::Admin, Role::Vendor, Role::Admin]).is_err());
    assert!("admin, vendor".parse::<RolePriority>().is_ok());
    assert!("admin,customer".parse::<RolePriority>().is_err());
  }

  #[test]
  fn storage_key_round_trip() {
    for role in Role::ALL {
      assert_eq!(Role::from_storage_key(role.storage_key()), Some(role));
    }
    assert_eq!(Role::from_storage_key("token"), None);
  }
}
