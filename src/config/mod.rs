mod parse_opts;
mod subcmd_decode;
mod subcmd_event;
mod subcmd_logout;
mod subcmd_profile;
mod subcmd_set_token;
mod subcmd_status;

use crate::{error::Result, state::AppState};
use async_trait::async_trait;
use libclient::token::token_fields::{Role, RolePriority};
use std::str::FromStr;
use url::Url;

pub use parse_opts::parse_opts;

#[async_trait]
trait ClapSubCommand {
  fn subcmd() -> clap::Command;

  async fn exec_matches(sub_m: &clap::ArgMatches, state: &AppState) -> Result<()>;
}

pub(crate) fn verify_url(arg_val: &str) -> Result<String, String> {
  let url = match Url::parse(arg_val) {
    Ok(addr) => addr,
    Err(_) => return Err(format!("Could not parse \"{}\" as a valid url.", arg_val)),
  };
  if url.scheme() != "http" && url.scheme() != "https" {
    return Err("Invalid scheme".to_string());
  }
  if url.cannot_be_a_base() {
    return Err("Invalid scheme".to_string());
  }
  Ok(url.to_string())
}

pub(crate) fn verify_role(arg_val: &str) -> Result<Role, String> {
  Role::from_str(arg_val).map_err(|e| e.to_string())
}

pub(crate) fn verify_priority(arg_val: &str) -> Result<RolePriority, String> {
  RolePriority::from_str(arg_val).map_err(|e| e.to_string())
}

#[cfg(test)]
pub(crate) mod tests {
  use super::*;
  use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
  use libclient::token::now_epoch_secs;
  use std::path::PathBuf;

  pub(crate) fn temp_state(name: &str) -> (AppState, PathBuf) {
    let nanos = std::time::SystemTime::now()
      .duration_since(std::time::UNIX_EPOCH)
      .map(|d| d.as_nanos())
      .unwrap_or_default();
    let path = std::env::temp_dir().join(format!("multirole-session-cli-{name}-{}-{nanos}.json", std::process::id()));
    (AppState::new(path.clone(), RolePriority::default(), 300), path)
  }

  pub(crate) fn token_expiring_in(role: &str, secs: i64) -> String {
    let payload = serde_json::json!({ "id": 3, "role": role, "exp": now_epoch_secs() + secs });
    format!(
      "{}.{}.c2ln",
      URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256"}"#),
      URL_SAFE_NO_PAD.encode(payload.to_string())
    )
  }

  #[test]
  fn url_verification() {
    assert!(verify_url("https://shop.example.com/").is_ok());
    assert!(verify_url("ftp://shop.example.com/").is_err());
    assert!(verify_url("not a url").is_err());
  }

  #[test]
  fn role_and_priority_verification() {
    assert_eq!(verify_role("Vendor"), Ok(Role::Vendor));
    assert!(verify_role("customer").is_err());
    assert_eq!(
      verify_priority("courier,su").unwrap().roles(),
      &[Role::Courier, Role::Su]
    );
    assert!(verify_priority("").is_err());
  }
}
