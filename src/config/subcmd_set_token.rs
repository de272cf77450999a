use super::{verify_role, ClapSubCommand};
use crate::{error::*, log::*, state::AppState};
use async_trait::async_trait;
use clap::{Arg, ArgMatches, Command};
use libclient::token::token_fields::{BearerToken, Field, Role, TryNewField};

pub(super) struct SetToken {}

#[async_trait]
impl ClapSubCommand for SetToken {
  fn subcmd() -> Command {
    Command::new("set-token")
      .about("Store a role token as a login flow would")
      .arg(
        Arg::new("role")
          .short('r')
          .long("role")
          .value_name("ROLE")
          .required(true)
          .value_parser(verify_role)
          .help("One of su, admin, vendor, courier"),
      )
      .arg(
        Arg::new("token")
          .short('t')
          .long("token")
          .value_name("TOKEN")
          .required(true)
          .help("Bearer token in header.payload.signature form"),
      )
  }

  async fn exec_matches(sub_m: &ArgMatches, state: &AppState) -> Result<()> {
    let Some(role) = sub_m.get_one::<Role>("role") else {
      bail!("Role must be specified");
    };
    let Some(token) = sub_m.get_one::<String>("token") else {
      bail!("Token must be specified");
    };
    let token = BearerToken::new(token.as_str())?;
    if state.policy().is_expired(token.as_str()) {
      warn!("Stored {role} token is already expired or undecodable; the next check will purge it");
    }
    state.token_store().set_token(*role, &token)?;
    println!("stored {}", role.storage_key());
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::tests::{temp_state, token_expiring_in};
  use libclient::KeyValueStore;

  #[tokio::test]
  async fn set_token_replaces_slot() -> Result<()> {
    let (state, path) = temp_state("set-token");
    let first = token_expiring_in("courier", 3600);
    let second = token_expiring_in("courier", 7200);

    for token in [&first, &second] {
      let sub_m = SetToken::subcmd().try_get_matches_from(["set-token", "-r", "courier", "-t", token.as_str()])?;
      SetToken::exec_matches(&sub_m, &state).await?;
    }
    assert_eq!(state.store.get("courier_token"), Some(second));

    let sub_m = SetToken::subcmd().try_get_matches_from(["set-token", "-r", "courier", "-t", " "])?;
    assert!(SetToken::exec_matches(&sub_m, &state).await.is_err());

    let _ = std::fs::remove_file(path);
    Ok(())
  }
}
