use super::ClapSubCommand;
use crate::{error::*, log::*, state::AppState};
use async_trait::async_trait;
use clap::{Arg, ArgMatches, Command};
use libclient::{token::token_fields::Field, KeyValueStore};

pub(super) struct Status {}

#[async_trait]
impl ClapSubCommand for Status {
  fn subcmd() -> Command {
    Command::new("status")
      .about("Show every role token slot and the session currently in use")
      .arg(
        Arg::new("no_cleanup")
          .short('n')
          .long("no-cleanup")
          .action(clap::ArgAction::SetTrue)
          .help("Only inspect; do not remove expired tokens"),
      )
  }

  async fn exec_matches(sub_m: &ArgMatches, state: &AppState) -> Result<()> {
    let tokens = state.token_store();
    let policy = tokens.policy();

    for role in state.priority.roles() {
      let key = role.storage_key();
      let line = match tokens.get_token(*role) {
        None => "absent".to_string(),
        Some(token) => match policy.remaining_seconds(token.as_str()) {
          Some(secs) if !policy.is_expired(token.as_str()) => format!("valid, {secs}s remaining"),
          Some(secs) => format!("expired ({secs}s remaining, buffer {}s)", policy.buffer_secs),
          None => "expired (undecodable)".to_string(),
        },
      };
      println!("{key}: {line}");
    }
    if state.store.get(libclient::token::CUSTOMER_TOKEN_KEY).is_some() {
      println!("{}: present", libclient::token::CUSTOMER_TOKEN_KEY);
    }

    let valid = if sub_m.get_flag("no_cleanup") {
      tokens.get_valid()
    } else {
      tokens.cleanup_and_get_valid()
    };
    match valid {
      Some(v) => {
        info!("Session alive via {}", v.key());
        println!("authenticated as {} ({})", v.role, v.key());
      }
      None => println!("not authenticated"),
    }
    Ok(())
  }
}
