use super::ClapSubCommand;
use crate::{error::*, state::AppState};
use async_trait::async_trait;
use clap::{Arg, ArgMatches, Command};
use libclient::DEFAULT_REDIRECT_PATH;

pub(super) struct Logout {}

#[async_trait]
impl ClapSubCommand for Logout {
  fn subcmd() -> Command {
    Command::new("logout")
      .about("Clear every role token and the customer token, then redirect")
      .arg(
        Arg::new("redirect")
          .long("redirect")
          .value_name("PATH")
          .default_value(DEFAULT_REDIRECT_PATH)
          .help("Path to navigate to after logout"),
      )
  }

  async fn exec_matches(sub_m: &ArgMatches, state: &AppState) -> Result<()> {
    let redirect = sub_m
      .get_one::<String>("redirect")
      .map(String::as_str)
      .unwrap_or(DEFAULT_REDIRECT_PATH);
    state.guard().logout(redirect);
    Ok(())
  }
}
