use super::ClapSubCommand;
use crate::{error::*, state::AppState};
use async_trait::async_trait;
use clap::{Arg, ArgMatches, Command};

pub(super) struct Decode {}

#[async_trait]
impl ClapSubCommand for Decode {
  fn subcmd() -> Command {
    Command::new("decode")
      .about("Show the claims carried by a token without verifying it")
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
    let Some(token) = sub_m.get_one::<String>("token") else {
      bail!("Token must be specified");
    };
    let Some(claims) = libclient::token::decode(token) else {
      bail!("Token payload could not be decoded");
    };
    println!("{claims}");
    println!("{}", serde_json::to_string_pretty(&claims)?);
    println!("expired: {}", state.policy().is_expired(token));
    Ok(())
  }
}
