use super::{
  subcmd_decode::Decode, subcmd_event::Event, subcmd_logout::Logout, subcmd_profile::Profile,
  subcmd_set_token::SetToken, subcmd_status::Status, verify_priority, ClapSubCommand,
};
use crate::{
  constants::{DEFAULT_PRIORITY, DEFAULT_STORE_PATH},
  error::*,
  state::AppState,
};
use clap::{command, value_parser, Arg, Command};
use libclient::token::{token_fields::RolePriority, EXPIRY_BUFFER_SECS};
use std::path::PathBuf;

fn options() -> Command {
  command!()
    .subcommand_required(true)
    .arg(
      Arg::new("store_path")
        .short('s')
        .long("store-path")
        .value_name("PATH")
        .global(true)
        .default_value(DEFAULT_STORE_PATH)
        .value_parser(value_parser!(PathBuf))
        .help("Session store file path"),
    )
    .arg(
      Arg::new("priority")
        .long("priority")
        .value_name("ROLES")
        .global(true)
        .default_value(DEFAULT_PRIORITY)
        .value_parser(verify_priority)
        .help("Role scan order, split with comma like \"su,admin,vendor,courier\""),
    )
    .arg(
      Arg::new("buffer_secs")
        .short('b')
        .long("buffer-secs")
        .value_name("SECONDS")
        .global(true)
        .value_parser(value_parser!(i64))
        .help("Seconds before expiry at which a token is treated as expired"),
    )
    .subcommand(Status::subcmd())
    .subcommand(SetToken::subcmd())
    .subcommand(Decode::subcmd())
    .subcommand(Logout::subcmd())
    .subcommand(Profile::subcmd())
    .subcommand(Event::subcmd())
}

fn build_state(matches: &clap::ArgMatches) -> Result<AppState> {
  let Some(store_path) = matches.get_one::<PathBuf>("store_path") else {
    bail!("Store path must be specified");
  };
  let priority = matches
    .get_one::<RolePriority>("priority")
    .cloned()
    .unwrap_or_default();
  let buffer_secs = matches
    .get_one::<i64>("buffer_secs")
    .copied()
    .unwrap_or(EXPIRY_BUFFER_SECS);
  ensure!(buffer_secs >= 0, "Buffer seconds must not be negative");

  Ok(AppState::new(store_path.clone(), priority, buffer_secs))
}

pub async fn parse_opts() -> Result<()> {
  let _ = include_str!("../../Cargo.toml");

  let matches = options().get_matches();
  let Some((name, sub_m)) = matches.subcommand() else {
    bail!("No subcommand given");
  };
  let state = build_state(sub_m)?;

  match name {
    "status" => Status::exec_matches(sub_m, &state).await,
    "set-token" => SetToken::exec_matches(sub_m, &state).await,
    "decode" => Decode::exec_matches(sub_m, &state).await,
    "logout" => Logout::exec_matches(sub_m, &state).await,
    "profile" => Profile::exec_matches(sub_m, &state).await,
    "event" => Event::exec_matches(sub_m, &state).await,
    other => bail!("Unknown subcommand: {other}"),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use libclient::token::token_fields::Role;

  #[test]
  fn global_options_reach_subcommands() {
    let matches = options()
      .try_get_matches_from([
        "multirole-session",
        "status",
        "--store-path",
        "/tmp/store.json",
        "--priority",
        "vendor,admin",
        "-b",
        "60",
      ])
      .unwrap();
    let (name, sub_m) = matches.subcommand().unwrap();
    assert_eq!(name, "status");
    let state = build_state(sub_m).unwrap();
    assert_eq!(state.priority.roles(), &[Role::Vendor, Role::Admin]);
    assert_eq!(state.expiry_buffer_secs, 60);
    assert_eq!(state.store.path(), std::path::Path::new("/tmp/store.json"));
  }

  #[test]
  fn defaults_apply() {
    let matches = options().try_get_matches_from(["multirole-session", "logout"]).unwrap();
    let (_, sub_m) = matches.subcommand().unwrap();
    let state = build_state(sub_m).unwrap();
    assert_eq!(state.priority, RolePriority::default());
    assert_eq!(state.expiry_buffer_secs, EXPIRY_BUFFER_SECS);
  }

  #[test]
  fn rejects_bad_input() {
    assert!(options().try_get_matches_from(["multirole-session"]).is_err());
    assert!(options()
      .try_get_matches_from(["multirole-session", "status", "--priority", "admin,admin"])
      .is_err());
    let matches = options()
      .try_get_matches_from(["multirole-session", "status", "--buffer-secs=-5"])
      .unwrap();
    let (_, sub_m) = matches.subcommand().unwrap();
    assert!(build_state(sub_m).is_err());
  }
}
