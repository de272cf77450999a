use super::{verify_url, ClapSubCommand};
use crate::{constants::DEFAULT_TIMEOUT_SEC, error::*, navigator::ConsoleNavigator, state::AppState};
use async_trait::async_trait;
use clap::{value_parser, Arg, ArgMatches, Command};
use libclient::{ReqwestProfileClient, SessionClient, SessionConfig, DEFAULT_REDIRECT_PATH};
use std::{sync::Arc, time::Duration};
use url::Url;

pub(super) struct Profile {}

#[async_trait]
impl ClapSubCommand for Profile {
  fn subcmd() -> Command {
    Command::new("profile")
      .about("Fetch the user profile with the current session token")
      .arg(
        Arg::new("api_base")
          .short('a')
          .long("api-base")
          .value_name("URL")
          .required(true)
          .value_parser(verify_url)
          .help("Backend api base url like \"http://localhost:5000\""),
      )
      .arg(
        Arg::new("redirect")
          .long("redirect")
          .value_name("PATH")
          .default_value(DEFAULT_REDIRECT_PATH)
          .help("Login path to navigate to when no session is alive"),
      )
      .arg(
        Arg::new("timeout_sec")
          .long("timeout-sec")
          .value_name("SECONDS")
          .default_value(DEFAULT_TIMEOUT_SEC)
          .value_parser(value_parser!(u64))
          .help("Request timeout in seconds"),
      )
  }

  async fn exec_matches(sub_m: &ArgMatches, state: &AppState) -> Result<()> {
    let Some(api_base) = sub_m.get_one::<String>("api_base") else {
      bail!("Api base url must be specified");
    };
    let redirect = sub_m
      .get_one::<String>("redirect")
      .map(String::as_str)
      .unwrap_or(DEFAULT_REDIRECT_PATH);
    let timeout = sub_m.get_one::<u64>("timeout_sec").map(|s| Duration::from_secs(*s));

    let mut config = SessionConfig::new(api_base.parse::<Url>()?);
    config.priority = state.priority.clone();
    config.expiry_buffer_secs = state.expiry_buffer_secs;

    let client = SessionClient::new(
      &config,
      state.store.clone(),
      Arc::new(ConsoleNavigator),
      Arc::new(ReqwestProfileClient::new(timeout)),
    );
    let profile = client.fetch_profile::<serde_json::Value>(redirect).await?;
    println!("{}", serde_json::to_string_pretty(&profile)?);
    Ok(())
  }
}
