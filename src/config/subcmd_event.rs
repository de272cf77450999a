use super::ClapSubCommand;
use crate::{error::*, state::AppState};
use async_trait::async_trait;
use clap::{Arg, ArgMatches, Command};

pub(super) struct Event {}

#[async_trait]
impl ClapSubCommand for Event {
  fn subcmd() -> Command {
    Command::new("event")
      .about("Re-validate the session after another context changed the store")
      .arg(
        Arg::new("key")
          .short('k')
          .long("key")
          .value_name("KEY")
          .help("Changed store key; omit when the whole store was cleared"),
      )
  }

  async fn exec_matches(sub_m: &ArgMatches, state: &AppState) -> Result<()> {
    let key = sub_m.get_one::<String>("key").map(String::as_str);
    match state.guard().handle_storage_event(key) {
      Some(true) => println!("session still authenticated"),
      Some(false) => println!("session no longer authenticated"),
      None => println!("ignored: not a session key"),
    }
    Ok(())
  }
}
