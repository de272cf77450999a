mod config;
mod constants;
mod error;
mod log;
mod navigator;
mod state;

use crate::{constants::*, error::*, log::*};
use config::parse_opts;
use tokio::runtime::Builder;

fn main() -> Result<()> {
  init_logger();

  let mut runtime_builder = Builder::new_multi_thread();
  runtime_builder.enable_all();
  runtime_builder.thread_name(THREAD_NAME);
  let runtime = runtime_builder.build()?;

  runtime.block_on(async {
    if let Err(e) = parse_opts().await {
      error!("{e}");
      std::process::exit(1);
    }
  });

  Ok(())
}
