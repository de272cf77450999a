use crate::log::*;
use libclient::Navigator;

/// Terminal stand-in for a full page navigation: reports where the user is sent.
pub struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
  fn navigate(&self, path: &str) {
    info!("Navigating to {path}");
    println!("redirect: {path}");
  }
}
