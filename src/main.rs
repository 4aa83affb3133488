use std::io;

use board_rules::config::SessionConfig;
use board_rules::session::session_top::run_stdio_loop;

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = SessionConfig::from_env();
    log::info!("starting board session with {config:?}");
    run_stdio_loop(config)
}
