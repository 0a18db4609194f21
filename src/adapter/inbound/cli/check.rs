//! Handler for the `check` command.

use crate::adapter::inbound::cli::command::ConfigPathArg;
use crate::error::Result;
use crate::infrastructure::config::Config;

/// Print the resolved backends and any unset environment variables.
pub fn execute(args: &ConfigPathArg) -> Result<()> {
    let config = args.load()?;
    print!("{}", render(&config));
    Ok(())
}

fn render(config: &Config) -> String {
    let mut out = format!(
        "Store: {}\nQueue: {}\nDatabase: {}\n",
        config.store_kind(),
        config.queue_kind(),
        config.store.namespace()
    );
    for name in config.environment.missing() {
        out.push_str("Missing: ");
        out.push_str(name);
        out.push('\n');
    }
    out
}
