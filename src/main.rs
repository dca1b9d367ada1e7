//! xdg-xmenu - XDG application menu for xmenu
//!
//! Scans desktop entries, resolves their icons through the icon theme and
//! pipes the resulting menu through xmenu, then launches the selection.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Args;
use log::info;
use std::io::{self, BufWriter};
use xmenu_apps::{Environment, MenuRunner, generate_menu, runner};

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    let env = Environment::from_env();
    let options = args.menu_options();
    let menu = generate_menu(&env, &options);

    if args.dump {
        let mut out = BufWriter::new(io::stdout().lock());
        menu.write_to(&mut out).context("Failed to write menu")?;
        return Ok(());
    }

    let menu_runner = MenuRunner::new(&args.menu_program, args.menu_args.clone(), args.no_icon);
    let Some(command) = menu_runner
        .select(&menu)
        .with_context(|| format!("Failed to run menu program `{}`", args.menu_program))?
    else {
        info!("Menu dismissed");
        return Ok(());
    };

    if args.dry_run {
        println!("{}", command);
    } else {
        runner::launch(&command).context("Failed to launch selection")?;
    }

    Ok(())
}

fn init_logging(debug: bool) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_filter(debug)))
        .init();
}

/// `-D` raises only this tool's own crates to `debug`.
fn log_filter(debug: bool) -> &'static str {
    if debug {
        "warn,xdg_xmenu=debug,xmenu_apps=debug"
    } else {
        "warn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_filter_is_scoped_to_own_crates() {
        assert_eq!(log_filter(false), "warn");
        let filter = log_filter(true);
        assert!(filter.starts_with("warn,"));
        assert!(filter.contains("xdg_xmenu=debug"));
        assert!(filter.contains("xmenu_apps=debug"));
    }
}
