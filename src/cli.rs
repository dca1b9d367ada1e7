//! Command line options.

use clap::Parser;
use xmenu_apps::MenuOptions;
use xmenu_apps::config::{DEFAULT_FALLBACK_ICON, DEFAULT_ICON_SIZE, DEFAULT_SCALE, DEFAULT_TERMINAL};
use xmenu_apps::runner::DEFAULT_MENU_PROGRAM;

#[derive(Parser, Debug)]
#[command(name = "xdg-xmenu")]
#[command(about = "Generate XDG menu for xmenu")]
#[command(after_help = "Options after `--' are passed to the menu program")]
pub struct Args {
    /// Fallback icon name
    #[arg(short = 'b', long, value_name = "ICON", default_value = DEFAULT_FALLBACK_ICON)]
    pub fallback_icon: String,

    /// Dump generated menu, do not run xmenu
    #[arg(short = 'd', long)]
    pub dump: bool,

    /// Print debug messages to stderr
    #[arg(short = 'D', long)]
    pub debug: bool,

    /// Do not show generic name of the app
    #[arg(short = 'G', long)]
    pub no_generic_name: bool,

    /// Icon theme for app icons. Defaults to GTK 3 settings
    #[arg(short = 'i', long, value_name = "THEME", default_value = "")]
    pub icon_theme: String,

    /// Disable icons in xmenu
    #[arg(short = 'I', long)]
    pub no_icon: bool,

    /// Do not run the selected app, print its command instead
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Icon size for app icons
    #[arg(short = 's', long, value_name = "SIZE", default_value_t = DEFAULT_ICON_SIZE,
          value_parser = clap::value_parser!(i32).range(1..))]
    pub icon_size: i32,

    /// Icon scale factor, useful on HiDPI screens
    #[arg(short = 'S', long, value_name = "SCALE", default_value_t = DEFAULT_SCALE,
          value_parser = clap::value_parser!(i32).range(1..))]
    pub scale: i32,

    /// Terminal emulator for terminal apps
    #[arg(short = 't', long, value_name = "TERMINAL", default_value = DEFAULT_TERMINAL)]
    pub terminal: String,

    /// Menu program to run
    #[arg(short = 'x', long = "xmenu", value_name = "CMD", default_value = DEFAULT_MENU_PROGRAM)]
    pub menu_program: String,

    /// Arguments for the menu program
    #[arg(last = true, value_name = "XMENU_ARGS")]
    pub menu_args: Vec<String>,
}

impl Args {
    pub fn menu_options(&self) -> MenuOptions {
        MenuOptions {
            icon_theme: self.icon_theme.clone(),
            icon_size: self.icon_size,
            scale: self.scale,
            fallback_icon: self.fallback_icon.clone(),
            no_icon: self.no_icon,
            no_generic_name: self.no_generic_name,
            terminal: self.terminal.clone(),
        }
    }
}
