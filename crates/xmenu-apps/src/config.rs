//! Menu generation options.

pub const DEFAULT_FALLBACK_ICON: &str = "application-x-executable";
pub const DEFAULT_ICON_SIZE: i32 = 24;
pub const DEFAULT_SCALE: i32 = 1;
pub const DEFAULT_TERMINAL: &str = "xterm";

/// User-facing options that shape the generated menu.
#[derive(Clone, Debug)]
pub struct MenuOptions {
    /// Icon theme name. Empty means "detect from GTK settings".
    pub icon_theme: String,
    pub icon_size: i32,
    pub scale: i32,
    /// Icon used when an app's own icon cannot be found.
    pub fallback_icon: String,
    /// Leave out `IMG:` fields entirely.
    pub no_icon: bool,
    /// Do not append ` (GenericName)` to entry names.
    pub no_generic_name: bool,
    /// Terminal emulator used for `Terminal=true` apps.
    pub terminal: String,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            icon_theme: String::new(),
            icon_size: DEFAULT_ICON_SIZE,
            scale: DEFAULT_SCALE,
            fallback_icon: DEFAULT_FALLBACK_ICON.to_string(),
            no_icon: false,
            no_generic_name: false,
            terminal: DEFAULT_TERMINAL.to_string(),
        }
    }
}
