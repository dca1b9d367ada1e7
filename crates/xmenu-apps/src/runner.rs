//! Piping the menu through an external menu program.

use crate::error::{MenuError, Result};
use crate::menu::Menu;
use log::{debug, info};
use std::io::{BufWriter, Write};
use std::process::{Command, Stdio};

pub const DEFAULT_MENU_PROGRAM: &str = "xmenu";

/// An xmenu-compatible program: reads the menu on stdin, prints the chosen command.
#[derive(Clone, Debug)]
pub struct MenuRunner {
    pub program: String,
    pub args: Vec<String>,
}

impl MenuRunner {
    /// xmenu itself needs `-i` to stop looking for `IMG:` fields when icons are off.
    pub fn new(program: &str, mut args: Vec<String>, no_icon: bool) -> Self {
        if no_icon && program == DEFAULT_MENU_PROGRAM {
            args.push("-i".to_string());
        }
        Self {
            program: program.to_string(),
            args,
        }
    }

    /// Show `menu` and return the selected command, if any.
    pub fn select(&self, menu: &Menu) -> Result<Option<String>> {
        debug!("Running {} {:?}", self.program, self.args);
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|source| MenuError::Spawn {
                command: self.program.clone(),
                source,
            })?;

        {
            let stdin = child
                .stdin
                .take()
                .ok_or_else(|| MenuError::Runner("stdin not captured".to_string()))?;
            let mut writer = BufWriter::new(stdin);
            menu.write_to(&mut writer)?;
            writer.flush()?;
        }

        let output = child.wait_with_output()?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        let selection = stdout.lines().next().unwrap_or_default().trim_end();

        if selection.is_empty() {
            debug!("Nothing selected");
            Ok(None)
        } else {
            Ok(Some(selection.to_string()))
        }
    }
}

/// Launch `command` through the shell without waiting for it.
pub fn launch(command: &str) -> Result<()> {
    info!("Launching: {}", command);
    let status = Command::new("sh")
        .arg("-c")
        .arg(format!("{} &", command))
        .status()
        .map_err(|source| MenuError::Spawn {
            command: command.to_string(),
            source,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(MenuError::Runner(format!("`{}` exited with {}", command, status)))
    }
}
