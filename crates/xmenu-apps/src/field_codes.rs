//! Expansion of `%X` field codes in `Exec` lines.

use crate::desktop_entry::Application;

/// Build the final command for `app`.
///
/// Terminal apps are wrapped as `<terminal> -e <exec>` before expansion.
/// Field codes are replaced from the right so that offsets to the left of
/// the current code stay valid; `%c`, `%i` and `%k` have values, every other
/// letter code expands to nothing, and `%` followed by a non-letter is kept.
pub fn expand(app: &Application, terminal: &str) -> String {
    let mut command = if app.terminal {
        format!("{} -e {}", terminal, app.exec)
    } else {
        app.exec.clone()
    };

    let mut cursor = command.len();
    while let Some(pos) = command[..cursor].rfind('%') {
        let code = command[pos + 1..].chars().next();
        if let Some(code) = code.filter(char::is_ascii_alphabetic) {
            let replacement = field_value(app, code);
            command.replace_range(pos..pos + 2, &replacement);
        }
        cursor = pos;
    }

    command
}

fn field_value(app: &Application, code: char) -> String {
    match code {
        'c' => app.desktop_file.display().to_string(),
        'i' if !app.icon.is_empty() => format!("--icon {}", app.icon),
        'k' => app.name.clone(),
        _ => String::new(),
    }
}
