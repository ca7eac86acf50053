use std::io::{BufRead, IsTerminal, Write};

use anyhow::Context;

/// Password from `--password` / `HYPERLOCAL_PASSWORD`, else one line of stdin.
pub fn resolve(provided: Option<&str>) -> anyhow::Result<String> {
    if let Some(password) = provided {
        return Ok(password.to_string());
    }

    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        eprint!("Password: ");
        std::io::stderr().flush().context("failed to flush prompt")?;
    }
    let mut line = String::new();
    stdin
        .lock()
        .read_line(&mut line)
        .context("failed to read password from stdin")?;
    Ok(strip_newline(line))
}

fn strip_newline(mut line: String) -> String {
    while line.ends_with(['\n', '\r']) {
        line.pop();
    }
    line
}
