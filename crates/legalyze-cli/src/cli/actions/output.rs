use std::io::{self, BufRead, Write};

use anyhow::{bail, Result};
use serde::Serialize;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Read one trimmed line from stdin after showing `label`
pub fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let value = line.trim().to_string();
    if value.is_empty() {
        bail!("{} is required", label.trim_end_matches([':', ' ']));
    }
    Ok(value)
}

pub fn prompt_password(label: &str) -> Result<String> {
    Ok(rpassword::prompt_password(label)?)
}
