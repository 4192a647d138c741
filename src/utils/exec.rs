//! Running external tools to completion.
//!
//! ```ignore
//! let output = Cmd::new("crunch")
//!     .args(["-file", "hero.png", "-out", "hero.ktx"])
//!     .run()?;
//! ```

use std::collections::HashMap;
use std::ffi::{OsStr, OsString};
use std::process::{Command, Output};

use anyhow::{Context, Result, bail};

use crate::debug;

/// One tool invocation. Arguments reach the tool verbatim, empty ones included.
pub struct Cmd {
    program: OsString,
    args: Vec<OsString>,
}

impl Cmd {
    pub fn new<S: AsRef<OsStr>>(program: S) -> Self {
        Self {
            program: program.as_ref().to_owned(),
            args: Vec::new(),
        }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|arg| arg.as_ref().to_owned()));
        self
    }

    /// Wait for the tool and capture its output.
    ///
    /// A non-zero exit status is an error carrying the tool's stderr.
    pub fn run(self) -> Result<Output> {
        let name = self.program.to_string_lossy().into_owned();
        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .with_context(|| format!("Failed to execute `{name}`"))?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();
        if !output.status.success() {
            if stderr.is_empty() {
                bail!("`{name}` exited with {}", output.status);
            }
            bail!("`{name}` exited with {}:\n{stderr}", output.status);
        }

        if !stderr.is_empty() {
            debug!("tool"; "{name}: {stderr}");
        }
        Ok(output)
    }
}

/// Replace `$KEY` placeholders in command arguments
pub fn resolve_args(args: &[String], vars: &HashMap<&str, String>) -> Vec<String> {
    args.iter()
        .map(|arg| {
            vars.iter().fold(arg.clone(), |acc, (key, value)| {
                acc.replace(&format!("${key}"), value)
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_args_are_kept() {
        let cmd = Cmd::new("crunch").args(["", "-quality", "", "255"]);
        assert_eq!(cmd.args, ["", "-quality", "", "255"].map(OsString::from));
    }

    #[test]
    fn test_resolve_args() {
        let vars = HashMap::from([
            ("INPUT", "/assets/hero.png".to_string()),
            ("OUTPUT", "/build/hero.ktx".to_string()),
        ]);
        let args = ["", "-file", "$INPUT", "-out", "$OUTPUT"].map(String::from);

        assert_eq!(
            resolve_args(&args, &vars),
            ["", "-file", "/assets/hero.png", "-out", "/build/hero.ktx"]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_empty_arg_reaches_tool_positionally() {
        let output = Cmd::new("sh")
            .args(["-c", "printf '%s|%s' \"$#\" \"$2\"", "sh", "", "x"])
            .run()
            .unwrap();
        assert_eq!(output.stdout, b"2|x");
    }

    #[cfg(unix)]
    #[test]
    fn test_failure_carries_stderr() {
        let err = Cmd::new("sh")
            .args(["-c", "echo 'bad header' >&2; exit 3"])
            .run()
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("`sh` exited with"));
        assert!(msg.contains("bad header"));
    }

    #[test]
    fn test_missing_program_is_error() {
        let err = Cmd::new("pack-assets-no-such-tool").run().unwrap_err();
        assert!(err.to_string().contains("Failed to execute"));
    }
}
