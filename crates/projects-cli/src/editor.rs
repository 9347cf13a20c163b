use std::path::Path;
use std::process::{self, Stdio};

use color_eyre::eyre::{bail, WrapErr};

/// An editor command line such as `code` or `code --reuse-window`.
#[derive(Debug, PartialEq, Eq)]
pub struct Editor {
    program: String,
    args: Vec<String>,
}

impl Editor {
    pub fn parse(command_line: &str) -> color_eyre::Result<Self> {
        let mut words = shell_words::split(command_line)
            .wrap_err_with(|| format!("failed to parse editor command: {command_line:?}"))?
            .into_iter();
        let Some(program) = words.next() else {
            bail!("editor command is empty");
        };
        Ok(Self {
            program,
            args: words.collect(),
        })
    }

    fn command(&self, path: &Path) -> process::Command {
        let mut command = process::Command::new(&self.program);
        command.args(&self.args).arg(path);
        command
    }

    /// Start the editor on `path` without waiting for it to exit.
    pub fn launch(&self, path: &Path) -> std::io::Result<()> {
        let child = self
            .command(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        tracing::debug!("launched {} (pid {}) on {}", self.program, child.id(), path.display());
        Ok(())
    }
}

/// Open `path` in the configured editor. Failures are logged and otherwise ignored.
pub fn open(command_line: &str, path: &Path) {
    let result = Editor::parse(command_line).and_then(|editor| {
        editor
            .launch(path)
            .wrap_err_with(|| format!("failed to launch editor {command_line:?}"))
    });
    if let Err(e) = result {
        tracing::warn!("{e:#}");
    }
}
