pub mod args;
mod layout;
mod prompt;

use std::io;
use std::path::PathBuf;

use clap::CommandFactory;
use colored::Colorize;

use projects_core::config::Config;
use projects_core::error::ProjectsError;
use projects_core::project;
use projects_core::workspace::{Workspace, WorkspaceDatabase};

use self::args::{Cli, Command};
use crate::editor;

const SUCCESS: &str = "✔️";
const FAILURE: &str = "❌";

const WORKSPACE_NAME_REQUIRED: &str = "Workspace name must be provided!";
const PROJECT_NAME_REQUIRED: &str = "Project name must be provided!";

/// Everything a command needs for one invocation: settings and the
/// workspace database loaded from `state_path`.
struct Session {
    config: Config,
    state_path: PathBuf,
    db: WorkspaceDatabase,
}

impl Session {
    /// Write the database back. A failed write is logged, never fatal.
    fn persist(&self) {
        if let Err(e) = self.db.save(&self.state_path) {
            tracing::error!("{e}");
        }
    }

    fn current(&self) -> Result<&Workspace, ProjectsError> {
        self.db.current().ok_or(ProjectsError::NoCurrentWorkspace)
    }
}

/// Dispatch one invocation. Command failures are reported as a message on
/// stderr; the process still exits successfully.
pub fn run(cli: Cli) -> color_eyre::Result<()> {
    let mut config = Config::load().unwrap_or_else(|e| {
        tracing::warn!("{e}; using default settings");
        Config::default()
    });
    if let Some(state) = cli.state {
        config.state_path = Some(state);
    }
    if let Some(editor) = cli.editor {
        config.editor = editor;
    }

    let state_path = match config.state_path() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("{e}");
            return Ok(());
        }
    };
    let db = WorkspaceDatabase::load_or_default(&state_path);
    let mut session = Session {
        config,
        state_path,
        db,
    };

    let result = match cli.command {
        None => match non_empty(cli.project) {
            Some(name) => cmd_open(&session, &name),
            None => cmd_help(&session),
        },
        Some(Command::New { name }) => match required(name, PROJECT_NAME_REQUIRED) {
            Some(name) => cmd_new(&session, &name),
            None => Ok(()),
        },
        Some(Command::Add { name }) => match required(name, WORKSPACE_NAME_REQUIRED) {
            Some(name) => cmd_add(&mut session, name),
            None => Ok(()),
        },
        Some(Command::Remove { name }) => match required(name, WORKSPACE_NAME_REQUIRED) {
            Some(name) => cmd_remove(&mut session, &name),
            None => Ok(()),
        },
        Some(Command::Delete { name }) => match required(name, PROJECT_NAME_REQUIRED) {
            Some(name) => cmd_delete(&session, &name),
            None => Ok(()),
        },
        Some(Command::List { workspace }) => cmd_list(&session, non_empty(workspace)),
        Some(Command::Set { name }) => match required(name, WORKSPACE_NAME_REQUIRED) {
            Some(name) => cmd_set(&mut session, &name),
            None => Ok(()),
        },
        Some(Command::Workspaces) => cmd_workspaces(&session),
    };

    if let Err(e) = result {
        eprintln!("{e}");
    }

    Ok(())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn required(value: Option<String>, message: &str) -> Option<String> {
    let value = non_empty(value);
    if value.is_none() {
        eprintln!("{message}");
    }
    value
}

fn glyph(ok: bool) -> &'static str {
    if ok { SUCCESS } else { FAILURE }
}

fn cmd_help(session: &Session) -> Result<(), ProjectsError> {
    Cli::command().print_help()?;
    if let Some(workspace) = session.db.current() {
        println!("\nCurrent workspace - {}", workspace.name.bold());
    }
    Ok(())
}

fn cmd_open(session: &Session, name: &str) -> Result<(), ProjectsError> {
    let workspace = session.current()?;
    match project::find_entry(&workspace.directory, name)? {
        Some(path) => editor::open(&session.config.editor, &path),
        None => tracing::debug!("no project matching {name:?} in {}", workspace.name),
    }
    Ok(())
}

fn cmd_new(session: &Session, name: &str) -> Result<(), ProjectsError> {
    let workspace = session.current()?;
    let path = project::create_project(workspace, name)?;
    editor::open(&session.config.editor, &path);
    Ok(())
}

fn cmd_add(session: &mut Session, name: String) -> Result<(), ProjectsError> {
    let directory = std::env::current_dir()?;
    let message = format!("Added workspace: {name} ({})", directory.display());
    session.db.add(Workspace { name, directory })?;
    session.persist();
    eprintln!("{message}");
    Ok(())
}

fn cmd_remove(session: &mut Session, name: &str) -> Result<(), ProjectsError> {
    let removed = session.db.remove(name);
    session.persist();
    println!("{}", glyph(removed));
    Ok(())
}

fn cmd_delete(session: &Session, name: &str) -> Result<(), ProjectsError> {
    let workspace = session.current()?;
    project::validate_name(name)?;

    let confirmed = prompt::confirm_deletion(name, &mut io::stdin().lock(), &mut io::stdout())
        .unwrap_or_else(|e| {
            tracing::debug!("confirmation aborted: {e}");
            false
        });
    if !confirmed {
        return Ok(());
    }

    let deleted = match project::delete_project(workspace, name) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("{e}");
            false
        }
    };
    println!("{}", glyph(deleted));
    Ok(())
}

fn cmd_list(session: &Session, workspace: Option<String>) -> Result<(), ProjectsError> {
    let workspace = match workspace {
        Some(name) => session
            .db
            .find(&name)
            .ok_or(ProjectsError::WorkspaceNotFound(name))?,
        None => session.current()?,
    };

    let projects = project::list_projects(&workspace.directory)?;
    if projects.is_empty() {
        eprintln!("No projects in workspace \"{}\"", workspace.name);
        return Ok(());
    }
    for line in layout::two_columns(&projects) {
        println!("{line}");
    }
    Ok(())
}

fn cmd_set(session: &mut Session, name: &str) -> Result<(), ProjectsError> {
    let changed = session.db.set_current(name);
    if changed {
        session.persist();
    }
    println!("{}", glyph(changed));
    Ok(())
}

fn cmd_workspaces(session: &Session) -> Result<(), ProjectsError> {
    if session.db.workspaces.is_empty() {
        eprintln!("No workspaces registered. Use `projects add <WORKSPACE_NAME>` in a directory.");
        return Ok(());
    }

    let current = session.db.current().map(|w| w.name.as_str());
    for workspace in &session.db.workspaces {
        let name = if current == Some(workspace.name.as_str()) {
            workspace.name.green().bold()
        } else {
            workspace.name.normal()
        };
        println!("{name} - {}\n", workspace.directory.display());
    }
    Ok(())
}
