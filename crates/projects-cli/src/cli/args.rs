use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "projects",
    about = "A project manager app",
    version,
    override_usage = "projects <PROJECT_NAME>   Start a project instantly\n       projects <COMMAND> [ARGS]"
)]
pub struct Cli {
    /// Project in the current workspace to open in the editor
    #[arg(value_name = "PROJECT_NAME")]
    pub project: Option<String>,

    /// Path of the workspace database (defaults to ~/projects.json)
    #[arg(long, env = "PROJECTS_STATE", global = true)]
    pub state: Option<PathBuf>,

    /// Editor command used to open projects
    #[arg(long, env = "PROJECTS_EDITOR", global = true)]
    pub editor: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a new project
    #[command(visible_alias = "n")]
    New {
        #[arg(value_name = "PROJECT_NAME")]
        name: Option<String>,
    },

    /// Add current directory into workspaces with the given name
    #[command(visible_alias = "a")]
    Add {
        #[arg(value_name = "WORKSPACE_NAME")]
        name: Option<String>,
    },

    /// Remove workspace
    #[command(visible_aliases = ["r", "rm"])]
    Remove {
        #[arg(value_name = "WORKSPACE_NAME")]
        name: Option<String>,
    },

    /// Remove specific project from the current workspace
    #[command(visible_aliases = ["d", "del"])]
    Delete {
        #[arg(value_name = "PROJECT_NAME")]
        name: Option<String>,
    },

    /// List existing projects for the current workspace
    #[command(visible_alias = "l")]
    List {
        /// Workspace to list instead of the current one
        #[arg(value_name = "WORKSPACE_NAME")]
        workspace: Option<String>,
    },

    /// Set a default workspace
    #[command(visible_alias = "s")]
    Set {
        #[arg(value_name = "WORKSPACE_NAME")]
        name: Option<String>,
    },

    /// List existing workspaces
    #[command(visible_alias = "w")]
    Workspaces,
}
