/// Errors produced by core `projects` operations.
#[derive(Debug, thiserror::Error)]
pub enum ProjectsError {
    #[error("Workspace \"{0}\" already exists")]
    WorkspaceAlreadyExists(String),

    #[error("Workspace \"{0}\" does not exist")]
    WorkspaceNotFound(String),

    #[error("No current workspace set (use `projects set <WORKSPACE_NAME>`)")]
    NoCurrentWorkspace,

    #[error("Project \"{0}\" already exists")]
    ProjectAlreadyExists(String),

    #[error("invalid project name: {0:?}")]
    InvalidProjectName(String),

    #[error("could not determine home directory")]
    HomeDirUnknown,

    #[error("failed to read workspace database: {0}")]
    StateRead(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("failed to write workspace database: {0}")]
    StateWrite(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("failed to read settings: {0}")]
    SettingsRead(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
