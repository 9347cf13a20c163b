//! Projects are plain subdirectories of a workspace directory. Nothing here
//! is persisted; every operation goes straight to the filesystem.

use std::ffi::{OsStr, OsString};
use std::path::{Component, Path, PathBuf};

use crate::error::ProjectsError;
use crate::workspace::Workspace;

/// Reject anything that is not a single plain path component, so project
/// operations never reach outside the workspace directory.
pub fn validate_name(name: &str) -> Result<(), ProjectsError> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(c)), None) if c == OsStr::new(name) => Ok(()),
        _ => Err(ProjectsError::InvalidProjectName(name.to_string())),
    }
}

fn sorted_entries(dir: &Path) -> Result<Vec<(OsString, bool)>, ProjectsError> {
    let mut entries = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let is_dir = entry.file_type()?.is_dir();
        entries.push((entry.file_name(), is_dir));
    }
    entries.sort();
    Ok(entries)
}

/// Names of the project directories in `dir`, sorted. Plain files are skipped.
pub fn list_projects(dir: &Path) -> Result<Vec<String>, ProjectsError> {
    Ok(sorted_entries(dir)?
        .into_iter()
        .filter(|(_, is_dir)| *is_dir)
        .map(|(name, _)| name.to_string_lossy().to_string())
        .collect())
}

/// Find the first entry of `dir` whose name matches `name` ignoring case.
pub fn find_entry(dir: &Path, name: &str) -> Result<Option<PathBuf>, ProjectsError> {
    let wanted = name.to_lowercase();
    Ok(sorted_entries(dir)?
        .into_iter()
        .find(|(entry, _)| entry.to_string_lossy().to_lowercase() == wanted)
        .map(|(entry, _)| dir.join(entry)))
}

/// Create a new, owner-only project directory inside the workspace.
pub fn create_project(workspace: &Workspace, name: &str) -> Result<PathBuf, ProjectsError> {
    validate_name(name)?;
    let path = workspace.directory.join(name);

    let mut builder = std::fs::DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }

    match builder.create(&path) {
        Ok(()) => {
            tracing::debug!("created project directory {}", path.display());
            Ok(path)
        }
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            Err(ProjectsError::ProjectAlreadyExists(name.to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Recursively delete a project from the workspace. A project that is
/// already gone counts as deleted.
pub fn delete_project(workspace: &Workspace, name: &str) -> Result<(), ProjectsError> {
    validate_name(name)?;
    let path = workspace.directory.join(name);

    let metadata = match std::fs::symlink_metadata(&path) {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("{} already absent", path.display());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if metadata.is_dir() {
        std::fs::remove_dir_all(&path)?;
    } else {
        std::fs::remove_file(&path)?;
    }
    tracing::debug!("deleted {}", path.display());
    Ok(())
}
