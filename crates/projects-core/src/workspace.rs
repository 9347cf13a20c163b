use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ProjectsError;

/// A named base directory under which projects live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    pub name: String,
    pub directory: PathBuf,
}

/// Persistent record of known workspaces, serialized as JSON.
///
/// `current` holds a workspace name and is resolved against `workspaces`
/// on every lookup, so removing the current workspace leaves no workspace
/// active rather than a dangling reference.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceDatabase {
    #[serde(default, deserialize_with = "null_as_default")]
    pub current: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub workspaces: Vec<Workspace>,
}

// Older databases were written with `"workspaces": null` for an empty list.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl WorkspaceDatabase {
    /// Load the database from disk, or return an empty one if it doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ProjectsError> {
        if !path.exists() {
            tracing::debug!("no workspace database at {}", path.display());
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(path).map_err(|e| ProjectsError::StateRead(Box::new(e)))?;
        serde_json::from_str(&content).map_err(|e| ProjectsError::StateRead(Box::new(e)))
    }

    /// Load the database, treating an unreadable or corrupt file as empty.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!("{e}; starting with no workspaces");
            Self::default()
        })
    }

    /// Save the database to disk, replacing the previous contents.
    pub fn save(&self, path: &Path) -> Result<(), ProjectsError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ProjectsError::StateWrite(Box::new(e)))?;
        }
        let content =
            serde_json::to_string_pretty(self).map_err(|e| ProjectsError::StateWrite(Box::new(e)))?;
        std::fs::write(path, content).map_err(|e| ProjectsError::StateWrite(Box::new(e)))?;
        tracing::debug!(
            "saved {} workspaces to {}",
            self.workspaces.len(),
            path.display()
        );
        Ok(())
    }

    /// Find a workspace by exact name.
    pub fn find(&self, name: &str) -> Option<&Workspace> {
        self.workspaces.iter().find(|w| w.name == name)
    }

    /// The active workspace, if `current` names a registered one.
    pub fn current(&self) -> Option<&Workspace> {
        if self.current.is_empty() {
            return None;
        }
        self.find(&self.current)
    }

    /// Register a workspace. The first workspace ever added becomes current.
    pub fn add(&mut self, workspace: Workspace) -> Result<(), ProjectsError> {
        if self.find(&workspace.name).is_some() {
            return Err(ProjectsError::WorkspaceAlreadyExists(workspace.name));
        }
        self.workspaces.push(workspace);
        if self.workspaces.len() == 1 {
            self.current = self.workspaces[0].name.clone();
        }
        Ok(())
    }

    /// Unregister a workspace by name, returning whether anything was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.workspaces.len();
        self.workspaces.retain(|w| w.name != name);
        self.workspaces.len() != before
    }

    /// Make `name` the current workspace. Fails if it isn't registered.
    pub fn set_current(&mut self, name: &str) -> bool {
        if self.find(name).is_none() {
            return false;
        }
        self.current = name.to_string();
        true
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn workspace(name: &str, dir: &str) -> Workspace {
        Workspace {
            name: name.to_string(),
            directory: PathBuf::from(dir),
        }
    }

    #[test]
    fn first_workspace_becomes_current() {
        let mut db = WorkspaceDatabase::default();
        assert!(db.current().is_none());

        db.add(workspace("work", "/tmp/w")).unwrap();
        assert_eq!(db.current, "work");

        db.add(workspace("play", "/tmp/p")).unwrap();
        assert_eq!(db.current().map(|w| w.name.as_str()), Some("work"));
        assert_eq!(db.workspaces.len(), 2);
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let mut db = WorkspaceDatabase::default();
        db.add(workspace("work", "/tmp/w")).unwrap();

        let err = db.add(workspace("work", "/elsewhere")).unwrap_err();
        assert!(matches!(err, ProjectsError::WorkspaceAlreadyExists(ref n) if n == "work"));
        assert_eq!(db.workspaces, vec![workspace("work", "/tmp/w")]);
    }

    #[test]
    fn names_are_case_sensitive() {
        let mut db = WorkspaceDatabase::default();
        db.add(workspace("work", "/tmp/w")).unwrap();
        db.add(workspace("Work", "/tmp/W")).unwrap();

        assert_eq!(db.find("Work").unwrap().directory, PathBuf::from("/tmp/W"));
        assert!(db.find("WORK").is_none());
    }

    #[test]
    fn remove_reports_whether_anything_changed() {
        let mut db = WorkspaceDatabase::default();
        db.add(workspace("work", "/tmp/w")).unwrap();
        db.add(workspace("play", "/tmp/p")).unwrap();

        assert!(!db.remove("missing"));
        assert_eq!(db.workspaces.len(), 2);

        assert!(db.remove("play"));
        assert_eq!(db.workspaces, vec![workspace("work", "/tmp/w")]);
    }

    #[test]
    fn removing_current_leaves_no_active_workspace() {
        let mut db = WorkspaceDatabase::default();
        db.add(workspace("work", "/tmp/w")).unwrap();
        db.add(workspace("play", "/tmp/p")).unwrap();

        assert!(db.remove("work"));
        assert_eq!(db.current, "work");
        assert!(db.current().is_none());
    }

    #[test]
    fn set_current_requires_registered_name() {
        let mut db = WorkspaceDatabase::default();
        db.add(workspace("work", "/tmp/w")).unwrap();
        db.add(workspace("play", "/tmp/p")).unwrap();

        assert!(!db.set_current("missing"));
        assert_eq!(db.current, "work");

        assert!(db.set_current("play"));
        assert_eq!(db.current().unwrap().directory, PathBuf::from("/tmp/p"));
    }

    #[test]
    fn save_then_load_preserves_order_and_current() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("projects.json");

        let mut db = WorkspaceDatabase::default();
        db.add(workspace("c", "/c")).unwrap();
        db.add(workspace("a", "/a")).unwrap();
        db.add(workspace("b", "/b")).unwrap();
        db.set_current("a");
        db.save(&path).unwrap();

        let loaded = WorkspaceDatabase::load(&path).unwrap();
        assert_eq!(loaded, db);
        assert_eq!(
            loaded
                .workspaces
                .iter()
                .map(|w| w.name.as_str())
                .collect::<Vec<_>>(),
            vec!["c", "a", "b"]
        );
    }

    #[test]
    fn missing_file_loads_empty() {
        let tmp = TempDir::new().unwrap();
        let db = WorkspaceDatabase::load(&tmp.path().join("projects.json")).unwrap();
        assert_eq!(db, WorkspaceDatabase::default());
    }

    #[test]
    fn corrupt_file_is_a_read_error_but_degrades_to_empty() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("projects.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            WorkspaceDatabase::load(&path),
            Err(ProjectsError::StateRead(_))
        ));
        assert_eq!(
            WorkspaceDatabase::load_or_default(&path),
            WorkspaceDatabase::default()
        );
    }

    #[test]
    fn unknown_fields_and_null_lists_are_tolerated() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("projects.json");
        std::fs::write(&path, r#"{"current":"","workspaces":null,"theme":"dark"}"#).unwrap();

        let db = WorkspaceDatabase::load(&path).unwrap();
        assert!(db.workspaces.is_empty());

        std::fs::write(
            &path,
            r#"{"current":"work","workspaces":[{"name":"work","directory":"/tmp/w","color":1}]}"#,
        )
        .unwrap();
        let db = WorkspaceDatabase::load(&path).unwrap();
        assert_eq!(db.current(), Some(&workspace("work", "/tmp/w")));
    }
}
