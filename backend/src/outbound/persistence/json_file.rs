//! JSON-file employee store.
//!
//! Records are held in memory and the whole collection is rewritten to disk
//! after every mutation. Contents are loaded once when the store is opened,
//! so two processes must not share one data file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::ports::{EmployeeRepository, EmployeeRepositoryError};
use crate::domain::{Employee, EmployeeDraft, EmployeeId};

/// Employee store persisted as a single JSON document on local disk.
#[derive(Debug)]
pub struct JsonFileEmployeeRepository {
    path: PathBuf,
    entries: RwLock<Vec<Employee>>,
}

impl JsonFileEmployeeRepository {
    /// Open a store at `path`, loading any existing records.
    ///
    /// A missing file is treated as an empty directory; it is created on the
    /// first mutation.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, EmployeeRepositoryError> {
        let path = path.into();
        let entries = Self::load(&path)?;
        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    fn load(path: &Path) -> Result<Vec<Employee>, EmployeeRepositoryError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                return Err(EmployeeRepositoryError::connection(format!(
                    "failed to read {}: {err}",
                    path.display()
                )));
            }
        };
        serde_json::from_str(&raw).map_err(|err| {
            EmployeeRepositoryError::serialization(format!(
                "failed to decode {}: {err}",
                path.display()
            ))
        })
    }

    fn persist(&self, entries: &[Employee]) -> Result<(), EmployeeRepositoryError> {
        let encoded = serde_json::to_string_pretty(entries).map_err(|err| {
            EmployeeRepositoryError::serialization(format!("failed to encode records: {err}"))
        })?;
        fs::write(&self.path, encoded).map_err(|err| {
            EmployeeRepositoryError::connection(format!(
                "failed to write {}: {err}",
                self.path.display()
            ))
        })
    }

    fn poisoned() -> EmployeeRepositoryError {
        EmployeeRepositoryError::query("employee store lock poisoned")
    }
}

#[async_trait]
impl EmployeeRepository for JsonFileEmployeeRepository {
    async fn list(&self) -> Result<Vec<Employee>, EmployeeRepositoryError> {
        let entries = self.entries.read().map_err(|_| Self::poisoned())?;
        Ok(entries.clone())
    }

    async fn find_by_id(
        &self,
        id: &EmployeeId,
    ) -> Result<Option<Employee>, EmployeeRepositoryError> {
        let entries = self.entries.read().map_err(|_| Self::poisoned())?;
        Ok(entries.iter().find(|entry| entry.id == *id).cloned())
    }

    async fn insert(&self, draft: EmployeeDraft) -> Result<Employee, EmployeeRepositoryError> {
        let now = Utc::now();
        let employee = Employee {
            id: EmployeeId::random(),
            name: draft.name,
            role: draft.role,
            department: draft.department,
            created_at: now,
            updated_at: now,
        };
        let mut entries = self.entries.write().map_err(|_| Self::poisoned())?;
        entries.push(employee.clone());
        self.persist(&entries)?;
        Ok(employee)
    }

    async fn replace(
        &self,
        id: &EmployeeId,
        draft: EmployeeDraft,
    ) -> Result<Option<Employee>, EmployeeRepositoryError> {
        let mut entries = self.entries.write().map_err(|_| Self::poisoned())?;
        let Some(entry) = entries.iter_mut().find(|entry| entry.id == *id) else {
            return Ok(None);
        };
        entry.name = draft.name;
        entry.role = draft.role;
        entry.department = draft.department;
        entry.updated_at = Utc::now();
        let updated = entry.clone();
        self.persist(&entries)?;
        Ok(Some(updated))
    }

    async fn remove(&self, id: &EmployeeId) -> Result<bool, EmployeeRepositoryError> {
        let mut entries = self.entries.write().map_err(|_| Self::poisoned())?;
        let before = entries.len();
        entries.retain(|entry| entry.id != *id);
        let removed = entries.len() < before;
        if removed {
            self.persist(&entries)?;
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn draft(name: &str) -> EmployeeDraft {
        EmployeeDraft::new(name, "Engineer", "Engineering")
    }

    #[tokio::test]
    async fn records_survive_reopening_the_store() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("employees.json");

        let created = {
            let store = JsonFileEmployeeRepository::open(&path).expect("open store");
            store.insert(draft("Ada")).await.expect("insert")
        };

        let reopened = JsonFileEmployeeRepository::open(&path).expect("reopen store");
        let listed = reopened.list().await.expect("list");
        assert_eq!(listed, vec![created]);
    }

    #[tokio::test]
    async fn missing_file_opens_as_an_empty_store() {
        let dir = tempdir().expect("temp dir");
        let store =
            JsonFileEmployeeRepository::open(dir.path().join("absent.json")).expect("open store");
        assert!(store.list().await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn corrupt_files_are_reported_as_serialization_errors() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("employees.json");
        fs::write(&path, "not json").expect("write corrupt file");

        let error = JsonFileEmployeeRepository::open(&path).expect_err("corrupt store");
        assert!(matches!(
            error,
            EmployeeRepositoryError::Serialization { .. }
        ));
    }

    #[tokio::test]
    async fn mutations_are_visible_after_reopen() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("employees.json");

        let store = JsonFileEmployeeRepository::open(&path).expect("open store");
        let ada = store.insert(draft("Ada")).await.expect("insert ada");
        let grace = store.insert(draft("Grace")).await.expect("insert grace");
        store
            .replace(&ada.id, EmployeeDraft::new("Ada", "Manager", "Engineering"))
            .await
            .expect("replace")
            .expect("record exists");
        assert!(store.remove(&grace.id).await.expect("remove"));

        let reopened = JsonFileEmployeeRepository::open(&path).expect("reopen store");
        let listed = reopened.list().await.expect("list");
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].role, "Manager");
    }
}
