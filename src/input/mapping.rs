use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::AppError;

/// Company/task name to project id lookup, loaded once per run
#[derive(Debug, Default)]
pub(crate) struct CompanyMapping {
    projects: HashMap<String, String>,
}

impl CompanyMapping {
    pub(crate) fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|source| AppError::Read {
            kind: "mapping",
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| AppError::Parse {
            kind: "mapping",
            path: path.to_path_buf(),
            source,
        })
    }

    #[cfg(test)]
    pub(crate) fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        CompanyMapping {
            projects: pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    fn parse(content: &str) -> Result<Self, serde_json::Error> {
        let projects = serde_json::from_str(content)?;
        Ok(CompanyMapping { projects })
    }

    /// Exact, case-sensitive lookup. Empty project ids count as unmapped.
    pub(crate) fn project_id(&self, company: &str) -> Option<&str> {
        self.projects
            .get(company)
            .map(String::as_str)
            .filter(|id| !id.is_empty())
    }

    pub(crate) fn len(&self) -> usize {
        self.projects.len()
    }
}
