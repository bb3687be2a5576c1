//! Role catalog — the fixed pairing of job title, job description and required skills.
//!
//! Loaded once at startup (built-in or from a JSON file) and read-only afterwards.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A job role the screener can evaluate resumes against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleProfile {
    pub role_name: String,
    pub job_description: String,
    /// Lowercase, no duplicates, in the order results report them.
    pub required_skills: Vec<String>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read role catalog '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("role catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("role catalog is empty")]
    Empty,

    #[error("role name must not be blank")]
    BlankRoleName,

    #[error("duplicate role '{0}'")]
    DuplicateRole(String),

    #[error("role '{role}' has an invalid skill '{skill}': skills must be trimmed, lowercase and non-blank")]
    InvalidSkill { role: String, skill: String },

    #[error("role '{role}' lists skill '{skill}' more than once")]
    DuplicateSkill { role: String, skill: String },
}

/// Immutable set of role profiles keyed by role name.
#[derive(Debug, Clone)]
pub struct RoleCatalog {
    roles: Vec<RoleProfile>,
}

impl RoleCatalog {
    /// Validates and wraps the given profiles. Order is preserved.
    pub fn new(roles: Vec<RoleProfile>) -> Result<Self, CatalogError> {
        if roles.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut names = HashSet::new();
        for role in &roles {
            if role.role_name.trim().is_empty() {
                return Err(CatalogError::BlankRoleName);
            }
            if !names.insert(role.role_name.as_str()) {
                return Err(CatalogError::DuplicateRole(role.role_name.clone()));
            }

            let mut skills = HashSet::new();
            for skill in &role.required_skills {
                let normalized = skill.trim().to_lowercase();
                if normalized.is_empty() || normalized != *skill {
                    return Err(CatalogError::InvalidSkill {
                        role: role.role_name.clone(),
                        skill: skill.clone(),
                    });
                }
                if !skills.insert(skill.as_str()) {
                    return Err(CatalogError::DuplicateSkill {
                        role: role.role_name.clone(),
                        skill: skill.clone(),
                    });
                }
            }
        }

        Ok(Self { roles })
    }

    /// The baseline catalog: Java Developer, Python Developer, Data Analyst.
    pub fn builtin() -> Self {
        let roles = BUILTIN_ROLES
            .iter()
            .map(|(name, jd, skills)| RoleProfile {
                role_name: name.to_string(),
                job_description: jd.to_string(),
                required_skills: skills.iter().map(|s| s.to_string()).collect(),
            })
            .collect();
        Self { roles }
    }

    /// Loads a JSON array of role profiles from disk.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let roles: Vec<RoleProfile> = serde_json::from_str(raw)?;
        Self::new(roles)
    }

    pub fn get(&self, role_name: &str) -> Option<&RoleProfile> {
        self.roles.iter().find(|r| r.role_name == role_name)
    }

    pub fn roles(&self) -> &[RoleProfile] {
        &self.roles
    }
}

const BUILTIN_ROLES: &[(&str, &str, &[&str])] = &[
    (
        "Java Developer",
        "We are looking for a Java Developer with strong knowledge of Java, \
         OOP concepts, Spring Boot, REST APIs, SQL databases, and backend development. \
         Experience with Hibernate and MySQL is a plus.",
        &[
            "java",
            "spring",
            "spring boot",
            "hibernate",
            "sql",
            "mysql",
            "rest api",
            "oops",
        ],
    ),
    (
        "Python Developer",
        "Looking for a Python Developer skilled in Python, Flask or Django, \
         data handling using Pandas and NumPy, and basic SQL knowledge.",
        &[
            "python",
            "django",
            "flask",
            "pandas",
            "numpy",
            "machine learning",
            "sql",
        ],
    ),
    (
        "Data Analyst",
        "Seeking a Data Analyst with skills in Excel, SQL, Python, \
         data visualization using Power BI or Tableau, and statistics.",
        &[
            "excel",
            "sql",
            "python",
            "power bi",
            "tableau",
            "statistics",
            "pandas",
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn profile(name: &str, skills: &[&str]) -> RoleProfile {
        RoleProfile {
            role_name: name.to_string(),
            job_description: "Some description".to_string(),
            required_skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_builtin_catalog_passes_validation() {
        let builtin = RoleCatalog::builtin();
        let validated = RoleCatalog::new(builtin.roles().to_vec()).unwrap();
        let names: Vec<&str> = validated
            .roles()
            .iter()
            .map(|r| r.role_name.as_str())
            .collect();
        assert_eq!(names, vec!["Java Developer", "Python Developer", "Data Analyst"]);
    }

    #[test]
    fn test_builtin_python_skills_in_order() {
        let catalog = RoleCatalog::builtin();
        let role = catalog.get("Python Developer").unwrap();
        assert_eq!(
            role.required_skills,
            vec!["python", "django", "flask", "pandas", "numpy", "machine learning", "sql"]
        );
    }

    #[test]
    fn test_get_is_exact_match() {
        let catalog = RoleCatalog::builtin();
        assert!(catalog.get("python developer").is_none());
        assert!(catalog.get("Rust Developer").is_none());
    }

    #[test]
    fn test_rejects_empty_catalog() {
        assert!(matches!(RoleCatalog::new(vec![]), Err(CatalogError::Empty)));
    }

    #[test]
    fn test_rejects_duplicate_role() {
        let err = RoleCatalog::new(vec![profile("A", &["x"]), profile("A", &["y"])]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateRole(name) if name == "A"));
    }

    #[test]
    fn test_rejects_uppercase_skill() {
        let err = RoleCatalog::new(vec![profile("A", &["Rust"])]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidSkill { .. }));
    }

    #[test]
    fn test_rejects_duplicate_skill() {
        let err = RoleCatalog::new(vec![profile("A", &["rust", "rust"])]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateSkill { .. }));
    }

    #[test]
    fn test_loads_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"role_name": "Rust Developer", "job_description": "Rust and tokio.", "required_skills": ["rust", "tokio"]}}]"#
        )
        .unwrap();

        let catalog = RoleCatalog::from_json_file(file.path()).unwrap();
        assert_eq!(catalog.roles().len(), 1);
        assert_eq!(
            catalog.get("Rust Developer").unwrap().required_skills,
            vec!["rust", "tokio"]
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = RoleCatalog::from_json_file(Path::new("/nonexistent/roles.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = RoleCatalog::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
