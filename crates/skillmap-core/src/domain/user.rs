use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity - the identity record behind an authenticated session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    /// Skills entered through the skill workflow. Unordered.
    #[serde(default, skip_serializing_if = "HashSet::is_empty")]
    pub skills: HashSet<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a generated ID and creation timestamp.
    pub fn new(email: String, full_name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            full_name,
            skills: HashSet::new(),
            created_at: Utc::now(),
        }
    }

    /// Merge skills into the user's set. Duplicates collapse.
    pub fn add_skills<I>(&mut self, skills: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.skills.extend(skills);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_skills_collapses_duplicates() {
        let mut user = User::new("ada@skillmap.app".to_string(), "Ada".to_string());
        user.add_skills(["rust".to_string(), "sql".to_string()]);
        user.add_skills(["rust".to_string(), "writing".to_string()]);

        assert_eq!(user.skills.len(), 3);
        assert!(user.skills.contains("rust"));
    }

    #[test]
    fn test_created_at_serializes_as_iso8601() {
        let user = User::new("ada@skillmap.app".to_string(), "Ada".to_string());
        let json = serde_json::to_value(&user).unwrap();

        let created_at = json["created_at"].as_str().unwrap();
        assert!(created_at.contains('T'));
        assert!(chrono::DateTime::parse_from_rfc3339(created_at).is_ok());
    }
}
