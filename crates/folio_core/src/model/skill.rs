//! Skill groups shown on the about page.

use serde::{Deserialize, Serialize};

/// Named group of skills, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<String>,
}
