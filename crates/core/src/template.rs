//! Template entity
//!
//! Plain data: templates live in memory for the session. There is no
//! template persistence in this slice, so the seed set below is what a
//! fresh window starts from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A reusable text template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Template {
    /// Create a new template with a fresh id, stamping both timestamps.
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: None,
            body: body.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Builder-style description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Refresh `updated_at` after a content change.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Seed set shown on first launch (in-memory only).
pub fn starter_templates() -> Vec<Template> {
    vec![
        Template::new(
            "Weekly status",
            "Subject: Weekly status - {{week}}\n\nHighlights:\n- \n\nRisks:\n- \n\nNext week:\n- \n",
        )
        .with_description("Monday morning status mail"),
        Template::new(
            "Bug report",
            "## Summary\n\n## Steps to reproduce\n1. \n\n## Expected\n\n## Actual\n",
        )
        .with_description("Issue tracker boilerplate"),
        Template::new(
            "Meeting notes",
            "# {{topic}}\n\nAttendees: \nDate: {{date}}\n\n## Decisions\n\n## Action items\n- [ ] \n",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stamps_identity_and_timestamps() {
        let template = Template::new("Invoice", "Dear {{name}},");
        assert_eq!(template.name, "Invoice");
        assert_eq!(template.body, "Dear {{name}},");
        assert!(template.description.is_none());
        assert_eq!(template.created_at, template.updated_at);
    }

    #[test]
    fn touch_moves_updated_at_forward() {
        let mut template = Template::new("Invoice", "Dear {{name}},");
        let created = template.created_at;
        template.touch();
        assert!(template.updated_at >= created);
        assert_eq!(template.created_at, created, "created_at never moves");
    }

    #[test]
    fn starter_templates_have_distinct_ids() {
        let templates = starter_templates();
        assert!(!templates.is_empty());
        for (i, a) in templates.iter().enumerate() {
            for b in templates.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
