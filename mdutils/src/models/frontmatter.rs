// src/models/frontmatter.rs
use serde::Deserialize;

/// YAML block at the top of a note. Only `tags` is read; other keys are ignored.
#[derive(Deserialize, Debug, Default)]
pub struct Frontmatter {
    pub tags: Option<Vec<String>>,
}

impl Frontmatter {
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags
            .as_ref()
            .is_some_and(|tags| tags.iter().any(|t| t == tag))
    }
}
