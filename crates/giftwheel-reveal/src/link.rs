//! Reveal links — the private four-part path each participant receives.
//!
//! `/reveal/<group-slug>/<group-id>/<participant-id>/<secret-key>`
//!
//! All four components are opaque strings, order-significant, and all four
//! must check out for a reveal to succeed. The slug exists for readable
//! links; the group id is the store key.

use std::fmt;

use giftwheel_types::{
    Assignment, GiftwheelError, GroupId, GroupRecord, ParticipantId, Result, SecretKey,
};
use serde::{Deserialize, Serialize};

/// First path segment of every reveal link.
pub const REVEAL_PREFIX: &str = "reveal";

/// Derive the URL-safe group identifier from a display name: lowercase
/// ASCII alphanumerics, every other run of characters collapsed to a single
/// dash. Falls back to `"group"` when nothing survives.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.trim().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    if slug.is_empty() {
        slug.push_str("group");
    }
    slug
}

fn malformed(reason: impl Into<String>) -> GiftwheelError {
    GiftwheelError::MalformedRevealLink {
        reason: reason.into(),
    }
}

/// One participant's private reveal path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealLink {
    pub group_slug: String,
    pub group_id: GroupId,
    pub participant_id: ParticipantId,
    pub secret_key: SecretKey,
}

impl RevealLink {
    /// Build the link for one assignment within a record.
    #[must_use]
    pub fn for_assignment(record: &GroupRecord, assignment: &Assignment) -> Self {
        Self {
            group_slug: slugify(&record.group_name),
            group_id: record.group_id,
            participant_id: assignment.giver_id,
            secret_key: assignment.secret_key,
        }
    }

    /// Render the path form.
    #[must_use]
    pub fn to_path(&self) -> String {
        format!(
            "/{REVEAL_PREFIX}/{}/{}/{}/{}",
            self.group_slug, self.group_id, self.participant_id, self.secret_key
        )
    }

    /// Parse a path back into its four components.
    pub fn parse(path: &str) -> Result<Self> {
        let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
        let &[prefix, slug, group, participant, key] = &segments[..] else {
            return Err(malformed(format!(
                "expected 5 path segments, got {}",
                segments.len()
            )));
        };
        if prefix != REVEAL_PREFIX {
            return Err(malformed(format!(
                "expected /{REVEAL_PREFIX}/ prefix, got /{prefix}/"
            )));
        }
        if slug.is_empty() {
            return Err(malformed("empty group slug"));
        }
        Ok(Self {
            group_slug: slug.to_string(),
            group_id: GroupId::from_hex(group).map_err(|e| malformed(e.to_string()))?,
            participant_id: ParticipantId::from_hex(participant)
                .map_err(|e| malformed(e.to_string()))?,
            secret_key: SecretKey::from_hex(key).map_err(|e| malformed(e.to_string()))?,
        })
    }
}

impl fmt::Display for RevealLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_path())
    }
}
