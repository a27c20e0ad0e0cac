use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    data::{Comment, IssueStatus},
    dataset::Dataset,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommentKey {
    pub venue_id: String,
    /// Position of the comment in its venue's list.
    pub comment_index: usize,
}

impl CommentKey {
    pub fn new(venue_id: impl Into<String>, comment_index: usize) -> Self {
        Self {
            venue_id: venue_id.into(),
            comment_index,
        }
    }
}

/// Page the resolve action was taken from; only changes the acknowledgment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    #[default]
    Detail,
    Moderation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ResolveIssue { key: CommentKey, origin: Origin },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum Effect {
    Resolved { message: &'static str },
    AlreadyResolved,
    NotFound,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    resolved: HashSet<CommentKey>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Status of a comment once this session's changes are applied.
    pub fn issue_status(&self, key: &CommentKey, comment: &Comment) -> IssueStatus {
        if self.resolved.contains(key) {
            IssueStatus::Resolved
        } else {
            comment.issue_status
        }
    }

    /// Computes the state after `event` without touching `self`.
    pub fn apply(&self, dataset: &Dataset, event: &Event) -> (Self, Effect) {
        match event {
            Event::ResolveIssue { key, origin } => {
                let Some(comment) = dataset
                    .find(&key.venue_id)
                    .and_then(|venue| venue.comments.get(key.comment_index))
                else {
                    return (self.clone(), Effect::NotFound);
                };

                if self.issue_status(key, comment) == IssueStatus::Resolved {
                    return (self.clone(), Effect::AlreadyResolved);
                }

                let mut next = self.clone();
                next.resolved.insert(key.clone());
                let message = match origin {
                    Origin::Detail => "Issue marked as resolved. Thank you for confirming!",
                    Origin::Moderation => {
                        "Review marked as resolved. In a full app this would save the change."
                    }
                };
                (next, Effect::Resolved { message })
            }
        }
    }
}
