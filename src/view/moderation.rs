use chrono::NaiveDate;
use serde::Serialize;

use super::Badge;
use crate::{
    data::IssueStatus,
    dataset::Dataset,
    session::{CommentKey, SessionState},
};

pub const ALL_CLEAR: &str = "There are currently no unresolved reviews.";

#[derive(Debug, Clone, Serialize)]
pub struct ModerationView {
    pub entries: Vec<ModerationEntry>,
    pub message: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModerationEntry {
    pub venue_id: String,
    pub venue_name: String,
    pub comment_index: usize,
    pub user: String,
    pub date: NaiveDate,
    pub header: String,
    pub verification: Badge,
    pub issue: Badge,
    pub text: String,
}

/// Comments still awaiting resolution, in dataset order.
pub fn moderation(dataset: &Dataset, session: &SessionState) -> ModerationView {
    let entries: Vec<ModerationEntry> = dataset
        .comments()
        .filter(|(venue, index, comment)| {
            session.issue_status(&CommentKey::new(&venue.id, *index), comment)
                == IssueStatus::Unresolved
        })
        .map(|(venue, comment_index, comment)| ModerationEntry {
            venue_id: venue.id.clone(),
            venue_name: venue.name.clone(),
            comment_index,
            user: comment.user.clone(),
            date: comment.date,
            header: format!("{} – {} • {}", venue.name, comment.user, comment.date),
            verification: Badge::verification(comment.verified),
            issue: Badge::issue(IssueStatus::Unresolved),
            text: comment.text.clone(),
        })
        .collect();

    let message = entries.is_empty().then_some(ALL_CLEAR);
    ModerationView { entries, message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Event, Origin};

    #[test]
    fn lists_unresolved_in_order() {
        let dataset = Dataset::embedded().unwrap();
        let view = moderation(&dataset, &SessionState::new());

        let users: Vec<_> = view.entries.iter().map(|e| e.user.as_str()).collect();
        assert_eq!(users, ["Ben", "Emma"]);
        assert_eq!(view.entries[0].header, "Coffee Corner – Ben • 2025-07-15");
        assert_eq!(view.entries[1].comment_index, 0);
        assert!(view.message.is_none());
    }

    #[test]
    fn empty_once_everything_is_resolved() {
        let dataset = Dataset::embedded().unwrap();
        let mut session = SessionState::new();
        for (venue, index) in [("coffee-corner", 1), ("curry-house", 0)] {
            let event = Event::ResolveIssue {
                key: CommentKey::new(venue, index),
                origin: Origin::Moderation,
            };
            session = session.apply(&dataset, &event).0;
        }

        let view = moderation(&dataset, &session);
        assert!(view.entries.is_empty());
        assert_eq!(view.message, Some(ALL_CLEAR));
    }
}
