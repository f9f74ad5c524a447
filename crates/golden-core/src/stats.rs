//! Dashboard statistics
//!
//! Statistics are recomputed from scratch after every mutation; nothing is
//! maintained incrementally.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::{Author, ReadListItem, Story, DONE_LIST_ID, PENDING_LIST_ID};

/// Aggregate counts shown on the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Items in the Done list
    pub total_stories_read: usize,
    /// Distinct authors among Done items
    pub total_authors_read: usize,
    /// Items in the Pending list
    pub currently_reading: usize,
    pub total_stories: usize,
    pub total_authors: usize,
}

impl DashboardStats {
    /// Compute statistics from the current collections
    pub fn compute(stories: &[Story], authors: &[Author], items: &[ReadListItem]) -> Self {
        let done: Vec<&ReadListItem> = items
            .iter()
            .filter(|item| item.read_list_id == DONE_LIST_ID)
            .collect();
        let authors_read: HashSet<&str> = done
            .iter()
            .map(|item| item.story.author_id.as_str())
            .collect();

        Self {
            total_stories_read: done.len(),
            total_authors_read: authors_read.len(),
            currently_reading: items
                .iter()
                .filter(|item| item.read_list_id == PENDING_LIST_ID)
                .count(),
            total_stories: stories.len(),
            total_authors: authors.len(),
        }
    }
}

/// The `limit` most recently created stories, newest first
pub fn recently_added(stories: &[Story], limit: usize) -> Vec<&Story> {
    let mut recent: Vec<&Story> = stories.iter().collect();
    recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    recent.truncate(limit);
    recent
}

/// The `limit` most recently finished items, newest first
pub fn recently_read(items: &[ReadListItem], limit: usize) -> Vec<&ReadListItem> {
    let mut recent: Vec<&ReadListItem> = items
        .iter()
        .filter(|item| item.read_list_id == DONE_LIST_ID)
        .collect();
    recent.sort_by(|a, b| b.added_at.cmp(&a.added_at));
    recent.truncate(limit);
    recent
}
