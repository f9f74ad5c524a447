//! Sample catalogue
//!
//! A fixed dataset (5 authors, 10 stories, 4 read-list entries) loaded into
//! a brand-new catalogue so there is something to browse on first run.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

use crate::models::{Author, Category, Platform, ReadListItem, Story, StoryStatus};

const SAMPLE_JSON: &str = include_str!("../data/sample_catalogue.json");

/// The sample dataset could not be assembled
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("sample catalogue is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("sample story '{story}' references unknown author '{author}'")]
    UnknownAuthor { story: String, author: String },

    #[error("sample read-list entry references unknown story '{0}'")]
    UnknownStory(String),
}

/// Collections making up the sample catalogue
#[derive(Debug, Clone)]
pub struct SampleCatalogue {
    pub authors: Vec<Author>,
    pub stories: Vec<Story>,
    pub read_list_items: Vec<ReadListItem>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SampleFile {
    authors: Vec<Author>,
    stories: Vec<SampleStory>,
    read_list_items: Vec<SampleItem>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SampleStory {
    id: String,
    title: String,
    author_id: String,
    source: Platform,
    ships: Vec<String>,
    #[serde(rename = "type")]
    types: Vec<String>,
    category: Category,
    chapters_count: u32,
    status: StoryStatus,
    summary: String,
    link: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    created_by: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SampleItem {
    id: String,
    read_list_id: String,
    story_id: String,
}

/// Build the sample catalogue, embedding author and story snapshots
pub fn sample_catalogue() -> Result<SampleCatalogue, SeedError> {
    let file: SampleFile = serde_json::from_str(SAMPLE_JSON)?;

    let stories = file
        .stories
        .into_iter()
        .map(|s| -> Result<Story, SeedError> {
            let author = file
                .authors
                .iter()
                .find(|a| a.id == s.author_id)
                .cloned()
                .ok_or_else(|| SeedError::UnknownAuthor {
                    story: s.id.clone(),
                    author: s.author_id.clone(),
                })?;
            Ok(Story {
                id: s.id,
                title: s.title,
                author_id: s.author_id,
                author,
                source: s.source,
                ships: s.ships,
                types: s.types,
                category: s.category,
                chapters_count: s.chapters_count,
                status: s.status,
                summary: s.summary,
                link: s.link,
                created_at: s.created_at,
                updated_at: s.updated_at,
                created_by: s.created_by,
            })
        })
        .collect::<Result<Vec<_>, SeedError>>()?;

    let read_list_items = file
        .read_list_items
        .into_iter()
        .map(|entry| -> Result<ReadListItem, SeedError> {
            let story = stories
                .iter()
                .find(|s| s.id == entry.story_id)
                .ok_or_else(|| SeedError::UnknownStory(entry.story_id.clone()))?;
            let mut item = ReadListItem::create(entry.read_list_id, story);
            item.id = entry.id;
            Ok(item)
        })
        .collect::<Result<Vec<_>, SeedError>>()?;

    Ok(SampleCatalogue {
        authors: file.authors,
        stories,
        read_list_items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DONE_LIST_ID, PENDING_LIST_ID};

    #[test]
    fn test_sample_catalogue_loads() {
        let sample = sample_catalogue().unwrap();
        assert_eq!(sample.authors.len(), 5);
        assert_eq!(sample.stories.len(), 10);
        assert_eq!(sample.read_list_items.len(), 4);
    }

    #[test]
    fn test_story_snapshots_match_authors() {
        let sample = sample_catalogue().unwrap();
        for story in &sample.stories {
            assert_eq!(story.author.id, story.author_id);
            assert!(sample.authors.contains(&story.author));
        }
    }

    #[test]
    fn test_sample_chapter_counts() {
        let sample = sample_catalogue().unwrap();
        let chapters: Vec<u32> = sample.stories.iter().map(|s| s.chapters_count).collect();
        assert_eq!(chapters, vec![24, 3, 18, 31, 22, 8, 1, 5, 15, 42]);
    }

    #[test]
    fn test_demo_items() {
        let sample = sample_catalogue().unwrap();
        let done: Vec<_> = sample
            .read_list_items
            .iter()
            .filter(|i| i.read_list_id == DONE_LIST_ID)
            .collect();
        let pending: Vec<_> = sample
            .read_list_items
            .iter()
            .filter(|i| i.read_list_id == PENDING_LIST_ID)
            .collect();

        assert_eq!(done.len(), 2);
        assert!(done.iter().all(|i| i.is_read));
        assert_eq!(pending.len(), 2);
        assert!(pending.iter().all(|i| !i.is_read));
        assert_eq!(sample.read_list_items[2].story.title, "Starfleet Academy Roommates");
    }
}
