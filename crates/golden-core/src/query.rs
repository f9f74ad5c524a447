//! Story and discussion queries
//!
//! Pure filter and sort functions over borrowed collections. Nothing here
//! touches storage or mutates its input.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{
    Category, Discussion, ParseEnumError, Platform, Story, StoryStatus, Visibility,
};

/// Field to sort stories by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    Title,
    Author,
    CreatedAt,
    UpdatedAt,
    ChaptersCount,
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortKey {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "title" => Ok(SortKey::Title),
            "author" => Ok(SortKey::Author),
            "created" | "created-at" | "createdat" => Ok(SortKey::CreatedAt),
            "updated" | "updated-at" | "updatedat" => Ok(SortKey::UpdatedAt),
            "chapters" | "chapters-count" | "chapterscount" => Ok(SortKey::ChaptersCount),
            _ => Err(ParseEnumError {
                kind: "sort key",
                value: s.to_string(),
                expected: "title, author, created, updated, chapters".to_string(),
            }),
        }
    }
}

impl FromStr for SortOrder {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(ParseEnumError {
                kind: "sort order",
                value: s.to_string(),
                expected: "asc, desc".to_string(),
            }),
        }
    }
}

/// Filter and sort options for the story list
///
/// Unset filters match every story.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryQuery {
    /// Case-insensitive substring of the title, author name or any ship
    pub search: Option<String>,
    pub author_id: Option<String>,
    pub source: Option<Platform>,
    pub status: Option<StoryStatus>,
    pub category: Option<Category>,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
}

impl StoryQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn author(mut self, author_id: impl Into<String>) -> Self {
        self.author_id = Some(author_id.into());
        self
    }

    pub fn source(mut self, source: Platform) -> Self {
        self.source = Some(source);
        self
    }

    pub fn status(mut self, status: StoryStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn sort(mut self, key: SortKey, order: SortOrder) -> Self {
        self.sort_by = key;
        self.sort_order = order;
        self
    }

    /// Whether `story` passes every filter
    pub fn matches(&self, story: &Story) -> bool {
        if let Some(term) = self.search.as_deref() {
            let needle = term.trim().to_lowercase();
            if !needle.is_empty()
                && !story.title.to_lowercase().contains(&needle)
                && !story.author.name.to_lowercase().contains(&needle)
                && !story.has_ship_matching(&needle)
            {
                return false;
            }
        }

        self.author_id
            .as_deref()
            .map_or(true, |id| story.author_id == id)
            && self.source.map_or(true, |source| story.source == source)
            && self.status.map_or(true, |status| story.status == status)
            && self
                .category
                .map_or(true, |category| story.category == category)
    }

    /// Filter then sort `stories`
    ///
    /// The sort is stable: stories that compare equal keep their input
    /// order in both directions.
    pub fn apply<'a>(&self, stories: &'a [Story]) -> Vec<&'a Story> {
        let mut matched: Vec<&Story> = stories.iter().filter(|s| self.matches(s)).collect();
        matched.sort_by(|a, b| {
            let ordering = compare(self.sort_by, a, b);
            match self.sort_order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
        matched
    }
}

fn compare(key: SortKey, a: &Story, b: &Story) -> Ordering {
    match key {
        SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortKey::Author => a
            .author
            .name
            .to_lowercase()
            .cmp(&b.author.name.to_lowercase()),
        SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
        SortKey::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        SortKey::ChaptersCount => a.chapters_count.cmp(&b.chapters_count),
    }
}

/// Filter for the discussion feed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscussionFilter {
    pub story_id: Option<String>,
    pub visibility: Option<Visibility>,
}

impl DiscussionFilter {
    pub fn matches(&self, discussion: &Discussion) -> bool {
        self.story_id
            .as_deref()
            .map_or(true, |id| discussion.story_id == id)
            && self
                .visibility
                .map_or(true, |visibility| discussion.visibility == visibility)
    }

    /// Matching discussions, in insertion order
    pub fn apply<'a>(&self, discussions: &'a [Discussion]) -> Vec<&'a Discussion> {
        discussions.iter().filter(|d| self.matches(d)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Author, NewAuthor, NewDiscussion, NewStory, User};
    use chrono::Duration;

    fn author(name: &str) -> Author {
        Author::create(NewAuthor::new(name), "user-1")
    }

    fn story(title: &str, author: &Author, chapters: u32) -> Story {
        let mut new = NewStory::new(title, author.id.clone());
        new.chapters_count = chapters;
        Story::create(new, author.clone(), "user-1")
    }

    fn ten_stories() -> Vec<Story> {
        let a = author("Writer");
        [24, 3, 18, 31, 22, 8, 1, 5, 15, 42]
            .iter()
            .enumerate()
            .map(|(i, &chapters)| story(&format!("Story {}", i + 1), &a, chapters))
            .collect()
    }

    #[test]
    fn test_empty_query_returns_everything_sorted_by_title() {
        let a = author("Writer");
        let stories = vec![story("beta", &a, 1), story("Alpha", &a, 1), story("gamma", &a, 1)];

        let result = StoryQuery::new().apply(&stories);
        let titles: Vec<_> = result.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_search_matches_title_author_and_ships() {
        let drarry_author = author("MiddleEarth_Dreamer");
        let other = author("StarshipCaptain");
        let mut with_ship = story("Starfleet Academy Roommates", &other, 18);
        with_ship.ships = vec!["Spirk".to_string(), "McCoy/Chapel".to_string()];
        let stories = vec![
            story("The Prince's Shadow", &drarry_author, 24),
            with_ship,
            story("Untitled", &other, 1),
        ];

        assert_eq!(StoryQuery::new().search("PRINCE").apply(&stories).len(), 1);
        assert_eq!(StoryQuery::new().search("dreamer").apply(&stories).len(), 1);
        assert_eq!(StoryQuery::new().search("chapel").apply(&stories).len(), 1);
        assert_eq!(StoryQuery::new().search("starship").apply(&stories).len(), 2);
        // Whitespace-only input is treated as no search
        assert_eq!(StoryQuery::new().search("   ").apply(&stories).len(), 3);
        assert!(StoryQuery::new().search("wolfstar").apply(&stories).is_empty());
    }

    #[test]
    fn test_filter_source_and_status() {
        let mut stories = ten_stories();
        for s in stories.iter_mut() {
            s.source = Platform::Wattpad;
            s.status = StoryStatus::Completed;
        }
        // One matches both, others match only one criterion
        stories[3].source = Platform::Ao3;
        stories[3].status = StoryStatus::Ongoing;
        stories[5].source = Platform::Ao3;
        stories[7].status = StoryStatus::Ongoing;

        let result = StoryQuery::new()
            .source(Platform::Ao3)
            .status(StoryStatus::Ongoing)
            .apply(&stories);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, stories[3].id);
    }

    #[test]
    fn test_filter_category_and_author() {
        let a = author("A");
        let b = author("B");
        let mut long = story("Long", &a, 30);
        long.category = Category::FullLength;
        let stories = vec![long, story("Short", &a, 1), story("Other", &b, 1)];

        let result = StoryQuery::new()
            .author(a.id.clone())
            .category(Category::OneShot)
            .apply(&stories);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Short");
    }

    #[test]
    fn test_sort_chapters_desc() {
        let stories = ten_stories();
        let result = StoryQuery::new()
            .sort(SortKey::ChaptersCount, SortOrder::Desc)
            .apply(&stories);
        let chapters: Vec<u32> = result.iter().map(|s| s.chapters_count).collect();
        assert_eq!(chapters, vec![42, 31, 24, 22, 18, 15, 8, 5, 3, 1]);
    }

    #[test]
    fn test_sort_by_author_case_insensitive() {
        let stories = vec![
            story("One", &author("zeta"), 1),
            story("Two", &author("Alpha"), 1),
            story("Three", &author("beta"), 1),
        ];
        let result = StoryQuery::new()
            .sort(SortKey::Author, SortOrder::Asc)
            .apply(&stories);
        let titles: Vec<_> = result.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Two", "Three", "One"]);
    }

    #[test]
    fn test_sort_by_dates() {
        let a = author("Writer");
        let mut stories = vec![story("Old", &a, 1), story("New", &a, 1), story("Mid", &a, 1)];
        let base = stories[0].created_at;
        stories[0].created_at = base - Duration::days(10);
        stories[1].created_at = base;
        stories[2].created_at = base - Duration::days(5);
        stories[0].updated_at = base + Duration::days(1);

        let by_created = StoryQuery::new()
            .sort(SortKey::CreatedAt, SortOrder::Desc)
            .apply(&stories);
        let titles: Vec<_> = by_created.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["New", "Mid", "Old"]);

        let by_updated = StoryQuery::new()
            .sort(SortKey::UpdatedAt, SortOrder::Desc)
            .apply(&stories);
        assert_eq!(by_updated[0].title, "Old");
    }

    #[test]
    fn test_sort_is_stable_in_both_directions() {
        let a = author("Writer");
        let stories = vec![
            story("Same", &a, 5),
            story("same", &a, 5),
            story("SAME", &a, 5),
        ];
        let ids: Vec<_> = stories.iter().map(|s| s.id.as_str()).collect();

        for order in [SortOrder::Asc, SortOrder::Desc] {
            let result = StoryQuery::new().sort(SortKey::Title, order).apply(&stories);
            let result_ids: Vec<_> = result.iter().map(|s| s.id.as_str()).collect();
            assert_eq!(result_ids, ids);
        }
    }

    #[test]
    fn test_parse_sort_options() {
        assert_eq!("chapters".parse::<SortKey>().unwrap(), SortKey::ChaptersCount);
        assert_eq!("Created".parse::<SortKey>().unwrap(), SortKey::CreatedAt);
        assert_eq!("DESC".parse::<SortOrder>().unwrap(), SortOrder::Desc);
        assert!("rating".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_discussion_filter() {
        let user = User::default();
        let public = Discussion::create(NewDiscussion::new("story-1", "Loved it"), &user);
        let mut private = NewDiscussion::new("story-1", "Spoilers");
        private.visibility = Visibility::Followers;
        let private = Discussion::create(private, &user);
        let other = Discussion::create(NewDiscussion::new("story-2", "Hmm"), &user);
        let discussions = vec![public, private, other];

        let for_story = DiscussionFilter {
            story_id: Some("story-1".to_string()),
            visibility: None,
        };
        assert_eq!(for_story.apply(&discussions).len(), 2);

        let public_only = DiscussionFilter {
            story_id: Some("story-1".to_string()),
            visibility: Some(Visibility::Public),
        };
        let result = public_only.apply(&discussions);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].content, "Loved it");
    }
}
