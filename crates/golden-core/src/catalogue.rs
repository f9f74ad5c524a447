//! Catalogue context
//!
//! The `Catalogue` owns every collection in memory and keeps the repository
//! in step with it:
//! - Stories, authors, read lists and read-list items are persisted, one
//!   slot each
//! - Discussions live only as long as the catalogue
//! - Dashboard statistics are recomputed after every mutation
//!
//! ## Usage
//!
//! ```ignore
//! let mut catalogue = Catalogue::open(MemoryRepository::new(), User::default())?;
//!
//! let author = catalogue.add_author(NewAuthor::new("StarshipCaptain"))?;
//! let story = catalogue.add_story(NewStory::new("Beyond the Stars", author.id))?;
//! catalogue.add_to_list(PENDING_LIST_ID, &story.id)?;
//! catalogue.mark_as_read(&story.id)?;
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::models::{
    Author, AuthorPatch, AuthorSocial, Discussion, NewAuthor, NewAuthorSocial, NewDiscussion,
    NewReadList, NewStory, ReadList, ReadListItem, ReadListPatch, Story, StoryPatch, User,
    DONE_LIST_ID, PENDING_LIST_ID,
};
use crate::query::{DiscussionFilter, StoryQuery};
use crate::seed::{sample_catalogue, SeedError};
use crate::stats::DashboardStats;
use crate::storage::{CollectionKey, CollectionStore, Repository, StorageError};

/// Kind of record named in a [`CatalogueError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Story,
    Author,
    Social,
    ReadList,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Story => f.write_str("story"),
            EntityKind::Author => f.write_str("author"),
            EntityKind::Social => f.write_str("social link"),
            EntityKind::ReadList => f.write_str("read list"),
        }
    }
}

/// Errors returned by catalogue operations
#[derive(Error, Debug)]
pub enum CatalogueError {
    #[error("{kind} '{id}' not found")]
    NotFound { kind: EntityKind, id: String },

    #[error("read list '{id}' is a default list and cannot be deleted")]
    DefaultListProtected { id: String },

    #[error("author '{id}' still has {stories} story(ies); delete or reassign them first")]
    AuthorHasStories { id: String, stories: usize },

    #[error("invalid input: {0}")]
    Invalid(String),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("failed to load sample data: {0}")]
    Seed(#[from] SeedError),
}

impl CatalogueError {
    fn not_found(kind: EntityKind, id: &str) -> Self {
        CatalogueError::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

pub type CatalogueResult<T> = std::result::Result<T, CatalogueError>;

/// Snapshot of every persisted collection, for export
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogueExport {
    pub exported_at: DateTime<Utc>,
    pub user: User,
    pub stories: Vec<Story>,
    pub authors: Vec<Author>,
    pub read_lists: Vec<ReadList>,
    pub read_list_items: Vec<ReadListItem>,
    pub stats: DashboardStats,
}

/// Collections as they were before a mutation
struct Checkpoint {
    keys: Vec<CollectionKey>,
    stories: Option<Vec<Story>>,
    authors: Option<Vec<Author>>,
    read_lists: Option<Vec<ReadList>>,
    read_list_items: Option<Vec<ReadListItem>>,
}

/// In-memory catalogue backed by a [`Repository`]
pub struct Catalogue<R: Repository> {
    store: CollectionStore<R>,
    user: User,
    stories: Vec<Story>,
    authors: Vec<Author>,
    read_lists: Vec<ReadList>,
    read_list_items: Vec<ReadListItem>,
    /// Never persisted
    discussions: Vec<Discussion>,
    stats: DashboardStats,
}

impl Catalogue<Box<dyn Repository>> {
    /// Open the catalogue described by `config`
    ///
    /// Picks the configured backend and seeds sample data when enabled.
    pub fn open_with_config(config: &Config) -> CatalogueResult<Self> {
        let repo = config.open_repository()?;
        let user = config.local_user();
        if config.seed_sample_data {
            Self::open_seeded(repo, user)
        } else {
            Self::open(repo, user)
        }
    }
}

impl<R: Repository> Catalogue<R> {
    /// Load every collection from `repo`
    ///
    /// When no read lists are stored, the three default lists are created
    /// for `user` and persisted.
    pub fn open(repo: R, user: User) -> CatalogueResult<Self> {
        let store = CollectionStore::new(repo);
        let mut catalogue = Self {
            stories: store.load(CollectionKey::Stories),
            authors: store.load(CollectionKey::Authors),
            read_lists: store.load(CollectionKey::ReadLists),
            read_list_items: store.load(CollectionKey::ReadListItems),
            discussions: Vec::new(),
            stats: DashboardStats::default(),
            store,
            user,
        };

        if catalogue.read_lists.is_empty() {
            info!("creating default read lists");
            catalogue.read_lists = ReadList::defaults(&catalogue.user.id);
            catalogue.persist(&[CollectionKey::ReadLists])?;
        }

        // An emptied collection is never written, so a stale item slot can
        // outlive the story or list it points at.
        let dangling = catalogue.prune_dangling_items();
        if dangling > 0 {
            warn!(dangling, "dropped read-list items for missing stories or lists");
            catalogue.persist(&[CollectionKey::ReadListItems])?;
        }

        catalogue.refresh_stats();
        debug!(
            stories = catalogue.stories.len(),
            authors = catalogue.authors.len(),
            read_lists = catalogue.read_lists.len(),
            "catalogue opened"
        );
        Ok(catalogue)
    }

    /// Open the catalogue, loading the sample dataset if it has no authors
    /// and no stories
    pub fn open_seeded(repo: R, user: User) -> CatalogueResult<Self> {
        let mut catalogue = Self::open(repo, user)?;
        if catalogue.authors.is_empty() && catalogue.stories.is_empty() {
            catalogue.seed()?;
        }
        Ok(catalogue)
    }

    fn seed(&mut self) -> CatalogueResult<()> {
        let sample = sample_catalogue()?;
        info!(
            authors = sample.authors.len(),
            stories = sample.stories.len(),
            "seeding sample catalogue"
        );

        self.authors = sample.authors;
        self.stories = sample.stories;
        for item in sample.read_list_items {
            let exists = self
                .read_list_items
                .iter()
                .any(|i| i.links(&item.read_list_id, &item.story_id));
            if !exists && self.read_list(&item.read_list_id).is_some() {
                self.read_list_items.push(item);
            }
        }

        self.persist(&[
            CollectionKey::Authors,
            CollectionKey::Stories,
            CollectionKey::ReadListItems,
        ])
    }

    // ==================== Accessors ====================

    /// The local user
    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn read_lists(&self) -> &[ReadList] {
        &self.read_lists
    }

    pub fn read_list_items(&self) -> &[ReadListItem] {
        &self.read_list_items
    }

    pub fn discussions(&self) -> &[Discussion] {
        &self.discussions
    }

    /// Statistics as of the last mutation
    pub fn stats(&self) -> DashboardStats {
        self.stats
    }

    pub fn story(&self, id: &str) -> Option<&Story> {
        self.stories.iter().find(|s| s.id == id)
    }

    pub fn author(&self, id: &str) -> Option<&Author> {
        self.authors.iter().find(|a| a.id == id)
    }

    pub fn read_list(&self, id: &str) -> Option<&ReadList> {
        self.read_lists.iter().find(|l| l.id == id)
    }

    /// Stories by `author_id`
    pub fn stories_by_author(&self, author_id: &str) -> Vec<&Story> {
        self.stories
            .iter()
            .filter(|s| s.author_id == author_id)
            .collect()
    }

    /// Filter and sort stories
    pub fn query_stories(&self, query: &StoryQuery) -> Vec<&Story> {
        query.apply(&self.stories)
    }

    /// Filter discussions
    pub fn query_discussions(&self, filter: &DiscussionFilter) -> Vec<&Discussion> {
        filter.apply(&self.discussions)
    }

    /// Borrow the underlying repository
    pub fn repository(&self) -> &R {
        self.store.repository()
    }

    /// Consume the catalogue and return the repository
    pub fn into_repository(self) -> R {
        self.store.into_repository()
    }

    // ==================== Story Operations ====================

    /// Add a story by an existing author
    pub fn add_story(&mut self, new: NewStory) -> CatalogueResult<Story> {
        validate_title(&new.title)?;
        validate_chapters(new.chapters_count)?;
        let author = self
            .author(&new.author_id)
            .cloned()
            .ok_or_else(|| self.rejected(EntityKind::Author, &new.author_id))?;

        let story = Story::create(new, author, self.user.id.clone());
        let checkpoint = self.checkpoint(&[CollectionKey::Stories]);
        self.stories.push(story.clone());
        self.commit(checkpoint)?;
        info!(id = %story.id, title = %story.title, "added story");
        Ok(story)
    }

    /// Apply `patch` to a story
    ///
    /// A new author id re-embeds that author's current snapshot.
    pub fn update_story(&mut self, id: &str, patch: StoryPatch) -> CatalogueResult<Story> {
        if let Some(title) = &patch.title {
            validate_title(title)?;
        }
        if let Some(chapters) = patch.chapters_count {
            validate_chapters(chapters)?;
        }
        let author = match &patch.author_id {
            Some(author_id) => Some(
                self.author(author_id)
                    .cloned()
                    .ok_or_else(|| self.rejected(EntityKind::Author, author_id))?,
            ),
            None => None,
        };

        let index = self
            .stories
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| self.rejected(EntityKind::Story, id))?;
        let checkpoint = self.checkpoint(&[CollectionKey::Stories]);
        let story = &mut self.stories[index];

        if let Some(title) = patch.title {
            story.title = title.trim().to_string();
        }
        if let Some(author) = author {
            story.author_id = author.id.clone();
            story.author = author;
        }
        if let Some(source) = patch.source {
            story.source = source;
        }
        if let Some(ships) = patch.ships {
            story.ships = ships;
        }
        if let Some(types) = patch.types {
            story.types = types;
        }
        if let Some(category) = patch.category {
            story.category = category;
        }
        if let Some(chapters) = patch.chapters_count {
            story.chapters_count = chapters;
        }
        if let Some(status) = patch.status {
            story.status = status;
        }
        if let Some(summary) = patch.summary {
            story.summary = summary;
        }
        if let Some(link) = patch.link {
            story.link = link.filter(|l| !l.trim().is_empty());
        }
        story.touch();

        let updated = story.clone();
        self.commit(checkpoint)?;
        info!(id = %updated.id, "updated story");
        Ok(updated)
    }

    /// Delete a story and every read-list entry for it
    pub fn delete_story(&mut self, id: &str) -> CatalogueResult<Story> {
        let index = self
            .stories
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| self.rejected(EntityKind::Story, id))?;
        let checkpoint = self.checkpoint(&[CollectionKey::Stories, CollectionKey::ReadListItems]);
        let story = self.stories.remove(index);

        let before = self.read_list_items.len();
        self.read_list_items.retain(|item| item.story_id != id);
        let removed_items = before - self.read_list_items.len();

        self.commit(checkpoint)?;
        info!(id = %story.id, removed_items, "deleted story");
        Ok(story)
    }

    // ==================== Author Operations ====================

    pub fn add_author(&mut self, new: NewAuthor) -> CatalogueResult<Author> {
        validate_name(&new.name, "author name")?;
        let author = Author::create(new, self.user.id.clone());
        let checkpoint = self.checkpoint(&[CollectionKey::Authors]);
        self.authors.push(author.clone());
        self.commit(checkpoint)?;
        info!(id = %author.id, name = %author.name, "added author");
        Ok(author)
    }

    /// Apply `patch` to an author
    ///
    /// Stories keep the author snapshot taken when they were last saved.
    pub fn update_author(&mut self, id: &str, patch: AuthorPatch) -> CatalogueResult<Author> {
        if let Some(name) = &patch.name {
            validate_name(name, "author name")?;
        }
        let index = self
            .authors
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| self.rejected(EntityKind::Author, id))?;
        let checkpoint = self.checkpoint(&[CollectionKey::Authors]);
        let author = &mut self.authors[index];

        if let Some(name) = patch.name {
            author.name = name.trim().to_string();
        }
        if let Some(socials) = patch.socials {
            author.socials = socials
                .into_iter()
                .map(|social| AuthorSocial::create(author.id.clone(), social))
                .collect();
        }
        author.touch();

        let updated = author.clone();
        self.commit(checkpoint)?;
        info!(id = %updated.id, "updated author");
        Ok(updated)
    }

    /// Delete an author with no stories
    pub fn delete_author(&mut self, id: &str) -> CatalogueResult<Author> {
        let index = self
            .authors
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| self.rejected(EntityKind::Author, id))?;

        let stories = self.stories.iter().filter(|s| s.author_id == id).count();
        if stories > 0 {
            warn!(id, stories, "refusing to delete author with stories");
            return Err(CatalogueError::AuthorHasStories {
                id: id.to_string(),
                stories,
            });
        }

        let checkpoint = self.checkpoint(&[CollectionKey::Authors]);
        let author = self.authors.remove(index);
        self.commit(checkpoint)?;
        info!(id = %author.id, "deleted author");
        Ok(author)
    }

    /// Attach a social link to an author
    pub fn add_author_social(
        &mut self,
        author_id: &str,
        new: NewAuthorSocial,
    ) -> CatalogueResult<AuthorSocial> {
        validate_name(&new.handle, "social handle")?;
        let index = self
            .authors
            .iter()
            .position(|a| a.id == author_id)
            .ok_or_else(|| self.rejected(EntityKind::Author, author_id))?;

        let social = AuthorSocial::create(author_id, new);
        let checkpoint = self.checkpoint(&[CollectionKey::Authors]);
        let author = &mut self.authors[index];
        author.socials.push(social.clone());
        author.touch();

        self.commit(checkpoint)?;
        info!(author_id, platform = %social.platform, "added author social");
        Ok(social)
    }

    /// Detach a social link from an author
    pub fn remove_author_social(
        &mut self,
        author_id: &str,
        social_id: &str,
    ) -> CatalogueResult<AuthorSocial> {
        let index = self
            .authors
            .iter()
            .position(|a| a.id == author_id)
            .ok_or_else(|| self.rejected(EntityKind::Author, author_id))?;
        let social_index = self.authors[index]
            .socials
            .iter()
            .position(|s| s.id == social_id)
            .ok_or_else(|| self.rejected(EntityKind::Social, social_id))?;

        let checkpoint = self.checkpoint(&[CollectionKey::Authors]);
        let author = &mut self.authors[index];
        let social = author.socials.remove(social_index);
        author.touch();

        self.commit(checkpoint)?;
        info!(author_id, social_id, "removed author social");
        Ok(social)
    }

    // ==================== Read List Operations ====================

    pub fn add_read_list(&mut self, new: NewReadList) -> CatalogueResult<ReadList> {
        validate_name(&new.name, "list name")?;
        let list = ReadList::create(new, self.user.id.clone());
        let checkpoint = self.checkpoint(&[CollectionKey::ReadLists]);
        self.read_lists.push(list.clone());
        self.commit(checkpoint)?;
        info!(id = %list.id, name = %list.name, "added read list");
        Ok(list)
    }

    /// Rename or recolor a read list; default lists may be edited too
    pub fn update_read_list(&mut self, id: &str, patch: ReadListPatch) -> CatalogueResult<ReadList> {
        if let Some(name) = &patch.name {
            validate_name(name, "list name")?;
        }
        let index = self
            .read_lists
            .iter()
            .position(|l| l.id == id)
            .ok_or_else(|| self.rejected(EntityKind::ReadList, id))?;
        let checkpoint = self.checkpoint(&[CollectionKey::ReadLists]);
        let list = &mut self.read_lists[index];

        if let Some(name) = patch.name {
            list.name = name.trim().to_string();
        }
        if let Some(color) = patch.color {
            list.color = color;
        }
        list.touch();

        let updated = list.clone();
        self.commit(checkpoint)?;
        info!(id = %updated.id, "updated read list");
        Ok(updated)
    }

    /// Delete a user list and its entries
    pub fn delete_read_list(&mut self, id: &str) -> CatalogueResult<ReadList> {
        let index = self
            .read_lists
            .iter()
            .position(|l| l.id == id)
            .ok_or_else(|| self.rejected(EntityKind::ReadList, id))?;
        if self.read_lists[index].is_default {
            warn!(id, "refusing to delete default read list");
            return Err(CatalogueError::DefaultListProtected { id: id.to_string() });
        }

        let checkpoint =
            self.checkpoint(&[CollectionKey::ReadLists, CollectionKey::ReadListItems]);
        let list = self.read_lists.remove(index);
        self.read_list_items.retain(|item| item.read_list_id != id);

        self.commit(checkpoint)?;
        info!(id = %list.id, "deleted read list");
        Ok(list)
    }

    // ==================== Read List Items ====================

    /// Add a story to a list
    ///
    /// Returns `Ok(false)` when the story is already in the list.
    pub fn add_to_list(&mut self, list_id: &str, story_id: &str) -> CatalogueResult<bool> {
        let checkpoint = self.checkpoint(&[CollectionKey::ReadListItems]);
        if !self.insert_item(list_id, story_id)? {
            debug!(list_id, story_id, "story already in list");
            return Ok(false);
        }

        self.commit(checkpoint)?;
        info!(list_id, story_id, "added story to list");
        Ok(true)
    }

    /// Remove a story from a list
    ///
    /// Returns `Ok(false)` when the story was not in the list.
    pub fn remove_from_list(&mut self, list_id: &str, story_id: &str) -> CatalogueResult<bool> {
        let checkpoint = self.checkpoint(&[CollectionKey::ReadListItems]);
        if !self.remove_item(list_id, story_id) {
            return Ok(false);
        }

        self.commit(checkpoint)?;
        info!(list_id, story_id, "removed story from list");
        Ok(true)
    }

    /// Move a story from Pending to Done
    ///
    /// Membership in other lists is left alone. Both changes are saved
    /// together.
    pub fn mark_as_read(&mut self, story_id: &str) -> CatalogueResult<()> {
        let checkpoint = self.checkpoint(&[CollectionKey::ReadListItems]);
        let removed = self.remove_item(PENDING_LIST_ID, story_id);
        let added = match self.insert_item(DONE_LIST_ID, story_id) {
            Ok(added) => added,
            Err(err) => {
                self.rollback(checkpoint);
                return Err(err);
            }
        };

        if removed || added {
            self.commit(checkpoint)?;
            info!(story_id, "marked story as read");
        }
        Ok(())
    }

    /// Entries of a list, in insertion order
    pub fn items_in_list(&self, list_id: &str) -> Vec<&ReadListItem> {
        self.read_list_items
            .iter()
            .filter(|item| item.read_list_id == list_id)
            .collect()
    }

    /// Lists that currently hold `story_id`
    pub fn lists_containing(&self, story_id: &str) -> Vec<&ReadList> {
        self.read_lists
            .iter()
            .filter(|list| {
                self.read_list_items
                    .iter()
                    .any(|item| item.links(&list.id, story_id))
            })
            .collect()
    }

    pub fn list_item_count(&self, list_id: &str) -> usize {
        self.read_list_items
            .iter()
            .filter(|item| item.read_list_id == list_id)
            .count()
    }

    // ==================== Discussions ====================

    /// Post a discussion about a story
    pub fn add_discussion(&mut self, new: NewDiscussion) -> CatalogueResult<Discussion> {
        if new.content.trim().is_empty() {
            return Err(CatalogueError::Invalid(
                "discussion content must not be empty".to_string(),
            ));
        }
        if self.story(&new.story_id).is_none() {
            return Err(self.rejected(EntityKind::Story, &new.story_id));
        }

        let discussion = Discussion::create(new, &self.user);
        self.discussions.push(discussion.clone());
        debug!(id = %discussion.id, story_id = %discussion.story_id, "added discussion");
        Ok(discussion)
    }

    // ==================== Export ====================

    /// Snapshot every persisted collection and the current stats
    pub fn export(&self) -> CatalogueExport {
        CatalogueExport {
            exported_at: Utc::now(),
            user: self.user.clone(),
            stories: self.stories.clone(),
            authors: self.authors.clone(),
            read_lists: self.read_lists.clone(),
            read_list_items: self.read_list_items.clone(),
            stats: self.stats,
        }
    }

    // ==================== Internals ====================

    /// Push a new item unless the pair is already present
    fn insert_item(&mut self, list_id: &str, story_id: &str) -> CatalogueResult<bool> {
        if self.read_list(list_id).is_none() {
            return Err(self.rejected(EntityKind::ReadList, list_id));
        }
        let story = self
            .story(story_id)
            .ok_or_else(|| self.rejected(EntityKind::Story, story_id))?;
        if self
            .read_list_items
            .iter()
            .any(|item| item.links(list_id, story_id))
        {
            return Ok(false);
        }

        let item = ReadListItem::create(list_id, story);
        self.read_list_items.push(item);
        Ok(true)
    }

    fn remove_item(&mut self, list_id: &str, story_id: &str) -> bool {
        let before = self.read_list_items.len();
        self.read_list_items
            .retain(|item| !item.links(list_id, story_id));
        self.read_list_items.len() != before
    }

    /// Copy the collections behind `keys` before changing them
    fn checkpoint(&self, keys: &[CollectionKey]) -> Checkpoint {
        let touched = |key: CollectionKey| keys.contains(&key);
        Checkpoint {
            keys: keys.to_vec(),
            stories: touched(CollectionKey::Stories).then(|| self.stories.clone()),
            authors: touched(CollectionKey::Authors).then(|| self.authors.clone()),
            read_lists: touched(CollectionKey::ReadLists).then(|| self.read_lists.clone()),
            read_list_items: touched(CollectionKey::ReadListItems)
                .then(|| self.read_list_items.clone()),
        }
    }

    /// Save the collections named by `checkpoint`, restoring them if the
    /// repository rejects the write
    fn commit(&mut self, checkpoint: Checkpoint) -> CatalogueResult<()> {
        if let Err(err) = self.persist(&checkpoint.keys) {
            warn!(error = %err, "save failed, rolling back");
            self.rollback(checkpoint);
            return Err(err);
        }
        Ok(())
    }

    fn rollback(&mut self, checkpoint: Checkpoint) {
        if let Some(stories) = checkpoint.stories {
            self.stories = stories;
        }
        if let Some(authors) = checkpoint.authors {
            self.authors = authors;
        }
        if let Some(read_lists) = checkpoint.read_lists {
            self.read_lists = read_lists;
        }
        if let Some(items) = checkpoint.read_list_items {
            self.read_list_items = items;
        }
        self.refresh_stats();
    }

    /// Save the given collections and recompute stats
    fn persist(&mut self, keys: &[CollectionKey]) -> CatalogueResult<()> {
        for key in keys {
            match key {
                CollectionKey::Stories => self.store.save(*key, &self.stories)?,
                CollectionKey::Authors => self.store.save(*key, &self.authors)?,
                CollectionKey::ReadLists => self.store.save(*key, &self.read_lists)?,
                CollectionKey::ReadListItems => self.store.save(*key, &self.read_list_items)?,
            };
        }
        self.refresh_stats();
        Ok(())
    }

    /// Drop items whose story or list no longer exists
    fn prune_dangling_items(&mut self) -> usize {
        let before = self.read_list_items.len();
        let stories = &self.stories;
        let lists = &self.read_lists;
        self.read_list_items.retain(|item| {
            stories.iter().any(|s| s.id == item.story_id)
                && lists.iter().any(|l| l.id == item.read_list_id)
        });
        before - self.read_list_items.len()
    }

    fn refresh_stats(&mut self) {
        self.stats = DashboardStats::compute(&self.stories, &self.authors, &self.read_list_items);
    }

    fn rejected(&self, kind: EntityKind, id: &str) -> CatalogueError {
        warn!(%kind, id, "not found");
        CatalogueError::not_found(kind, id)
    }
}

fn validate_title(title: &str) -> CatalogueResult<()> {
    if title.trim().is_empty() {
        return Err(CatalogueError::Invalid(
            "story title must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_chapters(chapters: u32) -> CatalogueResult<()> {
    if chapters == 0 {
        return Err(CatalogueError::Invalid(
            "a story needs at least one chapter".to_string(),
        ));
    }
    Ok(())
}

fn validate_name(name: &str, what: &str) -> CatalogueResult<()> {
    if name.trim().is_empty() {
        return Err(CatalogueError::Invalid(format!("{} must not be empty", what)));
    }
    Ok(())
}
