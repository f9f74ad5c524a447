//! Golden Catalogue Core Library
//!
//! This crate provides the core functionality for Golden Catalogue, a
//! local, single-user catalogue of fan-fiction stories, their authors and
//! personal read lists.
//!
//! # Architecture
//!
//! - **Catalogue**: in-memory collections plus every mutation, with
//!   cascades and typed rejections
//! - **Storage**: one durable slot per collection (JSON files, SQLite or
//!   memory)
//!
//! Every mutation writes the collections it touched back to storage and
//! recomputes the dashboard statistics.
//!
//! # Quick Start
//!
//! ```text
//! let config = Config::load()?;
//! let mut catalogue = Catalogue::open_with_config(&config)?;
//!
//! // Add a story
//! let author = catalogue.add_author(NewAuthor::new("StarshipCaptain"))?;
//! let story = catalogue.add_story(NewStory::new("Beyond the Stars", author.id))?;
//!
//! // Query stories
//! let ongoing = catalogue.query_stories(&StoryQuery::new().status(StoryStatus::Ongoing));
//! ```
//!
//! # Modules
//!
//! - `catalogue`: Catalogue context (main entry point)
//! - `models`: Stories, authors, read lists and discussions
//! - `query`: Story filtering and sorting
//! - `stats`: Dashboard statistics
//! - `seed`: Sample dataset for first run
//! - `storage`: Slot repositories and typed collection persistence
//! - `config`: Application configuration

pub mod catalogue;
pub mod config;
pub mod models;
pub mod query;
pub mod seed;
pub mod stats;
pub mod storage;

pub use catalogue::{Catalogue, CatalogueError, CatalogueExport, CatalogueResult, EntityKind};
pub use config::{Config, StorageBackend};
pub use models::{
    Author, AuthorPatch, AuthorSocial, Category, Discussion, NewAuthor, NewAuthorSocial,
    NewDiscussion, NewReadList, NewStory, Platform, ReadList, ReadListItem, ReadListPatch, Story,
    StoryPatch, StoryStatus, User, Visibility, BOOKMARK_LIST_ID, DONE_LIST_ID, PENDING_LIST_ID,
};
pub use query::{DiscussionFilter, SortKey, SortOrder, StoryQuery};
pub use stats::DashboardStats;
pub use storage::{CollectionKey, Repository, StorageError};
