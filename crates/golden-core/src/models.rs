//! Data models for Golden Catalogue
//!
//! Defines the catalogue records: Story, Author, ReadList, ReadListItem,
//! Discussion and the local User, plus the input shapes used to create
//! and patch them.
//!
//! Records serialize with camelCase field names and kebab-case enum
//! values, so a persisted slot is a plain JSON array that stays readable
//! outside this crate. Dates are `DateTime<Utc>` and round-trip as
//! ISO-8601 strings.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Id of the protected "Done" read list
pub const DONE_LIST_ID: &str = "done-list";
/// Id of the protected "Pending" read list
pub const PENDING_LIST_ID: &str = "pending-list";
/// Id of the protected "Bookmark" read list
pub const BOOKMARK_LIST_ID: &str = "bookmark-list";

/// Generate a fresh identifier of the form `<kind>-<uuid>`
pub fn new_id(kind: &str) -> String {
    format!("{}-{}", kind, Uuid::new_v4().simple())
}

/// Error returned when parsing one of the catalogue enumerations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {kind} '{value}' (expected one of: {expected})")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

macro_rules! catalogue_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal) {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            /// Every value, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The wire name of this value
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($text => Ok($name::$variant),)+
                    _ => Err(ParseEnumError {
                        kind: $kind,
                        value: s.to_string(),
                        expected: $name::ALL
                            .iter()
                            .map(|v| v.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    }),
                }
            }
        }
    };
}

catalogue_enum! {
    /// Where a story is published, or where an author has a profile
    Platform ("platform") {
        Twitter => "twitter",
        Tiktok => "tiktok",
        Ao3 => "ao3",
        Wattpad => "wattpad",
        Tumblr => "tumblr",
        Instagram => "instagram",
        Other => "other",
    }
}

catalogue_enum! {
    /// Length class of a story
    Category ("category") {
        FullLength => "full-length",
        OneShot => "one-shot",
        Short => "short",
        SpinOff => "spin-off",
    }
}

catalogue_enum! {
    /// Publication status of a story
    StoryStatus ("status") {
        Completed => "completed",
        Ongoing => "ongoing",
        OnHold => "on-hold",
        LongTimeNoUpdate => "long-time-no-update",
        Discontinued => "discontinued",
    }
}

catalogue_enum! {
    /// Who can see a discussion
    Visibility ("visibility") {
        Public => "public",
        Followers => "followers",
        PrivateGroup => "private-group",
    }
}

impl Platform {
    /// Resolve the profile URL for a handle on this platform
    ///
    /// A leading `@` is ignored. Platforms without a known URL scheme
    /// resolve to the handle itself.
    pub fn profile_url(&self, handle: &str) -> String {
        let handle = handle.trim().replace('@', "");
        match self {
            Platform::Twitter => format!("https://twitter.com/{}", handle),
            Platform::Ao3 => format!("https://archiveofourown.org/users/{}", handle),
            Platform::Wattpad => format!("https://www.wattpad.com/user/{}", handle),
            Platform::Tumblr => format!("https://{}.tumblr.com", handle),
            Platform::Instagram => format!("https://instagram.com/{}", handle),
            Platform::Tiktok => format!("https://tiktok.com/@{}", handle),
            Platform::Other => handle,
        }
    }
}

/// The single local user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Id of the local user
    pub const LOCAL_ID: &'static str = "user-1";

    /// Create the local user with the given profile
    pub fn local(username: impl Into<String>, email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Self::LOCAL_ID.to_string(),
            username: username.into(),
            email: email.into(),
            avatar: None,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Default for User {
    fn default() -> Self {
        Self::local("fanfic_reader", "reader@example.com")
    }
}

/// A profile link for an author
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthorSocial {
    pub id: String,
    pub author_id: String,
    pub platform: Platform,
    pub handle: String,
    /// Resolved profile URL
    pub link: String,
}

impl AuthorSocial {
    /// Build a social record for an author, resolving its link
    pub fn create(author_id: impl Into<String>, new: NewAuthorSocial) -> Self {
        let handle = new.handle.trim().to_string();
        let link = match new.link.as_deref().map(str::trim) {
            Some(link) if !link.is_empty() => link.to_string(),
            _ => new.platform.profile_url(&handle),
        };
        Self {
            id: new_id("social"),
            author_id: author_id.into(),
            platform: new.platform,
            handle,
            link,
        }
    }
}

/// An author of stories
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub socials: Vec<AuthorSocial>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: String,
}

impl Author {
    /// Create a new author with a fresh id and timestamps
    pub fn create(new: NewAuthor, created_by: impl Into<String>) -> Self {
        let now = Utc::now();
        let id = new_id("author");
        let socials = new
            .socials
            .into_iter()
            .map(|social| AuthorSocial::create(id.clone(), social))
            .collect();
        Self {
            id,
            name: new.name.trim().to_string(),
            socials,
            created_at: now,
            updated_at: now,
            created_by: created_by.into(),
        }
    }

    /// Refresh the updated timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// A catalogued story
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub id: String,
    pub title: String,
    pub author_id: String,
    /// Snapshot of the author taken when the story was saved
    pub author: Author,
    pub source: Platform,
    #[serde(default)]
    pub ships: Vec<String>,
    /// Genre and trope tags (fluff, angst, hurt/comfort...)
    #[serde(rename = "type", default)]
    pub types: Vec<String>,
    pub category: Category,
    pub chapters_count: u32,
    pub status: StoryStatus,
    #[serde(default)]
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: String,
}

impl Story {
    /// Create a new story by the given author
    pub fn create(new: NewStory, author: Author, created_by: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: new_id("story"),
            title: new.title.trim().to_string(),
            author_id: author.id.clone(),
            author,
            source: new.source,
            ships: new.ships,
            types: new.types,
            category: new.category,
            chapters_count: new.chapters_count,
            status: new.status,
            summary: new.summary,
            link: new.link.filter(|l| !l.trim().is_empty()),
            created_at: now,
            updated_at: now,
            created_by: created_by.into(),
        }
    }

    /// Refresh the updated timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Whether any ship contains `needle` (already lowercased)
    pub fn has_ship_matching(&self, needle: &str) -> bool {
        self.ships
            .iter()
            .any(|ship| ship.to_lowercase().contains(needle))
    }
}

/// A named collection of stories owned by the user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReadList {
    pub id: String,
    pub name: String,
    pub user_id: String,
    /// Default lists are created by the system and cannot be deleted
    pub is_default: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ReadList {
    /// Create a user list with a fresh id
    pub fn create(new: NewReadList, user_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: new_id("list"),
            name: new.name.trim().to_string(),
            user_id: user_id.into(),
            is_default: false,
            color: new.color,
            created_at: now,
            updated_at: now,
        }
    }

    /// The three protected lists: Done, Pending and Bookmark
    pub fn defaults(user_id: &str) -> Vec<Self> {
        let now = Utc::now();
        [
            (DONE_LIST_ID, "Done", "#10b981"),
            (PENDING_LIST_ID, "Pending", "#f59e0b"),
            (BOOKMARK_LIST_ID, "Bookmark", "#e6b800"),
        ]
        .into_iter()
        .map(|(id, name, color)| Self {
            id: id.to_string(),
            name: name.to_string(),
            user_id: user_id.to_string(),
            is_default: true,
            color: Some(color.to_string()),
            created_at: now,
            updated_at: now,
        })
        .collect()
    }

    /// Refresh the updated timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Membership of a story in a read list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReadListItem {
    pub id: String,
    pub read_list_id: String,
    pub story_id: String,
    /// Snapshot of the story when it was added
    pub story: Story,
    pub added_at: DateTime<Utc>,
    pub is_read: bool,
}

impl ReadListItem {
    /// Add `story` to the list `read_list_id`
    ///
    /// Only items in the Done list start out read.
    pub fn create(read_list_id: impl Into<String>, story: &Story) -> Self {
        let read_list_id = read_list_id.into();
        Self {
            id: new_id("item"),
            is_read: read_list_id == DONE_LIST_ID,
            read_list_id,
            story_id: story.id.clone(),
            story: story.clone(),
            added_at: Utc::now(),
        }
    }

    /// Whether this item links `read_list_id` and `story_id`
    pub fn links(&self, read_list_id: &str, story_id: &str) -> bool {
        self.read_list_id == read_list_id && self.story_id == story_id
    }
}

/// A comment thread entry about a story
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Discussion {
    pub id: String,
    pub story_id: String,
    pub user_id: String,
    pub user: User,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapter_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
    pub visibility: Visibility,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Discussion {
    /// Create a discussion posted by `user`
    pub fn create(new: NewDiscussion, user: &User) -> Self {
        let now = Utc::now();
        Self {
            id: new_id("discussion"),
            story_id: new.story_id,
            user_id: user.id.clone(),
            user: user.clone(),
            content: new.content.trim().to_string(),
            chapter_number: new.chapter_number,
            quote: new.quote.filter(|q| !q.trim().is_empty()),
            visibility: new.visibility,
            group_id: new.group_id,
            created_at: now,
            updated_at: now,
        }
    }
}

// ==================== Input shapes ====================

/// Data for a new story
#[derive(Debug, Clone, PartialEq)]
pub struct NewStory {
    pub title: String,
    pub author_id: String,
    pub source: Platform,
    pub ships: Vec<String>,
    pub types: Vec<String>,
    pub category: Category,
    pub chapters_count: u32,
    pub status: StoryStatus,
    pub summary: String,
    pub link: Option<String>,
}

impl NewStory {
    /// A one-shot, completed AO3 story with one chapter
    pub fn new(title: impl Into<String>, author_id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author_id: author_id.into(),
            source: Platform::Ao3,
            ships: Vec::new(),
            types: Vec::new(),
            category: Category::OneShot,
            chapters_count: 1,
            status: StoryStatus::Completed,
            summary: String::new(),
            link: None,
        }
    }
}

/// Partial update of a story; `None` leaves a field unchanged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoryPatch {
    pub title: Option<String>,
    pub author_id: Option<String>,
    pub source: Option<Platform>,
    pub ships: Option<Vec<String>>,
    pub types: Option<Vec<String>>,
    pub category: Option<Category>,
    pub chapters_count: Option<u32>,
    pub status: Option<StoryStatus>,
    pub summary: Option<String>,
    /// `Some(None)` clears the link
    pub link: Option<Option<String>>,
}

/// Data for a new author social link
#[derive(Debug, Clone, PartialEq)]
pub struct NewAuthorSocial {
    pub platform: Platform,
    pub handle: String,
    /// Explicit URL; resolved from platform and handle when absent
    pub link: Option<String>,
}

impl NewAuthorSocial {
    pub fn new(platform: Platform, handle: impl Into<String>) -> Self {
        Self {
            platform,
            handle: handle.into(),
            link: None,
        }
    }
}

/// Data for a new author
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewAuthor {
    pub name: String,
    pub socials: Vec<NewAuthorSocial>,
}

impl NewAuthor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            socials: Vec::new(),
        }
    }
}

/// Partial update of an author
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthorPatch {
    pub name: Option<String>,
    /// Replaces every social link
    pub socials: Option<Vec<NewAuthorSocial>>,
}

/// Data for a new user read list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewReadList {
    pub name: String,
    pub color: Option<String>,
}

impl NewReadList {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: None,
        }
    }
}

/// Partial update of a read list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadListPatch {
    pub name: Option<String>,
    /// `Some(None)` clears the color
    pub color: Option<Option<String>>,
}

/// Data for a new discussion
#[derive(Debug, Clone, PartialEq)]
pub struct NewDiscussion {
    pub story_id: String,
    pub content: String,
    pub chapter_number: Option<u32>,
    pub quote: Option<String>,
    pub visibility: Visibility,
    pub group_id: Option<String>,
}

impl NewDiscussion {
    /// A public discussion about a story
    pub fn new(story_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            story_id: story_id.into(),
            content: content.into(),
            chapter_number: None,
            quote: None,
            visibility: Visibility::Public,
            group_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_author() -> Author {
        Author::create(
            NewAuthor {
                name: "  StarshipCaptain ".to_string(),
                socials: vec![NewAuthorSocial::new(Platform::Tumblr, "@starship-captain")],
            },
            User::LOCAL_ID,
        )
    }

    #[test]
    fn test_new_id_has_prefix_and_is_unique() {
        let a = new_id("story");
        let b = new_id("story");
        assert!(a.starts_with("story-"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_enum_parse_and_display() {
        assert_eq!("ao3".parse::<Platform>().unwrap(), Platform::Ao3);
        assert_eq!(" On-Hold ".parse::<StoryStatus>().unwrap(), StoryStatus::OnHold);
        assert_eq!(Category::SpinOff.to_string(), "spin-off");
        assert_eq!(
            "private-group".parse::<Visibility>().unwrap(),
            Visibility::PrivateGroup
        );

        let err = "fanfiction.net".parse::<Platform>().unwrap_err();
        assert_eq!(err.kind, "platform");
        assert!(err.to_string().contains("wattpad"));
    }

    #[test]
    fn test_enum_wire_format() {
        let json = serde_json::to_string(&StoryStatus::LongTimeNoUpdate).unwrap();
        assert_eq!(json, "\"long-time-no-update\"");
        let parsed: Category = serde_json::from_str("\"full-length\"").unwrap();
        assert_eq!(parsed, Category::FullLength);
    }

    #[test]
    fn test_profile_url() {
        assert_eq!(
            Platform::Ao3.profile_url("MiddleEarth_Dreamer"),
            "https://archiveofourown.org/users/MiddleEarth_Dreamer"
        );
        assert_eq!(
            Platform::Tiktok.profile_url("@wwfan23"),
            "https://tiktok.com/@wwfan23"
        );
        assert_eq!(
            Platform::Tumblr.profile_url("starship-captain"),
            "https://starship-captain.tumblr.com"
        );
        assert_eq!(Platform::Other.profile_url("somewhere"), "somewhere");
    }

    #[test]
    fn test_author_create() {
        let author = sample_author();
        assert!(author.id.starts_with("author-"));
        assert_eq!(author.name, "StarshipCaptain");
        assert_eq!(author.created_at, author.updated_at);
        assert_eq!(author.socials.len(), 1);
        assert_eq!(author.socials[0].author_id, author.id);
        assert_eq!(author.socials[0].link, "https://starship-captain.tumblr.com");
    }

    #[test]
    fn test_social_explicit_link_wins() {
        let mut new = NewAuthorSocial::new(Platform::Other, "me");
        new.link = Some("https://example.com/me".to_string());
        let social = AuthorSocial::create("author-1", new);
        assert_eq!(social.link, "https://example.com/me");
    }

    #[test]
    fn test_story_create_embeds_author() {
        let author = sample_author();
        let mut new = NewStory::new("Beyond the Stars", author.id.clone());
        new.link = Some("   ".to_string());
        let story = Story::create(new, author.clone(), User::LOCAL_ID);

        assert!(story.id.starts_with("story-"));
        assert_eq!(story.author_id, author.id);
        assert_eq!(story.author, author);
        assert_eq!(story.chapters_count, 1);
        assert!(story.link.is_none());
        assert_eq!(story.created_by, "user-1");
    }

    #[test]
    fn test_story_touch() {
        let author = sample_author();
        let mut story = Story::create(NewStory::new("Title", author.id.clone()), author, "user-1");
        let original = story.updated_at;
        std::thread::sleep(std::time::Duration::from_millis(10));
        story.touch();
        assert!(story.updated_at > original);
        assert!(story.created_at < story.updated_at);
    }

    #[test]
    fn test_default_lists() {
        let lists = ReadList::defaults("user-1");
        let ids: Vec<_> = lists.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec![DONE_LIST_ID, PENDING_LIST_ID, BOOKMARK_LIST_ID]);
        assert!(lists.iter().all(|l| l.is_default));
        assert_eq!(lists[0].color.as_deref(), Some("#10b981"));
    }

    #[test]
    fn test_item_is_read_only_in_done_list() {
        let author = sample_author();
        let story = Story::create(NewStory::new("Title", author.id.clone()), author, "user-1");

        let done = ReadListItem::create(DONE_LIST_ID, &story);
        let pending = ReadListItem::create(PENDING_LIST_ID, &story);
        assert!(done.is_read);
        assert!(!pending.is_read);
        assert!(done.links(DONE_LIST_ID, &story.id));
        assert!(!done.links(PENDING_LIST_ID, &story.id));
    }

    #[test]
    fn test_story_serialization_layout() {
        let author = sample_author();
        let story = Story::create(NewStory::new("Title", author.id.clone()), author, "user-1");
        let value = serde_json::to_value(&story).unwrap();

        assert!(value.get("authorId").is_some());
        assert!(value.get("chaptersCount").is_some());
        assert!(value.get("type").is_some());
        assert!(value.get("link").is_none());

        let parsed: Story = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, story);
    }

    #[test]
    fn test_discussion_create() {
        let user = User::default();
        let mut new = NewDiscussion::new("story-1", "  Chapter 3 wrecked me  ");
        new.quote = Some(String::new());
        new.chapter_number = Some(3);
        let discussion = Discussion::create(new, &user);

        assert_eq!(discussion.content, "Chapter 3 wrecked me");
        assert_eq!(discussion.user_id, "user-1");
        assert!(discussion.quote.is_none());
        assert_eq!(discussion.visibility, Visibility::Public);
    }
}
