//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use anyhow::Result;
use serde::Serialize;

use golden_core::{Author, DashboardStats, ReadList, ReadListItem, Story};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// A read list together with its entry count
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSummary<'a> {
    #[serde(flatten)]
    pub list: &'a ReadList,
    pub item_count: usize,
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Print any serializable value as pretty JSON
    pub fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    /// Print a single story with the lists it belongs to
    pub fn print_story(&self, story: &Story, lists: &[&ReadList]) -> Result<()> {
        match self.format {
            OutputFormat::Human => {
                println!("ID:        {}", story.id);
                println!("Title:     {}", story.title);
                println!("Author:    {}", story.author.name);
                println!("Source:    {}", story.source);
                println!("Category:  {}", story.category);
                println!("Status:    {}", story.status);
                println!("Chapters:  {}", story.chapters_count);
                if !story.ships.is_empty() {
                    println!("Ships:     {}", story.ships.join(", "));
                }
                if !story.types.is_empty() {
                    println!("Type:      {}", story.types.join(", "));
                }
                if let Some(ref link) = story.link {
                    println!("Link:      {}", link);
                }
                if !lists.is_empty() {
                    let names: Vec<_> = lists.iter().map(|l| l.name.as_str()).collect();
                    println!("Lists:     {}", names.join(", "));
                }
                println!("Created:   {}", story.created_at.format("%Y-%m-%d %H:%M"));
                println!("Updated:   {}", story.updated_at.format("%Y-%m-%d %H:%M"));

                if !story.summary.is_empty() {
                    println!();
                    println!("{}", story.summary);
                }
            }
            OutputFormat::Json => self.print_json(story)?,
            OutputFormat::Quiet => println!("{}", story.id),
        }
        Ok(())
    }

    /// Print a list of stories
    pub fn print_stories(&self, stories: &[&Story]) -> Result<()> {
        match self.format {
            OutputFormat::Human => {
                if stories.is_empty() {
                    println!("No stories found.");
                    return Ok(());
                }
                for story in stories {
                    println!(
                        "{} | {} | {} | {} | {} ch.",
                        short_id(&story.id),
                        truncate(&story.title, 35),
                        truncate(&story.author.name, 20),
                        story.status,
                        story.chapters_count
                    );
                }
                println!("\n{} story(ies)", stories.len());
            }
            OutputFormat::Json => self.print_json(stories)?,
            OutputFormat::Quiet => {
                for story in stories {
                    println!("{}", story.id);
                }
            }
        }
        Ok(())
    }

    /// Print an author with their socials and stories
    pub fn print_author(&self, author: &Author, stories: &[&Story]) -> Result<()> {
        match self.format {
            OutputFormat::Human => {
                println!("ID:      {}", author.id);
                println!("Name:    {}", author.name);
                println!("Created: {}", author.created_at.format("%Y-%m-%d %H:%M"));

                if !author.socials.is_empty() {
                    println!();
                    println!("── Socials ({}) ──", author.socials.len());
                    for social in &author.socials {
                        println!(
                            "{} | {} @{} | {}",
                            short_id(&social.id),
                            social.platform,
                            social.handle.trim_start_matches('@'),
                            social.link
                        );
                    }
                }

                println!();
                println!("── Stories ({}) ──", stories.len());
                for story in stories {
                    println!("{} | {}", short_id(&story.id), truncate(&story.title, 50));
                }
            }
            OutputFormat::Json => self.print_json(&serde_json::json!({
                "author": author,
                "stories": stories,
            }))?,
            OutputFormat::Quiet => println!("{}", author.id),
        }
        Ok(())
    }

    /// Print a list of authors with their story counts
    pub fn print_authors(&self, authors: &[(&Author, usize)]) -> Result<()> {
        match self.format {
            OutputFormat::Human => {
                if authors.is_empty() {
                    println!("No authors found.");
                    return Ok(());
                }
                for (author, stories) in authors {
                    println!(
                        "{} | {} ({} stories, {} socials)",
                        short_id(&author.id),
                        truncate(&author.name, 35),
                        stories,
                        author.socials.len()
                    );
                }
                println!("\n{} author(s)", authors.len());
            }
            OutputFormat::Json => {
                let list: Vec<&Author> = authors.iter().map(|(a, _)| *a).collect();
                self.print_json(&list)?;
            }
            OutputFormat::Quiet => {
                for (author, _) in authors {
                    println!("{}", author.id);
                }
            }
        }
        Ok(())
    }

    /// Print all read lists
    pub fn print_read_lists(&self, lists: &[ListSummary<'_>]) -> Result<()> {
        match self.format {
            OutputFormat::Human => {
                for summary in lists {
                    let marker = if summary.list.is_default { "*" } else { " " };
                    println!(
                        "{}{} | {} ({})",
                        marker,
                        short_id(&summary.list.id),
                        summary.list.name,
                        summary.item_count
                    );
                }
                println!("\n{} list(s), * = default", lists.len());
            }
            OutputFormat::Json => self.print_json(lists)?,
            OutputFormat::Quiet => {
                for summary in lists {
                    println!("{}", summary.list.id);
                }
            }
        }
        Ok(())
    }

    /// Print a read list and its entries
    pub fn print_read_list(&self, list: &ReadList, items: &[&ReadListItem]) -> Result<()> {
        match self.format {
            OutputFormat::Human => {
                println!("{} ({})", list.name, list.id);
                if let Some(ref color) = list.color {
                    println!("Color: {}", color);
                }
                println!();

                if items.is_empty() {
                    println!("No stories in this list.");
                    return Ok(());
                }
                for item in items {
                    println!(
                        "[{}] {} | {} | {}",
                        if item.is_read { "x" } else { " " },
                        short_id(&item.story_id),
                        truncate(&item.story.title, 40),
                        item.added_at.format("%Y-%m-%d")
                    );
                }
                println!("\n{} story(ies)", items.len());
            }
            OutputFormat::Json => self.print_json(&serde_json::json!({
                "readList": list,
                "items": items,
            }))?,
            OutputFormat::Quiet => {
                for item in items {
                    println!("{}", item.story_id);
                }
            }
        }
        Ok(())
    }

    /// Print dashboard statistics
    pub fn print_stats(
        &self,
        stats: &DashboardStats,
        recently_added: &[&Story],
        recently_read: &[&ReadListItem],
    ) -> Result<()> {
        match self.format {
            OutputFormat::Human => {
                println!("Golden Catalogue");
                println!("================");
                println!();
                println!("  Stories read:      {}", stats.total_stories_read);
                println!("  Authors read:      {}", stats.total_authors_read);
                println!("  Currently reading: {}", stats.currently_reading);
                println!("  Stories:           {}", stats.total_stories);
                println!("  Authors:           {}", stats.total_authors);

                if !recently_added.is_empty() {
                    println!();
                    println!("Recently added:");
                    for story in recently_added {
                        println!(
                            "  {} by {}",
                            truncate(&story.title, 40),
                            story.author.name
                        );
                    }
                }
                if !recently_read.is_empty() {
                    println!();
                    println!("Recently read:");
                    for item in recently_read {
                        println!(
                            "  {} ({})",
                            truncate(&item.story.title, 40),
                            item.added_at.format("%Y-%m-%d")
                        );
                    }
                }
            }
            OutputFormat::Json => self.print_json(&serde_json::json!({
                "stats": stats,
                "recentlyAdded": recently_added,
                "recentlyRead": recently_read,
            }))?,
            OutputFormat::Quiet => {
                println!(
                    "{} {} {} {} {}",
                    stats.total_stories_read,
                    stats.total_authors_read,
                    stats.currently_reading,
                    stats.total_stories,
                    stats.total_authors
                );
            }
        }
        Ok(())
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Human => println!("✓ {}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "message": message})
                );
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Check if we should prompt for confirmation
    pub fn should_prompt(&self) -> bool {
        self.format == OutputFormat::Human
    }

    /// Print an informational message
    pub fn message(&self, msg: &str) {
        match self.format {
            OutputFormat::Human => println!("{}", msg),
            OutputFormat::Json => {
                println!("{}", serde_json::json!({"message": msg}));
            }
            OutputFormat::Quiet => {}
        }
    }
}

/// Shorten a generated id (`story-3f2a9c1b...`) to its kind and 8 characters
pub fn short_id(id: &str) -> &str {
    let Some(dash) = id.find('-') else {
        return id;
    };
    let rest = &id[dash + 1..];
    match rest.char_indices().nth(8) {
        Some((end, _)) => &id[..dash + 1 + end],
        None => id,
    }
}

/// Truncate a string to max length, adding "..." if truncated
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
