//! Command handlers
//!
//! Records can be named on the command line by full id, by id prefix or by
//! their exact (case-insensitive) title or name.

pub mod author;
pub mod config;
pub mod export;
pub mod readlist;
pub mod stats;
pub mod story;

use anyhow::{bail, Result};

use golden_core::{Author, ReadList, Story};

/// A record that can be looked up from user input
pub trait Named {
    fn id(&self) -> &str;
    fn label(&self) -> &str;
}

impl Named for Story {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.title
    }
}

impl Named for Author {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

impl Named for ReadList {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

/// Find the record the user meant by `input`
///
/// Tries the exact id, then the exact label, then an id prefix.
pub fn resolve<'a, T: Named>(items: &'a [T], input: &str, kind: &str) -> Result<&'a T> {
    let input = input.trim();
    if input.is_empty() {
        bail!("No {} given", kind);
    }

    if let Some(item) = items.iter().find(|i| i.id() == input) {
        return Ok(item);
    }

    let by_label: Vec<&T> = items
        .iter()
        .filter(|i| i.label().eq_ignore_ascii_case(input))
        .collect();
    if by_label.len() == 1 {
        return Ok(by_label[0]);
    }

    let matches: Vec<&T> = items.iter().filter(|i| i.id().starts_with(input)).collect();
    match matches.len() {
        0 => bail!("No {} found matching: {}", kind, input),
        1 => Ok(matches[0]),
        _ => {
            eprintln!("Multiple {}s match '{}':", kind, input);
            for item in &matches {
                eprintln!("  {} - {}", item.id(), item.label());
            }
            bail!("Ambiguous ID. Please provide more characters.");
        }
    }
}

/// Resolve `input` to a story id
pub fn story_id<R: golden_core::Repository>(
    catalogue: &golden_core::Catalogue<R>,
    input: &str,
) -> Result<String> {
    Ok(resolve(catalogue.stories(), input, "story")?.id.clone())
}

/// Resolve `input` to an author id
pub fn author_id<R: golden_core::Repository>(
    catalogue: &golden_core::Catalogue<R>,
    input: &str,
) -> Result<String> {
    Ok(resolve(catalogue.authors(), input, "author")?.id.clone())
}

/// Resolve `input` to a read list id
pub fn list_id<R: golden_core::Repository>(
    catalogue: &golden_core::Catalogue<R>,
    input: &str,
) -> Result<String> {
    Ok(resolve(catalogue.read_lists(), input, "read list")?.id.clone())
}

#[cfg(test)]
pub(crate) mod testing {
    use golden_core::storage::MemoryRepository;
    use golden_core::{Catalogue, User};

    /// Catalogue holding the sample data, backed by memory
    pub fn sample_catalogue() -> Catalogue<MemoryRepository> {
        Catalogue::open_seeded(MemoryRepository::new(), User::default()).unwrap()
    }
}
