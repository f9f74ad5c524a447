//! Author command handlers

use anyhow::{bail, Context, Result};

use golden_core::{Catalogue, CatalogueError, NewAuthor, NewAuthorSocial, Platform, Repository};

use super::author_id;
use crate::editor::confirm;
use crate::output::{short_id, Output};

/// Parse a `platform:handle` social argument
pub fn parse_social(value: &str) -> Result<NewAuthorSocial> {
    let Some((platform, handle)) = value.split_once(':') else {
        bail!(
            "Invalid social '{}'. Use platform:handle, e.g. ao3:MiddleEarth_Dreamer",
            value
        );
    };
    let platform: Platform = platform.parse()?;
    if handle.trim().is_empty() {
        bail!("Social '{}' has an empty handle", value);
    }
    Ok(NewAuthorSocial::new(platform, handle.trim()))
}

/// Add a new author
pub fn add<R: Repository>(
    catalogue: &mut Catalogue<R>,
    name: String,
    socials: Vec<String>,
    output: &Output,
) -> Result<()> {
    let socials = socials
        .iter()
        .map(|s| parse_social(s))
        .collect::<Result<Vec<_>>>()?;

    let author = catalogue
        .add_author(NewAuthor { name, socials })
        .context("Failed to add author")?;

    output.success(&format!("Added author: {}", author.id));
    output.print_author(&author, &[])
}

/// List all authors
pub fn list<R: Repository>(catalogue: &Catalogue<R>, output: &Output) -> Result<()> {
    let mut authors: Vec<_> = catalogue
        .authors()
        .iter()
        .map(|a| (a, catalogue.stories_by_author(&a.id).len()))
        .collect();
    authors.sort_by_key(|(a, _)| a.name.to_lowercase());

    output.print_authors(&authors)
}

/// Show an author with their socials and stories
pub fn show<R: Repository>(catalogue: &Catalogue<R>, id: String, output: &Output) -> Result<()> {
    let id = author_id(catalogue, &id)?;
    let author = catalogue
        .author(&id)
        .ok_or_else(|| anyhow::anyhow!("Author not found: {}", id))?;

    output.print_author(author, &catalogue.stories_by_author(&id))
}

/// Delete an author who has no stories
pub fn delete<R: Repository>(
    catalogue: &mut Catalogue<R>,
    id: String,
    yes: bool,
    output: &Output,
) -> Result<()> {
    let id = author_id(catalogue, &id)?;

    if !yes && output.should_prompt() {
        if let Some(author) = catalogue.author(&id) {
            println!("Delete author: {} - {}", short_id(&author.id), author.name);
        }
        if !confirm("Are you sure?")? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    match catalogue.delete_author(&id) {
        Ok(author) => {
            output.success(&format!("Deleted author: {}", author.id));
            Ok(())
        }
        Err(CatalogueError::AuthorHasStories { stories, .. }) => bail!(
            "Author still has {} story(ies). Delete them or move them to another author first:\n  \
             golden story list --author {}",
            stories,
            id
        ),
        Err(e) => Err(e).context("Failed to delete author"),
    }
}

/// Add a social link to an author
pub fn add_social<R: Repository>(
    catalogue: &mut Catalogue<R>,
    author: String,
    social: String,
    link: Option<String>,
    output: &Output,
) -> Result<()> {
    let id = author_id(catalogue, &author)?;
    let mut new = parse_social(&social)?;
    new.link = link;

    let social = catalogue
        .add_author_social(&id, new)
        .context("Failed to add social link")?;

    output.success(&format!("Added {} link: {}", social.platform, social.link));
    Ok(())
}

/// Remove a social link from an author
///
/// The social may be named by id, id prefix or platform.
pub fn remove_social<R: Repository>(
    catalogue: &mut Catalogue<R>,
    author: String,
    social: String,
    output: &Output,
) -> Result<()> {
    let id = author_id(catalogue, &author)?;
    let socials = catalogue
        .author(&id)
        .map(|a| a.socials.as_slice())
        .unwrap_or_default();

    let matches: Vec<_> = socials
        .iter()
        .filter(|s| s.id.starts_with(&social) || s.platform.as_str() == social)
        .collect();
    let social_id = match matches.as_slice() {
        [only] => only.id.clone(),
        [] => bail!("No social link found matching: {}", social),
        _ => bail!("Ambiguous social link '{}'. Use its id instead.", social),
    };

    let removed = catalogue
        .remove_author_social(&id, &social_id)
        .context("Failed to remove social link")?;

    output.success(&format!("Removed {} link: {}", removed.platform, removed.link));
    Ok(())
}
