//! Read list command handlers

use anyhow::{bail, Context, Result};

use golden_core::{Catalogue, NewReadList, ReadListPatch, Repository};

use super::{list_id, story_id};
use crate::editor::confirm;
use crate::output::{ListSummary, Output};

/// Create a new read list
pub fn create<R: Repository>(
    catalogue: &mut Catalogue<R>,
    name: String,
    color: Option<String>,
    output: &Output,
) -> Result<()> {
    let list = catalogue
        .add_read_list(NewReadList { name, color })
        .context("Failed to create read list")?;

    output.success(&format!("Created read list: {} ({})", list.name, list.id));
    Ok(())
}

/// List all read lists with their sizes
pub fn list<R: Repository>(catalogue: &Catalogue<R>, output: &Output) -> Result<()> {
    let summaries: Vec<ListSummary<'_>> = catalogue
        .read_lists()
        .iter()
        .map(|list| ListSummary {
            list,
            item_count: catalogue.list_item_count(&list.id),
        })
        .collect();

    output.print_read_lists(&summaries)
}

/// Show the stories in a read list
pub fn show<R: Repository>(catalogue: &Catalogue<R>, id: String, output: &Output) -> Result<()> {
    let id = list_id(catalogue, &id)?;
    let list = catalogue
        .read_list(&id)
        .ok_or_else(|| anyhow::anyhow!("Read list not found: {}", id))?;

    output.print_read_list(list, &catalogue.items_in_list(&id))
}

/// Rename a read list and optionally change its color
pub fn rename<R: Repository>(
    catalogue: &mut Catalogue<R>,
    id: String,
    name: String,
    color: Option<String>,
    output: &Output,
) -> Result<()> {
    let id = list_id(catalogue, &id)?;
    let patch = ReadListPatch {
        name: Some(name),
        color: color.map(|c| if c == "none" { None } else { Some(c) }),
    };

    let list = catalogue
        .update_read_list(&id, patch)
        .context("Failed to update read list")?;

    output.success(&format!("Renamed read list to: {}", list.name));
    Ok(())
}

/// Delete a user-created read list
pub fn delete<R: Repository>(
    catalogue: &mut Catalogue<R>,
    id: String,
    yes: bool,
    output: &Output,
) -> Result<()> {
    let id = list_id(catalogue, &id)?;

    if let Some(list) = catalogue.read_list(&id) {
        if list.is_default {
            bail!("'{}' is a default list and cannot be deleted.", list.name);
        }
        if !yes && output.should_prompt() {
            println!(
                "Delete read list: {} ({} stories)",
                list.name,
                catalogue.list_item_count(&id)
            );
            if !confirm("Are you sure?")? {
                println!("Cancelled.");
                return Ok(());
            }
        }
    }

    let list = catalogue
        .delete_read_list(&id)
        .context("Failed to delete read list")?;

    output.success(&format!("Deleted read list: {}", list.name));
    Ok(())
}

/// Add a story to a read list
pub fn add<R: Repository>(
    catalogue: &mut Catalogue<R>,
    list: String,
    story: String,
    output: &Output,
) -> Result<()> {
    let list = list_id(catalogue, &list)?;
    let story = story_id(catalogue, &story)?;

    match catalogue.add_to_list(&list, &story) {
        Ok(true) => output.success(&format!("Added {} to {}", story, list)),
        Ok(false) => output.message("Story is already in that list."),
        Err(e) => return Err(e).context("Failed to add story to list"),
    }
    Ok(())
}

/// Remove a story from a read list
pub fn remove<R: Repository>(
    catalogue: &mut Catalogue<R>,
    list: String,
    story: String,
    output: &Output,
) -> Result<()> {
    let list = list_id(catalogue, &list)?;
    let story = story_id(catalogue, &story)?;

    if catalogue
        .remove_from_list(&list, &story)
        .context("Failed to remove story from list")?
    {
        output.success(&format!("Removed {} from {}", story, list));
    } else {
        output.message("Story was not in that list.");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::sample_catalogue;
    use crate::output::OutputFormat;
    use golden_core::{BOOKMARK_LIST_ID, DONE_LIST_ID};

    fn quiet() -> Output {
        Output::new(OutputFormat::Quiet)
    }

    #[test]
    fn test_create_rename_delete() {
        let mut catalogue = sample_catalogue();
        create(&mut catalogue, "Slow burn".to_string(), None, &quiet()).unwrap();
        assert_eq!(catalogue.read_lists().len(), 4);

        rename(
            &mut catalogue,
            "slow burn".to_string(),
            "Slow burn favourites".to_string(),
            Some("#ef4444".to_string()),
            &quiet(),
        )
        .unwrap();
        let list = catalogue.read_lists().last().unwrap().clone();
        assert_eq!(list.name, "Slow burn favourites");
        assert_eq!(list.color.as_deref(), Some("#ef4444"));

        delete(&mut catalogue, list.id.clone(), true, &quiet()).unwrap();
        assert_eq!(catalogue.read_lists().len(), 3);
    }

    #[test]
    fn test_delete_default_list_fails() {
        let mut catalogue = sample_catalogue();
        let err = delete(&mut catalogue, "Done".to_string(), true, &quiet()).unwrap_err();
        assert!(err.to_string().contains("default list"));
        assert!(catalogue.read_list(DONE_LIST_ID).is_some());
    }

    #[test]
    fn test_add_and_remove_by_name() {
        let mut catalogue = sample_catalogue();
        add(
            &mut catalogue,
            "bookmark".to_string(),
            "story-6".to_string(),
            &quiet(),
        )
        .unwrap();
        // Adding twice is not an error
        add(
            &mut catalogue,
            "bookmark".to_string(),
            "story-6".to_string(),
            &quiet(),
        )
        .unwrap();
        assert_eq!(catalogue.list_item_count(BOOKMARK_LIST_ID), 1);

        remove(
            &mut catalogue,
            BOOKMARK_LIST_ID.to_string(),
            "story-6".to_string(),
            &quiet(),
        )
        .unwrap();
        remove(
            &mut catalogue,
            BOOKMARK_LIST_ID.to_string(),
            "story-6".to_string(),
            &quiet(),
        )
        .unwrap();
        assert_eq!(catalogue.list_item_count(BOOKMARK_LIST_ID), 0);
    }
}
