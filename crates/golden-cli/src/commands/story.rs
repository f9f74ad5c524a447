//! Story command handlers

use anyhow::{Context, Result};

use golden_core::{
    Catalogue, NewStory, Repository, StoryPatch, StoryQuery, StoryStatus, DONE_LIST_ID,
};

use super::{author_id, list_id, story_id};
use crate::editor::{confirm, edit_text, is_interactive, prompt_with_default, split_list};
use crate::output::{short_id, Output};

/// Add a new story
pub fn add<R: Repository>(
    catalogue: &mut Catalogue<R>,
    mut new: NewStory,
    output: &Output,
) -> Result<()> {
    new.author_id = author_id(catalogue, &new.author_id)?;
    let story = catalogue.add_story(new).context("Failed to add story")?;

    output.success(&format!("Added story: {}", story.id));
    output.print_story(&story, &[])
}

/// List stories matching `query`, optionally only those in a read list
pub fn list<R: Repository>(
    catalogue: &Catalogue<R>,
    mut query: StoryQuery,
    in_list: Option<String>,
    output: &Output,
) -> Result<()> {
    if let Some(author) = query.author_id.take() {
        query.author_id = Some(author_id(catalogue, &author)?);
    }

    let mut stories = catalogue.query_stories(&query);
    if let Some(list) = in_list {
        let list = list_id(catalogue, &list)?;
        let members: Vec<&str> = catalogue
            .items_in_list(&list)
            .into_iter()
            .map(|item| item.story_id.as_str())
            .collect();
        stories.retain(|story| members.contains(&story.id.as_str()));
    }

    output.print_stories(&stories)
}

/// Show a single story
pub fn show<R: Repository>(catalogue: &Catalogue<R>, id: String, output: &Output) -> Result<()> {
    let id = story_id(catalogue, &id)?;
    let story = catalogue
        .story(&id)
        .ok_or_else(|| anyhow::anyhow!("Story not found: {}", id))?;
    let lists = catalogue.lists_containing(&id);

    output.print_story(story, &lists)
}

/// Edit a story
///
/// With no field flags on an interactive terminal, prompts for each field.
pub fn edit<R: Repository>(
    catalogue: &mut Catalogue<R>,
    id: String,
    mut patch: StoryPatch,
    output: &Output,
) -> Result<()> {
    let id = story_id(catalogue, &id)?;

    if patch == StoryPatch::default() && is_interactive() && output.should_prompt() {
        patch = prompt_patch(catalogue, &id)?;
    }
    if let Some(author) = patch.author_id.take() {
        patch.author_id = Some(author_id(catalogue, &author)?);
    }

    let story = catalogue
        .update_story(&id, patch)
        .context("Failed to update story")?;

    output.success("Story updated");
    let lists = catalogue.lists_containing(&story.id);
    output.print_story(&story, &lists)
}

fn prompt_patch<R: Repository>(catalogue: &Catalogue<R>, id: &str) -> Result<StoryPatch> {
    let story = catalogue
        .story(id)
        .ok_or_else(|| anyhow::anyhow!("Story not found: {}", id))?;
    let mut patch = StoryPatch::default();

    println!("Editing story: {}", story.id);
    println!("Press Enter to keep current value, or type new value.\n");

    patch.title = prompt_with_default("Title", &story.title)?;

    if let Some(chapters) = prompt_with_default("Chapters", &story.chapters_count.to_string())? {
        patch.chapters_count = Some(chapters.parse().context("Chapters must be a number")?);
    }

    if let Some(status) = prompt_with_default("Status", story.status.as_str())? {
        patch.status = Some(status.parse::<StoryStatus>()?);
    }

    if let Some(ships) = prompt_with_default("Ships (comma-separated)", &story.ships.join(", "))? {
        patch.ships = Some(split_list(&ships));
    }

    if let Some(types) = prompt_with_default("Type (comma-separated)", &story.types.join(", "))? {
        patch.types = Some(split_list(&types));
    }

    let current_link = story.link.as_deref().unwrap_or("");
    if let Some(link) = prompt_with_default("Link (\"none\" to clear)", current_link)? {
        patch.link = Some(if link == "none" { None } else { Some(link) });
    }

    if confirm("Edit summary in $EDITOR?")? {
        patch.summary = Some(edit_text(&story.summary)?);
    }

    Ok(patch)
}

/// Delete a story and its read-list entries
pub fn delete<R: Repository>(
    catalogue: &mut Catalogue<R>,
    id: String,
    yes: bool,
    output: &Output,
) -> Result<()> {
    let id = story_id(catalogue, &id)?;

    if !yes && output.should_prompt() {
        if let Some(story) = catalogue.story(&id) {
            let lists = catalogue.lists_containing(&id).len();
            println!("Delete story: {} - {}", short_id(&story.id), story.title);
            if lists > 0 {
                println!("It will also be removed from {} read list(s).", lists);
            }
        }
        if !confirm("Are you sure?")? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let story = catalogue
        .delete_story(&id)
        .context("Failed to delete story")?;

    output.success(&format!("Deleted story: {}", story.id));
    Ok(())
}

/// Move a story from Pending to Done
pub fn read<R: Repository>(catalogue: &mut Catalogue<R>, id: String, output: &Output) -> Result<()> {
    let id = story_id(catalogue, &id)?;
    let already_done = catalogue
        .read_list_items()
        .iter()
        .any(|item| item.links(DONE_LIST_ID, &id));

    catalogue
        .mark_as_read(&id)
        .context("Failed to mark story as read")?;

    if already_done {
        output.message("Story was already marked as read.");
    } else {
        output.success(&format!("Marked as read: {}", id));
    }
    Ok(())
}
