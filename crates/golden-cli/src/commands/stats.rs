//! Stats command handler

use anyhow::Result;

use golden_core::stats::{recently_added, recently_read};
use golden_core::{Catalogue, Repository};

use crate::output::Output;

/// How many stories to show in each "recent" section
const RECENT_LIMIT: usize = 5;

/// Show dashboard statistics
pub fn show<R: Repository>(catalogue: &Catalogue<R>, output: &Output) -> Result<()> {
    let added = recently_added(catalogue.stories(), RECENT_LIMIT);
    let read = recently_read(catalogue.read_list_items(), RECENT_LIMIT);

    output.print_stats(&catalogue.stats(), &added, &read)
}
