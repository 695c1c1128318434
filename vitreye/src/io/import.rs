use anyhow::{Context, Result, ensure};
use itertools::Itertools;

use crate::entities::{Item, Layout, LayoutReport, WindowSize};
use crate::io::ext_repr::ExtItem;
use crate::util::LayoutConfig;

/// Converts external items into internal ones.
/// Items are ordered by id, which must form the sequence `0..n`.
pub fn import_items(ext_items: &[ExtItem]) -> Result<Vec<Item>> {
    ext_items
        .iter()
        .sorted_by_key(|ei| ei.id)
        .enumerate()
        .map(|(i, ei)| {
            ensure!(
                ei.id == i,
                "item ids must be consecutive starting from 0, found id {} at position {}",
                ei.id,
                i
            );
            Item::try_new(ei.id, ei.width, ei.height)
                .with_context(|| format!("could not import item {:?}", ei.source))
        })
        .collect()
}

/// Imports the items and lays them out for `window`.
pub fn import_layout(
    config: LayoutConfig,
    ext_items: &[ExtItem],
    window: WindowSize,
) -> Result<(Layout, LayoutReport)> {
    config.validate()?;
    let items = import_items(ext_items)?;
    Ok(Layout::from_items(config, items, window))
}
