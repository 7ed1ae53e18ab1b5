//! Set assembly and the [`SetFinder`] seam.

use std::time::Instant;

use smallvec::{smallvec, SmallVec};
use tracing::{debug, info, trace};

use setclique_config::{FinderKind, ThreadCount};
use setclique_core::{CardSet, Collection};

use crate::clique::for_each_clique;
use crate::graph::CompatibilityGraph;
use crate::parallel::ParallelCliqueFinder;
use crate::partition::partition;
use crate::reference::{BruteForceFinder, IncrementalFinder};

/// A found set as collection positions.
pub type SetIndices = SmallVec<[usize; 4]>;

/// A strategy for finding every set of a given size in a collection.
///
/// Implementations never mutate the collection. Result order is not
/// meaningful; compare results as sets of normalised card sets.
pub trait SetFinder: Send + Sync {
    /// Short snake_case name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Finds every set of `set_size` cards, as collection positions.
    fn find_set_indices(&self, collection: &Collection, set_size: i64) -> Vec<SetIndices>;

    /// Finds every set of `set_size` cards.
    fn find_sets(&self, collection: &Collection, set_size: i64) -> Vec<CardSet> {
        info!(
            event = "find_start",
            finder = self.name(),
            card_count = collection.len(),
            dimension_count = collection.dimensions(),
            set_size = set_size,
        );
        let start = Instant::now();
        let indices = self.find_set_indices(collection, set_size);
        let sets = materialize(collection, &indices);
        info!(
            event = "find_end",
            finder = self.name(),
            set_count = sets.len(),
            duration_ms = start.elapsed().as_millis() as u64,
        );
        sets
    }
}

impl<T: SetFinder + ?Sized> SetFinder for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn find_set_indices(&self, collection: &Collection, set_size: i64) -> Vec<SetIndices> {
        (**self).find_set_indices(collection, set_size)
    }
}

impl<T: SetFinder + ?Sized> SetFinder for &T {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn find_set_indices(&self, collection: &Collection, set_size: i64) -> Vec<SetIndices> {
        (**self).find_set_indices(collection, set_size)
    }
}

/// Finds every set using group partitioning and clique enumeration.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliqueFinder;

impl SetFinder for CliqueFinder {
    fn name(&self) -> &'static str {
        "clique"
    }

    fn find_set_indices(&self, collection: &Collection, set_size: i64) -> Vec<SetIndices> {
        find_set_indices(collection, set_size)
    }
}

/// Finds every set of `set_size` cards in `collection`.
///
/// - `set_size <= 0`: no sets.
/// - `1`: every card on its own.
/// - `2`: every unordered pair.
/// - otherwise each set starts with its reference card, followed by the
///   clique members in collection order.
pub fn find_sets(collection: &Collection, set_size: i64) -> Vec<CardSet> {
    CliqueFinder.find_sets(collection, set_size)
}

/// Same as [`find_sets`], returning collection positions.
pub fn find_set_indices(collection: &Collection, set_size: i64) -> Vec<SetIndices> {
    if let Some(sets) = trivial_sets(collection.len(), set_size) {
        return sets;
    }
    let set_size = usize::try_from(set_size).unwrap_or(usize::MAX);

    let mut sets = Vec::new();
    for reference in 0..collection.len() {
        sets_for_reference(collection, reference, set_size, &mut sets);
    }
    sets
}

/// Handles the sizes whose answer does not depend on card values.
pub(crate) fn trivial_sets(card_count: usize, set_size: i64) -> Option<Vec<SetIndices>> {
    match set_size {
        i64::MIN..=0 => Some(Vec::new()),
        1 => Some((0..card_count).map(|i| smallvec![i]).collect()),
        2 => Some(
            (0..card_count)
                .flat_map(|i| (i + 1..card_count).map(move |j| smallvec![i, j]))
                .collect(),
        ),
        _ => None,
    }
}

/// Appends every set whose lowest position is `reference`.
///
/// Requires `set_size >= 3`.
pub(crate) fn sets_for_reference(
    collection: &Collection,
    reference: usize,
    set_size: usize,
    out: &mut Vec<SetIndices>,
) {
    let clique_size = set_size - 1;
    let groups = partition(collection, reference);
    let before = out.len();

    for group in &groups {
        if group.len() < clique_size {
            continue;
        }
        let graph = CompatibilityGraph::build(collection, group);
        let group_start = out.len();

        for_each_clique(&graph, clique_size, |clique| {
            let mut set = SetIndices::with_capacity(set_size);
            set.push(reference);
            set.extend(clique.iter().map(|&local| group.positions[local]));
            out.push(set);
        });

        trace!(
            event = "group",
            reference = reference,
            key_len = group.key.len(),
            group_len = group.len(),
            edge_count = graph.edge_count(),
            clique_count = out.len() - group_start,
        );
    }

    debug!(
        event = "reference_done",
        reference = reference,
        group_count = groups.len(),
        set_count = out.len() - before,
    );
}

/// Converts position tuples into card sets.
pub fn materialize(collection: &Collection, sets: &[SetIndices]) -> Vec<CardSet> {
    sets.iter()
        .map(|set| CardSet::new(set.iter().map(|&i| collection[i].clone())))
        .collect()
}

/// Builds the finder named by `kind`.
///
/// `thread_count` only affects [`FinderKind::ParallelClique`].
pub fn build_finder(kind: FinderKind, thread_count: ThreadCount) -> Box<dyn SetFinder> {
    match kind {
        FinderKind::Clique => Box::new(CliqueFinder),
        FinderKind::ParallelClique => Box::new(ParallelCliqueFinder::new(thread_count)),
        FinderKind::Incremental => Box::new(IncrementalFinder),
        FinderKind::BruteForce => Box::new(BruteForceFinder),
    }
}
