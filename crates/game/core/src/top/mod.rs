//! Leaderboard snapshots and rank-window rendering.
//!
//! A [`TopResult`] is an immutable, already-ordered ranking supplied by an
//! external ranking source. Ranks are 1-based positions in that order; ties
//! are whatever order the source produced. The [`window`] functions turn a
//! snapshot into the text shown to a viewer.

pub mod window;

use std::collections::HashMap;
use std::hash::Hash;

pub use window::{
    MAX_TOP_POSITIONS, SEPARATOR, TWO_SIDE_BOTTOM, TWO_SIDE_TOP, create_top_list,
    create_top_list_with_anchor, create_two_side_top_list,
};

/// One ranked entry of a leaderboard.
pub trait TopPosition {
    type Id: Eq + Hash + Clone;

    /// Identity of the ranked entity (personage, group, ...).
    fn id(&self) -> &Self::Id;

    /// Single display line for this entry at the given 1-based rank.
    fn render(&self, rank: usize) -> String;
}

/// Ordered ranking plus an id lookup.
pub struct TopResult<P: TopPosition> {
    positions: Vec<P>,
    index: HashMap<P::Id, usize>,
}

impl<P: TopPosition> TopResult<P> {
    /// Build a snapshot from positions already sorted by rank.
    ///
    /// If an id appears more than once, its first (best) rank is kept.
    pub fn new(positions: Vec<P>) -> Self {
        let mut index = HashMap::with_capacity(positions.len());
        for (idx, position) in positions.iter().enumerate() {
            index.entry(position.id().clone()).or_insert(idx);
        }
        Self { positions, index }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// 1-based rank of `id`, if it is ranked at all.
    pub fn rank_of(&self, id: &P::Id) -> Option<usize> {
        self.index.get(id).map(|idx| idx + 1)
    }

    /// Entry at a 1-based rank.
    pub fn at_rank(&self, rank: usize) -> Option<&P> {
        rank.checked_sub(1).and_then(|idx| self.positions.get(idx))
    }
}

impl<P: TopPosition> FromIterator<P> for TopResult<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
