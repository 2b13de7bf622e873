//! Rank-window renderers.
//!
//! All three renderers are pure: they read a [`TopResult`] snapshot and
//! return text. Highlighted entries are wrapped in `<b>` tags for the bot's
//! HTML parse mode.

use std::ops::RangeInclusive;

use super::{TopPosition, TopResult};

/// Size of the window shown by the top-N renderers.
pub const MAX_TOP_POSITIONS: usize = 10;
/// Entries shown above the gap by the two-sided renderer.
pub const TWO_SIDE_TOP: usize = 5;
/// Entries shown below the gap by the two-sided renderer.
pub const TWO_SIDE_BOTTOM: usize = 5;
/// Marks a gap of skipped ranks. Never placed between adjacent ranks.
pub const SEPARATOR: &str = "\n-----------\n";

/// Render ranks `1..=min(10, N)` as a plain list.
pub fn create_top_list<P: TopPosition>(result: &TopResult<P>) -> String {
    let shown = result.len().min(MAX_TOP_POSITIONS);
    render_block(result, 1..=shown, None)
}

/// Render the top window and, when the requested entry ranks below it,
/// append that entry (bolded) and its successor after a separator.
///
/// A requested entry inside the window is bolded in place. An id missing from
/// the ranking leaves the plain top window.
pub fn create_top_list_with_anchor<P: TopPosition>(
    result: &TopResult<P>,
    requested: &P::Id,
) -> String {
    let shown = result.len().min(MAX_TOP_POSITIONS);
    let mut list = render_block(result, 1..=shown, Some(requested));

    if let Some(rank) = result.rank_of(requested).filter(|&rank| rank > shown) {
        list.push_str(SEPARATOR);
        list.push_str(&bold(render_rank(result, rank)));
        if rank < result.len() {
            list.push('\n');
            list.push_str(&render_rank(result, rank + 1));
        }
    }
    list
}

/// Render up to five top and five bottom ranks, splicing the requested entry
/// in between when it falls into the skipped middle.
///
/// Rankings of at most ten entries are rendered whole.
pub fn create_two_side_top_list<P: TopPosition>(
    result: &TopResult<P>,
    requested: &P::Id,
) -> String {
    let total = result.len();
    if total <= TWO_SIDE_TOP + TWO_SIDE_BOTTOM {
        return render_block(result, 1..=total, Some(requested));
    }

    let bottom_start = total - TWO_SIDE_BOTTOM + 1;
    let top = render_block(result, 1..=TWO_SIDE_TOP, Some(requested));
    let bottom = render_block(result, bottom_start..=total, Some(requested));

    let splice = result
        .rank_of(requested)
        .and_then(|rank| Splice::locate(rank, TWO_SIDE_TOP, bottom_start));

    match splice {
        None => format!("{top}{SEPARATOR}{bottom}"),
        Some(splice) => format!(
            "{top}{}{}{}{bottom}",
            splice.before.as_str(),
            bold(render_rank(result, splice.rank)),
            splice.after.as_str(),
        ),
    }
}

/// How two rendered pieces are joined.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Joint {
    /// The pieces hold adjacent ranks.
    Line,
    /// Ranks were skipped between the pieces.
    Separator,
}

impl Joint {
    /// Adjacent when the rank distance between the pieces is exactly one.
    fn between(distance: usize) -> Self {
        match distance {
            1 => Self::Line,
            _ => Self::Separator,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Line => "\n",
            Self::Separator => SEPARATOR,
        }
    }
}

/// Placement of a requested entry that sits in the middle gap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Splice {
    rank: usize,
    before: Joint,
    after: Joint,
}

impl Splice {
    /// `None` when `rank` is already shown by the top or bottom block.
    fn locate(rank: usize, top_end: usize, bottom_start: usize) -> Option<Self> {
        if rank <= top_end || rank >= bottom_start {
            return None;
        }
        Some(Self {
            rank,
            before: Joint::between(rank - top_end),
            after: Joint::between(bottom_start - rank),
        })
    }
}

fn render_block<P: TopPosition>(
    result: &TopResult<P>,
    ranks: RangeInclusive<usize>,
    requested: Option<&P::Id>,
) -> String {
    ranks
        .filter_map(|rank| result.at_rank(rank).map(|position| (rank, position)))
        .map(|(rank, position)| {
            let line = position.render(rank);
            if requested == Some(position.id()) {
                bold(line)
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_rank<P: TopPosition>(result: &TopResult<P>, rank: usize) -> String {
    result
        .at_rank(rank)
        .map(|position| position.render(rank))
        .unwrap_or_default()
}

fn bold(text: String) -> String {
    format!("<b>{text}</b>")
}
