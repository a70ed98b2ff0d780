//! Column packing for one date's timed events.
//!
//! Each event is assigned the lowest-indexed column in which it overlaps
//! nothing already placed, so earlier and longer events claim the
//! leftmost columns. Greedy first-fit is not a provably minimum coloring
//! for arbitrary interval sets, but it is deterministic and O(n·k) at
//! per-day event volumes.

use chrono::NaiveDateTime;

use crate::interval::{ClippedEvent, overlaps};

/// Column assignments for one date. `columns[i]` is the 0-based column
/// of `timed[i]` in the input slice handed to [`pack_day`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    pub columns: Vec<usize>,
    /// Number of columns actually used. Zero for an empty day.
    pub column_count: usize,
}

/// Assign every timed event of a single date to a column such that no
/// two events in the same column overlap.
pub fn pack_day(timed: &[ClippedEvent<'_>]) -> ColumnLayout {
    // Place in deterministic order: start ascending, longer first,
    // event id as the stable tie-break.
    let mut order: Vec<usize> = (0..timed.len()).collect();
    order.sort_by(|&a, &b| {
        timed[a]
            .start
            .cmp(&timed[b].start)
            .then_with(|| timed[b].duration().cmp(&timed[a].duration()))
            .then_with(|| timed[a].event.id.cmp(&timed[b].event.id))
    });

    let mut columns = vec![0usize; timed.len()];
    let mut buckets: Vec<Vec<(NaiveDateTime, NaiveDateTime)>> = Vec::new();

    for &i in &order {
        let slot = &timed[i];
        let found = buckets.iter().position(|bucket| {
            bucket
                .iter()
                .all(|&(start, end)| !overlaps(slot.start, slot.end, start, end))
        });

        let column = match found {
            Some(c) => c,
            None => {
                buckets.push(Vec::new());
                buckets.len() - 1
            }
        };

        buckets[column].push((slot.start, slot.end));
        columns[i] = column;
    }

    ColumnLayout {
        columns,
        column_count: buckets.len(),
    }
}
