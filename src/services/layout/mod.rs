//! Collision layout for event segments within a day column.
//!
//! Segments of one day are partitioned into collision groups (clusters that
//! overlap directly or through a chain of overlaps). Each group is packed
//! greedily into columns and every member gets the same width,
//! `1 / column count`, with `left` set by its column index.
//!
//! Packing is first-fit in input order. It is deterministic but not
//! minimal: a different input order can need more columns.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::segment::EventSegment;

/// Indices (into the day's segment list) of segments that overlap
/// directly or transitively, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CollisionGroup {
    members: Vec<usize>,
}

impl CollisionGroup {
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    fn collides_with(&self, segments: &[EventSegment], candidate: &EventSegment) -> bool {
        self.members
            .iter()
            .any(|&member| segments[member].collides_with(candidate))
    }
}

/// Partition `segments` into collision groups with a single pass.
///
/// A segment joins the first group holding a member it overlaps. When it
/// overlaps members of several groups, those groups are merged into the
/// earliest one so that chains of overlaps always end up together.
pub fn collision_groups(segments: &[EventSegment]) -> Vec<CollisionGroup> {
    let mut groups: Vec<CollisionGroup> = Vec::new();

    for (index, segment) in segments.iter().enumerate() {
        let hits: Vec<usize> = groups
            .iter()
            .enumerate()
            .filter(|(_, group)| group.collides_with(segments, segment))
            .map(|(position, _)| position)
            .collect();

        match hits.split_first() {
            None => groups.push(CollisionGroup {
                members: vec![index],
            }),
            Some((&target, rest)) => {
                // Remove from the back so earlier positions stay valid.
                for &position in rest.iter().rev() {
                    let merged = groups.remove(position);
                    groups[target].members.extend(merged.members);
                }
                groups[target].members.sort_unstable();
                groups[target].members.push(index);
            }
        }
    }

    groups
}

/// Pack a group's segments into columns, first fit in group order.
///
/// A segment goes into the first column where it overlaps nothing already
/// placed; otherwise a new column is opened. For chronologically ordered
/// input this is the same as comparing against each column's last segment.
pub fn pack_columns(segments: &[EventSegment], group: &CollisionGroup) -> Vec<Vec<usize>> {
    let mut columns: Vec<Vec<usize>> = vec![Vec::new()];

    for &member in group.members() {
        let candidate = &segments[member];
        let slot = columns.iter().position(|column| {
            column
                .iter()
                .all(|&placed| !segments[placed].collides_with(candidate))
        });

        match slot {
            Some(column) => columns[column].push(member),
            None => columns.push(vec![member]),
        }
    }

    columns
}

/// Give every segment in `columns` an equal share of the day's width.
pub fn assign_positions(segments: &mut [EventSegment], columns: &[Vec<usize>]) {
    let count = columns.len() as f32;
    for (column_index, column) in columns.iter().enumerate() {
        for &member in column {
            let segment = &mut segments[member];
            segment.width = 1.0 / count;
            segment.left = column_index as f32 / count;
        }
    }
}

/// Lay out segments that all belong to one calendar day; input order is kept.
pub fn layout_day(mut segments: Vec<EventSegment>) -> Vec<EventSegment> {
    for group in collision_groups(&segments) {
        let columns = pack_columns(&segments, &group);
        assign_positions(&mut segments, &columns);
    }
    segments
}

/// Group segments by the day they start on and lay out each day.
///
/// Days come out in ascending order; within a day the input order is kept.
pub fn layout(segments: Vec<EventSegment>) -> Vec<EventSegment> {
    let mut by_day: BTreeMap<NaiveDate, Vec<EventSegment>> = BTreeMap::new();
    for segment in segments {
        by_day.entry(segment.date()).or_default().push(segment);
    }

    let mut positioned = Vec::new();
    for (day, day_segments) in by_day {
        log::trace!("Laying out {} segments on {}", day_segments.len(), day);
        positioned.extend(layout_day(day_segments));
    }
    positioned
}
