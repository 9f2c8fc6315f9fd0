use crate::models::period::{FetchWindow, WindowSlot};

/// Where the events for one slot of a new window come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotSource {
    /// Take the list held in this slot of the previously fetched window.
    Reuse(WindowSlot),
    Fetch,
}

/// Per-slot decision for moving from one fetched window to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReusePlan {
    pub previous: SlotSource,
    pub current: SlotSource,
    pub next: SlotSource,
}

impl ReusePlan {
    const FETCH_ALL: ReusePlan = ReusePlan {
        previous: SlotSource::Fetch,
        current: SlotSource::Fetch,
        next: SlotSource::Fetch,
    };

    pub fn get(&self, slot: WindowSlot) -> SlotSource {
        match slot {
            WindowSlot::Previous => self.previous,
            WindowSlot::Current => self.current,
            WindowSlot::Next => self.next,
        }
    }

    pub fn fetch_count(&self) -> usize {
        WindowSlot::ALL
            .into_iter()
            .filter(|slot| self.get(*slot) == SlotSource::Fetch)
            .count()
    }
}

/// Decide which lists of `old` can be carried into `new`.
///
/// Only a shift of at most one month reuses anything. An invalidated cache
/// reuses nothing, even when the window is unchanged.
pub fn plan_reuse(old: Option<&FetchWindow>, new: &FetchWindow, invalidated: bool) -> ReusePlan {
    let Some(old) = old else {
        return ReusePlan::FETCH_ALL;
    };
    if invalidated {
        return ReusePlan::FETCH_ALL;
    }

    if new.current == old.previous {
        ReusePlan {
            previous: SlotSource::Fetch,
            current: SlotSource::Reuse(WindowSlot::Previous),
            next: SlotSource::Reuse(WindowSlot::Current),
        }
    } else if new.current == old.current {
        ReusePlan {
            previous: SlotSource::Reuse(WindowSlot::Previous),
            current: SlotSource::Reuse(WindowSlot::Current),
            next: SlotSource::Reuse(WindowSlot::Next),
        }
    } else if new.current == old.next {
        ReusePlan {
            previous: SlotSource::Reuse(WindowSlot::Current),
            current: SlotSource::Reuse(WindowSlot::Next),
            next: SlotSource::Fetch,
        }
    } else {
        ReusePlan::FETCH_ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::period::Period;

    fn window(month: u32, year: i32) -> FetchWindow {
        FetchWindow::around(Period::new(month, year).unwrap())
    }

    #[test]
    fn test_cold_start_fetches_everything() {
        let plan = plan_reuse(None, &window(1, 2025), false);
        assert_eq!(plan, ReusePlan::FETCH_ALL);
        assert_eq!(plan.fetch_count(), 3);
    }

    #[test]
    fn test_forward_shift_fetches_next_only() {
        let plan = plan_reuse(Some(&window(1, 2025)), &window(2, 2025), false);
        assert_eq!(plan.previous, SlotSource::Reuse(WindowSlot::Current));
        assert_eq!(plan.current, SlotSource::Reuse(WindowSlot::Next));
        assert_eq!(plan.next, SlotSource::Fetch);
    }

    #[test]
    fn test_backward_shift_across_year_fetches_previous_only() {
        let plan = plan_reuse(Some(&window(1, 2025)), &window(12, 2024), false);
        assert_eq!(plan.previous, SlotSource::Fetch);
        assert_eq!(plan.current, SlotSource::Reuse(WindowSlot::Previous));
        assert_eq!(plan.next, SlotSource::Reuse(WindowSlot::Current));
    }

    #[test]
    fn test_same_window_reuses_everything() {
        let plan = plan_reuse(Some(&window(5, 2025)), &window(5, 2025), false);
        assert_eq!(plan.fetch_count(), 0);
    }

    #[test]
    fn test_invalidated_same_window_fetches_everything() {
        let plan = plan_reuse(Some(&window(5, 2025)), &window(5, 2025), true);
        assert_eq!(plan, ReusePlan::FETCH_ALL);
    }

    #[test]
    fn test_jump_of_two_months_fetches_everything() {
        let plan = plan_reuse(Some(&window(5, 2025)), &window(7, 2025), false);
        assert_eq!(plan, ReusePlan::FETCH_ALL);
    }
}
