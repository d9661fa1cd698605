use crate::shared::api::ApiError;
use crate::shared::hierarchy::SelectOption;
use contracts::domain::common::EntityId;

/// What a level currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelState<'a> {
    /// Parent not chosen yet; nothing to offer
    Unselected,
    Loading,
    Loaded(&'a [SelectOption]),
    Selected(EntityId),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CascadeLevel {
    options: Vec<SelectOption>,
    selected: Option<EntityId>,
    loading: bool,
    loaded: bool,
    /// Generation of the only fetch whose result may land here
    pending: Option<u64>,
}

impl CascadeLevel {
    fn reset(&mut self) {
        *self = CascadeLevel::default();
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn selected(&self) -> Option<EntityId> {
        self.selected
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Label of the selected option, if it is among the loaded ones
    pub fn selected_label(&self) -> Option<&str> {
        let value = self.selected?;
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }
}

/// A fetch the caller must run: options for `level`, filtered by `parent`
///
/// `parent` is `None` only for the root level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub level: usize,
    pub parent: Option<EntityId>,
    pub generation: u64,
}

/// Chain of dependent selections L0 → L1 → ... → Ln
///
/// Selecting at level N clears every level below N and requests options for
/// N+1. Results are applied in request order: a response is dropped unless
/// its ticket is the latest one issued for that level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeController {
    levels: Vec<CascadeLevel>,
    next_generation: u64,
}

impl CascadeController {
    pub fn new(depth: usize) -> Self {
        Self {
            levels: vec![CascadeLevel::default(); depth.max(1)],
            next_generation: 1,
        }
    }

    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    pub fn level(&self, level: usize) -> Option<&CascadeLevel> {
        self.levels.get(level)
    }

    pub fn selected(&self, level: usize) -> Option<EntityId> {
        self.levels.get(level).and_then(|l| l.selected)
    }

    pub fn state(&self, level: usize) -> LevelState<'_> {
        match self.levels.get(level) {
            None => LevelState::Unselected,
            Some(l) => match (l.selected, l.loading, l.loaded) {
                (Some(value), _, _) => LevelState::Selected(value),
                (None, true, _) => LevelState::Loading,
                (None, false, true) => LevelState::Loaded(&l.options),
                (None, false, false) => LevelState::Unselected,
            },
        }
    }

    fn issue(&mut self, level: usize, parent: Option<EntityId>) -> FetchTicket {
        let generation = self.next_generation;
        self.next_generation += 1;
        let target = &mut self.levels[level];
        target.options.clear();
        target.selected = None;
        target.loading = true;
        target.loaded = false;
        target.pending = Some(generation);
        FetchTicket {
            level,
            parent,
            generation,
        }
    }

    fn clear_below(&mut self, level: usize) {
        for lower in self.levels.iter_mut().skip(level + 1) {
            lower.reset();
        }
    }

    /// Start (or restart) loading the root level's options
    pub fn begin_root_fetch(&mut self) -> FetchTicket {
        self.clear_below(0);
        self.issue(0, None)
    }

    /// Select `value` at `level`; `None` clears the selection
    ///
    /// Returns the fetch to run for the next level, if any. Clearing never
    /// fetches. Out-of-range levels are ignored.
    pub fn select(&mut self, level: usize, value: Option<EntityId>) -> Option<FetchTicket> {
        if level >= self.levels.len() {
            return None;
        }
        self.levels[level].selected = value;
        self.clear_below(level);

        let value = value?;
        if level + 1 < self.levels.len() {
            Some(self.issue(level + 1, Some(value)))
        } else {
            None
        }
    }

    pub fn clear(&mut self, level: usize) {
        self.select(level, None);
    }

    /// Apply a fetch result; returns `false` when the ticket is stale
    ///
    /// Failures leave the level loaded with no options.
    pub fn resolve(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<SelectOption>, ApiError>,
    ) -> bool {
        let Some(target) = self.levels.get_mut(ticket.level) else {
            return false;
        };
        if target.pending != Some(ticket.generation) {
            log::debug!(
                "Dropping stale options for level {} (generation {})",
                ticket.level,
                ticket.generation
            );
            return false;
        }

        target.pending = None;
        target.loading = false;
        target.loaded = true;
        target.options = match result {
            Ok(options) => options,
            Err(e) => {
                log::warn!("Failed to load options for level {}: {}", ticket.level, e);
                Vec::new()
            }
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(values: &[(EntityId, &str)]) -> Vec<SelectOption> {
        values.iter().map(|(v, l)| SelectOption::new(*v, *l)).collect()
    }

    #[test]
    fn test_root_fetch_loads_options() {
        let mut cascade = CascadeController::new(3);
        let ticket = cascade.begin_root_fetch();
        assert_eq!(ticket.level, 0);
        assert_eq!(ticket.parent, None);
        assert_eq!(cascade.state(0), LevelState::Loading);

        assert!(cascade.resolve(ticket, Ok(opts(&[(1, "Mechanics")]))));
        assert_eq!(cascade.state(0), LevelState::Loaded(&opts(&[(1, "Mechanics")])));
        assert_eq!(cascade.state(1), LevelState::Unselected);
    }

    #[test]
    fn test_select_clears_lower_levels_and_fetches_next() {
        let mut cascade = CascadeController::new(3);
        let root = cascade.begin_root_fetch();
        cascade.resolve(root, Ok(opts(&[(1, "A"), (2, "B")])));

        let chapters = cascade.select(0, Some(1)).unwrap();
        cascade.resolve(chapters, Ok(opts(&[(10, "Ch")])));
        let topics = cascade.select(1, Some(10)).unwrap();
        cascade.resolve(topics, Ok(opts(&[(100, "T")])));
        assert_eq!(cascade.select(2, Some(100)), None);

        let next = cascade.select(0, Some(2)).unwrap();
        assert_eq!(next, FetchTicket { level: 1, parent: Some(2), generation: next.generation });
        assert_eq!(cascade.state(0), LevelState::Selected(2));
        assert_eq!(cascade.state(1), LevelState::Loading);
        assert_eq!(cascade.state(2), LevelState::Unselected);
        assert_eq!(cascade.selected(2), None);
    }

    #[test]
    fn test_clearing_empties_lower_levels_without_fetch() {
        let mut cascade = CascadeController::new(3);
        let ticket = cascade.select(0, Some(1)).unwrap();
        cascade.resolve(ticket, Ok(opts(&[(10, "Ch")])));
        let ticket = cascade.select(1, Some(10)).unwrap();
        cascade.resolve(ticket, Ok(opts(&[(100, "T")])));

        assert_eq!(cascade.select(0, None), None);

        assert_eq!(cascade.state(0), LevelState::Unselected);
        assert_eq!(cascade.state(1), LevelState::Unselected);
        assert!(cascade.level(1).unwrap().options().is_empty());
        assert!(cascade.level(2).unwrap().options().is_empty());
    }

    #[test]
    fn test_late_response_for_old_selection_is_dropped() {
        let mut cascade = CascadeController::new(2);
        let for_a = cascade.select(0, Some(1)).unwrap();
        let for_b = cascade.select(0, Some(2)).unwrap();

        // B's chapters arrive first, A's arrive late
        assert!(cascade.resolve(for_b, Ok(opts(&[(20, "B chapter")]))));
        assert!(!cascade.resolve(for_a, Ok(opts(&[(10, "A chapter")]))));

        assert_eq!(cascade.selected(0), Some(2));
        assert_eq!(cascade.level(1).unwrap().options(), opts(&[(20, "B chapter")]).as_slice());
    }

    #[test]
    fn test_response_after_clear_is_dropped() {
        let mut cascade = CascadeController::new(2);
        let ticket = cascade.select(0, Some(1)).unwrap();
        cascade.clear(0);

        assert!(!cascade.resolve(ticket, Ok(opts(&[(10, "Ch")]))));
        assert_eq!(cascade.state(1), LevelState::Unselected);
    }

    #[test]
    fn test_failure_leaves_empty_loaded_level() {
        let mut cascade = CascadeController::new(2);
        let ticket = cascade.select(0, Some(1)).unwrap();

        assert!(cascade.resolve(ticket, Err(ApiError::Transport("offline".into()))));

        assert_eq!(cascade.state(1), LevelState::Loaded(&[]));
        assert_eq!(cascade.selected(0), Some(1));
    }

    #[test]
    fn test_selected_label() {
        let mut cascade = CascadeController::new(2);
        let root = cascade.begin_root_fetch();
        cascade.resolve(root, Ok(opts(&[(1, "Mechanics")])));
        cascade.select(0, Some(1));
        assert_eq!(cascade.level(0).unwrap().selected_label(), Some("Mechanics"));
    }

    #[test]
    fn test_out_of_range_level_is_ignored() {
        let mut cascade = CascadeController::new(2);
        assert_eq!(cascade.select(5, Some(1)), None);
        assert_eq!(cascade.state(5), LevelState::Unselected);
    }
}
