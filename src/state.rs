//! The selection state machine driving ring visibility.
//!
//! One `SelectionState` lives per mounted menu. All transitions run
//! synchronously on the UI event thread; the machine holds no locks and
//! assumes at most one transition in flight, which egui's single-threaded
//! event dispatch guarantees.

use crate::gate::{self, CodeCheck, CodeError};
use crate::menu::MenuItem;

/// Receiver for leaf activations.
///
/// Called exactly once per leaf selection with the entry's action token.
/// The machine neither inspects nor awaits the result.
pub trait ActionSink {
    fn perform_action(&mut self, value: &str);
}

/// Which rings are visible and interactive.
///
/// `Closed` shows the identity search form and nothing else. A successful
/// code submit moves to `Gated`, where the top-level ring is shown around
/// the center hub and the hub displays the accepted code. Opening an entry
/// with a sub-ring moves to `Drilled`, the only phase where the second
/// ring exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuPhase {
    Closed,
    Gated,
    Drilled,
}

/// Selection and gate status for one mounted menu.
#[derive(Debug, Clone)]
pub struct SelectionState {
    phase: MenuPhase,
    identity_code: String,
    selected_level1: Option<MenuItem>,
    selected_level2: Option<MenuItem>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionState {
    pub fn new() -> Self {
        Self {
            phase: MenuPhase::Closed,
            identity_code: String::new(),
            selected_level1: None,
            selected_level2: None,
        }
    }

    pub fn phase(&self) -> MenuPhase {
        self.phase
    }

    /// How many rings beyond the hub are visible: 0, 1 or 2.
    pub fn depth(&self) -> usize {
        match self.phase() {
            MenuPhase::Closed => 0,
            MenuPhase::Gated => 1,
            MenuPhase::Drilled => 2,
        }
    }

    pub fn gate_passed(&self) -> bool {
        self.phase() != MenuPhase::Closed
    }

    /// The accepted identity code, or "" while the gate is closed.
    pub fn identity_code(&self) -> &str {
        &self.identity_code
    }

    pub fn selected_level1(&self) -> Option<&MenuItem> {
        self.selected_level1.as_ref()
    }

    pub fn selected_level2(&self) -> Option<&MenuItem> {
        self.selected_level2.as_ref()
    }

    /// Highlight predicate for the renderer: is `value` the current
    /// selection on `ring`? Pure function of the selection, no stored
    /// render state.
    pub fn is_selected(&self, ring: usize, value: &str) -> bool {
        let selected = match ring {
            1 => self.selected_level1.as_ref(),
            2 => self.selected_level2.as_ref(),
            _ => None,
        };
        selected.map(|item| item.value == value).unwrap_or(false)
    }

    /// Submit an identity code from the search form.
    ///
    /// Only meaningful while the gate is closed; the code must pass the
    /// full checksum. On failure the machine stays closed and the
    /// validator's error is handed back for the form to surface. An
    /// incomplete code is a length failure at submit time.
    pub fn submit_search(&mut self, code: &str) -> Result<(), CodeError> {
        if self.phase() != MenuPhase::Closed {
            return Ok(());
        }
        match gate::validate(code) {
            Ok(CodeCheck::Valid) => {
                log::debug!("identity gate passed");
                self.identity_code = code.to_string();
                self.phase = MenuPhase::Gated;
                Ok(())
            }
            Ok(CodeCheck::Incomplete) => Err(CodeError::Format {
                reason: "identity codes are 10 digits long",
            }),
            Err(e) => Err(e),
        }
    }

    /// Click on a top-level ring entry.
    ///
    /// Clicking the currently open entry closes its sub-ring (toggle-off).
    /// An entry with two or more children opens its sub-ring. A true leaf
    /// or a single-child group fires one action with the entry's own value
    /// and leaves the rings as they are.
    pub fn select_level1(&mut self, item: &MenuItem, sink: &mut dyn ActionSink) {
        if !self.gate_passed() {
            return;
        }
        if self.is_selected(1, &item.value) {
            self.selected_level1 = None;
            self.selected_level2 = None;
            self.phase = MenuPhase::Gated;
        } else if item.drills_down() {
            self.selected_level1 = Some(item.clone());
            self.selected_level2 = None;
            self.phase = MenuPhase::Drilled;
        } else {
            sink.perform_action(&item.value);
        }
    }

    /// Click on a sub-ring entry: highlight it and fire its action.
    /// Ring visibility does not change. Ignored unless a sub-ring is open.
    pub fn select_level2(&mut self, item: &MenuItem, sink: &mut dyn ActionSink) {
        if self.phase() != MenuPhase::Drilled {
            return;
        }
        self.selected_level2 = Some(item.clone());
        sink.perform_action(&item.value);
    }

    /// Close everything: drop both selections, forget the code, relock the
    /// gate. Legal from any state.
    pub fn reset(&mut self) {
        self.phase = MenuPhase::Closed;
        self.identity_code.clear();
        self.selected_level1 = None;
        self.selected_level2 = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MenuTree;

    const CODE: &str = "0499370899";

    #[derive(Default)]
    struct RecordingSink {
        actions: Vec<String>,
    }

    impl ActionSink for RecordingSink {
        fn perform_action(&mut self, value: &str) {
            self.actions.push(value.to_string());
        }
    }

    fn gated() -> SelectionState {
        let mut state = SelectionState::new();
        state.submit_search(CODE).unwrap();
        state
    }

    #[test]
    fn starts_closed() {
        let state = SelectionState::new();
        assert_eq!(state.phase(), MenuPhase::Closed);
        assert_eq!(state.depth(), 0);
        assert!(!state.gate_passed());
    }

    #[test]
    fn bad_checksum_keeps_gate_closed() {
        let mut state = SelectionState::new();
        assert!(state.submit_search("0499370891").is_err());
        assert_eq!(state.phase(), MenuPhase::Closed);
        assert!(state.identity_code().is_empty());
    }

    #[test]
    fn incomplete_code_keeps_gate_closed() {
        let mut state = SelectionState::new();
        assert!(matches!(
            state.submit_search("04993"),
            Err(CodeError::Format { .. })
        ));
        assert_eq!(state.phase(), MenuPhase::Closed);
    }

    #[test]
    fn valid_code_opens_top_ring() {
        let state = gated();
        assert_eq!(state.phase(), MenuPhase::Gated);
        assert_eq!(state.depth(), 1);
        assert_eq!(state.identity_code(), CODE);
    }

    #[test]
    fn clicks_before_gate_are_ignored() {
        let tree = MenuTree::bundled();
        let mut state = SelectionState::new();
        let mut sink = RecordingSink::default();
        state.select_level1(tree.top_level("copy").unwrap(), &mut sink);
        assert_eq!(state.phase(), MenuPhase::Closed);
        assert!(sink.actions.is_empty());
    }

    #[test]
    fn group_click_opens_sub_ring() {
        let tree = MenuTree::bundled();
        let mut state = gated();
        let mut sink = RecordingSink::default();
        state.select_level1(tree.top_level("show").unwrap(), &mut sink);
        assert_eq!(state.phase(), MenuPhase::Drilled);
        assert_eq!(state.depth(), 2);
        assert!(state.is_selected(1, "show"));
        assert!(state.selected_level2().is_none());
        assert!(sink.actions.is_empty());
    }

    #[test]
    fn second_click_toggles_sub_ring_off() {
        let tree = MenuTree::bundled();
        let item = tree.top_level("show").unwrap();
        let mut state = gated();
        let mut sink = RecordingSink::default();

        state.select_level1(item, &mut sink);
        state.select_level1(item, &mut sink);
        assert_eq!(state.phase(), MenuPhase::Gated);
        assert!(state.selected_level1().is_none());

        // Third click is a fresh selection, not a no-op.
        state.select_level1(item, &mut sink);
        assert_eq!(state.phase(), MenuPhase::Drilled);
    }

    #[test]
    fn leaf_click_fires_action_once_without_ring_change() {
        let tree = MenuTree::bundled();
        let mut state = gated();
        let mut sink = RecordingSink::default();
        state.select_level1(tree.top_level("copy").unwrap(), &mut sink);
        assert_eq!(state.phase(), MenuPhase::Gated);
        assert_eq!(sink.actions, vec!["copy"]);
    }

    #[test]
    fn single_child_group_fires_own_value_instead_of_drilling() {
        let tree = MenuTree::new(vec![crate::menu::MenuItem::group(
            "Show",
            "show",
            "visibility",
            vec![crate::menu::MenuItem::leaf("Summary", "show_summary")],
        )])
        .unwrap();
        let mut state = gated();
        let mut sink = RecordingSink::default();
        state.select_level1(&tree.items[0], &mut sink);
        assert_eq!(state.phase(), MenuPhase::Gated);
        assert_eq!(sink.actions, vec!["show"]);
    }

    #[test]
    fn switching_groups_replaces_selection_and_clears_sub_highlight() {
        let tree = MenuTree::bundled();
        let mut state = gated();
        let mut sink = RecordingSink::default();

        let show = tree.top_level("show").unwrap();
        state.select_level1(show, &mut sink);
        state.select_level2(&show.children[0], &mut sink);
        assert!(state.is_selected(2, "show_summary"));

        state.select_level1(tree.top_level("expand_related").unwrap(), &mut sink);
        assert_eq!(state.phase(), MenuPhase::Drilled);
        assert!(state.is_selected(1, "expand_related"));
        assert!(state.selected_level2().is_none());
    }

    #[test]
    fn sub_ring_click_highlights_and_fires_action() {
        let tree = MenuTree::bundled();
        let show = tree.top_level("show").unwrap();
        let mut state = gated();
        let mut sink = RecordingSink::default();

        state.select_level1(show, &mut sink);
        state.select_level2(&show.children[1], &mut sink);
        assert_eq!(state.phase(), MenuPhase::Drilled);
        assert!(state.is_selected(2, "show_detail"));
        assert_eq!(sink.actions, vec!["show_detail"]);
    }

    #[test]
    fn sub_ring_click_ignored_when_no_sub_ring_open() {
        let tree = MenuTree::bundled();
        let child = &tree.top_level("show").unwrap().children[0];
        let mut state = gated();
        let mut sink = RecordingSink::default();
        state.select_level2(child, &mut sink);
        assert!(state.selected_level2().is_none());
        assert!(sink.actions.is_empty());
    }

    #[test]
    fn reset_restores_initial_state_from_anywhere() {
        let tree = MenuTree::bundled();
        let show = tree.top_level("show").unwrap();
        let mut sink = RecordingSink::default();

        let mut drilled = gated();
        drilled.select_level1(show, &mut sink);
        drilled.select_level2(&show.children[0], &mut sink);

        for mut state in [SelectionState::new(), gated(), drilled] {
            state.reset();
            assert_eq!(state.phase(), MenuPhase::Closed);
            assert_eq!(state.depth(), 0);
            assert!(!state.gate_passed());
            assert!(state.identity_code().is_empty());
            assert!(state.selected_level1().is_none());
            assert!(state.selected_level2().is_none());
        }
    }

    #[test]
    fn submit_is_a_no_op_once_gated() {
        let mut state = gated();
        assert!(state.submit_search("0000000000").is_ok());
        assert_eq!(state.identity_code(), CODE);
    }
}
