use std::collections::BTreeSet;

use super::item::{Item, MAX_LEVEL};

/// The ordered item list plus the cursor.
///
/// The cursor addresses an item while navigating. While a new item is being
/// composed it sits one past the end (`cursor == len`), which is the only
/// position where that is legal. An empty outline is always composing.
///
/// Every operation is total: out-of-range indices are ignored and cursor
/// movement clamps at both ends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outline {
    items: Vec<Item>,
    cursor: usize,
}

impl Outline {
    /// Build an outline from loaded items with the cursor on the first one
    pub fn from_items(items: Vec<Item>) -> Self {
        Outline { items, cursor: 0 }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True while the cursor points at the slot of the item being composed
    pub fn is_composing(&self) -> bool {
        self.cursor == self.items.len()
    }

    /// The item under the cursor (None while composing)
    pub fn current(&self) -> Option<&Item> {
        self.items.get(self.cursor)
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    /// Indices of completed items
    pub fn completed_indices(&self) -> BTreeSet<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.completed)
            .map(|(i, _)| i)
            .collect()
    }

    /// Enter composing: move the cursor past the last item and return the
    /// level the pending item starts at. With `inherit` the pending item takes
    /// the level of the item that was under the cursor, otherwise 0.
    pub fn start_composition(&mut self, inherit: bool) -> usize {
        let level = if inherit {
            self.current().map_or(0, |item| item.level)
        } else {
            0
        };
        self.cursor = self.items.len();
        level
    }

    /// Append the composed item at the end and put the cursor on it.
    /// Empty text is committed as-is. Returns the new item's index.
    pub fn commit_composition(&mut self, text: &str, level: usize) -> usize {
        self.items.push(Item::new(text, level.min(MAX_LEVEL)));
        self.cursor = self.items.len() - 1;
        self.cursor
    }

    /// Leave composing without adding anything; the cursor lands on the last
    /// item (0 when the outline is empty, which keeps it composing).
    pub fn cancel_composition(&mut self) {
        self.cursor = self.items.len().saturating_sub(1);
    }

    /// Remove the item at `index`. Later items (and their completion marks)
    /// shift down by one; the cursor is clamped to the new last item.
    pub fn delete_at(&mut self, index: usize) -> Option<Item> {
        if index >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(index);
        if self.cursor >= self.items.len() {
            self.cursor = self.items.len().saturating_sub(1);
        }
        Some(removed)
    }

    /// Flip the completion mark at `index`; returns the new state
    pub fn toggle_complete(&mut self, index: usize) -> bool {
        match self.items.get_mut(index) {
            Some(item) => {
                item.completed = !item.completed;
                item.completed
            }
            None => false,
        }
    }

    pub fn indent(&mut self, index: usize) {
        if let Some(item) = self.items.get_mut(index) {
            item.level = (item.level + 1).min(MAX_LEVEL);
        }
    }

    /// Decrease the level at `index`; level 0 stays 0
    pub fn outdent(&mut self, index: usize) {
        if let Some(item) = self.items.get_mut(index) {
            item.level = item.level.saturating_sub(1);
        }
    }

    /// Move the cursor by `delta`, clamped to the first and last item
    pub fn move_cursor(&mut self, delta: isize) {
        if self.items.is_empty() {
            return;
        }
        let last = self.items.len() - 1;
        let target = self.cursor.saturating_add_signed(delta);
        self.cursor = target.min(last);
    }

    /// Put the cursor on `index`, clamped to the last item
    pub fn move_to(&mut self, index: usize) {
        if self.items.is_empty() {
            return;
        }
        self.cursor = index.min(self.items.len() - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn outline_of(texts: &[&str]) -> Outline {
        Outline::from_items(texts.iter().map(|t| Item::new(t, 0)).collect())
    }

    fn texts(outline: &Outline) -> Vec<&str> {
        outline.items().iter().map(|i| i.text.as_str()).collect()
    }

    fn levels(outline: &Outline) -> Vec<usize> {
        outline.items().iter().map(|i| i.level).collect()
    }

    #[test]
    fn empty_outline_is_composing() {
        let outline = Outline::default();
        assert!(outline.is_composing());
        assert_eq!(outline.cursor(), 0);
        assert!(outline.current().is_none());
    }

    #[test]
    fn loaded_outline_starts_on_first_item() {
        let outline = outline_of(&["A", "B"]);
        assert!(!outline.is_composing());
        assert_eq!(outline.current().map(|i| i.text.as_str()), Some("A"));
    }

    #[test]
    fn commit_appends_and_selects_new_item() {
        let mut outline = Outline::default();
        let level = outline.start_composition(false);
        assert_eq!(level, 0);
        let idx = outline.commit_composition("Buy milk", level);
        assert_eq!(idx, 0);
        assert_eq!(outline.cursor(), 0);
        assert!(!outline.is_composing());
        assert_eq!(outline.items()[0], Item::new("Buy milk", 0));
    }

    #[test]
    fn commit_appends_at_end_even_from_middle() {
        let mut outline = outline_of(&["A", "B", "C"]);
        outline.move_to(1);
        let level = outline.start_composition(false);
        assert_eq!(outline.cursor(), 3);
        outline.commit_composition("D", level + 2);
        assert_eq!(texts(&outline), vec!["A", "B", "C", "D"]);
        assert_eq!(outline.cursor(), 3);
        assert_eq!(outline.items()[3].level, 2);
    }

    #[test]
    fn commit_accepts_empty_text() {
        let mut outline = Outline::default();
        outline.start_composition(false);
        outline.commit_composition("", 0);
        assert_eq!(outline.len(), 1);
        assert_eq!(outline.items()[0].text, "");
    }

    #[test]
    fn start_composition_inherits_level() {
        let mut outline = outline_of(&["A", "B"]);
        outline.indent(1);
        outline.indent(1);
        outline.move_to(1);
        assert_eq!(outline.start_composition(true), 2);

        let mut outline = outline_of(&["A", "B"]);
        outline.indent(1);
        outline.move_to(1);
        assert_eq!(outline.start_composition(false), 0);
    }

    #[test]
    fn cancel_returns_to_last_item() {
        let mut outline = outline_of(&["A", "B", "C"]);
        outline.start_composition(false);
        outline.cancel_composition();
        assert_eq!(outline.cursor(), 2);
        assert!(!outline.is_composing());
    }

    #[test]
    fn cancel_on_empty_outline_stays_composing() {
        let mut outline = Outline::default();
        outline.start_composition(false);
        outline.cancel_composition();
        assert_eq!(outline.cursor(), 0);
        assert!(outline.is_composing());
    }

    #[test]
    fn delete_shifts_completed_marks() {
        // [A, B, C] with B completed; deleting A leaves B completed at index 0
        let mut outline = outline_of(&["A", "B", "C"]);
        outline.toggle_complete(1);
        let removed = outline.delete_at(0);
        assert_eq!(removed.map(|i| i.text), Some("A".to_string()));
        assert_eq!(texts(&outline), vec!["B", "C"]);
        assert_eq!(outline.completed_indices(), BTreeSet::from([0]));
    }

    #[test]
    fn delete_drops_completed_mark_of_removed_item() {
        let mut outline = outline_of(&["A", "B", "C"]);
        outline.toggle_complete(1);
        outline.toggle_complete(2);
        outline.delete_at(1);
        assert_eq!(outline.completed_indices(), BTreeSet::from([1]));
        assert_eq!(texts(&outline), vec!["A", "C"]);
    }

    #[test]
    fn delete_last_item_clamps_cursor() {
        let mut outline = outline_of(&["A", "B", "C"]);
        outline.move_to(2);
        outline.delete_at(2);
        assert_eq!(outline.cursor(), 1);
    }

    #[test]
    fn delete_only_item_leaves_composing_outline() {
        let mut outline = outline_of(&["A"]);
        outline.delete_at(0);
        assert!(outline.is_empty());
        assert!(outline.is_composing());
    }

    #[test]
    fn delete_on_empty_or_out_of_range_is_noop() {
        let mut outline = Outline::default();
        assert!(outline.delete_at(0).is_none());
        let mut outline = outline_of(&["A"]);
        assert!(outline.delete_at(5).is_none());
        assert_eq!(outline.len(), 1);
    }

    #[test]
    fn toggle_complete_flips() {
        let mut outline = outline_of(&["A"]);
        assert!(outline.toggle_complete(0));
        assert_eq!(outline.completed_count(), 1);
        assert!(!outline.toggle_complete(0));
        assert_eq!(outline.completed_count(), 0);
        assert!(!outline.toggle_complete(3));
    }

    #[test]
    fn indent_twice_then_outdent() {
        let mut outline = outline_of(&["A", "B", "C"]);
        outline.move_to(1);
        let cursor = outline.cursor();
        outline.indent(cursor);
        outline.indent(cursor);
        assert_eq!(levels(&outline), vec![0, 2, 0]);
        outline.outdent(cursor);
        assert_eq!(levels(&outline), vec![0, 1, 0]);
    }

    #[test]
    fn indent_stops_at_max_level() {
        let mut outline = Outline::from_items(vec![Item::new("A", MAX_LEVEL)]);
        outline.indent(0);
        assert_eq!(levels(&outline), vec![MAX_LEVEL]);
    }

    #[test]
    fn outdent_at_zero_is_noop() {
        let mut outline = outline_of(&["A"]);
        outline.outdent(0);
        assert_eq!(levels(&outline), vec![0]);
    }

    #[test]
    fn jump_down_clamps_at_end() {
        let mut outline = outline_of(&["A", "B", "C", "D", "E"]);
        outline.move_cursor(3);
        assert_eq!(outline.cursor(), 3);
        outline.move_cursor(3);
        assert_eq!(outline.cursor(), 4);
    }

    #[test]
    fn jump_up_clamps_at_start() {
        let mut outline = outline_of(&["A", "B", "C", "D", "E"]);
        outline.move_to(2);
        outline.move_cursor(-3);
        assert_eq!(outline.cursor(), 0);
    }

    #[test]
    fn move_to_first_and_last() {
        let mut outline = outline_of(&["A", "B", "C"]);
        outline.move_to(usize::MAX);
        assert_eq!(outline.cursor(), 2);
        outline.move_to(0);
        assert_eq!(outline.cursor(), 0);
    }

    #[test]
    fn move_on_empty_outline_keeps_composing() {
        let mut outline = Outline::default();
        outline.move_cursor(1);
        outline.move_to(usize::MAX);
        assert!(outline.is_composing());
    }

    fn arb_items() -> impl Strategy<Value = Vec<Item>> {
        prop::collection::vec(
            ("[a-z ]{0,8}", 0usize..5, any::<bool>()).prop_map(|(text, level, completed)| Item {
                text,
                level,
                completed,
            }),
            1..12,
        )
    }

    proptest! {
        #[test]
        fn delete_reindexes_completed_set(items in arb_items(), pick in any::<prop::sample::Index>()) {
            let mut outline = Outline::from_items(items);
            let i = pick.index(outline.len());
            let before = outline.completed_indices();
            outline.delete_at(i);
            let after = outline.completed_indices();
            for k in &before {
                if *k > i {
                    prop_assert!(after.contains(&(k - 1)));
                } else if *k < i {
                    prop_assert!(after.contains(k));
                }
            }
            let expected = before.iter().filter(|k| **k != i).count();
            prop_assert_eq!(after.len(), expected);
        }

        #[test]
        fn cursor_stays_in_bounds(items in arb_items(), deltas in prop::collection::vec(-7isize..7, 0..20)) {
            let mut outline = Outline::from_items(items);
            for delta in deltas {
                outline.move_cursor(delta);
                prop_assert!(outline.cursor() < outline.len());
            }
        }

        #[test]
        fn move_at_boundary_is_idempotent(items in arb_items(), delta in 1isize..10) {
            let mut outline = Outline::from_items(items);
            outline.move_to(usize::MAX);
            let last = outline.cursor();
            outline.move_cursor(delta);
            prop_assert_eq!(outline.cursor(), last);
            outline.move_to(0);
            outline.move_cursor(-delta);
            prop_assert_eq!(outline.cursor(), 0);
        }

        #[test]
        fn outdent_never_goes_below_zero(items in arb_items(), times in 0usize..10) {
            let mut outline = Outline::from_items(items);
            for _ in 0..times {
                outline.outdent(0);
            }
            let level = outline.items()[0].level;
            outline.outdent(0);
            prop_assert_eq!(outline.items()[0].level, level.saturating_sub(1));
        }

        #[test]
        fn composing_iff_cursor_at_end(items in arb_items(), inherit in any::<bool>(), commit in any::<bool>()) {
            let mut outline = Outline::from_items(items);
            prop_assert!(!outline.is_composing());
            let level = outline.start_composition(inherit);
            prop_assert!(outline.is_composing());
            prop_assert_eq!(outline.cursor(), outline.len());
            if commit {
                outline.commit_composition("new", level);
            } else {
                outline.cancel_composition();
            }
            prop_assert!(!outline.is_composing());
        }
    }
}
