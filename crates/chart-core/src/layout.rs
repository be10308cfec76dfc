//! Editable layout state
//!
//! Holds the ordered records of the current page plus the selected id. Ids
//! handed out by [`LayoutState::add_letter`] are never reused, even after
//! removal.

use crate::types::{LetterField, PositionedCharacter};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutState {
    letters: Vec<PositionedCharacter>,
    selected: Option<u32>,
    next_id: u32,
}

impl LayoutState {
    pub fn new(letters: Vec<PositionedCharacter>) -> Self {
        let next_id = next_free_id(&letters);
        Self {
            letters,
            selected: None,
            next_id,
        }
    }

    pub fn letters(&self) -> &[PositionedCharacter] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&PositionedCharacter> {
        self.letters.iter().find(|l| l.id == id)
    }

    /// Select `id`; unknown ids are ignored
    pub fn select(&mut self, id: u32) {
        if self.get(id).is_some() {
            self.selected = Some(id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    pub fn selected_letter(&self) -> Option<&PositionedCharacter> {
        self.selected.and_then(|id| self.get(id))
    }

    /// Apply a single-field edit to the record with `id`.
    ///
    /// Returns `false` when no such record exists.
    pub fn update(&mut self, id: u32, field: LetterField) -> bool {
        match self.letters.iter_mut().find(|l| l.id == id) {
            Some(letter) => {
                field.apply(letter);
                true
            }
            None => false,
        }
    }

    /// Move a record to an already clamped position
    pub(crate) fn set_position(&mut self, id: u32, x: f32, y: f32) -> bool {
        match self.letters.iter_mut().find(|l| l.id == id) {
            Some(letter) => {
                letter.x = x;
                letter.y = y;
                true
            }
            None => false,
        }
    }

    /// Swap in a new record set, dropping the selection
    pub fn replace(&mut self, letters: Vec<PositionedCharacter>) {
        self.next_id = self.next_id.max(next_free_id(&letters));
        self.letters = letters;
        self.selected = None;
    }

    /// Append a record and return its id
    pub fn add_letter(&mut self, glyph: char, x: f32, y: f32, font_size: f32) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        let mut letter = PositionedCharacter::new(id, glyph, x, y, font_size);
        LetterField::FontSize(font_size).apply(&mut letter);
        self.letters.push(letter);
        id
    }

    pub fn remove(&mut self, id: u32) -> Option<PositionedCharacter> {
        let index = self.letters.iter().position(|l| l.id == id)?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        Some(self.letters.remove(index))
    }

    pub fn into_letters(self) -> Vec<PositionedCharacter> {
        self.letters
    }
}

fn next_free_id(letters: &[PositionedCharacter]) -> u32 {
    letters.iter().map(|l| l.id + 1).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::generate_grid;
    use crate::types::Orientation;

    fn grid() -> LayoutState {
        LayoutState::new(generate_grid(2, 3, Orientation::Landscape))
    }

    #[test]
    fn update_touches_only_target() {
        let mut layout = grid();
        let before = layout.letters().to_vec();
        assert!(layout.update(4, LetterField::Char('Q')));
        assert!(layout.update(4, LetterField::X(12.5)));

        for (old, new) in before.iter().zip(layout.letters()) {
            if new.id == 4 {
                assert_eq!(new.glyph, 'Q');
                assert_eq!(new.x, 12.5);
                assert_eq!(new.y, old.y);
            } else {
                assert_eq!(old, new);
            }
        }
        assert!(!layout.update(99, LetterField::Y(1.0)));
    }

    #[test]
    fn font_size_is_clamped() {
        let mut layout = grid();
        layout.update(0, LetterField::FontSize(500.0));
        assert_eq!(layout.get(0).unwrap().font_size, 120.0);
        layout.update(0, LetterField::FontSize(1.0));
        assert_eq!(layout.get(0).unwrap().font_size, 8.0);
    }

    #[test]
    fn selection() {
        let mut layout = grid();
        layout.select(2);
        assert_eq!(layout.selected_letter().map(|l| l.id), Some(2));
        layout.select(42);
        assert_eq!(layout.selected(), Some(2));
        layout.clear_selection();
        assert_eq!(layout.selected(), None);
    }

    #[test]
    fn replace_clears_selection() {
        let mut layout = grid();
        layout.select(1);
        layout.replace(generate_grid(1, 2, Orientation::Landscape));
        assert_eq!(layout.selected(), None);
        assert_eq!(layout.len(), 2);
    }

    #[test]
    fn ids_are_never_reused() {
        let mut layout = grid();
        let first = layout.add_letter('X', 10.0, 10.0, 20.0);
        assert_eq!(first, 6);
        layout.select(first);
        assert!(layout.remove(first).is_some());
        assert_eq!(layout.selected(), None);
        let second = layout.add_letter('Y', 10.0, 10.0, 20.0);
        assert_eq!(second, 7);

        // A smaller replacement keeps the high-water mark
        layout.replace(Vec::new());
        assert_eq!(layout.add_letter('Z', 0.0, 0.0, 12.0), 8);
    }
}
