//! Append-only palette history with a navigation cursor
//!
//! Every generated or saved palette is appended; nothing is ever removed or
//! deduplicated, and stepping back before saving again does not truncate the
//! tail. The cursor starts at -1 (nothing saved yet) and otherwise points at
//! the entry most recently saved or navigated to.

use crate::palette::Palette;

#[derive(Debug, Clone)]
pub struct PaletteHistory {
    entries: Vec<Palette>,
    cursor: isize,
}

impl PaletteHistory {
    pub fn new() -> Self {
        PaletteHistory {
            entries: Vec::new(),
            cursor: -1,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current cursor position, or -1 while the history is empty
    pub fn cursor(&self) -> isize {
        self.cursor
    }

    pub fn entries(&self) -> &[Palette] {
        &self.entries
    }

    /// The entry the cursor points at, if any
    pub fn current(&self) -> Option<&Palette> {
        usize::try_from(self.cursor)
            .ok()
            .and_then(|i| self.entries.get(i))
    }

    /// Append a snapshot and move the cursor onto it
    pub fn save(&mut self, palette: &Palette) {
        self.entries.push(palette.clone());
        self.cursor = self.entries.len() as isize - 1;
    }

    /// Fetch the entry at `index` and move the cursor there
    ///
    /// An out-of-range index leaves the cursor untouched and returns `None`.
    pub fn load(&mut self, index: isize) -> Option<Palette> {
        if index < 0 || index >= self.entries.len() as isize {
            return None;
        }
        self.cursor = index;
        Some(self.entries[index as usize].clone())
    }

    /// Step the cursor toward older entries; a no-op at the beginning
    pub fn step_back(&mut self) -> Option<Palette> {
        if self.cursor > 0 {
            self.load(self.cursor - 1)
        } else {
            None
        }
    }

    /// Step the cursor toward newer entries; a no-op at the end
    pub fn step_forward(&mut self) -> Option<Palette> {
        if self.cursor < self.entries.len() as isize - 1 {
            self.load(self.cursor + 1)
        } else {
            None
        }
    }
}

impl Default for PaletteHistory {
    fn default() -> Self {
        PaletteHistory::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    fn palette(tag: u8) -> Palette {
        Palette::new(
            Rgb::new(tag, 0, 0),
            Rgb::new(0, tag, 0),
            Rgb::new(0, 0, tag),
            Rgb::new(tag, tag, 0),
        )
    }

    #[test]
    fn test_starts_empty_with_cursor_before_first_entry() {
        let history = PaletteHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.cursor(), -1);
        assert!(history.current().is_none());
    }

    #[test]
    fn test_save_appends_and_moves_cursor() {
        let mut history = PaletteHistory::new();
        history.save(&palette(1));
        assert_eq!(history.len(), 1);
        assert_eq!(history.cursor(), 0);

        history.save(&palette(2));
        assert_eq!(history.len(), 2);
        assert_eq!(history.cursor(), 1);
        assert_eq!(history.current(), Some(&palette(2)));
    }

    #[test]
    fn test_save_never_deduplicates() {
        let mut history = PaletteHistory::new();
        history.save(&palette(7));
        history.save(&palette(7));
        assert_eq!(history.len(), 2, "identical snapshots are both kept");
    }

    #[test]
    fn test_load_moves_cursor_only_when_in_range() {
        let mut history = PaletteHistory::new();
        history.save(&palette(1));
        history.save(&palette(2));

        assert_eq!(history.load(0), Some(palette(1)));
        assert_eq!(history.cursor(), 0);

        assert_eq!(history.load(-1), None);
        assert_eq!(history.cursor(), 0, "invalid index leaves the cursor alone");
        assert_eq!(history.load(2), None);
        assert_eq!(history.cursor(), 0);
    }

    #[test]
    fn test_step_back_clamps_at_oldest_entry() {
        let mut history = PaletteHistory::new();
        history.save(&palette(1));
        history.save(&palette(2));
        history.save(&palette(3));

        assert_eq!(history.step_back(), Some(palette(2)));
        assert_eq!(history.step_back(), Some(palette(1)));
        assert_eq!(history.step_back(), None, "already at the oldest entry");
        assert_eq!(history.cursor(), 0);
    }

    #[test]
    fn test_step_forward_clamps_at_newest_entry() {
        let mut history = PaletteHistory::new();
        history.save(&palette(1));
        history.save(&palette(2));
        history.step_back();

        assert_eq!(history.step_forward(), Some(palette(2)));
        assert_eq!(history.step_forward(), None, "already at the newest entry");
        assert_eq!(history.cursor(), 1);
    }

    #[test]
    fn test_steps_are_no_ops_on_empty_history() {
        let mut history = PaletteHistory::new();
        assert_eq!(history.step_back(), None);
        assert_eq!(history.step_forward(), None);
        assert_eq!(history.cursor(), -1);
    }

    #[test]
    fn test_save_after_stepping_back_appends_without_truncating() {
        let mut history = PaletteHistory::new();
        history.save(&palette(1));
        history.save(&palette(2));
        history.step_back();

        history.save(&palette(3));
        assert_eq!(history.len(), 3, "older tail entries survive a new save");
        assert_eq!(history.cursor(), 2);
        assert_eq!(history.entries()[1], palette(2));
    }
}
