//! Interactive session state and action dispatch
//!
//! A [`Session`] bundles everything a frontend needs to drive renders: the
//! working palette, the selected layout variant, the canvas size, the stop
//! offset, and the palette history. Frontends translate user input into
//! [`Action`]s and dispatch them through [`Session::apply`], which reports
//! whether the change calls for a re-render.

use rand::Rng;

use crate::color::Rgb;
use crate::history::PaletteHistory;
use crate::models::{CanvasSize, Variant};
use crate::palette::{random_palette, ColorSlot, Palette};
use crate::render::{self, Frame};

/// One user-level state change
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Overwrite a single palette color
    EditColor { slot: ColorSlot, color: Rgb },
    /// Select a different layout variant
    SwitchVariant(Variant),
    /// Draw a fresh random palette and record it in the history
    RandomPalette,
    /// Navigate to the previous history entry, if any
    HistoryBack,
    /// Navigate to the next history entry, if any
    HistoryForward,
    /// Jump to a specific history entry
    LoadEntry(isize),
    /// Change the canvas size; zero dimensions are silently ignored
    Resize { width: u32, height: u32 },
    /// Shift the interior gradient stops
    SetStopPosition(f32),
    /// Swap in a complete palette, e.g. one read from a document
    ReplacePalette(Palette),
}

/// Mutable session state shared by every frontend
#[derive(Debug, Clone)]
pub struct Session {
    pub palette: Palette,
    pub variant: Variant,
    pub size: CanvasSize,
    pub stop_position: f32,
    pub history: PaletteHistory,
}

impl Session {
    pub fn new() -> Self {
        Session {
            palette: Palette::default(),
            variant: Variant::default(),
            size: CanvasSize::default(),
            stop_position: 0.0,
            history: PaletteHistory::new(),
        }
    }

    /// Apply one action and report whether the canvas needs re-rendering
    ///
    /// Rejected actions (out-of-range history steps, zero-sized resizes)
    /// leave the session untouched and return `false`.
    pub fn apply<R: Rng>(&mut self, action: Action, rng: &mut R) -> bool {
        match action {
            Action::EditColor { slot, color } => {
                self.palette.set(slot, color);
                true
            }
            Action::SwitchVariant(variant) => {
                self.variant = variant;
                true
            }
            Action::RandomPalette => {
                self.palette = random_palette(rng);
                self.history.save(&self.palette);
                true
            }
            Action::HistoryBack => match self.history.step_back() {
                Some(palette) => {
                    self.palette = palette;
                    true
                }
                None => false,
            },
            Action::HistoryForward => match self.history.step_forward() {
                Some(palette) => {
                    self.palette = palette;
                    true
                }
                None => false,
            },
            Action::LoadEntry(index) => match self.history.load(index) {
                Some(palette) => {
                    self.palette = palette;
                    true
                }
                None => false,
            },
            Action::Resize { width, height } => match CanvasSize::new(width, height) {
                Ok(size) => {
                    self.size = size;
                    true
                }
                Err(_) => false,
            },
            Action::SetStopPosition(stop_position) => {
                self.stop_position = stop_position;
                true
            }
            Action::ReplacePalette(palette) => {
                self.palette = palette;
                true
            }
        }
    }

    /// Render the main canvas plus all variant previews from the current state
    pub fn render_frame(&self) -> Frame {
        render::render_frame(&self.palette, self.variant, self.size, self.stop_position)
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}
