//! Owned pixel buffer for composed output

use crate::color::Rgb;

/// An 8-bit RGB pixel buffer in row-major order, rows top to bottom
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Surface {
    /// Allocate a surface of the given dimensions, initialized to black
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * 3;
        Surface {
            width,
            height,
            data: vec![0; len],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGB bytes, three per pixel
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        let idx = self.index(x, y);
        Rgb::new(self.data[idx], self.data[idx + 1], self.data[idx + 2])
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgb) {
        let idx = self.index(x, y);
        self.data[idx] = color.r;
        self.data[idx + 1] = color.g;
        self.data[idx + 2] = color.b;
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        (y as usize * self.width as usize + x as usize) * 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_surface_is_black() {
        let surface = Surface::new(4, 3);
        assert_eq!(surface.data().len(), 4 * 3 * 3);
        assert!(surface.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_pixel_round_trip() {
        let mut surface = Surface::new(5, 5);
        surface.set_pixel(2, 3, Rgb::new(10, 20, 30));
        assert_eq!(surface.pixel(2, 3), Rgb::new(10, 20, 30));
        assert_eq!(surface.pixel(3, 2), Rgb::new(0, 0, 0), "neighbor untouched");
    }

    #[test]
    fn test_row_major_layout() {
        let mut surface = Surface::new(2, 2);
        surface.set_pixel(1, 0, Rgb::new(1, 2, 3));
        surface.set_pixel(0, 1, Rgb::new(4, 5, 6));
        assert_eq!(&surface.data()[3..6], &[1, 2, 3], "second pixel of first row");
        assert_eq!(&surface.data()[6..9], &[4, 5, 6], "first pixel of second row");
    }
}
