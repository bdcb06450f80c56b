//! Row-cyclic brick palette

use crate::sim::PALETTE_SIZE;

/// One palette entry: sprite frame name and fill color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrickColor {
    pub frame: &'static str,
    pub rgba: [f32; 4],
}

/// Rainbow palette, one entry per row, repeating every ten rows
pub const BRICK_PALETTE: [BrickColor; PALETTE_SIZE] = [
    BrickColor { frame: "brown.png", rgba: [0.55, 0.35, 0.2, 1.0] },
    BrickColor { frame: "grey.png", rgba: [0.6, 0.6, 0.6, 1.0] },
    BrickColor { frame: "purple.png", rgba: [0.55, 0.25, 0.75, 1.0] },
    BrickColor { frame: "blue.png", rgba: [0.2, 0.3, 0.9, 1.0] },
    BrickColor { frame: "light_blue.png", rgba: [0.4, 0.7, 1.0, 1.0] },
    BrickColor { frame: "dark_green.png", rgba: [0.1, 0.45, 0.2, 1.0] },
    BrickColor { frame: "green.png", rgba: [0.3, 0.85, 0.3, 1.0] },
    BrickColor { frame: "yellow.png", rgba: [0.95, 0.9, 0.25, 1.0] },
    BrickColor { frame: "orange.png", rgba: [1.0, 0.55, 0.15, 1.0] },
    BrickColor { frame: "red.png", rgba: [0.9, 0.15, 0.15, 1.0] },
];

/// Palette entry for a brick's color index (wraps around)
pub fn brick_color(color_index: u8) -> &'static BrickColor {
    &BRICK_PALETTE[color_index as usize % PALETTE_SIZE]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_order() {
        assert_eq!(brick_color(0).frame, "brown.png");
        assert_eq!(brick_color(9).frame, "red.png");
        assert_eq!(brick_color(10).frame, "brown.png");
        assert_eq!(brick_color(11).frame, "grey.png");
    }

    #[test]
    fn test_brick_color_wraps() {
        assert_eq!(brick_color(3).frame, "blue.png");
        assert_eq!(brick_color(13), brick_color(3));
    }
}
