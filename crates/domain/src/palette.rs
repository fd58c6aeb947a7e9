//! Fixed color palette shared by chart segments and table row accents.

use std::fmt;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex notation, e.g. `#3498db`.
    #[must_use]
    pub fn hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// The ten series colors, in assignment order.
pub const PALETTE: [Color; 10] = [
    Color::rgb(0x34, 0x98, 0xdb),
    Color::rgb(0x2e, 0xcc, 0x71),
    Color::rgb(0xf3, 0x9c, 0x12),
    Color::rgb(0xe7, 0x4c, 0x3c),
    Color::rgb(0x9b, 0x59, 0xb6),
    Color::rgb(0x1a, 0xbc, 0x9c),
    Color::rgb(0xf1, 0xc4, 0x0f),
    Color::rgb(0xe6, 0x7e, 0x22),
    Color::rgb(0x34, 0x49, 0x5e),
    Color::rgb(0x16, 0xa0, 0x85),
];

/// Color for the item at `index`, cycling through [`PALETTE`].
#[must_use]
pub fn color_for(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}
