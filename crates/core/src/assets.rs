//! Glyph assets and fixed board glyphs
//!
//! An asset is a run of glyph rows, each row terminated by a NUL byte. An empty
//! row (two consecutive terminators) or the end of the data ends the asset.
//! Height is the row count, width the longest row. Both are measured in `const`
//! context when the asset is declared, so they are never recomputed.

use crate::objects::SegmentShape;

pub const BORDER_TOP: u8 = b'-';
pub const BORDER_BOTTOM: u8 = b'_';
pub const BORDER_LEFT: u8 = b'|';
pub const BORDER_RIGHT: u8 = b'|';

/// Corner glyphs: top-left, top-right, bottom-left, bottom-right.
pub const CORNERS: [u8; 4] = [b'/', b'\\', b'\\', b'/'];

pub const DECORATIONS: [u8; 3] = [b'.', b'^', b'`'];
pub const FLOOR: u8 = b' ';

/// Line terminator written after every frame row.
pub const LINE_BREAK: &[u8; 2] = b"\r\n";

/// A named multi-row glyph shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asset {
    name: &'static str,
    glyphs: &'static [u8],
    width: usize,
    height: usize,
}

impl Asset {
    pub const fn new(name: &'static str, glyphs: &'static [u8]) -> Self {
        let (width, height) = measure(glyphs);
        Self {
            name,
            glyphs,
            width,
            height,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Glyph rows, top to bottom. Rows may be shorter than [`Asset::width`].
    pub fn rows(&self) -> impl Iterator<Item = &'static [u8]> {
        self.glyphs.split(|&b| b == 0).take(self.height)
    }
}

const fn measure(glyphs: &[u8]) -> (usize, usize) {
    let mut width = 0;
    let mut height = 0;
    let mut run = 0;
    let mut i = 0;

    while i < glyphs.len() {
        if glyphs[i] == 0 {
            if run == 0 {
                // Empty row: end of asset.
                return (width, height);
            }
            if run > width {
                width = run;
            }
            height += 1;
            run = 0;
        } else {
            run += 1;
        }
        i += 1;
    }

    if run > 0 {
        if run > width {
            width = run;
        }
        height += 1;
    }

    (width, height)
}

pub const BONUS_FRUIT: Asset = Asset::new("bonus-fruit", b"BB\0BB\0");
pub const FRUIT: Asset = Asset::new("fruit", b"FF\0FF\0");
pub const INVINCIBLE_FRUIT: Asset = Asset::new("invincible-fruit", b"II\0II\0");
pub const SNAKE_EAST_TO_NORTH: Asset = Asset::new("snake-east-to-north", b"S \0ss\0");
pub const SNAKE_EAST_TO_SOUTH: Asset = Asset::new("snake-east-to-south", b"ss\0S \0");
pub const SNAKE_HEAD: Asset = Asset::new("snake-head", b"SS\0SS\0");
pub const SNAKE_NORTH_TO_EAST: Asset = Asset::new("snake-north-to-east", b"s \0sS\0");
pub const SNAKE_NORTH_TO_WEST: Asset = Asset::new("snake-north-to-west", b" s\0Ss\0");
pub const SNAKE_SOUTH_TO_EAST: Asset = Asset::new("snake-south-to-east", b"sS\0s \0");
pub const SNAKE_SOUTH_TO_WEST: Asset = Asset::new("snake-south-to-west", b"Ss\0 s\0");
pub const SNAKE_TAIL: Asset = Asset::new("snake-tail", b"ss\0ss\0");
pub const SNAKE_WEST_TO_NORTH: Asset = Asset::new("snake-west-to-north", b" S\0ss\0");
pub const SNAKE_WEST_TO_SOUTH: Asset = Asset::new("snake-west-to-south", b"ss\0 S\0");
pub const WALL: Asset = Asset::new("wall", b"##\0##\0");

/// Every asset the game can draw. Cell size is derived from this table.
pub const ASSETS: [&Asset; 14] = [
    &BONUS_FRUIT,
    &FRUIT,
    &INVINCIBLE_FRUIT,
    &SNAKE_EAST_TO_NORTH,
    &SNAKE_EAST_TO_SOUTH,
    &SNAKE_HEAD,
    &SNAKE_NORTH_TO_EAST,
    &SNAKE_NORTH_TO_WEST,
    &SNAKE_SOUTH_TO_EAST,
    &SNAKE_SOUTH_TO_WEST,
    &SNAKE_TAIL,
    &SNAKE_WEST_TO_NORTH,
    &SNAKE_WEST_TO_SOUTH,
    &WALL,
];

/// max(height, width) over [`ASSETS`].
pub const CELL_SIZE: usize = {
    let mut size = 0;
    let mut i = 0;
    while i < ASSETS.len() {
        if ASSETS[i].height > size {
            size = ASSETS[i].height;
        }
        if ASSETS[i].width > size {
            size = ASSETS[i].width;
        }
        i += 1;
    }
    size
};

/// Asset for a tail segment of the given shape.
pub fn segment_asset(shape: SegmentShape) -> &'static Asset {
    match shape {
        SegmentShape::Straight => &SNAKE_TAIL,
        SegmentShape::EastToNorth => &SNAKE_EAST_TO_NORTH,
        SegmentShape::EastToSouth => &SNAKE_EAST_TO_SOUTH,
        SegmentShape::NorthToEast => &SNAKE_NORTH_TO_EAST,
        SegmentShape::NorthToWest => &SNAKE_NORTH_TO_WEST,
        SegmentShape::SouthToEast => &SNAKE_SOUTH_TO_EAST,
        SegmentShape::SouthToWest => &SNAKE_SOUTH_TO_WEST,
        SegmentShape::WestToNorth => &SNAKE_WEST_TO_NORTH,
        SegmentShape::WestToSouth => &SNAKE_WEST_TO_SOUTH,
    }
}
