//! Sprite sheet: the game's images as palette-indexed pixel art.
//!
//! Each sprite is drawn at a low resolution and upscaled by an integer
//! factor to its world size. Loading validates every sprite and fails on the
//! first malformed or missing one; the game refuses to start without them.

use log::debug;
use thiserror::Error;

use crate::core::{BirdMasks, CollisionMask};
use crate::fb::Rgb;
use crate::types::BirdFrame;

pub const BIRD_WING_UP: &str = "bird-wing-up";
pub const BIRD_WING_DOWN: &str = "bird-wing-down";
pub const PIPE_END: &str = "pipe-end";
pub const PIPE_BODY: &str = "pipe-body";
pub const BACKGROUND: &str = "background";

/// Sprites the game cannot run without.
pub const REQUIRED: [&str; 5] = [BACKGROUND, PIPE_END, PIPE_BODY, BIRD_WING_UP, BIRD_WING_DOWN];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssetError {
    #[error("Sprite not found: {0}")]
    Missing(String),

    #[error("Sprite {0} has no pixels")]
    Empty(String),

    #[error("Sprite {name}: row {row} is {got} pixels wide, expected {expected}")]
    Ragged {
        name: String,
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("Sprite {name}: unknown palette key {key:?}")]
    UnknownPaletteKey { name: String, key: char },
}

/// RGB plus alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub rgb: Rgb,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba {
        rgb: Rgb::new(0, 0, 0),
        a: 0,
    };

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self {
            rgb: Rgb::new(r, g, b),
            a: 255,
        }
    }
}

/// Source description of one sprite.
#[derive(Debug, Clone, Copy)]
pub struct SpriteArt {
    pub name: &'static str,
    pub scale: u32,
    pub rows: &'static [&'static str],
}

#[rustfmt::skip]
const PALETTE: &[(char, Rgba)] = &[
    ('.', Rgba::TRANSPARENT),
    ('K', Rgba::opaque(40, 30, 30)),     // outline
    ('Y', Rgba::opaque(245, 200, 66)),   // body
    ('H', Rgba::opaque(255, 225, 100)),  // body highlight
    ('W', Rgba::opaque(215, 165, 35)),   // wing
    ('E', Rgba::opaque(255, 255, 255)),  // eye
    ('P', Rgba::opaque(20, 20, 20)),     // pupil
    ('O', Rgba::opaque(240, 110, 50)),   // beak highlight
    ('B', Rgba::opaque(225, 75, 35)),    // beak
    ('L', Rgba::opaque(74, 122, 26)),    // pipe dark side
    ('M', Rgba::opaque(100, 170, 40)),   // pipe
    ('S', Rgba::opaque(145, 215, 62)),   // pipe shine
    ('R', Rgba::opaque(115, 191, 46)),   // pipe light side
    ('C', Rgba::opaque(60, 100, 20)),    // cap rim
    ('1', Rgba::opaque(70, 180, 200)),   // sky, top
    ('2', Rgba::opaque(100, 195, 215)),
    ('3', Rgba::opaque(130, 208, 225)),
    ('4', Rgba::opaque(160, 220, 235)),
    ('5', Rgba::opaque(190, 232, 245)),  // sky, horizon
    ('h', Rgba::opaque(120, 195, 75)),   // hills
    ('g', Rgba::opaque(84, 168, 55)),    // grass
];

#[rustfmt::skip]
pub const BUILTIN: &[SpriteArt] = &[
    SpriteArt {
        name: BIRD_WING_UP,
        scale: 5,
        rows: &[
            "...KKKKK..",
            "..KYYHHEK.",
            ".KWWYYYEPK",
            "KWWWKYYEEK",
            "KWWKYYYYKK",
            "KYYYYYKOOK",
            ".KYYYYKBBK",
            "..KYYYYKK.",
            "...KKKKK..",
            "..........",
        ],
    },
    SpriteArt {
        name: BIRD_WING_DOWN,
        scale: 5,
        rows: &[
            "...KKKKK..",
            "..KYYHHEK.",
            ".KYYYYYEPK",
            "KYYYKYYEEK",
            "KYYKYYYYKK",
            "KWWWKYKOOK",
            "KWWWWKKBBK",
            ".KWWKYYKK.",
            "..KKKKKK..",
            "..........",
        ],
    },
    SpriteArt {
        name: PIPE_END,
        scale: 8,
        rows: &[
            "CCCCCCCCCC",
            "LMMSSMRRRC",
            "LMMSSMRRRC",
            "CCCCCCCCCC",
        ],
    },
    SpriteArt {
        name: PIPE_BODY,
        scale: 8,
        rows: &[
            ".LMSSMRRL.",
            ".LMSSMRRL.",
            ".LMSSMRRL.",
            ".LMSSMRRL.",
        ],
    },
    SpriteArt {
        name: BACKGROUND,
        scale: 32,
        rows: &[
            "1", "1", "2", "2", "3", "3", "3", "4",
            "4", "4", "5", "5", "5", "h", "h", "g",
        ],
    },
];

/// A decoded, upscaled RGBA image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    name: &'static str,
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Sprite {
    /// Decode pixel art, upscaling each source pixel to `scale x scale`.
    pub fn decode(art: &SpriteArt) -> Result<Self, AssetError> {
        let src_h = art.rows.len();
        let src_w = art.rows.first().map(|r| r.chars().count()).unwrap_or(0);
        if src_w == 0 || art.scale == 0 {
            return Err(AssetError::Empty(art.name.to_string()));
        }

        let mut src = Vec::with_capacity(src_w * src_h);
        for (row, line) in art.rows.iter().enumerate() {
            let got = line.chars().count();
            if got != src_w {
                return Err(AssetError::Ragged {
                    name: art.name.to_string(),
                    row,
                    expected: src_w,
                    got,
                });
            }
            for key in line.chars() {
                let color = palette(key).ok_or_else(|| AssetError::UnknownPaletteKey {
                    name: art.name.to_string(),
                    key,
                })?;
                src.push(color);
            }
        }

        let scale = art.scale as usize;
        let width = src_w * scale;
        let height = src_h * scale;
        let mut pixels = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                pixels.push(src[(y / scale) * src_w + x / scale]);
            }
        }

        Ok(Self {
            name: art.name,
            width: width as u32,
            height: height as u32,
            pixels,
        })
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        if x >= self.width || y >= self.height {
            return Rgba::TRANSPARENT;
        }
        self.pixels[(y * self.width + x) as usize]
    }

    /// Sample at a fractional position in `[0, 1)` on both axes.
    pub fn sample(&self, u: f64, v: f64) -> Rgba {
        let x = (u * self.width as f64).floor();
        let y = (v * self.height as f64).floor();
        if x < 0.0 || y < 0.0 {
            return Rgba::TRANSPARENT;
        }
        self.pixel(x as u32, y as u32)
    }

    /// Opacity mask (alpha above 127 counts as solid).
    pub fn mask(&self) -> CollisionMask {
        let alpha: Vec<u8> = self.pixels.iter().map(|p| p.a).collect();
        CollisionMask::from_alpha(self.width, self.height, &alpha)
            .unwrap_or_else(|| CollisionMask::empty(self.width, self.height))
    }
}

fn palette(key: char) -> Option<Rgba> {
    PALETTE.iter().find(|(k, _)| *k == key).map(|(_, c)| *c)
}

/// Named sprites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteSheet {
    sprites: Vec<Sprite>,
}

impl SpriteSheet {
    /// Decode the built-in sprites and check that all required ones exist.
    pub fn load() -> Result<Self, AssetError> {
        let sheet = Self::from_art(BUILTIN)?;
        sheet.require(&REQUIRED)?;
        Ok(sheet)
    }

    pub fn from_art(arts: &[SpriteArt]) -> Result<Self, AssetError> {
        let sprites = arts
            .iter()
            .map(|art| {
                let sprite = Sprite::decode(art)?;
                debug!("sprite {} decoded: {}x{}", sprite.name, sprite.width, sprite.height);
                Ok(sprite)
            })
            .collect::<Result<Vec<_>, AssetError>>()?;
        Ok(Self { sprites })
    }

    pub fn require(&self, names: &[&str]) -> Result<(), AssetError> {
        for name in names {
            self.get(name)?;
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&Sprite, AssetError> {
        self.index_of(name).map(|i| &self.sprites[i])
    }

    pub fn index_of(&self, name: &str) -> Result<usize, AssetError> {
        self.sprites
            .iter()
            .position(|s| s.name == name)
            .ok_or_else(|| AssetError::Missing(name.to_string()))
    }

    pub fn by_index(&self, index: usize) -> &Sprite {
        &self.sprites[index]
    }

    /// Collision masks of both bird frames, for the session.
    pub fn bird_masks(&self) -> Result<BirdMasks, AssetError> {
        let up = self.get(BirdFrame::WingUp.sprite_name())?.mask();
        let down = self.get(BirdFrame::WingDown.sprite_name())?.mask();
        Ok(BirdMasks::new(up, down))
    }
}
