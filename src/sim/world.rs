//! Static tile world built from a character grid
//!
//! The world never changes after construction. Coins spawned by coin blocks
//! are kept here as the build-time snapshot; the live, collectable set lives
//! on [`GameState`](super::GameState) and is restored from this snapshot on
//! reset.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::sprite::SpriteKey;
use crate::consts::TILE_SIZE;

/// Tile types recognized in level grids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileKind {
    /// Grass-topped ground (`g`)
    Ground,
    /// Ground fill below the surface (`b`)
    Earth,
    /// Floating block (`p`)
    Block,
    /// Block with a coin above it (`c`)
    CoinBlock,
    /// Goal flag (`F`), not solid
    Flag,
}

impl TileKind {
    /// Map a grid character to a tile kind; anything unknown is empty space
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'g' => Some(TileKind::Ground),
            'b' => Some(TileKind::Earth),
            'p' => Some(TileKind::Block),
            'c' => Some(TileKind::CoinBlock),
            'F' => Some(TileKind::Flag),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            TileKind::Ground => 'g',
            TileKind::Earth => 'b',
            TileKind::Block => 'p',
            TileKind::CoinBlock => 'c',
            TileKind::Flag => 'F',
        }
    }

    /// Whether bodies collide with this tile
    pub fn is_solid(&self) -> bool {
        !matches!(self, TileKind::Flag)
    }

    pub fn sprite(&self) -> SpriteKey {
        match self {
            TileKind::Ground => SpriteKey::TileGround,
            TileKind::Earth => SpriteKey::TileEarth,
            TileKind::Block => SpriteKey::TileBlock,
            TileKind::CoinBlock => SpriteKey::TileCoinBlock,
            TileKind::Flag => SpriteKey::TileFlag,
        }
    }
}

/// One grid cell of level geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub kind: TileKind,
    pub rect: Rect,
}

impl Tile {
    /// Tile occupying grid cell (`col`, `row`)
    pub fn at_cell(kind: TileKind, col: usize, row: usize) -> Self {
        let center = Vec2::new(
            col as f32 * TILE_SIZE + TILE_SIZE / 2.0,
            row as f32 * TILE_SIZE + TILE_SIZE / 2.0,
        );
        Self {
            kind,
            rect: Rect::from_center(center, Vec2::splat(TILE_SIZE)),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }
}

/// A collectable coin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    /// Stable identity (build order), survives resets
    pub id: u32,
    pub pos: Vec2,
}

impl Coin {
    pub fn rect(&self) -> Rect {
        Rect::from_center(self.pos, SpriteKey::Coin.size())
    }
}

/// Immutable level geometry
#[derive(Debug, Clone, Default)]
pub struct TileWorld {
    /// All tiles in row-major build order
    tiles: Vec<Tile>,
    /// Indices into `tiles` of the solid ones, same order
    solid: Vec<usize>,
    /// Coins as spawned at build time
    coins: Vec<Coin>,
    /// Grid extent in pixels
    size: Vec2,
}

impl TileWorld {
    /// Build the world from rows of tile characters
    pub fn from_grid<S: AsRef<str>>(rows: &[S]) -> Self {
        let mut tiles = Vec::new();
        let mut coins = Vec::new();
        let mut columns = 0usize;

        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            columns = columns.max(line.chars().count());
            for (col, c) in line.chars().enumerate() {
                let Some(kind) = TileKind::from_char(c) else {
                    continue;
                };
                let tile = Tile::at_cell(kind, col, row);
                if kind == TileKind::CoinBlock {
                    coins.push(Coin {
                        id: coins.len() as u32,
                        pos: tile.center() - Vec2::new(0.0, TILE_SIZE),
                    });
                }
                tiles.push(tile);
            }
        }

        let solid = tiles
            .iter()
            .enumerate()
            .filter(|(_, t)| t.kind.is_solid())
            .map(|(i, _)| i)
            .collect();

        let size = Vec2::new(columns as f32 * TILE_SIZE, rows.len() as f32 * TILE_SIZE);

        Self {
            tiles,
            solid,
            coins,
            size,
        }
    }

    /// Solid tiles in build order (the order collision scans use)
    pub fn solid_tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.solid.iter().map(|&i| &self.tiles[i])
    }

    /// Every tile, for rendering
    pub fn all_tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Goal flag tiles
    pub fn flags(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.tiles.iter().filter(|t| t.kind == TileKind::Flag)
    }

    /// Coins as spawned at build time
    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    /// Width of the grid in pixels
    pub fn width(&self) -> f32 {
        self.size.x
    }

    /// Height of the grid in pixels
    pub fn height(&self) -> f32 {
        self.size.y
    }
}
