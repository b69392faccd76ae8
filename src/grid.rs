//! Periodic grid layout
//!
//! Places elements on a fixed grid and attaches the per-tile overlays: the
//! classification highlight from the legend and the search match state.
//! The two overlays touch separate fields and can be applied in any order.

use crate::classification::{ClassificationBucket, ClassificationSelection};
use crate::dataset::{Dataset, Element};
use crate::error::{Error, Result};
use crate::search::SearchResults;
use crate::types::ElementNumber;
use serde::{Deserialize, Serialize};
use tracing::warn;

// ============================================================================
// Layout
// ============================================================================

/// Largest number of cells a grid may have
pub const MAX_GRID_CELLS: u64 = 4096;

/// Grid dimensions; positions are `(ypos - 1) * columns + xpos`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLayout {
    #[serde(default = "default_columns")]
    pub columns: u32,
    #[serde(default = "default_rows")]
    pub rows: u32,
}

fn default_columns() -> u32 {
    18
}

fn default_rows() -> u32 {
    9
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            rows: default_rows(),
        }
    }
}

impl GridLayout {
    /// Reject empty grids and grids over `MAX_GRID_CELLS`
    pub fn validate(&self) -> Result<()> {
        let cells = u64::from(self.columns) * u64::from(self.rows);
        if cells == 0 || cells > MAX_GRID_CELLS {
            return Err(Error::invalid_config(
                "grid",
                format!(
                    "dimensions must be non-zero with at most {MAX_GRID_CELLS} cells, got {}x{}",
                    self.columns, self.rows
                ),
            ));
        }
        Ok(())
    }

    /// Number of cells in the grid
    pub fn len(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 1-based position of a grid coordinate, if it lies on the grid
    pub fn position(&self, xpos: u32, ypos: u32) -> Option<usize> {
        let on_grid = (1..=self.columns).contains(&xpos) && (1..=self.rows).contains(&ypos);
        on_grid.then(|| (ypos as usize - 1) * self.columns as usize + xpos as usize)
    }
}

// ============================================================================
// Overlays
// ============================================================================

/// Display state of one tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TileOverlay {
    pub bucket: &'static ClassificationBucket,
    /// The element's bucket is the one selected in the legend
    pub highlighted: bool,
    /// Search membership; `None` when there is no query
    pub matched: Option<bool>,
}

/// Colors and interaction for a tile, derived from its overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TileStyle {
    /// Bucket color, or `None` for the neutral tile background
    pub background: Option<&'static str>,
    /// Bucket hover color, or `None` for the neutral hover
    pub hover_background: Option<&'static str>,
    pub hoverable: bool,
    /// Drawn at reduced opacity
    pub dimmed: bool,
}

impl TileOverlay {
    /// Overlay with neither highlight nor search applied
    pub fn base(bucket: &'static ClassificationBucket) -> Self {
        Self {
            bucket,
            highlighted: false,
            matched: None,
        }
    }

    #[must_use]
    pub fn with_highlight(self, highlighted: bool) -> Self {
        Self {
            highlighted,
            ..self
        }
    }

    #[must_use]
    pub fn with_match(self, matched: Option<bool>) -> Self {
        Self { matched, ..self }
    }

    /// Non-matches are dimmed and lose their hover effect
    pub fn style(&self) -> TileStyle {
        let dimmed = self.matched == Some(false);
        TileStyle {
            background: self.highlighted.then_some(self.bucket.color),
            hover_background: self.highlighted.then_some(self.bucket.hover_color),
            hoverable: !dimmed,
            dimmed,
        }
    }
}

// ============================================================================
// Grid
// ============================================================================

/// An element placed on the grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementTile {
    pub number: ElementNumber,
    pub symbol: String,
    pub name: String,
    pub atomic_mass: f64,
    pub overlay: TileOverlay,
}

/// One grid cell
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GridCell {
    Empty { position: usize },
    Element { position: usize, tile: ElementTile },
}

impl GridCell {
    pub fn position(&self) -> usize {
        match self {
            GridCell::Empty { position } | GridCell::Element { position, .. } => *position,
        }
    }

    pub fn tile(&self) -> Option<&ElementTile> {
        match self {
            GridCell::Empty { .. } => None,
            GridCell::Element { tile, .. } => Some(tile),
        }
    }
}

/// The full table with overlays applied
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodicGrid {
    pub layout: GridLayout,
    /// Every cell in position order
    pub cells: Vec<GridCell>,
    /// Elements whose coordinates fall off the grid or collide with another
    pub unplaced: Vec<ElementNumber>,
}

impl PeriodicGrid {
    /// Place every element and apply the overlays
    ///
    /// Fails with `InvalidConfigValue` when the layout does not validate.
    pub fn build(
        dataset: &Dataset,
        layout: GridLayout,
        selection: ClassificationSelection,
        search: &SearchResults<ElementNumber>,
    ) -> Result<Self> {
        layout.validate()?;

        let mut cells: Vec<GridCell> = (1..=layout.len())
            .map(|position| GridCell::Empty { position })
            .collect();
        let mut unplaced = Vec::new();

        for element in dataset.elements() {
            let Some(position) = layout.position(element.xpos, element.ypos) else {
                warn!(
                    number = element.number,
                    xpos = element.xpos,
                    ypos = element.ypos,
                    "element lies outside the grid"
                );
                unplaced.push(element.number);
                continue;
            };

            let cell = &mut cells[position - 1];
            if let GridCell::Element { tile, .. } = cell {
                warn!(
                    number = element.number,
                    occupant = tile.number,
                    position,
                    "grid position already taken"
                );
                unplaced.push(element.number);
                continue;
            }

            *cell = GridCell::Element {
                position,
                tile: tile_for(element, selection, search),
            };
        }

        Ok(Self {
            layout,
            cells,
            unplaced,
        })
    }

    /// Cell at a 1-based grid coordinate
    pub fn cell(&self, xpos: u32, ypos: u32) -> Option<&GridCell> {
        self.layout
            .position(xpos, ypos)
            .and_then(|position| self.cells.get(position - 1))
    }

    pub fn tile(&self, number: ElementNumber) -> Option<&ElementTile> {
        self.tiles().find(|tile| tile.number == number)
    }

    pub fn tiles(&self) -> impl Iterator<Item = &ElementTile> {
        self.cells.iter().filter_map(GridCell::tile)
    }

    /// Cells grouped by grid row
    pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(self.layout.columns.max(1) as usize)
    }
}

fn tile_for(
    element: &Element,
    selection: ClassificationSelection,
    search: &SearchResults<ElementNumber>,
) -> ElementTile {
    let overlay = TileOverlay::base(element.classification())
        .with_highlight(selection.is_highlighted(&element.category_code))
        .with_match(search.is_match(&element.number));

    ElementTile {
        number: element.number,
        symbol: element.symbol.clone(),
        name: element.name.clone(),
        atomic_mass: element.atomic_mass,
        overlay,
    }
}
