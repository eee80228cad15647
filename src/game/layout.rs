//! Grid layout.
//!
//! Cards are laid out row-major and centred on the origin. Index `i` of a
//! round's card list sits at row `i / columns`, column `i % columns`.

use serde::{Deserialize, Serialize};

use crate::core::GridConfig;

/// Card centre in world units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

/// Centre of every card slot, row-major.
#[must_use]
pub fn grid_positions(grid: &GridConfig) -> Vec<Position> {
    let spacing = grid.card_spacing;
    let center_x = (grid.columns.saturating_sub(1)) as f32 * spacing / 2.0;
    let center_y = (grid.rows.saturating_sub(1)) as f32 * spacing / 2.0;

    (0..grid.rows)
        .flat_map(|row| {
            (0..grid.columns).map(move |col| Position {
                x: col as f32 * spacing - center_x,
                y: row as f32 * spacing - center_y,
            })
        })
        .collect()
}

/// Half-height an orthographic camera needs to fit the grid at
/// `aspect_ratio` (width / height).
#[must_use]
pub fn ortho_half_height(grid: &GridConfig, aspect_ratio: f32) -> f32 {
    let by_rows = grid.rows as f32 * grid.card_spacing / 2.0;
    if aspect_ratio <= 0.0 {
        return by_rows;
    }
    let by_columns = grid.columns as f32 * grid.card_spacing / (2.0 * aspect_ratio);
    by_rows.max(by_columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Difficulty;

    #[test]
    fn test_positions_are_centred() {
        let grid = GridConfig::new(Difficulty::Easy, 2, 2).with_spacing(2.0);
        let positions = grid_positions(&grid);

        assert_eq!(
            positions,
            vec![
                Position { x: -1.0, y: -1.0 },
                Position { x: 1.0, y: -1.0 },
                Position { x: -1.0, y: 1.0 },
                Position { x: 1.0, y: 1.0 },
            ]
        );
    }

    #[test]
    fn test_position_count_matches_grid() {
        let grid = GridConfig::new(Difficulty::Hard, 6, 6);
        assert_eq!(grid_positions(&grid).len(), grid.card_count());
    }

    #[test]
    fn test_ortho_half_height() {
        let grid = GridConfig::new(Difficulty::Medium, 4, 4).with_spacing(1.0);
        // Wide screen: rows bound
        assert_eq!(ortho_half_height(&grid, 2.0), 2.0);
        // Tall screen: columns bound
        assert_eq!(ortho_half_height(&grid, 0.5), 4.0);
    }
}
