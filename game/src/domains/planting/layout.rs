use crate::math::{Position, RectMath};
use crate::planting::SoilId;

/// Maps screen space to soil plots. Implemented by the presentation layer.
pub trait SpatialIndex {
    fn soil_at(&self, position: Position) -> Option<SoilId>;

    fn soil_position(&self, soil: SoilId) -> Position;
}

/// Plots laid out row by row in a rectangular grid.
#[derive(Debug, Clone)]
pub struct GridLayout {
    pub origin: Position,
    pub cell: [f32; 2],
    pub columns: usize,
    pub soils: usize,
}

impl SpatialIndex for GridLayout {
    fn soil_at(&self, position: Position) -> Option<SoilId> {
        if self.columns == 0 {
            return None;
        }
        (0..self.soils).map(SoilId).find(|soil| {
            let [x, y] = self.soil_position(*soil);
            let [width, height] = self.cell;
            [x - width / 2.0, y - height / 2.0, width, height].contains(position)
        })
    }

    /// Center of the plot cell.
    fn soil_position(&self, soil: SoilId) -> Position {
        let columns = self.columns.max(1);
        let column = (soil.0 % columns) as f32;
        let row = (soil.0 / columns) as f32;
        let [width, height] = self.cell;
        [
            self.origin[0] + (column + 0.5) * width,
            self.origin[1] + (row + 0.5) * height,
        ]
    }
}
