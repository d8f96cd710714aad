use ndarray::Array2;

use super::*;

/// Purely random placement: draws random cells and keeps each one that has no mine yet, until
/// the quota is met. Every subset of cells of the requested size is equally likely.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineLayout {
    seed: u64,
}

impl RandomMineLayout {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineLayoutGenerator for RandomMineLayout {
    fn generate(self, config: GameConfig) -> Result<MineLayout> {
        use rand::prelude::*;

        config.validate()?;

        let (rows, cols) = config.size;
        let mut mine_mask: Array2<bool> = Array2::default(config.size.to_nd_index());
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut planted: CellCount = 0;
        let mut draws: u32 = 0;

        while planted < config.mines {
            let coords: Coord2 = (rng.random_range(0..rows), rng.random_range(0..cols));
            draws += 1;

            let cell = &mut mine_mask[coords.to_nd_index()];
            if !*cell {
                *cell = true;
                planted += 1;
            }
        }

        log::debug!(
            "Planted {} mines on a {}x{} board in {} draws (seed {})",
            planted,
            rows,
            cols,
            draws,
            self.seed
        );
        Ok(MineLayout::from_mine_mask(mine_mask))
    }
}
