use crate::*;
pub use random::*;

mod random;

/// Decides where the mines of a new game go.
pub trait MineLayoutGenerator {
    fn generate(self, config: GameConfig) -> Result<MineLayout>;
}

/// Fixed layouts generate themselves, as long as they match the requested size and mine count.
impl MineLayoutGenerator for MineLayout {
    fn generate(self, config: GameConfig) -> Result<MineLayout> {
        if self.size() != config.size {
            return Err(GameError::InvalidSize);
        }
        if self.mine_count() != config.mines {
            return Err(GameError::MineCountMismatch);
        }
        Ok(self)
    }
}
