use crate::*;
pub use shuffled::*;

mod shuffled;

pub trait BoardGenerator {
    fn generate<R: rand::Rng + ?Sized>(&self, config: &GameConfig, rng: &mut R) -> Result<Board>;
}
