use super::*;
use alloc::vec::Vec;

/// Cycles through every tile type to cover the board, then shuffles the result, so colors are spread as evenly as
/// the board size allows and every arrangement is equally likely.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ShuffledBoardGenerator;

impl BoardGenerator for ShuffledBoardGenerator {
    fn generate<R: rand::Rng + ?Sized>(&self, config: &GameConfig, rng: &mut R) -> Result<Board> {
        use rand::prelude::*;

        config.validate()?;

        let total_tiles = config.total_tiles();
        if total_tiles < TileIndex::from(config.tile_types) {
            log::warn!(
                "Board has {} tiles, not every one of {} tile types will appear",
                total_tiles,
                config.tile_types
            );
        }

        let mut colors: Vec<TileColor> = (0..total_tiles)
            .map(|i| (i % TileIndex::from(config.tile_types)) as TileColor)
            .collect();
        colors.shuffle(rng);

        let board = Board::from_colors(config.size, &colors, &config.disabled_tiles)?;
        log::debug!(
            "Generated {}x{} board with {} tile types, {} tiles disabled",
            config.size.0,
            config.size.1,
            config.tile_types,
            config.disabled_tiles.len()
        );
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn default_board_has_three_of_each_color() {
        let mut rng = SmallRng::seed_from_u64(7);
        let board = ShuffledBoardGenerator
            .generate(&GameConfig::default(), &mut rng)
            .unwrap();

        let mut counts = [0u8; 10];
        for (_, tile) in board.iter_tiles() {
            counts[usize::from(tile.color())] += 1;
        }
        assert_eq!(counts, [3; 10]);
    }

    #[test]
    fn default_board_disables_default_tiles() {
        let mut rng = SmallRng::seed_from_u64(7);
        let board = ShuffledBoardGenerator
            .generate(&GameConfig::default(), &mut rng)
            .unwrap();

        let disabled: Vec<_> = board
            .iter_tiles()
            .filter(|(_, tile)| tile.is_disabled())
            .map(|(index, _)| index)
            .collect();
        assert_eq!(disabled, [0, 2, 3, 4, 25]);
    }

    #[test]
    fn same_seed_same_board() {
        let config = GameConfig::default();
        let a = ShuffledBoardGenerator
            .generate(&config, &mut SmallRng::seed_from_u64(42))
            .unwrap();
        let b = ShuffledBoardGenerator
            .generate(&config, &mut SmallRng::seed_from_u64(42))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut rng = SmallRng::seed_from_u64(0);
        let config = GameConfig::new((6, 0), 10);
        assert_eq!(
            ShuffledBoardGenerator.generate(&config, &mut rng),
            Err(GameError::InvalidDimensions)
        );
    }

    #[test]
    fn small_board_with_many_types() {
        let mut rng = SmallRng::seed_from_u64(1);
        let board = ShuffledBoardGenerator
            .generate(&GameConfig::new((1, 3), 10), &mut rng)
            .unwrap();
        let mut colors: Vec<_> = board.iter_tiles().map(|(_, tile)| tile.color()).collect();
        colors.sort();
        assert_eq!(colors, [0, 1, 2]);
    }
}
