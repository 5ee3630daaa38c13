use crate::world::coord::Coord;

/// A precomputed walk with a cursor at the next tile to step onto.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    origin: Coord,
    tiles: Vec<Coord>,
    cursor: usize,
}

impl Path {
    pub fn new(origin: Coord, tiles: Vec<Coord>) -> Self {
        Self {
            origin,
            tiles,
            cursor: 0,
        }
    }

    pub fn tiles(&self) -> &[Coord] {
        &self.tiles
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn destination(&self) -> Option<Coord> {
        self.tiles.last().copied()
    }

    /// Tile stepped onto before the cursor, or the origin if none yet.
    pub fn previous(&self) -> Coord {
        match self.cursor {
            0 => self.origin,
            n => self.tiles[n - 1],
        }
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.tiles.len()
    }

    /// Still leads to `target` and continues from `last_move_target`.
    pub fn is_reusable(&self, target: Coord, last_move_target: Coord) -> bool {
        !self.is_finished()
            && self.destination() == Some(target)
            && self.previous() == last_move_target
    }

    /// Returns the next tile and advances the cursor.
    pub fn advance(&mut self) -> Option<Coord> {
        let next = self.tiles.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight() -> Path {
        Path::new(
            Coord::new(0, 0),
            vec![Coord::new(1, 0), Coord::new(2, 0), Coord::new(3, 0)],
        )
    }

    #[test]
    fn test_advance_walks_tiles() {
        let mut path = straight();
        assert_eq!(path.previous(), Coord::new(0, 0));
        assert_eq!(path.advance(), Some(Coord::new(1, 0)));
        assert_eq!(path.previous(), Coord::new(1, 0));
        assert_eq!(path.advance(), Some(Coord::new(2, 0)));
        assert_eq!(path.advance(), Some(Coord::new(3, 0)));
        assert!(path.is_finished());
        assert_eq!(path.advance(), None);
        assert_eq!(path.cursor(), 3);
    }

    #[test]
    fn test_reusable_while_on_track() {
        let mut path = straight();
        assert!(path.is_reusable(Coord::new(3, 0), Coord::new(0, 0)));

        path.advance();
        assert!(path.is_reusable(Coord::new(3, 0), Coord::new(1, 0)));
    }

    #[test]
    fn test_not_reusable_when_target_moves() {
        let mut path = straight();
        path.advance();
        assert!(!path.is_reusable(Coord::new(4, 0), Coord::new(1, 0)));
    }

    #[test]
    fn test_not_reusable_after_detour() {
        let mut path = straight();
        path.advance();
        assert!(!path.is_reusable(Coord::new(3, 0), Coord::new(1, 1)));
    }

    #[test]
    fn test_not_reusable_when_finished_or_empty() {
        let mut path = straight();
        while path.advance().is_some() {}
        assert!(!path.is_reusable(Coord::new(3, 0), Coord::new(3, 0)));

        let empty = Path::new(Coord::new(0, 0), Vec::new());
        assert!(empty.destination().is_none());
        assert!(!empty.is_reusable(Coord::new(0, 0), Coord::new(0, 0)));
    }
}
