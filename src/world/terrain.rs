use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Terrain {
    Land,
    Water,
}

impl Terrain {
    pub fn is_walkable(&self) -> bool {
        matches!(self, Terrain::Land)
    }

    pub fn is_water(&self) -> bool {
        matches!(self, Terrain::Water)
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' | '*' => Some(Terrain::Land),
            '~' => Some(Terrain::Water),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terrain_walkable() {
        assert!(Terrain::Land.is_walkable());
        assert!(!Terrain::Water.is_walkable());
        assert!(Terrain::Water.is_water());
    }

    #[test]
    fn test_terrain_symbols() {
        assert_eq!(Terrain::from_symbol('.'), Some(Terrain::Land));
        assert_eq!(Terrain::from_symbol('*'), Some(Terrain::Land));
        assert_eq!(Terrain::from_symbol('~'), Some(Terrain::Water));
        assert_eq!(Terrain::from_symbol('#'), None);
    }
}
