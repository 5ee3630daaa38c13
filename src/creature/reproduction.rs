use super::genes::Genes;
use super::Creature;
use glam::Vec3;
use rand::Rng;

/// Number of random gene values carried besides sex.
pub const GENE_VALUES: usize = 1;

impl Creature {
    /// Newborn of the mother's species on her tile, with fresh random genes
    /// and zeroed needs.
    pub fn offspring(&self, offspring_id: u64, position: Vec3, rng: &mut impl Rng) -> Creature {
        let mut child = Creature::new(
            offspring_id,
            self.species,
            self.coord,
            Genes::random(GENE_VALUES, rng),
            position,
        );
        child.generation = self.generation + 1;
        child
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creature::action::CreatureAction;
    use crate::creature::needs::Needs;
    use crate::creature::species::Species;
    use crate::world::coord::Coord;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_offspring() {
        let mut mother = Creature::new(
            1,
            Species::Fox,
            Coord::new(4, 7),
            Genes::with_sex(false),
            Vec3::new(4.0, 0.0, 7.0),
        );
        mother.needs.hunger = 0.3;
        mother.generation = 2;
        mother.action = CreatureAction::Fornicating(9);

        let mut rng = StdRng::seed_from_u64(5);
        let child = mother.offspring(2, Vec3::new(4.0, 0.0, 7.0), &mut rng);

        assert_eq!(child.id, 2);
        assert_eq!(child.species, Species::Fox);
        assert_eq!(child.coord, mother.coord);
        assert_eq!(child.generation, 3);
        assert_eq!(child.needs, Needs::default());
        assert_eq!(child.action, CreatureAction::Exploring);
        assert_eq!(child.genes.values.len(), GENE_VALUES);
        assert!(child.last_action_choice.is_none());
    }
}
