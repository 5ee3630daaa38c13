use super::SimulationState;
use crate::creature::action::CreatureAction;
use crate::creature::movement::MoveState;
use crate::creature::Creature;
use crate::world::coord::Coord;

impl SimulationState {
    /// Carries out the current action for one decision step: step towards a
    /// target, start interacting with it once adjacent, or wander.
    pub(crate) fn act(&mut self, creature: &mut Creature) {
        match creature.action {
            CreatureAction::Exploring => self.explore(creature),
            CreatureAction::GoingToFood(food) => {
                let target = self.surroundings().food_coord(food);
                match target {
                    Some(tile) if Coord::are_neighbours(creature.coord, tile) => {
                        creature.look_at(tile);
                        creature.action = CreatureAction::Eating(food);
                    }
                    Some(_) if self.step_along_path(creature) => {}
                    _ => self.give_up_and_explore(creature),
                }
            }
            CreatureAction::GoingToWater(tile) => {
                if Coord::are_neighbours(creature.coord, tile) {
                    creature.look_at(tile);
                    creature.action = CreatureAction::Drinking(tile);
                } else if !self.step_along_path(creature) {
                    self.give_up_and_explore(creature);
                }
            }
            CreatureAction::SearchingForMate(Some(mate)) => {
                let target = self.surroundings().creature_coord(mate);
                match target {
                    Some(_) if creature.is_male() && !self.is_willing_mate(mate, creature.id) => {
                        log::trace!("Creature {} is no longer available to {}", mate, creature.id);
                        self.give_up_and_explore(creature);
                    }
                    Some(tile) if Coord::are_neighbours(creature.coord, tile) => {
                        creature.look_at(tile);
                        creature.action = CreatureAction::Fornicating(mate);
                    }
                    Some(_) if creature.is_male() && self.step_along_path(creature) => {}
                    Some(_) => self.explore(creature),
                    None if creature.is_male() => self.give_up_and_explore(creature),
                    None => {
                        creature.action = CreatureAction::SearchingForMate(None);
                        self.explore(creature);
                    }
                }
            }
            CreatureAction::SearchingForMate(None) => self.explore(creature),
            CreatureAction::Eating(_) | CreatureAction::Drinking(_) | CreatureAction::Fornicating(_) => {}
        }
    }

    /// True while `mate` is still looking for a partner, or has settled on `suitor`.
    fn is_willing_mate(&self, mate: u64, suitor: u64) -> bool {
        self.creatures.get(&mate).map_or(false, |other| match other.action {
            CreatureAction::SearchingForMate(None) => true,
            action => action.mate_target() == Some(suitor),
        })
    }

    fn give_up_and_explore(&mut self, creature: &mut Creature) {
        creature.action = CreatureAction::Exploring;
        self.explore(creature);
    }

    fn explore(&mut self, creature: &mut Creature) {
        let next = self
            .world
            .next_tile_weighted(creature.coord, creature.move_from, &mut self.rng);
        if next != creature.coord {
            self.start_move(creature, next);
        }
    }

    /// Starts a hop to the next path tile. Returns `false` when the path is
    /// missing or used up.
    fn step_along_path(&mut self, creature: &mut Creature) -> bool {
        let Some(next) = creature.path.as_mut().and_then(|path| path.advance()) else {
            return false;
        };
        self.start_move(creature, next);
        true
    }

    pub(crate) fn start_move(&mut self, creature: &mut Creature, target: Coord) {
        creature.move_from = creature.coord;
        creature.move_target = target;
        creature.movement = Some(MoveState::new(
            creature.position,
            self.world.tile_center(target),
            Coord::is_diagonal_step(creature.coord, target),
        ));
        creature.look_at(target);
    }
}
