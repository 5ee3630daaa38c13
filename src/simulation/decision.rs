use super::SimulationState;
use crate::config::Config;
use crate::creature::action::CreatureAction;
use crate::creature::path::Path;
use crate::creature::Creature;
use crate::world::coord::Coord;

impl SimulationState {
    /// Picks what the creature wants most right now, records the choice time
    /// and acts on it straight away.
    ///
    /// Mating wins while the urge is up and hunger is not critical. Otherwise
    /// the larger of hunger and thirst wins, except that a creature already
    /// eating keeps eating until thirst turns critical.
    pub(crate) fn choose_next_action(&mut self, creature: &mut Creature, config: &Config) {
        let c = &config.creature;
        creature.last_action_choice = Some(self.time);

        let currently_eating = match creature.action {
            CreatureAction::Eating(food) => {
                self.surroundings().food_coord(food).is_some() && creature.needs.hunger > 0.0
            }
            _ => false,
        };

        let needs = creature.needs;
        let wants_to_mate =
            needs.repro_urge > c.mate_urge_threshold && needs.hunger < c.critical_percent;
        let wants_food = needs.hunger >= needs.thirst
            || (currently_eating && needs.thirst < c.critical_percent);

        if wants_to_mate {
            self.find_mate(creature);
        } else if wants_food {
            self.find_food(creature);
        } else {
            self.find_water(creature);
        }

        self.act(creature);
    }

    fn find_food(&mut self, creature: &mut Creature) {
        let penalty = creature.species.profile().food_penalty;
        let view = self.surroundings();
        let found = self
            .sensorium
            .sense_food(&view, creature, penalty)
            .and_then(|food| view.food_coord(food).map(|coord| (food, coord)));

        match found {
            Some((food, coord)) => {
                creature.action = CreatureAction::GoingToFood(food);
                self.create_path(creature, coord);
            }
            None => creature.action = CreatureAction::Exploring,
        }
    }

    fn find_water(&mut self, creature: &mut Creature) {
        let found = self.sensorium.sense_water(&self.surroundings(), creature.coord);

        match found {
            Some(tile) => {
                creature.action = CreatureAction::GoingToWater(tile);
                self.create_path(creature, tile);
            }
            None => creature.action = CreatureAction::Exploring,
        }
    }

    /// Males walk to the last candidate reported. Females only note the
    /// nearest one and leave the walking to him.
    fn find_mate(&mut self, creature: &mut Creature) {
        let view = self.surroundings();
        let mates = self.sensorium.sense_mates(&view, creature);

        if creature.is_male() {
            let target = mates
                .last()
                .and_then(|&id| view.creature_coord(id).map(|coord| (id, coord)));

            match target {
                Some((id, coord)) => {
                    creature.action = CreatureAction::SearchingForMate(Some(id));
                    self.create_path(creature, coord);
                }
                None => creature.action = CreatureAction::Exploring,
            }
        } else {
            let nearest = mates
                .iter()
                .filter_map(|&id| {
                    view.creature_coord(id)
                        .map(|coord| (Coord::sqr_distance(creature.coord, coord), id))
                })
                .min()
                .map(|(_, id)| id);

            creature.action = CreatureAction::SearchingForMate(nearest);
        }
    }

    /// Keeps the current path if it still leads to `target` from where the
    /// creature stands, otherwise asks the pathfinder for a new one.
    fn create_path(&mut self, creature: &mut Creature, target: Coord) {
        let reusable = creature
            .path
            .as_ref()
            .map_or(false, |path| path.is_reusable(target, creature.move_target));
        if reusable {
            return;
        }

        let tiles = self.pathfinder.compute_path(&self.world, creature.coord, target);
        log::trace!(
            "Creature {} pathing ({}, {}) -> ({}, {}): {} tiles",
            creature.id,
            creature.coord.x,
            creature.coord.y,
            target.x,
            target.y,
            tiles.len()
        );
        creature.path = Some(Path::new(creature.coord, tiles));
    }
}
