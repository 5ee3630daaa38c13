use super::SimulationState;
use crate::config::Config;
use crate::creature::{CauseOfDeath, Creature};
use serde::{Deserialize, Serialize};

/// Deaths so far, by cause.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeathTally {
    pub hunger: u64,
    pub thirst: u64,
    pub eaten: u64,
}

impl DeathTally {
    pub fn record(&mut self, cause: CauseOfDeath) {
        match cause {
            CauseOfDeath::Hunger => self.hunger += 1,
            CauseOfDeath::Thirst => self.thirst += 1,
            CauseOfDeath::Eaten => self.eaten += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.hunger + self.thirst + self.eaten
    }
}

impl SimulationState {
    /// Drops a creature that is already out of the population map.
    pub(crate) fn bury(&mut self, creature: Creature, cause: CauseOfDeath) {
        if !self.creature_positions.remove(creature.id, creature.coord) {
            log::warn!("Creature {} died but was not indexed", creature.id);
        }
        self.deaths.record(cause);
        self.deaths_last_tick.push((creature.id, cause));

        log::debug!(
            "{:?} {} died of {:?} at ({}, {}), age {:.1}",
            creature.species,
            creature.id,
            cause,
            creature.coord.x,
            creature.coord.y,
            creature.age
        );
    }

    /// Returns `false` if the creature was already gone.
    pub(crate) fn kill(&mut self, id: u64, cause: CauseOfDeath) -> bool {
        match self.creatures.remove(&id) {
            Some(creature) => {
                self.bury(creature, cause);
                true
            }
            None => false,
        }
    }

    /// Resolves a mating between `creature` and its partner. The female of the
    /// pair gives birth, whichever of the two is being updated. A partner that
    /// is no longer set on `creature` leaves it alone, and only `creature`
    /// gives up.
    pub(crate) fn mate(&mut self, creature: &mut Creature, partner_id: u64, config: &Config) {
        let has_room = self.can_spawn_new_creature(config.creature.max_population);
        let Some(partner) = self.creatures.get_mut(&partner_id) else {
            return;
        };
        if partner.action.mate_target() != Some(creature.id) {
            log::debug!(
                "Creature {} lost partner {} to {:?}",
                creature.id,
                partner_id,
                partner.action
            );
            creature.finish_mating();
            return;
        }

        let mother = match (creature.is_male(), partner.is_male()) {
            (false, _) => Some(&*creature),
            (true, false) => Some(&*partner),
            (true, true) => None,
        };

        let child = match mother {
            Some(mother) if has_room => {
                let id = self.next_creature_id;
                self.next_creature_id += 1;
                let position = self.world.tile_center(mother.coord);
                Some(mother.offspring(id, position, &mut self.rng))
            }
            Some(mother) => {
                log::debug!(
                    "Population cap {} reached, creature {} has no offspring",
                    config.creature.max_population,
                    mother.id
                );
                None
            }
            None => None,
        };

        partner.finish_mating();
        creature.finish_mating();

        if let Some(child) = child {
            self.give_birth(child);
        }
    }

    fn give_birth(&mut self, child: Creature) {
        log::debug!(
            "{:?} {} born at ({}, {}), generation {}",
            child.species,
            child.id,
            child.coord.x,
            child.coord.y,
            child.generation
        );
        self.total_births += 1;
        self.add_creature(child);
    }
}
