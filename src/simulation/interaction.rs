use super::SimulationState;
use crate::config::Config;
use crate::creature::action::{CreatureAction, FoodTarget};
use crate::creature::species::FeedingStyle;
use crate::creature::{CauseOfDeath, Creature};

impl SimulationState {
    /// Applies the effect of the current interaction for this tick.
    pub(crate) fn handle_interactions(&mut self, creature: &mut Creature, config: &Config, dt: f64) {
        match creature.action {
            CreatureAction::Eating(food) => {
                if self.surroundings().food_coord(food).is_none() {
                    self.choose_next_action(creature, config);
                    return;
                }
                if creature.needs.hunger > 0.0 {
                    self.feed(creature, food, config, dt);
                }
            }
            CreatureAction::Drinking(_) => {
                if creature.needs.thirst > 0.0 {
                    creature.needs.drink(dt / config.creature.drink_duration);
                }
            }
            CreatureAction::Fornicating(mate) => {
                if self.creatures.contains_key(&mate) {
                    self.mate(creature, mate, config);
                } else {
                    self.choose_next_action(creature, config);
                }
            }
            _ => {}
        }
    }

    fn feed(&mut self, creature: &mut Creature, food: FoodTarget, config: &Config, dt: f64) {
        let feeding = creature.species.profile().feeding;
        match (feeding, food) {
            (FeedingStyle::Grazer, FoodTarget::Plant(plant)) => {
                let bite = creature.needs.hunger.min(dt / config.creature.eat_duration);
                let eaten = self.world.plants.consume(plant, bite);
                creature.needs.eat(eaten);
            }
            (FeedingStyle::Predator, FoodTarget::Prey(prey)) => {
                if self.kill(prey, CauseOfDeath::Eaten) {
                    log::debug!("Creature {} ate creature {}", creature.id, prey);
                }
                creature.needs.eat(config.creature.predator_hunger_relief);
            }
            (feeding, food) => {
                log::warn!(
                    "Creature {} ({:?}) cannot eat {:?}",
                    creature.id,
                    feeding,
                    food
                );
                creature.action = CreatureAction::Exploring;
            }
        }
    }
}
