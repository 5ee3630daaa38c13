use super::SimulationState;
use crate::config::Config;
use crate::creature::Creature;

impl SimulationState {
    /// Advances the clock by `dt` and updates every creature alive at the
    /// start of the sweep, in id order.
    pub fn tick(&mut self, config: &Config, dt: f64) {
        self.deaths_last_tick.clear();
        self.time += dt;

        // Newborns join the map during the sweep but wait for the next tick.
        let creature_ids: Vec<u64> = self.creatures.keys().copied().collect();
        for id in creature_ids {
            self.tick_creature(id, config, dt);
        }

        self.tick += 1;
    }

    /// Runs one creature's update. A creature eaten earlier in the sweep is
    /// skipped.
    pub fn tick_creature(&mut self, id: u64, config: &Config, dt: f64) {
        let Some(mut creature) = self.creatures.remove(&id) else {
            return;
        };

        creature.needs.advance(dt, &config.creature);
        creature.age += dt;

        if creature.is_moving() {
            self.animate_move(&mut creature, config, dt);
        } else {
            self.handle_interactions(&mut creature, config, dt);
            if creature.action_choice_due(self.time, config.creature.time_between_action_choices) {
                self.choose_next_action(&mut creature, config);
            }
        }

        match creature.needs.fatal_cause() {
            Some(cause) => self.bury(creature, cause),
            None => {
                self.creatures.insert(id, creature);
            }
        }
    }

    fn animate_move(&mut self, creature: &mut Creature, config: &Config, dt: f64) {
        let Some(hop) = creature.movement.as_mut() else {
            return;
        };

        let arrived = hop.advance(dt, config.creature.move_speed);
        creature.position = hop.position(config.creature.move_arc_height);

        if arrived {
            self.creature_positions
                .register_move(creature.id, creature.coord, creature.move_target);
            creature.coord = creature.move_target;
            creature.movement = None;
            self.choose_next_action(creature, config);
        }
    }
}
