use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genes {
    pub is_male: bool,
    pub values: Vec<f32>,
}

impl Genes {
    pub fn random(num_values: usize, rng: &mut impl Rng) -> Self {
        Self {
            is_male: rng.gen_bool(0.5),
            values: (0..num_values).map(|_| rng.gen()).collect(),
        }
    }

    pub fn with_sex(is_male: bool) -> Self {
        Self {
            is_male,
            values: Vec::new(),
        }
    }
}
