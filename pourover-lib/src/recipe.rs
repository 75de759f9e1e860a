/// The pour-over recipe the app follows. Weights are in grams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recipe {
    pub coffee: u32,
    pub bloom_water: u32,
    pub bloom_seconds: u32,
    pub main_pour: u32,
    pub total_water: u32,
}

impl Default for Recipe {
    fn default() -> Self {
        Self {
            coffee: 15,
            bloom_water: 30,
            bloom_seconds: 30,
            main_pour: 120,
            total_water: 250,
        }
    }
}

impl Recipe {
    pub fn steps(&self) -> Vec<String> {
        vec![
            format!("Grind {}g of coffee beans.", self.coffee),
            format!(
                "Add {}g of water to the grounds, making sure to evenly saturate all the grounds.",
                self.bloom_water
            ),
            format!("Allow the coffee to bloom for {} seconds.", self.bloom_seconds),
            format!(
                "Slowly pour an additional {}g of water over the coffee, pouring in a circular motion.",
                self.main_pour
            ),
            format!("Finish with a total of {}g of water.", self.total_water),
        ]
    }
}
