use rand::{rngs::StdRng, Rng, SeedableRng};

/// The inputs every sorter is checked against.
pub struct TestInputs {
    pub empty: Vec<u32>,
    pub one: Vec<u32>,
    pub two: Vec<u32>,
    pub all_equal: Vec<u32>,
    pub sorted: Vec<u32>,
    pub reversed: Vec<u32>,
    pub random: Vec<u32>,
    pub few_unique: Vec<u32>,
}

impl TestInputs {
    pub fn new() -> Self {
        // Fixed seed so a failure can be replayed.
        let mut rng = StdRng::seed_from_u64(0x0057);

        TestInputs {
            empty: Vec::new(),
            one: vec![42],
            two: vec![9, 3],
            all_equal: vec![17; 12],
            sorted: (5..=40).collect(),
            reversed: (5..=40).rev().collect(),
            random: (0..60).map(|_| rng.gen_range(5..=100)).collect(),
            few_unique: (0..40).map(|_| rng.gen_range(1..=4) * 10).collect(),
        }
    }

    /// Every input together with a label for assertion messages.
    pub fn all(&self) -> [(&'static str, &[u32]); 8] {
        [
            ("empty", self.empty.as_slice()),
            ("one", self.one.as_slice()),
            ("two", self.two.as_slice()),
            ("all equal", self.all_equal.as_slice()),
            ("sorted", self.sorted.as_slice()),
            ("reversed", self.reversed.as_slice()),
            ("random", self.random.as_slice()),
            ("few unique", self.few_unique.as_slice()),
        ]
    }
}

impl Default for TestInputs {
    fn default() -> Self {
        Self::new()
    }
}
