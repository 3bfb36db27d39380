use std::sync::{Arc, Mutex};

use orst_core::{Effect, EffectSink, RunId};

/// Keeps every effect of a race in emission order. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<(RunId, Effect)>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<(RunId, Effect)> {
        self.events.lock().expect("recording lock poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().expect("recording lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The effects of a single run.
    pub fn of(&self, run: RunId) -> Vec<Effect> {
        self.events()
            .into_iter()
            .filter(|(id, _)| *id == run)
            .map(|(_, effect)| effect)
            .collect()
    }
}

impl EffectSink for RecordingSink {
    fn emit(&self, run: RunId, effect: Effect) {
        self.events
            .lock()
            .expect("recording lock poisoned")
            .push((run, effect));
    }
}
