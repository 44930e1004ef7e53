use super::{ArtifactKey, MavenCoordinate, SkipReason};
use std::collections::{BTreeMap, BTreeSet, HashSet, VecDeque};

/// Mutable bookkeeping for one breadth-first resolution pass.
///
/// Created per invocation and dropped afterwards. An identity is handed out
/// by [`ResolutionState::next`] at most once, however often it is enqueued.
#[derive(Debug, Default)]
pub struct ResolutionState {
    processed: HashSet<ArtifactKey>,
    queue: VecDeque<MavenCoordinate>,
    resolved: BTreeMap<ArtifactKey, MavenCoordinate>,
    not_found: BTreeSet<ArtifactKey>,
    skipped: BTreeMap<ArtifactKey, SkipReason>,
}

impl ResolutionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a coordinate unless its identity was already processed.
    pub fn enqueue(&mut self, coordinate: MavenCoordinate) -> bool {
        if self.processed.contains(&coordinate.key()) {
            return false;
        }
        self.queue.push_back(coordinate);
        true
    }

    /// Dequeues the next unprocessed coordinate and marks it processed.
    pub fn next(&mut self) -> Option<MavenCoordinate> {
        while let Some(coordinate) = self.queue.pop_front() {
            if self.processed.insert(coordinate.key()) {
                return Some(coordinate);
            }
        }
        None
    }

    pub fn is_processed(&self, key: &ArtifactKey) -> bool {
        self.processed.contains(key)
    }

    pub fn processed_count(&self) -> usize {
        self.processed.len()
    }

    /// Records an accepted coordinate. A previous skip for the identity is cleared.
    pub fn accept(&mut self, coordinate: MavenCoordinate) {
        let key = coordinate.key();
        self.skipped.remove(&key);
        self.not_found.remove(&key);
        self.resolved.insert(key, coordinate);
    }

    pub fn resolved(&self, key: &ArtifactKey) -> Option<&MavenCoordinate> {
        self.resolved.get(key)
    }

    pub fn resolved_mut(&mut self, key: &ArtifactKey) -> Option<&mut MavenCoordinate> {
        self.resolved.get_mut(key)
    }

    pub fn is_resolved(&self, key: &ArtifactKey) -> bool {
        self.resolved.contains_key(key)
    }

    /// Records a skip. Resolved identities and earlier reasons are kept.
    pub fn skip(&mut self, key: ArtifactKey, reason: SkipReason) {
        if self.resolved.contains_key(&key) {
            return;
        }
        if reason == SkipReason::NotFound {
            self.not_found.insert(key.clone());
        }
        self.skipped.entry(key).or_insert(reason);
    }

    pub fn skipped(&self) -> &BTreeMap<ArtifactKey, SkipReason> {
        &self.skipped
    }

    pub fn not_found(&self) -> &BTreeSet<ArtifactKey> {
        &self.not_found
    }

    pub fn into_parts(
        self,
    ) -> (
        BTreeMap<ArtifactKey, MavenCoordinate>,
        BTreeMap<ArtifactKey, SkipReason>,
        BTreeSet<ArtifactKey>,
    ) {
        (self.resolved, self.skipped, self.not_found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_dequeued_once() {
        let mut state = ResolutionState::new();
        state.enqueue(MavenCoordinate::new("g", "d", "1"));
        state.enqueue(MavenCoordinate::new("g", "d", "2"));

        let first = state.next().unwrap();
        assert_eq!(first.version, "1");
        assert!(state.next().is_none());
        assert!(!state.enqueue(MavenCoordinate::new("g", "d", "3")));
        assert_eq!(state.processed_count(), 1);
    }

    #[test]
    fn test_skip_does_not_shadow_resolved() {
        let mut state = ResolutionState::new();
        let coord = MavenCoordinate::new("g", "a", "1");
        state.accept(coord.clone());
        state.skip(coord.key(), SkipReason::Test);
        assert!(state.skipped().is_empty());
    }

    #[test]
    fn test_accept_clears_previous_skip() {
        let mut state = ResolutionState::new();
        let coord = MavenCoordinate::new("g", "a", "1");
        state.skip(coord.key(), SkipReason::NotFound);
        assert!(state.not_found().contains(&coord.key()));

        state.accept(coord.clone());
        assert!(state.skipped().is_empty());
        assert!(state.not_found().is_empty());
        assert!(state.is_resolved(&coord.key()));
    }

    #[test]
    fn test_first_skip_reason_is_kept() {
        let mut state = ResolutionState::new();
        let key = ArtifactKey::new("g", "a");
        state.skip(key.clone(), SkipReason::Test);
        state.skip(key.clone(), SkipReason::Placeholder);
        assert_eq!(state.skipped().get(&key), Some(&SkipReason::Test));
    }
}
