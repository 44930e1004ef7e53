use sysdeps::prelude::*;

/// Mock PomFinder answering from a fixed list of coordinates
#[derive(Default, Clone)]
pub struct MockPomFinder {
    coordinates: Vec<MavenCoordinate>,
}

impl MockPomFinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_coordinate(mut self, coordinate: MavenCoordinate) -> Self {
        self.coordinates.push(coordinate);
        self
    }

    pub fn push(&mut self, coordinate: MavenCoordinate) {
        self.coordinates.push(coordinate);
    }
}

impl PomFinder for MockPomFinder {
    fn find(&self, group_id: &str, artifact_id: &str) -> Option<MavenCoordinate> {
        self.coordinates
            .iter()
            .find(|c| c.group_id == group_id && c.artifact_id == artifact_id)
            .cloned()
    }

    fn find_all_for_group(&self, group_id: &str) -> Vec<MavenCoordinate> {
        self.coordinates
            .iter()
            .filter(|c| c.group_id == group_id)
            .cloned()
            .collect()
    }
}
