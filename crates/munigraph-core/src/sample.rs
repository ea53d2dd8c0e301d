//! Built-in dataset used when no edge-list file is available

use crate::graph::Edge;

/// Edge-list file used when none is chosen explicitly
pub const DEFAULT_CSV: &str = "edges.csv";

/// Municipalities of the Guatemala department and road distances in km
pub const SAMPLE_EDGES: &[(&str, &str, f64)] = &[
    ("Guatemala City", "Mixco", 11.0),
    ("Guatemala City", "Villa Nueva", 13.0),
    ("Guatemala City", "Chinautla", 10.0),
    ("Guatemala City", "Santa Catarina Pinula", 11.0),
    ("Mixco", "San Lucas Sacatepequez", 13.0),
    ("Mixco", "Villa Nueva", 18.0),
    ("Villa Nueva", "Amatitlan", 16.0),
    ("Villa Nueva", "San Miguel Petapa", 8.0),
    ("San Miguel Petapa", "Amatitlan", 10.0),
    ("Chinautla", "San Jose del Golfo", 19.0),
];

pub fn sample_edges() -> Vec<Edge> {
    SAMPLE_EDGES.iter().copied().map(Edge::from).collect()
}
