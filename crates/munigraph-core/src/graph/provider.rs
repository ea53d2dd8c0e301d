/// Read-only adjacency view that traversals run against
pub trait GraphProvider {
    fn contains(&self, id: &str) -> bool;
    fn neighbors(&self, id: &str) -> Vec<&str>;
}
