// crates/boundary-core/src/registry.rs

//! In-memory table of the boundary overlay that is active for each geocode.
//!
//! The registry only manipulates the mapping. Materializing and
//! unmaterializing overlays on the map is the manager's job, done before the
//! registry is touched.

use crate::geocode::Geocode;
use std::collections::HashMap;

/// Geocode → active overlay, at most one overlay per geocode.
///
/// Iteration follows first-insertion order; replacing a key keeps its slot.
#[derive(Debug)]
pub struct OverlayRegistry<O> {
    entries: HashMap<Geocode, O>,
    order: Vec<Geocode>,
}

impl<O> Default for OverlayRegistry<O> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<O> OverlayRegistry<O> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, geocode: &str) -> Option<&O> {
        self.entries.get(geocode)
    }

    pub fn contains(&self, geocode: &str) -> bool {
        self.entries.contains_key(geocode)
    }

    /// Store `overlay` under `geocode`, returning the overlay it supersedes.
    pub fn set(&mut self, geocode: Geocode, overlay: O) -> Option<O> {
        if !self.entries.contains_key(&geocode) {
            self.order.push(geocode.clone());
        }
        self.entries.insert(geocode, overlay)
    }

    pub fn clear_all(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn geocodes(&self) -> impl Iterator<Item = &Geocode> + '_ {
        self.order.iter()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Geocode, &O)> + '_ {
        self.order
            .iter()
            .filter_map(|g| self.entries.get(g).map(|o| (g, o)))
    }

    /// Drop a single entry. Only the manager's rollback path may do this;
    /// the public contract has no per-key removal.
    pub(crate) fn take(&mut self, geocode: &str) -> Option<O> {
        let removed = self.entries.remove(geocode)?;
        self.order.retain(|g| g.as_str() != geocode);
        Some(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_on_empty_is_absent() {
        let reg: OverlayRegistry<u32> = OverlayRegistry::new();
        assert!(reg.get("610604").is_none());
        assert!(reg.is_empty());
    }

    #[test]
    fn set_replaces_and_returns_previous() {
        let mut reg = OverlayRegistry::new();
        assert_eq!(reg.set(Geocode::from("610604"), 1), None);
        assert_eq!(reg.set(Geocode::from("610604"), 2), Some(1));
        assert_eq!(reg.get("610604"), Some(&2));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn replacement_keeps_first_insertion_position() {
        let mut reg = OverlayRegistry::new();
        reg.set(Geocode::from("a"), 1);
        reg.set(Geocode::from("b"), 2);
        reg.set(Geocode::from("a"), 3);
        let keys: Vec<_> = reg.geocodes().map(Geocode::as_str).collect();
        assert_eq!(keys, ["a", "b"]);
        let values: Vec<_> = reg.iter().map(|(_, v)| *v).collect();
        assert_eq!(values, [3, 2]);
    }

    #[test]
    fn clear_all_empties_everything() {
        let mut reg = OverlayRegistry::new();
        reg.set(Geocode::from("a"), 1);
        reg.set(Geocode::from("b"), 2);
        reg.clear_all();
        assert!(reg.is_empty());
        assert_eq!(reg.geocodes().count(), 0);
    }

    #[test]
    fn take_removes_key_and_order() {
        let mut reg = OverlayRegistry::new();
        reg.set(Geocode::from("a"), 1);
        reg.set(Geocode::from("b"), 2);
        assert_eq!(reg.take("a"), Some(1));
        assert_eq!(reg.take("a"), None);
        assert_eq!(reg.geocodes().map(Geocode::as_str).collect::<Vec<_>>(), ["b"]);
    }
}
