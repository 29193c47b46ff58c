use super::collection::Collection;

/// Name-indexed set of collections, kept sorted case-insensitively so
/// lookups can binary-search instead of scanning.
///
/// Names that differ only by case are distinct collections. They share a
/// sort key and sit adjacent in a tie run, ordered by first arrival.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    collections: Vec<Collection>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Position of `name`: `Ok` with the exact-match index, or `Err` with
    /// the insertion point that keeps the sequence sorted (the end of the
    /// case-insensitive tie run).
    fn position_of(&self, name: &str) -> Result<usize, usize> {
        let key = name.to_lowercase();
        let start = self
            .collections
            .partition_point(|c| c.name().to_lowercase() < key);

        let mut idx = start;
        while idx < self.collections.len() {
            let candidate = self.collections[idx].name();
            if candidate.to_lowercase() != key {
                break;
            }
            if candidate == name {
                return Ok(idx);
            }
            idx += 1;
        }
        Err(idx)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Collection> {
        self.position_of(name)
            .ok()
            .map(|idx| &self.collections[idx])
    }

    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Collection> {
        match self.position_of(name) {
            Ok(idx) => Some(&mut self.collections[idx]),
            Err(_) => None,
        }
    }

    /// Fetch the collection called `name`, creating it at its sorted
    /// position when absent.
    pub fn insert(&mut self, name: &str) -> &mut Collection {
        let idx = match self.position_of(name) {
            Ok(idx) => idx,
            Err(idx) => {
                self.collections.insert(idx, Collection::new(name));
                idx
            }
        };
        &mut self.collections[idx]
    }

    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.collections.iter().map(Collection::name)
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_keeps_names_sorted_case_insensitively() {
        let mut registry = Registry::new();
        for name in ["zebra", "Apple", "muna", "Basket"] {
            registry.insert(name);
        }

        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, vec!["Apple", "Basket", "muna", "zebra"]);
        assert_eq!(registry.len(), 4);
        assert!(!registry.is_empty());
    }

    #[test]
    fn insert_returns_the_existing_collection_on_repeat() {
        let mut registry = Registry::new();
        registry
            .insert("Muna")
            .add_record(crate::journal::ArtworkRecord::shared("a", "b", 10.0, "").expect("valid"));
        registry
            .insert("Muna")
            .add_record(crate::journal::ArtworkRecord::shared("c", "d", 5.0, "").expect("valid"));

        assert_eq!(registry.len(), 1);
        let collection = registry.find_by_name("Muna").expect("collection exists");
        assert_eq!(collection.grand_total(), 15.0);
        assert_eq!(collection.records().len(), 2);
    }

    #[test]
    fn names_differing_only_by_case_stay_distinct_in_arrival_order() {
        let mut registry = Registry::new();
        registry.insert("Muna");
        registry.insert("muna");
        registry.insert("MUNA");

        assert_eq!(registry.len(), 3);
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, vec!["Muna", "muna", "MUNA"]);

        assert!(registry.find_by_name("Muna").is_some());
        assert!(registry.find_by_name("muna").is_some());
        assert!(registry.find_by_name("MUNA").is_some());
        assert!(registry.find_by_name("MuNa").is_none());
    }

    #[test]
    fn binary_search_agrees_with_a_linear_scan() {
        let mut registry = Registry::new();
        let names = [
            "Muna", "muna", "Apple", "basket", "Zebra", "apple", "Hollis", "keel",
        ];
        for name in names {
            registry.insert(name);
        }

        for probe in [
            "Muna", "muna", "MUNA", "Apple", "apple", "aPPle", "Zebra", "zeb", "", "keel",
        ] {
            let linear = registry.collections().iter().find(|c| c.name() == probe);
            let searched = registry.find_by_name(probe);
            assert_eq!(
                searched.map(Collection::name),
                linear.map(Collection::name),
                "lookup disagreement for {probe:?}"
            );
        }
    }

    #[test]
    fn missing_names_are_absent_from_both_lookup_flavors() {
        let mut registry = Registry::new();
        registry.insert("Muna");

        assert!(registry.find_by_name("Hollis").is_none());
        assert!(registry.find_by_name_mut("Hollis").is_none());
        assert!(registry.find_by_name_mut("Muna").is_some());
    }
}
