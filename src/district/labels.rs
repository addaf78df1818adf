use std::collections::HashMap;

use crate::district::DistrictId;

/// Human-readable place names for each district.
#[derive(Debug, Clone, Default)]
pub struct LocationLabels {
    names: HashMap<DistrictId, Vec<String>>,
}

impl LocationLabels {
    pub fn new() -> Self { Self::default() }

    #[inline] pub fn len(&self) -> usize { self.names.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.names.is_empty() }

    /// Add a place name to a district. Repeated names are kept once.
    pub fn insert(&mut self, id: DistrictId, name: &str) {
        let name = name.trim();
        if name.is_empty() { return }
        let names = self.names.entry(id).or_default();
        if !names.iter().any(|existing| existing == name) {
            names.push(name.to_string());
        }
    }

    /// Place names for a district, if any were loaded.
    pub fn names(&self, id: DistrictId) -> Option<&[String]> {
        self.names.get(&id).map(Vec::as_slice)
    }

    /// Display label: the joined place names, or the id itself when unmapped.
    pub fn label(&self, id: DistrictId) -> String {
        match self.names(id) {
            Some(names) => names.join(", "),
            None => id.to_string(),
        }
    }
}

impl<S: AsRef<str>> FromIterator<(DistrictId, S)> for LocationLabels {
    fn from_iter<I: IntoIterator<Item = (DistrictId, S)>>(iter: I) -> Self {
        let mut labels = Self::new();
        for (id, name) in iter {
            labels.insert(id, name.as_ref());
        }
        labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmapped_district_falls_back_to_id() {
        let labels = LocationLabels::new();
        assert_eq!(labels.label(DistrictId::new(14)), "14");
    }

    #[test]
    fn names_accumulate_in_order() {
        let labels: LocationLabels = [
            (DistrictId::new(1), "Raffles Place"),
            (DistrictId::new(1), "Cecil"),
            (DistrictId::new(1), "Cecil"),
            (DistrictId::new(2), "Anson"),
            (DistrictId::new(3), "  "),
        ].into_iter().collect();

        assert_eq!(labels.len(), 2);
        assert_eq!(labels.label(DistrictId::new(1)), "Raffles Place, Cecil");
        assert_eq!(labels.label(DistrictId::new(2)), "Anson");
        assert_eq!(labels.label(DistrictId::new(3)), "3");
    }
}
