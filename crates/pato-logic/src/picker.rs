//! Drone selection state — brand, model, serial mirror and attribute
//! readings.
//!
//! The original screen recomputed serial and default readings through a
//! reactive effect whenever the selection changed. Here that derivation is
//! an explicit transition: [`DronePicker::select_model`] is called
//! synchronously by whoever changes the selection, and it reconciles the
//! readings map in one step.
//!
//! ```
//! use pato_logic::catalog::Catalog;
//! use pato_logic::picker::DronePicker;
//!
//! let catalog = Catalog::default();
//! let mut picker = DronePicker::new(&catalog);
//! picker.select_brand(&catalog, "Quacksa");
//! assert_eq!(picker.serial, "QKS-GAMMA-001");
//! ```

use std::collections::BTreeMap;

use crate::catalog::{Catalog, CatalogEntry};

/// Midpoint default for a 1–10 attribute reading.
pub const DEFAULT_READING: f64 = 5.0;

/// The user's current drone selection.
///
/// Invariants (maintained by the methods below):
/// - `model_id` always resolves to a catalogue entry whose brand is `brand`;
/// - `readings` holds exactly the active entry's attribute keys;
/// - `serial` mirrors the active entry's fixed serial.
#[derive(Debug, Clone, PartialEq)]
pub struct DronePicker {
    pub brand: String,
    pub model_id: String,
    pub serial: String,
    pub readings: BTreeMap<String, f64>,
}

impl DronePicker {
    /// Seed from the catalogue's first entry with every reading at the
    /// midpoint.
    pub fn new(catalog: &Catalog) -> Self {
        let mut picker = Self {
            brand: String::new(),
            model_id: String::new(),
            serial: String::new(),
            readings: BTreeMap::new(),
        };
        picker.apply_entry(catalog.first());
        picker
    }

    /// Resolve the active catalogue entry, falling back to the first entry
    /// when the stored id no longer exists.
    pub fn active_entry<'a>(&self, catalog: &'a Catalog) -> &'a CatalogEntry {
        catalog.get(&self.model_id).unwrap_or_else(|| catalog.first())
    }

    /// Select a model by id. An unknown id falls back to the catalogue's
    /// first entry. Resets the serial mirror and reconciles readings: keys
    /// of the new entry keep their existing value, missing keys default to
    /// the midpoint, keys the new entry does not define are dropped.
    pub fn select_model(&mut self, catalog: &Catalog, id: &str) {
        let entry = catalog.get(id).unwrap_or_else(|| catalog.first());
        self.apply_entry(entry);
    }

    /// Select a brand: behaves as [`select_model`](Self::select_model) on
    /// the brand's first entry. An unknown brand falls back to the
    /// catalogue's first entry.
    pub fn select_brand(&mut self, catalog: &Catalog, brand: &str) {
        let entry = catalog
            .by_brand(brand)
            .first()
            .copied()
            .unwrap_or_else(|| catalog.first());
        self.apply_entry(entry);
    }

    /// Set one attribute reading, clamped to 1–10. A key outside the active
    /// entry's attribute set is a no-op.
    pub fn set_reading(&mut self, key: &str, value: f64) {
        if let Some(slot) = self.readings.get_mut(key) {
            *slot = value.clamp(1.0, 10.0);
        }
    }

    fn apply_entry(&mut self, entry: &CatalogEntry) {
        let mut readings = BTreeMap::new();
        for attr in &entry.attributes {
            let value = self
                .readings
                .get(attr.key)
                .copied()
                .unwrap_or(DEFAULT_READING);
            readings.insert(attr.key.to_string(), value);
        }
        self.brand = entry.brand.to_string();
        self.model_id = entry.id.to_string();
        self.serial = entry.serial_fixed.to_string();
        self.readings = readings;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{
        AttributeSpec, CatalogEntry, MeasurementUnits, SerialFormat, TurboStats,
    };
    use crate::units::{LengthUnit, MassUnit};

    fn entry(
        id: &'static str,
        brand: &'static str,
        serial: &'static str,
        keys: &[&'static str],
    ) -> CatalogEntry {
        CatalogEntry {
            id,
            brand,
            model: id,
            attributes: keys
                .iter()
                .map(|k| AttributeSpec { key: k, label: k })
                .collect(),
            units: MeasurementUnits {
                height: LengthUnit::Centimeter,
                weight: MassUnit::Gram,
            },
            serial_format: SerialFormat { prefix: "T", pattern: "#", example: "T-1" },
            serial_fixed: serial,
            turbo: TurboStats { potencia: 1, estoque: 1, producao: 1 },
        }
    }

    fn two_model_catalog() -> Catalog {
        Catalog::new(vec![
            entry("a-one", "Alpha", "A-001", &["velocidade", "precisao"]),
            entry("b-one", "Beta", "B-001", &["velocidade", "resistencia"]),
        ])
    }

    #[test]
    fn new_seeds_first_entry_with_midpoints() {
        let catalog = two_model_catalog();
        let picker = DronePicker::new(&catalog);
        assert_eq!(picker.brand, "Alpha");
        assert_eq!(picker.model_id, "a-one");
        assert_eq!(picker.serial, "A-001");
        assert_eq!(picker.readings.len(), 2);
        assert_eq!(picker.readings["velocidade"], DEFAULT_READING);
    }

    #[test]
    fn select_model_resets_serial_and_reconciles_readings() {
        let catalog = two_model_catalog();
        let mut picker = DronePicker::new(&catalog);
        picker.set_reading("velocidade", 9.0);
        picker.set_reading("precisao", 2.0);

        picker.select_model(&catalog, "b-one");
        assert_eq!(picker.serial, "B-001");
        assert_eq!(picker.brand, "Beta");
        // shared key survives, new key defaults, dropped key is gone
        assert_eq!(picker.readings["velocidade"], 9.0);
        assert_eq!(picker.readings["resistencia"], DEFAULT_READING);
        assert!(!picker.readings.contains_key("precisao"));
    }

    #[test]
    fn reading_keys_always_match_active_entry() {
        let catalog = two_model_catalog();
        let mut picker = DronePicker::new(&catalog);
        for id in ["b-one", "a-one", "b-one"] {
            picker.select_model(&catalog, id);
            let keys: Vec<&str> = picker.readings.keys().map(String::as_str).collect();
            let mut expected: Vec<&str> = picker
                .active_entry(&catalog)
                .attributes
                .iter()
                .map(|a| a.key)
                .collect();
            expected.sort_unstable();
            assert_eq!(keys, expected);
        }
    }

    #[test]
    fn unknown_model_falls_back_to_first_entry() {
        let catalog = two_model_catalog();
        let mut picker = DronePicker::new(&catalog);
        picker.select_model(&catalog, "b-one");
        picker.select_model(&catalog, "no-such-model");
        assert_eq!(picker.model_id, "a-one");
        assert_eq!(picker.serial, "A-001");
    }

    #[test]
    fn unknown_brand_falls_back_to_first_entry() {
        let catalog = two_model_catalog();
        let mut picker = DronePicker::new(&catalog);
        picker.select_brand(&catalog, "Beta");
        assert_eq!(picker.model_id, "b-one");
        picker.select_brand(&catalog, "NoSuchBrand");
        assert_eq!(picker.model_id, "a-one");
    }

    #[test]
    fn set_reading_clamps() {
        let catalog = two_model_catalog();
        let mut picker = DronePicker::new(&catalog);
        picker.set_reading("velocidade", 42.0);
        assert_eq!(picker.readings["velocidade"], 10.0);
        picker.set_reading("velocidade", -3.0);
        assert_eq!(picker.readings["velocidade"], 1.0);
    }

    #[test]
    fn set_reading_ignores_unknown_key() {
        let catalog = two_model_catalog();
        let mut picker = DronePicker::new(&catalog);
        picker.set_reading("resistencia", 7.0); // not on the active entry
        assert!(!picker.readings.contains_key("resistencia"));
    }

    #[test]
    fn shipped_catalog_brand_selection() {
        let catalog = Catalog::default();
        let mut picker = DronePicker::new(&catalog);
        picker.select_brand(&catalog, "DSIN");
        assert_eq!(picker.model_id, "dsin-orion");
        assert_eq!(picker.serial, "DSIN-ORION-001");
        assert_eq!(picker.active_entry(&catalog).brand, "DSIN");
    }
}
