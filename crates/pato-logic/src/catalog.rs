//! Drone model catalogue — the static table of selectable profiles.
//!
//! Every entry is a constant row: fixed serial, attribute list, measurement
//! units for the duck, and turbo ratings. The UI only redisplays these when
//! the active entry changes; nothing here is edited at runtime. The catalogue
//! is an injectable value rather than a global so tests can swap in custom
//! rows.

use crate::units::{LengthUnit, MassUnit};

/// One measurable attribute of a drone model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSpec {
    /// Machine-readable key, used in readings maps and export keys.
    pub key: &'static str,
    /// Human friendly label.
    pub label: &'static str,
}

/// Units this model expresses duck measurements in by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasurementUnits {
    pub height: LengthUnit,
    pub weight: MassUnit,
}

/// Serial number format hint. Descriptive metadata only — never validated
/// against the fixed serial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerialFormat {
    pub prefix: &'static str,
    pub pattern: &'static str,
    pub example: &'static str,
}

/// Fixed turbo ratings for a model. Read-only, copied verbatim into the
/// assembled setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurboStats {
    pub potencia: u32,
    pub estoque: u32,
    pub producao: u32,
}

/// One selectable drone profile.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub brand: &'static str,
    pub model: &'static str,
    pub attributes: Vec<AttributeSpec>,
    pub units: MeasurementUnits,
    pub serial_format: SerialFormat,
    pub serial_fixed: &'static str,
    pub turbo: TurboStats,
}

/// The catalogue of available drone models. Never empty.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalogue from explicit rows. Panics on an empty list —
    /// every query below assumes at least one entry exists.
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        assert!(!entries.is_empty(), "catalog must have at least one entry");
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// First entry — the fallback for every unresolvable reference.
    pub fn first(&self) -> &CatalogEntry {
        &self.entries[0]
    }

    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Unique brand names in first-seen order.
    pub fn brands(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        for entry in &self.entries {
            if !out.contains(&entry.brand) {
                out.push(entry.brand);
            }
        }
        out
    }

    /// All entries of one brand, in catalogue order.
    pub fn by_brand(&self, brand: &str) -> Vec<&CatalogEntry> {
        self.entries.iter().filter(|e| e.brand == brand).collect()
    }
}

/// The six attributes shared by all shipped models.
fn standard_attributes() -> Vec<AttributeSpec> {
    vec![
        AttributeSpec { key: "velocidade", label: "Velocidade" },
        AttributeSpec { key: "danoTiro", label: "Dano de Tiro" },
        AttributeSpec { key: "taxaTiro", label: "Taxa de Tiro" },
        AttributeSpec { key: "cortaVento", label: "Corta Vento" },
        AttributeSpec { key: "resistencia", label: "Resistência" },
        AttributeSpec { key: "precisao", label: "Precisão" },
    ]
}

impl Default for Catalog {
    /// The four shipped drone models.
    fn default() -> Self {
        Self::new(vec![
            CatalogEntry {
                id: "patox-alpha",
                brand: "PatoX",
                model: "Alpha",
                attributes: standard_attributes(),
                units: MeasurementUnits {
                    height: LengthUnit::Centimeter,
                    weight: MassUnit::Gram,
                },
                serial_format: SerialFormat {
                    prefix: "PTX",
                    pattern: "####-AA",
                    example: "PTX-1234-AB",
                },
                serial_fixed: "PTX-ALPHA-001",
                turbo: TurboStats { potencia: 320, estoque: 12, producao: 4 },
            },
            CatalogEntry {
                id: "patox-sigma",
                brand: "PatoX",
                model: "Sigma",
                attributes: standard_attributes(),
                units: MeasurementUnits {
                    height: LengthUnit::Inch,
                    weight: MassUnit::Pound,
                },
                serial_format: SerialFormat {
                    prefix: "PTX",
                    pattern: "###-###",
                    example: "PTX-321-999",
                },
                serial_fixed: "PTX-SIGMA-001",
                turbo: TurboStats { potencia: 450, estoque: 9, producao: 6 },
            },
            CatalogEntry {
                id: "quacksa-gamma",
                brand: "Quacksa",
                model: "Gamma",
                attributes: standard_attributes(),
                units: MeasurementUnits {
                    height: LengthUnit::Foot,
                    weight: MassUnit::Pound,
                },
                serial_format: SerialFormat {
                    prefix: "QKS",
                    pattern: "##-####",
                    example: "QKS-12-3456",
                },
                serial_fixed: "QKS-GAMMA-001",
                turbo: TurboStats { potencia: 280, estoque: 16, producao: 3 },
            },
            CatalogEntry {
                id: "dsin-orion",
                brand: "DSIN",
                model: "Orion",
                attributes: standard_attributes(),
                units: MeasurementUnits {
                    height: LengthUnit::Centimeter,
                    weight: MassUnit::Gram,
                },
                serial_format: SerialFormat {
                    prefix: "DSIN",
                    pattern: "AA##-##",
                    example: "DSIN-AB12-34",
                },
                serial_fixed: "DSIN-ORION-001",
                turbo: TurboStats { potencia: 510, estoque: 7, producao: 8 },
            },
        ])
    }
}
