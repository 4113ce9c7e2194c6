//! Setup assembly — the one-shot merge of drone, duck and location into the
//! flat export document handed to the game client.
//!
//! [`assemble`] is pure and is only ever invoked on explicit user
//! confirmation; it produces a complete snapshot or is not called at all.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::duck::{DuckConfig, LifeState, MutationTier};
use crate::location::LocationState;
use crate::picker::{DronePicker, DEFAULT_READING};

/// The immutable snapshot produced once per configuration session.
///
/// Serializes to the flat key scheme the game client expects: every
/// attribute reading appears as `drone_<key>` next to the typed fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssembledSetup {
    pub drone_brand: String,
    #[serde(rename = "drone_modelId")]
    pub drone_model_id: String,
    pub drone_serial: String,
    /// Keys are already `drone_`-prefixed attribute keys.
    #[serde(flatten)]
    pub drone_readings: BTreeMap<String, i64>,
    pub drone_turbo_potencia: u32,
    pub drone_turbo_estoque: u32,
    pub drone_turbo_producao: u32,
    /// Canonical height in centimetres.
    pub pato_height: f64,
    /// Canonical weight in grams.
    pub pato_weight: f64,
    pub pato_hibernation: LifeState,
    pub pato_bpm: u8,
    pub pato_mutation_score: u8,
    pub pato_mutation_tier: MutationTier,
    pub pato_superpower_name: String,
    pub pato_superpower_description: String,
    pub origin_country: String,
    pub location_city: String,
    pub location_country: String,
    pub location_lat: f64,
    pub location_lon: f64,
    pub location_landmark: String,
}

impl AssembledSetup {
    /// The export document as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> String {
        // A struct of plain fields and a string map cannot fail to serialize.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Coerce a reading to a positive finite integer; anything else gets the
/// midpoint default.
fn coerce_reading(value: f64) -> i64 {
    if value.is_finite() && value > 0.0 {
        value.round() as i64
    } else {
        DEFAULT_READING as i64
    }
}

/// Merge the three state groups into one snapshot.
///
/// The serial and turbo stats come from the active catalogue entry, not
/// from the mutable mirror; readings are coerced through
/// [`coerce_reading`]; `origin_country` is trimmed; a missing landmark
/// becomes the empty string.
pub fn assemble(
    catalog: &Catalog,
    picker: &DronePicker,
    duck: &DuckConfig,
    location: &LocationState,
) -> AssembledSetup {
    let entry = picker.active_entry(catalog);

    let drone_readings = picker
        .readings
        .iter()
        .map(|(key, value)| (format!("drone_{key}"), coerce_reading(*value)))
        .collect();

    AssembledSetup {
        drone_brand: picker.brand.clone(),
        drone_model_id: picker.model_id.clone(),
        drone_serial: entry.serial_fixed.to_string(),
        drone_readings,
        drone_turbo_potencia: entry.turbo.potencia,
        drone_turbo_estoque: entry.turbo.estoque,
        drone_turbo_producao: entry.turbo.producao,
        pato_height: duck.height_cm,
        pato_weight: duck.weight_g,
        pato_hibernation: duck.life_state,
        pato_bpm: duck.bpm,
        pato_mutation_score: duck.mutation.score,
        pato_mutation_tier: duck.mutation.tier,
        pato_superpower_name: duck.superpower.name().to_string(),
        pato_superpower_description: duck.superpower.description().to_string(),
        origin_country: location.origin_country.trim().to_string(),
        location_city: location.city.clone(),
        location_country: location.country.clone(),
        location_lat: location.lat,
        location_lon: location.lon,
        location_landmark: location.landmark.clone().unwrap_or_default(),
    }
}
