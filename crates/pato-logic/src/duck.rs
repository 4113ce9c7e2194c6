//! Primordial duck configuration — measurements, life state, superpower,
//! mutation.
//!
//! Measurements are held twice: what the user sees (`value` plus unit) and
//! the canonical representation (centimetres, grams) everything downstream
//! reads. The canonical values are always derivable from the inputs via the
//! conversion module.
//!
//! The metric direction of [`DuckConfig::convert_system`] recomputes the
//! canonical values from the displayed (already rounded) inputs, so repeated
//! metric⇄imperial toggling accumulates a small rounding drift. That matches
//! the original application and is the accepted behavior, not a defect.

use serde::{Deserialize, Serialize};

use crate::catalog::MeasurementUnits;
use crate::units::{
    self, LengthUnit, MassUnit, UnitSystem, CM_PER_FOOT, G_PER_POUND,
};

/// Three-valued life state of the duck. Fully connected — any state can be
/// entered from any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifeState {
    #[serde(rename = "despertado")]
    Awake,
    #[serde(rename = "transe")]
    Trance,
    #[serde(rename = "hibernacao")]
    Hibernating,
}

impl LifeState {
    /// Export tag, same as the serde rename.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Awake => "despertado",
            Self::Trance => "transe",
            Self::Hibernating => "hibernacao",
        }
    }

    /// Heart rate is monitored while the duck is not awake.
    pub fn monitors_bpm(self) -> bool {
        matches!(self, Self::Trance | Self::Hibernating)
    }

    /// The superpower choice only applies to an awake duck.
    pub fn reveals_superpower(self) -> bool {
        matches!(self, Self::Awake)
    }
}

/// The fixed set of superpowers revealed on awakening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Superpower {
    ElectricStorm,
    HyperBeam,
    MagicForest,
}

impl Superpower {
    pub fn name(self) -> &'static str {
        match self {
            Self::ElectricStorm => "Tempestade Elétrica",
            Self::HyperBeam => "Hyper Raio",
            Self::MagicForest => "Floresta Mágica",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::ElectricStorm => "Libera descargas elétricas poderosas.",
            Self::HyperBeam => "Dispara feixes de energia concentrada.",
            Self::MagicForest => "Invoca raízes e ventos espirituais.",
        }
    }

    pub fn all() -> &'static [Superpower] {
        &[Self::ElectricStorm, Self::HyperBeam, Self::MagicForest]
    }
}

/// Mutation tiers. Independent of the score — no relationship between the
/// two is inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MutationTier {
    #[serde(rename = "Comum")]
    Common,
    #[serde(rename = "Notável")]
    Notable,
    #[serde(rename = "Rara")]
    Rare,
    #[serde(rename = "Épica")]
    Epic,
    #[serde(rename = "Anômala")]
    Anomalous,
}

impl MutationTier {
    /// Display name, same as the serde rename.
    pub fn label(self) -> &'static str {
        match self {
            Self::Common => "Comum",
            Self::Notable => "Notável",
            Self::Rare => "Rara",
            Self::Epic => "Épica",
            Self::Anomalous => "Anômala",
        }
    }

    pub fn all() -> &'static [MutationTier] {
        &[
            Self::Common,
            Self::Notable,
            Self::Rare,
            Self::Epic,
            Self::Anomalous,
        ]
    }
}

/// Mutation record: numeric score plus discrete tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mutation {
    pub score: u8,
    pub tier: MutationTier,
}

/// A measurement as displayed: typed value plus its unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LengthInput {
    pub value: f64,
    pub unit: LengthUnit,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassInput {
    pub value: f64,
    pub unit: MassUnit,
}

/// Heart rate bounds while in trance or hibernation.
pub const BPM_MIN: i32 = 30;
pub const BPM_MAX: i32 = 140;

/// The configured primordial duck.
#[derive(Debug, Clone, PartialEq)]
pub struct DuckConfig {
    pub height_input: LengthInput,
    pub weight_input: MassInput,
    /// Canonical height in centimetres.
    pub height_cm: f64,
    /// Canonical weight in grams.
    pub weight_g: f64,
    pub system: UnitSystem,
    pub life_state: LifeState,
    /// Retained across life-state changes, meaningful while not awake.
    pub bpm: u8,
    /// Retained across life-state changes, meaningful while awake.
    pub superpower: Superpower,
    pub mutation: Mutation,
}

impl DuckConfig {
    /// Start from the active model's measurement units: 100 height and 5000
    /// weight in those units, hibernating at 40 bpm.
    pub fn new(units: MeasurementUnits) -> Self {
        let system = match (units.height, units.weight) {
            (LengthUnit::Centimeter, MassUnit::Gram) => UnitSystem::Metric,
            _ => UnitSystem::Imperial,
        };
        Self {
            height_input: LengthInput { value: 100.0, unit: units.height },
            weight_input: MassInput { value: 5000.0, unit: units.weight },
            height_cm: units::to_cm(100.0, units.height),
            weight_g: units::to_g(5000.0, units.weight),
            system,
            life_state: LifeState::Hibernating,
            bpm: 40,
            superpower: Superpower::ElectricStorm,
            mutation: Mutation { score: 0, tier: MutationTier::Common },
        }
    }

    /// Type a new height in the current display unit; the canonical value
    /// follows.
    pub fn set_height(&mut self, value: f64) {
        self.height_input.value = value;
        self.height_cm = units::to_cm(value, self.height_input.unit);
    }

    /// Type a new weight in the current display unit; the canonical value
    /// follows.
    pub fn set_weight(&mut self, value: f64) {
        self.weight_input.value = value;
        self.weight_g = units::to_g(value, self.weight_input.unit);
    }

    /// Switch between any of the three states. bpm and superpower keep their
    /// last values.
    pub fn set_life_state(&mut self, state: LifeState) {
        self.life_state = state;
    }

    /// Heart rate, clamped to 30–140.
    pub fn set_bpm(&mut self, bpm: i32) {
        self.bpm = bpm.clamp(BPM_MIN, BPM_MAX) as u8;
    }

    pub fn set_superpower(&mut self, power: Superpower) {
        self.superpower = power;
    }

    /// Mutation score, clamped to 0–100.
    pub fn set_mutation_score(&mut self, score: i32) {
        self.mutation.score = score.clamp(0, 100) as u8;
    }

    pub fn set_mutation_tier(&mut self, tier: MutationTier) {
        self.mutation.tier = tier;
    }

    /// Toggle the display system. No-op when already in `target`.
    ///
    /// Imperial: inputs are recomputed from the canonical values (2 decimal
    /// places, ft/lb); canonical values are untouched. Metric: canonical
    /// values are recomputed from the displayed inputs, then the inputs
    /// become the canonical values at 1 decimal place — the lossy direction
    /// documented in the module header.
    pub fn convert_system(&mut self, target: UnitSystem) {
        if self.system == target {
            return;
        }
        match target {
            UnitSystem::Imperial => {
                self.height_input = LengthInput {
                    value: units::round2(self.height_cm / CM_PER_FOOT),
                    unit: LengthUnit::Foot,
                };
                self.weight_input = MassInput {
                    value: units::round2(self.weight_g / G_PER_POUND),
                    unit: MassUnit::Pound,
                };
            }
            UnitSystem::Metric => {
                self.height_cm =
                    units::to_cm(self.height_input.value, self.height_input.unit);
                self.weight_g =
                    units::to_g(self.weight_input.value, self.weight_input.unit);
                self.height_input = LengthInput {
                    value: units::round1(self.height_cm),
                    unit: LengthUnit::Centimeter,
                };
                self.weight_input = MassInput {
                    value: units::round1(self.weight_g),
                    unit: MassUnit::Gram,
                };
            }
        }
        self.system = target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric_units() -> MeasurementUnits {
        MeasurementUnits { height: LengthUnit::Centimeter, weight: MassUnit::Gram }
    }

    fn imperial_units() -> MeasurementUnits {
        MeasurementUnits { height: LengthUnit::Foot, weight: MassUnit::Pound }
    }

    #[test]
    fn new_metric_defaults() {
        let duck = DuckConfig::new(metric_units());
        assert_eq!(duck.system, UnitSystem::Metric);
        assert_eq!(duck.height_cm, 100.0);
        assert_eq!(duck.weight_g, 5000.0);
        assert_eq!(duck.life_state, LifeState::Hibernating);
        assert_eq!(duck.bpm, 40);
    }

    #[test]
    fn new_imperial_canonicalises() {
        let duck = DuckConfig::new(imperial_units());
        assert_eq!(duck.system, UnitSystem::Imperial);
        assert!((duck.height_cm - 100.0 * CM_PER_FOOT).abs() < 1e-9);
        assert!((duck.weight_g - 5000.0 * G_PER_POUND).abs() < 1e-9);
    }

    #[test]
    fn typing_updates_canonical() {
        let mut duck = DuckConfig::new(imperial_units());
        duck.set_height(3.0);
        assert!((duck.height_cm - 91.44).abs() < 1e-9);
        duck.set_weight(11.0);
        assert!((duck.weight_g - 11.0 * G_PER_POUND).abs() < 1e-9);
    }

    #[test]
    fn all_life_states_reachable_and_retain_fields() {
        let mut duck = DuckConfig::new(metric_units());
        duck.set_bpm(40);
        duck.set_superpower(Superpower::MagicForest);

        duck.set_life_state(LifeState::Awake);
        duck.set_life_state(LifeState::Trance);
        assert_eq!(duck.bpm, 40, "bpm survives the awake detour");
        duck.set_life_state(LifeState::Hibernating);
        duck.set_life_state(LifeState::Awake);
        assert_eq!(duck.superpower, Superpower::MagicForest);
    }

    #[test]
    fn bpm_clamps() {
        let mut duck = DuckConfig::new(metric_units());
        duck.set_bpm(10);
        assert_eq!(duck.bpm, 30);
        duck.set_bpm(900);
        assert_eq!(duck.bpm, 140);
    }

    #[test]
    fn mutation_score_clamps_and_tier_is_independent() {
        let mut duck = DuckConfig::new(metric_units());
        duck.set_mutation_score(-5);
        assert_eq!(duck.mutation.score, 0);
        duck.set_mutation_score(250);
        assert_eq!(duck.mutation.score, 100);
        duck.set_mutation_tier(MutationTier::Anomalous);
        assert_eq!(duck.mutation.score, 100, "tier change leaves score alone");
    }

    #[test]
    fn gating_predicates() {
        assert!(LifeState::Trance.monitors_bpm());
        assert!(LifeState::Hibernating.monitors_bpm());
        assert!(!LifeState::Awake.monitors_bpm());
        assert!(LifeState::Awake.reveals_superpower());
    }

    #[test]
    fn convert_to_imperial_keeps_canonical() {
        let mut duck = DuckConfig::new(metric_units());
        duck.set_height(100.0);
        duck.set_weight(5000.0);
        duck.convert_system(UnitSystem::Imperial);
        assert_eq!(duck.height_input.unit, LengthUnit::Foot);
        assert_eq!(duck.height_input.value, 3.28);
        assert_eq!(duck.weight_input.unit, MassUnit::Pound);
        assert_eq!(duck.weight_input.value, 11.02);
        // canonical untouched
        assert_eq!(duck.height_cm, 100.0);
        assert_eq!(duck.weight_g, 5000.0);
    }

    #[test]
    fn convert_to_metric_rederives_from_display() {
        let mut duck = DuckConfig::new(metric_units());
        duck.convert_system(UnitSystem::Imperial);
        duck.convert_system(UnitSystem::Metric);
        assert_eq!(duck.height_input.unit, LengthUnit::Centimeter);
        // 100 cm → 3.28 ft (rounded) → 99.97 cm → 100.0 at 1 decimal
        assert!((duck.height_cm - 99.9744).abs() < 1e-6);
        assert_eq!(duck.height_input.value, 100.0);
    }

    #[test]
    fn same_system_is_noop() {
        let mut duck = DuckConfig::new(metric_units());
        let before = duck.clone();
        duck.convert_system(UnitSystem::Metric);
        assert_eq!(duck, before);
    }

    #[test]
    fn repeated_toggles_drift_is_bounded_per_step() {
        let mut duck = DuckConfig::new(metric_units());
        for _ in 0..10 {
            let before = duck.height_cm;
            duck.convert_system(UnitSystem::Imperial);
            duck.convert_system(UnitSystem::Metric);
            // each lap can only move by the 0.01 ft rounding step
            assert!((duck.height_cm - before).abs() <= 0.01 * CM_PER_FOOT);
        }
        // documented lossy behavior: drift exists but stays near the start
        assert!((duck.height_cm - 100.0).abs() < 2.0);
    }

    #[test]
    fn life_state_serde_tags() {
        assert_eq!(
            serde_json::to_string(&LifeState::Hibernating).unwrap(),
            "\"hibernacao\""
        );
        assert_eq!(
            serde_json::to_string(&MutationTier::Epic).unwrap(),
            "\"Épica\""
        );
        let s: LifeState = serde_json::from_str("\"transe\"").unwrap();
        assert_eq!(s, LifeState::Trance);
        assert_eq!(LifeState::Hibernating.tag(), "hibernacao");
        assert_eq!(MutationTier::Epic.label(), "Épica");
    }
}
