//! Read-only review projection of an assembled setup.
//!
//! Renders the snapshot the way the dashboard screen presents it: grouped
//! sections, measurements with one decimal and unit, readings as `x/10`.
//! Never mutates the snapshot.

use std::fmt::Write;

use crate::location::NO_LANDMARK;
use crate::setup::AssembledSetup;

/// Render the human-readable review of a snapshot.
pub fn render(setup: &AssembledSetup) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "== Drone ==");
    let _ = writeln!(out, "Marca:  {}", setup.drone_brand);
    let _ = writeln!(out, "Modelo: {}", setup.drone_model_id);
    let _ = writeln!(out, "Serial: {}", setup.drone_serial);
    for (key, value) in &setup.drone_readings {
        let name = key.strip_prefix("drone_").unwrap_or(key);
        let _ = writeln!(out, "  {name}: {value}/10");
    }
    let _ = writeln!(
        out,
        "Turbo:  potência {}, estoque {}, produção {}",
        setup.drone_turbo_potencia, setup.drone_turbo_estoque, setup.drone_turbo_producao
    );

    let _ = writeln!(out, "\n== Pato Primordial ==");
    let _ = writeln!(out, "Altura: {:.1} cm", setup.pato_height);
    let _ = writeln!(out, "Peso:   {:.1} g", setup.pato_weight);
    let _ = writeln!(out, "Estado: {}", setup.pato_hibernation.tag());
    let _ = writeln!(out, "BPM:    {} / 140", setup.pato_bpm);
    let _ = writeln!(
        out,
        "Mutação: {} / 100 ({})",
        setup.pato_mutation_score,
        setup.pato_mutation_tier.label()
    );
    let _ = writeln!(
        out,
        "Superpoder: {} — {}",
        setup.pato_superpower_name, setup.pato_superpower_description
    );

    let _ = writeln!(out, "\n== Localização ==");
    let _ = writeln!(out, "País de origem: {}", setup.origin_country);
    let _ = writeln!(
        out,
        "Cidade/País:    {} / {}",
        setup.location_city, setup.location_country
    );
    let _ = writeln!(
        out,
        "Coordenadas:    {:.5}, {:.5}",
        setup.location_lat, setup.location_lon
    );
    let landmark = if setup.location_landmark.is_empty() {
        NO_LANDMARK
    } else {
        setup.location_landmark.as_str()
    };
    let _ = writeln!(out, "Ponto de referência: {landmark}");

    out
}
