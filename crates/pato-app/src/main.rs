//! Pato Primordial headless configuration harness.
//!
//! Drives the full wizard flow without a UI: drone selection, duck
//! configuration, map placement with landmark detection, assembly,
//! persistence and the export hand-off. The screens of the original
//! application map onto the numbered steps below.
//!
//! Usage:
//!   cargo run -p pato-app
//!   cargo run -p pato-app -- --offline   # skip the Nominatim lookup
//!   cargo run -p pato-app -- --clear     # drop the persisted setup and exit

use pato_geo::NominatimClient;
use pato_logic::catalog::Catalog;
use pato_logic::duck::{DuckConfig, LifeState, MutationTier, Superpower};
use pato_logic::location::LocationState;
use pato_logic::picker::DronePicker;
use pato_logic::setup::assemble;
use pato_logic::summary;
use pato_logic::units::UnitSystem;
use pato_store::{SetupStore, DEFAULT_STORE_FILE};

/// External destination the export is handed off to.
const GAME_URL: &str = "https://example.com/jogo";

/// File the export document is written to (the download analog).
const EXPORT_FILE: &str = "pato-setup.json";

#[tokio::main]
async fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();
    let offline = args.iter().any(|a| a == "--offline");

    let store = SetupStore::new(DEFAULT_STORE_FILE);

    if args.iter().any(|a| a == "--clear") {
        match store.clear() {
            Ok(()) => println!("Persisted setup cleared."),
            Err(e) => log::warn!("could not clear persisted setup: {e}"),
        }
        return;
    }

    println!("=== Pato Primordial — Configuração ===\n");

    // Load-on-init: report a previous session if one was saved.
    match store.load() {
        Ok(Some(previous)) => {
            println!(
                "Sessão anterior encontrada ({}). Ela será substituída.\n",
                previous.drone_serial
            );
        }
        Ok(None) => {}
        Err(e) => log::warn!("could not read persisted setup: {e}"),
    }

    // 1) Drone selection
    let catalog = Catalog::default();
    let mut picker = DronePicker::new(&catalog);
    picker.select_brand(&catalog, "PatoX");
    picker.select_model(&catalog, "patox-alpha");
    picker.set_reading("velocidade", 9.0);
    picker.set_reading("precisao", 7.0);
    picker.set_reading("resistencia", 4.0);
    println!(
        "[1/4] Drone: {} {} (serial {})",
        picker.brand,
        picker.active_entry(&catalog).model,
        picker.serial
    );

    // 2) Duck configuration, including a unit-system round trip
    let mut duck = DuckConfig::new(picker.active_entry(&catalog).units);
    duck.set_height(110.0);
    duck.set_weight(5200.0);
    duck.convert_system(UnitSystem::Imperial);
    println!(
        "[2/4] Medidas em imperial: {:.2} {} / {:.2} {}",
        duck.height_input.value,
        duck.height_input.unit.label(),
        duck.weight_input.value,
        duck.weight_input.unit.label()
    );
    duck.convert_system(UnitSystem::Metric);

    duck.set_life_state(LifeState::Trance);
    duck.set_bpm(55);
    duck.set_life_state(LifeState::Awake);
    duck.set_superpower(Superpower::HyperBeam);
    duck.set_mutation_score(72);
    duck.set_mutation_tier(MutationTier::Rare);

    // 3) Location and landmark
    let mut location = LocationState::default();
    location.set_origin_country("Brasil");
    location.set_city("Rio de Janeiro");
    location.set_country("Brasil");
    let ticket = location.set_coordinates(-22.951916, -43.210487);

    let result = if offline {
        println!("[3/4] Localização definida (lookup ignorado: --offline)");
        None
    } else {
        match NominatimClient::new() {
            Ok(client) => {
                let name = client.detect_landmark(ticket.lat, ticket.lon).await;
                println!("[3/4] Localização definida, lookup concluído");
                name
            }
            Err(e) => {
                log::warn!("could not build lookup client: {e}");
                None
            }
        }
    };
    location.apply_lookup(&ticket, result);
    println!("      Ponto de referência: {}", location.landmark_label());

    // 4) Assemble on confirmation, persist, review, export
    let setup = assemble(&catalog, &picker, &duck, &location);
    if let Err(e) = store.save(&setup) {
        log::warn!("could not persist setup: {e}");
    }
    println!("[4/4] Setup montado e salvo.\n");

    println!("{}", summary::render(&setup));

    let json = setup.to_json_pretty();
    match std::fs::write(EXPORT_FILE, &json) {
        Ok(()) => println!("Export gravado em {EXPORT_FILE}"),
        Err(e) => log::warn!("export failed, re-run to retry: {e}"),
    }
    println!("Pronto para o jogo: {GAME_URL}");
}
