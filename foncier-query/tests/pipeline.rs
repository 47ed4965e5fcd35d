//! Tests d'intégration: emprise -> paramètres -> normalisation -> export

use foncier_query::config::Defaults;
use foncier_query::export::export_to_geojson;
use foncier_query::filters::{compose_dpe_params, DpeFilters, FilterValue};
use foncier_query::normalize::{normalize_dpe, normalize_parcelles};
use lambert93::{normalize_viewport, Geographic};

#[test]
fn test_viewport_to_dpe_query() {
    // Emprise autour de Nantes, coins volontairement inversés
    let bbox = normalize_viewport(
        Geographic::new(47.20, -1.50),
        Geographic::new(47.25, -1.60),
    );

    let filters = DpeFilters {
        classes: vec!["A".into(), "B".into()],
        consumption: FilterValue::Range(0.0, 10000.0),
        surface: FilterValue::Unset,
    };
    let params = compose_dpe_params(&bbox, &filters, &Defaults::default());

    // L'emprise part toujours, la consommation n'est jamais supprimée
    assert!(params.contains("topLeft"));
    assert!(params.contains("bottomRight"));
    assert_eq!(params.get("classe"), Some("A,B"));
    assert_eq!(params.get("valeur_dpe_min"), Some("0"));
    assert_eq!(params.get("valeur_dpe_max"), Some("10000"));

    // Les coins "y,x" encadrent bien le Lambert 93 nantais
    let top_left = params.get("topLeft").unwrap();
    let y: f64 = top_left.split(',').next().unwrap().parse().unwrap();
    assert!(y > 6_600_000.0 && y < 6_800_000.0, "y={}", y);
}

#[test]
fn test_dpe_payload_to_geojson() {
    // Deux diagnostics en Lambert 93 (Paris puis Nantes), un enregistrement
    // dégradé sans coordonnées
    let payload = r#"[
        {"id": 1, "ban_x": 648237.0, "ban_y": 6862107.0, "ban_city": "Paris",
         "classe_conso_energie": "C", "ep_conso_5_usages": 182.4},
        {"id": 2, "ban_x": 355545.0, "ban_y": 6689680.0, "ban_city": "Nantes",
         "classe_conso_energie": "E", "ep_conso_5_usages": 331.0},
        {"id": 3, "ban_city": "Inconnue"}
    ]"#;

    let records = normalize_dpe(payload);
    assert_eq!(records.len(), 3);

    // Positions reprojetées dans l'emprise métropolitaine
    assert!(lambert93::is_within_service_area(Geographic::new(
        records[0].latitude,
        records[0].longitude
    )));
    assert!((records[1].latitude - 47.218).abs() < 0.001);
    assert!((records[1].longitude - (-1.554)).abs() < 0.001);

    // L'enregistrement dégradé reste présent, position (0, 0)
    assert_eq!(records[2].latitude, 0.0);
    assert_eq!(records[2].longitude, 0.0);
    assert_eq!(records[2].energy_class, "G");

    // Export GeoJSON et relecture
    let output_path = std::env::temp_dir().join("test_pipeline_dpe.geojson");
    export_to_geojson(&records, &output_path).unwrap();

    let content = std::fs::read_to_string(&output_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed["type"], "FeatureCollection");
    assert_eq!(parsed["features"].as_array().unwrap().len(), 3);
    assert_eq!(parsed["features"][0]["properties"]["city"], "Paris");

    std::fs::remove_file(output_path).ok();
}

#[test]
fn test_degraded_payloads_never_panic() {
    for payload in [
        "",
        "null",
        "42",
        "\"text\"",
        "{\"message\": \"service indisponible\"}",
        "{\"error\": 500}",
        "<html>502</html>",
        "[{}]",
        "[null, 3, \"x\"]",
    ] {
        let _ = normalize_dpe(payload);
        let _ = normalize_parcelles(payload);
        let _ = foncier_query::normalize::normalize_dvf(payload);
    }
}

#[test]
fn test_item_shaped_garbage_yields_default_records() {
    // Des éléments non-objets dans le tableau produisent des
    // enregistrements entièrement par défaut, sans interrompre le lot
    let records = normalize_parcelles("[null, 3, \"x\"]");
    assert_eq!(records.len(), 3);
    for record in &records {
        assert_eq!(record.id, "");
        assert_eq!(record.surface, 0.0);
        assert_eq!((record.latitude, record.longitude), (0.0, 0.0));
    }
}
