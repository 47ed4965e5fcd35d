//! Normalisation des diagnostics DPE
//!
//! La base DPE stocke la position en Lambert 93 projeté, dans l'ordre
//! y puis x (`ban_y`, `ban_x`). Ordre vérifié empiriquement (l'ordre
//! opposé produit des coordonnées invalides), à conserver tel quel.

use serde_json::Value;
use tracing::warn;

use super::{
    classify_payload, first_text, float_or_zero, opt_float, opt_text, planar_to_wgs84, text_or,
};
use crate::models::DpeProperty;

/// Normalise une réponse brute du backend DPE
pub fn normalize_dpe(payload: &str) -> Vec<DpeProperty> {
    let items = match classify_payload(payload) {
        Ok(items) => items,
        Err(err) => {
            warn!(%err, "payload DPE inexploitable");
            return Vec::new();
        }
    };

    items.iter().map(dpe_record).collect()
}

fn dpe_record(item: &Value) -> DpeProperty {
    // ban_x = easting, ban_y = northing: la paire stockée (ban_y, ban_x)
    // est remise en ordre (x, y) avant la transformation inverse
    let (latitude, longitude) = planar_to_wgs84(
        opt_float(item, "ban_x"),
        opt_float(item, "ban_y"),
        "dpe",
    );

    DpeProperty {
        id: text_or(item, "id", ""),
        latitude,
        longitude,
        address: first_text(item, &["ban_street", "adresse_brut"], ""),
        energy_class: text_or(item, "classe_conso_energie", "G"),
        ges_class: text_or(item, "classe_emission_ges", "G"),
        consumption: float_or_zero(item, "ep_conso_5_usages"),
        construction_year: float_or_zero(item, "annee_construction") as i32,
        construction_period: opt_text(item, "periode_construction"),
        city: first_text(item, &["ban_city", "nom_commune_brut"], ""),
        postal_code: first_text(item, &["ban_postcode", "code_postal_brut"], ""),
    }
}
