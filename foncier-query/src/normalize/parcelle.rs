//! Normalisation des parcelles cadastrales
//!
//! Positions stockées en Lambert 93 (`x`, `y`), contenance parfois
//! renvoyée en chaîne.

use serde_json::Value;
use tracing::warn;

use super::{classify_payload, first_text, float_or_zero, opt_float, planar_to_wgs84, text_or};
use crate::models::ParcelleProperty;

/// Normalise une réponse brute du backend parcelles
pub fn normalize_parcelles(payload: &str) -> Vec<ParcelleProperty> {
    let items = match classify_payload(payload) {
        Ok(items) => items,
        Err(err) => {
            warn!(%err, "payload parcelles inexploitable");
            return Vec::new();
        }
    };

    items.iter().map(parcelle_record).collect()
}

fn parcelle_record(item: &Value) -> ParcelleProperty {
    let (latitude, longitude) = planar_to_wgs84(
        opt_float(item, "x"),
        opt_float(item, "y"),
        "parcelles",
    );

    ParcelleProperty {
        id: text_or(item, "id", ""),
        latitude,
        longitude,
        number: first_text(item, &["numero", "numero_complet"], ""),
        surface: float_or_zero(item, "contenance"),
        address: text_or(item, "nom_voie", ""),
        // Pas de code postal dédié dans la base: le code commune sert
        // pour les deux champs
        city: text_or(item, "code_commune", ""),
        postal_code: text_or(item, "code_commune", ""),
    }
}
