//! Normalisation des ventes DVF
//!
//! Le backend DVF renvoie des positions déjà géographiques (lat/lon),
//! souvent sous forme de chaînes: coercition numérique avec repli à 0.

use lambert93::{is_within_service_area, Geographic};
use serde_json::Value;
use tracing::warn;

use super::{classify_payload, float_or_zero, opt_float, text_or};
use crate::models::DvfProperty;

/// Normalise une réponse brute du backend DVF
///
/// Tout payload inexploitable produit une liste vide; l'ordre des
/// enregistrements est celui du payload.
pub fn normalize_dvf(payload: &str) -> Vec<DvfProperty> {
    let items = match classify_payload(payload) {
        Ok(items) => items,
        Err(err) => {
            warn!(%err, "payload DVF inexploitable");
            return Vec::new();
        }
    };

    items.iter().map(dvf_record).collect()
}

fn dvf_record(item: &Value) -> DvfProperty {
    let latitude = float_or_zero(item, "latitude");
    let longitude = float_or_zero(item, "longitude");

    if (latitude, longitude) != (0.0, 0.0)
        && !is_within_service_area(Geographic::new(latitude, longitude))
    {
        warn!(latitude, longitude, "vente DVF hors France métropolitaine");
    }

    DvfProperty {
        id_mutation: text_or(item, "id_mutation", ""),
        date_mutation: text_or(item, "date_mutation", ""),
        valeur_fonciere: float_or_zero(item, "valeur_fonciere"),
        type_local: text_or(item, "type_local", "Maison"),
        latitude,
        longitude,
        adresse_numero: text_or(item, "adresse_numero", ""),
        adresse_nom_voie: text_or(item, "adresse_nom_voie", ""),
        code_postal: text_or(item, "code_postal", ""),
        nom_commune: text_or(item, "nom_commune", ""),
        id_parcelle: text_or(item, "id_parcelle", ""),
        surface_terrain: opt_float(item, "surface_terrain"),
        surface: opt_float(item, "surface_reelle_bati"),
    }
}
