//! Normalisation défensive des réponses du backend
//!
//! Le backend peut renvoyer un tableau JSON, un objet porteur d'un message
//! de service, ou un corps malformé. Tout cas inexploitable se réduit à
//! une liste vide: aucune erreur ne remonte vers l'affichage, le détail du
//! classement reste disponible en interne pour les tests.

mod dpe;
mod dvf;
mod parcelle;

pub use dpe::normalize_dpe;
pub use dvf::normalize_dvf;
pub use parcelle::normalize_parcelles;

use lambert93::{is_within_service_area, to_wgs84, Projected};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

/// Payload inexploitable, réduit à une liste vide par les normaliseurs
#[derive(Debug, Error)]
pub enum PayloadError {
    /// Corps non parsable en JSON
    #[error("unparsable body: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Objet ou scalaire à la place du tableau attendu (message de
    /// service, erreur backend)
    #[error("non-array payload (message: {message:?})")]
    ErrorShape { message: Option<String> },
}

/// Classe un corps de réponse brut
///
/// Succès uniquement pour un tableau JSON; le message de service éventuel
/// est conservé dans l'erreur pour le journal.
pub fn classify_payload(payload: &str) -> Result<Vec<Value>, PayloadError> {
    let value: Value = serde_json::from_str(payload)?;

    match value {
        Value::Array(items) => Ok(items),
        Value::Object(map) => {
            let message = map
                .get("message")
                .and_then(Value::as_str)
                .map(String::from);
            Err(PayloadError::ErrorShape { message })
        }
        _ => Err(PayloadError::ErrorShape { message: None }),
    }
}

/// Nombre du champ `key`, 0 si absent, non numérique ou NaN
pub(crate) fn float_or_zero(item: &Value, key: &str) -> f64 {
    opt_float(item, key).unwrap_or(0.0)
}

/// Nombre optionnel du champ `key` (None si absent ou invalide)
pub(crate) fn opt_float(item: &Value, key: &str) -> Option<f64> {
    match item.get(key)? {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        // Le backend renvoie parfois les nombres en chaînes
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

/// Chaîne du champ `key`, avec repli si absente ou vide
pub(crate) fn text_or(item: &Value, key: &str, fallback: &str) -> String {
    opt_text(item, key).unwrap_or_else(|| fallback.to_string())
}

/// Premier champ non vide parmi `keys`, avec repli
pub(crate) fn first_text(item: &Value, keys: &[&str], fallback: &str) -> String {
    keys.iter()
        .find_map(|key| opt_text(item, key))
        .unwrap_or_else(|| fallback.to_string())
}

/// Chaîne optionnelle du champ `key` (les identifiants numériques sont
/// convertis en texte)
pub(crate) fn opt_text(item: &Value, key: &str) -> Option<String> {
    match item.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Reprojette une position planaire Lambert 93 en WGS84
///
/// Position absente -> (0, 0) sans passer par la transformation inverse.
/// Position hors emprise métropolitaine -> signalée mais conservée.
pub(crate) fn planar_to_wgs84(x: Option<f64>, y: Option<f64>, dataset: &str) -> (f64, f64) {
    let (Some(x), Some(y)) = (x, y) else {
        warn!(dataset, "coordonnées planes absentes, position (0, 0)");
        return (0.0, 0.0);
    };

    let geographic = to_wgs84(Projected::new(x, y));
    if !is_within_service_area(geographic) {
        warn!(
            dataset,
            lat = geographic.lat,
            lon = geographic.lon,
            "position hors France métropolitaine"
        );
    }

    (geographic.lat, geographic.lon)
}
