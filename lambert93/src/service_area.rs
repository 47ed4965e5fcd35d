//! Emprise de service: France métropolitaine
//!
//! Contrôle purement consultatif. Les coordonnées hors emprise sont
//! signalées par les appelants mais jamais rejetées: les données de bord
//! de territoire ou erronées-mais-informatives restent visibles.

use crate::Geographic;

/// Latitude minimale (degrés)
pub const LAT_MIN: f64 = 41.0;

/// Latitude maximale (degrés)
pub const LAT_MAX: f64 = 52.0;

/// Longitude minimale (degrés)
pub const LON_MIN: f64 = -5.0;

/// Longitude maximale (degrés)
pub const LON_MAX: f64 = 10.0;

/// Vrai si la position est dans l'emprise métropolitaine
pub fn is_within_service_area(point: Geographic) -> bool {
    (LAT_MIN..=LAT_MAX).contains(&point.lat) && (LON_MIN..=LON_MAX).contains(&point.lon)
}
