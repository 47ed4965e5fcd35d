//! Filtres du jeu de données des parcelles cadastrales
//!
//! Même convention d'emprise que le backend DPE: coins projetés `"y,x"`.
//! La plage de surface part en un seul paramètre `"min,max"`.

use lambert93::ProjectedRect;
use tracing::debug;

use super::{is_default_range, FilterValue, QueryParams};
use crate::config::Defaults;

/// Filtres applicables aux parcelles
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParcelleFilters {
    /// Contenance de la parcelle (m²)
    pub surface: FilterValue,
}

/// Compose les paramètres de la requête parcelles
pub fn compose_parcelle_params(
    bbox: &ProjectedRect,
    filters: &ParcelleFilters,
    defaults: &Defaults,
) -> QueryParams {
    let mut params = QueryParams::default();

    params.push("topLeft", format!("{},{}", bbox.y_max, bbox.x_min));
    params.push("bottomRight", format!("{},{}", bbox.y_min, bbox.x_max));

    match filters.surface {
        FilterValue::Exact(value) => params.push("surface_exacte", value),
        FilterValue::Range(min, max) if !is_default_range(min, max, defaults.surface_ceiling) => {
            params.push("surface", format!("{},{}", min, max));
        }
        _ => {}
    }

    debug!(count = params.len(), "paramètres parcelles composés");

    params
}
