//! Filtres du jeu de données DPE (diagnostics énergétiques)
//!
//! Le backend DPE attend l'emprise en Lambert 93 projeté, coins au format
//! `"y,x"` (ordre de stockage de la base: y d'abord).

use lambert93::ProjectedRect;
use tracing::debug;

use super::{is_default_range, FilterValue, QueryParams};
use crate::config::Defaults;

/// Filtres applicables aux diagnostics DPE
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DpeFilters {
    /// Classes énergétiques cochées (A à G)
    pub classes: Vec<String>,
    /// Consommation énergétique (kWh/m²/an)
    pub consumption: FilterValue,
    /// Surface habitable (m²)
    pub surface: FilterValue,
}

/// Compose les paramètres de la requête DPE
pub fn compose_dpe_params(
    bbox: &ProjectedRect,
    filters: &DpeFilters,
    defaults: &Defaults,
) -> QueryParams {
    let mut params = QueryParams::default();

    // Emprise projetée, systématique. topLeft = (y_max, x_min),
    // bottomRight = (y_min, x_max)
    params.push("topLeft", format!("{},{}", bbox.y_max, bbox.x_min));
    params.push("bottomRight", format!("{},{}", bbox.y_min, bbox.x_max));

    if !filters.classes.is_empty() {
        params.push("classe", filters.classes.join(","));
    }

    match filters.consumption {
        FilterValue::Exact(value) => params.push("valeur_dpe_exact", value),
        // Toute plage de consommation fournie est envoyée telle quelle,
        // même [0, 10000]: contrairement à la surface, aucune plage par
        // défaut côté UI ne vaut "pas de filtre". Asymétrie voulue.
        FilterValue::Range(min, max) => {
            params.push("valeur_dpe_min", min);
            params.push("valeur_dpe_max", max);
        }
        FilterValue::Unset => {}
    }

    match filters.surface {
        FilterValue::Exact(value) => params.push("surface_exacte", value),
        FilterValue::Range(min, max) if !is_default_range(min, max, defaults.surface_ceiling) => {
            params.push("surface_min", min);
            params.push("surface_max", max);
        }
        _ => {}
    }

    debug!(count = params.len(), "paramètres DPE composés");

    params
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bbox() -> ProjectedRect {
        ProjectedRect {
            x_min: 352276.0,
            x_max: 359511.0,
            y_min: 6687450.0,
            y_max: 6693430.0,
        }
    }

    #[test]
    fn test_bbox_corner_format() {
        let params = compose_dpe_params(&bbox(), &DpeFilters::default(), &Defaults::default());
        // y d'abord, puis x
        assert_eq!(params.get("topLeft"), Some("6693430,352276"));
        assert_eq!(params.get("bottomRight"), Some("6687450,359511"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_classes_joined() {
        let filters = DpeFilters {
            classes: vec!["A".into(), "B".into()],
            ..Default::default()
        };
        let params = compose_dpe_params(&bbox(), &filters, &Defaults::default());
        assert_eq!(params.get("classe"), Some("A,B"));
    }

    #[test]
    fn test_consumption_range_never_suppressed() {
        // Plage structurellement identique à une plage de surface
        // supprimée: la consommation part quand même
        let filters = DpeFilters {
            consumption: FilterValue::Range(0.0, 10_000.0),
            ..Default::default()
        };
        let params = compose_dpe_params(&bbox(), &filters, &Defaults::default());
        assert_eq!(params.get("valeur_dpe_min"), Some("0"));
        assert_eq!(params.get("valeur_dpe_max"), Some("10000"));
    }

    #[test]
    fn test_exact_consumption() {
        let filters = DpeFilters {
            consumption: FilterValue::Exact(3742.6),
            ..Default::default()
        };
        let params = compose_dpe_params(&bbox(), &filters, &Defaults::default());
        assert_eq!(params.get("valeur_dpe_exact"), Some("3742.6"));
        assert!(!params.contains("valeur_dpe_min"));
    }

    #[test]
    fn test_default_surface_range_suppressed() {
        let filters = DpeFilters {
            surface: FilterValue::Range(0.0, 10_000.0),
            ..Default::default()
        };
        let params = compose_dpe_params(&bbox(), &filters, &Defaults::default());
        assert!(!params.contains("surface_min"));
    }

    #[test]
    fn test_composition_idempotent() {
        let filters = DpeFilters {
            classes: vec!["C".into(), "D".into()],
            consumption: FilterValue::Range(2000.0, 4000.0),
            surface: FilterValue::Range(30.0, 120.0),
        };
        let bbox = bbox();
        let defaults = Defaults::default();
        assert_eq!(
            compose_dpe_params(&bbox, &filters, &defaults),
            compose_dpe_params(&bbox, &filters, &defaults)
        );
    }
}
