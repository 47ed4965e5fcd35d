//! Filtres du jeu de données DVF (mutations foncières)
//!
//! Le backend DVF consomme l'emprise en coordonnées géographiques
//! (lat/lon min/max), contrairement aux backends DPE et parcelles qui
//! attendent du Lambert 93 projeté.

use lambert93::ViewportRect;
use tracing::debug;

use super::{is_default_range, DateFilter, EnergyClassFilter, FilterValue, QueryParams};
use crate::config::Defaults;

/// Filtres applicables aux ventes DVF
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DvfFilters {
    /// Prix de vente (€)
    pub price: FilterValue,
    /// Date de mutation
    pub date: DateFilter,
    /// Surface réelle bâtie (m²)
    pub surface: FilterValue,
    /// Classe énergétique du bien
    pub energy_class: EnergyClassFilter,
    /// Nombre maximal de résultats (celui des défauts si None)
    pub limit: Option<u32>,
}

/// Compose les paramètres de la requête DVF
pub fn compose_dvf_params(
    viewport: &ViewportRect,
    filters: &DvfFilters,
    defaults: &Defaults,
) -> QueryParams {
    let mut params = QueryParams::default();

    // Emprise géographique, systématique
    params.push("lat_min", viewport.south);
    params.push("lat_max", viewport.north);
    params.push("lon_min", viewport.west);
    params.push("lon_max", viewport.east);
    params.push("limit", filters.limit.unwrap_or(defaults.result_limit));

    match filters.price {
        FilterValue::Exact(value) => params.push("prix_exact", value),
        // Le prix ne connaît pas de plage par défaut: tout intervalle
        // fourni est envoyé tel quel
        FilterValue::Range(min, max) => {
            params.push("prix_min", min);
            params.push("prix_max", max);
        }
        FilterValue::Unset => {}
    }

    match &filters.date {
        DateFilter::Exact(date) => params.push("date_exacte", date.clone()),
        DateFilter::Range(start, end) => {
            params.push("date_min", start.clone());
            params.push("date_max", end.clone());
        }
        DateFilter::Unset => {}
    }

    match filters.surface {
        FilterValue::Exact(value) => params.push("surface_exacte", value),
        // Intervalle [0, plafond du curseur] = curseur au repos: aucun
        // vrai filtre, rien n'est envoyé. La consommation (dpe.rs) ne
        // suit PAS cette règle: asymétrie voulue, l'UI ne préremplit
        // jamais de plage de consommation.
        FilterValue::Range(min, max) if !is_default_range(min, max, defaults.surface_ceiling) => {
            params.push("surface_min", min);
            params.push("surface_max", max);
        }
        _ => {}
    }

    match &filters.energy_class {
        EnergyClassFilter::Exact(class) => params.push("energy_classe_exacte", class.clone()),
        EnergyClassFilter::Range(min, max) => {
            params.push("energy_classe_min", min.clone());
            params.push("energy_classe_max", max.clone());
        }
        EnergyClassFilter::Selected(classes) if !classes.is_empty() => {
            params.push("energy_classes", classes.join(","));
        }
        _ => {}
    }

    debug!(count = params.len(), "paramètres DVF composés");

    params
}
