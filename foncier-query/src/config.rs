//! Configuration du backend et valeurs par défaut de l'interface

use lambert93::Geographic;
use serde::{Deserialize, Serialize};

/// URL de base par défaut du backend de recherche
const DEFAULT_API_URL: &str = "http://localhost:3000/geolocdpe/api/v0";

/// Configuration d'accès au backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// URL de base de l'API
    pub base_url: String,
}

impl ApiConfig {
    /// Charge la configuration depuis l'environnement
    ///
    /// `FONCIER_API_URL` si définie (via `.env` ou variable), sinon la
    /// valeur par défaut locale.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("FONCIER_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self { base_url }
    }

    /// Endpoint de filtrage des ventes DVF
    pub fn dvf_endpoint(&self) -> String {
        format!("{}/dvf/filtrer", self.base_url)
    }

    /// Endpoint des diagnostics DPE
    pub fn dpe_endpoint(&self) -> String {
        format!("{}/dpe", self.base_url)
    }

    /// Endpoint des parcelles cadastrales
    pub fn parcelles_endpoint(&self) -> String {
        format!("{}/parcelles", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// Valeurs par défaut de l'interface, passées explicitement aux
/// compositeurs de filtres
///
/// Aucun état global: chaque appel reçoit cette structure, ce qui rend la
/// politique de suppression des plages par défaut testable et locale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Defaults {
    /// Plafond du curseur de surface (m²)
    pub surface_ceiling: f64,
    /// Plafond du curseur de prix (€)
    pub price_ceiling: f64,
    /// Borne haute implicite d'une plage de consommation partielle
    /// (kWh/m²/an)
    pub consumption_fill_max: f64,
    /// Nombre maximal de résultats par requête
    pub result_limit: u32,
    /// Centre de la carte au premier affichage
    pub map_center: Geographic,
    /// Niveau de zoom initial
    pub map_zoom: u8,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            surface_ceiling: 10_000.0,
            price_ceiling: 2_000_000.0,
            consumption_fill_max: 1_000.0,
            result_limit: 500,
            map_center: Geographic::new(46.603354, 1.888334), // centre de la France
            map_zoom: 6,
        }
    }
}
