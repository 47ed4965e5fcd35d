//! Composition des filtres en paramètres de requête
//!
//! Un compositeur pur par jeu de données. Règles communes à tous les
//! attributs numériques et de date:
//!
//! 1. valeur exacte prioritaire sur l'intervalle
//! 2. intervalle égal à l'intervalle par défaut du curseur -> supprimé,
//!    selon la politique propre à l'attribut
//! 3. filtre absent -> aucun paramètre: le backend traite l'absence comme
//!    "aucune restriction" (comportement SELECT *)
//!
//! L'emprise de la carte est toujours présente, inconditionnellement.

mod dpe;
mod dvf;
mod parcelle;

pub use dpe::{compose_dpe_params, DpeFilters};
pub use dvf::{compose_dvf_params, DvfFilters};
pub use parcelle::{compose_parcelle_params, ParcelleFilters};

/// Filtre numérique optionnel
///
/// Exact et intervalle sont structurellement exclusifs; la priorité de
/// l'exact s'applique à la construction (voir [`FilterValue::from_parts`]).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FilterValue {
    /// Pas de filtre
    #[default]
    Unset,
    /// Valeur exacte
    Exact(f64),
    /// Intervalle [min, max]
    Range(f64, f64),
}

impl FilterValue {
    /// Construit un filtre depuis des saisies optionnelles
    ///
    /// Une valeur exacte gagne toujours sur un intervalle fourni en même
    /// temps. Un intervalle partiel est complété par [0, `fill_max`],
    /// comme le fait le formulaire.
    pub fn from_parts(
        exact: Option<f64>,
        min: Option<f64>,
        max: Option<f64>,
        fill_max: f64,
    ) -> Self {
        if let Some(value) = exact {
            return Self::Exact(value);
        }
        match (min, max) {
            (None, None) => Self::Unset,
            (min, max) => Self::Range(min.unwrap_or(0.0), max.unwrap_or(fill_max)),
        }
    }
}

/// Filtre de date optionnel (chaînes opaques YYYY-MM-DD, format du backend)
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DateFilter {
    #[default]
    Unset,
    Exact(String),
    Range(String, String),
}

impl DateFilter {
    /// Construit un filtre de date; la date exacte gagne sur l'intervalle,
    /// un intervalle sans fin reprend sa date de début
    pub fn from_parts(
        exact: Option<String>,
        start: Option<String>,
        end: Option<String>,
    ) -> Self {
        if let Some(date) = exact {
            return Self::Exact(date);
        }
        match (start, end) {
            (Some(start), end) => {
                let end = end.unwrap_or_else(|| start.clone());
                Self::Range(start, end)
            }
            _ => Self::Unset,
        }
    }
}

/// Filtre de classe énergétique (lettres A à G)
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EnergyClassFilter {
    #[default]
    Unset,
    /// Classe exacte
    Exact(String),
    /// Intervalle de classes [min, max]
    Range(String, String),
    /// Ensemble de classes cochées
    Selected(Vec<String>),
}

/// Paramètres de requête ordonnés, prêts pour la construction d'URL
///
/// L'ordre d'insertion est déterministe: composer deux fois les mêmes
/// filtres produit exactement la même séquence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryParams(Vec<(&'static str, String)>);

impl QueryParams {
    pub(crate) fn push(&mut self, name: &'static str, value: impl ToString) {
        self.0.push((name, value.to_string()));
    }

    /// Valeur du paramètre `name`, si présent
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(key, value)| (*key, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sérialise en query string (l'encodage URL est l'affaire du
    /// transport, pas du cœur)
    pub fn to_query_string(&self) -> String {
        self.0
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Vrai si l'intervalle couvre tout le curseur, donc ne filtre rien
pub(crate) fn is_default_range(min: f64, max: f64, ceiling: f64) -> bool {
    min <= 0.0 && max >= ceiling
}
