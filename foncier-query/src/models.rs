//! Enregistrements typés produits par la normalisation
//!
//! Tous les champs sont possédés et renseignés: les valeurs manquantes ou
//! corrompues du backend sont remplacées pendant la normalisation, jamais
//! propagées vers l'affichage.

use serde::Serialize;

/// Mutation foncière DVF (vente)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DvfProperty {
    pub id_mutation: String,
    /// Date de la mutation (YYYY-MM-DD, chaîne du backend)
    pub date_mutation: String,
    /// Valeur foncière en euros (0 si absente)
    pub valeur_fonciere: f64,
    /// Type de local ("Maison" si absent)
    pub type_local: String,
    pub latitude: f64,
    pub longitude: f64,
    pub adresse_numero: String,
    pub adresse_nom_voie: String,
    pub code_postal: String,
    pub nom_commune: String,
    /// Parcelle cadastrale support de la mutation
    pub id_parcelle: String,
    /// Surface du terrain en m²
    pub surface_terrain: Option<f64>,
    /// Surface réelle bâtie en m²
    pub surface: Option<f64>,
}

/// Diagnostic de performance énergétique
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DpeProperty {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    /// Classe de consommation énergétique, A à G ("G" si absente)
    pub energy_class: String,
    /// Classe d'émission GES, A à G ("G" si absente)
    pub ges_class: String,
    /// Consommation énergétique 5 usages (kWh/m²/an, 0 si absente)
    pub consumption: f64,
    /// Année de construction (0 si absente)
    pub construction_year: i32,
    /// Période de construction
    pub construction_period: Option<String>,
    pub city: String,
    pub postal_code: String,
}

/// Parcelle cadastrale
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParcelleProperty {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Numéro de parcelle
    pub number: String,
    /// Contenance en m² (0 si absente)
    pub surface: f64,
    pub address: String,
    pub city: String,
    pub postal_code: String,
}
