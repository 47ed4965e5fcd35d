//! # foncier-query
//!
//! Cœur géospatial d'un outil de recherche foncière: composition de
//! requêtes filtrées sur trois jeux de données géoréférencés (ventes DVF,
//! diagnostics DPE, parcelles cadastrales) dans l'emprise visible de la
//! carte, et normalisation défensive des réponses du backend.
//!
//! ## Features
//!
//! - Filtres optionnels (prix, dates, surface, consommation, classes
//!   énergétiques) avec sémantique "pas de filtre = pas de restriction"
//! - Emprise projetée en Lambert 93 via le crate `lambert93`
//! - Normalisation tolérante aux payloads malformés: jamais d'erreur
//!   remontée vers l'affichage, liste vide dans le pire cas
//! - Export GeoJSON des enregistrements normalisés
//! - CLI simple
//!
//! ## Usage CLI
//!
//! ```bash
//! # Conversion de coordonnées
//! foncier-query to-lambert --lat 48.8584 --lon 2.2945
//!
//! # Paramètres de requête d'une emprise filtrée
//! foncier-query params --dataset dvf \
//!     --corner-a 47.25,-1.60 --corner-b 47.20,-1.50 \
//!     --prix-min 100000 --prix-max 300000
//!
//! # Normalisation d'une réponse sauvegardée, export GeoJSON
//! foncier-query normalize --dataset dpe --input payload.json --output out.geojson
//! ```

pub mod config;
pub mod export;
pub mod filters;
pub mod models;
pub mod normalize;

pub use config::{ApiConfig, Defaults};
pub use models::{DpeProperty, DvfProperty, ParcelleProperty};
