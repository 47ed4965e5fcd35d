//! # lambert93
//!
//! Projection Lambert 93 (EPSG:2154) en Rust pur, sans dépendance
//! géodésique externe.
//!
//! ## Features
//!
//! - Conversion WGS84 <-> Lambert 93 (conique conforme, 2 parallèles standards)
//! - Constantes dérivées calculées en un seul point, partagées entre les deux sens
//! - Normalisation d'emprise: deux coins quelconques -> rectangle canonique
//! - Contrôle consultatif d'appartenance à la France métropolitaine
//! - Types `geo` pour l'interopérabilité avec l'écosystème Rust géospatial
//!
//! ## Usage
//!
//! ```rust
//! use lambert93::{to_lambert93, to_wgs84, Geographic};
//!
//! let planar = to_lambert93(Geographic::new(48.8584, 2.2945));
//! let back = to_wgs84(planar);
//! assert!((back.lat - 48.8584).abs() < 1e-6);
//! ```

pub mod ellipsoid;
pub mod projection;
pub mod service_area;
pub mod viewport;

pub use projection::{to_lambert93, to_wgs84};
pub use service_area::is_within_service_area;
pub use viewport::{normalize_viewport, ProjectedRect, ViewportRect};

use serde::Serialize;

/// Position géographique WGS84 en degrés décimaux
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Geographic {
    /// Latitude en degrés décimaux
    pub lat: f64,
    /// Longitude en degrés décimaux
    pub lon: f64,
}

impl Geographic {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Position plane Lambert 93 en mètres
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Projected {
    /// Easting en mètres
    pub x: f64,
    /// Northing en mètres
    pub y: f64,
}

impl Projected {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Geographic> for geo::Point<f64> {
    /// Convention geo: x = longitude, y = latitude
    fn from(point: Geographic) -> Self {
        geo::Point::new(point.lon, point.lat)
    }
}

impl From<Projected> for geo::Coord<f64> {
    fn from(point: Projected) -> Self {
        geo::Coord {
            x: point.x,
            y: point.y,
        }
    }
}
