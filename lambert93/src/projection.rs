//! Projection Lambert 93 (EPSG:2154)
//!
//! Lambert Conformal Conic avec 2 parallèles standards, paramètres
//! officiels IGN sur l'ellipsoïde GRS80.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use tracing::trace;

use crate::ellipsoid::GRS80;
use crate::{Geographic, Projected};

/// Tolérance de convergence de l'itération inverse (radians)
const CONVERGENCE_EPSILON: f64 = 1e-12;

/// Nombre maximal d'itérations pour retrouver la latitude
const MAX_ITERATIONS: usize = 10;

/// Paramètres Lambert 93 (EPSG:2154)
///
/// Constants du processus, jamais modifiés après initialisation.
struct Lambert93 {
    /// Longitude origine (méridien central, 3°E)
    lon0: f64,
    /// Latitude origine
    lat0: f64,
    /// Premier parallèle standard
    lat1: f64,
    /// Deuxième parallèle standard
    lat2: f64,
    /// False easting
    x0: f64,
    /// False northing
    y0: f64,
}

impl Default for Lambert93 {
    fn default() -> Self {
        Self {
            lon0: 3.0_f64.to_radians(),  // 3°E
            lat0: 46.5_f64.to_radians(), // 46.5°N
            lat1: 49.0_f64.to_radians(), // 49°N
            lat2: 44.0_f64.to_radians(), // 44°N
            x0: 700000.0,                // False easting
            y0: 6600000.0,               // False northing
        }
    }
}

/// Constantes dérivées de la projection (exposant n, facteur d'échelle F,
/// rayon à l'origine ρ₀)
///
/// Un seul point de calcul, consommé par le sens direct ET le sens
/// inverse: les deux directions ne peuvent pas diverger.
struct Derived {
    n: f64,
    f: f64,
    rho0: f64,
}

impl Lambert93 {
    fn derived(&self) -> Derived {
        let m1 = reduced_m(self.lat1);
        let m2 = reduced_m(self.lat2);
        let t1 = isometric_t(self.lat1);
        let t2 = isometric_t(self.lat2);
        let t0 = isometric_t(self.lat0);

        let n = (m1 / m2).ln() / (t1 / t2).ln();
        let f = m1 / (n * t1.powf(n));
        let rho0 = GRS80::A * f * t0.powf(n);

        Derived { n, f, rho0 }
    }
}

/// Fonction auxiliaire m(φ) = cos(φ) / √(1 − e²·sin²φ)
fn reduced_m(lat: f64) -> f64 {
    let sin_lat = lat.sin();
    lat.cos() / (1.0 - GRS80::E2 * sin_lat * sin_lat).sqrt()
}

/// Fonction auxiliaire t(φ) (latitude isométrique)
fn isometric_t(lat: f64) -> f64 {
    let sin_lat = lat.sin();
    let term = ((1.0 - GRS80::E * sin_lat) / (1.0 + GRS80::E * sin_lat)).powf(GRS80::E / 2.0);
    (FRAC_PI_4 - lat / 2.0).tan() / term
}

/// Retrouve la latitude depuis t (itératif, borné)
///
/// Pas de forme fermée: point fixe plafonné à MAX_ITERATIONS. Au-delà du
/// plafond on renvoie la meilleure estimation disponible, jamais d'erreur.
fn latitude_from_t(t: f64) -> f64 {
    let mut lat = FRAC_PI_2 - 2.0 * t.atan();

    for _ in 0..MAX_ITERATIONS {
        let sin_lat = lat.sin();
        let term = ((1.0 - GRS80::E * sin_lat) / (1.0 + GRS80::E * sin_lat)).powf(GRS80::E / 2.0);
        let new_lat = FRAC_PI_2 - 2.0 * (t * term).atan();

        if (new_lat - lat).abs() < CONVERGENCE_EPSILON {
            return new_lat;
        }
        lat = new_lat;
    }
    lat
}

/// Convertit une position WGS84 vers Lambert 93
///
/// Définie pour toute entrée finie: les coordonnées hors du domaine de
/// validité traversent la projection sans contrôle ni rejet.
pub fn to_lambert93(point: Geographic) -> Projected {
    let params = Lambert93::default();
    let d = params.derived();

    let lat = point.lat.to_radians();
    let lon = point.lon.to_radians();

    let t = isometric_t(lat);
    let rho = GRS80::A * d.f * t.powf(d.n);
    let theta = d.n * (lon - params.lon0);

    let x = params.x0 + rho * theta.sin();
    let y = params.y0 + d.rho0 - rho * theta.cos();

    trace!(lat = point.lat, lon = point.lon, x, y, "WGS84 -> Lambert93");

    Projected { x, y }
}

/// Convertit une position Lambert 93 vers WGS84
pub fn to_wgs84(point: Projected) -> Geographic {
    let params = Lambert93::default();
    let d = params.derived();

    let dx = point.x - params.x0;
    let dy = params.y0 + d.rho0 - point.y;

    let rho = (dx * dx + dy * dy).sqrt();
    let rho = if d.n < 0.0 { -rho } else { rho };
    let theta = dx.atan2(dy);

    let t = (rho / (GRS80::A * d.f)).powf(1.0 / d.n);
    let lon = params.lon0 + theta / d.n;
    let lat = latitude_from_t(t);

    let geographic = Geographic {
        lat: lat.to_degrees(),
        lon: lon.to_degrees(),
    };

    trace!(
        x = point.x,
        y = point.y,
        lat = geographic.lat,
        lon = geographic.lon,
        "Lambert93 -> WGS84"
    );

    geographic
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service_area::{LAT_MAX, LAT_MIN, LON_MAX, LON_MIN};

    /// Tolérance métrique sur les points de référence (paramètre de test
    /// explicite, pas une promesse de perfection)
    const TOL_METERS: f64 = 5.0;

    /// Points de référence EPSG:2154
    const REFERENCE_POINTS: &[(&str, f64, f64, f64, f64)] = &[
        ("Paris Notre-Dame", 48.853, 2.35, 652304.311, 6861636.298),
        ("Lyon Part-Dieu", 45.760, 4.856, 844254.483, 6519517.166),
        ("Marseille Vieux-Port", 43.295, 5.374, 892736.105, 6246878.827),
        ("Nantes Centre", 47.218, -1.554, 355545.019, 6689680.490),
        ("Toulouse Capitole", 43.604, 1.444, 574340.138, 6279565.508),
    ];

    #[test]
    fn test_forward_reference_points() {
        for &(name, lat, lon, x_ref, y_ref) in REFERENCE_POINTS {
            let p = to_lambert93(Geographic::new(lat, lon));
            assert!(
                (p.x - x_ref).abs() < TOL_METERS,
                "{}: x={} attendu {}",
                name,
                p.x,
                x_ref
            );
            assert!(
                (p.y - y_ref).abs() < TOL_METERS,
                "{}: y={} attendu {}",
                name,
                p.y,
                y_ref
            );
        }
    }

    #[test]
    fn test_inverse_paris() {
        // Tour Eiffel approximativement
        let geo = to_wgs84(Projected::new(648237.0, 6862107.0));

        // Tour Eiffel: 2.2945°E, 48.8584°N
        assert!((geo.lon - 2.2945).abs() < 0.01, "lon={}", geo.lon);
        assert!((geo.lat - 48.8584).abs() < 0.01, "lat={}", geo.lat);
    }

    #[test]
    fn test_inverse_marseille() {
        // Vieux-Port approximativement
        let geo = to_wgs84(Projected::new(893193.0, 6245829.0));

        // Marseille: 5.37°E, 43.30°N
        assert!((geo.lon - 5.37).abs() < 0.1, "lon={}", geo.lon);
        assert!((geo.lat - 43.30).abs() < 0.1, "lat={}", geo.lat);
    }

    #[test]
    fn test_roundtrip_service_area() {
        // Grille couvrant la France métropolitaine, pas de 0.5°
        let mut lat = LAT_MIN;
        while lat <= LAT_MAX {
            let mut lon = LON_MIN;
            while lon <= LON_MAX {
                let origin = Geographic::new(lat, lon);
                let back = to_wgs84(to_lambert93(origin));

                assert!(
                    (back.lat - origin.lat).abs() < 1e-6,
                    "lat {} -> {}",
                    origin.lat,
                    back.lat
                );
                assert!(
                    (back.lon - origin.lon).abs() < 1e-6,
                    "lon {} -> {}",
                    origin.lon,
                    back.lon
                );

                lon += 0.5;
            }
            lat += 0.5;
        }
    }

    #[test]
    fn test_inverse_terminates_on_garbage() {
        // Entrées absurdes: la borne d'itération garantit la terminaison
        // et une valeur finie, pas la justesse
        for &(x, y) in &[(0.0, 0.0), (1e9, -1e9), (-5e8, 3e12)] {
            let geo = to_wgs84(Projected::new(x, y));
            assert!(geo.lat.is_finite(), "lat non finie pour ({}, {})", x, y);
            assert!(geo.lon.is_finite(), "lon non finie pour ({}, {})", x, y);
        }
    }

    #[test]
    fn test_derived_constants_shared() {
        // Aller puis retour immédiat: si les deux sens recalculaient des
        // constantes différentes, l'écart dépasserait largement 1e-9°
        let origin = Geographic::new(46.5, 3.0);
        let back = to_wgs84(to_lambert93(origin));
        assert!((back.lat - origin.lat).abs() < 1e-9);
        assert!((back.lon - origin.lon).abs() < 1e-9);
    }

    #[test]
    fn test_origin_maps_to_false_offsets() {
        // Le point origine de la projection tombe sur le false easting /
        // northing
        let p = to_lambert93(Geographic::new(46.5, 3.0));
        assert!((p.x - 700000.0).abs() < 1e-6, "x={}", p.x);
        assert!((p.y - 6600000.0).abs() < 1e-6, "y={}", p.y);
    }
}
