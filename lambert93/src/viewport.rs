//! Normalisation de l'emprise visible de la carte
//!
//! Deux coins quelconques (dans n'importe quel ordre) produisent un
//! rectangle canonique, géographique ou projeté.

use serde::Serialize;

use crate::projection::to_lambert93;
use crate::Geographic;

/// Emprise géographique normalisée (nord >= sud, est >= ouest)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewportRect {
    /// Latitude nord en degrés
    pub north: f64,
    /// Latitude sud en degrés
    pub south: f64,
    /// Longitude est en degrés
    pub east: f64,
    /// Longitude ouest en degrés
    pub west: f64,
}

impl ViewportRect {
    /// Construit l'emprise depuis deux coins quelconques
    ///
    /// Aucune hypothèse sur l'ordre des coins: min/max élément par élément.
    pub fn from_corners(a: Geographic, b: Geographic) -> Self {
        Self {
            north: a.lat.max(b.lat),
            south: a.lat.min(b.lat),
            east: a.lon.max(b.lon),
            west: a.lon.min(b.lon),
        }
    }

    /// Coin nord-ouest
    pub fn top_left(&self) -> Geographic {
        Geographic::new(self.north, self.west)
    }

    /// Coin sud-est
    pub fn bottom_right(&self) -> Geographic {
        Geographic::new(self.south, self.east)
    }
}

/// Rectangle en coordonnées planes Lambert 93 (mètres)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectedRect {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ProjectedRect {
    /// Largeur de l'emprise en mètres
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Hauteur de l'emprise en mètres
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Surface de l'emprise en km²
    pub fn area_km2(&self) -> f64 {
        self.width() * self.height() / 1_000_000.0
    }

    /// Conversion vers `geo::Rect` pour l'écosystème géospatial
    pub fn to_rect(&self) -> geo::Rect<f64> {
        geo::Rect::new(
            geo::Coord {
                x: self.x_min,
                y: self.y_min,
            },
            geo::Coord {
                x: self.x_max,
                y: self.y_max,
            },
        )
    }
}

/// Projette deux coins et produit un rectangle canonique
///
/// Commutative en ses deux arguments: le min/max élément par élément
/// garantit x_min <= x_max et y_min <= y_max quel que soit l'ordre des
/// coins fournis.
pub fn normalize_viewport(a: Geographic, b: Geographic) -> ProjectedRect {
    let pa = to_lambert93(a);
    let pb = to_lambert93(b);

    ProjectedRect {
        x_min: pa.x.min(pb.x),
        x_max: pa.x.max(pb.x),
        y_min: pa.y.min(pb.y),
        y_max: pa.y.max(pb.y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_rect_orders_corners() {
        let r = ViewportRect::from_corners(
            Geographic::new(47.20, -1.50),
            Geographic::new(47.25, -1.60),
        );
        assert_eq!(r.north, 47.25);
        assert_eq!(r.south, 47.20);
        assert_eq!(r.east, -1.50);
        assert_eq!(r.west, -1.60);
        assert_eq!(r.top_left(), Geographic::new(47.25, -1.60));
        assert_eq!(r.bottom_right(), Geographic::new(47.20, -1.50));
    }

    #[test]
    fn test_normalize_viewport_commutative() {
        let a = Geographic::new(47.25, -1.60);
        let b = Geographic::new(47.20, -1.50);
        assert_eq!(normalize_viewport(a, b), normalize_viewport(b, a));
    }

    #[test]
    fn test_normalize_viewport_ordering_invariant() {
        // Coins arbitraires, y compris hors domaine: le rectangle reste
        // canonique
        let corners = [
            (Geographic::new(48.0, 2.0), Geographic::new(44.0, 6.0)),
            (Geographic::new(44.0, 6.0), Geographic::new(48.0, 2.0)),
            (Geographic::new(-10.0, 50.0), Geographic::new(60.0, -20.0)),
        ];
        for (a, b) in corners {
            let r = normalize_viewport(a, b);
            assert!(r.x_min <= r.x_max, "x_min={} x_max={}", r.x_min, r.x_max);
            assert!(r.y_min <= r.y_max, "y_min={} y_max={}", r.y_min, r.y_max);
        }
    }

    #[test]
    fn test_nantes_viewport_area() {
        // Emprise ~5km x 7km autour de Nantes
        let r = normalize_viewport(
            Geographic::new(47.25, -1.60),
            Geographic::new(47.20, -1.50),
        );
        let area = r.area_km2();
        assert!(area > 30.0 && area < 60.0, "area={} km²", area);
    }

    #[test]
    fn test_degenerate_viewport() {
        let p = Geographic::new(47.0, -1.5);
        let r = normalize_viewport(p, p);
        assert_eq!(r.width(), 0.0);
        assert_eq!(r.height(), 0.0);
        assert_eq!(r.area_km2(), 0.0);
    }

    #[test]
    fn test_to_rect() {
        let r = normalize_viewport(
            Geographic::new(47.25, -1.60),
            Geographic::new(47.20, -1.50),
        );
        let rect = r.to_rect();
        assert_eq!(rect.min().x, r.x_min);
        assert_eq!(rect.max().y, r.y_max);
    }
}
