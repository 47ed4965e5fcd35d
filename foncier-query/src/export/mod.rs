//! Export des enregistrements normalisés

pub mod geojson;

pub use geojson::{export_to_geojson, to_feature_collection, AsFeature};
