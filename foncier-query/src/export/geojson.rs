//! Export GeoJSON des enregistrements normalisés (points WGS84)

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use geojson::feature::Id;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};

use crate::models::{DpeProperty, DvfProperty, ParcelleProperty};

/// Enregistrement exportable en feature GeoJSON ponctuelle
pub trait AsFeature: serde::Serialize {
    /// Position WGS84 (longitude, latitude)
    fn position(&self) -> (f64, f64);

    /// Identifiant de la feature
    fn feature_id(&self) -> String;
}

impl AsFeature for DvfProperty {
    fn position(&self) -> (f64, f64) {
        (self.longitude, self.latitude)
    }

    fn feature_id(&self) -> String {
        self.id_mutation.clone()
    }
}

impl AsFeature for DpeProperty {
    fn position(&self) -> (f64, f64) {
        (self.longitude, self.latitude)
    }

    fn feature_id(&self) -> String {
        self.id.clone()
    }
}

impl AsFeature for ParcelleProperty {
    fn position(&self) -> (f64, f64) {
        (self.longitude, self.latitude)
    }

    fn feature_id(&self) -> String {
        self.id.clone()
    }
}

/// Construit une FeatureCollection depuis des enregistrements normalisés
///
/// Tous les champs de l'enregistrement partent en propriétés de la
/// feature; la géométrie est le point WGS84.
pub fn to_feature_collection<T: AsFeature>(records: &[T]) -> FeatureCollection {
    let features = records
        .iter()
        .map(|record| {
            let (lon, lat) = record.position();
            Feature {
                bbox: None,
                geometry: Some(Geometry::new(Value::Point(vec![lon, lat]))),
                id: Some(Id::String(record.feature_id())),
                properties: Some(record_properties(record)),
                foreign_members: None,
            }
        })
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

/// Écrit les enregistrements en GeoJSON dans `output_path`
pub fn export_to_geojson<T: AsFeature>(records: &[T], output_path: &Path) -> Result<()> {
    let collection = to_feature_collection(records);

    let file = File::create(output_path)
        .context(format!("Failed to create file: {}", output_path.display()))?;
    let writer = BufWriter::new(file);

    serde_json::to_writer(writer, &collection)
        .context("Failed to serialize FeatureCollection")?;

    Ok(())
}

/// Propriétés = sérialisation serde de l'enregistrement complet
fn record_properties<T: serde::Serialize>(record: &T) -> JsonObject {
    match serde_json::to_value(record) {
        Ok(serde_json::Value::Object(map)) => map,
        _ => JsonObject::new(),
    }
}
