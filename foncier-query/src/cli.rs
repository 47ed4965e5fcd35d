//! Définition et implémentation des commandes CLI
//!
//! CLI simplifiée:
//! - `to-lambert` / `to-wgs84`: conversions ponctuelles
//! - `bbox`: normalisation d'emprise
//! - `params`: composition des paramètres de requête d'un jeu de données
//! - `normalize`: normalisation d'une réponse sauvegardée, export GeoJSON

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use tracing::{info, warn};

use lambert93::{
    is_within_service_area, normalize_viewport, to_lambert93, to_wgs84, Geographic, Projected,
    ViewportRect,
};

use foncier_query::config::{ApiConfig, Defaults};
use foncier_query::export::{export_to_geojson, AsFeature};
use foncier_query::filters::{
    compose_dpe_params, compose_dvf_params, compose_parcelle_params, DateFilter, DpeFilters,
    DvfFilters, EnergyClassFilter, FilterValue, ParcelleFilters,
};
use foncier_query::normalize::{normalize_dpe, normalize_dvf, normalize_parcelles};

/// Jeux de données interrogeables
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Dataset {
    /// Mutations foncières (ventes)
    Dvf,
    /// Diagnostics de performance énergétique
    Dpe,
    /// Parcelles cadastrales
    Parcelles,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convertit une position WGS84 vers Lambert 93
    ToLambert {
        /// Latitude en degrés décimaux
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Longitude en degrés décimaux
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
    },

    /// Convertit une position Lambert 93 vers WGS84
    ToWgs84 {
        /// Easting en mètres
        #[arg(long, allow_negative_numbers = true)]
        x: f64,

        /// Northing en mètres
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
    },

    /// Normalise une emprise depuis deux coins quelconques
    Bbox {
        /// Premier coin au format "lat,lon"
        #[arg(long, value_parser = parse_corner, allow_hyphen_values = true)]
        corner_a: Geographic,

        /// Second coin au format "lat,lon"
        #[arg(long, value_parser = parse_corner, allow_hyphen_values = true)]
        corner_b: Geographic,
    },

    /// Compose les paramètres de requête d'un jeu de données
    Params {
        /// Jeu de données cible
        #[arg(long, value_enum)]
        dataset: Dataset,

        /// Premier coin de l'emprise au format "lat,lon"
        #[arg(long, value_parser = parse_corner, allow_hyphen_values = true)]
        corner_a: Geographic,

        /// Second coin de l'emprise au format "lat,lon"
        #[arg(long, value_parser = parse_corner, allow_hyphen_values = true)]
        corner_b: Geographic,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Normalise une réponse sauvegardée du backend
    Normalize {
        /// Jeu de données d'origine du payload
        #[arg(long, value_enum)]
        dataset: Dataset,

        /// Fichier JSON contenant la réponse brute
        #[arg(short, long)]
        input: PathBuf,

        /// Fichier GeoJSON de sortie (résumé seul sinon)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Saisies de filtres, toutes optionnelles
///
/// La valeur exacte d'un attribut gagne sur son intervalle; un intervalle
/// partiel est complété comme le ferait le formulaire.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Prix exact (€)
    #[arg(long)]
    pub prix_exact: Option<f64>,

    /// Prix minimal (€)
    #[arg(long)]
    pub prix_min: Option<f64>,

    /// Prix maximal (€)
    #[arg(long)]
    pub prix_max: Option<f64>,

    /// Date de mutation exacte (YYYY-MM-DD)
    #[arg(long)]
    pub date_exacte: Option<String>,

    /// Début de l'intervalle de dates (YYYY-MM-DD)
    #[arg(long)]
    pub date_min: Option<String>,

    /// Fin de l'intervalle de dates (YYYY-MM-DD)
    #[arg(long)]
    pub date_max: Option<String>,

    /// Surface exacte (m²)
    #[arg(long)]
    pub surface_exacte: Option<f64>,

    /// Surface minimale (m²)
    #[arg(long)]
    pub surface_min: Option<f64>,

    /// Surface maximale (m²)
    #[arg(long)]
    pub surface_max: Option<f64>,

    /// Classes énergétiques cochées (ex: A,B,C)
    #[arg(long, value_delimiter = ',')]
    pub classes: Vec<String>,

    /// Classe énergétique exacte
    #[arg(long)]
    pub classe_exacte: Option<String>,

    /// Classe énergétique minimale de l'intervalle
    #[arg(long)]
    pub classe_min: Option<String>,

    /// Classe énergétique maximale de l'intervalle
    #[arg(long)]
    pub classe_max: Option<String>,

    /// Consommation exacte (kWh/m²/an)
    #[arg(long)]
    pub conso_exacte: Option<f64>,

    /// Consommation minimale (kWh/m²/an)
    #[arg(long)]
    pub conso_min: Option<f64>,

    /// Consommation maximale (kWh/m²/an)
    #[arg(long)]
    pub conso_max: Option<f64>,

    /// Nombre maximal de résultats
    #[arg(long)]
    pub limit: Option<u32>,
}

/// Exécute la conversion WGS84 -> Lambert 93
pub fn cmd_to_lambert(lat: f64, lon: f64) -> Result<()> {
    let point = Geographic::new(lat, lon);
    if !is_within_service_area(point) {
        warn!(lat, lon, "position hors France métropolitaine");
    }

    let projected = to_lambert93(point);
    println!("{}", serde_json::to_string_pretty(&projected)?);

    Ok(())
}

/// Exécute la conversion Lambert 93 -> WGS84
pub fn cmd_to_wgs84(x: f64, y: f64) -> Result<()> {
    let geographic = to_wgs84(Projected::new(x, y));
    if !is_within_service_area(geographic) {
        warn!(
            lat = geographic.lat,
            lon = geographic.lon,
            "position hors France métropolitaine"
        );
    }

    println!("{}", serde_json::to_string_pretty(&geographic)?);

    Ok(())
}

/// Exécute la normalisation d'emprise
pub fn cmd_bbox(corner_a: Geographic, corner_b: Geographic) -> Result<()> {
    let rect = normalize_viewport(corner_a, corner_b);

    println!("{}", serde_json::to_string_pretty(&rect)?);
    println!("Surface: {:.2} km²", rect.area_km2());

    Ok(())
}

/// Exécute la composition des paramètres de requête
pub fn cmd_params(
    dataset: Dataset,
    corner_a: Geographic,
    corner_b: Geographic,
    args: &FilterArgs,
) -> Result<()> {
    let api = ApiConfig::from_env();
    let defaults = Defaults::default();

    let endpoint = match dataset {
        Dataset::Dvf => api.dvf_endpoint(),
        Dataset::Dpe => api.dpe_endpoint(),
        Dataset::Parcelles => api.parcelles_endpoint(),
    };

    let params = match dataset {
        Dataset::Dvf => {
            let viewport = ViewportRect::from_corners(corner_a, corner_b);
            let filters = DvfFilters {
                price: FilterValue::from_parts(
                    args.prix_exact,
                    args.prix_min,
                    args.prix_max,
                    defaults.price_ceiling,
                ),
                date: DateFilter::from_parts(
                    args.date_exacte.clone(),
                    args.date_min.clone(),
                    args.date_max.clone(),
                ),
                surface: FilterValue::from_parts(
                    args.surface_exacte,
                    args.surface_min,
                    args.surface_max,
                    defaults.surface_ceiling,
                ),
                energy_class: energy_class_filter(args),
                limit: args.limit,
            };
            compose_dvf_params(&viewport, &filters, &defaults)
        }
        Dataset::Dpe => {
            let bbox = normalize_viewport(corner_a, corner_b);
            let filters = DpeFilters {
                classes: args.classes.clone(),
                consumption: FilterValue::from_parts(
                    args.conso_exacte,
                    args.conso_min,
                    args.conso_max,
                    defaults.consumption_fill_max,
                ),
                surface: FilterValue::from_parts(
                    args.surface_exacte,
                    args.surface_min,
                    args.surface_max,
                    defaults.surface_ceiling,
                ),
            };
            compose_dpe_params(&bbox, &filters, &defaults)
        }
        Dataset::Parcelles => {
            let bbox = normalize_viewport(corner_a, corner_b);
            let filters = ParcelleFilters {
                surface: FilterValue::from_parts(
                    args.surface_exacte,
                    args.surface_min,
                    args.surface_max,
                    defaults.surface_ceiling,
                ),
            };
            compose_parcelle_params(&bbox, &filters, &defaults)
        }
    };

    info!(count = params.len(), "paramètres composés");
    println!("{}?{}", endpoint, params.to_query_string());

    Ok(())
}

/// Exécute la normalisation d'un payload sauvegardé
pub fn cmd_normalize(dataset: Dataset, input: &Path, output: Option<&Path>) -> Result<()> {
    let payload = std::fs::read_to_string(input)
        .with_context(|| format!("Cannot read {}", input.display()))?;

    match dataset {
        Dataset::Dvf => report_and_export(&normalize_dvf(&payload), "ventes DVF", output),
        Dataset::Dpe => report_and_export(&normalize_dpe(&payload), "diagnostics DPE", output),
        Dataset::Parcelles => {
            report_and_export(&normalize_parcelles(&payload), "parcelles", output)
        }
    }
}

fn report_and_export<T: AsFeature>(records: &[T], label: &str, output: Option<&Path>) -> Result<()> {
    println!("{} {} normalisés", records.len(), label);

    if let Some(path) = output {
        export_to_geojson(records, path)?;
        info!(count = records.len(), output = %path.display(), "export GeoJSON");
        println!("Export: {}", path.display());
    }

    Ok(())
}

/// Priorité des saisies de classe: exacte, puis intervalle, puis ensemble
fn energy_class_filter(args: &FilterArgs) -> EnergyClassFilter {
    if let Some(class) = &args.classe_exacte {
        EnergyClassFilter::Exact(class.clone())
    } else if let (Some(min), Some(max)) = (&args.classe_min, &args.classe_max) {
        EnergyClassFilter::Range(min.clone(), max.clone())
    } else if !args.classes.is_empty() {
        EnergyClassFilter::Selected(args.classes.clone())
    } else {
        EnergyClassFilter::Unset
    }
}

/// Parse un coin au format "lat,lon"
fn parse_corner(raw: &str) -> Result<Geographic, String> {
    let (lat, lon) = raw
        .split_once(',')
        .ok_or_else(|| format!("format attendu \"lat,lon\", reçu \"{}\"", raw))?;

    let lat = lat
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("latitude invalide: {}", e))?;
    let lon = lon
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("longitude invalide: {}", e))?;

    Ok(Geographic::new(lat, lon))
}
