//! Country boundary providers
//!
//! The customer map draws a country outline under its markers. Where that
//! outline comes from is injected through [`BoundaryProvider`]; the bundled
//! implementation reads a GeoJSON `FeatureCollection` (e.g. a Natural Earth
//! admin-0 countries export) and keys features by one string property.

use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Closed ring of (longitude, latitude) pairs
pub type Ring = Vec<(f64, f64)>;

/// Polygon with an exterior ring and optional holes
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub exterior: Ring,
    pub holes: Vec<Ring>,
}

impl Polygon {
    pub fn rings(&self) -> impl Iterator<Item = &Ring> {
        std::iter::once(&self.exterior).chain(self.holes.iter())
    }
}

/// Supplies outline geometry for a country
pub trait BoundaryProvider: Send + Sync {
    /// Human-readable source name for logs and health output
    fn name(&self) -> &str;

    /// Polygons making up `country`; empty when unknown
    fn outline(&self, country: &str) -> Vec<Polygon>;
}

/// Provider with no geometry; the map shows markers only
#[derive(Debug, Default, Clone, Copy)]
pub struct NoBoundaries;

impl BoundaryProvider for NoBoundaries {
    fn name(&self) -> &str {
        "none"
    }

    fn outline(&self, _country: &str) -> Vec<Polygon> {
        Vec::new()
    }
}

/// Errors loading boundary data
#[derive(Debug, thiserror::Error)]
pub enum BoundaryError {
    #[error("Failed to read boundary file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Invalid GeoJSON: {0}")]
    Parse(String),

    #[error("Shapefile {path:?} is not supported; convert it with `ogr2ogr -f GeoJSON <out.geojson> <in.shp>`")]
    Shapefile { path: PathBuf },
}

/// Outlines parsed from a GeoJSON feature collection
#[derive(Debug, Clone, Default)]
pub struct GeoJsonBoundaries {
    source: String,
    countries: HashMap<String, Vec<Polygon>>,
}

impl GeoJsonBoundaries {
    /// Load a GeoJSON file, grouping features by the string value of `property`
    pub fn from_path(path: &Path, property: &str) -> Result<Self, BoundaryError> {
        let is_shapefile = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("shp"));
        if is_shapefile {
            return Err(BoundaryError::Shapefile {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| BoundaryError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let mut boundaries = Self::parse(&content, property)?;
        boundaries.source = path.display().to_string();

        tracing::info!(
            path = %path.display(),
            countries = boundaries.countries.len(),
            "Loaded country boundaries"
        );
        Ok(boundaries)
    }

    /// Parse GeoJSON text; features lacking `property` or a polygon geometry are skipped
    pub fn parse(content: &str, property: &str) -> Result<Self, BoundaryError> {
        let root: Value =
            serde_json::from_str(content).map_err(|e| BoundaryError::Parse(e.to_string()))?;

        let features = root
            .get("features")
            .and_then(Value::as_array)
            .ok_or_else(|| BoundaryError::Parse("missing \"features\" array".to_string()))?;

        let mut countries: HashMap<String, Vec<Polygon>> = HashMap::new();
        for feature in features {
            let Some(key) = feature
                .get("properties")
                .and_then(|p| p.get(property))
                .and_then(Value::as_str)
            else {
                continue;
            };

            let polygons = feature
                .get("geometry")
                .map(parse_geometry)
                .transpose()?
                .unwrap_or_default();

            countries.entry(key.to_string()).or_default().extend(polygons);
        }

        Ok(Self {
            source: "geojson".to_string(),
            countries,
        })
    }

    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.countries.keys().map(String::as_str)
    }
}

impl BoundaryProvider for GeoJsonBoundaries {
    fn name(&self) -> &str {
        &self.source
    }

    fn outline(&self, country: &str) -> Vec<Polygon> {
        self.countries.get(country).cloned().unwrap_or_default()
    }
}

fn parse_geometry(geometry: &Value) -> Result<Vec<Polygon>, BoundaryError> {
    if geometry.is_null() {
        return Ok(Vec::new());
    }

    let kind = geometry.get("type").and_then(Value::as_str).unwrap_or("");
    let coordinates = geometry.get("coordinates");

    match (kind, coordinates) {
        ("Polygon", Some(coords)) => Ok(vec![parse_polygon(coords)?]),
        ("MultiPolygon", Some(Value::Array(parts))) => parts.iter().map(parse_polygon).collect(),
        ("Polygon" | "MultiPolygon", _) => Err(BoundaryError::Parse(format!(
            "{} without coordinates",
            kind
        ))),
        _ => Ok(Vec::new()),
    }
}

fn parse_polygon(value: &Value) -> Result<Polygon, BoundaryError> {
    let rings = value
        .as_array()
        .ok_or_else(|| BoundaryError::Parse("polygon is not an array of rings".to_string()))?
        .iter()
        .map(parse_ring)
        .collect::<Result<Vec<Ring>, _>>()?;

    let mut rings = rings.into_iter();
    let exterior = rings
        .next()
        .ok_or_else(|| BoundaryError::Parse("polygon has no rings".to_string()))?;

    Ok(Polygon {
        exterior,
        holes: rings.collect(),
    })
}

fn parse_ring(value: &Value) -> Result<Ring, BoundaryError> {
    value
        .as_array()
        .ok_or_else(|| BoundaryError::Parse("ring is not an array".to_string()))?
        .iter()
        .map(|position| {
            let lng = position.get(0).and_then(Value::as_f64);
            let lat = position.get(1).and_then(Value::as_f64);
            match (lng, lat) {
                (Some(lng), Some(lat)) => Ok((lng, lat)),
                _ => Err(BoundaryError::Parse(format!("invalid position: {}", position))),
            }
        })
        .collect()
}

/// Shared provider handle held by the dashboard
pub type SharedBoundaries = Arc<dyn BoundaryProvider>;

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {"SOVEREIGNT": "Brazil", "NAME": "Brazil"},
                "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": [
                        [[[-74.0, 5.0], [-34.0, 5.0], [-34.0, -34.0], [-74.0, -34.0], [-74.0, 5.0]]],
                        [[[-32.5, -3.8], [-32.3, -3.8], [-32.3, -3.9], [-32.5, -3.8]]]
                    ]
                }
            },
            {
                "type": "Feature",
                "properties": {"SOVEREIGNT": "Uruguay"},
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[-58.4, -30.1], [-53.1, -30.1], [-53.1, -35.0], [-58.4, -30.1]]]
                }
            },
            {
                "type": "Feature",
                "properties": {"NAME": "No sovereign"},
                "geometry": null
            }
        ]
    }"#;

    #[test]
    fn test_parse_feature_collection() {
        let boundaries = GeoJsonBoundaries::parse(SAMPLE, "SOVEREIGNT").unwrap();

        let brazil = boundaries.outline("Brazil");
        assert_eq!(brazil.len(), 2);
        assert_eq!(brazil[0].exterior.len(), 5);
        assert_eq!(brazil[0].exterior[0], (-74.0, 5.0));

        assert_eq!(boundaries.outline("Uruguay").len(), 1);
        assert!(boundaries.outline("Chile").is_empty());
        assert_eq!(boundaries.countries().count(), 2);
    }

    #[test]
    fn test_other_property_key() {
        let boundaries = GeoJsonBoundaries::parse(SAMPLE, "NAME").unwrap();
        assert_eq!(boundaries.outline("Brazil").len(), 2);
        assert!(boundaries.outline("No sovereign").is_empty());
    }

    #[test]
    fn test_invalid_documents() {
        assert!(matches!(
            GeoJsonBoundaries::parse("not json", "SOVEREIGNT"),
            Err(BoundaryError::Parse(_))
        ));
        assert!(matches!(
            GeoJsonBoundaries::parse(r#"{"type": "FeatureCollection"}"#, "SOVEREIGNT"),
            Err(BoundaryError::Parse(_))
        ));

        let bad_position = r#"{"features": [{"properties": {"SOVEREIGNT": "Brazil"},
            "geometry": {"type": "Polygon", "coordinates": [[["x", 1.0]]]}}]}"#;
        assert!(GeoJsonBoundaries::parse(bad_position, "SOVEREIGNT").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = GeoJsonBoundaries::from_path(Path::new("/nonexistent/countries.geojson"), "SOVEREIGNT")
            .unwrap_err();
        assert!(matches!(err, BoundaryError::Io { .. }));
    }

    #[test]
    fn test_shapefile_path_names_conversion() {
        let err = GeoJsonBoundaries::from_path(
            Path::new("main_data/country_map/ne_10m_admin_0_countries.shp"),
            "SOVEREIGNT",
        )
        .unwrap_err();

        assert!(matches!(err, BoundaryError::Shapefile { .. }));
        assert!(err.to_string().contains("ogr2ogr"));
    }

    #[test]
    fn test_no_boundaries() {
        assert!(NoBoundaries.outline("Brazil").is_empty());
        assert_eq!(NoBoundaries.name(), "none");
    }
}
