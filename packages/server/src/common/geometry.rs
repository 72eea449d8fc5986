//! Geometry capture from the map draw plugin.
//!
//! The front end forwards the draw plugin's state as-is: every finished
//! feature plus the most recently touched one. Coordinates are GeoJSON
//! positions, so longitude comes first.

use geo_types::{Coord, LineString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("unsupported geometry type '{0}', draw a polygon or rectangle")]
    Unsupported(String),

    #[error("polygon has no rings")]
    NoRings,

    #[error("invalid coordinates: {0}")]
    InvalidCoordinates(String),
}

/// Draw plugin state posted by the map front end.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrawOutput {
    #[serde(default)]
    pub all_draw_features: Vec<DrawFeature>,
    #[serde(default)]
    pub last_active_drawing: Option<DrawFeature>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawFeature {
    #[serde(default)]
    pub geometry: Option<DrawnGeometry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawnGeometry {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub coordinates: serde_json::Value,
}

impl DrawOutput {
    /// The geometry to extract: first finished feature, otherwise the active drawing.
    pub fn selected_geometry(&self) -> Option<&DrawnGeometry> {
        self.all_draw_features
            .first()
            .and_then(|f| f.geometry.as_ref())
            .or_else(|| {
                self.last_active_drawing
                    .as_ref()
                    .and_then(|f| f.geometry.as_ref())
            })
    }

    /// Outer ring of the selected polygon. `Ok(None)` when nothing was drawn.
    pub fn polygon(&self) -> Result<Option<DrawnPolygon>, GeometryError> {
        self.selected_geometry()
            .map(DrawnPolygon::try_from)
            .transpose()
    }
}

/// Outer ring of a drawn polygon, vertices exactly as captured.
///
/// No closing vertex is added or removed, and self-intersections are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawnPolygon(LineString<f64>);

impl DrawnPolygon {
    /// Build from (longitude, latitude) pairs.
    pub fn from_lon_lat(points: &[(f64, f64)]) -> Self {
        Self(LineString::new(
            points.iter().map(|&(x, y)| Coord { x, y }).collect(),
        ))
    }

    pub fn vertex_count(&self) -> usize {
        self.0.0.len()
    }

    /// Vertices as (longitude, latitude) pairs.
    pub fn lon_lat(&self) -> Vec<(f64, f64)> {
        self.0.coords().map(|c| (c.x, c.y)).collect()
    }

    pub fn exterior(&self) -> &LineString<f64> {
        &self.0
    }
}

impl TryFrom<&DrawnGeometry> for DrawnPolygon {
    type Error = GeometryError;

    fn try_from(geometry: &DrawnGeometry) -> Result<Self, Self::Error> {
        if geometry.kind != "Polygon" {
            return Err(GeometryError::Unsupported(geometry.kind.clone()));
        }

        let rings: Vec<Vec<Vec<f64>>> = serde_json::from_value(geometry.coordinates.clone())
            .map_err(|e| GeometryError::InvalidCoordinates(e.to_string()))?;
        let outer = rings.into_iter().next().ok_or(GeometryError::NoRings)?;

        let coords = outer
            .into_iter()
            .map(|position| match position.as_slice() {
                [lon, lat, ..] => Ok(Coord { x: *lon, y: *lat }),
                _ => Err(GeometryError::InvalidCoordinates(format!(
                    "position needs longitude and latitude, got {:?}",
                    position
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self(LineString::new(coords)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn polygon_feature(ring: serde_json::Value) -> serde_json::Value {
        json!({
            "type": "Feature",
            "properties": {},
            "geometry": {"type": "Polygon", "coordinates": [ring]}
        })
    }

    #[test]
    fn test_prefers_first_finished_feature() {
        let output: DrawOutput = serde_json::from_value(json!({
            "all_draw_features": [
                polygon_feature(json!([[-71.0, 42.0], [-70.0, 42.0], [-70.0, 43.0], [-71.0, 42.0]])),
                polygon_feature(json!([[1.0, 1.0], [2.0, 1.0], [2.0, 2.0], [1.0, 1.0]]))
            ],
            "last_active_drawing": polygon_feature(json!([[5.0, 5.0], [6.0, 5.0], [6.0, 6.0]]))
        }))
        .unwrap();

        let polygon = output.polygon().unwrap().unwrap();
        assert_eq!(polygon.vertex_count(), 4);
        assert_eq!(polygon.lon_lat()[0], (-71.0, 42.0));
    }

    #[test]
    fn test_falls_back_to_last_active_drawing() {
        let output: DrawOutput = serde_json::from_value(json!({
            "all_draw_features": [],
            "last_active_drawing": polygon_feature(json!([[5.0, 5.0], [6.0, 5.0], [6.0, 6.0]]))
        }))
        .unwrap();

        let polygon = output.polygon().unwrap().unwrap();
        assert_eq!(polygon.lon_lat(), vec![(5.0, 5.0), (6.0, 5.0), (6.0, 6.0)]);
    }

    #[test]
    fn test_nothing_drawn() {
        let output: DrawOutput = serde_json::from_value(json!({})).unwrap();
        assert_eq!(output.polygon(), Ok(None));

        let output: DrawOutput =
            serde_json::from_value(json!({"last_active_drawing": null})).unwrap();
        assert_eq!(output.polygon(), Ok(None));
    }

    #[test]
    fn test_ring_kept_as_drawn() {
        // Open ring and an altitude component: neither is "fixed".
        let output: DrawOutput = serde_json::from_value(json!({
            "all_draw_features": [polygon_feature(json!([[0.0, 0.0, 12.5], [1.0, 0.0], [1.0, 1.0]]))]
        }))
        .unwrap();

        let polygon = output.polygon().unwrap().unwrap();
        assert_eq!(polygon.lon_lat(), vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
    }

    #[test]
    fn test_rejects_non_polygon_geometry() {
        let output: DrawOutput = serde_json::from_value(json!({
            "all_draw_features": [{
                "type": "Feature",
                "geometry": {"type": "Point", "coordinates": [-71.0, 42.0]}
            }]
        }))
        .unwrap();

        assert_eq!(
            output.polygon(),
            Err(GeometryError::Unsupported("Point".to_string()))
        );
    }

    #[test]
    fn test_rejects_short_positions() {
        let geometry = DrawnGeometry {
            kind: "Polygon".to_string(),
            coordinates: json!([[[1.0], [2.0, 3.0]]]),
        };
        assert!(matches!(
            DrawnPolygon::try_from(&geometry),
            Err(GeometryError::InvalidCoordinates(_))
        ));
    }

    #[test]
    fn test_polygon_without_rings() {
        let geometry = DrawnGeometry {
            kind: "Polygon".to_string(),
            coordinates: json!([]),
        };
        assert_eq!(DrawnPolygon::try_from(&geometry), Err(GeometryError::NoRings));
    }
}
