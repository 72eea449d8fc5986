//! Request and response fixtures.

#![allow(dead_code)]

use overpass_client::Element;
use serde_json::{json, Value};

use site_extractor::kernel::test_dependencies::sample_element;

/// Chinatown block, as the draw plugin reports it (lon, lat; closed ring).
pub fn chinatown_ring() -> Value {
    json!([
        [-71.0625, 42.3505],
        [-71.0605, 42.3505],
        [-71.0605, 42.3520],
        [-71.0625, 42.3520],
        [-71.0625, 42.3505]
    ])
}

pub fn draw_with_polygon(ring: Value) -> Value {
    json!({
        "all_draw_features": [{
            "type": "Feature",
            "properties": {},
            "geometry": {"type": "Polygon", "coordinates": [ring]}
        }],
        "last_active_drawing": null
    })
}

pub fn extract_body(view: Option<Value>) -> Value {
    let mut body = json!({ "draw": draw_with_polygon(chinatown_ring()) });
    if let Some(view) = view {
        body["view"] = view;
    }
    body
}

/// Mixed result: two real buildings, one fence, one without a center.
pub fn mixed_elements() -> Vec<Element> {
    vec![
        sample_element(
            101,
            &[
                ("name", "China Trade Center"),
                ("building", "commercial"),
                ("building:levels", "6"),
                ("addr:housenumber", "2"),
                ("addr:street", "Boylston Street"),
                ("addr:postcode", "02116"),
            ],
            Some((42.3521, -71.0629)),
        ),
        sample_element(102, &[("building", "fence")], Some((42.351, -71.061))),
        sample_element(103, &[("building", "apartments")], None),
        sample_element(
            104,
            &[("name", "Café Région"), ("building", "retail")],
            Some((42.3512, -71.0611)),
        ),
    ]
}
