//! GeoJSON export of solved tours.
//!
//! Each stop becomes a `Point` feature with `[lon, lat]` coordinates and
//! `name` / `order` properties, `order` starting at 1.

use std::io::Write;

use serde::Serialize;
use serde_json::{json, Value};

use crate::error::Result;
use crate::geo::Point;
use crate::solver::Solution;

/// Builds a `FeatureCollection` for `solution` over `points`.
///
/// # Examples
///
/// ```
/// use u_geotour::geo::Point;
/// use u_geotour::geojson::to_feature_collection;
/// use u_geotour::solver::solve;
///
/// let points = vec![Point::new("a", 10.0, 20.0), Point::new("b", 11.0, 21.0)];
/// let solution = solve(&points).unwrap();
/// let fc = to_feature_collection(&points, &solution).unwrap();
/// assert_eq!(fc["type"], "FeatureCollection");
/// assert_eq!(fc["features"][0]["geometry"]["coordinates"][0], 20.0);
/// ```
pub fn to_feature_collection<L: Serialize>(
    points: &[Point<L>],
    solution: &Solution,
) -> Result<Value> {
    let features = solution
        .stops(points)
        .map(|stop| -> Result<Value> {
            Ok(json!({
                "type": "Feature",
                "geometry": {
                    "type": "Point",
                    "coordinates": [stop.point.lon(), stop.point.lat()],
                },
                "properties": {
                    "name": serde_json::to_value(stop.point.label())?,
                    "order": stop.ordinal,
                },
            }))
        })
        .collect::<Result<Vec<Value>>>()?;

    Ok(json!({
        "type": "FeatureCollection",
        "features": features,
    }))
}

/// Serializes the `FeatureCollection` for `solution` to `writer`.
pub fn write_feature_collection<L: Serialize, W: Write>(
    writer: W,
    points: &[Point<L>],
    solution: &Solution,
) -> Result<()> {
    let value = to_feature_collection(points, solution)?;
    serde_json::to_writer(writer, &value)?;
    Ok(())
}
