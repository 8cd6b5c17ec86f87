//! Approximate closed tours over geographic points.
//!
//! Given latitude/longitude points, builds a short cyclic route that visits
//! each point once:
//!
//! - **Distance matrix**: pairwise great-circle distances (haversine, km).
//! - **Nearest-neighbor construction**: greedy tour from point 0 with
//!   lowest-index tie-breaks.
//! - **2-opt improvement**: first-improvement segment reversal until no
//!   single exchange shortens the tour.
//! - **Solver**: the three stages chained, with views for output writers.
//!
//! All stages are deterministic: identical input yields identical tours.
//!
//! # Features
//!
//! - `parallel`: build distance matrix rows on the rayon pool.
//! - `serde`: `Serialize`/`Deserialize` for points, tours and enums.
//! - `geojson`: export solved tours as a GeoJSON `FeatureCollection`.
//!
//! # Examples
//!
//! ```
//! use u_geotour::geo::Point;
//! use u_geotour::solver::solve;
//!
//! let cities = vec![
//!     Point::new("Berlin", 52.5200, 13.4050),
//!     Point::new("Hamburg", 53.5511, 9.9937),
//!     Point::new("Munich", 48.1351, 11.5820),
//!     Point::new("Cologne", 50.9375, 6.9603),
//! ];
//! let solution = solve(&cities).unwrap();
//! assert_eq!(solution.len(), 4);
//! assert_eq!(solution.order()[0], 0);
//! println!("{}", solution.itinerary(&cities));
//! ```

pub mod construct;
pub mod distance;
mod error;
pub mod geo;
#[cfg(feature = "geojson")]
pub mod geojson;
pub mod solver;
pub mod tour;
pub mod two_opt;

pub use error::{Error, Result};
