//! Geographic points and great-circle distance.
//!
//! Distances are computed with the haversine formula on a sphere of radius
//! [`EARTH_RADIUS_KM`].
//!
//! # Reference
//!
//! Sinnott, R.W. (1984). "Virtues of the Haversine", *Sky and Telescope* 68(2), 159.

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

const NINETY: f64 = 90.0;
const ONE_EIGHTY: f64 = NINETY * 2.0;

/// A labelled point in decimal degrees.
///
/// The label is opaque to the solver; it is carried so that output writers
/// can name each stop of the tour.
///
/// # Examples
///
/// ```
/// use u_geotour::geo::Point;
///
/// let paris = Point::new("Paris", 48.8566, 2.3522);
/// assert_eq!(paris.label(), &"Paris");
/// assert!(paris.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point<L = String> {
    label: L,
    lat: f64,
    lon: f64,
}

impl<L> Point<L> {
    pub fn new(label: L, lat: f64, lon: f64) -> Self {
        Self { label, lat, lon }
    }

    pub fn label(&self) -> &L {
        &self.label
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// `(lat, lon)` in degrees.
    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }

    /// Great-circle distance to `other` in kilometers.
    pub fn distance_km<M>(&self, other: &Point<M>) -> f64 {
        haversine_km(self.coords(), other.coords())
    }

    /// Returns `true` if both coordinates are finite and inside
    /// `[-90, 90] x [-180, 180]`.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-NINETY..=NINETY).contains(&self.lat)
            && (-ONE_EIGHTY..=ONE_EIGHTY).contains(&self.lon)
    }
}

/// Haversine distance in kilometers between two `(lat, lon)` pairs in degrees.
///
/// The haversine term is clamped to `[0, 1]` so rounding near coincident or
/// antipodal points cannot push `asin` outside its domain. Non-finite input
/// propagates as NaN.
///
/// # Examples
///
/// ```
/// use u_geotour::geo::haversine_km;
///
/// let d = haversine_km((0.0, 0.0), (0.0, 1.0));
/// assert!((d - 111.195).abs() < 1e-3);
/// ```
pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lon1) = from;
    let (lat2, lon2) = to;
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let s1 = (d_phi / 2.0).sin();
    let s2 = (d_lambda / 2.0).sin();
    let a = s1 * s1 + phi1.cos() * phi2.cos() * s2 * s2;
    // NaN passes through clamp unchanged.
    let a = a.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}
