//! Reference instances.
//!
//! - [`turkey_courier_locations`] — a central depot in Tuzla (Istanbul) and
//!   nine intercity delivery points across Turkey
//! - [`random_locations`] — seeded uniform points in a bounding box

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::Location;

/// Latitude/longitude bounds for generated instances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Southern edge.
    pub min_lat: f64,
    /// Northern edge.
    pub max_lat: f64,
    /// Western edge.
    pub min_lon: f64,
    /// Eastern edge.
    pub max_lon: f64,
}

impl BoundingBox {
    /// Mainland Turkey, roughly.
    pub const TURKEY: BoundingBox = BoundingBox {
        min_lat: 36.0,
        max_lat: 42.0,
        min_lon: 26.0,
        max_lon: 45.0,
    };
}

/// Depot plus nine delivery points, depot first.
///
/// # Examples
///
/// ```
/// use tour_route::demo::turkey_courier_locations;
/// use tour_route::models::LocationKind;
///
/// let locations = turkey_courier_locations();
/// assert_eq!(locations.len(), 10);
/// assert_eq!(locations[0].kind(), LocationKind::Depot);
/// assert_eq!(locations[1].city(), Some("Ankara"));
/// ```
pub fn turkey_courier_locations() -> Vec<Location> {
    vec![
        Location::depot("Merkez Depo", 40.8190, 29.3005)
            .with_city("İstanbul")
            .with_address("Tuzla Organize Sanayi Bölgesi, Lojistik Merkezi"),
        Location::new("Ankara Dağıtım Merkezi", 39.9708, 32.6227)
            .with_city("Ankara")
            .with_address("Ostim OSB, 100. Yıl Bulvarı No:52"),
        Location::new("İzmir Şubesi", 38.4362, 27.1428)
            .with_city("İzmir")
            .with_address("Alsancak, Kıbrıs Şehitleri Cad. No:118"),
        Location::new("Bursa Teslim Noktası", 40.2225, 28.8640)
            .with_city("Bursa")
            .with_address("Nilüfer, DOSAB Organize Sanayi"),
        Location::new("Antalya Mağaza", 36.8841, 30.6927)
            .with_city("Antalya")
            .with_address("Konyaaltı, Liman Cad. No:45"),
        Location::new("Konya Deposu", 37.8746, 32.4932)
            .with_city("Konya")
            .with_address("Selçuklu, Büsan Organize Sanayi No:78"),
        Location::new("Denizli Müşterisi", 37.7765, 29.0864)
            .with_city("Denizli")
            .with_address("Merkezefendi, Organize Sanayi Bölgesi No:14"),
        Location::new("Eskişehir Teslimat", 39.7668, 30.5256)
            .with_city("Eskişehir")
            .with_address("Tepebaşı, Organize Sanayi Bölgesi 11. Cad."),
        Location::new("Kayseri Dağıtım", 38.7205, 35.4826)
            .with_city("Kayseri")
            .with_address("Melikgazi, Kayseri OSB 3. Cadde No:22"),
        Location::new("Afyon Aktarma Noktası", 38.7507, 30.5387)
            .with_city("Afyonkarahisar")
            .with_address("Merkez, Afyon-Kütahya Karayolu 5. km"),
    ]
}

/// `n` uniformly drawn points, the first one a depot.
///
/// The same `seed` always yields the same points.
pub fn random_locations(n: usize, bounds: BoundingBox, seed: u64) -> Vec<Location> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            let lat = rng.random_range(bounds.min_lat..=bounds.max_lat);
            let lon = rng.random_range(bounds.min_lon..=bounds.max_lon);
            if i == 0 {
                Location::depot("Depot", lat, lon)
            } else {
                Location::new(format!("Stop {i}"), lat, lon)
            }
        })
        .collect()
}
