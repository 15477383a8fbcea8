//! Monitored cities.

use serde::Serialize;

/// A monitored location.
///
/// The set is fixed at compile time; [`City::ALL`] holds the order in which
/// readings are always reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum City {
    Patna,
    Varanashi,
    Allahabad,
    Kanpur,
    Munger,
    Bhagalpur,
    Ghazipur,
    Kolkata,
}

impl City {
    /// Every monitored city, in reporting order.
    pub const ALL: [City; 8] = [
        City::Patna,
        City::Varanashi,
        City::Allahabad,
        City::Kanpur,
        City::Munger,
        City::Bhagalpur,
        City::Ghazipur,
        City::Kolkata,
    ];

    /// Returns the display name of the city.
    pub fn name(&self) -> &'static str {
        match self {
            City::Patna => "Patna",
            City::Varanashi => "Varanashi",
            City::Allahabad => "Allahabad",
            City::Kanpur => "Kanpur",
            City::Munger => "Munger",
            City::Bhagalpur => "Bhagalpur",
            City::Ghazipur => "Ghazipur",
            City::Kolkata => "Kolkata",
        }
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
