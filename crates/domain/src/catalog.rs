//! Static country and visa-office catalog.
//!
//! Five countries are compiled into the application; there is no network
//! fetch and no runtime mutation. Office names are NOT unique across
//! countries (most lists contain "Ankara"), which is why changing the
//! selected country must clear the selected offices.

use serde::{Deserialize, Serialize};

/// Identifier of a supported destination country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CountryId {
    /// Hollanda
    #[default]
    Netherlands,
    /// Almanya
    Germany,
    /// İtalya
    Italy,
    /// Norveç
    Norway,
    /// Kanada
    Canada,
}

impl CountryId {
    /// All supported countries, in display order.
    pub const ALL: [CountryId; 5] = [
        CountryId::Netherlands,
        CountryId::Germany,
        CountryId::Italy,
        CountryId::Norway,
        CountryId::Canada,
    ];

    /// Stable lowercase key, matching the serialized form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CountryId::Netherlands => "netherlands",
            CountryId::Germany => "germany",
            CountryId::Italy => "italy",
            CountryId::Norway => "norway",
            CountryId::Canada => "canada",
        }
    }

    /// Catalog record for this country.
    #[must_use]
    pub fn info(self) -> &'static Country {
        match self {
            CountryId::Netherlands => &Country {
                name: "Hollanda",
                offices: &[
                    "Ankara",
                    "Antalya",
                    "Bursa",
                    "Edirne",
                    "Gaziantep",
                    "İstanbul (Altunizade)",
                    "İstanbul (Beyoğlu)",
                    "İzmir",
                ],
            },
            CountryId::Germany => {
                &Country { name: "Almanya", offices: &["Ankara", "İstanbul", "İzmir"] }
            }
            CountryId::Italy => &Country { name: "İtalya", offices: &["Ankara", "İstanbul"] },
            CountryId::Norway => &Country { name: "Norveç", offices: &["Ankara"] },
            CountryId::Canada => &Country { name: "Kanada", offices: &["Ankara", "İstanbul"] },
        }
    }

    /// Returns `true` when `office` belongs to this country's office list.
    #[must_use]
    pub fn has_office(self, office: &str) -> bool {
        self.info().offices.contains(&office)
    }
}

/// One catalog record: display name plus the ordered office list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Country {
    /// Display name as shown in the country selector.
    pub name: &'static str,
    /// Visa application offices, in display order.
    pub offices: &'static [&'static str],
}

/// Iterates the full catalog in display order.
pub fn catalog() -> impl Iterator<Item = (CountryId, &'static Country)> {
    CountryId::ALL.into_iter().map(|id| (id, id.info()))
}
