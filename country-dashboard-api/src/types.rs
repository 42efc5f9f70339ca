//! Country data model as returned by restcountries v3.1

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::format::group_thousands;

/// Fields requested from the API.
///
/// `/all` rejects requests without `fields` and accepts at most 10 of them.
pub const COUNTRY_FIELDS: &[&str] = &[
    "name",
    "cca3",
    "capital",
    "region",
    "subregion",
    "languages",
    "population",
    "flags",
    "currencies",
    "timezones",
];

/// Common and official name of a country.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryName {
    pub common: String,
    pub official: String,
}

/// Flag image URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    #[serde(default)]
    pub png: String,
    #[serde(default)]
    pub svg: String,
    #[serde(default)]
    pub alt: Option<String>,
}

/// A currency entry keyed by its ISO 4217 code in [`Country::currencies`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
}

/// A country record.
///
/// Many fields are absent for some territories (Antarctica has no capital,
/// no currencies, ...), so everything except `name` defaults when missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: CountryName,
    #[serde(default)]
    pub cca3: String,
    #[serde(default)]
    pub capital: Vec<String>,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub subregion: String,
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub flags: Flags,
    #[serde(default)]
    pub currencies: BTreeMap<String, Currency>,
    #[serde(default)]
    pub timezones: Vec<String>,
}

/// Stable identity of a country within a result set.
///
/// The official name alone is not guaranteed unique, so the alpha-3 code is
/// part of the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CountryKey {
    pub official: String,
    pub cca3: String,
}

impl fmt::Display for CountryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.official, self.cca3)
    }
}

impl Country {
    /// Composite key used for selection and list identity.
    pub fn key(&self) -> CountryKey {
        CountryKey {
            official: self.name.official.clone(),
            cca3: self.cca3.clone(),
        }
    }

    /// Population with thousands separators, e.g. `8,500,000`.
    pub fn formatted_population(&self) -> String {
        group_thousands(self.population)
    }

    /// `"{name} ({symbol})"` for every currency, space separated.
    pub fn currency_summary(&self) -> String {
        self.currencies
            .values()
            .map(|c| format!("{} ({})", c.name, c.symbol))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Language names, space separated.
    pub fn language_summary(&self) -> String {
        self.languages
            .values()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Time zones as one comma separated string.
    pub fn timezone_summary(&self) -> String {
        self.timezones.join(",")
    }

    /// PNG flag URL, falling back to the SVG one.
    pub fn flag_url(&self) -> Option<&str> {
        [self.flags.png.as_str(), self.flags.svg.as_str()]
            .into_iter()
            .find(|url| !url.is_empty())
    }
}
