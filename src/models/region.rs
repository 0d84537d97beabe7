//! Supported regions and their currencies
//!
//! The region/currency pairs form a closed one-to-one table. A planning
//! configuration holds either a matching pair or nothing at all, which is
//! what [`GeoSelection`] enforces.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported planning region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    India,
    #[serde(rename = "USA")]
    Usa,
    #[serde(rename = "UK")]
    Uk,
    Eurozone,
    Japan,
    Australia,
    Canada,
}

/// A supported three-letter currency code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Inr,
    Usd,
    Gbp,
    Eur,
    Jpy,
    Aud,
    Cad,
}

/// The region ↔ currency table, in display order
pub const REGION_CURRENCIES: [(Region, Currency); 7] = [
    (Region::India, Currency::Inr),
    (Region::Usa, Currency::Usd),
    (Region::Uk, Currency::Gbp),
    (Region::Eurozone, Currency::Eur),
    (Region::Japan, Currency::Jpy),
    (Region::Australia, Currency::Aud),
    (Region::Canada, Currency::Cad),
];

impl Region {
    /// All regions in display order
    pub fn all() -> impl Iterator<Item = Region> {
        REGION_CURRENCIES.iter().map(|(region, _)| *region)
    }

    /// The currency used in this region
    pub fn currency(&self) -> Currency {
        match self {
            Self::India => Currency::Inr,
            Self::Usa => Currency::Usd,
            Self::Uk => Currency::Gbp,
            Self::Eurozone => Currency::Eur,
            Self::Japan => Currency::Jpy,
            Self::Australia => Currency::Aud,
            Self::Canada => Currency::Cad,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::India => "India",
            Self::Usa => "USA",
            Self::Uk => "UK",
            Self::Eurozone => "Eurozone",
            Self::Japan => "Japan",
            Self::Australia => "Australia",
            Self::Canada => "Canada",
        }
    }
}

impl Currency {
    /// All currencies in display order
    pub fn all() -> impl Iterator<Item = Currency> {
        REGION_CURRENCIES.iter().map(|(_, currency)| *currency)
    }

    /// The unique region that uses this currency
    pub fn region(&self) -> Region {
        match self {
            Self::Inr => Region::India,
            Self::Usd => Region::Usa,
            Self::Gbp => Region::Uk,
            Self::Eur => Region::Eurozone,
            Self::Jpy => Region::Japan,
            Self::Aud => Region::Australia,
            Self::Cad => Region::Canada,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Inr => "INR",
            Self::Usd => "USD",
            Self::Gbp => "GBP",
            Self::Eur => "EUR",
            Self::Jpy => "JPY",
            Self::Aud => "AUD",
            Self::Cad => "CAD",
        }
    }

    /// Symbol used when formatting amounts
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Inr => "₹",
            Self::Usd => "$",
            Self::Gbp => "£",
            Self::Eur => "€",
            Self::Jpy => "¥",
            Self::Aud => "A$",
            Self::Cad => "C$",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Region::all()
            .find(|region| region.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unsupported region: {}", s))
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Currency::all()
            .find(|currency| currency.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unsupported currency: {}", s))
    }
}

/// Region and currency chosen together
///
/// Both fields are always either a pair from [`REGION_CURRENCIES`] or both
/// empty; the only way to change them is through the two `select_*` methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GeoSelection {
    region: Option<Region>,
    currency: Option<Currency>,
}

impl GeoSelection {
    pub fn region(&self) -> Option<Region> {
        self.region
    }

    pub fn currency(&self) -> Option<Currency> {
        self.currency
    }

    /// Select a region; its currency follows
    pub fn select_region(&mut self, region: Option<Region>) {
        self.region = region;
        self.currency = region.map(|r| r.currency());
    }

    /// Select a currency; the region that uses it follows
    pub fn select_currency(&mut self, currency: Option<Currency>) {
        self.currency = currency;
        self.region = currency.map(|c| c.region());
    }

    /// Select a region by name, clearing both fields for unknown names
    pub fn select_region_named(&mut self, name: &str) {
        self.select_region(name.parse().ok());
    }

    /// Select a currency by code, clearing both fields for unknown codes
    pub fn select_currency_coded(&mut self, code: &str) {
        self.select_currency(code.parse().ok());
    }

    pub fn is_empty(&self) -> bool {
        self.region.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_bijective() {
        for (region, currency) in REGION_CURRENCIES {
            assert_eq!(region.currency(), currency);
            assert_eq!(currency.region(), region);
        }
        let mut codes: Vec<_> = Currency::all().map(|c| c.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), REGION_CURRENCIES.len());
    }

    #[test]
    fn test_select_region_sets_currency() {
        let mut geo = GeoSelection::default();
        for region in Region::all() {
            geo.select_region(Some(region));
            assert_eq!(geo.region(), Some(region));
            assert_eq!(geo.currency(), Some(region.currency()));
        }
    }

    #[test]
    fn test_select_currency_sets_region() {
        let mut geo = GeoSelection::default();
        geo.select_currency(Some(Currency::Jpy));
        assert_eq!(geo.region(), Some(Region::Japan));

        geo.select_currency_coded("gbp");
        assert_eq!(geo.region(), Some(Region::Uk));
        assert_eq!(geo.currency(), Some(Currency::Gbp));
    }

    #[test]
    fn test_clearing_or_unknown_empties_both() {
        let mut geo = GeoSelection::default();
        geo.select_region(Some(Region::Canada));
        geo.select_region(None);
        assert!(geo.is_empty());
        assert_eq!(geo.currency(), None);

        geo.select_region_named("Atlantis");
        assert_eq!(geo, GeoSelection::default());

        geo.select_region(Some(Region::India));
        geo.select_currency_coded("XYZ");
        assert_eq!(geo, GeoSelection::default());
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("usa".parse::<Region>().unwrap(), Region::Usa);
        assert_eq!("Eurozone".parse::<Region>().unwrap(), Region::Eurozone);
        assert!("Mars".parse::<Region>().is_err());
        assert_eq!("cad".parse::<Currency>().unwrap(), Currency::Cad);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Region::Usa).unwrap(), "\"USA\"");
        assert_eq!(serde_json::to_string(&Currency::Inr).unwrap(), "\"INR\"");
    }
}
