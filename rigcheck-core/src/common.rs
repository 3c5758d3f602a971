use serde::de::Visitor;
use serde_with::{DeserializeAs, SerializeDisplay};
use std::{fmt::Display, marker::PhantomData, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, SerializeDisplay)]
pub enum Currency {
    USD,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::USD => "$",
        }
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::USD => "USD",
            }
        )
    }
}

/// An illustrative street price attached to an upgrade suggestion.
/// Serializes as display text: whole amounts lose their cents, `$150`.
#[derive(Debug, Clone, Copy, PartialEq, SerializeDisplay)]
pub struct Price {
    pub unit: Currency,
    pub amount: f64,
}

impl Price {
    pub const fn usd(amount: f64) -> Self {
        Self {
            unit: Currency::USD,
            amount,
        }
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.amount.fract() == 0.0 {
            write!(f, "{}{:.0}", self.unit.symbol(), self.amount)
        } else {
            write!(f, "{}{:.2}", self.unit.symbol(), self.amount)
        }
    }
}

/// A number written as text with thousands separators, e.g. a benchmark
/// score of `"19,321"`.
pub struct IgnoreComma<T>
where
    T: FromStr,
{
    _t: PhantomData<T>,
}

impl<'de, T> DeserializeAs<'de, T> for IgnoreComma<T>
where
    T: FromStr,
{
    fn deserialize_as<D>(deserializer: D) -> Result<T, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct Helper<TT>
        where
            TT: FromStr,
        {
            _tt: PhantomData<TT>,
        }

        impl<'de, TT> Visitor<'de> for Helper<TT>
        where
            TT: FromStr,
        {
            type Value = TT;

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                TT::from_str(v.replace(',', "").as_str())
                    .map_err(|_| E::custom(format!("`{}` is not a number", v)))
            }

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a number, optionally with thousands separators")
            }
        }

        deserializer.deserialize_str(Helper::<T> { _tt: PhantomData })
    }
}

/// Case-insensitive substring test. A blank needle never matches.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    !needle.is_empty() && haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Turn a display name into a stable identifier.
/// e.g. "Intel Core i9-13900K" -> "intel-core-i9-13900k"
pub(crate) fn slugify(s: &str) -> String {
    s.split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Round to the nearest integer, halves towards positive infinity, negative ones included.
pub(crate) fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::{contains_ignore_case, round_half_up, slugify, Price};

    #[test]
    fn test_price_display() {
        assert_eq!(Price::usd(150.0).to_string(), "$150");
        assert_eq!(Price::usd(49.5).to_string(), "$49.50");
        assert_eq!(serde_json::to_value(Price::usd(280.0)).unwrap(), "$280");
    }

    #[test]
    fn test_ignore_comma() {
        use serde::Deserialize;
        use serde_with::serde_as;

        #[serde_as]
        #[derive(Deserialize)]
        struct Row {
            #[serde_as(as = "super::IgnoreComma<u32>")]
            passmark: u32,
        }
        let row: Row = serde_json::from_str(r#"{ "passmark": "13,096,340" }"#).unwrap();
        assert_eq!(row.passmark, 13096340);
        assert!(serde_json::from_str::<Row>(r#"{ "passmark": "fast" }"#).is_err());
    }

    #[test]
    fn test_contains_ignore_case() {
        assert_eq!(contains_ignore_case("NVIDIA RTX 4090", "rtx 4090"), true);
        assert_eq!(contains_ignore_case("NVIDIA RTX 4090", "4080"), false);
        assert_eq!(contains_ignore_case("NVIDIA RTX 4090", "   "), false);
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Intel Core i9-13900K"), "intel-core-i9-13900k");
        assert_eq!(slugify("  DDR5 6000MHz 32GB "), "ddr5-6000mhz-32gb");
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(95.15), 95.0);
    }
}
