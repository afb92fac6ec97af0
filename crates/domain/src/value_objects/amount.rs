use crate::value_objects::fraction::Fraction;
use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// A token quantity in raw on-chain units.
///
/// `raw` is the unscaled integer amount; the human-readable value is
/// `raw / 10^decimals`, materialized through [`TokenAmount::as_fraction`]
/// only at formatting time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TokenAmount {
    #[serde(with = "u256_dec")]
    pub raw: U256,
    pub decimals: u8,
}

impl TokenAmount {
    pub fn new(raw: impl Into<U256>, decimals: u8) -> Self {
        Self {
            raw: raw.into(),
            decimals,
        }
    }

    pub fn zero(decimals: u8) -> Self {
        Self::new(U256::zero(), decimals)
    }

    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    pub fn as_fraction(&self) -> Fraction {
        Fraction::new(self.raw, U256::exp10(self.decimals as usize))
    }

    pub fn to_significant(&self, digits: u32, group_separator: char) -> Option<String> {
        self.as_fraction().to_significant(digits, group_separator)
    }

    pub fn to_fixed(&self, places: u32, group_separator: char) -> Option<String> {
        self.as_fraction().to_fixed(places, group_separator)
    }
}

/// Serializes the raw amount as a decimal string so snapshot files stay
/// readable and round-trip without hex.
mod u256_dec {
    use primitive_types::U256;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        let text = String::deserialize(deserializer)?;
        U256::from_dec_str(&text).map_err(D::Error::custom)
    }
}
