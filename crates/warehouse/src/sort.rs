use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stockyard_core::DomainError;

/// Product listing sort key: a closed set of comparators rather than
/// attribute-name lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Quantity,
    Price,
}

impl FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "quantity" => Ok(Self::Quantity),
            "price" => Ok(Self::Price),
            other => Err(DomainError::invalid_sort_key(other)),
        }
    }
}

impl core::fmt::Display for SortKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            SortKey::Name => "name",
            SortKey::Quantity => "quantity",
            SortKey::Price => "price",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_keys_parse() {
        assert_eq!("name".parse::<SortKey>().unwrap(), SortKey::Name);
        assert_eq!("quantity".parse::<SortKey>().unwrap(), SortKey::Quantity);
        assert_eq!("price".parse::<SortKey>().unwrap(), SortKey::Price);
    }

    #[test]
    fn unrecognized_key_fails_with_invalid_sort_key() {
        let err = "color".parse::<SortKey>().unwrap_err();
        assert_eq!(err, DomainError::InvalidSortKey("color".to_string()));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for key in [SortKey::Name, SortKey::Quantity, SortKey::Price] {
            assert_eq!(key.to_string().parse::<SortKey>().unwrap(), key);
        }
    }
}
