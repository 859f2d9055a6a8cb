//! Serde helper for the fixed-size sequences of a day record (Big Three,
//! outreach slots, gratitude). Stored sequences of the wrong length are padded
//! with defaults or truncated instead of failing the whole load.

use serde::{Deserialize, Deserializer};

pub fn deserialize<'de, D, T, const N: usize>(deserializer: D) -> Result<[T; N], D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let items = Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(pad(items))
}

pub fn pad<T: Default, const N: usize>(items: Vec<T>) -> [T; N] {
    let mut items = items.into_iter();
    std::array::from_fn(|_| items.next().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Slots {
        #[serde(deserialize_with = "super::deserialize")]
        values: [u8; 3],
    }

    fn slots(raw: &str) -> [u8; 3] {
        serde_json::from_str::<Slots>(raw)
            .expect("slots should parse")
            .values
    }

    #[test]
    fn short_sequences_are_padded_and_long_ones_truncated() {
        assert_eq!(slots(r#"{"values":[1]}"#), [1, 0, 0]);
        assert_eq!(slots(r#"{"values":[1,2,3,4,5]}"#), [1, 2, 3]);
        assert_eq!(slots(r#"{"values":null}"#), [0, 0, 0]);
    }
}
