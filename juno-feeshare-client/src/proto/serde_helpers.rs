//! JSON conventions of the cosmos REST gateway.

/// 64 bit integers are sent as strings, plain numbers and `null` are accepted too.
pub(crate) mod u64_string {
    use serde::{de, Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Str(String),
        Num(u64),
    }

    pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        match Option::<Repr>::deserialize(deserializer)? {
            None => Ok(0),
            Some(Repr::Num(value)) => Ok(value),
            Some(Repr::Str(value)) if value.is_empty() => Ok(0),
            Some(Repr::Str(value)) => value.parse().map_err(de::Error::custom),
        }
    }
}

/// Bytes are sent as base64 strings.
pub(crate) mod base64_bytes {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        let encoded = subtle_encoding::base64::encode(value);
        serializer.serialize_str(&String::from_utf8_lossy(&encoded))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(vec![]),
            Some(value) => subtle_encoding::base64::decode(value.as_bytes())
                .map_err(|err| de::Error::custom(err.to_string())),
        }
    }
}
