//! Binary image payloads (symbols, logos, map images).

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Raw image bytes.
///
/// Serialized as a base64 string, which is also the representation used
/// for inline images in the rendered extract.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct ImagePayload {
    data: Vec<u8>,
}

impl ImagePayload {
    /// Wrap raw image bytes.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self { data: data.into() }
    }

    /// Decode a base64 encoded payload.
    pub fn from_base64(encoded: &str) -> Result<Self, base64::DecodeError> {
        Ok(Self {
            data: BASE64.decode(encoded.trim())?,
        })
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// True when the payload has no bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Base64 encoding of the payload.
    pub fn encode(&self) -> String {
        BASE64.encode(&self.data)
    }
}

impl std::fmt::Debug for ImagePayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ImagePayload({} bytes)", self.data.len())
    }
}

impl Serialize for ImagePayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for ImagePayload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        ImagePayload::from_base64(&encoded).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        let payload = ImagePayload::new(b"png".to_vec());
        assert_eq!(payload.encode(), "cG5n");
    }

    #[test]
    fn test_deserialize_base64() {
        let payload: ImagePayload = serde_json::from_str("\"cG5n\"").unwrap();
        assert_eq!(payload.as_bytes(), b"png");
    }

    #[test]
    fn test_deserialize_rejects_garbage() {
        let result: Result<ImagePayload, _> = serde_json::from_str("\"not base64!\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_debug_hides_bytes() {
        let payload = ImagePayload::new(vec![0u8; 12]);
        assert_eq!(format!("{:?}", payload), "ImagePayload(12 bytes)");
    }
}
