use crate::{from_base64, to_base64, try_from_base64, try_to_base64, Base64Error};

/// Stateless handle over the free functions, for callers that want a value
/// to pass around.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Codec;

impl Codec {
    pub fn encode<T>(&self, input: T) -> String
    where
        T: AsRef<[u8]>,
    {
        to_base64(input.as_ref())
    }

    pub fn decode<T>(&self, input: T) -> Vec<u8>
    where
        T: AsRef<[u8]>,
    {
        from_base64(input)
    }

    pub fn try_encode<T>(&self, input: T) -> Result<String, Base64Error>
    where
        T: AsRef<[u8]>,
    {
        try_to_base64(input.as_ref())
    }

    pub fn try_decode<T>(&self, input: T) -> Result<Vec<u8>, Base64Error>
    where
        T: AsRef<[u8]>,
    {
        try_from_base64(input)
    }
}
