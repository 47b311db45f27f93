use serde::de::{Deserialize, DeserializeOwned, Deserializer};
use serde::ser::{Serialize, Serializer};

use super::{traits, Profile, Store};

/// Wire configuration for [`Bincode`](super::Bincode) encoding.
///
/// - `Standard`: bincode's variable-length integer encoding.
/// - `Legacy`: the fixed-width encoding of bincode 1.x.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BincodeConfiguration {
    #[default]
    Standard,
    Legacy,
}

/// A store serializes as a plain sequence of its elements; the profile is not encoded.
impl <T: Serialize, P: Profile> Serialize for Store<T, P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.as_slice())
    }
}

impl <'de, T: Deserialize<'de>, P: Profile> Deserialize<'de> for Store<T, P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Store::from)
    }
}

impl <T: Clone, P: Profile> traits::Bincode<T> for Store<T, P> {
    fn bincode(&self, configuration: &BincodeConfiguration) -> anyhow::Result<Vec<u8>>
    where
        T: Serialize,
    {
        let encoded = match configuration {
            BincodeConfiguration::Standard => {
                bincode::serde::encode_to_vec(self, bincode::config::standard())?
            }
            BincodeConfiguration::Legacy => {
                bincode::serde::encode_to_vec(self, bincode::config::legacy())?
            }
        };

        tracing::debug!(elements = self.length_of(), bytes = encoded.len(), ?configuration, "store encoded");
        Ok(encoded)
    }

    fn from_bincode(bytes: &[u8], configuration: &BincodeConfiguration) -> anyhow::Result<Self>
    where
        T: DeserializeOwned,
    {
        let (store, consumed): (Self, usize) = match configuration {
            BincodeConfiguration::Standard => {
                bincode::serde::decode_from_slice(bytes, bincode::config::standard())?
            }
            BincodeConfiguration::Legacy => {
                bincode::serde::decode_from_slice(bytes, bincode::config::legacy())?
            }
        };

        if consumed != bytes.len() {
            anyhow::bail!(
                "trailing bytes after encoded store: consumed {} of {}",
                consumed,
                bytes.len()
            );
        }

        tracing::debug!(elements = store.length_of(), bytes = consumed, ?configuration, "store decoded");
        Ok(store)
    }
}
