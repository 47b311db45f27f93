pub use {
    crate::store::{Store, MiniStore},
    crate::store::{Allocation, Length, SnapShot, Bincode, Convertible},
    crate::store::{Profile, Full, Mini},
    crate::{BincodeConfiguration, StoreError},
    crate::{store, mini_store},
};
