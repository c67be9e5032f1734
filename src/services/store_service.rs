use std::path::Path;

use redb::{Database, ReadableTable, TableDefinition, WriteTransaction};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::error::StoreError;

type Bucket = TableDefinition<'static, &'static str, &'static [u8]>;

const CHAMPS: Bucket = TableDefinition::new("champs");
const ITEMS: Bucket = TableDefinition::new("items");
const SPLASH: Bucket = TableDefinition::new("splash");

/// Named partitions of the store, one per entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Partition {
    Champs,
    Items,
    Splash,
}

impl Partition {
    pub const ALL: [Partition; 3] = [Partition::Champs, Partition::Items, Partition::Splash];

    fn table(self) -> Bucket {
        match self {
            Partition::Champs => CHAMPS,
            Partition::Items => ITEMS,
            Partition::Splash => SPLASH,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Partition::Champs => "champs",
            Partition::Items => "items",
            Partition::Splash => "splash",
        }
    }
}

/// Storage/lookup key for a display name: spaces, underscores, periods and
/// apostrophes are dropped, so `Kai'Sa` -> `KaiSa` and `Dr. Mundo` -> `DrMundo`.
///
/// Used both when writing and when resolving a request, never anything else.
pub fn storage_key(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '_' | '.' | '\'' | '\u{2019}'))
        .collect()
}

/// Handle on the single database file. Readers and the population batch
/// share it; redb serializes writers and gives readers snapshots.
pub struct LolStore {
    db: Database,
}

impl LolStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let db = Database::create(path.as_ref())?;

        // Create every partition up front so readers never see a missing table.
        let txn = db.begin_write()?;
        for partition in Partition::ALL {
            txn.open_table(partition.table())?;
        }
        txn.commit()?;

        debug!(path = %path.as_ref().display(), "store opened");
        Ok(Self { db })
    }

    pub fn begin_batch(&self) -> Result<StoreBatch, StoreError> {
        Ok(StoreBatch {
            txn: self.db.begin_write()?,
        })
    }

    /// `Ok(None)` when the key is absent or its value no longer decodes.
    pub fn get<T: DeserializeOwned>(
        &self,
        partition: Partition,
        key: &str,
    ) -> Result<Option<T>, StoreError> {
        let txn = self.db.begin_read()?;
        let table = txn.open_table(partition.table())?;

        let Some(raw) = table.get(key)? else {
            debug!(partition = partition.name(), key, "key not found");
            return Ok(None);
        };

        match serde_json::from_slice(raw.value()) {
            Ok(entity) => Ok(Some(entity)),
            Err(e) => {
                warn!(
                    partition = partition.name(),
                    key,
                    error = %e,
                    "stored entity does not decode"
                );
                Ok(None)
            }
        }
    }

    /// Every decodable entity of a partition, in key order.
    pub fn scan_all<T: DeserializeOwned>(
        &self,
        partition: Partition,
    ) -> Result<Vec<T>, StoreError> {
        let txn = self.db.begin_read()?;
        let table = txn.open_table(partition.table())?;

        let mut entities = Vec::new();
        for entry in table.iter()? {
            let (key, raw) = entry?;
            match serde_json::from_slice(raw.value()) {
                Ok(entity) => entities.push(entity),
                Err(e) => {
                    warn!(
                        partition = partition.name(),
                        key = key.value(),
                        error = %e,
                        "skipping undecodable entity"
                    );
                }
            }
        }
        Ok(entities)
    }

    pub fn keys(&self, partition: Partition) -> Result<Vec<String>, StoreError> {
        let txn = self.db.begin_read()?;
        let table = txn.open_table(partition.table())?;

        let mut keys = Vec::new();
        for entry in table.iter()? {
            let (key, _) = entry?;
            keys.push(key.value().to_string());
        }
        Ok(keys)
    }
}

/// One write transaction. Nothing is visible to readers until `commit`.
pub struct StoreBatch {
    txn: WriteTransaction,
}

impl StoreBatch {
    /// Serializes `value` and stores it under `key`, replacing any previous value.
    pub fn put<T: Serialize>(
        &mut self,
        partition: Partition,
        key: &str,
        value: &T,
    ) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(value)?;
        let mut table = self.txn.open_table(partition.table())?;
        table.insert(key, bytes.as_slice())?;
        Ok(())
    }

    pub fn commit(self) -> Result<(), StoreError> {
        self.txn.commit()?;
        Ok(())
    }
}
