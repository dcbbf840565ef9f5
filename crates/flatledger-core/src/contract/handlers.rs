//! Record handlers.
//!
//! The typed methods on [`Contract`] do the work. The free functions at the
//! bottom adapt them to string arguments and are what the operation table
//! points at; arity has already been checked when they run.

use tracing::{debug, info};

use super::seed::seed_flats;
use super::Contract;
use crate::error::Error;
use crate::ledger::Ledger;
use crate::record::{Flat, RecordField};

impl<L: Ledger> Contract<'_, L> {
    /// Raw bytes stored under `key`, unchanged.
    pub fn query_raw(&self, key: &str) -> Result<Vec<u8>, Error> {
        let bytes = self
            .ledger()
            .get(key)
            .map_err(|source| Error::Read {
                key: key.to_string(),
                source,
            })?
            .ok_or_else(|| Error::RecordNotFound(key.to_string()))?;

        debug!(key, len = bytes.len(), "queried flat");
        Ok(bytes)
    }

    /// Decoded flat stored under `key`.
    pub fn query_flat(&self, key: &str) -> Result<Flat, Error> {
        let bytes = self.query_raw(key)?;
        Flat::from_bytes(key, &bytes)
    }

    /// Write `flat` under `key`, replacing whatever is there.
    pub fn create_flat(&self, key: &str, flat: &Flat) -> Result<(), Error> {
        self.ledger()
            .put(key, flat.to_bytes()?)
            .map_err(|e| Error::record_write("record flat", key, e))?;

        debug!(key, holder = %flat.holder, "recorded flat");
        Ok(())
    }

    /// Overwrite one field of the flat under `key` and write it back.
    ///
    /// Fails without writing if the key is absent or the stored bytes do not
    /// decode. Returns the updated flat.
    pub fn update_field(&self, key: &str, field: RecordField, value: &str) -> Result<Flat, Error> {
        let mut flat = self.query_flat(key)?;
        flat.set_field(field, value);

        self.ledger()
            .put(key, flat.to_bytes()?)
            .map_err(|e| Error::field_write(field, key, e))?;

        debug!(key, %field, value, "updated flat");
        Ok(flat)
    }

    /// Write the ten demo flats to keys "1" through "10".
    ///
    /// Stops at the first failed write.
    pub fn seed_initial_data(&self) -> Result<(), Error> {
        for (index, flat) in seed_flats().iter().enumerate() {
            let key = (index + 1).to_string();
            self.ledger()
                .put(&key, flat.to_bytes()?)
                .map_err(|e| Error::record_write("seed flat", &key, e))?;

            info!(key = %key, holder = %flat.holder, "seeded flat");
        }
        Ok(())
    }
}

pub(crate) fn query<L: Ledger>(contract: &Contract<'_, L>, args: &[String]) -> Result<Vec<u8>, Error> {
    contract.query_raw(&args[0])
}

pub(crate) fn seed_initial_data<L: Ledger>(
    contract: &Contract<'_, L>,
    _args: &[String],
) -> Result<Vec<u8>, Error> {
    contract.seed_initial_data()?;
    Ok(Vec::new())
}

pub(crate) fn create<L: Ledger>(contract: &Contract<'_, L>, args: &[String]) -> Result<Vec<u8>, Error> {
    let flat = Flat::new(&args[1], &args[2], &args[3], &args[4]);
    contract.create_flat(&args[0], &flat)?;
    Ok(Vec::new())
}

pub(crate) fn list_all<L: Ledger>(
    contract: &Contract<'_, L>,
    _args: &[String],
) -> Result<Vec<u8>, Error> {
    contract.list_all_json()
}

pub(crate) fn update_holder<L: Ledger>(
    contract: &Contract<'_, L>,
    args: &[String],
) -> Result<Vec<u8>, Error> {
    update(contract, RecordField::Holder, args)
}

pub(crate) fn update_condition<L: Ledger>(
    contract: &Contract<'_, L>,
    args: &[String],
) -> Result<Vec<u8>, Error> {
    update(contract, RecordField::Condition, args)
}

pub(crate) fn update_ranking<L: Ledger>(
    contract: &Contract<'_, L>,
    args: &[String],
) -> Result<Vec<u8>, Error> {
    update(contract, RecordField::Ranking, args)
}

fn update<L: Ledger>(
    contract: &Contract<'_, L>,
    field: RecordField,
    args: &[String],
) -> Result<Vec<u8>, Error> {
    contract.update_field(&args[0], field, &args[1])?;
    Ok(Vec::new())
}
