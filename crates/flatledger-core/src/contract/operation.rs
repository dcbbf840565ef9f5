//! Operation names and the handler table.

use std::fmt;
use std::str::FromStr;

use super::{handlers, Contract};
use crate::error::Error;
use crate::ledger::Ledger;

/// Handler invoked for an operation once its arity has been checked.
pub(crate) type Handler<L> = fn(&Contract<'_, L>, &[String]) -> Result<Vec<u8>, Error>;

/// Operations the contract accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `query(key)`: raw stored bytes of one flat.
    Query,
    /// `seedInitialData()`: write the ten demo flats to keys "1".."10".
    SeedInitialData,
    /// `create(key, condition, ranking, location, holder)`.
    Create,
    /// `listAll()`: JSON array of `{Key, Record}` over the scan bounds.
    ListAll,
    /// `updateHolder(key, holder)`.
    UpdateHolder,
    /// `updateCondition(key, condition)`.
    UpdateCondition,
    /// `updateRanking(key, ranking)`.
    UpdateRanking,
}

impl Operation {
    /// Every operation, in dispatch-table order.
    pub const ALL: [Operation; 7] = [
        Operation::Query,
        Operation::SeedInitialData,
        Operation::Create,
        Operation::ListAll,
        Operation::UpdateHolder,
        Operation::UpdateCondition,
        Operation::UpdateRanking,
    ];

    /// Name the host invokes the operation by.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Query => "query",
            Operation::SeedInitialData => "seedInitialData",
            Operation::Create => "create",
            Operation::ListAll => "listAll",
            Operation::UpdateHolder => "updateHolder",
            Operation::UpdateCondition => "updateCondition",
            Operation::UpdateRanking => "updateRanking",
        }
    }

    /// Exact number of arguments the operation takes.
    pub fn arity(&self) -> usize {
        match self {
            Operation::SeedInitialData | Operation::ListAll => 0,
            Operation::Query => 1,
            Operation::UpdateHolder | Operation::UpdateCondition | Operation::UpdateRanking => 2,
            Operation::Create => 5,
        }
    }

    /// Fail with `InvalidArgumentCount` unless `args` matches the arity.
    pub fn check_arity(&self, args: &[String]) -> Result<(), Error> {
        if args.len() != self.arity() {
            return Err(Error::InvalidArgumentCount {
                operation: self.name(),
                expected: self.arity(),
                actual: args.len(),
            });
        }
        Ok(())
    }

    pub(crate) fn handler<L: Ledger>(self) -> Handler<L> {
        match self {
            Operation::Query => handlers::query::<L>,
            Operation::SeedInitialData => handlers::seed_initial_data::<L>,
            Operation::Create => handlers::create::<L>,
            Operation::ListAll => handlers::list_all::<L>,
            Operation::UpdateHolder => handlers::update_holder::<L>,
            Operation::UpdateCondition => handlers::update_condition::<L>,
            Operation::UpdateRanking => handlers::update_ranking::<L>,
        }
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == name)
            .ok_or_else(|| Error::UnknownOperation(name.to_string()))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
