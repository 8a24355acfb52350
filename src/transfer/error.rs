use thiserror::Error;

use crate::inventory::InventoryError;
use crate::loot::CrateId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    #[error("no crate registered as {0}")]
    UnknownCrate(CrateId),

    #[error("no crate is open")]
    NoActiveCrate,

    #[error(transparent)]
    Inventory(#[from] InventoryError),
}
