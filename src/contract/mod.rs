//! Contract input record and JSON loading

mod data;
pub mod loader;

pub use data::{Amount, Contract, ContractDuration};
pub use loader::{load_contract, load_contract_from_reader, load_contracts, load_contracts_from_reader};
