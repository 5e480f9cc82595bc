//! Load contracts from JSON files or readers

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::Contract;
use crate::error::Result;

/// Load a single contract from a JSON file
pub fn load_contract<P: AsRef<Path>>(path: P) -> Result<Contract> {
    let file = File::open(path)?;
    load_contract_from_reader(BufReader::new(file))
}

/// Load a single contract from any reader (e.g., stdin, string buffer)
pub fn load_contract_from_reader<R: Read>(reader: R) -> Result<Contract> {
    Ok(serde_json::from_reader(reader)?)
}

/// Load a JSON array of contracts from a file
pub fn load_contracts<P: AsRef<Path>>(path: P) -> Result<Vec<Contract>> {
    let file = File::open(path)?;
    load_contracts_from_reader(BufReader::new(file))
}

/// Load a JSON array of contracts from any reader
pub fn load_contracts_from_reader<R: Read>(reader: R) -> Result<Vec<Contract>> {
    let contracts: Vec<Contract> = serde_json::from_reader(reader)?;
    log::debug!("Loaded {} contracts", contracts.len());
    Ok(contracts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NpvError;

    const CONTRACT: &str = r#"{
        "contractDuration": {"years": 1, "days": 0},
        "announcementDate": "2021-12-01",
        "NBUdiscountRate": "0.1",
        "yearlyPaymentsPercentage": "0.5",
        "annualCostsReduction": ["365", "365", "365"]
    }"#;

    #[test]
    fn test_load_contract_from_reader() {
        let contract = load_contract_from_reader(CONTRACT.as_bytes()).unwrap();
        assert_eq!(contract.contract_duration.years, 1);
        assert_eq!(contract.annual_costs_reduction.len(), 3);
    }

    #[test]
    fn test_load_contracts_from_reader() {
        let json = format!("[{CONTRACT}, {CONTRACT}]");
        let contracts = load_contracts_from_reader(json.as_bytes()).unwrap();
        assert_eq!(contracts.len(), 2);
    }

    #[test]
    fn test_missing_field_is_json_error() {
        let json = r#"{"contractDuration": {"years": 1, "days": 0}}"#;
        assert!(matches!(
            load_contract_from_reader(json.as_bytes()),
            Err(NpvError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            load_contract("does/not/exist.json"),
            Err(NpvError::Io(_))
        ));
    }
}
