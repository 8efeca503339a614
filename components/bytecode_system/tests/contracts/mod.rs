//! Contract tests for bytecode_system
//! Pins the public encoding that compiled chunks depend on

mod test_contract_compliance;
