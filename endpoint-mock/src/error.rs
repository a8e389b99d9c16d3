//! Error types for the endpoint mock

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Insufficient fee: required {required}, paid {paid}")]
    InsufficientFee { required: Uint128, paid: Uint128 },
}
