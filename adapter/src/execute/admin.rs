//! Admin handlers: peer registry, enforced-option tables, fee parameters,
//! pause, and transfer-record status updates.

use common::{bytes32_to_hex, to_bytes32, OptionEntry, MSG_TYPE_SEND, MSG_TYPE_SEND_AND_CALL};
use cosmwasm_std::{Binary, Deps, DepsMut, MessageInfo, Response, StdError};

use crate::error::ContractError;
use crate::state::{TransferStatus, CONFIG, ENFORCED_OPTIONS, PEERS, TRANSFERS};

fn ensure_admin(deps: Deps, info: &MessageInfo) -> Result<(), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

pub fn execute_set_peer(
    deps: DepsMut,
    info: MessageInfo,
    eid: u32,
    peer: Binary,
) -> Result<Response, ContractError> {
    ensure_admin(deps.as_ref(), &info)?;

    let peer_bytes = to_bytes32(&peer)?;
    PEERS.save(deps.storage, eid, &peer_bytes)?;

    Ok(Response::new()
        .add_attribute("method", "set_peer")
        .add_attribute("eid", eid.to_string())
        .add_attribute("peer", bytes32_to_hex(&peer_bytes)))
}

pub fn execute_set_enforced_options(
    deps: DepsMut,
    info: MessageInfo,
    eid: u32,
    msg_type: u16,
    options: Vec<OptionEntry>,
) -> Result<Response, ContractError> {
    ensure_admin(deps.as_ref(), &info)?;

    if msg_type != MSG_TYPE_SEND && msg_type != MSG_TYPE_SEND_AND_CALL {
        return Err(ContractError::Std(StdError::generic_err(format!(
            "unknown message type {msg_type}"
        ))));
    }
    ENFORCED_OPTIONS.save(deps.storage, (eid, msg_type), &options)?;

    Ok(Response::new()
        .add_attribute("method", "set_enforced_options")
        .add_attribute("eid", eid.to_string())
        .add_attribute("msg_type", msg_type.to_string())
        .add_attribute("option_count", options.len().to_string()))
}

pub fn execute_set_fee(
    deps: DepsMut,
    info: MessageInfo,
    fee_bps: u64,
    fee_collector: Option<String>,
) -> Result<Response, ContractError> {
    ensure_admin(deps.as_ref(), &info)?;

    let mut config = CONFIG.load(deps.storage)?;
    config.fee_bps = fee_bps;
    if let Some(collector) = fee_collector {
        config.fee_collector = deps.api.addr_validate(&collector)?;
    }
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_fee")
        .add_attribute("fee_bps", fee_bps.to_string())
        .add_attribute("fee_collector", config.fee_collector))
}

pub fn execute_pause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    ensure_admin(deps.as_ref(), &info)?;

    let mut config = CONFIG.load(deps.storage)?;
    config.paused = true;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("method", "pause"))
}

pub fn execute_unpause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    ensure_admin(deps.as_ref(), &info)?;

    let mut config = CONFIG.load(deps.storage)?;
    config.paused = false;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("method", "unpause"))
}

pub fn execute_update_admin(
    deps: DepsMut,
    info: MessageInfo,
    admin: String,
) -> Result<Response, ContractError> {
    ensure_admin(deps.as_ref(), &info)?;

    let mut config = CONFIG.load(deps.storage)?;
    config.admin = deps.api.addr_validate(&admin)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "update_admin")
        .add_attribute("admin", config.admin))
}

fn set_transfer_status(
    deps: DepsMut,
    info: MessageInfo,
    id: u64,
    status: TransferStatus,
    method: &str,
) -> Result<Response, ContractError> {
    ensure_admin(deps.as_ref(), &info)?;

    let mut transfer = TRANSFERS
        .may_load(deps.storage, id)?
        .ok_or(ContractError::UnknownTransfer { id })?;
    transfer.status = status;
    TRANSFERS.save(deps.storage, id, &transfer)?;

    Ok(Response::new()
        .add_attribute("method", method)
        .add_attribute("id", id.to_string()))
}

pub fn execute_mark_in_flight(
    deps: DepsMut,
    info: MessageInfo,
    id: u64,
) -> Result<Response, ContractError> {
    set_transfer_status(deps, info, id, TransferStatus::InFlight, "mark_in_flight")
}

pub fn execute_mark_delivered(
    deps: DepsMut,
    info: MessageInfo,
    id: u64,
) -> Result<Response, ContractError> {
    set_transfer_status(deps, info, id, TransferStatus::Delivered, "mark_delivered")
}

pub fn execute_mark_stuck(
    deps: DepsMut,
    info: MessageInfo,
    id: u64,
) -> Result<Response, ContractError> {
    set_transfer_status(deps, info, id, TransferStatus::Stuck, "mark_stuck")
}
