//! Receive path: authenticate the origin, enforce ordering, release custody.
//!
//! The value release is unconditional once authenticity and ordering checks
//! pass. A compose payload is forwarded as a separate, independently-failable
//! submessage; its failure never unwinds the token release.

use common::interface::composer;
use common::{bytes32_to_addr, bytes32_to_hex, to_bytes32};
use cosmwasm_std::{
    to_json_binary, BankMsg, Binary, Coin, CosmosMsg, DepsMut, Env, MessageInfo, Response, SubMsg,
    WasmMsg,
};

use crate::codec;
use crate::error::ContractError;
use crate::state::{CONFIG, INBOUND_NONCES, LOCKED, PEERS};

/// Reply id for the compose submessage.
pub const COMPOSE_REPLY_ID: u64 = 1;

pub fn execute_lz_receive(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    src_eid: u32,
    sender: Binary,
    nonce: u64,
    guid: Binary,
    message: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    // Only the transport endpoint may deliver
    if info.sender != config.endpoint {
        return Err(ContractError::UnauthorizedSender);
    }

    // 1. Origin must be the registered peer
    let sender_bytes = to_bytes32(&sender)?;
    let peer = PEERS
        .may_load(deps.storage, src_eid)?
        .ok_or(ContractError::NoPeerConfigured { eid: src_eid })?;
    if peer != sender_bytes {
        return Err(ContractError::UnauthorizedSender);
    }

    // 2. Strict per-origin ordering. The transport tracks nonces itself;
    // this check makes the assumption explicit and rejects duplicates.
    let expected = INBOUND_NONCES
        .may_load(deps.storage, src_eid)?
        .unwrap_or_default()
        + 1;
    if nonce != expected {
        return Err(ContractError::ReplayOrOutOfOrder {
            expected,
            got: nonce,
        });
    }
    INBOUND_NONCES.save(deps.storage, src_eid, &nonce)?;

    // 3. Decode payload
    let payload = codec::decode(message.as_slice())?;
    let recipient = bytes32_to_addr(deps.api, &payload.to, config.canonical_len as usize)?;
    let amount = config.to_ld(payload.amount_sd);

    // 4. Release custody, fail closed on underflow
    let locked = LOCKED.load(deps.storage)?;
    if locked < amount {
        return Err(ContractError::InsufficientCustody {
            available: locked,
            requested: amount,
        });
    }
    LOCKED.save(deps.storage, &(locked - amount))?;

    let mut response = Response::new()
        .add_attribute("method", "lz_receive")
        .add_attribute("src_eid", src_eid.to_string())
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("guid", bytes32_to_hex(&to_bytes32(&guid)?))
        .add_attribute("recipient", recipient.to_string())
        .add_attribute("amount", amount.to_string());

    if !amount.is_zero() {
        response = response.add_message(CosmosMsg::Bank(BankMsg::Send {
            to_address: recipient.to_string(),
            amount: vec![Coin {
                denom: config.token_denom.clone(),
                amount,
            }],
        }));
    }

    // 5. Compose is best-effort: reply_on_error isolates a failing handler
    if let Some(compose) = payload.compose_msg {
        let compose_msg = WasmMsg::Execute {
            contract_addr: recipient.to_string(),
            msg: to_json_binary(&composer::ExecuteMsg::LzCompose {
                from: env.contract.address.to_string(),
                guid,
                message: Binary::from(compose),
            })?,
            funds: vec![],
        };
        response = response
            .add_submessage(SubMsg::reply_on_error(compose_msg, COMPOSE_REPLY_ID))
            .add_attribute("compose", "forwarded");
    }

    Ok(response)
}
