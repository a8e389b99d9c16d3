//! Send path: lock tokens, validate options and fee, submit the outbound
//! message.
//!
//! The lock and the endpoint submission live in one transaction; a failing
//! endpoint call reverts the lock, so the operation is all-or-nothing from
//! the caller's perspective.

use common::interface::endpoint;
use common::{addr_to_bytes32, bytes32_to_hex, to_bytes32, MSG_TYPE_SEND, MSG_TYPE_SEND_AND_CALL};
use cosmwasm_std::{
    to_json_binary, BankMsg, Binary, Coin, CosmosMsg, DepsMut, Env, MessageInfo, Response,
    Uint128, WasmMsg,
};

use crate::codec;
use crate::error::ContractError;
use crate::options;
use crate::state::{
    Config, Transfer, TransferStatus, BPS_DENOMINATOR, CONFIG, ENFORCED_OPTIONS, LOCKED,
    NEXT_TRANSFER_ID, OUTBOUND_NONCES, PEERS, TRANSFERS,
};

/// Split attached funds into (token amount, fee amount), rejecting stray
/// denoms.
fn split_funds(config: &Config, info: &MessageInfo) -> Result<(Uint128, Uint128), ContractError> {
    let mut token = Uint128::zero();
    let mut fee = Uint128::zero();
    for coin in &info.funds {
        if coin.denom == config.token_denom {
            token += coin.amount;
        } else if coin.denom == config.fee_denom {
            fee += coin.amount;
        } else {
            return Err(ContractError::InvalidFunds {
                reason: format!("unexpected denom {}", coin.denom),
            });
        }
    }
    Ok((token, fee))
}

#[allow(clippy::too_many_arguments)]
pub fn execute_send(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    dst_eid: u32,
    to: Binary,
    min_amount: Uint128,
    options_bytes: Binary,
    compose_msg: Option<Binary>,
    refund_address: Option<String>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if config.paused {
        return Err(ContractError::Paused);
    }

    let refund_addr = match refund_address {
        Some(addr) => deps.api.addr_validate(&addr)?,
        None => info.sender.clone(),
    };
    let to_bytes = to_bytes32(&to)?;

    // 1. Peer gating
    let peer = PEERS
        .may_load(deps.storage, dst_eid)?
        .ok_or(ContractError::NoPeerConfigured { eid: dst_eid })?;

    // 2. Dust removal and slippage floor
    let (attached, fee_paid) = split_funds(&config, &info)?;
    if attached.is_zero() {
        return Err(ContractError::NoFundsSent);
    }
    let amount_sent = config.remove_dust(attached);
    let amount_received = amount_sent;
    if amount_sent.is_zero() {
        return Err(ContractError::InvalidFunds {
            reason: "amount is entirely dust below shared precision".to_string(),
        });
    }
    if amount_received < min_amount {
        return Err(ContractError::SlippageExceeded {
            amount_received,
            min_amount,
        });
    }
    let dust = attached - amount_sent;

    // 3. Enforced-option validation
    let msg_type = if compose_msg.is_some() {
        MSG_TYPE_SEND_AND_CALL
    } else {
        MSG_TYPE_SEND
    };
    let supplied = options::decode(options_bytes.as_slice())?;
    let enforced = ENFORCED_OPTIONS
        .may_load(deps.storage, (dst_eid, msg_type))?
        .unwrap_or_default();
    options::validate(&enforced, &supplied)?;

    // 4. Encode payload and re-validate the fee against a fresh quote
    let payload = codec::encode(
        &to_bytes,
        config.to_sd(amount_sent),
        compose_msg.as_ref().map(|b| b.as_slice()),
    );
    let message = Binary::from(payload);

    let quote: endpoint::QuoteResponse = deps.querier.query_wasm_smart(
        config.endpoint.clone(),
        &endpoint::QueryMsg::Quote {
            dst_eid,
            message: message.clone(),
            options: options_bytes.clone(),
        },
    )?;
    let surcharge = quote
        .native_fee
        .multiply_ratio(config.fee_bps as u128, BPS_DENOMINATOR);
    let required = quote.native_fee + surcharge;
    if fee_paid < required {
        return Err(ContractError::InsufficientFeePaid {
            required,
            paid: fee_paid,
        });
    }

    // 5. Lock into custody
    let locked = LOCKED.load(deps.storage)?;
    LOCKED.save(deps.storage, &(locked + amount_sent))?;

    // 6. Record the transfer
    let nonce = OUTBOUND_NONCES
        .may_load(deps.storage, dst_eid)?
        .unwrap_or_default()
        + 1;
    OUTBOUND_NONCES.save(deps.storage, dst_eid, &nonce)?;

    let sender_bytes = addr_to_bytes32(deps.api, &env.contract.address)?;
    let guid = codec::guid(nonce, config.local_eid, &sender_bytes, dst_eid, &peer);

    let id = NEXT_TRANSFER_ID.may_load(deps.storage)?.unwrap_or_default();
    NEXT_TRANSFER_ID.save(deps.storage, &(id + 1))?;
    TRANSFERS.save(
        deps.storage,
        id,
        &Transfer {
            guid,
            dst_eid,
            to: to_bytes,
            amount_sent_ld: amount_sent,
            amount_received_ld: amount_received,
            nonce,
            status: TransferStatus::Sent,
            sent_at: env.block.time,
        },
    )?;

    // 7. Submit to the endpoint, pay the surcharge, refund dust and excess
    let mut messages: Vec<CosmosMsg> = vec![CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.endpoint.to_string(),
        msg: to_json_binary(&endpoint::ExecuteMsg::Send {
            dst_eid,
            receiver: Binary::from(peer.to_vec()),
            message,
            options: options_bytes,
        })?,
        funds: vec![Coin {
            denom: config.fee_denom.clone(),
            amount: quote.native_fee,
        }],
    })];

    if !surcharge.is_zero() {
        messages.push(CosmosMsg::Bank(BankMsg::Send {
            to_address: config.fee_collector.to_string(),
            amount: vec![Coin {
                denom: config.fee_denom.clone(),
                amount: surcharge,
            }],
        }));
    }

    let mut refund_coins = vec![];
    if !dust.is_zero() {
        refund_coins.push(Coin {
            denom: config.token_denom.clone(),
            amount: dust,
        });
    }
    let fee_excess = fee_paid - required;
    if !fee_excess.is_zero() {
        refund_coins.push(Coin {
            denom: config.fee_denom.clone(),
            amount: fee_excess,
        });
    }
    if !refund_coins.is_empty() {
        messages.push(CosmosMsg::Bank(BankMsg::Send {
            to_address: refund_addr.to_string(),
            amount: refund_coins,
        }));
    }

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("method", "send")
        .add_attribute("guid", bytes32_to_hex(&guid))
        .add_attribute("dst_eid", dst_eid.to_string())
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("sender", info.sender)
        .add_attribute("to", bytes32_to_hex(&to_bytes))
        .add_attribute("amount_sent", amount_sent.to_string())
        .add_attribute("amount_received", amount_received.to_string())
        .add_attribute("native_fee", required.to_string()))
}
