//! Endpoint Mock - Entry Points

use common::interface::oapp;
use cosmwasm_std::{
    entry_point, to_json_binary, Binary, CosmosMsg, Deps, DepsMut, Env, MessageInfo, Response,
    StdResult, Uint128, WasmMsg,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, NonceResponse, QueryMsg, QuoteResponse};
use crate::state::{
    Config, Packet, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, OUTBOUND_NONCES, PACKETS,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        eid: msg.eid,
        fee_denom: msg.fee_denom,
        base_fee: msg.base_fee,
        fee_per_byte: msg.fee_per_byte,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("eid", config.eid.to_string()))
}

fn compute_fee(config: &Config, message: &Binary, options: &Binary) -> Uint128 {
    let bytes = (message.len() + options.len()) as u128;
    config.base_fee + config.fee_per_byte * Uint128::from(bytes)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Send {
            dst_eid,
            receiver,
            message,
            options,
        } => execute_send(deps, info, dst_eid, receiver, message, options),
        ExecuteMsg::Deliver {
            oapp,
            src_eid,
            sender,
            nonce,
            guid,
            message,
        } => execute_deliver(deps, oapp, src_eid, sender, nonce, guid, message),
    }
}

fn execute_send(
    deps: DepsMut,
    info: MessageInfo,
    dst_eid: u32,
    receiver: Binary,
    message: Binary,
    options: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let required = compute_fee(&config, &message, &options);
    let paid = info
        .funds
        .iter()
        .filter(|c| c.denom == config.fee_denom)
        .map(|c| c.amount)
        .sum::<Uint128>();
    if paid < required {
        return Err(ContractError::InsufficientFee { required, paid });
    }

    let nonce = OUTBOUND_NONCES
        .may_load(deps.storage, (&info.sender, dst_eid))?
        .unwrap_or_default()
        + 1;
    OUTBOUND_NONCES.save(deps.storage, (&info.sender, dst_eid), &nonce)?;

    PACKETS.save(
        deps.storage,
        (&info.sender, dst_eid, nonce),
        &Packet {
            dst_eid,
            receiver,
            message,
            options,
            fee_paid: paid,
        },
    )?;

    Ok(Response::new()
        .add_attribute("method", "send")
        .add_attribute("sender", info.sender)
        .add_attribute("dst_eid", dst_eid.to_string())
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("fee", paid.to_string()))
}

fn execute_deliver(
    _deps: DepsMut,
    oapp: String,
    src_eid: u32,
    sender: Binary,
    nonce: u64,
    guid: Binary,
    message: Binary,
) -> Result<Response, ContractError> {
    let deliver = WasmMsg::Execute {
        contract_addr: oapp.clone(),
        msg: to_json_binary(&oapp::ExecuteMsg::LzReceive {
            src_eid,
            sender,
            nonce,
            guid,
            message,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(CosmosMsg::Wasm(deliver))
        .add_attribute("method", "deliver")
        .add_attribute("oapp", oapp)
        .add_attribute("src_eid", src_eid.to_string())
        .add_attribute("nonce", nonce.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&CONFIG.load(deps.storage)?),
        QueryMsg::Quote {
            dst_eid: _,
            message,
            options,
        } => {
            let config = CONFIG.load(deps.storage)?;
            to_json_binary(&QuoteResponse {
                native_fee: compute_fee(&config, &message, &options),
                alt_fee: Uint128::zero(),
            })
        }
        QueryMsg::OutboundNonce { sender, dst_eid } => {
            let sender = deps.api.addr_validate(&sender)?;
            to_json_binary(&NonceResponse {
                nonce: OUTBOUND_NONCES
                    .may_load(deps.storage, (&sender, dst_eid))?
                    .unwrap_or_default(),
            })
        }
        QueryMsg::Packet {
            sender,
            dst_eid,
            nonce,
        } => {
            let sender = deps.api.addr_validate(&sender)?;
            to_json_binary(&PACKETS.load(deps.storage, (&sender, dst_eid, nonce))?)
        }
    }
}
