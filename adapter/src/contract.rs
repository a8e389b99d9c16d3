//! OFT Adapter Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - send path, receive path, and admin handlers
//! - `query` - query handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult, SubMsgResult, Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_lz_receive, execute_mark_delivered, execute_mark_in_flight, execute_mark_stuck,
    execute_pause, execute_send, execute_set_enforced_options, execute_set_fee,
    execute_set_peer, execute_unpause, execute_update_admin, COMPOSE_REPLY_ID,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_config, query_enforced_options, query_inbound_nonce, query_locked_balance,
    query_outbound_nonce, query_peer, query_peers, query_quote_send, query_transfer,
    query_transfers,
};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, LOCKED, NEXT_TRANSFER_ID};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.shared_decimals > msg.local_decimals {
        return Err(ContractError::InvalidDecimals {
            local: msg.local_decimals,
            shared: msg.shared_decimals,
        });
    }
    // Funds on a send are split by denom; the two roles must be separable
    if msg.token_denom == msg.fee_denom {
        return Err(ContractError::InvalidFunds {
            reason: "token denom and fee denom must differ".to_string(),
        });
    }
    if msg.canonical_len == 0 || msg.canonical_len > 32 {
        return Err(ContractError::InvalidCanonicalLength {
            len: msg.canonical_len,
        });
    }

    let config = Config {
        admin: deps.api.addr_validate(&msg.admin)?,
        endpoint: deps.api.addr_validate(&msg.endpoint)?,
        local_eid: msg.local_eid,
        token_denom: msg.token_denom,
        fee_denom: msg.fee_denom,
        local_decimals: msg.local_decimals,
        shared_decimals: msg.shared_decimals,
        canonical_len: msg.canonical_len,
        fee_bps: msg.fee_bps,
        fee_collector: deps.api.addr_validate(&msg.fee_collector)?,
        paused: false,
    };
    CONFIG.save(deps.storage, &config)?;

    LOCKED.save(deps.storage, &Uint128::zero())?;
    NEXT_TRANSFER_ID.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", config.admin)
        .add_attribute("endpoint", config.endpoint)
        .add_attribute("local_eid", config.local_eid.to_string())
        .add_attribute("token_denom", config.token_denom)
        .add_attribute("shared_decimals", config.shared_decimals.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Send {
            dst_eid,
            to,
            min_amount,
            options,
            compose_msg,
            refund_address,
        } => execute_send(
            deps,
            env,
            info,
            dst_eid,
            to,
            min_amount,
            options,
            compose_msg,
            refund_address,
        ),
        ExecuteMsg::LzReceive {
            src_eid,
            sender,
            nonce,
            guid,
            message,
        } => execute_lz_receive(deps, env, info, src_eid, sender, nonce, guid, message),

        ExecuteMsg::SetPeer { eid, peer } => execute_set_peer(deps, info, eid, peer),
        ExecuteMsg::SetEnforcedOptions {
            eid,
            msg_type,
            options,
        } => execute_set_enforced_options(deps, info, eid, msg_type, options),
        ExecuteMsg::SetFee {
            fee_bps,
            fee_collector,
        } => execute_set_fee(deps, info, fee_bps, fee_collector),
        ExecuteMsg::Pause {} => execute_pause(deps, info),
        ExecuteMsg::Unpause {} => execute_unpause(deps, info),
        ExecuteMsg::UpdateAdmin { admin } => execute_update_admin(deps, info, admin),
        ExecuteMsg::MarkInFlight { id } => execute_mark_in_flight(deps, info, id),
        ExecuteMsg::MarkDelivered { id } => execute_mark_delivered(deps, info, id),
        ExecuteMsg::MarkStuck { id } => execute_mark_stuck(deps, info, id),
    }
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(_deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        // Compose forwarding is best-effort; a handler error is recorded and
        // swallowed so the value release stands.
        COMPOSE_REPLY_ID => {
            let result = match msg.result {
                SubMsgResult::Ok(_) => "success".to_string(),
                SubMsgResult::Err(err) => format!("failed: {err}"),
            };
            Ok(Response::new()
                .add_attribute("method", "compose_reply")
                .add_attribute("compose_result", result))
        }
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Peer { eid } => to_json_binary(&query_peer(deps, eid)?),
        QueryMsg::Peers { start_after, limit } => {
            to_json_binary(&query_peers(deps, start_after, limit)?)
        }
        QueryMsg::EnforcedOptions { eid, msg_type } => {
            to_json_binary(&query_enforced_options(deps, eid, msg_type)?)
        }
        QueryMsg::QuoteSend {
            dst_eid,
            to,
            amount,
            options,
            compose_msg,
        } => to_json_binary(&query_quote_send(
            deps, dst_eid, to, amount, options, compose_msg,
        )?),
        QueryMsg::LockedBalance {} => to_json_binary(&query_locked_balance(deps)?),
        QueryMsg::Transfer { id } => to_json_binary(&query_transfer(deps, id)?),
        QueryMsg::Transfers { start_after, limit } => {
            to_json_binary(&query_transfers(deps, start_after, limit)?)
        }
        QueryMsg::InboundNonce { src_eid } => to_json_binary(&query_inbound_nonce(deps, src_eid)?),
        QueryMsg::OutboundNonce { dst_eid } => {
            to_json_binary(&query_outbound_nonce(deps, dst_eid)?)
        }
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
