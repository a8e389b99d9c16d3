//! Query handlers for the OFT adapter contract

use common::interface::endpoint;
use common::options::total_weight;
use cosmwasm_std::{Binary, Deps, Order, StdError, StdResult, Uint128};
use cw_storage_plus::Bound;

use crate::codec;
use crate::msg::{
    EnforcedOptionsResponse, LockedBalanceResponse, MessagingFeeResponse, NonceResponse,
    PeerResponse, PeersResponse, TransferResponse, TransfersResponse,
};
use crate::options;
use crate::state::{
    Config, BPS_DENOMINATOR, CONFIG, ENFORCED_OPTIONS, INBOUND_NONCES, LOCKED, OUTBOUND_NONCES,
    PEERS, TRANSFERS,
};

const DEFAULT_LIMIT: u32 = 30;
const MAX_LIMIT: u32 = 100;

pub fn query_config(deps: Deps) -> StdResult<Config> {
    CONFIG.load(deps.storage)
}

pub fn query_peer(deps: Deps, eid: u32) -> StdResult<PeerResponse> {
    let peer = PEERS.may_load(deps.storage, eid)?;
    Ok(PeerResponse {
        eid,
        peer: peer.map(|p| Binary::from(p.to_vec())),
    })
}

pub fn query_peers(
    deps: Deps,
    start_after: Option<u32>,
    limit: Option<u32>,
) -> StdResult<PeersResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);
    let peers = PEERS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (eid, peer) = item?;
            Ok(PeerResponse {
                eid,
                peer: Some(Binary::from(peer.to_vec())),
            })
        })
        .collect::<StdResult<Vec<_>>>()?;
    Ok(PeersResponse { peers })
}

pub fn query_enforced_options(
    deps: Deps,
    eid: u32,
    msg_type: u16,
) -> StdResult<EnforcedOptionsResponse> {
    let options = ENFORCED_OPTIONS
        .may_load(deps.storage, (eid, msg_type))?
        .unwrap_or_default();
    Ok(EnforcedOptionsResponse { options })
}

/// Quote the messaging fee for a send.
///
/// Delegates byte and option pricing to the endpoint, pricing the costlier of
/// the enforced and supplied option sets, then adds the adapter surcharge.
/// This is a quote, not a reservation: the send path re-validates against a
/// fresh quote at execution time.
pub fn query_quote_send(
    deps: Deps,
    dst_eid: u32,
    to: Binary,
    amount: Uint128,
    options_bytes: Binary,
    compose_msg: Option<Binary>,
) -> StdResult<MessagingFeeResponse> {
    let config = CONFIG.load(deps.storage)?;

    let to_bytes = common::to_bytes32(&to)?;
    let supplied =
        options::decode(options_bytes.as_slice()).map_err(|e| StdError::generic_err(e.to_string()))?;
    let msg_type = if compose_msg.is_some() {
        common::MSG_TYPE_SEND_AND_CALL
    } else {
        common::MSG_TYPE_SEND
    };
    let enforced = ENFORCED_OPTIONS
        .may_load(deps.storage, (dst_eid, msg_type))?
        .unwrap_or_default();

    // Price whichever option set costs more
    let effective_options = if total_weight(&supplied) >= total_weight(&enforced) {
        options_bytes
    } else {
        Binary::from(options::encode(&enforced))
    };

    let amount_sent = config.remove_dust(amount);
    let payload = codec::encode(
        &to_bytes,
        config.to_sd(amount_sent),
        compose_msg.as_ref().map(|b| b.as_slice()),
    );

    let quote: endpoint::QuoteResponse = deps.querier.query_wasm_smart(
        config.endpoint,
        &endpoint::QueryMsg::Quote {
            dst_eid,
            message: Binary::from(payload),
            options: effective_options,
        },
    )?;
    let surcharge = quote
        .native_fee
        .multiply_ratio(config.fee_bps as u128, BPS_DENOMINATOR);

    Ok(MessagingFeeResponse {
        native_fee: quote.native_fee + surcharge,
        alt_fee: quote.alt_fee,
    })
}

pub fn query_locked_balance(deps: Deps) -> StdResult<LockedBalanceResponse> {
    Ok(LockedBalanceResponse {
        locked: LOCKED.load(deps.storage)?,
    })
}

pub fn query_transfer(deps: Deps, id: u64) -> StdResult<TransferResponse> {
    let transfer = TRANSFERS.load(deps.storage, id)?;
    Ok(TransferResponse { id, transfer })
}

pub fn query_transfers(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<TransfersResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);
    let transfers = TRANSFERS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (id, transfer) = item?;
            Ok(TransferResponse { id, transfer })
        })
        .collect::<StdResult<Vec<_>>>()?;
    Ok(TransfersResponse { transfers })
}

pub fn query_inbound_nonce(deps: Deps, src_eid: u32) -> StdResult<NonceResponse> {
    Ok(NonceResponse {
        nonce: INBOUND_NONCES
            .may_load(deps.storage, src_eid)?
            .unwrap_or_default(),
    })
}

pub fn query_outbound_nonce(deps: Deps, dst_eid: u32) -> StdResult<NonceResponse> {
    Ok(NonceResponse {
        nonce: OUTBOUND_NONCES
            .may_load(deps.storage, dst_eid)?
            .unwrap_or_default(),
    })
}
