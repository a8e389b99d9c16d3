//! End-to-end transfer tests across two simulated chains.
//!
//! Chain A and chain B each get their own endpoint and adapter, with peers
//! wired both ways. A relay helper reads the queued packet off the source
//! endpoint and drives the destination endpoint's delivery, standing in for
//! the verification layer.

use cosmwasm_std::{coin, Addr, Binary, Empty, Uint128};
use cw_multi_test::{
    no_init, App, AppBuilder, BankKeeper, ContractWrapper, Executor, MockAddressGenerator,
    MockApiBech32, WasmKeeper,
};

use oft_adapter::codec;
use oft_adapter::msg::{
    ExecuteMsg, InstantiateMsg, LockedBalanceResponse, NonceResponse, QueryMsg, TransferResponse,
    TransfersResponse,
};
use oft_adapter::state::TransferStatus;

const TOKEN_A: &str = "utoka";
const TOKEN_B: &str = "utokb";
const FEE: &str = "ufee";
const EID_A: u32 = 101;
const EID_B: u32 = 202;
const BASE_FEE: u128 = 100;

// ============================================================================
// Test Setup
// ============================================================================

type TestApp = App<BankKeeper, MockApiBech32>;

fn mock_app() -> TestApp {
    let wasm_keeper: WasmKeeper<Empty, Empty> =
        WasmKeeper::new().with_address_generator(MockAddressGenerator);
    AppBuilder::default()
        .with_api(MockApiBech32::new("cosmwasm"))
        .with_wasm(wasm_keeper)
        .build(no_init)
}

fn contract_adapter() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        oft_adapter::contract::execute,
        oft_adapter::contract::instantiate,
        oft_adapter::contract::query,
    )
    .with_reply(oft_adapter::contract::reply);
    Box::new(contract)
}

fn contract_endpoint() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        endpoint_mock::contract::execute,
        endpoint_mock::contract::instantiate,
        endpoint_mock::contract::query,
    );
    Box::new(contract)
}

struct Chain {
    endpoint: Addr,
    adapter: Addr,
}

struct TestEnv {
    app: TestApp,
    a: Chain,
    b: Chain,
    admin: Addr,
    alice: Addr,
    bob: Addr,
}

fn addr32(addr: &Addr) -> [u8; 32] {
    common::addr_to_bytes32(&MockApiBech32::new("cosmwasm"), addr).unwrap()
}

fn deploy_chain(app: &mut TestApp, admin: &Addr, eid: u32, token_denom: &str) -> Chain {
    let endpoint_code = app.store_code(contract_endpoint());
    let endpoint = app
        .instantiate_contract(
            endpoint_code,
            admin.clone(),
            &endpoint_mock::msg::InstantiateMsg {
                eid,
                fee_denom: FEE.to_string(),
                base_fee: Uint128::new(BASE_FEE),
                fee_per_byte: Uint128::zero(),
            },
            &[],
            format!("endpoint-{eid}"),
            None,
        )
        .unwrap();

    let adapter_code = app.store_code(contract_adapter());
    let adapter = app
        .instantiate_contract(
            adapter_code,
            admin.clone(),
            &InstantiateMsg {
                admin: admin.to_string(),
                endpoint: endpoint.to_string(),
                local_eid: eid,
                token_denom: token_denom.to_string(),
                fee_denom: FEE.to_string(),
                local_decimals: 6,
                shared_decimals: 6,
                canonical_len: 32,
                fee_bps: 0,
                fee_collector: admin.to_string(),
            },
            &[],
            format!("adapter-{eid}"),
            None,
        )
        .unwrap();

    Chain { endpoint, adapter }
}

fn setup() -> TestEnv {
    let mut app = mock_app();
    let admin = app.api().addr_make("admin");
    let alice = app.api().addr_make("alice");
    let bob = app.api().addr_make("bob");

    app.init_modules(|router, _, storage| {
        router
            .bank
            .init_balance(
                storage,
                &alice,
                vec![coin(1_000_000_000, TOKEN_A), coin(1_000_000_000, FEE)],
            )
            .unwrap();
        router
            .bank
            .init_balance(
                storage,
                &bob,
                vec![coin(1_000_000_000, TOKEN_B), coin(1_000_000_000, FEE)],
            )
            .unwrap();
    });

    let a = deploy_chain(&mut app, &admin, EID_A, TOKEN_A);
    let b = deploy_chain(&mut app, &admin, EID_B, TOKEN_B);

    // Wire peers both ways
    app.execute_contract(
        admin.clone(),
        a.adapter.clone(),
        &ExecuteMsg::SetPeer {
            eid: EID_B,
            peer: Binary::from(addr32(&b.adapter).to_vec()),
        },
        &[],
    )
    .unwrap();
    app.execute_contract(
        admin.clone(),
        b.adapter.clone(),
        &ExecuteMsg::SetPeer {
            eid: EID_A,
            peer: Binary::from(addr32(&a.adapter).to_vec()),
        },
        &[],
    )
    .unwrap();

    TestEnv {
        app,
        a,
        b,
        admin,
        alice,
        bob,
    }
}

fn default_options() -> Binary {
    Binary::from(oft_adapter::options::encode(&[
        common::OptionEntry::LzReceive {
            gas: 200_000,
            value: Uint128::zero(),
        },
    ]))
}

fn send(
    env: &mut TestEnv,
    from: &Addr,
    from_a: bool,
    to: &Addr,
    amount: u128,
    token_denom: &str,
) -> u64 {
    let (adapter, dst_eid) = if from_a {
        (env.a.adapter.clone(), EID_B)
    } else {
        (env.b.adapter.clone(), EID_A)
    };
    env.app
        .execute_contract(
            from.clone(),
            adapter.clone(),
            &ExecuteMsg::Send {
                dst_eid,
                to: Binary::from(addr32(to).to_vec()),
                min_amount: Uint128::new(amount),
                options: default_options(),
                compose_msg: None,
                refund_address: None,
            },
            &[coin(amount, token_denom), coin(BASE_FEE, FEE)],
        )
        .unwrap();
    let res: NonceResponse = env
        .app
        .wrap()
        .query_wasm_smart(adapter, &QueryMsg::OutboundNonce { dst_eid })
        .unwrap();
    res.nonce
}

/// Move the queued packet from the source endpoint to the destination
/// adapter, the way the verification layer would after quorum.
fn relay(env: &mut TestEnv, a_to_b: bool, nonce: u64) {
    let (src, dst, src_eid, dst_eid) = if a_to_b {
        (&env.a, &env.b, EID_A, EID_B)
    } else {
        (&env.b, &env.a, EID_B, EID_A)
    };
    let packet: endpoint_mock::state::Packet = env
        .app
        .wrap()
        .query_wasm_smart(
            src.endpoint.clone(),
            &endpoint_mock::msg::QueryMsg::Packet {
                sender: src.adapter.to_string(),
                dst_eid,
                nonce,
            },
        )
        .unwrap();
    let sender = addr32(&src.adapter);
    let guid = codec::guid(nonce, src_eid, &sender, dst_eid, &addr32(&dst.adapter));
    let msg = endpoint_mock::msg::ExecuteMsg::Deliver {
        oapp: dst.adapter.to_string(),
        src_eid,
        sender: Binary::from(sender.to_vec()),
        nonce,
        guid: Binary::from(guid.to_vec()),
        message: packet.message,
    };
    let endpoint = dst.endpoint.clone();
    let admin = env.admin.clone();
    env.app.execute_contract(admin, endpoint, &msg, &[]).unwrap();
}

fn locked(env: &TestEnv, adapter: &Addr) -> u128 {
    let res: LockedBalanceResponse = env
        .app
        .wrap()
        .query_wasm_smart(adapter.clone(), &QueryMsg::LockedBalance {})
        .unwrap();
    res.locked.u128()
}

fn balance(env: &TestEnv, addr: &Addr, denom: &str) -> u128 {
    env.app.wrap().query_balance(addr, denom).unwrap().amount.u128()
}

fn transfer_status(env: &TestEnv, adapter: &Addr, id: u64) -> TransferStatus {
    let res: TransferResponse = env
        .app
        .wrap()
        .query_wasm_smart(adapter.clone(), &QueryMsg::Transfer { id })
        .unwrap();
    res.transfer.status
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_transfer_a_to_b() {
    let mut env = setup();
    let bob = env.bob.clone();
    let alice = env.alice.clone();

    // Bob bootstraps liquidity on B by locking toward A
    let seed_nonce = send(&mut env, &bob, false, &alice, 5_000_000, TOKEN_B);
    assert_eq!(seed_nonce, 1);
    assert_eq!(locked(&env, &env.b.adapter), 5_000_000);

    // Alice sends one unit A -> B
    let nonce = send(&mut env, &alice, true, &bob, 1_000_000, TOKEN_A);
    assert_eq!(nonce, 1);
    assert_eq!(locked(&env, &env.a.adapter), 1_000_000);
    assert_eq!(balance(&env, &alice, TOKEN_A), 1_000_000_000 - 1_000_000);

    relay(&mut env, true, nonce);

    // Exactly the sent amount reaches Bob on chain B
    assert_eq!(balance(&env, &bob, TOKEN_B), 1_000_000_000 - 5_000_000 + 1_000_000);
    assert_eq!(locked(&env, &env.b.adapter), 5_000_000 - 1_000_000);

    // Custody on each side matches the adapter's bank balance
    assert_eq!(
        balance(&env, &env.a.adapter, TOKEN_A),
        locked(&env, &env.a.adapter)
    );
    assert_eq!(
        balance(&env, &env.b.adapter, TOKEN_B),
        locked(&env, &env.b.adapter)
    );
}

#[test]
fn test_round_trip_conserves_value() {
    let mut env = setup();
    let bob = env.bob.clone();
    let alice = env.alice.clone();

    send(&mut env, &bob, false, &alice, 5_000_000, TOKEN_B);

    // A -> B, then the same value B -> A
    let nonce = send(&mut env, &alice, true, &bob, 2_000_000, TOKEN_A);
    relay(&mut env, true, nonce);
    let nonce = send(&mut env, &bob, false, &alice, 2_000_000, TOKEN_B);
    relay(&mut env, false, nonce);

    // Alice is whole again on A; B's custody is back to its seed
    assert_eq!(balance(&env, &alice, TOKEN_A), 1_000_000_000);
    assert_eq!(locked(&env, &env.a.adapter), 0);
    assert_eq!(locked(&env, &env.b.adapter), 5_000_000);
}

#[test]
fn test_sequential_sends_increment_nonce_and_records() {
    let mut env = setup();
    let alice = env.alice.clone();
    let bob = env.bob.clone();

    assert_eq!(send(&mut env, &alice, true, &bob, 100_000, TOKEN_A), 1);
    assert_eq!(send(&mut env, &alice, true, &bob, 200_000, TOKEN_A), 2);
    assert_eq!(send(&mut env, &alice, true, &bob, 300_000, TOKEN_A), 3);
    assert_eq!(locked(&env, &env.a.adapter), 600_000);

    let res: TransfersResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            env.a.adapter.clone(),
            &QueryMsg::Transfers {
                start_after: None,
                limit: None,
            },
        )
        .unwrap();
    assert_eq!(res.transfers.len(), 3);
    assert_eq!(res.transfers[0].id, 0);
    assert_eq!(res.transfers[2].transfer.nonce, 3);
    assert_eq!(
        res.transfers[2].transfer.amount_sent_ld,
        Uint128::new(300_000)
    );

    // Pagination picks up after the cursor
    let res: TransfersResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            env.a.adapter.clone(),
            &QueryMsg::Transfers {
                start_after: Some(1),
                limit: Some(10),
            },
        )
        .unwrap();
    assert_eq!(res.transfers.len(), 1);
    assert_eq!(res.transfers[0].id, 2);
}

#[test]
fn test_transfer_status_progresses_through_lifecycle() {
    let mut env = setup();
    let alice = env.alice.clone();
    let bob = env.bob.clone();

    send(&mut env, &bob, false, &alice, 5_000_000, TOKEN_B);
    let nonce = send(&mut env, &alice, true, &bob, 1_000_000, TOKEN_A);

    // A fresh record starts at Sent
    assert_eq!(
        transfer_status(&env, &env.a.adapter, 0),
        TransferStatus::Sent
    );

    // The operator saw the transport pick the packet up
    env.app
        .execute_contract(
            env.admin.clone(),
            env.a.adapter.clone(),
            &ExecuteMsg::MarkInFlight { id: 0 },
            &[],
        )
        .unwrap();
    assert_eq!(
        transfer_status(&env, &env.a.adapter, 0),
        TransferStatus::InFlight
    );

    relay(&mut env, true, nonce);

    // The relayer observed delivery; the operator records it on A
    env.app
        .execute_contract(
            env.admin.clone(),
            env.a.adapter.clone(),
            &ExecuteMsg::MarkDelivered { id: 0 },
            &[],
        )
        .unwrap();
    assert_eq!(
        transfer_status(&env, &env.a.adapter, 0),
        TransferStatus::Delivered
    );
}

#[test]
fn test_guid_is_stable_across_both_sides() {
    let env = setup();
    let sender = addr32(&env.a.adapter);
    let receiver = addr32(&env.b.adapter);

    // Source and destination derive the same id from the same route
    let src_side = codec::guid(7, EID_A, &sender, EID_B, &receiver);
    let dst_side = codec::guid(7, EID_A, &sender, EID_B, &receiver);
    assert_eq!(src_side, dst_side);
    assert_ne!(src_side, codec::guid(8, EID_A, &sender, EID_B, &receiver));
}
