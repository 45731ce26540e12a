//! Integration tests for the token gateway using cw-multi-test.
//!
//! Covers swaps in both directions, recipient redirection, reserve checks,
//! and the pause/unpause circuit breaker.

use cosmwasm_std::{Addr, Empty, Uint128};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg, MinterResponse};
use cw_multi_test::{App, Contract, ContractWrapper, Executor};

use common::Role;
use gateway::msg::{
    ExecuteMsg, InstantiateMsg, PausedResponse, QueryMsg, ReservesResponse, TokenIdResponse,
    TokenPairMsg, TokenPairResponse,
};
use gateway::ContractError;

// ============================================================================
// Test Setup
// ============================================================================

fn contract_gateway() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        gateway::contract::execute,
        gateway::contract::instantiate,
        gateway::contract::query,
    );
    Box::new(contract)
}

fn contract_cw20() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

struct TestEnv {
    app: App,
    gateway: Addr,
    real_token: Addr,
    wrapped_token: Addr,
    token_id: u64,
    admin: Addr,
    user: Addr,
    recipient: Addr,
}

fn create_token(app: &mut App, code_id: u64, minter: &Addr, name: &str, symbol: &str) -> Addr {
    app.instantiate_contract(
        code_id,
        minter.clone(),
        &cw20_base::msg::InstantiateMsg {
            name: name.to_string(),
            symbol: symbol.to_string(),
            decimals: 6,
            initial_balances: vec![],
            mint: Some(MinterResponse {
                minter: minter.to_string(),
                cap: None,
            }),
            marketing: None,
        },
        &[],
        symbol,
        None,
    )
    .unwrap()
}

fn mint(app: &mut App, minter: &Addr, token: &Addr, to: &Addr, amount: u128) {
    app.execute_contract(
        minter.clone(),
        token.clone(),
        &Cw20ExecuteMsg::Mint {
            recipient: to.to_string(),
            amount: Uint128::from(amount),
        },
        &[],
    )
    .unwrap();
}

fn approve(app: &mut App, owner: &Addr, token: &Addr, spender: &Addr, amount: u128) {
    app.execute_contract(
        owner.clone(),
        token.clone(),
        &Cw20ExecuteMsg::IncreaseAllowance {
            spender: spender.to_string(),
            amount: Uint128::from(amount),
            expires: None,
        },
        &[],
    )
    .unwrap();
}

fn balance(app: &App, token: &Addr, account: &Addr) -> u128 {
    let res: BalanceResponse = app
        .wrap()
        .query_wasm_smart(
            token,
            &Cw20QueryMsg::Balance {
                address: account.to_string(),
            },
        )
        .unwrap();
    res.balance.u128()
}

/// Gateway with one pair registered through `AddToken`; user and gateway
/// each hold 1000 of both tokens.
fn setup() -> TestEnv {
    let mut app = App::default();
    let admin = Addr::unchecked("terra1admin");
    let user = Addr::unchecked("terra1user");
    let recipient = Addr::unchecked("terra1recipient");

    let cw20_code = app.store_code(contract_cw20());
    let wrapped_token = create_token(&mut app, cw20_code, &admin, "Bridged Token", "BRG");
    let real_token = create_token(&mut app, cw20_code, &admin, "Real Token", "REAL");

    let gateway_code = app.store_code(contract_gateway());
    let gateway = app
        .instantiate_contract(
            gateway_code,
            admin.clone(),
            &InstantiateMsg {
                admin: admin.to_string(),
                token_manager: admin.to_string(),
                initial_pair: None,
            },
            &[],
            "token-gateway",
            Some(admin.to_string()),
        )
        .unwrap();

    app.execute_contract(
        admin.clone(),
        gateway.clone(),
        &ExecuteMsg::AddToken {
            real_token: real_token.to_string(),
            wrapped_token: wrapped_token.to_string(),
        },
        &[],
    )
    .unwrap();

    let token: TokenIdResponse = app
        .wrap()
        .query_wasm_smart(
            &gateway,
            &QueryMsg::TokenIdByReal {
                real_token: real_token.to_string(),
            },
        )
        .unwrap();
    let token_id = token.token_id;

    mint(&mut app, &admin, &wrapped_token, &user, 1000);
    mint(&mut app, &admin, &wrapped_token, &gateway, 1000);
    mint(&mut app, &admin, &real_token, &gateway, 1000);
    mint(&mut app, &admin, &real_token, &user, 1000);

    TestEnv {
        app,
        gateway,
        real_token,
        wrapped_token,
        token_id,
        admin,
        user,
        recipient,
    }
}

fn grant(env: &mut TestEnv, role: Role, account: &Addr) {
    env.app
        .execute_contract(
            env.admin.clone(),
            env.gateway.clone(),
            &ExecuteMsg::GrantRole {
                role,
                account: account.to_string(),
            },
            &[],
        )
        .unwrap();
}

// ============================================================================
// Instantiation
// ============================================================================

#[test]
fn test_instantiate_with_initial_pair() {
    let mut app = App::default();
    let admin = Addr::unchecked("terra1admin");

    let cw20_code = app.store_code(contract_cw20());
    let axl_token = create_token(&mut app, cw20_code, &admin, "AXL Token", "AXL");
    let real_token = create_token(&mut app, cw20_code, &admin, "Real Token", "REAL");

    let gateway_code = app.store_code(contract_gateway());
    let gateway = app
        .instantiate_contract(
            gateway_code,
            admin.clone(),
            &InstantiateMsg {
                admin: admin.to_string(),
                token_manager: admin.to_string(),
                initial_pair: Some(TokenPairMsg {
                    real_token: real_token.to_string(),
                    wrapped_token: axl_token.to_string(),
                }),
            },
            &[],
            "axelar-gateway",
            None,
        )
        .unwrap();

    let pair: TokenPairResponse = app
        .wrap()
        .query_wasm_smart(&gateway, &QueryMsg::TokenPair { token_id: 0 })
        .unwrap();
    assert_eq!(pair.real_token, real_token);
    assert_eq!(pair.wrapped_token, axl_token);

    let paused: PausedResponse = app
        .wrap()
        .query_wasm_smart(&gateway, &QueryMsg::IsPaused {})
        .unwrap();
    assert!(!paused.paused);
}

// ============================================================================
// Pausing
// ============================================================================

#[test]
fn test_pause_and_unpause() {
    let mut env = setup();
    let user = env.user.clone();
    grant(&mut env, Role::Pauser, &user);

    env.app
        .execute_contract(user.clone(), env.gateway.clone(), &ExecuteMsg::Pause {}, &[])
        .unwrap();

    approve(&mut env.app, &user, &env.wrapped_token, &env.gateway, 1000);
    let err = env
        .app
        .execute_contract(
            user.clone(),
            env.gateway.clone(),
            &ExecuteMsg::SwapToReal {
                token_id: env.token_id,
                amount: Uint128::from(1000u128),
            },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::ContractPaused
    );

    grant(&mut env, Role::Unpauser, &user);
    env.app
        .execute_contract(user.clone(), env.gateway.clone(), &ExecuteMsg::Unpause {}, &[])
        .unwrap();

    // Should succeed now
    env.app
        .execute_contract(
            user.clone(),
            env.gateway.clone(),
            &ExecuteMsg::SwapToReal {
                token_id: env.token_id,
                amount: Uint128::from(1000u128),
            },
            &[],
        )
        .unwrap();

    assert_eq!(balance(&env.app, &env.real_token, &user), 2000);
    assert_eq!(balance(&env.app, &env.wrapped_token, &user), 0);
}

#[test]
fn test_non_pauser_cannot_pause_or_unpause() {
    let mut env = setup();
    let user = env.user.clone();

    let err = env
        .app
        .execute_contract(user.clone(), env.gateway.clone(), &ExecuteMsg::Pause {}, &[])
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::Unauthorized {
            account: user.to_string(),
            role: "pauser".to_string(),
        }
    );

    grant(&mut env, Role::Pauser, &user);
    env.app
        .execute_contract(user.clone(), env.gateway.clone(), &ExecuteMsg::Pause {}, &[])
        .unwrap();

    let err = env
        .app
        .execute_contract(
            env.recipient.clone(),
            env.gateway.clone(),
            &ExecuteMsg::Unpause {},
            &[],
        )
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::Unauthorized {
            account: env.recipient.to_string(),
            role: "unpauser".to_string(),
        }
    );

    // Holding the pauser role does not grant unpausing
    let err = env
        .app
        .execute_contract(user.clone(), env.gateway.clone(), &ExecuteMsg::Unpause {}, &[])
        .unwrap_err();
    assert!(matches!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::Unauthorized { .. }
    ));
}

#[test]
fn test_pause_twice_and_unpause_active_rejected() {
    let mut env = setup();
    let admin = env.admin.clone();
    grant(&mut env, Role::Pauser, &admin);
    grant(&mut env, Role::Unpauser, &admin);

    let err = env
        .app
        .execute_contract(admin.clone(), env.gateway.clone(), &ExecuteMsg::Unpause {}, &[])
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::NotPaused
    );

    env.app
        .execute_contract(admin.clone(), env.gateway.clone(), &ExecuteMsg::Pause {}, &[])
        .unwrap();
    let err = env
        .app
        .execute_contract(admin.clone(), env.gateway.clone(), &ExecuteMsg::Pause {}, &[])
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::ContractPaused
    );
}

#[test]
fn test_pause_does_not_block_ledger() {
    let mut env = setup();
    let admin = env.admin.clone();
    let user = env.user.clone();
    grant(&mut env, Role::Pauser, &admin);
    env.app
        .execute_contract(admin, env.gateway.clone(), &ExecuteMsg::Pause {}, &[])
        .unwrap();

    approve(&mut env.app, &user, &env.real_token, &env.gateway, 300);
    env.app
        .execute_contract(
            user.clone(),
            env.gateway.clone(),
            &ExecuteMsg::Deposit {
                token_id: env.token_id,
                real_amount: Uint128::from(300u128),
                wrapped_amount: Uint128::zero(),
            },
            &[],
        )
        .unwrap();
    env.app
        .execute_contract(
            user.clone(),
            env.gateway.clone(),
            &ExecuteMsg::Withdraw {
                token_id: env.token_id,
                real_amount: Uint128::from(100u128),
                wrapped_amount: Uint128::from(100u128),
            },
            &[],
        )
        .unwrap();

    assert_eq!(balance(&env.app, &env.real_token, &user), 800);
    assert_eq!(balance(&env.app, &env.wrapped_token, &user), 1100);
}

// ============================================================================
// Swaps
// ============================================================================

#[test]
fn test_swap_wrapped_to_real() {
    let mut env = setup();
    let user = env.user.clone();
    let before = balance(&env.app, &env.real_token, &user);

    approve(&mut env.app, &user, &env.wrapped_token, &env.gateway, 100);
    env.app
        .execute_contract(
            user.clone(),
            env.gateway.clone(),
            &ExecuteMsg::SwapToReal {
                token_id: env.token_id,
                amount: Uint128::from(100u128),
            },
            &[],
        )
        .unwrap();

    assert_eq!(balance(&env.app, &env.real_token, &user) - before, 100);
    assert_eq!(balance(&env.app, &env.wrapped_token, &user), 900);

    let reserves: ReservesResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.gateway,
            &QueryMsg::Reserves {
                token_id: env.token_id,
            },
        )
        .unwrap();
    assert_eq!(reserves.real_reserve, Uint128::from(900u128));
    assert_eq!(reserves.wrapped_reserve, Uint128::from(1100u128));
}

#[test]
fn test_swap_real_to_wrapped() {
    let mut env = setup();
    let user = env.user.clone();
    let before = balance(&env.app, &env.wrapped_token, &user);

    approve(&mut env.app, &user, &env.real_token, &env.gateway, 100);
    env.app
        .execute_contract(
            user.clone(),
            env.gateway.clone(),
            &ExecuteMsg::SwapToWrapped {
                token_id: env.token_id,
                amount: Uint128::from(100u128),
            },
            &[],
        )
        .unwrap();

    assert_eq!(balance(&env.app, &env.wrapped_token, &user) - before, 100);
    assert_eq!(balance(&env.app, &env.real_token, &user), 900);
}

#[test]
fn test_swap_to_recipient() {
    let mut env = setup();
    let user = env.user.clone();
    let recipient = env.recipient.clone();

    approve(&mut env.app, &user, &env.wrapped_token, &env.gateway, 250);
    env.app
        .execute_contract(
            user.clone(),
            env.gateway.clone(),
            &ExecuteMsg::SwapToRealTo {
                token_id: env.token_id,
                amount: Uint128::from(250u128),
                recipient: recipient.to_string(),
            },
            &[],
        )
        .unwrap();

    assert_eq!(balance(&env.app, &env.real_token, &recipient), 250);
    assert_eq!(balance(&env.app, &env.real_token, &user), 1000);
    assert_eq!(balance(&env.app, &env.wrapped_token, &user), 750);

    approve(&mut env.app, &user, &env.real_token, &env.gateway, 50);
    env.app
        .execute_contract(
            user.clone(),
            env.gateway.clone(),
            &ExecuteMsg::SwapToWrappedTo {
                token_id: env.token_id,
                amount: Uint128::from(50u128),
                recipient: recipient.to_string(),
            },
            &[],
        )
        .unwrap();

    assert_eq!(balance(&env.app, &env.wrapped_token, &recipient), 50);
}

#[test]
fn test_swap_zero_amount_rejected() {
    let mut env = setup();
    let user = env.user.clone();

    for msg in [
        ExecuteMsg::SwapToReal {
            token_id: env.token_id,
            amount: Uint128::zero(),
        },
        ExecuteMsg::SwapToWrapped {
            token_id: env.token_id,
            amount: Uint128::zero(),
        },
    ] {
        let err = env
            .app
            .execute_contract(user.clone(), env.gateway.clone(), &msg, &[])
            .unwrap_err();
        assert_eq!(
            err.downcast::<ContractError>().unwrap(),
            ContractError::InvalidAmount {
                reason: "amount must be greater than 0".to_string(),
            }
        );
    }
}

#[test]
fn test_swap_to_empty_recipient_rejected() {
    let mut env = setup();
    let user = env.user.clone();
    approve(&mut env.app, &user, &env.wrapped_token, &env.gateway, 100);
    approve(&mut env.app, &user, &env.real_token, &env.gateway, 100);

    for msg in [
        ExecuteMsg::SwapToRealTo {
            token_id: env.token_id,
            amount: Uint128::from(100u128),
            recipient: String::new(),
        },
        ExecuteMsg::SwapToWrappedTo {
            token_id: env.token_id,
            amount: Uint128::from(100u128),
            recipient: String::new(),
        },
    ] {
        let err = env
            .app
            .execute_contract(user.clone(), env.gateway.clone(), &msg, &[])
            .unwrap_err();
        assert!(matches!(
            err.downcast::<ContractError>().unwrap(),
            ContractError::InvalidRecipient { .. }
        ));
    }
}

#[test]
fn test_swap_insufficient_reserve_rejected() {
    let mut env = setup();
    let user = env.user.clone();
    mint(&mut env.app, &env.admin, &env.wrapped_token, &user, 9000);
    approve(&mut env.app, &user, &env.wrapped_token, &env.gateway, 10_000);

    let err = env
        .app
        .execute_contract(
            user.clone(),
            env.gateway.clone(),
            &ExecuteMsg::SwapToReal {
                token_id: env.token_id,
                amount: Uint128::from(10_000u128),
            },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::InsufficientBalance {
            holder: env.gateway.to_string(),
            asset: env.real_token.to_string(),
            available: Uint128::from(1000u128),
            required: Uint128::from(10_000u128),
        }
    );

    // Nothing moved
    assert_eq!(balance(&env.app, &env.wrapped_token, &user), 10_000);
}

#[test]
fn test_swap_without_allowance_rejected() {
    let mut env = setup();
    let user = env.user.clone();

    let res = env.app.execute_contract(
        user.clone(),
        env.gateway.clone(),
        &ExecuteMsg::SwapToReal {
            token_id: env.token_id,
            amount: Uint128::from(100u128),
        },
        &[],
    );
    assert!(res.is_err());
    assert_eq!(balance(&env.app, &env.real_token, &user), 1000);
    assert_eq!(balance(&env.app, &env.real_token, &env.gateway), 1000);
}

#[test]
fn test_swap_unknown_token_rejected() {
    let mut env = setup();
    let err = env
        .app
        .execute_contract(
            env.user.clone(),
            env.gateway.clone(),
            &ExecuteMsg::SwapToReal {
                token_id: 42,
                amount: Uint128::from(1u128),
            },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::UnknownToken { token_id: 42 }
    );
}
