use cosmwasm_std::{Addr, StdResult};
use cw_multi_test::{App, ContractWrapper, Executor};

use kudos_ledger::contract::{execute, instantiate, query};
use kudos_ledger::msg::{
    AccountStatusResponse, ExecuteMsg, HistoryResponse, InstantiateMsg, LeaderboardResponse,
    ProfileResponse, QueryMsg,
};
use kudos_ledger::ContractError;
use kudos_shared::days;

fn setup() -> (App, Addr) {
    let mut app = App::default();
    let code = ContractWrapper::new(execute, instantiate, query);
    let code_id = app.store_code(Box::new(code));
    let contract = app
        .instantiate_contract(
            code_id,
            Addr::unchecked("admin"),
            &InstantiateMsg {
                grace_period: None,
                reregistration_cooldown: None,
            },
            &[],
            "kudos-ledger",
            None,
        )
        .unwrap();
    (app, contract)
}

fn run(
    app: &mut App,
    contract: &Addr,
    sender: &str,
    msg: ExecuteMsg,
) -> Result<(), ContractError> {
    app.execute_contract(Addr::unchecked(sender), contract.clone(), &msg, &[])
        .map(|_| ())
        .map_err(|err| err.downcast::<ContractError>().unwrap())
}

fn register(app: &mut App, contract: &Addr, sender: &str, handle: &str) {
    run(
        app,
        contract,
        sender,
        ExecuteMsg::Register {
            handle: handle.to_string(),
        },
    )
    .unwrap();
}

fn give(
    app: &mut App,
    contract: &Addr,
    sender: &str,
    to: &str,
    reference: &str,
) -> Result<(), ContractError> {
    run(
        app,
        contract,
        sender,
        ExecuteMsg::GiveKudos {
            to_handle: to.to_string(),
            source_reference: reference.to_string(),
        },
    )
}

fn advance(app: &mut App, seconds: u64) {
    app.update_block(|block| block.time = block.time.plus_seconds(seconds));
}

fn status(app: &App, contract: &Addr, identity: &str) -> AccountStatusResponse {
    app.wrap()
        .query_wasm_smart(
            contract,
            &QueryMsg::AccountStatus {
                identity: identity.to_string(),
            },
        )
        .unwrap()
}

#[test]
fn kudos_between_two_accounts() {
    let (mut app, contract) = setup();
    register(&mut app, &contract, "alice", "alice");
    register(&mut app, &contract, "bob", "bob");

    give(&mut app, &contract, "alice", "bob", "ref1").unwrap();

    let err = give(&mut app, &contract, "alice", "bob", "ref1").unwrap_err();
    assert!(matches!(err, ContractError::DuplicateReference {}));
    let err = give(&mut app, &contract, "alice", "alice", "ref2").unwrap_err();
    assert!(matches!(err, ContractError::SelfKudos {}));

    let bob: ProfileResponse = app
        .wrap()
        .query_wasm_smart(
            &contract,
            &QueryMsg::Profile {
                handle: "bob".to_string(),
                viewer: None,
            },
        )
        .unwrap();
    assert_eq!(bob.kudos_received, 1);

    let alice: ProfileResponse = app
        .wrap()
        .query_wasm_smart(
            &contract,
            &QueryMsg::ProfileOf {
                identity: "alice".to_string(),
                viewer: None,
            },
        )
        .unwrap();
    assert_eq!(alice.kudos_given, 1);
}

#[test]
fn relayed_deletion_after_grace_period() {
    let (mut app, contract) = setup();
    register(&mut app, &contract, "alice", "alice");
    register(&mut app, &contract, "bob", "bob");
    give(&mut app, &contract, "bob", "alice", "ref1").unwrap();

    run(&mut app, &contract, "alice", ExecuteMsg::RequestDeletion {}).unwrap();

    let delete = ExecuteMsg::ExecuteDeletion {
        identity: "alice".to_string(),
    };

    advance(&mut app, days(3));
    let err = run(&mut app, &contract, "relayer", delete.clone()).unwrap_err();
    assert!(matches!(err, ContractError::GracePeriodActive { .. }));
    assert!(status(&app, &contract, "alice").is_registered);

    advance(&mut app, days(4) + 1);
    run(&mut app, &contract, "relayer", delete.clone()).unwrap();
    assert!(!status(&app, &contract, "alice").is_registered);

    let err = run(&mut app, &contract, "relayer", delete).unwrap_err();
    assert!(matches!(err, ContractError::NoPendingDeletion {}));

    // the retired handle is gone for good
    let err = run(
        &mut app,
        &contract,
        "carol",
        ExecuteMsg::Register {
            handle: "alice".to_string(),
        },
    )
    .unwrap_err();
    assert!(matches!(err, ContractError::HandleRetired {}));

    let available: bool = app
        .wrap()
        .query_wasm_smart(
            &contract,
            &QueryMsg::IsHandleAvailable {
                handle: "alice".to_string(),
            },
        )
        .unwrap();
    assert!(!available);

    // the ledger still holds the record
    let history: HistoryResponse = app
        .wrap()
        .query_wasm_smart(
            &contract,
            &QueryMsg::HistoryPage {
                offset: 0,
                limit: 5,
            },
        )
        .unwrap();
    assert_eq!(history.records.len(), 1);
    assert_eq!(history.records[0].to_handle, "alice");
    assert_eq!(history.records[0].to, Addr::unchecked("alice"));
}

#[test]
fn reregistration_after_cooldown() {
    let (mut app, contract) = setup();
    register(&mut app, &contract, "alice", "alice");
    register(&mut app, &contract, "bob", "bob");
    give(&mut app, &contract, "bob", "alice", "ref1").unwrap();

    run(&mut app, &contract, "alice", ExecuteMsg::DeleteImmediately {}).unwrap();

    advance(&mut app, days(29));
    let err = run(
        &mut app,
        &contract,
        "alice",
        ExecuteMsg::Register {
            handle: "alice_v2".to_string(),
        },
    )
    .unwrap_err();
    assert!(matches!(err, ContractError::CooldownActive { .. }));
    assert!(!status(&app, &contract, "alice").can_reregister);

    advance(&mut app, days(1));
    assert!(status(&app, &contract, "alice").can_reregister);
    register(&mut app, &contract, "alice", "alice_v2");

    // a consumed reference stays consumed across re-registration
    let err = give(&mut app, &contract, "bob", "alice_v2", "ref1").unwrap_err();
    assert!(matches!(err, ContractError::DuplicateReference {}));

    // counters start fresh for the new account
    let board: LeaderboardResponse = app
        .wrap()
        .query_wasm_smart(&contract, &QueryMsg::Leaderboard { limit: 10 })
        .unwrap();
    let alice = board
        .entries
        .iter()
        .find(|entry| entry.handle == "alice_v2")
        .unwrap();
    assert_eq!(alice.kudos_received, 0);
}

#[test]
fn private_accounts_stay_off_the_leaderboard() {
    let (mut app, contract) = setup();
    register(&mut app, &contract, "alice", "alice");
    register(&mut app, &contract, "bob", "bob");
    give(&mut app, &contract, "alice", "bob", "ref1").unwrap();
    give(&mut app, &contract, "alice", "bob", "ref2").unwrap();

    run(
        &mut app,
        &contract,
        "bob",
        ExecuteMsg::SetPrivacy { is_private: true },
    )
    .unwrap();

    let board: LeaderboardResponse = app
        .wrap()
        .query_wasm_smart(&contract, &QueryMsg::Leaderboard { limit: 10 })
        .unwrap();
    assert!(board.entries.iter().all(|entry| entry.handle != "bob"));

    let hidden: StdResult<ProfileResponse> = app.wrap().query_wasm_smart(
        &contract,
        &QueryMsg::Profile {
            handle: "bob".to_string(),
            viewer: Some("alice".to_string()),
        },
    );
    assert!(hidden.is_err());

    let own: ProfileResponse = app
        .wrap()
        .query_wasm_smart(
            &contract,
            &QueryMsg::Profile {
                handle: "bob".to_string(),
                viewer: Some("bob".to_string()),
            },
        )
        .unwrap();
    assert_eq!(own.kudos_received, 2);
}
