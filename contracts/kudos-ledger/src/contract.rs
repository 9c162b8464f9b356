use std::cmp::Reverse;

use cosmwasm_std::{
    entry_point, to_json_binary, Addr, Binary, Deps, DepsMut, Env, Event, MessageInfo, Order,
    Response, StdResult, Storage,
};
use cw2::set_contract_version;
use cw_storage_plus::Bound;
use kudos_shared::{
    days, elapses_at, has_elapsed, is_valid_handle, validate_handle, HandleAvailability,
    MAX_HANDLE_LENGTH, MIN_HANDLE_LENGTH,
};

use crate::error::ContractError;
use crate::msg::{
    AccountStatusResponse, ConfigResponse, ExecuteMsg, HandleStatusResponse, HistoryResponse,
    IdentityResponse, InstantiateMsg, LeaderboardEntry, LeaderboardResponse, ProfileResponse,
    QueryMsg, StatsResponse,
};
use crate::state::{
    reference_key, Account, Config, KudosRecord, ACCOUNTS, ACTIVE_ACCOUNTS, CONFIG,
    CONSUMED_REFERENCES, DELETION_COOLDOWNS, HANDLES, KUDOS, KUDOS_COUNT, PARTICIPANTS,
    PARTICIPANT_COUNT, PARTICIPANT_ORDER, PRIVATE_ACCOUNTS, RECEIVED_KUDOS, RETIRED_HANDLES,
    SENT_KUDOS,
};

const CONTRACT_NAME: &str = "crates.io:kudos-ledger";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_GRACE_PERIOD: u64 = days(7);
const DEFAULT_REREGISTRATION_COOLDOWN: u64 = days(30);
const MAX_REFERENCE_LENGTH: usize = 512;

const DEFAULT_PAGE_LIMIT: u32 = 10;
const MAX_PAGE_LIMIT: u32 = 30;

/// Type of the structured event attached to every state change
pub const LEDGER_EVENT: &str = "kudos_ledger";

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        grace_period: msg.grace_period.unwrap_or(DEFAULT_GRACE_PERIOD),
        reregistration_cooldown: msg
            .reregistration_cooldown
            .unwrap_or(DEFAULT_REREGISTRATION_COOLDOWN),
    };
    if config.grace_period == 0 {
        return Err(ContractError::InvalidConfig {
            reason: "grace_period must be positive".to_string(),
        });
    }
    if config.reregistration_cooldown == 0 {
        return Err(ContractError::InvalidConfig {
            reason: "reregistration_cooldown must be positive".to_string(),
        });
    }

    CONFIG.save(deps.storage, &config)?;
    KUDOS_COUNT.save(deps.storage, &0u64)?;
    PARTICIPANT_COUNT.save(deps.storage, &0u64)?;
    ACTIVE_ACCOUNTS.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("grace_period", config.grace_period.to_string())
        .add_attribute(
            "reregistration_cooldown",
            config.reregistration_cooldown.to_string(),
        ))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Register { handle } => execute_register(deps, env, info, handle),
        ExecuteMsg::RequestDeletion {} => execute_request_deletion(deps, env, info),
        ExecuteMsg::CancelDeletion {} => execute_cancel_deletion(deps, env, info),
        ExecuteMsg::ExecuteDeletion { identity } => {
            execute_execute_deletion(deps, env, info, identity)
        }
        ExecuteMsg::DeleteImmediately {} => execute_delete_immediately(deps, env, info),
        ExecuteMsg::SetPrivacy { is_private } => execute_set_privacy(deps, env, info, is_private),
        ExecuteMsg::GiveKudos {
            to_handle,
            source_reference,
        } => execute_give_kudos(deps, env, info, to_handle, source_reference),
    }
}

pub fn execute_register(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    handle: String,
) -> Result<Response, ContractError> {
    if ACCOUNTS.has(deps.storage, &info.sender) {
        return Err(ContractError::AlreadyRegistered {});
    }

    validate_handle(&handle)?;

    if HANDLES.has(deps.storage, handle.as_str()) {
        return Err(ContractError::HandleTaken {});
    }
    if RETIRED_HANDLES.has(deps.storage, handle.as_str()) {
        return Err(ContractError::HandleRetired {});
    }

    let now = env.block.time.seconds();
    let config = CONFIG.load(deps.storage)?;
    if let Some(deleted_at) = DELETION_COOLDOWNS.may_load(deps.storage, &info.sender)? {
        if !has_elapsed(now, deleted_at, config.reregistration_cooldown) {
            return Err(ContractError::CooldownActive {
                available_at: elapses_at(deleted_at, config.reregistration_cooldown),
            });
        }
    }

    let account = Account {
        handle: handle.clone(),
        kudos_received: 0,
        kudos_given: 0,
        registered_at: now,
        deletion_requested_at: None,
    };
    ACCOUNTS.save(deps.storage, &info.sender, &account)?;
    HANDLES.save(deps.storage, handle.as_str(), &info.sender)?;
    ACTIVE_ACCOUNTS.update(deps.storage, |count| -> StdResult<_> { Ok(count + 1) })?;

    Ok(Response::new()
        .add_attribute("method", "register")
        .add_attribute("identity", info.sender.clone())
        .add_attribute("handle", handle.clone())
        .add_event(ledger_event("registered", &info.sender, &handle, now)))
}

pub fn execute_request_deletion(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let now = env.block.time.seconds();
    let config = CONFIG.load(deps.storage)?;

    let mut account = ACCOUNTS
        .may_load(deps.storage, &info.sender)?
        .ok_or(ContractError::NotRegistered {})?;
    if account.is_pending_deletion() {
        return Err(ContractError::DeletionAlreadyRequested {});
    }

    account.deletion_requested_at = Some(now);
    ACCOUNTS.save(deps.storage, &info.sender, &account)?;

    Ok(Response::new()
        .add_attribute("method", "request_deletion")
        .add_attribute("identity", info.sender.clone())
        .add_attribute(
            "eligible_at",
            elapses_at(now, config.grace_period).to_string(),
        )
        .add_event(ledger_event(
            "deletion_requested",
            &info.sender,
            &account.handle,
            now,
        )))
}

pub fn execute_cancel_deletion(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let mut account = ACCOUNTS
        .may_load(deps.storage, &info.sender)?
        .ok_or(ContractError::NotRegistered {})?;
    if !account.is_pending_deletion() {
        return Err(ContractError::NoPendingDeletion {});
    }

    account.deletion_requested_at = None;
    ACCOUNTS.save(deps.storage, &info.sender, &account)?;

    Ok(Response::new()
        .add_attribute("method", "cancel_deletion")
        .add_attribute("identity", info.sender.clone())
        .add_event(ledger_event(
            "deletion_cancelled",
            &info.sender,
            &account.handle,
            env.block.time.seconds(),
        )))
}

/// Anyone may finish a deletion whose grace period is over, so execution can be relayed.
pub fn execute_execute_deletion(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    identity: String,
) -> Result<Response, ContractError> {
    let identity_addr = deps.api.addr_validate(&identity)?;
    let now = env.block.time.seconds();
    let config = CONFIG.load(deps.storage)?;

    let account = ACCOUNTS
        .may_load(deps.storage, &identity_addr)?
        .ok_or(ContractError::NoPendingDeletion {})?;
    let requested_at = account
        .deletion_requested_at
        .ok_or(ContractError::NoPendingDeletion {})?;
    if !has_elapsed(now, requested_at, config.grace_period) {
        return Err(ContractError::GracePeriodActive {
            eligible_at: elapses_at(requested_at, config.grace_period),
        });
    }

    retire_account(deps.storage, &identity_addr, &account, now)?;

    Ok(Response::new()
        .add_attribute("method", "execute_deletion")
        .add_attribute("identity", identity_addr.clone())
        .add_attribute("executor", info.sender)
        .add_attribute("handle", account.handle.clone())
        .add_event(ledger_event(
            "deletion_executed",
            &identity_addr,
            &account.handle,
            now,
        )))
}

pub fn execute_delete_immediately(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let now = env.block.time.seconds();

    let account = ACCOUNTS
        .may_load(deps.storage, &info.sender)?
        .ok_or(ContractError::NotRegistered {})?;

    retire_account(deps.storage, &info.sender, &account, now)?;

    Ok(Response::new()
        .add_attribute("method", "delete_immediately")
        .add_attribute("identity", info.sender.clone())
        .add_attribute("handle", account.handle.clone())
        .add_event(ledger_event(
            "deleted_immediately",
            &info.sender,
            &account.handle,
            now,
        )))
}

/// Allowed while a deletion is pending, unlike giving or receiving kudos.
pub fn execute_set_privacy(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    is_private: bool,
) -> Result<Response, ContractError> {
    let account = ACCOUNTS
        .may_load(deps.storage, &info.sender)?
        .ok_or(ContractError::NotRegistered {})?;

    if is_private {
        PRIVATE_ACCOUNTS.save(deps.storage, &info.sender, &true)?;
    } else {
        PRIVATE_ACCOUNTS.remove(deps.storage, &info.sender);
    }

    Ok(Response::new()
        .add_attribute("method", "set_privacy")
        .add_attribute("identity", info.sender.clone())
        .add_attribute("is_private", is_private.to_string())
        .add_event(
            ledger_event(
                "privacy_updated",
                &info.sender,
                &account.handle,
                env.block.time.seconds(),
            )
            .add_attribute("is_private", is_private.to_string()),
        ))
}

pub fn execute_give_kudos(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    to_handle: String,
    source_reference: String,
) -> Result<Response, ContractError> {
    let mut sender = ACCOUNTS
        .may_load(deps.storage, &info.sender)?
        .ok_or(ContractError::NotRegistered {})?;
    if sender.is_pending_deletion() {
        return Err(ContractError::PendingDeletion {});
    }

    if source_reference.is_empty() {
        return Err(ContractError::EmptyReference {});
    }
    if source_reference.len() > MAX_REFERENCE_LENGTH {
        return Err(ContractError::ReferenceTooLong {
            max: MAX_REFERENCE_LENGTH,
        });
    }
    let ref_key = reference_key(&source_reference);
    if CONSUMED_REFERENCES.has(deps.storage, ref_key.as_slice()) {
        return Err(ContractError::DuplicateReference {});
    }

    let recipient_addr = HANDLES
        .may_load(deps.storage, to_handle.as_str())?
        .ok_or(ContractError::RecipientNotFound {})?;
    if recipient_addr == info.sender {
        return Err(ContractError::SelfKudos {});
    }
    let mut recipient = ACCOUNTS
        .may_load(deps.storage, &recipient_addr)?
        .ok_or(ContractError::RecipientNotFound {})?;
    if recipient.is_pending_deletion() {
        return Err(ContractError::PendingDeletion {});
    }

    let now = env.block.time.seconds();
    let id = KUDOS_COUNT.load(deps.storage)?;
    let record = KudosRecord {
        id,
        from: info.sender.clone(),
        to: recipient_addr.clone(),
        from_handle: sender.handle.clone(),
        to_handle: recipient.handle.clone(),
        timestamp: now,
        source_reference,
    };

    sender.kudos_given += 1;
    recipient.kudos_received += 1;
    ACCOUNTS.save(deps.storage, &info.sender, &sender)?;
    ACCOUNTS.save(deps.storage, &recipient_addr, &recipient)?;

    KUDOS.save(deps.storage, id, &record)?;
    KUDOS_COUNT.save(deps.storage, &(id + 1))?;
    CONSUMED_REFERENCES.save(deps.storage, ref_key.as_slice(), &id)?;
    SENT_KUDOS.save(deps.storage, (&info.sender, id), &())?;
    RECEIVED_KUDOS.save(deps.storage, (&recipient_addr, id), &())?;
    record_participant(deps.storage, &info.sender)?;
    record_participant(deps.storage, &recipient_addr)?;

    let reference_hash = hex::encode(&ref_key);

    Ok(Response::new()
        .add_attribute("method", "give_kudos")
        .add_attribute("sender", info.sender.clone())
        .add_attribute("recipient", recipient_addr.clone())
        .add_attribute("kudos_id", id.to_string())
        .add_event(
            ledger_event("kudos_given", &info.sender, &sender.handle, now)
                .add_attribute("recipient", recipient_addr)
                .add_attribute("recipient_handle", recipient.handle)
                .add_attribute("kudos_id", id.to_string())
                .add_attribute("reference_hash", reference_hash),
        ))
}

/// Removes an account and everything bound to it, retiring its handle.
/// The kudos log keeps its records.
fn retire_account(
    storage: &mut dyn Storage,
    identity: &Addr,
    account: &Account,
    now: u64,
) -> StdResult<()> {
    RETIRED_HANDLES.save(storage, account.handle.as_str(), &now)?;
    DELETION_COOLDOWNS.save(storage, identity, &now)?;
    HANDLES.remove(storage, account.handle.as_str());
    PRIVATE_ACCOUNTS.remove(storage, identity);
    ACCOUNTS.remove(storage, identity);
    ACTIVE_ACCOUNTS.update(storage, |count| -> StdResult<_> {
        Ok(count.saturating_sub(1))
    })?;
    Ok(())
}

fn record_participant(storage: &mut dyn Storage, identity: &Addr) -> StdResult<()> {
    if PARTICIPANTS.has(storage, identity) {
        return Ok(());
    }
    let ordinal = PARTICIPANT_COUNT.load(storage)?;
    PARTICIPANTS.save(storage, identity, &ordinal)?;
    PARTICIPANT_ORDER.save(storage, ordinal, identity)?;
    PARTICIPANT_COUNT.save(storage, &(ordinal + 1))
}

fn ledger_event(kind: &str, identity: &Addr, handle: &str, timestamp: u64) -> Event {
    Event::new(LEDGER_EVENT)
        .add_attribute("kind", kind)
        .add_attribute("identity", identity)
        .add_attribute("handle", handle)
        .add_attribute("timestamp", timestamp.to_string())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    let binary = match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?)?,
        QueryMsg::IsHandleAvailable { handle } => to_json_binary(
            &(query_handle_availability(deps, &handle)? == HandleAvailability::Available),
        )?,
        QueryMsg::HandleStatus { handle } => to_json_binary(&HandleStatusResponse {
            availability: query_handle_availability(deps, &handle)?,
            handle,
        })?,
        QueryMsg::AccountStatus { identity } => {
            to_json_binary(&query_account_status(deps, env, identity)?)?
        }
        QueryMsg::Profile { handle, viewer } => {
            to_json_binary(&query_profile(deps, handle, viewer)?)?
        }
        QueryMsg::ProfileOf { identity, viewer } => {
            to_json_binary(&query_profile_of(deps, identity, viewer)?)?
        }
        QueryMsg::IdentityOf { handle } => to_json_binary(&query_identity_of(deps, handle)?)?,
        QueryMsg::Leaderboard { limit } => to_json_binary(&query_leaderboard(deps, limit)?)?,
        QueryMsg::HistoryPage { offset, limit } => {
            to_json_binary(&query_history_page(deps, offset, limit)?)?
        }
        QueryMsg::KudosSent {
            identity,
            viewer,
            start_after,
            limit,
        } => to_json_binary(&query_kudos_sent(
            deps,
            identity,
            viewer,
            start_after,
            limit,
        )?)?,
        QueryMsg::KudosReceived {
            identity,
            viewer,
            start_after,
            limit,
        } => to_json_binary(&query_kudos_received(
            deps,
            identity,
            viewer,
            start_after,
            limit,
        )?)?,
        QueryMsg::Stats {} => to_json_binary(&query_stats(deps)?)?,
    };
    Ok(binary)
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        grace_period: config.grace_period,
        reregistration_cooldown: config.reregistration_cooldown,
        min_handle_length: MIN_HANDLE_LENGTH as u32,
        max_handle_length: MAX_HANDLE_LENGTH as u32,
        max_reference_length: MAX_REFERENCE_LENGTH as u32,
    })
}

fn query_handle_availability(deps: Deps, handle: &str) -> StdResult<HandleAvailability> {
    if !is_valid_handle(handle) {
        return Ok(HandleAvailability::Invalid);
    }
    if HANDLES.has(deps.storage, handle) {
        return Ok(HandleAvailability::Taken);
    }
    if RETIRED_HANDLES.has(deps.storage, handle) {
        return Ok(HandleAvailability::Retired);
    }
    Ok(HandleAvailability::Available)
}

fn query_account_status(
    deps: Deps,
    env: Env,
    identity: String,
) -> StdResult<AccountStatusResponse> {
    let identity_addr = deps.api.addr_validate(&identity)?;
    let config = CONFIG.load(deps.storage)?;
    let now = env.block.time.seconds();

    let account = ACCOUNTS.may_load(deps.storage, &identity_addr)?;
    let reregistration_available_at = DELETION_COOLDOWNS
        .may_load(deps.storage, &identity_addr)?
        .map(|deleted_at| elapses_at(deleted_at, config.reregistration_cooldown));

    let deletion_requested_at = account.as_ref().and_then(|a| a.deletion_requested_at);

    Ok(AccountStatusResponse {
        is_registered: account.is_some(),
        handle: account.map(|a| a.handle),
        is_pending_deletion: deletion_requested_at.is_some(),
        deletion_eligible_at: deletion_requested_at
            .map(|requested_at| elapses_at(requested_at, config.grace_period)),
        can_reregister: reregistration_available_at.map_or(true, |at| now >= at),
        reregistration_available_at,
    })
}

fn is_private(storage: &dyn Storage, identity: &Addr) -> StdResult<bool> {
    Ok(PRIVATE_ACCOUNTS
        .may_load(storage, identity)?
        .unwrap_or(false))
}

/// Private accounts are only visible to themselves.
fn ensure_visible(deps: Deps, owner: &Addr, viewer: Option<String>) -> Result<(), ContractError> {
    if !is_private(deps.storage, owner)? {
        return Ok(());
    }
    let viewer = viewer
        .map(|v| deps.api.addr_validate(&v))
        .transpose()?;
    if viewer.as_ref() == Some(owner) {
        Ok(())
    } else {
        Err(ContractError::ProfilePrivate {})
    }
}

fn load_profile(
    deps: Deps,
    identity: Addr,
    viewer: Option<String>,
) -> Result<ProfileResponse, ContractError> {
    let account = ACCOUNTS
        .may_load(deps.storage, &identity)?
        .ok_or(ContractError::ProfileNotFound {})?;
    ensure_visible(deps, &identity, viewer)?;

    Ok(ProfileResponse {
        is_private: is_private(deps.storage, &identity)?,
        is_pending_deletion: account.is_pending_deletion(),
        identity,
        handle: account.handle,
        kudos_received: account.kudos_received,
        kudos_given: account.kudos_given,
        registered_at: account.registered_at,
    })
}

fn query_profile(
    deps: Deps,
    handle: String,
    viewer: Option<String>,
) -> Result<ProfileResponse, ContractError> {
    let identity = HANDLES
        .may_load(deps.storage, handle.as_str())?
        .ok_or(ContractError::ProfileNotFound {})?;
    load_profile(deps, identity, viewer)
}

fn query_profile_of(
    deps: Deps,
    identity: String,
    viewer: Option<String>,
) -> Result<ProfileResponse, ContractError> {
    let identity_addr = deps.api.addr_validate(&identity)?;
    load_profile(deps, identity_addr, viewer)
}

fn query_identity_of(deps: Deps, handle: String) -> Result<IdentityResponse, ContractError> {
    let identity = HANDLES
        .may_load(deps.storage, handle.as_str())?
        .ok_or(ContractError::ProfileNotFound {})?;
    Ok(IdentityResponse { identity })
}

/// Ranks every ledger participant that is registered, active and public by
/// kudos received. Ties go to the earlier registration, then to whoever
/// appeared in the ledger first.
fn query_leaderboard(deps: Deps, limit: u32) -> StdResult<LeaderboardResponse> {
    if limit == 0 {
        return Ok(LeaderboardResponse { entries: vec![] });
    }

    let mut ranked: Vec<(u64, LeaderboardEntry)> = vec![];
    for item in PARTICIPANT_ORDER.range(deps.storage, None, None, Order::Ascending) {
        let (_, identity) = item?;
        let account = match ACCOUNTS.may_load(deps.storage, &identity)? {
            Some(account) => account,
            None => continue,
        };
        if account.is_pending_deletion() || is_private(deps.storage, &identity)? {
            continue;
        }
        ranked.push((
            account.registered_at,
            LeaderboardEntry {
                handle: account.handle,
                kudos_received: account.kudos_received,
                identity,
            },
        ));
    }

    // stable: equal keys keep first-seen order
    ranked.sort_by_key(|(registered_at, entry)| (Reverse(entry.kudos_received), *registered_at));
    ranked.truncate(limit as usize);

    Ok(LeaderboardResponse {
        entries: ranked.into_iter().map(|(_, entry)| entry).collect(),
    })
}

fn query_history_page(deps: Deps, offset: u64, limit: u32) -> StdResult<HistoryResponse> {
    let count = KUDOS_COUNT.load(deps.storage)?;
    if offset >= count || limit == 0 {
        return Ok(HistoryResponse { records: vec![] });
    }

    let records = KUDOS
        .range(
            deps.storage,
            Some(Bound::inclusive(offset)),
            None,
            Order::Ascending,
        )
        .take(limit as usize)
        .map(|item| item.map(|(_, record)| record))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(HistoryResponse { records })
}

fn query_kudos_sent(
    deps: Deps,
    identity: String,
    viewer: Option<String>,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> Result<HistoryResponse, ContractError> {
    let identity_addr = deps.api.addr_validate(&identity)?;
    ensure_visible(deps, &identity_addr, viewer)?;
    let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).min(MAX_PAGE_LIMIT) as usize;

    let records = SENT_KUDOS
        .prefix(&identity_addr)
        .range(
            deps.storage,
            start_after.map(Bound::exclusive),
            None,
            Order::Ascending,
        )
        .take(limit)
        .map(|item| {
            let (id, _) = item?;
            KUDOS.load(deps.storage, id)
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(HistoryResponse { records })
}

fn query_kudos_received(
    deps: Deps,
    identity: String,
    viewer: Option<String>,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> Result<HistoryResponse, ContractError> {
    let identity_addr = deps.api.addr_validate(&identity)?;
    ensure_visible(deps, &identity_addr, viewer)?;
    let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).min(MAX_PAGE_LIMIT) as usize;

    let records = RECEIVED_KUDOS
        .prefix(&identity_addr)
        .range(
            deps.storage,
            start_after.map(Bound::exclusive),
            None,
            Order::Ascending,
        )
        .take(limit)
        .map(|item| {
            let (id, _) = item?;
            KUDOS.load(deps.storage, id)
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(HistoryResponse { records })
}

fn query_stats(deps: Deps) -> StdResult<StatsResponse> {
    Ok(StatsResponse {
        total_kudos: KUDOS_COUNT.load(deps.storage)?,
        active_accounts: ACTIVE_ACCOUNTS.load(deps.storage)?,
        participants: PARTICIPANT_COUNT.load(deps.storage)?,
    })
}
