use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;
use kudos_shared::HandleAvailability;

use crate::state::KudosRecord;

#[cw_serde]
pub struct InstantiateMsg {
    /// Grace period between deletion request and execution in seconds (default 7 days)
    pub grace_period: Option<u64>,
    /// Cooldown before a deleted address may register again in seconds (default 30 days)
    pub reregistration_cooldown: Option<u64>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Register the sender under a handle
    Register { handle: String },
    /// Start the grace period for deleting the sender's account
    RequestDeletion {},
    /// Cancel the sender's pending deletion
    CancelDeletion {},
    /// Finish a pending deletion once its grace period is over (any caller)
    ExecuteDeletion { identity: String },
    /// Delete the sender's account without a grace period
    DeleteImmediately {},
    /// Hide or show the sender's profile
    SetPrivacy { is_private: bool },
    /// Give kudos to a handle, citing a unique source reference
    GiveKudos {
        to_handle: String,
        source_reference: String,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Get config
    #[returns(ConfigResponse)]
    Config {},

    /// Check whether a handle can be registered
    #[returns(bool)]
    IsHandleAvailable { handle: String },

    /// Handle availability with the reason
    #[returns(HandleStatusResponse)]
    HandleStatus { handle: String },

    /// Lifecycle status of an address
    #[returns(AccountStatusResponse)]
    AccountStatus { identity: String },

    /// Profile by handle, `viewer` is the address asking
    #[returns(ProfileResponse)]
    Profile {
        handle: String,
        viewer: Option<String>,
    },

    /// Profile by address
    #[returns(ProfileResponse)]
    ProfileOf {
        identity: String,
        viewer: Option<String>,
    },

    /// Resolve an active handle to its owner
    #[returns(IdentityResponse)]
    IdentityOf { handle: String },

    /// Top receivers among ledger participants
    #[returns(LeaderboardResponse)]
    Leaderboard { limit: u32 },

    /// Slice of the kudos log in append order
    #[returns(HistoryResponse)]
    HistoryPage { offset: u64, limit: u32 },

    /// Kudos given by an address
    #[returns(HistoryResponse)]
    KudosSent {
        identity: String,
        viewer: Option<String>,
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    /// Kudos received by an address
    #[returns(HistoryResponse)]
    KudosReceived {
        identity: String,
        viewer: Option<String>,
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    /// Ledger totals
    #[returns(StatsResponse)]
    Stats {},
}

// Response types

#[cw_serde]
pub struct ConfigResponse {
    pub grace_period: u64,
    pub reregistration_cooldown: u64,
    pub min_handle_length: u32,
    pub max_handle_length: u32,
    pub max_reference_length: u32,
}

#[cw_serde]
pub struct HandleStatusResponse {
    pub handle: String,
    pub availability: HandleAvailability,
}

#[cw_serde]
pub struct AccountStatusResponse {
    pub is_registered: bool,
    pub handle: Option<String>,
    pub is_pending_deletion: bool,
    pub deletion_eligible_at: Option<u64>,
    pub can_reregister: bool,
    pub reregistration_available_at: Option<u64>,
}

#[cw_serde]
pub struct ProfileResponse {
    pub identity: Addr,
    pub handle: String,
    pub kudos_received: u64,
    pub kudos_given: u64,
    pub registered_at: u64,
    pub is_private: bool,
    pub is_pending_deletion: bool,
}

#[cw_serde]
pub struct IdentityResponse {
    pub identity: Addr,
}

#[cw_serde]
pub struct LeaderboardEntry {
    pub handle: String,
    pub kudos_received: u64,
    pub identity: Addr,
}

#[cw_serde]
pub struct LeaderboardResponse {
    pub entries: Vec<LeaderboardEntry>,
}

#[cw_serde]
pub struct HistoryResponse {
    pub records: Vec<KudosRecord>,
}

#[cw_serde]
pub struct StatsResponse {
    pub total_kudos: u64,
    pub active_accounts: u64,
    pub participants: u64,
}
