use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};
use sha2::{Digest, Sha256};

#[cw_serde]
pub struct Config {
    /// Delay between a deletion request and its execution (seconds)
    pub grace_period: u64,
    /// Delay after deletion before the same address may register again (seconds)
    pub reregistration_cooldown: u64,
}

#[cw_serde]
pub struct Account {
    /// Handle bound to this account
    pub handle: String,
    /// Kudos received
    pub kudos_received: u64,
    /// Kudos given
    pub kudos_given: u64,
    /// Registration timestamp
    pub registered_at: u64,
    /// Set while a deletion request is pending
    pub deletion_requested_at: Option<u64>,
}

impl Account {
    pub fn is_pending_deletion(&self) -> bool {
        self.deletion_requested_at.is_some()
    }
}

#[cw_serde]
pub struct KudosRecord {
    /// Position in the append-order log
    pub id: u64,
    pub from: Addr,
    pub to: Addr,
    /// Sender handle when the kudos was given
    pub from_handle: String,
    /// Recipient handle when the kudos was given
    pub to_handle: String,
    pub timestamp: u64,
    /// Caller-supplied source reference (deduplication key)
    pub source_reference: String,
}

/// Configuration
pub const CONFIG: Item<Config> = Item::new("config");

/// Active accounts indexed by address
pub const ACCOUNTS: Map<&Addr, Account> = Map::new("accounts");

/// Handle to owner for currently active accounts
pub const HANDLES: Map<&str, Addr> = Map::new("handles");

/// Handles of deleted accounts, with retirement time. Never removed.
pub const RETIRED_HANDLES: Map<&str, u64> = Map::new("retired_handles");

/// Time of the last deletion per address
pub const DELETION_COOLDOWNS: Map<&Addr, u64> = Map::new("deletion_cooldowns");

/// Addresses that opted out of public profile reads
pub const PRIVATE_ACCOUNTS: Map<&Addr, bool> = Map::new("private_accounts");

/// Number of records in the kudos log (also the next id)
pub const KUDOS_COUNT: Item<u64> = Item::new("kudos_count");

/// Kudos log indexed by id
pub const KUDOS: Map<u64, KudosRecord> = Map::new("kudos");

/// SHA-256 of a consumed source reference to the kudos id that consumed it
pub const CONSUMED_REFERENCES: Map<&[u8], u64> = Map::new("consumed_references");

/// Kudos by sender (for queries)
pub const SENT_KUDOS: Map<(&Addr, u64), ()> = Map::new("sent_kudos");

/// Kudos by recipient (for queries)
pub const RECEIVED_KUDOS: Map<(&Addr, u64), ()> = Map::new("received_kudos");

/// Every address that ever sent or received kudos, with its first-seen ordinal
pub const PARTICIPANTS: Map<&Addr, u64> = Map::new("participants");

/// Participants in first-seen order
pub const PARTICIPANT_ORDER: Map<u64, Addr> = Map::new("participant_order");

/// Number of participants (also the next ordinal)
pub const PARTICIPANT_COUNT: Item<u64> = Item::new("participant_count");

/// Number of currently registered accounts
pub const ACTIVE_ACCOUNTS: Item<u64> = Item::new("active_accounts");

/// Storage key for a source reference
pub fn reference_key(source_reference: &str) -> Vec<u8> {
    Sha256::digest(source_reference.as_bytes()).to_vec()
}
