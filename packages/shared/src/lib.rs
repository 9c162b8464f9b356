// Shared handle rules and time helpers for the kudos ledger on CosmWasm

use cosmwasm_schema::cw_serde;

/// Shortest handle accepted at registration
pub const MIN_HANDLE_LENGTH: usize = 3;
/// Longest handle accepted at registration
pub const MAX_HANDLE_LENGTH: usize = 15;

pub const SECONDS_PER_DAY: u64 = 86_400;

/// Why a handle fails format validation
#[cw_serde]
#[derive(Copy)]
pub enum HandleViolation {
    TooShort,
    TooLong,
    InvalidCharacter,
}

/// Availability of a handle, with the reason when it cannot be registered
#[cw_serde]
#[derive(Copy)]
pub enum HandleAvailability {
    Available,
    Taken,
    Retired,
    Invalid,
}

/// Check length in bytes first, then charset `[A-Za-z0-9_]`. A short
/// non-ASCII handle such as "éé" is 4 bytes and fails on the charset.
pub fn validate_handle(handle: &str) -> Result<(), HandleViolation> {
    if handle.len() < MIN_HANDLE_LENGTH {
        return Err(HandleViolation::TooShort);
    }
    if handle.len() > MAX_HANDLE_LENGTH {
        return Err(HandleViolation::TooLong);
    }
    if !handle
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'_')
    {
        return Err(HandleViolation::InvalidCharacter);
    }
    Ok(())
}

pub fn is_valid_handle(handle: &str) -> bool {
    validate_handle(handle).is_ok()
}

pub const fn days(count: u64) -> u64 {
    count * SECONDS_PER_DAY
}

/// Timestamp at which a waiting period started at `since` runs out
pub fn elapses_at(since: u64, period: u64) -> u64 {
    since.saturating_add(period)
}

/// True once `now` has reached the end of the waiting period
pub fn has_elapsed(now: u64, since: u64, period: u64) -> bool {
    now >= elapses_at(since, period)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_handle_lengths() {
        assert_eq!(validate_handle("ab"), Err(HandleViolation::TooShort));
        assert_eq!(validate_handle(""), Err(HandleViolation::TooShort));
        assert!(validate_handle("abc").is_ok());
        assert!(validate_handle("abcdefghijklmno").is_ok());
        assert_eq!(
            validate_handle("abcdefghijklmnop"),
            Err(HandleViolation::TooLong)
        );
    }

    #[test]
    fn test_validate_handle_charset() {
        assert!(validate_handle("Alice_99").is_ok());
        assert_eq!(
            validate_handle("al ice"),
            Err(HandleViolation::InvalidCharacter)
        );
        assert_eq!(
            validate_handle("bob-smith"),
            Err(HandleViolation::InvalidCharacter)
        );
        assert_eq!(
            validate_handle("zoë_x"),
            Err(HandleViolation::InvalidCharacter)
        );
        assert!(!is_valid_handle("@bob"));
        // lengths count bytes
        assert_eq!(
            validate_handle("éé"),
            Err(HandleViolation::InvalidCharacter)
        );
    }

    #[test]
    fn test_has_elapsed() {
        assert!(!has_elapsed(100, 50, 60));
        assert!(has_elapsed(110, 50, 60));
        assert!(has_elapsed(111, 50, 60));
        // saturates instead of wrapping
        assert!(!has_elapsed(u64::MAX - 1, u64::MAX - 5, 10));
    }

    #[test]
    fn test_days() {
        assert_eq!(days(7), 604_800);
        assert_eq!(days(30), 2_592_000);
    }
}
