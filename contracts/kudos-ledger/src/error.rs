use cosmwasm_std::StdError;
use kudos_shared::HandleViolation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },

    #[error("Address is already registered")]
    AlreadyRegistered {},

    #[error("Address is not registered")]
    NotRegistered {},

    #[error("Handle too short (minimum {min} characters)")]
    HandleTooShort { min: usize },

    #[error("Handle too long (maximum {max} characters)")]
    HandleTooLong { max: usize },

    #[error("Handle may only contain letters, digits and underscores")]
    InvalidHandleFormat {},

    #[error("Handle is already taken")]
    HandleTaken {},

    #[error("Handle belonged to a deleted account and is retired forever")]
    HandleRetired {},

    #[error("Re-registration cooldown active until {available_at}")]
    CooldownActive { available_at: u64 },

    #[error("Deletion already requested")]
    DeletionAlreadyRequested {},

    #[error("No pending deletion")]
    NoPendingDeletion {},

    #[error("Grace period not elapsed (deletion possible at {eligible_at})")]
    GracePeriodActive { eligible_at: u64 },

    #[error("Account is pending deletion")]
    PendingDeletion {},

    #[error("Source reference is empty")]
    EmptyReference {},

    #[error("Source reference too long (maximum {max} bytes)")]
    ReferenceTooLong { max: usize },

    #[error("Source reference already used")]
    DuplicateReference {},

    #[error("Recipient not found")]
    RecipientNotFound {},

    #[error("Cannot give kudos to yourself")]
    SelfKudos {},

    #[error("Profile not found")]
    ProfileNotFound {},

    #[error("Profile is private")]
    ProfilePrivate {},
}

/// Broad category of a rejected operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input, rejected before any state is read
    Validation,
    /// Input collides with existing state
    Conflict,
    /// Depends on lifecycle or elapsed time; may succeed later
    State,
    NotFound,
    Privacy,
    Internal,
}

impl ContractError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ContractError::Std(_) => ErrorKind::Internal,
            ContractError::InvalidConfig { .. }
            | ContractError::HandleTooShort { .. }
            | ContractError::HandleTooLong { .. }
            | ContractError::InvalidHandleFormat {}
            | ContractError::EmptyReference {}
            | ContractError::ReferenceTooLong { .. } => ErrorKind::Validation,
            ContractError::AlreadyRegistered {}
            | ContractError::HandleTaken {}
            | ContractError::HandleRetired {}
            | ContractError::DuplicateReference {}
            | ContractError::SelfKudos {} => ErrorKind::Conflict,
            ContractError::NotRegistered {}
            | ContractError::CooldownActive { .. }
            | ContractError::DeletionAlreadyRequested {}
            | ContractError::NoPendingDeletion {}
            | ContractError::GracePeriodActive { .. }
            | ContractError::PendingDeletion {} => ErrorKind::State,
            ContractError::RecipientNotFound {} | ContractError::ProfileNotFound {} => {
                ErrorKind::NotFound
            }
            ContractError::ProfilePrivate {} => ErrorKind::Privacy,
        }
    }
}

impl From<HandleViolation> for ContractError {
    fn from(violation: HandleViolation) -> Self {
        match violation {
            HandleViolation::TooShort => ContractError::HandleTooShort {
                min: kudos_shared::MIN_HANDLE_LENGTH,
            },
            HandleViolation::TooLong => ContractError::HandleTooLong {
                max: kudos_shared::MAX_HANDLE_LENGTH,
            },
            HandleViolation::InvalidCharacter => ContractError::InvalidHandleFormat {},
        }
    }
}
