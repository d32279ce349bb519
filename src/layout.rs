//! The system instruction layout registry.
//!
//! Every system instruction is encoded as a little-endian `u32` opcode
//! followed by its fields in declaration order. The table below is fixed per
//! protocol version; opcodes the codec does not support stay as gaps so the
//! numbering of later instructions never shifts.

use {
    crate::pubkey::{Pubkey, PUBKEY_BYTES},
    num_derive::{FromPrimitive, ToPrimitive},
    num_traits::FromPrimitive as _,
    std::convert::TryFrom,
    thiserror::Error,
};

/// Number of bytes in an encoded opcode
pub const OPCODE_BYTES: usize = 4;
/// Number of bytes in the length prefix of a variable-length field
pub const LENGTH_PREFIX_BYTES: usize = 8;

pub const LAMPORTS: &str = "lamports";
pub const SPACE: &str = "space";
pub const PROGRAM_ID: &str = "program_id";
pub const BASE: &str = "base";
pub const SEED: &str = "seed";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("unknown instruction opcode {0}")]
    UnknownOpcode(u32),

    #[error("field `{field}` does not match the layout: {reason}")]
    SchemaMismatch { field: &'static str, reason: String },

    #[error("field `{field}` needs {needed} bytes, only {remaining} remain")]
    TruncatedData {
        field: &'static str,
        needed: usize,
        remaining: usize,
    },

    #[error("invalid instruction: expected opcode {expected}, found {found}")]
    OpcodeMismatch { expected: u32, found: u32 },

    #[error("{remaining} unexpected bytes after the last field")]
    TrailingBytes { remaining: usize },

    #[error("instruction needs {expected} account keys, found {found}")]
    AccountKeyMismatch { expected: usize, found: usize },

    #[error("instruction targets program {0}, not the system program")]
    ProgramIdMismatch(Pubkey),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive)]
#[repr(u32)]
pub enum SystemOpcode {
    CreateAccount = 0,
    Assign = 1,
    Transfer = 2,
    CreateAccountWithSeed = 3,
    /// Reserved
    AdvanceNonceAccount = 4,
    /// Reserved
    WithdrawNonceAccount = 5,
    /// Reserved
    InitializeNonceAccount = 6,
    /// Reserved
    AuthorizeNonceAccount = 7,
    Allocate = 8,
    AllocateWithSeed = 9,
    AssignWithSeed = 10,
}

impl SystemOpcode {
    pub const fn index(self) -> u32 {
        self as u32
    }

    pub fn from_index(index: u32) -> Option<Self> {
        Self::from_u32(index)
    }

    /// Reserved opcodes keep their index but have no registered layout.
    pub fn is_reserved(self) -> bool {
        matches!(
            self,
            Self::AdvanceNonceAccount
                | Self::WithdrawNonceAccount
                | Self::InitializeNonceAccount
                | Self::AuthorizeNonceAccount
        )
    }

    pub fn layout(self) -> Result<&'static InstructionLayout, LayoutError> {
        layout_for(self.index())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    U8,
    U16,
    U32,
    U64,
    Pubkey,
    /// `u64` little-endian length followed by that many bytes
    Bytes,
}

impl FieldKind {
    /// Encoded width, or `None` for length-prefixed fields.
    pub const fn fixed_size(self) -> Option<usize> {
        match self {
            Self::U8 => Some(1),
            Self::U16 => Some(2),
            Self::U32 => Some(4),
            Self::U64 => Some(8),
            Self::Pubkey => Some(PUBKEY_BYTES),
            Self::Bytes => None,
        }
    }

    /// Width of an unsigned integer field.
    pub const fn uint_width(self) -> Option<usize> {
        match self {
            Self::U8 | Self::U16 | Self::U32 | Self::U64 => self.fixed_size(),
            Self::Pubkey | Self::Bytes => None,
        }
    }

    /// Largest value an unsigned integer field can hold.
    pub const fn max_value(self) -> Option<u64> {
        match self {
            Self::U8 => Some(u8::MAX as u64),
            Self::U16 => Some(u16::MAX as u64),
            Self::U32 => Some(u32::MAX as u64),
            Self::U64 => Some(u64::MAX),
            Self::Pubkey | Self::Bytes => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutField {
    pub name: &'static str,
    pub kind: FieldKind,
}

const fn field(name: &'static str, kind: FieldKind) -> LayoutField {
    LayoutField { name, kind }
}

#[derive(Debug, PartialEq, Eq)]
pub struct InstructionLayout {
    pub opcode: SystemOpcode,
    pub name: &'static str,
    pub fields: &'static [LayoutField],
}

impl InstructionLayout {
    pub const fn index(&self) -> u32 {
        self.opcode.index()
    }

    pub fn field(&self, name: &str) -> Option<&'static LayoutField> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Payload length including the opcode, when no field is length-prefixed.
    pub fn fixed_size(&self) -> Option<usize> {
        self.fields
            .iter()
            .try_fold(OPCODE_BYTES, |size, field| {
                field.kind.fixed_size().map(|width| size + width)
            })
    }
}

const CREATE_ACCOUNT_FIELDS: &[LayoutField] = &[
    field(LAMPORTS, FieldKind::U64),
    field(SPACE, FieldKind::U64),
    field(PROGRAM_ID, FieldKind::Pubkey),
];
const ASSIGN_FIELDS: &[LayoutField] = &[field(PROGRAM_ID, FieldKind::Pubkey)];
const TRANSFER_FIELDS: &[LayoutField] = &[field(LAMPORTS, FieldKind::U64)];
const CREATE_ACCOUNT_WITH_SEED_FIELDS: &[LayoutField] = &[
    field(BASE, FieldKind::Pubkey),
    field(SEED, FieldKind::Bytes),
    field(LAMPORTS, FieldKind::U64),
    field(SPACE, FieldKind::U64),
    field(PROGRAM_ID, FieldKind::Pubkey),
];
const ALLOCATE_FIELDS: &[LayoutField] = &[field(SPACE, FieldKind::U64)];
const ALLOCATE_WITH_SEED_FIELDS: &[LayoutField] = &[
    field(BASE, FieldKind::Pubkey),
    field(SEED, FieldKind::Bytes),
    field(SPACE, FieldKind::U64),
    field(PROGRAM_ID, FieldKind::Pubkey),
];
const ASSIGN_WITH_SEED_FIELDS: &[LayoutField] = &[
    field(BASE, FieldKind::Pubkey),
    field(SEED, FieldKind::Bytes),
    field(PROGRAM_ID, FieldKind::Pubkey),
];

const fn layout(
    opcode: SystemOpcode,
    name: &'static str,
    fields: &'static [LayoutField],
) -> Option<InstructionLayout> {
    Some(InstructionLayout {
        opcode,
        name,
        fields,
    })
}

/// Dense table indexed by opcode.
static SYSTEM_INSTRUCTION_LAYOUTS: [Option<InstructionLayout>; 11] = [
    layout(
        SystemOpcode::CreateAccount,
        "createAccount",
        CREATE_ACCOUNT_FIELDS,
    ),
    layout(SystemOpcode::Assign, "assign", ASSIGN_FIELDS),
    layout(SystemOpcode::Transfer, "transfer", TRANSFER_FIELDS),
    layout(
        SystemOpcode::CreateAccountWithSeed,
        "createAccountWithSeed",
        CREATE_ACCOUNT_WITH_SEED_FIELDS,
    ),
    None,
    None,
    None,
    None,
    layout(SystemOpcode::Allocate, "allocate", ALLOCATE_FIELDS),
    layout(
        SystemOpcode::AllocateWithSeed,
        "allocateWithSeed",
        ALLOCATE_WITH_SEED_FIELDS,
    ),
    layout(
        SystemOpcode::AssignWithSeed,
        "assignWithSeed",
        ASSIGN_WITH_SEED_FIELDS,
    ),
];

pub fn layout_for(opcode: u32) -> Result<&'static InstructionLayout, LayoutError> {
    usize::try_from(opcode)
        .ok()
        .and_then(|index| SYSTEM_INSTRUCTION_LAYOUTS.get(index))
        .and_then(Option::as_ref)
        .ok_or(LayoutError::UnknownOpcode(opcode))
}

/// Registered layouts in opcode order.
pub fn layouts() -> impl Iterator<Item = &'static InstructionLayout> {
    SYSTEM_INSTRUCTION_LAYOUTS.iter().flatten()
}
