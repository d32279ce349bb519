//! Defines the Instruction container and the account metadata it carries.

use {
    crate::pubkey::Pubkey,
    serde_derive::{Deserialize, Serialize},
};

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct Instruction {
    /// Pubkey of the program that executes this instruction
    pub program_id: Pubkey,
    /// Metadata describing accounts that should be passed to the program
    pub accounts: Vec<AccountMeta>,
    /// Opaque data passed to the program for its own interpretation
    pub data: Vec<u8>,
}

impl Instruction {
    pub fn new_with_bytes(program_id: Pubkey, data: &[u8], accounts: Vec<AccountMeta>) -> Self {
        Self {
            program_id,
            accounts,
            data: data.to_vec(),
        }
    }

    /// Key of the account at `position`, if the instruction carries one there.
    pub fn account_key(&self, position: usize) -> Option<&Pubkey> {
        self.accounts.get(position).map(|meta| &meta.pubkey)
    }
}

/// Account metadata used to define Instructions
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct AccountMeta {
    /// An account's public key
    pub pubkey: Pubkey,
    /// True if an Instruction requires a Transaction signature matching `pubkey`.
    pub is_signer: bool,
    /// True if the `pubkey` can be loaded as a read-write account.
    pub is_writable: bool,
}

impl AccountMeta {
    /// Construct metadata for a writable account.
    pub fn new(pubkey: Pubkey, is_signer: bool) -> Self {
        Self {
            pubkey,
            is_signer,
            is_writable: true,
        }
    }

    /// Construct metadata for a read-only account.
    pub fn new_readonly(pubkey: Pubkey, is_signer: bool) -> Self {
        Self {
            pubkey,
            is_signer,
            is_writable: false,
        }
    }
}
