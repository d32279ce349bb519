//! The `transaction` module provides a minimal container for unsigned instructions.

use {
    crate::{instruction::Instruction, pubkey::Pubkey},
    serde_derive::{Deserialize, Serialize},
};

/// An ordered list of instructions awaiting signing and submission.
#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Eq, Clone)]
pub struct Transaction {
    pub instructions: Vec<Instruction>,
}

impl Transaction {
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    /// Append an instruction, returning `self` for chaining.
    pub fn add(&mut self, instruction: Instruction) -> &mut Self {
        self.instructions.push(instruction);
        self
    }

    /// Every account and program key referenced by the instructions, first
    /// occurrence order, without duplicates.
    pub fn account_keys(&self) -> Vec<Pubkey> {
        let mut keys: Vec<Pubkey> = vec![];
        let referenced = self.instructions.iter().flat_map(|instruction| {
            instruction
                .accounts
                .iter()
                .map(|meta| meta.pubkey)
                .chain(std::iter::once(instruction.program_id))
        });
        for key in referenced {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        keys
    }
}

impl From<Instruction> for Transaction {
    fn from(instruction: Instruction) -> Self {
        Self::new(vec![instruction])
    }
}
