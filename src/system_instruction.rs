//! Builders and decoders for system program instructions.
//!
//! Each builder encodes its parameters through the layout registry and
//! returns a [`Transaction`] holding exactly one [`Instruction`]. Each decoder
//! reverses that, taking account keys from their fixed positions in the
//! instruction and scalar fields from the payload.

use {
    crate::{
        codec::{self, FieldValues},
        instruction::{AccountMeta, Instruction},
        layout::{
            layout_for, InstructionLayout, LayoutError, SystemOpcode, BASE, LAMPORTS, PROGRAM_ID,
            SEED, SPACE,
        },
        pubkey::{Pubkey, MAX_SEED_LEN},
        system_program,
        transaction::Transaction,
    },
    log::*,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAccountParams {
    /// Funding account
    pub from_pubkey: Pubkey,
    pub new_account_pubkey: Pubkey,
    /// Lamports to transfer to the new account
    pub lamports: u64,
    /// Bytes of memory to allocate
    pub space: u64,
    /// Owner of the new account
    pub program_id: Pubkey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignParams {
    pub account_pubkey: Pubkey,
    pub program_id: Pubkey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferParams {
    pub from_pubkey: Pubkey,
    pub to_pubkey: Pubkey,
    pub lamports: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAccountWithSeedParams {
    pub from_pubkey: Pubkey,
    /// Address derived from `base_pubkey`, `seed` and `program_id`
    pub new_account_pubkey: Pubkey,
    pub base_pubkey: Pubkey,
    pub seed: String,
    pub lamports: u64,
    pub space: u64,
    pub program_id: Pubkey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocateParams {
    pub account_pubkey: Pubkey,
    pub space: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocateWithSeedParams {
    pub account_pubkey: Pubkey,
    pub base_pubkey: Pubkey,
    pub seed: String,
    pub space: u64,
    pub program_id: Pubkey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignWithSeedParams {
    pub account_pubkey: Pubkey,
    pub base_pubkey: Pubkey,
    pub seed: String,
    pub program_id: Pubkey,
}

/// Every system instruction this crate can build and decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemInstruction {
    /// Create a new account
    ///
    /// # Account references
    ///   0. `[WRITE, SIGNER]` Funding account
    ///   1. `[WRITE, SIGNER]` New account
    CreateAccount(CreateAccountParams),

    /// Assign account to a program
    ///
    /// # Account references
    ///   0. `[WRITE, SIGNER]` Assigned account public key
    Assign(AssignParams),

    /// Transfer lamports
    ///
    /// # Account references
    ///   0. `[WRITE, SIGNER]` Funding account
    ///   1. `[WRITE]` Recipient account
    Transfer(TransferParams),

    /// Create a new account at an address derived from a base pubkey and a seed
    ///
    /// # Account references
    ///   0. `[WRITE, SIGNER]` Funding account
    ///   1. `[WRITE]` Created account
    ///   2. `[SIGNER]` (optional) Base account; omitted when it is the funding account
    CreateAccountWithSeed(CreateAccountWithSeedParams),

    /// Allocate space in a (possibly new) account without funding
    ///
    /// # Account references
    ///   0. `[WRITE, SIGNER]` New account
    Allocate(AllocateParams),

    /// Allocate space for and assign an account at an address derived from a
    /// base public key and a seed
    ///
    /// # Account references
    ///   0. `[WRITE]` Allocated account
    ///   1. `[SIGNER]` Base account
    AllocateWithSeed(AllocateWithSeedParams),

    /// Assign account to a program based on a seed
    ///
    /// # Account references
    ///   0. `[WRITE]` Assigned account
    ///   1. `[SIGNER]` Base account
    AssignWithSeed(AssignWithSeedParams),
}

impl SystemInstruction {
    pub fn opcode(&self) -> SystemOpcode {
        match self {
            Self::CreateAccount(_) => SystemOpcode::CreateAccount,
            Self::Assign(_) => SystemOpcode::Assign,
            Self::Transfer(_) => SystemOpcode::Transfer,
            Self::CreateAccountWithSeed(_) => SystemOpcode::CreateAccountWithSeed,
            Self::Allocate(_) => SystemOpcode::Allocate,
            Self::AllocateWithSeed(_) => SystemOpcode::AllocateWithSeed,
            Self::AssignWithSeed(_) => SystemOpcode::AssignWithSeed,
        }
    }

    pub fn to_instruction(&self) -> Result<Instruction, LayoutError> {
        match self {
            Self::CreateAccount(params) => create_account_instruction(params),
            Self::Assign(params) => assign_instruction(params),
            Self::Transfer(params) => transfer_instruction(params),
            Self::CreateAccountWithSeed(params) => create_account_with_seed_instruction(params),
            Self::Allocate(params) => allocate_instruction(params),
            Self::AllocateWithSeed(params) => allocate_with_seed_instruction(params),
            Self::AssignWithSeed(params) => assign_with_seed_instruction(params),
        }
    }

    pub fn build(&self) -> Result<Transaction, LayoutError> {
        self.to_instruction().map(Transaction::from)
    }

    /// Decode any supported system instruction, dispatching on its opcode.
    pub fn decode(instruction: &Instruction) -> Result<Self, LayoutError> {
        match decode_instruction_layout(instruction)?.opcode {
            SystemOpcode::CreateAccount => decode_create_account(instruction).map(Self::CreateAccount),
            SystemOpcode::Assign => decode_assign(instruction).map(Self::Assign),
            SystemOpcode::Transfer => decode_transfer(instruction).map(Self::Transfer),
            SystemOpcode::CreateAccountWithSeed => {
                decode_create_account_with_seed(instruction).map(Self::CreateAccountWithSeed)
            }
            SystemOpcode::Allocate => decode_allocate(instruction).map(Self::Allocate),
            SystemOpcode::AllocateWithSeed => {
                decode_allocate_with_seed(instruction).map(Self::AllocateWithSeed)
            }
            SystemOpcode::AssignWithSeed => {
                decode_assign_with_seed(instruction).map(Self::AssignWithSeed)
            }
            reserved @ (SystemOpcode::AdvanceNonceAccount
            | SystemOpcode::WithdrawNonceAccount
            | SystemOpcode::InitializeNonceAccount
            | SystemOpcode::AuthorizeNonceAccount) => {
                Err(LayoutError::UnknownOpcode(reserved.index()))
            }
        }
    }
}

/// Layout matching the opcode of `instruction`'s payload. The whole payload is
/// decoded, so a malformed body is reported here too.
pub fn decode_instruction_layout(
    instruction: &Instruction,
) -> Result<&'static InstructionLayout, LayoutError> {
    let (opcode, _) = codec::decode(&instruction.data)?;
    layout_for(opcode)
}

fn check_seed(seed: &str) -> Result<(), LayoutError> {
    if seed.len() > MAX_SEED_LEN {
        return Err(LayoutError::SchemaMismatch {
            field: SEED,
            reason: format!("{} bytes exceeds the {} byte limit", seed.len(), MAX_SEED_LEN),
        });
    }
    Ok(())
}

fn system_instruction(
    opcode: SystemOpcode,
    values: &FieldValues,
    account_metas: Vec<AccountMeta>,
) -> Result<Instruction, LayoutError> {
    let data = codec::encode(opcode.index(), values)?;
    Ok(Instruction::new_with_bytes(
        system_program::id(),
        &data,
        account_metas,
    ))
}

/// Checks shared by every decoder; returns the decoded field values.
fn decode_system(
    instruction: &Instruction,
    expected: SystemOpcode,
    num_accounts: usize,
) -> Result<FieldValues, LayoutError> {
    if !system_program::check_id(&instruction.program_id) {
        return Err(LayoutError::ProgramIdMismatch(instruction.program_id));
    }
    let (opcode, values) = codec::decode(&instruction.data)?;
    if opcode != expected.index() {
        debug!(
            "expected {:?} instruction, found opcode {}",
            expected, opcode
        );
        return Err(LayoutError::OpcodeMismatch {
            expected: expected.index(),
            found: opcode,
        });
    }
    check_num_accounts(&instruction.accounts, num_accounts)?;
    Ok(values)
}

fn check_num_accounts(accounts: &[AccountMeta], num: usize) -> Result<(), LayoutError> {
    if accounts.len() < num {
        Err(LayoutError::AccountKeyMismatch {
            expected: num,
            found: accounts.len(),
        })
    } else {
        Ok(())
    }
}

fn decode_seed(values: &FieldValues) -> Result<String, LayoutError> {
    let seed = values.string(SEED)?;
    check_seed(&seed)?;
    Ok(seed)
}

pub fn create_account_instruction(params: &CreateAccountParams) -> Result<Instruction, LayoutError> {
    let account_metas = vec![
        AccountMeta::new(params.from_pubkey, true),
        AccountMeta::new(params.new_account_pubkey, true),
    ];
    let values = FieldValues::new()
        .with(LAMPORTS, params.lamports)
        .with(SPACE, params.space)
        .with(PROGRAM_ID, params.program_id);
    system_instruction(SystemOpcode::CreateAccount, &values, account_metas)
}

/// Create a new account owned by `params.program_id`.
pub fn create_account(params: &CreateAccountParams) -> Result<Transaction, LayoutError> {
    create_account_instruction(params).map(Transaction::from)
}

pub fn decode_create_account(instruction: &Instruction) -> Result<CreateAccountParams, LayoutError> {
    let values = decode_system(instruction, SystemOpcode::CreateAccount, 2)?;
    Ok(CreateAccountParams {
        from_pubkey: instruction.accounts[0].pubkey,
        new_account_pubkey: instruction.accounts[1].pubkey,
        lamports: values.u64(LAMPORTS)?,
        space: values.u64(SPACE)?,
        program_id: values.pubkey(PROGRAM_ID)?,
    })
}

pub fn assign_instruction(params: &AssignParams) -> Result<Instruction, LayoutError> {
    let account_metas = vec![AccountMeta::new(params.account_pubkey, true)];
    let values = FieldValues::new().with(PROGRAM_ID, params.program_id);
    system_instruction(SystemOpcode::Assign, &values, account_metas)
}

/// Assign an account to a program.
pub fn assign(params: &AssignParams) -> Result<Transaction, LayoutError> {
    assign_instruction(params).map(Transaction::from)
}

pub fn decode_assign(instruction: &Instruction) -> Result<AssignParams, LayoutError> {
    let values = decode_system(instruction, SystemOpcode::Assign, 1)?;
    Ok(AssignParams {
        account_pubkey: instruction.accounts[0].pubkey,
        program_id: values.pubkey(PROGRAM_ID)?,
    })
}

pub fn transfer_instruction(params: &TransferParams) -> Result<Instruction, LayoutError> {
    let account_metas = vec![
        AccountMeta::new(params.from_pubkey, true),
        AccountMeta::new(params.to_pubkey, false),
    ];
    let values = FieldValues::new().with(LAMPORTS, params.lamports);
    system_instruction(SystemOpcode::Transfer, &values, account_metas)
}

/// Transfer lamports between two accounts.
pub fn transfer(params: &TransferParams) -> Result<Transaction, LayoutError> {
    transfer_instruction(params).map(Transaction::from)
}

pub fn decode_transfer(instruction: &Instruction) -> Result<TransferParams, LayoutError> {
    let values = decode_system(instruction, SystemOpcode::Transfer, 2)?;
    Ok(TransferParams {
        from_pubkey: instruction.accounts[0].pubkey,
        to_pubkey: instruction.accounts[1].pubkey,
        lamports: values.u64(LAMPORTS)?,
    })
}

pub fn create_account_with_seed_instruction(
    params: &CreateAccountWithSeedParams,
) -> Result<Instruction, LayoutError> {
    check_seed(&params.seed)?;
    let mut account_metas = vec![
        AccountMeta::new(params.from_pubkey, true),
        AccountMeta::new(params.new_account_pubkey, false),
    ];
    if params.base_pubkey != params.from_pubkey {
        account_metas.push(AccountMeta::new_readonly(params.base_pubkey, true));
    }
    let values = FieldValues::new()
        .with(BASE, params.base_pubkey)
        .with(SEED, params.seed.as_str())
        .with(LAMPORTS, params.lamports)
        .with(SPACE, params.space)
        .with(PROGRAM_ID, params.program_id);
    system_instruction(SystemOpcode::CreateAccountWithSeed, &values, account_metas)
}

/// Create a new account at an address derived from a base pubkey and a seed.
pub fn create_account_with_seed(
    params: &CreateAccountWithSeedParams,
) -> Result<Transaction, LayoutError> {
    create_account_with_seed_instruction(params).map(Transaction::from)
}

pub fn decode_create_account_with_seed(
    instruction: &Instruction,
) -> Result<CreateAccountWithSeedParams, LayoutError> {
    let values = decode_system(instruction, SystemOpcode::CreateAccountWithSeed, 2)?;
    Ok(CreateAccountWithSeedParams {
        from_pubkey: instruction.accounts[0].pubkey,
        new_account_pubkey: instruction.accounts[1].pubkey,
        base_pubkey: values.pubkey(BASE)?,
        seed: decode_seed(&values)?,
        lamports: values.u64(LAMPORTS)?,
        space: values.u64(SPACE)?,
        program_id: values.pubkey(PROGRAM_ID)?,
    })
}

pub fn allocate_instruction(params: &AllocateParams) -> Result<Instruction, LayoutError> {
    let account_metas = vec![AccountMeta::new(params.account_pubkey, true)];
    let values = FieldValues::new().with(SPACE, params.space);
    system_instruction(SystemOpcode::Allocate, &values, account_metas)
}

/// Allocate space in an account without funding it.
pub fn allocate(params: &AllocateParams) -> Result<Transaction, LayoutError> {
    allocate_instruction(params).map(Transaction::from)
}

pub fn decode_allocate(instruction: &Instruction) -> Result<AllocateParams, LayoutError> {
    let values = decode_system(instruction, SystemOpcode::Allocate, 1)?;
    Ok(AllocateParams {
        account_pubkey: instruction.accounts[0].pubkey,
        space: values.u64(SPACE)?,
    })
}

pub fn allocate_with_seed_instruction(
    params: &AllocateWithSeedParams,
) -> Result<Instruction, LayoutError> {
    check_seed(&params.seed)?;
    let account_metas = vec![
        AccountMeta::new(params.account_pubkey, false),
        AccountMeta::new_readonly(params.base_pubkey, true),
    ];
    let values = FieldValues::new()
        .with(BASE, params.base_pubkey)
        .with(SEED, params.seed.as_str())
        .with(SPACE, params.space)
        .with(PROGRAM_ID, params.program_id);
    system_instruction(SystemOpcode::AllocateWithSeed, &values, account_metas)
}

pub fn allocate_with_seed(params: &AllocateWithSeedParams) -> Result<Transaction, LayoutError> {
    allocate_with_seed_instruction(params).map(Transaction::from)
}

pub fn decode_allocate_with_seed(
    instruction: &Instruction,
) -> Result<AllocateWithSeedParams, LayoutError> {
    let values = decode_system(instruction, SystemOpcode::AllocateWithSeed, 2)?;
    Ok(AllocateWithSeedParams {
        account_pubkey: instruction.accounts[0].pubkey,
        base_pubkey: values.pubkey(BASE)?,
        seed: decode_seed(&values)?,
        space: values.u64(SPACE)?,
        program_id: values.pubkey(PROGRAM_ID)?,
    })
}

pub fn assign_with_seed_instruction(
    params: &AssignWithSeedParams,
) -> Result<Instruction, LayoutError> {
    check_seed(&params.seed)?;
    let account_metas = vec![
        AccountMeta::new(params.account_pubkey, false),
        AccountMeta::new_readonly(params.base_pubkey, true),
    ];
    let values = FieldValues::new()
        .with(BASE, params.base_pubkey)
        .with(SEED, params.seed.as_str())
        .with(PROGRAM_ID, params.program_id);
    system_instruction(SystemOpcode::AssignWithSeed, &values, account_metas)
}

pub fn assign_with_seed(params: &AssignWithSeedParams) -> Result<Transaction, LayoutError> {
    assign_with_seed_instruction(params).map(Transaction::from)
}

pub fn decode_assign_with_seed(
    instruction: &Instruction,
) -> Result<AssignWithSeedParams, LayoutError> {
    let values = decode_system(instruction, SystemOpcode::AssignWithSeed, 2)?;
    Ok(AssignWithSeedParams {
        account_pubkey: instruction.accounts[0].pubkey,
        base_pubkey: values.pubkey(BASE)?,
        seed: decode_seed(&values)?,
        program_id: values.pubkey(PROGRAM_ID)?,
    })
}

#[cfg(test)]
mod tests {
    use {super::*, assert_matches::assert_matches};

    fn create_account_params() -> CreateAccountParams {
        CreateAccountParams {
            from_pubkey: Pubkey::new_rand(),
            new_account_pubkey: Pubkey::new_rand(),
            lamports: 123,
            space: 1,
            program_id: Pubkey::from(1),
        }
    }

    #[test]
    fn test_create_account() {
        let params = create_account_params();
        let tx = create_account(&params).unwrap();
        assert_eq!(tx.instructions.len(), 1);
        assert_eq!(decode_create_account(&tx.instructions[0]), Ok(params));
    }

    #[test]
    fn test_create_account_accounts() {
        let params = create_account_params();
        let instruction = create_account_instruction(&params).unwrap();
        assert_eq!(instruction.program_id, system_program::id());
        assert_eq!(
            instruction.accounts,
            vec![
                AccountMeta::new(params.from_pubkey, true),
                AccountMeta::new(params.new_account_pubkey, true),
            ]
        );
        assert_eq!(instruction.data.len(), 52);
    }

    #[test]
    fn test_transfer() {
        let params = TransferParams {
            from_pubkey: Pubkey::new_rand(),
            to_pubkey: Pubkey::new_rand(),
            lamports: 123,
        };
        let tx = transfer(&params).unwrap();
        assert_eq!(tx.instructions.len(), 1);
        assert_eq!(
            tx.instructions[0].accounts,
            vec![
                AccountMeta::new(params.from_pubkey, true),
                AccountMeta::new(params.to_pubkey, false),
            ]
        );
        assert_eq!(decode_transfer(&tx.instructions[0]), Ok(params));
    }

    #[test]
    fn test_assign() {
        let params = AssignParams {
            account_pubkey: Pubkey::new_rand(),
            program_id: Pubkey::from(1),
        };
        let tx = assign(&params).unwrap();
        assert_eq!(tx.instructions.len(), 1);
        assert_eq!(decode_assign(&tx.instructions[0]), Ok(params));
    }

    #[test]
    fn test_create_account_with_seed() {
        let from_pubkey = Pubkey::new_unique();
        let params = CreateAccountWithSeedParams {
            from_pubkey,
            new_account_pubkey: Pubkey::new_unique(),
            base_pubkey: from_pubkey,
            seed: "limber chicken: 4/45".to_string(),
            lamports: 10,
            space: 128,
            program_id: Pubkey::new_unique(),
        };
        let instruction = create_account_with_seed_instruction(&params).unwrap();
        assert_eq!(instruction.accounts.len(), 2);
        assert_eq!(decode_create_account_with_seed(&instruction), Ok(params.clone()));

        let params = CreateAccountWithSeedParams {
            base_pubkey: Pubkey::new_unique(),
            ..params
        };
        let instruction = create_account_with_seed_instruction(&params).unwrap();
        assert_eq!(
            instruction.accounts[2],
            AccountMeta::new_readonly(params.base_pubkey, true)
        );
        assert_eq!(decode_create_account_with_seed(&instruction), Ok(params));
    }

    #[test]
    fn test_seed_too_long() {
        let params = AssignWithSeedParams {
            account_pubkey: Pubkey::new_unique(),
            base_pubkey: Pubkey::new_unique(),
            seed: "x".repeat(MAX_SEED_LEN + 1),
            program_id: Pubkey::new_unique(),
        };
        assert_matches!(
            assign_with_seed(&params),
            Err(LayoutError::SchemaMismatch { field: SEED, .. })
        );
        let params = AssignWithSeedParams {
            seed: "x".repeat(MAX_SEED_LEN),
            ..params
        };
        assert!(assign_with_seed(&params).is_ok());
    }

    #[test]
    fn test_allocate_and_assign_with_seed() {
        let params = AllocateParams {
            account_pubkey: Pubkey::new_unique(),
            space: u64::MAX,
        };
        let tx = allocate(&params).unwrap();
        assert_eq!(decode_allocate(&tx.instructions[0]), Ok(params));

        let params = AllocateWithSeedParams {
            account_pubkey: Pubkey::new_unique(),
            base_pubkey: Pubkey::new_unique(),
            seed: String::new(),
            space: 0,
            program_id: Pubkey::new_unique(),
        };
        let tx = allocate_with_seed(&params).unwrap();
        assert_eq!(decode_allocate_with_seed(&tx.instructions[0]), Ok(params));

        let params = AssignWithSeedParams {
            account_pubkey: Pubkey::new_unique(),
            base_pubkey: Pubkey::new_unique(),
            seed: "☉".to_string(),
            program_id: Pubkey::new_unique(),
        };
        let tx = assign_with_seed(&params).unwrap();
        assert_eq!(
            tx.instructions[0].accounts,
            vec![
                AccountMeta::new(params.account_pubkey, false),
                AccountMeta::new_readonly(params.base_pubkey, true),
            ]
        );
        assert_eq!(decode_assign_with_seed(&tx.instructions[0]), Ok(params));
    }

    #[test]
    fn test_decode_wrong_operation() {
        let tx = transfer(&TransferParams {
            from_pubkey: Pubkey::new_unique(),
            to_pubkey: Pubkey::new_unique(),
            lamports: 123,
        })
        .unwrap();
        assert_eq!(
            decode_assign(&tx.instructions[0]),
            Err(LayoutError::OpcodeMismatch {
                expected: SystemOpcode::Assign.index(),
                found: SystemOpcode::Transfer.index(),
            })
        );
        assert_matches!(
            decode_create_account(&tx.instructions[0]),
            Err(LayoutError::OpcodeMismatch { .. })
        );
    }

    #[test]
    fn test_decode_checks_program_and_accounts() {
        let mut instruction = transfer_instruction(&TransferParams {
            from_pubkey: Pubkey::new_unique(),
            to_pubkey: Pubkey::new_unique(),
            lamports: 1,
        })
        .unwrap();

        let mut other_program = instruction.clone();
        other_program.program_id = Pubkey::from(1);
        assert_eq!(
            decode_transfer(&other_program),
            Err(LayoutError::ProgramIdMismatch(Pubkey::from(1)))
        );

        instruction.accounts.pop();
        assert_eq!(
            decode_transfer(&instruction),
            Err(LayoutError::AccountKeyMismatch {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_decode_invalid_seed() {
        let mut instruction = assign_with_seed_instruction(&AssignWithSeedParams {
            account_pubkey: Pubkey::new_unique(),
            base_pubkey: Pubkey::new_unique(),
            seed: "ab".to_string(),
            program_id: Pubkey::new_unique(),
        })
        .unwrap();
        // opcode, base, seed length, then the seed itself
        let seed_offset = 4 + 32 + 8;
        instruction.data[seed_offset] = 0xff;
        assert_matches!(
            decode_assign_with_seed(&instruction),
            Err(LayoutError::SchemaMismatch { field: SEED, .. })
        );
    }

    #[test]
    fn test_system_instruction_dispatch() {
        let instructions = vec![
            SystemInstruction::CreateAccount(create_account_params()),
            SystemInstruction::Assign(AssignParams {
                account_pubkey: Pubkey::new_unique(),
                program_id: Pubkey::new_unique(),
            }),
            SystemInstruction::Transfer(TransferParams {
                from_pubkey: Pubkey::new_unique(),
                to_pubkey: Pubkey::new_unique(),
                lamports: u64::MAX,
            }),
            SystemInstruction::Allocate(AllocateParams {
                account_pubkey: Pubkey::new_unique(),
                space: 0,
            }),
        ];
        for system_instruction in instructions {
            let tx = system_instruction.build().unwrap();
            assert_eq!(tx.instructions.len(), 1);
            let layout = decode_instruction_layout(&tx.instructions[0]).unwrap();
            assert_eq!(layout.opcode, system_instruction.opcode());
            assert_eq!(
                SystemInstruction::decode(&tx.instructions[0]),
                Ok(system_instruction)
            );
        }
    }
}
