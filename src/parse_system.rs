use {
    crate::{
        instruction::Instruction, layout::LayoutError, system_instruction::SystemInstruction,
    },
    serde_derive::{Deserialize, Serialize},
    serde_json::{json, Value},
    thiserror::Error,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseInstructionError {
    #[error("System instruction not parsable: {0}")]
    InstructionNotParsable(#[from] LayoutError),
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ParsedInstructionEnum {
    #[serde(rename = "type")]
    pub instruction_type: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub info: Value,
}

pub fn parse_system(
    instruction: &Instruction,
) -> Result<ParsedInstructionEnum, ParseInstructionError> {
    let (instruction_type, info) = match SystemInstruction::decode(instruction)? {
        SystemInstruction::CreateAccount(params) => (
            "createAccount",
            json!({
                "source": params.from_pubkey.to_string(),
                "newAccount": params.new_account_pubkey.to_string(),
                "lamports": params.lamports,
                "space": params.space,
                "owner": params.program_id.to_string(),
            }),
        ),
        SystemInstruction::Assign(params) => (
            "assign",
            json!({
                "account": params.account_pubkey.to_string(),
                "owner": params.program_id.to_string(),
            }),
        ),
        SystemInstruction::Transfer(params) => (
            "transfer",
            json!({
                "source": params.from_pubkey.to_string(),
                "destination": params.to_pubkey.to_string(),
                "lamports": params.lamports,
            }),
        ),
        SystemInstruction::CreateAccountWithSeed(params) => (
            "createAccountWithSeed",
            json!({
                "source": params.from_pubkey.to_string(),
                "newAccount": params.new_account_pubkey.to_string(),
                "base": params.base_pubkey.to_string(),
                "seed": params.seed,
                "lamports": params.lamports,
                "space": params.space,
                "owner": params.program_id.to_string(),
            }),
        ),
        SystemInstruction::Allocate(params) => (
            "allocate",
            json!({
                "account": params.account_pubkey.to_string(),
                "space": params.space,
            }),
        ),
        SystemInstruction::AllocateWithSeed(params) => (
            "allocateWithSeed",
            json!({
                "account": params.account_pubkey.to_string(),
                "base": params.base_pubkey.to_string(),
                "seed": params.seed,
                "space": params.space,
                "owner": params.program_id.to_string(),
            }),
        ),
        SystemInstruction::AssignWithSeed(params) => (
            "assignWithSeed",
            json!({
                "account": params.account_pubkey.to_string(),
                "base": params.base_pubkey.to_string(),
                "seed": params.seed,
                "owner": params.program_id.to_string(),
            }),
        ),
    };
    Ok(ParsedInstructionEnum {
        instruction_type: instruction_type.to_string(),
        info,
    })
}
