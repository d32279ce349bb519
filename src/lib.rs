//! Layout-driven encoding and decoding of system program instructions.

pub mod codec;
pub mod config;
pub mod instruction;
pub mod layout;
pub mod parse_system;
pub mod pubkey;
pub mod system_instruction;
pub mod system_program;
pub mod transaction;

pub use crate::{
    layout::{LayoutError, SystemOpcode},
    system_instruction::SystemInstruction,
};
