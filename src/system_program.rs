//! The system program id.

use crate::pubkey::Pubkey;

pub const ID: Pubkey = Pubkey::new_from_array([0u8; 32]);

pub fn id() -> Pubkey {
    ID
}

pub fn check_id(program_id: &Pubkey) -> bool {
    program_id == &ID
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_program_id() {
        assert_eq!(id().to_string(), "11111111111111111111111111111111");
        assert!(check_id(&"11111111111111111111111111111111".parse().unwrap()));
        assert!(!check_id(&Pubkey::from(1)));
    }
}
