pub const CONSENSUS_PROGRAM_ELF: &[u8] = sp1_sdk::include_elf!("consensus_program");
