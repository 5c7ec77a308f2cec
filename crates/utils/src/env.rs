// Copyright 2024-2025 Irreducible Inc.

/// Read boolean flag from the environment variable.
///
/// Unset variables and any value outside of the accepted spellings of "true" read as `false`.
pub fn boolean_env_flag_set(flag: &str) -> bool {
	match std::env::var(flag) {
		Ok(val) => ["1", "on", "ON", "true", "TRUE", "yes", "YES"].contains(&val.as_str()),
		Err(_) => false,
	}
}
