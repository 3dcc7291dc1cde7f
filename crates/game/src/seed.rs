//! Seeds from the operating system's entropy source.

use anyhow::{Context, Result};
use rand::rngs::OsRng;
use rand::RngCore;

/// The best seed the operating system can give us.
pub fn os_seed() -> Result<u64> {
    let mut bytes = [0u8; 8];
    OsRng
        .try_fill_bytes(&mut bytes)
        .context("reading OS entropy for a seed")?;
    Ok(u64::from_le_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_seeds_vary() {
        let seeds: Vec<u64> = (0..4).map(|_| os_seed().unwrap()).collect();
        assert!(seeds.windows(2).any(|w| w[0] != w[1]));
    }
}
