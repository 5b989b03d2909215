use solana_program::clock::UnixTimestamp;

pub fn current_timestamp() -> UnixTimestamp {
    #[cfg(not(test))]
    {
        use solana_program::clock::Clock;
        use solana_program::sysvar::Sysvar;
        Clock::get().unwrap().unix_timestamp
    }
    #[cfg(test)]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs()
            .min(UnixTimestamp::MAX as u64) as UnixTimestamp
    }
}

/// Current time clamped to the u32 width trade windows are recorded in.
pub fn unix_now() -> u32 {
    current_timestamp().clamp(0, u32::MAX as UnixTimestamp) as u32
}
