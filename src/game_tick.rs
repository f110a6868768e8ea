use parking_lot::Mutex;

/// Current game tick. Fixed in tests, where there is no game.
#[cfg(not(test))]
#[inline]
pub fn game_tick() -> u32 {
    screeps::game::time()
}

#[cfg(test)]
pub fn game_tick() -> u32 {
    1
}

/// The first tick since the global was reset, set on the first call.
static FIRST_TICK: Mutex<Option<u32>> = Mutex::new(None);

pub fn first_tick() -> u32 {
    *FIRST_TICK.lock().get_or_insert_with(game_tick)
}

/// Zero in the first tick after a global reset.
pub fn ticks_since_restart() -> u32 {
    game_tick() - first_tick()
}

#[cfg(test)]
mod tests {
    use crate::game_tick::{first_tick, game_tick, ticks_since_restart};

    #[test]
    fn test_first_tick_is_remembered() {
        let tick = first_tick();
        assert_eq!(tick, game_tick());
        assert_eq!(first_tick(), tick);
        assert_eq!(ticks_since_restart(), 0);
    }
}
