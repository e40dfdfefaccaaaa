use rand::RngCore;

/// Random source replaying a fixed list of states, cycling once exhausted.
///
/// `random_range(0..10)` maps a `u32` draw `x` to the high word of `x * 10`, so each
/// state is stored as the smallest draw landing on it.
pub struct ScriptedRng {
    draws: Vec<u32>,
    next: usize,
}

impl ScriptedRng {
    pub fn new(states: &[i32]) -> Self {
        let draws = states
            .iter()
            .map(|&state| {
                assert!((0..10).contains(&state), "state {} out of range", state);
                ((state as u64) << 32).div_ceil(10) as u32
            })
            .collect();

        ScriptedRng { draws, next: 0 }
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        let draw = self.draws[self.next % self.draws.len()];
        self.next += 1;
        draw
    }

    fn next_u64(&mut self) -> u64 {
        (u64::from(self.next_u32()) << 32) | u64::from(self.next_u32())
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
