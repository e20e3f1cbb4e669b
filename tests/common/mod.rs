#![allow(dead_code)]

pub mod mocks;

use testcard_batch::card::random::RandomSource;

/// Always draws zero: candidate numbers never pass the Luhn check.
pub struct ZeroRandom;

impl RandomSource for ZeroRandom {
    fn next_below(&mut self, _bound: u32) -> u32 {
        0
    }
}
