//! Two-dimensional cellular automaton generator.

use std::sync::Mutex;

use tracing::debug;

use super::{impl_seed_identity, lock, Algorithm};
use crate::error::RngError;
use crate::seed::{DefaultSeedSource, SeedSource};
use crate::source::RandomSource;

const SIDE: usize = 16;
const CELLS: usize = SIDE * SIDE;
const WARM_UP_GENERATIONS: usize = 64;
/// Rows folded into each output block (rows 0-3 with rows 8-11).
const OUTPUT_BYTES: usize = 4 * SIDE;
const FOLD_OFFSET: usize = 8 * SIDE;
const WORDS_PER_GENERATION: usize = OUTPUT_BYTES / 4;

/// The AES substitution box, used as the automaton's local rule.
const SBOX: [u8; 256] = [
    0x63, 0x7C, 0x77, 0x7B, 0xF2, 0x6B, 0x6F, 0xC5, 0x30, 0x01, 0x67, 0x2B, 0xFE, 0xD7, 0xAB, 0x76,
    0xCA, 0x82, 0xC9, 0x7D, 0xFA, 0x59, 0x47, 0xF0, 0xAD, 0xD4, 0xA2, 0xAF, 0x9C, 0xA4, 0x72, 0xC0,
    0xB7, 0xFD, 0x93, 0x26, 0x36, 0x3F, 0xF7, 0xCC, 0x34, 0xA5, 0xE5, 0xF1, 0x71, 0xD8, 0x31, 0x15,
    0x04, 0xC7, 0x23, 0xC3, 0x18, 0x96, 0x05, 0x9A, 0x07, 0x12, 0x80, 0xE2, 0xEB, 0x27, 0xB2, 0x75,
    0x09, 0x83, 0x2C, 0x1A, 0x1B, 0x6E, 0x5A, 0xA0, 0x52, 0x3B, 0xD6, 0xB3, 0x29, 0xE3, 0x2F, 0x84,
    0x53, 0xD1, 0x00, 0xED, 0x20, 0xFC, 0xB1, 0x5B, 0x6A, 0xCB, 0xBE, 0x39, 0x4A, 0x4C, 0x58, 0xCF,
    0xD0, 0xEF, 0xAA, 0xFB, 0x43, 0x4D, 0x33, 0x85, 0x45, 0xF9, 0x02, 0x7F, 0x50, 0x3C, 0x9F, 0xA8,
    0x51, 0xA3, 0x40, 0x8F, 0x92, 0x9D, 0x38, 0xF5, 0xBC, 0xB6, 0xDA, 0x21, 0x10, 0xFF, 0xF3, 0xD2,
    0xCD, 0x0C, 0x13, 0xEC, 0x5F, 0x97, 0x44, 0x17, 0xC4, 0xA7, 0x7E, 0x3D, 0x64, 0x5D, 0x19, 0x73,
    0x60, 0x81, 0x4F, 0xDC, 0x22, 0x2A, 0x90, 0x88, 0x46, 0xEE, 0xB8, 0x14, 0xDE, 0x5E, 0x0B, 0xDB,
    0xE0, 0x32, 0x3A, 0x0A, 0x49, 0x06, 0x24, 0x5C, 0xC2, 0xD3, 0xAC, 0x62, 0x91, 0x95, 0xE4, 0x79,
    0xE7, 0xC8, 0x37, 0x6D, 0x8D, 0xD5, 0x4E, 0xA9, 0x6C, 0x56, 0xF4, 0xEA, 0x65, 0x7A, 0xAE, 0x08,
    0xBA, 0x78, 0x25, 0x2E, 0x1C, 0xA6, 0xB4, 0xC6, 0xE8, 0xDD, 0x74, 0x1F, 0x4B, 0xBD, 0x8B, 0x8A,
    0x70, 0x3E, 0xB5, 0x66, 0x48, 0x03, 0xF6, 0x0E, 0x61, 0x35, 0x57, 0xB9, 0x86, 0xC1, 0x1D, 0x9E,
    0xE1, 0xF8, 0x98, 0x11, 0x69, 0xD9, 0x8E, 0x94, 0x9B, 0x1E, 0x87, 0xE9, 0xCE, 0x55, 0x28, 0xDF,
    0x8C, 0xA1, 0x89, 0x0D, 0xBF, 0xE6, 0x42, 0x68, 0x41, 0x99, 0x2D, 0x0F, 0xB0, 0x54, 0xBB, 0x16,
];

struct Grid {
    cells: [u8; CELLS],
    block: [u32; WORDS_PER_GENERATION],
    index: usize,
}

impl Grid {
    fn from_seed(seed: &[u8; CellularAutomatonRng::SEED_SIZE_BYTES]) -> Self {
        let mut cells = [0u8; CELLS];
        for (i, cell) in cells.iter_mut().enumerate() {
            *cell = seed[i % seed.len()] ^ i as u8;
        }
        let mut grid = Self {
            cells,
            block: [0; WORDS_PER_GENERATION],
            index: WORDS_PER_GENERATION,
        };
        for _ in 0..WARM_UP_GENERATIONS {
            grid.evolve();
        }
        grid
    }

    /// Advances every cell one generation on the torus.
    ///
    /// `cell' = SBOX[(cell + west) ^ north ^ index]`, all reads from the
    /// previous generation.
    fn evolve(&mut self) {
        let old = self.cells;
        for row in 0..SIDE {
            let north_row = (row + SIDE - 1) % SIDE;
            for column in 0..SIDE {
                let i = row * SIDE + column;
                let west = old[row * SIDE + (column + SIDE - 1) % SIDE];
                let north = old[north_row * SIDE + column];
                let mixed = old[i].wrapping_add(west) ^ north ^ i as u8;
                self.cells[i] = SBOX[mixed as usize];
            }
        }
    }

    fn refill(&mut self) {
        self.evolve();
        for (k, word) in self.block.iter_mut().enumerate() {
            let mut bytes = [0u8; 4];
            for (b, byte) in bytes.iter_mut().enumerate() {
                let cell = k * 4 + b;
                *byte = self.cells[cell] ^ self.cells[cell + FOLD_OFFSET];
            }
            *word = u32::from_be_bytes(bytes);
        }
        self.index = 0;
    }

    fn next_word(&mut self) -> u32 {
        if self.index >= WORDS_PER_GENERATION {
            self.refill();
        }
        let word = self.block[self.index];
        self.index += 1;
        word
    }
}

/// Generator driven by a 16x16 toroidal cellular automaton.
///
/// Every generation each 8-bit cell is replaced by a non-linear function of
/// itself, its west and north neighbours and its position. The seed is
/// spread over the grid and the automaton is warmed up before any output is
/// read; afterwards each generation yields 16 words taken from rows 0-3
/// folded with rows 8-11.
pub struct CellularAutomatonRng {
    seed: [u8; CellularAutomatonRng::SEED_SIZE_BYTES],
    state: Mutex<Grid>,
}

impl CellularAutomatonRng {
    /// Exact seed length.
    pub const SEED_SIZE_BYTES: usize = 16;

    /// Creates a generator seeded from the [`DefaultSeedSource`].
    ///
    /// # Errors
    ///
    /// [`RngError::SeedUnavailable`] if no seed could be obtained.
    pub fn new() -> Result<Self, RngError> {
        Self::from_seed_source(&DefaultSeedSource)
    }

    /// Creates a generator seeded with bytes drawn from `source`.
    ///
    /// # Errors
    ///
    /// [`RngError::SeedUnavailable`] if the source fails.
    pub fn from_seed_source(source: &dyn SeedSource) -> Result<Self, RngError> {
        Self::from_seed(&source.generate_seed(Self::SEED_SIZE_BYTES)?)
    }

    /// Creates a generator from an explicit 16-byte seed.
    ///
    /// The length is checked before the automaton is evolved.
    ///
    /// # Errors
    ///
    /// [`RngError::InvalidSeed`] unless the seed is exactly 16 bytes.
    pub fn from_seed(seed: &[u8]) -> Result<Self, RngError> {
        let seed: [u8; Self::SEED_SIZE_BYTES] = seed.try_into().map_err(|_| {
            RngError::seed_length(Algorithm::CellularAutomaton.name(), "16", seed.len())
        })?;
        debug!(algorithm = %Algorithm::CellularAutomaton, seed_length = seed.len(), "generator constructed");
        Ok(Self {
            seed,
            state: Mutex::new(Grid::from_seed(&seed)),
        })
    }
}

impl RandomSource for CellularAutomatonRng {
    fn next_u32(&self) -> u32 {
        lock(&self.state).next_word()
    }
}

impl_seed_identity!(CellularAutomatonRng, Algorithm::CellularAutomaton);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sbox_known_entries() {
        assert_eq!(SBOX[0x00], 0x63);
        assert_eq!(SBOX[0x01], 0x7C);
        assert_eq!(SBOX[0x53], 0xED);
        assert_eq!(SBOX[0xFF], 0x16);
    }

    #[test]
    fn test_sbox_is_permutation() {
        let mut seen = [false; 256];
        for &value in SBOX.iter() {
            assert!(!seen[value as usize]);
            seen[value as usize] = true;
        }
    }

    #[test]
    fn test_golden_values() {
        let seed: Vec<u8> = (1..=16).collect();
        let rng = CellularAutomatonRng::from_seed(&seed).unwrap();
        let expected = [
            0xFD9C_0E2C, 0x0B17_6F32, 0x8E65_F594, 0x1289_946E, 0xDFBE_9D93,
            0x0D70_C30A, 0xD299_A45C, 0xD4CC_10AB, 0x4D42_2F3B, 0x738A_ACB3,
        ];
        for value in expected {
            assert_eq!(rng.next_u32(), value);
        }
    }

    #[test]
    fn test_one_generation_per_sixteen_words() {
        let seed = [0u8; 16];
        let mut grid = Grid::from_seed(&seed);
        let before = grid.cells;
        for _ in 0..WORDS_PER_GENERATION {
            grid.next_word();
        }
        let after_first_block = grid.cells;
        assert_ne!(before, after_first_block);
        grid.next_word();
        assert_ne!(after_first_block, grid.cells);
    }

    #[test]
    fn test_zero_seed_still_varies() {
        let rng = CellularAutomatonRng::from_seed(&[0; 16]).unwrap();
        let words: Vec<u32> = (0..64).map(|_| rng.next_u32()).collect();
        let first = words[0];
        assert!(words.iter().any(|&w| w != first));
    }

    #[test]
    fn test_rejects_wrong_seed_length() {
        assert!(CellularAutomatonRng::from_seed(&[1; 4]).is_err());
        assert!(CellularAutomatonRng::from_seed(&[1; 32]).is_err());
        assert!(CellularAutomatonRng::from_seed(&[]).is_err());
    }
}
