//! Branch selection for the randomized lookup endpoints
//!
//! Persona and brand design lookups either return their canned data or an
//! empty result. The choice is drawn from a [`BranchSource`] held in the
//! application state so callers (and tests) can pin it.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{rng, Rng, SeedableRng};

use crate::config::BranchMode;

/// Endpoints whose response shape depends on a branch draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    Personas,
    BrandDesign,
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Branch::Personas => write!(f, "personas"),
            Branch::BrandDesign => write!(f, "brand_design"),
        }
    }
}

/// Decides whether a lookup returns data (`true`) or the empty branch
pub trait BranchSource: Send + Sync {
    fn has_data(&self, branch: Branch) -> bool;
}

/// Fair coin per call from the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomBranches;

impl BranchSource for RandomBranches {
    fn has_data(&self, _branch: Branch) -> bool {
        rng().random_bool(0.5)
    }
}

/// Fair coin from a seeded generator; the same seed yields the same sequence
#[derive(Debug)]
pub struct SeededBranches {
    rng: Mutex<StdRng>,
}

impl SeededBranches {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl BranchSource for SeededBranches {
    fn has_data(&self, _branch: Branch) -> bool {
        // A panic mid-draw leaves the generator usable
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.random_bool(0.5)
    }
}

/// Always the same answer, for every branch
#[derive(Debug, Clone, Copy)]
pub struct FixedBranches(pub bool);

impl BranchSource for FixedBranches {
    fn has_data(&self, _branch: Branch) -> bool {
        self.0
    }
}

/// Build the branch source for a configured mode
pub fn branch_source_for(mode: BranchMode) -> Arc<dyn BranchSource> {
    match mode {
        BranchMode::Random => Arc::new(RandomBranches),
        BranchMode::Seeded(seed) => Arc::new(SeededBranches::new(seed)),
        BranchMode::Always => Arc::new(FixedBranches(true)),
        BranchMode::Never => Arc::new(FixedBranches(false)),
    }
}
