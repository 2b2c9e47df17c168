//! Quine–McCluskey minimization: prime implicant generation, covering, and literal synthesis.

mod cover;
mod group;
mod prime;
mod synth;

pub use cover::{select_cover, Cover};
pub use group::Group;
pub use prime::prime_implicants;
pub use synth::{compose, synthesize, Cube};
