mod invariants;
mod properties;
