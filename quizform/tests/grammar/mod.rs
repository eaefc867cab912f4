mod elements;
mod invariants;
