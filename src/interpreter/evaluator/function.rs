/// The native builtin functions: `len`, `first`, `last`, `rest`, `push`
/// and `puts`.
pub mod builtin;
/// Call evaluation and the builtin lookup table.
pub mod core;
