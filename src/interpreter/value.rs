/// The core value types of the runtime.
///
/// Declares the `Value` enum with all variants a program can produce, the
/// `ValueKind` type tags used in error messages, function and builtin
/// payloads, and the inspect-form `Display` implementation.
pub mod core;
/// Lexically scoped bindings.
///
/// Provides the shared environment chain: a frame of named bindings with an
/// optional outer frame. Functions capture their defining frame, so frames
/// are reference-counted and may outlive the block that created them.
pub mod environment;
/// Hash keys and hash payloads.
///
/// Reduces hashable values (integers, booleans, strings) to fixed-size
/// keys and stores hash entries together with their insertion order so the
/// printed form is stable.
pub mod hash_key;
