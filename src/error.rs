//! Crate-level error type.
//!
//! The propagator core has no runtime failures of its own (spec §7): every
//! precondition it relies on is the caller's to uphold. The one component
//! in this crate that *can* legitimately fail is the reference allocator of
//! spec §6, which is given an extent it cannot always satisfy. Following
//! the `error_chain!` idiom the teacher crate wires up in its `main.rs`,
//! that failure is represented here.

error_chain::error_chain! {
    errors {
        /// The requested extent cannot be allocated for the given reason.
        InvalidExtent(reason: String) {
            description("invalid grid extent")
            display("invalid grid extent: {}", reason)
        }
    }
}
