// src/arch/mod.rs
//! Execution backends.
//!
//! Every backend implements the same three-function contract over raw byte
//! pointers: `compare_run`, `copy_run`, `fill_run`. The dispatch layer in
//! [`crate::ops`] guarantees non-null bases and a non-zero extent before a
//! backend runs, so backends may use decrement-then-test loops freely.
//!
//! The portable backend is always compiled and is the reference
//! implementation; accelerated backends must be byte-for-byte equivalent to
//! it (see the cross-validation tests below).

// Always compiled: reference implementation and cross-validation oracle,
// even when an accelerated backend is dispatched to.
#[cfg_attr(
    all(feature = "asm", any(target_arch = "x86_64", target_arch = "aarch64")),
    allow(dead_code)
)]
pub(crate) mod portable;

#[cfg(all(feature = "asm", target_arch = "x86_64"))]
pub(crate) mod x86_64;

#[cfg(all(feature = "asm", target_arch = "aarch64"))]
pub(crate) mod aarch64;

#[cfg(all(feature = "asm", target_arch = "x86_64"))]
pub(crate) use self::x86_64 as active;

#[cfg(all(feature = "asm", target_arch = "aarch64"))]
pub(crate) use self::aarch64 as active;

#[cfg(not(all(feature = "asm", any(target_arch = "x86_64", target_arch = "aarch64"))))]
pub(crate) use self::portable as active;
