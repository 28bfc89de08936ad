// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stacked-layout accumulator.
//!
//! This crate converts N ordered series, each a sequence of nullable values
//! aligned on a shared category axis, into stacked `(y0, y1)` bands per point
//! under a selectable baseline offset:
//! - [`stack`] runs the accumulation and the offset post-pass, and
//! - [`derived_baseline`] synthesizes the stream-chart lower-outline series.
//!
//! The accumulator is a pure function over immutable input: it allocates
//! fresh output records and never mutates the input series. Series order is
//! significant: it is the stacking order, bottom first.

#![no_std]

extern crate alloc;

mod baseline;
mod offset;
mod stack;

pub use baseline::derived_baseline;
pub use offset::StackOffset;
pub use stack::stack;
