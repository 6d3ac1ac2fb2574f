// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Troth Core
//!
//! Foundational utilities and math primitives for the Troth matching
//! ecosystem. This crate consolidates the reusable building blocks that
//! underpin the higher-level model, engine, and audit crates.
//!
//! ## Modules
//!
//! - `math`: Permutation primitives over dense zero-based index spaces:
//!   validation (`is_permutation`), duplicate search (`first_duplicate`),
//!   inversion (`inverse`), and construction (`identity`).
//! - `utils`: Phantom-tagged, strongly typed indices (`TypedIndex<T>`) that
//!   keep distinct agent index spaces apart at compile time.
//!
//! ## Purpose
//!
//! Matching code juggles two index spaces of identical shape (proposers and
//! receivers) plus rank positions inside preference lists, which makes raw
//! `usize` values an invitation for silent swaps. These primitives pin the
//! meaning of every index at the type level and keep the permutation
//! bookkeeping in one audited place, with no runtime overhead.
//!
//! Refer to each module for detailed APIs and examples.

pub mod math;
pub mod utils;
