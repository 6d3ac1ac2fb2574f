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

//! # Math Primitives
//!
//! Foundational mathematical structures for preference and matching logic.
//! This module currently focuses on permutation math over dense zero-based
//! index spaces.
//!
//! ## Submodules
//!
//! - `permutation`: Validation (`is_permutation`), duplicate search
//!   (`first_duplicate`), inversion (`inverse`), and construction
//!   (`identity`) for slices that are meant to enumerate `0..n` exactly
//!   once.
//!
//! ## Motivation
//!
//! Every preference list in a matching instance must be a permutation of the
//! opposite index space, and rank lookups are exactly the inverse of such a
//! permutation. Keeping that arithmetic in one audited place means the model
//! layer can state its invariants in a single call.
//!
//! Refer to the `permutation` module for detailed APIs and examples.

pub mod permutation;
