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

//! # Troth Model
//!
//! **The Core Domain Model for the Troth Stable Matching Solver.**
//!
//! This crate defines the fundamental data structures used to represent the
//! **Stable Matching Problem** between two equal-sized agent sets (hospitals
//! and students, each with a strict, total preference ranking over the other
//! side). It serves as the data interchange layer between the problem
//! definition (user input) and the matching engine (`troth_da`) as well as
//! the independent auditor (`troth_verify`).
//!
//! ## Architecture
//!
//! The crate is designed around a strict separation of concerns between
//! **construction** and **solving**:
//!
//! * **`index`**: Provides strongly-typed wrappers (`HospitalIndex`,
//!   `StudentIndex`) to prevent logical indexing errors between the two
//!   agent sets.
//! * **`instance`**: Contains the `Instance` (immutable, optimized for
//!   solving) and `InstanceBuilder` (mutable, optimized for configuration).
//! * **`matching`**: Defines the output format, the `Matching` bijection
//!   with invariant-checked mutation, plus loose `Assignment` pairs for
//!   adversarial audits.
//! * **`slot`**: A sentinel-based optional partner cell that keeps the two
//!   partner maps to one machine word per agent.
//! * **`loading`**: Parses and validates the plain-text instance format and
//!   writes instances back out.
//! * **`generate`**: Produces uniformly random valid instances for tests,
//!   benchmarks, and demo data.
//!
//! ## Design Philosophy
//!
//! 1.  **Type Safety**: Indices are distinct types. You cannot accidentally
//!     use a `HospitalIndex` to look up a student.
//! 2.  **Memory Layout**: Preference and rank tables are stored flattened
//!     (row per agent) to maximize cache locality during the proposal loop.
//! 3.  **Fail-Fast**: The loader rejects malformed input with precise
//!     errors, and `InstanceBuilder::build` asserts the permutation
//!     invariant, so the solver never encounters an invalid instance.

pub mod generate;
pub mod index;
pub mod instance;
pub mod loading;
pub mod matching;
pub mod slot;
