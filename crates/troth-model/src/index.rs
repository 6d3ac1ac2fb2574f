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

use troth_core::utils::index::{TypedIndex, TypedIndexTag};

/// A tag type for hospital indices.
///
/// Hospitals are the proposing side of the matching; indices are zero-based
/// internally, while the text format and all user-facing output use one-based
/// agent ids.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct HospitalIndexTag;

impl TypedIndexTag for HospitalIndexTag {
    const NAME: &'static str = "HospitalIndex";
}

/// A typed index for hospitals.
pub type HospitalIndex = TypedIndex<HospitalIndexTag>;

/// A tag type for student indices.
///
/// Students are the receiving side of the matching; indices are zero-based
/// internally, mirroring `HospitalIndexTag`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct StudentIndexTag;

impl TypedIndexTag for StudentIndexTag {
    const NAME: &'static str = "StudentIndex";
}

/// A typed index for students.
pub type StudentIndex = TypedIndex<StudentIndexTag>;
