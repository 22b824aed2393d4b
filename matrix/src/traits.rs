/*
MIT License
Copyright (c) 2021 Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

use serde::Serialize;

/// Elements that have a zero and a one (needed for building
/// empty and identity matrices)
pub trait OneZero {
    /// The additive identity
    fn zero() -> Self;

    /// The multiplicative identity
    fn one() -> Self;
}

macro_rules! impl_one_zero {
    ($($t:ty),*) => {
        $(
            impl OneZero for $t {
                fn zero() -> Self {
                    0.
                }
                fn one() -> Self {
                    1.
                }
            }
        )*
    };
}

impl_one_zero!(f32, f64);

/// What a [`crate::GenericMatrix`] needs from its elements: they are
/// copied around, accumulated, scaled and printed.
pub trait Numberish:
    Copy
    + OneZero
    + PartialEq
    + std::fmt::Display
    + std::fmt::Debug
    + std::ops::AddAssign
    + std::ops::DivAssign
    + Send
    + Sync
    + Serialize
{
}

impl<T> Numberish for T where
    T: Copy
        + OneZero
        + PartialEq
        + std::fmt::Display
        + std::fmt::Debug
        + std::ops::AddAssign
        + std::ops::DivAssign
        + Send
        + Sync
        + Serialize
{
}
