#![deny(warnings)]

mod rule;
pub use rule::Rule;

mod primitive;
pub use primitive::Primitive;

mod quadrature;
pub use quadrature::{Params, Quadrature, Report, SampleRange, find_range, integrate, report};
