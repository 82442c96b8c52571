pub use crate::instructions::{donate::*, initialize::*, withdraw::*};

pub mod donate;
pub mod initialize;
pub mod withdraw;
