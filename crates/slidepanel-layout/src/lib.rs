//! Layout contracts for the sliding panel container

mod constraints;

pub use constraints::*;

pub mod prelude {
    pub use crate::constraints::Constraints;
}
