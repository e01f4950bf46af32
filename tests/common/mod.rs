#![allow(dead_code)]

mod assertions;
mod fixtures;
mod test_app;

pub use assertions::{
    assert_acyclic, assert_no_dangling, assert_position_eq, assert_spatial_valid, assert_symmetric,
};
pub use fixtures::*;
pub use test_app::{TestApp, TestAppBuilder};
