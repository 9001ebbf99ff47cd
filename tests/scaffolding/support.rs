#[path = "support/fixtures.rs"]
pub mod fixtures;
#[path = "support/harness.rs"]
pub mod harness;

pub use fixtures::{
    attribute, branch_command, customer_attributes, customer_command,
    section_after, unit_of,
};
pub use harness::{create_controller_state, create_harness};
