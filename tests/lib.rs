//! Main test module that includes all sub-modules
//! Run specific tests with `cargo test <module>::<submodule>`
//! For example: `cargo test integration::round_trip_test`
// Utility modules
pub mod utils;

// Model tests
pub mod models {
    pub mod pedigree_test;
}

// Integration tests
pub mod integration {
    pub mod round_trip_test;
}

// Algorithm tests
pub mod algorithm {
    pub mod describe_test;
}
