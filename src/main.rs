//! # dir-cleanup
//!
//! Binary entry point; all behavior lives in [`dir_cleanup::run`].

fn main() {
    dir_cleanup::run();
}
