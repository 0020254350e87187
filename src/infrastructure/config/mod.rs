//! Configuration storage adapters

mod xdg;

pub use xdg::{default_recordings_dir, XdgConfigStore};
