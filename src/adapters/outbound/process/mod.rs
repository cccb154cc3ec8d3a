/// Process adapters for driving the external engine executable
mod purl2notices;

pub use purl2notices::{
    Purl2NoticesCli, DEFAULT_ENGINE_PROGRAM, ENGINE_PROGRAM_ENV, NO_PACKAGES_MESSAGE,
};
