//! Core behavior shared by every page: session access, the route gate,
//! theme mirroring, scroll reveal, and carousel state.

pub mod carousel;
pub mod format;
pub mod guard;
pub mod reveal;
pub mod session;
pub mod storage;
pub mod theme;
