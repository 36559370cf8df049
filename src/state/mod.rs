//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `notices`) so individual components
//! can depend on small focused models. Each store wraps its model in an
//! `RwSignal` provided through context; views subscribe by reading it.

pub mod notices;
pub mod session;
