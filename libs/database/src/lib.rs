//! Database connectivity for the catalog workspace.
//!
//! Only MongoDB is used here; the module exposes a config struct, an
//! explicit connector (the client is an owned handle passed into
//! repositories, never a process-global), and a health ping.

pub mod mongodb;
