// Static catalog and the vibe/budget recommendation filter. No I/O.

pub mod budget;
pub mod handlers;
pub mod products;
pub mod recommend;
