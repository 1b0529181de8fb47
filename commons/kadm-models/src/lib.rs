pub mod cluster;
pub mod node;
pub mod status;
pub mod validation;

pub use cluster::*;
pub use node::*;
pub use status::*;
pub use validation::*;
