pub mod builder;
pub mod rpc;
pub mod transport;
