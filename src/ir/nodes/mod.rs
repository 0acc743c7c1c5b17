mod node_handle;
pub(in crate::ir) mod raw_node;

pub(in crate::ir) use node_handle::NodeHandle;
pub use node_handle::NodeId;
