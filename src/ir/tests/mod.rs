mod activation;
mod graph_describe;
mod node_clamp;
mod rnn_cell_construction;
