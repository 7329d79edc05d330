mod csr;
pub mod dinic;
pub mod network;
pub mod solver;
pub mod status;
