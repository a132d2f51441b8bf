mod cluster;
mod collate;


pub use cluster::{build_event_sets, cluster, cluster_table};
pub use collate::{collate, collate_sample};
