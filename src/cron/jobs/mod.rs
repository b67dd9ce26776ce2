pub mod prune_snapshots;
