pub mod local_map;
