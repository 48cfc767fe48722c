pub mod catalog;
pub mod cell;
pub mod domain;
pub mod heuristics;
pub mod propagators;
pub mod search;
pub mod stats;
pub mod store;
pub mod work_list;
