pub mod gid;
pub mod json_viewer;
pub mod pagination_controls;
