pub mod file_info;
pub mod header;
pub mod result_viewer;
pub mod status_banner;
pub mod upload_area;
