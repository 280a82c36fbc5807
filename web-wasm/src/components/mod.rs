pub mod analyze_button;
pub mod copy_button;
pub mod file_picker;
pub mod header;
pub mod image_preview;
pub mod loading_overlay;
pub mod result_panel;
pub mod upload_area;
pub mod upload_form;
pub mod variation_list;
