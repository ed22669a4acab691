pub mod add_child_service;
pub mod create_section_item_service;
pub mod delete_section_item_service;
pub mod get_portfolio_service;
pub mod get_published_project_service;
pub mod get_section_item_service;
pub mod import_resume_service;
pub mod list_section_service;
mod records;
pub mod remove_child_service;
pub mod reorder_service;
pub mod set_published_service;
pub mod update_child_service;
pub mod update_contact_settings_service;
pub mod update_profile_service;
pub mod update_section_item_service;
