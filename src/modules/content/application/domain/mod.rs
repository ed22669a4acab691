pub mod cascade;
pub mod entities;
pub mod reorder_validator;
pub mod slug;
pub mod sort_order;
