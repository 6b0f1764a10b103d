pub mod header;
pub mod overview;
pub mod sidebar;
pub mod table;
