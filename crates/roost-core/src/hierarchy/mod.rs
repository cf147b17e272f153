mod errors;
pub mod validator;

pub use errors::HierarchyError;
pub use validator::{
    validate_category_name, validate_group_name, validate_parent_folder, validate_project_name,
    validate_shortcut,
};
