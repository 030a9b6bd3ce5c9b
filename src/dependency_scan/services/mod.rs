mod pom_layout;
mod project_selector;
mod tree_parser;

pub use pom_layout::{PomLayout, TREE_OUTPUT_FILE_NAME};
pub use project_selector::ProjectSelector;
pub use tree_parser::DependencyTreeParser;
