pub mod graph;
pub mod node;
pub mod template;
pub mod validation;
pub mod view;

pub use graph::{GraphSnapshot, Viewport};
pub use node::{NodeDescriptor, NodeInstance};
pub use template::{is_metadata_key, NodeTemplate, NodeTemplateEntry, TemplateItem};
pub use validation::{ValidationReport, ValidationStatus};
pub use view::*;
