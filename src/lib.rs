pub mod models;
pub mod node_view;
pub mod settings;
pub mod styles;
pub mod validation;

pub use node_view::{AlertSink, GraphEditor, NodeHost, NodeView, PopupHost};
pub use settings::ViewSettings;
pub use styles::NodeStyleTables;
pub use validation::{HttpValidationClient, ValidationController, ValidationTransport};
