// Adapters layer: concrete collaborators for the submission pipeline.

pub mod console;
pub mod http;
pub mod navigation;

pub use console::ConsolePresenter;
pub use http::HttpBackend;
pub use navigation::LogNavigator;
