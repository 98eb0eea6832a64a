pub mod accessor;
pub mod template;
pub mod view;

pub use accessor::{ContentAccessor, ThemeColor};
pub use template::{resolve_template, TemplateKind};
pub use view::ResumeView;
