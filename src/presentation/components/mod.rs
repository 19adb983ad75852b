mod fields;
mod footer;
mod layout;
mod snapshot;
mod suggestions;

pub use fields::render_fields;
pub use footer::render_footer;
pub use snapshot::{render_snapshot, snapshot_height};
pub use suggestions::{render_suggestions, suggestions_visible};
