mod binding;
mod control;
mod error;
mod filter;
mod host;
mod slot;

pub use binding::{CallbackBinding, Detached, FieldBinding, FieldChange};
pub use control::{ControlEvent, ControlState, SelectControl, SelectionChange};
pub use error::{FormError, ValidationError, ValidationErrors};
pub use filter::{Filtered, filter_options, filter_text};
pub use host::{FormField, HostForm, SlotControl, Snapshot, SubmitOutcome};
pub use slot::FieldSlot;
