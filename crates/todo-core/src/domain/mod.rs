//! Domain model (tasks, IDs, edit session, errors, events).

pub mod errors;
pub mod events;
pub mod ids;
pub mod state;
pub mod task;

pub use self::errors::{ListError, SourceError};
pub use self::events::ListEvent;
pub use self::ids::{OwnerId, TaskId};
pub use self::state::{Action, EditSession, EditState};
pub use self::task::Task;
