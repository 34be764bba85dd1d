mod event;

pub use event::{ListEventsQuery, SubmitEvent};
