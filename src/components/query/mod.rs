mod query;

pub use query::{Effect as QueryEffect, Event as QueryEvent, Props as QueryProps, Query};
