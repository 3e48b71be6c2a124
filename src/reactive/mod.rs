//! Observable values.
//!
//! Every quantity the view layer draws (pH, concentrations, indicator height,
//! brightness) is held in a [`ReactiveValue`]. Mutation notifies observers
//! synchronously, in registration order, on the calling thread.

mod value;

pub use value::{Observer, ObserverId, ReactiveValue, ReadOnlyValue};
