//! Fixed and live distribution parameters.

use std::sync::{Arc, PoisonError, RwLock};

/// A shared, thread-safe value that can be changed after a sampler has been
/// built.
///
/// Clones share the same underlying value.
///
/// # Examples
///
/// ```
/// use maths_random::distributions::AdjustableValue;
///
/// let rate = AdjustableValue::new(0.75);
/// let handle = rate.clone();
/// handle.set(1.05);
/// assert_eq!(rate.get(), 1.05);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AdjustableValue<T> {
    value: Arc<RwLock<T>>,
}

impl<T: Copy> AdjustableValue<T> {
    /// New handle holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value: Arc::new(RwLock::new(value)),
        }
    }

    /// Current value.
    pub fn get(&self) -> T {
        *self.value.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the value for every holder of this handle.
    pub fn set(&self, value: T) {
        *self.value.write().unwrap_or_else(PoisonError::into_inner) = value;
    }
}

/// A distribution parameter: a constant or a live [`AdjustableValue`].
#[derive(Debug, Clone)]
pub enum Parameter<T> {
    /// Constant for the life of the sampler.
    Fixed(T),
    /// Re-read on every draw.
    Adjustable(AdjustableValue<T>),
}

impl<T: Copy> Parameter<T> {
    /// Value in effect right now.
    pub fn value(&self) -> T {
        match self {
            Parameter::Fixed(value) => *value,
            Parameter::Adjustable(handle) => handle.get(),
        }
    }
}

impl<T> From<T> for Parameter<T> {
    fn from(value: T) -> Self {
        Parameter::Fixed(value)
    }
}

impl<T> From<AdjustableValue<T>> for Parameter<T> {
    fn from(handle: AdjustableValue<T>) -> Self {
        Parameter::Adjustable(handle)
    }
}

impl<T> From<&AdjustableValue<T>> for Parameter<T> {
    fn from(handle: &AdjustableValue<T>) -> Self {
        Parameter::Adjustable(AdjustableValue {
            value: Arc::clone(&handle.value),
        })
    }
}
