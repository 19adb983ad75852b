use serde_json::Value;

/// What a control reports to its host after a user-driven change.
#[derive(Debug, PartialEq)]
pub enum FieldChange<'a, T> {
    /// Free text typed into the input.
    Edited(&'a str),
    /// A suggestion was picked; `value` is its canonical value.
    Selected { value: &'a Value, record: &'a T },
    Cleared,
}

/// Host side of a control, handed to the control when it is built.
pub trait FieldBinding<T> {
    fn on_change(&mut self, change: FieldChange<'_, T>);
    fn on_touched(&mut self);
}

/// Binding for a control nobody listens to.
#[derive(Debug, Clone, Copy, Default)]
pub struct Detached;

impl<T> FieldBinding<T> for Detached {
    fn on_change(&mut self, _change: FieldChange<'_, T>) {}

    fn on_touched(&mut self) {}
}

/// Adapts a pair of closures into a binding.
pub struct CallbackBinding<C, U> {
    on_change: C,
    on_touched: U,
}

impl<C, U> CallbackBinding<C, U> {
    pub fn new(on_change: C, on_touched: U) -> Self {
        Self {
            on_change,
            on_touched,
        }
    }
}

impl<C, U> std::fmt::Debug for CallbackBinding<C, U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackBinding").finish_non_exhaustive()
    }
}

impl<T, C, U> FieldBinding<T> for CallbackBinding<C, U>
where
    C: FnMut(FieldChange<'_, T>),
    U: FnMut(),
{
    fn on_change(&mut self, change: FieldChange<'_, T>) {
        (self.on_change)(change);
    }

    fn on_touched(&mut self) {
        (self.on_touched)();
    }
}
