//! Type-tagged context payloads for transition rows.
//!
//! A transition row may carry an opaque payload that is handed back to its
//! hooks at dispatch time. Payloads are host-owned: the engine stores a
//! borrowed `&dyn Context` and never creates, copies, or drops one. Each
//! payload type declares a tag that is unique within the application
//! (typically the ordinal of a host "context kind" enum), and the tag is the
//! sole basis for the runtime capability check: a flat integer comparison,
//! with no type-hierarchy walk.

use std::any::Any;

/// Tag value identifying a concrete context type.
pub type ContextTag = usize;

/// Object-safe conversion to `&dyn Any`, implemented for every sized type.
///
/// This exists so `dyn Context` can perform a checked downcast after the
/// tag comparison has passed.
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// An opaque payload attached to a transition row.
///
/// Hosts implement this on their own payload structs. The returned tag must
/// equal the type's [`TaggedContext::TAG`] and must never vary between
/// calls. Hooks receive payloads as `&dyn Context`; any mutation goes
/// through interior mutability in the host's type (atomics, cells).
///
/// The [`crate::tagged_context!`] macro generates both impls from a tag
/// expression.
///
/// # Example
///
/// ```rust
/// use switchyard::core::{Context, ContextTag, TaggedContext};
/// use std::sync::atomic::AtomicU32;
///
/// enum PayloadKind {
///     Motor,
///     Heater,
/// }
///
/// struct MotorPayload {
///     rpm: AtomicU32,
/// }
///
/// impl TaggedContext for MotorPayload {
///     const TAG: ContextTag = PayloadKind::Motor as ContextTag;
/// }
///
/// impl Context for MotorPayload {
///     fn tag(&self) -> ContextTag {
///         Self::TAG
///     }
/// }
///
/// let payload = MotorPayload { rpm: AtomicU32::new(0) };
/// let ctx: &dyn Context = &payload;
/// assert!(ctx.is::<MotorPayload>());
/// ```
pub trait Context: AsAny + Send + Sync {
    /// The tag this payload was declared with.
    fn tag(&self) -> ContextTag;
}

/// A context type with a statically declared tag.
///
/// Only types implementing this trait can be queried with
/// [`is`](dyn Context::is) or [`downcast_ref`](dyn Context::downcast_ref);
/// querying the base `dyn Context` or an untagged type fails to compile.
pub trait TaggedContext: Context + Sized {
    /// The unique tag for this type, assigned once and immutable.
    const TAG: ContextTag;
}

impl<'a> dyn Context + 'a {
    /// Check whether this payload was declared as `T`.
    ///
    /// Pure tag comparison: true iff the stored tag equals `T::TAG`.
    pub fn is<T: TaggedContext>(&self) -> bool {
        self.tag() == T::TAG
    }

    /// Borrow this payload as `T` if the tag matches.
    ///
    /// The tag comparison gates a checked [`Any`] downcast; a mismatched
    /// tag yields `None`, never a reinterpreted reference.
    pub fn downcast_ref<T: TaggedContext + 'static>(&self) -> Option<&T> {
        if self.is::<T>() {
            self.as_any().downcast_ref::<T>()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicI32, AtomicU32, Ordering};

    enum TestKind {
        Counter,
        Gauge,
    }

    struct CounterContext {
        value: AtomicU32,
    }

    impl TaggedContext for CounterContext {
        const TAG: ContextTag = TestKind::Counter as ContextTag;
    }

    impl Context for CounterContext {
        fn tag(&self) -> ContextTag {
            Self::TAG
        }
    }

    struct GaugeContext {
        level: AtomicI32,
    }

    impl TaggedContext for GaugeContext {
        const TAG: ContextTag = TestKind::Gauge as ContextTag;
    }

    impl Context for GaugeContext {
        fn tag(&self) -> ContextTag {
            Self::TAG
        }
    }

    #[test]
    fn is_matches_declared_type() {
        let counter = CounterContext {
            value: AtomicU32::new(0),
        };
        let ctx: &dyn Context = &counter;

        assert!(ctx.is::<CounterContext>());
        assert!(!ctx.is::<GaugeContext>());
    }

    #[test]
    fn is_rejects_sibling_type() {
        let gauge = GaugeContext {
            level: AtomicI32::new(0),
        };
        let ctx: &dyn Context = &gauge;

        assert!(ctx.is::<GaugeContext>());
        assert!(!ctx.is::<CounterContext>());
    }

    #[test]
    fn downcast_ref_returns_typed_borrow() {
        let counter = CounterContext {
            value: AtomicU32::new(7),
        };
        let ctx: &dyn Context = &counter;

        let typed = ctx.downcast_ref::<CounterContext>();
        assert!(typed.is_some());
        assert_eq!(typed.unwrap().value.load(Ordering::Relaxed), 7);
    }

    #[test]
    fn downcast_ref_rejects_wrong_type() {
        let counter = CounterContext {
            value: AtomicU32::new(7),
        };
        let ctx: &dyn Context = &counter;

        assert!(ctx.downcast_ref::<GaugeContext>().is_none());
    }

    #[test]
    fn mutation_through_interior_mutability() {
        let counter = CounterContext {
            value: AtomicU32::new(0),
        };
        let ctx: &dyn Context = &counter;

        if let Some(typed) = ctx.downcast_ref::<CounterContext>() {
            typed.value.store(42, Ordering::Relaxed);
        }

        assert_eq!(counter.value.load(Ordering::Relaxed), 42);
    }

    #[test]
    fn tag_is_stable_across_calls() {
        let gauge = GaugeContext {
            level: AtomicI32::new(0),
        };
        let ctx: &dyn Context = &gauge;

        assert_eq!(ctx.tag(), ctx.tag());
        assert_eq!(ctx.tag(), GaugeContext::TAG);
    }
}
