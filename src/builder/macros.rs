//! Macros for ergonomic state machine construction.

/// Generate a `State` trait implementation for a simple enum.
///
/// # Example
///
/// ```
/// use switchyard::state_enum;
///
/// state_enum! {
///     pub enum ConveyorState {
///         Stopped,
///         Running,
///         Jammed,
///     }
/// }
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Generate an `Event` trait implementation for a simple enum.
///
/// # Example
///
/// ```
/// use switchyard::event_enum;
///
/// event_enum! {
///     pub enum ConveyorEvent {
///         BeltStart,
///         BeltStop,
///         JamDetected,
///     }
/// }
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Event for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Implement `Context` and `TaggedContext` for a payload type from a tag
/// expression.
///
/// # Example
///
/// ```
/// use switchyard::tagged_context;
/// use switchyard::core::{Context, ContextTag};
///
/// enum PayloadKind {
///     Belt,
///     Jam,
/// }
///
/// struct BeltPayload {
///     speed_mm_s: u32,
/// }
///
/// tagged_context!(BeltPayload, PayloadKind::Belt as ContextTag);
///
/// let payload = BeltPayload { speed_mm_s: 250 };
/// let ctx: &dyn Context = &payload;
/// assert!(ctx.is::<BeltPayload>());
/// ```
#[macro_export]
macro_rules! tagged_context {
    ($ty:ty, $tag:expr) => {
        impl $crate::core::TaggedContext for $ty {
            const TAG: $crate::core::ContextTag = $tag;
        }

        impl $crate::core::Context for $ty {
            fn tag(&self) -> $crate::core::ContextTag {
                <Self as $crate::core::TaggedContext>::TAG
            }
        }
    };
}
