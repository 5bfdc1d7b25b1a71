//! Macros for declaring state and event enums.

/// Generate a `State` implementation for a simple enum.
///
/// Each variant may carry an explicit name (`Green => "green"`); the
/// variant identifier is stringified otherwise. Table resolution and
/// hook dispatch are keyed by these names.
///
/// # Example
///
/// ```
/// use semaforo::state_enum;
///
/// state_enum! {
///     pub enum Job {
///         Queued => "queued",
///         Running => "running",
///         Done => "done",
///     }
///     final: [Done]
/// }
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(=> $label:literal)?
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
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
                    $(Self::$variant => $crate::state_enum!(@label $variant $(, $label)?)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }
        }
    };
    (@label $variant:ident) => { stringify!($variant) };
    (@label $variant:ident, $label:literal) => { $label };
}

/// Generate an `Event` implementation for a simple enum.
///
/// Same shape as [`state_enum!`]: variants may carry explicit names,
/// which are the strings passed to `send`.
///
/// # Example
///
/// ```
/// use semaforo::event_enum;
///
/// event_enum! {
///     pub enum JobEvent {
///         Start => "start",
///         Finish => "finish",
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
                $variant:ident $(=> $label:literal)?
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
                    $(Self::$variant => $crate::event_enum!(@label $variant $(, $label)?)),*
                }
            }
        }
    };
    (@label $variant:ident) => { stringify!($variant) };
    (@label $variant:ident, $label:literal) => { $label };
}

#[cfg(test)]
mod tests {
    use crate::core::{Event, State};

    state_enum! {
        enum Job {
            Queued => "queued",
            Running => "running",
            Done => "done",
        }
        final: [Done]
    }

    event_enum! {
        enum JobEvent {
            Start => "start",
            Finish => "finish",
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(Job::Queued.name(), "queued");
        assert!(!Job::Queued.is_final());
        assert!(Job::Done.is_final());
    }

    #[test]
    fn event_enum_macro_generates_trait() {
        assert_eq!(JobEvent::Start.name(), "start");
        assert_eq!(JobEvent::Finish.name(), "finish");
    }

    #[test]
    fn labels_default_to_variant_names() {
        state_enum! {
            enum Bare {
                A,
                B,
            }
        }

        assert_eq!(Bare::A.name(), "A");
        assert_eq!(Bare::B.name(), "B");
        assert!(!Bare::B.is_final());
    }

    #[test]
    fn state_enum_supports_visibility() {
        state_enum! {
            pub enum PublicState {
                X => "x",
                Y,
            }
            final: [Y]
        }

        assert_eq!(PublicState::X.name(), "x");
        assert_eq!(PublicState::Y.name(), "Y");
        assert!(PublicState::Y.is_final());
    }
}
