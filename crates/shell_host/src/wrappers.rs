use derive_more::{Display, From};

/// Identity of a managed window. Two handles refer to the same window iff
/// their ids are equal.
#[derive(Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Display, From)]
#[display("{_0}")]
pub struct WindowId(pub u64);

impl std::fmt::Debug for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "WindowId({})", self.0)
    }
}

/// Index of a workspace in the shell's workspace registry.
#[derive(Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Display, From)]
#[display("{_0}")]
pub struct WorkspaceId(pub usize);

impl std::fmt::Debug for WorkspaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "WorkspaceId({})", self.0)
    }
}

/// Token for an established subscription, returned by the `connect_*`
/// capabilities and consumed by [`crate::ShellBackend::disconnect`].
#[derive(Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Display, From)]
#[display("{_0}")]
pub struct SignalHandle(pub u64);

impl std::fmt::Debug for SignalHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SignalHandle({})", self.0)
    }
}

/// Monotonically increasing event-time token. Activation and minimization
/// requests carry one so the shell can drop requests that lost a race
/// against a newer one.
#[derive(Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Display, From)]
#[display("{_0}")]
pub struct Timestamp(pub u64);

impl std::fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timestamp({})", self.0)
    }
}
