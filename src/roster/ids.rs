//! Dense identifier newtypes for the assembled roster.
//!
//! Arms, subjects, and teachers are interned once during assembly; every
//! later lookup (quotas, staffing, trail tables) indexes by these ids
//! instead of re-comparing names.

/// Index of a class arm in the roster's registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassArmId(pub(crate) usize);

/// Index of a subject in the roster's registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubjectId(pub(crate) usize);

/// Index of a teacher in the roster's registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TeacherId(pub(crate) usize);

impl ClassArmId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl SubjectId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl TeacherId {
    pub fn index(self) -> usize {
        self.0
    }
}
