use crate::resolution::domain::Scope;

/// ScopePriority policy for reconciling scopes of one artifact identity
///
/// When the same `groupId:artifactId` is reached through several edges with
/// different declared scopes, the widest one is kept.
///
/// Priority order:
/// 1. compile
/// 2. runtime
/// 3. provided
/// 4. test
/// 5. system, import
pub struct ScopePriority;

impl ScopePriority {
    fn rank(scope: Scope) -> u8 {
        match scope {
            Scope::Compile => 5,
            Scope::Runtime => 4,
            Scope::Provided => 3,
            Scope::Test => 2,
            Scope::System | Scope::Import => 1,
        }
    }

    /// Returns the scope with the higher priority; `current` on ties.
    pub fn merge(current: Scope, candidate: Scope) -> Scope {
        if Self::rank(candidate) > Self::rank(current) {
            candidate
        } else {
            current
        }
    }
}
