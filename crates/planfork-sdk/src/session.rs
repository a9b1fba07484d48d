use planfork_store::{BranchReader, Result, StoreError};

use crate::service::Planfork;

/// A caller's "current branch" pointer.
///
/// The core takes the branch name explicitly on every call and never tracks
/// which branch is selected; that pointer belongs to the caller, and this
/// type is its home. A session always points at a branch that existed when
/// it was set — branches are never deleted, so the pointer cannot dangle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    current: String,
}

impl Session {
    /// Open a session on an existing branch.
    pub fn new(service: &Planfork, branch: &str) -> Result<Self> {
        ensure_exists(service, branch)?;
        Ok(Self {
            current: branch.to_string(),
        })
    }

    /// The currently selected branch name.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Point the session at another existing branch.
    pub fn switch(&mut self, service: &Planfork, branch: &str) -> Result<()> {
        ensure_exists(service, branch)?;
        tracing::debug!(from = %self.current, to = branch, "switched branch");
        self.current = branch.to_string();
        Ok(())
    }
}

fn ensure_exists(service: &Planfork, branch: &str) -> Result<()> {
    if service.store().contains(branch)? {
        Ok(())
    } else {
        Err(StoreError::BranchNotFound {
            name: branch.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_opens_on_existing_branch() {
        let plans = Planfork::init().unwrap();
        let session = Session::new(&plans, "main").unwrap();
        assert_eq!(session.current(), "main");
    }

    #[test]
    fn session_rejects_unknown_branch() {
        let plans = Planfork::init().unwrap();
        let err = Session::new(&plans, "ghost").unwrap_err();
        assert!(matches!(err, StoreError::BranchNotFound { .. }));
    }

    #[test]
    fn switch_moves_the_pointer() {
        let plans = Planfork::init().unwrap();
        plans.create_branch("dev").unwrap();

        let mut session = Session::new(&plans, "main").unwrap();
        session.switch(&plans, "dev").unwrap();
        assert_eq!(session.current(), "dev");
    }

    #[test]
    fn failed_switch_keeps_the_pointer() {
        let plans = Planfork::init().unwrap();
        let mut session = Session::new(&plans, "main").unwrap();

        assert!(session.switch(&plans, "ghost").is_err());
        assert_eq!(session.current(), "main");
    }

    #[test]
    fn sessions_are_independent() {
        let plans = Planfork::init().unwrap();
        plans.create_branch("dev").unwrap();

        let mut alice = Session::new(&plans, "main").unwrap();
        let bob = Session::new(&plans, "main").unwrap();

        alice.switch(&plans, "dev").unwrap();
        assert_eq!(alice.current(), "dev");
        assert_eq!(bob.current(), "main");
    }

    #[test]
    fn session_drives_the_facade() {
        let plans = Planfork::init().unwrap();
        plans.create_branch("dev").unwrap();

        let mut session = Session::new(&plans, "main").unwrap();
        plans.add_course(session.current(), "CS101").unwrap();

        session.switch(&plans, "dev").unwrap();
        plans.add_course(session.current(), "CS102").unwrap();

        assert_eq!(plans.snapshot("main").unwrap().courses.len(), 1);
        assert_eq!(plans.snapshot("dev").unwrap().courses.len(), 1);
    }
}
