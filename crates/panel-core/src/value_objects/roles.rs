//! Effective panel roles of a player
//!
//! Stored flags are inherited upwards: root implies super admin, super admin
//! implies staff, panel trusted and debugger.

use bitflags::bitflags;
use serde::{Serialize, Serializer};
use std::collections::HashSet;

bitflags! {
    /// Effective role flags after inheritance
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PlayerRoles: u32 {
        /// Trusted in game
        const TRUSTED        = 1 << 0;
        /// Can access the panel
        const STAFF          = 1 << 1;
        /// Full panel access
        const SUPER_ADMIN    = 1 << 2;
        /// Listed in ROOT_USERS
        const ROOT           = 1 << 3;
        /// Trusted panel user
        const PANEL_TRUSTED  = 1 << 4;
        /// Debug tooling access
        const DEBUGGER       = 1 << 5;
    }
}

impl PlayerRoles {
    /// Resolve effective roles from the stored flags
    pub fn resolve(
        stored: StoredRoleFlags,
        is_root: bool,
    ) -> Self {
        let mut roles = Self::empty();

        if stored.is_trusted {
            roles |= Self::TRUSTED;
        }
        if is_root {
            roles |= Self::ROOT;
        }
        if stored.is_super_admin || is_root {
            roles |= Self::SUPER_ADMIN;
        }

        let super_admin = roles.contains(Self::SUPER_ADMIN);
        if stored.is_staff || super_admin {
            roles |= Self::STAFF;
        }
        if stored.is_panel_trusted || super_admin {
            roles |= Self::PANEL_TRUSTED;
        }
        if stored.is_debugger || super_admin {
            roles |= Self::DEBUGGER;
        }

        roles
    }

    #[inline]
    pub fn is_staff(&self) -> bool {
        self.contains(Self::STAFF)
    }

    #[inline]
    pub fn is_super_admin(&self) -> bool {
        self.contains(Self::SUPER_ADMIN)
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.contains(Self::ROOT)
    }

    #[inline]
    pub fn is_panel_trusted(&self) -> bool {
        self.contains(Self::PANEL_TRUSTED)
    }

    #[inline]
    pub fn is_debugger(&self) -> bool {
        self.contains(Self::DEBUGGER)
    }

    #[inline]
    pub fn is_trusted(&self) -> bool {
        self.contains(Self::TRUSTED)
    }
}

// Serialize as the list of role names for the panel UI
impl Serialize for PlayerRoles {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let names: Vec<String> = self
            .iter_names()
            .map(|(name, _)| name.to_ascii_lowercase())
            .collect();
        names.serialize(serializer)
    }
}

/// Role flags as stored on the player row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoredRoleFlags {
    pub is_trusted: bool,
    pub is_staff: bool,
    pub is_super_admin: bool,
    pub is_panel_trusted: bool,
    pub is_debugger: bool,
}

/// Steam identifiers with root access to the panel
#[derive(Debug, Clone, Default)]
pub struct RootUsers(HashSet<String>);

impl RootUsers {
    pub fn new<I, S>(identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            identifiers
                .into_iter()
                .map(Into::into)
                .map(|s| s.trim().to_ascii_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
        )
    }

    /// Check whether a steam identifier is root
    pub fn contains(&self, steam_identifier: &str) -> bool {
        self.0.contains(&steam_identifier.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
