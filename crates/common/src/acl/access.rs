use serde::{Deserialize, Serialize};

/// Access flags for one agent on one resource.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccessModes {
    pub read: bool,
    pub append: bool,
    pub write: bool,
    pub control: bool,
}

impl AccessModes {
    /// Every flag set; the owner's access.
    pub const FULL: AccessModes = AccessModes {
        read: true,
        append: true,
        write: true,
        control: true,
    };

    /// Only `read` set; the shape of a cross-pod grant.
    pub const READ: AccessModes = AccessModes {
        read: true,
        append: false,
        write: false,
        control: false,
    };

    /// No flags set; the shape of a revocation.
    pub const NONE: AccessModes = AccessModes {
        read: false,
        append: false,
        write: false,
        control: false,
    };

    /// An access object with only the `read` flag specified.
    pub fn read_only(read: bool) -> AccessModes {
        AccessModes {
            read,
            ..AccessModes::NONE
        }
    }
}

impl std::fmt::Display for AccessModes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut flags = String::new();
        for (set, c) in [
            (self.read, 'r'),
            (self.append, 'a'),
            (self.write, 'w'),
            (self.control, 'c'),
        ] {
            flags.push(if set { c } else { '-' });
        }
        write!(f, "{}", flags)
    }
}
