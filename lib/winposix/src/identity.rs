/// A `struct passwd` entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Passwd {
    pub name: String,
    pub uid: u32,
    pub gid: u32,
    pub gecos: String,
    pub home: String,
    pub shell: String,
}

/// A `struct group` entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    pub name: String,
    pub gid: u32,
    pub members: Vec<String>,
}

/// Login-name and password-database access shared with other hosts.
pub trait IdentityLookup: Send + Sync {
    fn getlogin(&self) -> Option<String>;

    fn endpwent(&self) -> i32 {
        0
    }

    fn setpwent(&self) -> i32 {
        0
    }
}

/// Reads the login name from the environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnvIdentity;

impl EnvIdentity {
    const VARIABLES: &'static [&'static str] = &["USERNAME", "USER"];
}

impl IdentityLookup for EnvIdentity {
    fn getlogin(&self) -> Option<String> {
        Self::VARIABLES
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .find(|value| !value.is_empty())
    }
}
