//! How each POSIX operation is realised on this host.

use std::fmt;

/// How an operation is carried out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Calls a native primitive; failures are translated and reported.
    Native,
    /// Forwarded to the identity lookup.
    Delegated,
    /// Answered without touching native state.
    Stub(Stub),
}

/// The answer given by an operation that never calls the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stub {
    /// A fixed stand-in value, e.g. uid 0 on a single-user host.
    Fixed(i32),
    /// Succeeds (returns 0) without doing anything.
    Vacuous,
    /// Returns no entry, without an error.
    Empty,
    /// Reports "unimplemented" and returns the failure sentinel.
    Unsupported,
}

macro_rules! operations {
    ($($variant:ident => $name:literal,)*) => {
        /// Every operation the facade exposes.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum Operation {
            $($variant,)*
        }

        impl Operation {
            pub const ALL: &'static [Operation] = &[$(Operation::$variant,)*];

            /// The POSIX name, as reported to the handler.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Operation::$variant => $name,)*
                }
            }
        }
    };
}

operations! {
    Chmod => "chmod",
    Mkdir => "mkdir",
    Link => "link",
    Utimes => "utimes",
    Isatty => "isatty",
    Stat => "stat",
    Lstat => "lstat",
    Geteuid => "geteuid",
    Getuid => "getuid",
    Getppid => "getppid",
    Chown => "chown",
    Endgrent => "endgrent",
    Setgrent => "setgrent",
    Getgrent => "getgrent",
    Getpwent => "getpwent",
    Getgrgid => "getgrgid",
    Getgrnam => "getgrnam",
    Getpwnam => "getpwnam",
    Getpwuid => "getpwuid",
    Getlogin => "getlogin",
    Endpwent => "endpwent",
    Setpwent => "setpwent",
    Kill => "kill",
    Getegid => "getegid",
    Setegid => "setegid",
    Seteuid => "seteuid",
    Setuid => "setuid",
    Getgid => "getgid",
    Setgid => "setgid",
    Getpgid => "getpgid",
    Getpgrp => "getpgrp",
    Setpgid => "setpgid",
    Getpriority => "getpriority",
    Setpriority => "setpriority",
    Wait => "wait",
    Waitpid => "waitpid",
    Readlink => "readlink",
    Lchmod => "lchmod",
    Lchown => "lchown",
}

impl Operation {
    pub const fn strategy(self) -> Strategy {
        use Operation::*;
        match self {
            Chmod | Mkdir | Link | Utimes | Isatty | Stat | Lstat => Strategy::Native,
            Getlogin | Endpwent | Setpwent => Strategy::Delegated,
            Geteuid | Getuid | Getppid => Strategy::Stub(Stub::Fixed(0)),
            // Windows has no per-file owner to change.
            Chown | Endgrent | Setgrent => Strategy::Stub(Stub::Vacuous),
            Getgrent | Getpwent | Getgrgid | Getgrnam | Getpwnam | Getpwuid => {
                Strategy::Stub(Stub::Empty)
            }
            Kill | Getegid | Setegid | Seteuid | Setuid | Getgid | Setgid | Getpgid | Getpgrp
            | Setpgid | Getpriority | Setpriority | Wait | Waitpid | Readlink | Lchmod | Lchown => {
                Strategy::Stub(Stub::Unsupported)
            }
        }
    }

    pub fn is_unsupported(self) -> bool {
        self.strategy() == Strategy::Stub(Stub::Unsupported)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
