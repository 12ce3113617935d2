//! Entry point table
//!
//! The table is declared once, in the `commands` module, through
//! `entry_points!`. That one declaration produces the [`Command`]
//! enumeration, the static [`ENTRIES`] array (in `Command` order, grouped by
//! tier) and a named accessor per entry point on
//! [`DispatchTable`](crate::dispatch::DispatchTable).

use core::ffi::CStr;
use core::fmt;

use crate::features::Predicate;

pub use crate::commands::{Command, ENTRIES, HEADER_VERSION};

macro_rules! one {
    ($_t:tt) => {
        1
    };
}

/// Generates the entry point table.
///
/// Input is three tier blocks, in order, each a list of predicate groups:
///
/// ```text
/// loader {
///     [Has("VK_BASE_VERSION_1_0")] {
///         CreateInstance, create_instance = c"vkCreateInstance";
///     }
/// }
/// instance { ... }
/// device { ... }
/// ```
macro_rules! entry_points {
    (
        loader {
            $( [$lp:expr] { $( $lv:ident, $lf:ident = $ln:literal; )* } )*
        }
        instance {
            $( [$ip:expr] { $( $iv:ident, $if_:ident = $in_:literal; )* } )*
        }
        device {
            $( [$dp:expr] { $( $dv:ident, $df:ident = $dn:literal; )* } )*
        }
    ) => {
        /// Identifies one entry point slot
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u16)]
        pub enum Command {
            $( $( $lv, )* )*
            $( $( $iv, )* )*
            $( $( $dv, )* )*
        }

        pub(crate) const LOADER_LEN: usize = 0 $( $( + one!($lv) )* )*;
        pub(crate) const INSTANCE_LEN: usize = 0 $( $( + one!($iv) )* )*;
        pub(crate) const DEVICE_LEN: usize = 0 $( $( + one!($dv) )* )*;

        impl Command {
            /// Number of entry points in the table
            pub const COUNT: usize = LOADER_LEN + INSTANCE_LEN + DEVICE_LEN;

            /// Every command, in table order
            pub const ALL: [Command; Command::COUNT] = [
                $( $( Command::$lv, )* )*
                $( $( Command::$iv, )* )*
                $( $( Command::$dv, )* )*
            ];
        }

        /// Every entry point, indexed by `Command`
        pub static ENTRIES: [$crate::table::Entry; Command::COUNT] = [
            $( $(
                $crate::table::Entry {
                    command: Command::$lv,
                    tier: $crate::table::Tier::Loader,
                    name: $ln,
                    predicate: $lp,
                },
            )* )*
            $( $(
                $crate::table::Entry {
                    command: Command::$iv,
                    tier: $crate::table::Tier::Instance,
                    name: $in_,
                    predicate: $ip,
                },
            )* )*
            $( $(
                $crate::table::Entry {
                    command: Command::$dv,
                    tier: $crate::table::Tier::Device,
                    name: $dn,
                    predicate: $dp,
                },
            )* )*
        ];

        impl $crate::dispatch::DispatchTable {
            $( $(
                #[doc = concat!("`vk", stringify!($lv), "`")]
                #[inline]
                pub fn $lf(&self) -> Option<$crate::ffi::VoidFunction> {
                    self.get(Command::$lv)
                }
            )* )*
            $( $(
                #[doc = concat!("`vk", stringify!($iv), "`")]
                #[inline]
                pub fn $if_(&self) -> Option<$crate::ffi::VoidFunction> {
                    self.get(Command::$iv)
                }
            )* )*
            $( $(
                #[doc = concat!("`vk", stringify!($dv), "`")]
                #[inline]
                pub fn $df(&self) -> Option<$crate::ffi::VoidFunction> {
                    self.get(Command::$dv)
                }
            )* )*
        }
    };
}

/// Dispatch level an entry point is resolved at
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// Needs no dispatchable object
    Loader,
    /// Resolved through a `VkInstance`
    Instance,
    /// Resolved through a `VkDevice`, or through the instance as a fallback
    Device,
}

impl Tier {
    /// Tiers in resolution order
    pub const ALL: [Tier; 3] = [Tier::Loader, Tier::Instance, Tier::Device];

    /// Entries of this tier, in table order
    pub fn entries(self) -> &'static [Entry] {
        use crate::commands::{INSTANCE_LEN, LOADER_LEN};

        match self {
            Tier::Loader => &ENTRIES[..LOADER_LEN],
            Tier::Instance => &ENTRIES[LOADER_LEN..LOADER_LEN + INSTANCE_LEN],
            Tier::Device => &ENTRIES[LOADER_LEN + INSTANCE_LEN..],
        }
    }
}

/// One row of the table
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    pub command: Command,
    pub tier: Tier,
    /// Name passed to the resolver
    pub name: &'static CStr,
    /// Condition under which the entry exists at all
    pub predicate: Predicate,
}

impl Command {
    pub fn entry(self) -> &'static Entry {
        &ENTRIES[self as usize]
    }

    /// Name of the entry point, e.g. `vkCreateInstance`
    pub fn name(self) -> &'static CStr {
        self.entry().name
    }

    pub fn tier(self) -> Tier {
        self.entry().tier
    }

    pub fn predicate(self) -> &'static Predicate {
        &self.entry().predicate
    }

    /// Look a command up by its entry point name
    pub fn from_name(name: &str) -> Option<Command> {
        ENTRIES
            .iter()
            .find(|entry| entry.name.to_bytes() == name.as_bytes())
            .map(|entry| entry.command)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name().to_string_lossy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tier_sizes() {
        assert_eq!(Tier::Loader.entries().len(), 4);
        assert_eq!(Tier::Instance.entries().len(), 120);
        assert_eq!(Tier::Device.entries().len(), 650);
        assert_eq!(Command::COUNT, 774);
    }

    #[test]
    fn test_entries_indexed_by_command() {
        for (index, entry) in ENTRIES.iter().enumerate() {
            assert_eq!(entry.command as usize, index);
            assert_eq!(Command::ALL[index], entry.command);
        }
    }

    #[test]
    fn test_tier_partition() {
        for tier in Tier::ALL {
            for entry in tier.entries() {
                assert_eq!(entry.tier, tier, "{}", entry.command);
            }
        }
    }

    #[test]
    fn test_names_unique() {
        let mut seen = HashSet::new();
        for entry in ENTRIES.iter() {
            let name = entry.name.to_str().unwrap();
            assert!(name.starts_with("vk"), "{}", name);
            assert!(seen.insert(name), "duplicate entry point {}", name);
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(Command::from_name("vkCreateInstance"), Some(Command::CreateInstance));
        assert_eq!(Command::from_name("vkGetDeviceProcAddr"), Some(Command::GetDeviceProcAddr));
        assert_eq!(Command::from_name("vkQueueSubmit"), Some(Command::QueueSubmit));
        assert_eq!(Command::from_name("vkGetInstanceProcAddr"), None);
        assert_eq!(Command::from_name("vkNotARealFunction"), None);
    }

    #[test]
    fn test_known_tiers() {
        assert_eq!(Command::CreateInstance.tier(), Tier::Loader);
        assert_eq!(Command::EnumerateInstanceVersion.tier(), Tier::Loader);
        assert_eq!(Command::GetDeviceProcAddr.tier(), Tier::Instance);
        assert_eq!(Command::DestroySurfaceKHR.tier(), Tier::Instance);
        assert_eq!(Command::QueueSubmit.tier(), Tier::Device);
        assert_eq!(Command::CreateSwapchainKHR.tier(), Tier::Device);
    }

    #[test]
    fn test_display() {
        assert_eq!(Command::CmdDraw.to_string(), "vkCmdDraw");
    }
}
