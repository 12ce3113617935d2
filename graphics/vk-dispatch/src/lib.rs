//! Vulkan entry point loader
//!
//! Opens the platform's Vulkan implementation at runtime and fills a table
//! of function pointers in three tiers that follow Vulkan's own dispatch:
//!
//! - loader tier, resolved at construction with no dispatchable object
//!   (`vkCreateInstance`, `vkEnumerateInstanceVersion`, ...)
//! - instance tier, resolved through a `VkInstance`
//! - device tier, resolved through the instance first and then, once a
//!   `VkDevice` exists, directly through `vkGetDeviceProcAddr`, which skips
//!   the loader trampoline on every call
//!
//! A slot that could not be resolved is `None`; callers check before use.
//!
//! # Usage
//!
//! ```no_run
//! use vk_dispatch::{Status, VulkanLoader};
//!
//! let mut loader = VulkanLoader::new();
//! if loader.status() != Status::Success {
//!     return;
//! }
//! println!("Vulkan {:?}", loader.instance_version());
//!
//! // After vkCreateInstance / vkCreateDevice:
//! # let instance = vk_dispatch::Instance::null();
//! # let device = vk_dispatch::Device::null();
//! loader.load_instance(instance);
//! loader.load_device(device);
//! let queue_submit = loader.table().queue_submit();
//! ```

#[macro_use]
mod table;
mod commands;

pub mod dispatch;
pub mod features;
pub mod ffi;
pub mod library;
pub mod loader;

pub use dispatch::{DispatchTable, Passes};
pub use features::{FeatureSet, Platform, Predicate};
pub use ffi::{Device, Instance, VoidFunction};
pub use library::{Library, LibraryLoader, SystemLibraryLoader};
pub use loader::{LoaderBuilder, LoaderError, State, Status, VulkanLoader};
pub use table::{Command, Entry, Tier, ENTRIES, HEADER_VERSION};

use core::fmt;

/// Vulkan API version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VulkanVersion {
    pub variant: u32,
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl VulkanVersion {
    pub const VK_1_0: Self = Self::new(1, 0, 0);
    pub const VK_1_1: Self = Self::new(1, 1, 0);
    pub const VK_1_2: Self = Self::new(1, 2, 0);
    pub const VK_1_3: Self = Self::new(1, 3, 0);
    pub const VK_1_4: Self = Self::new(1, 4, 0);

    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            variant: 0,
            major,
            minor,
            patch,
        }
    }

    pub const fn to_u32(self) -> u32 {
        (self.variant << 29) | (self.major << 22) | (self.minor << 12) | self.patch
    }

    pub const fn from_u32(version: u32) -> Self {
        Self {
            variant: version >> 29,
            major: (version >> 22) & 0x7F,
            minor: (version >> 12) & 0x3FF,
            patch: version & 0xFFF,
        }
    }
}

impl fmt::Display for VulkanVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_encoding() {
        assert_eq!(VulkanVersion::VK_1_0.to_u32(), 1 << 22);
        assert_eq!(VulkanVersion::VK_1_3.to_u32(), (1 << 22) | (3 << 12));
        assert_eq!(VulkanVersion::from_u32((1 << 22) | (2 << 12) | 198), VulkanVersion::new(1, 2, 198));
    }

    #[test]
    fn test_version_variant() {
        let version = VulkanVersion::from_u32((1 << 29) | (1 << 22));
        assert_eq!(version.variant, 1);
        assert_eq!(version.major, 1);
        assert_eq!(version.to_u32(), (1 << 29) | (1 << 22));
    }

    #[test]
    fn test_version_order() {
        assert!(VulkanVersion::VK_1_1 < VulkanVersion::VK_1_2);
        assert_eq!(VulkanVersion::new(1, 3, 296).to_string(), "1.3.296");
    }
}
