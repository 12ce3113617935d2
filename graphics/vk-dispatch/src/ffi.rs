//! Raw types shared with the Vulkan implementation
//!
//! Only the handful of types the loader itself touches are declared here.
//! Everything else about the API is opaque: slots hold untyped function
//! pointers and callers reinterpret them with the signature they expect.

#![allow(non_camel_case_types)]

use core::ffi::{c_char, c_void};
use core::fmt;

/// Untyped entry point, the equivalent of `PFN_vkVoidFunction`
pub type VoidFunction = unsafe extern "system" fn();

/// `vkGetInstanceProcAddr`
pub type PFN_vkGetInstanceProcAddr =
    unsafe extern "system" fn(instance: Instance, name: *const c_char) -> Option<VoidFunction>;

/// `vkGetDeviceProcAddr`
pub type PFN_vkGetDeviceProcAddr =
    unsafe extern "system" fn(device: Device, name: *const c_char) -> Option<VoidFunction>;

/// `vkEnumerateInstanceVersion`
pub type PFN_vkEnumerateInstanceVersion =
    unsafe extern "system" fn(api_version: *mut u32) -> VkResult;

/// Raw `VkResult` value
pub type VkResult = i32;

pub const VK_SUCCESS: VkResult = 0;
pub const VK_ERROR_INITIALIZATION_FAILED: VkResult = -3;

macro_rules! dispatchable_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[repr(transparent)]
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(*mut c_void);

        // Handles are plain identifiers; the API requires external
        // synchronization for the objects behind them, not for the values.
        unsafe impl Send for $name {}
        unsafe impl Sync for $name {}

        impl $name {
            /// `VK_NULL_HANDLE`
            pub const fn null() -> Self {
                Self(core::ptr::null_mut())
            }

            pub const fn from_raw(raw: *mut c_void) -> Self {
                Self(raw)
            }

            pub const fn as_raw(self) -> *mut c_void {
                self.0
            }

            pub fn is_null(self) -> bool {
                self.0.is_null()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::null()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({:p})"), self.0)
            }
        }
    };
}

dispatchable_handle! {
    /// `VkInstance`
    Instance
}

dispatchable_handle! {
    /// `VkDevice`
    Device
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_handles() {
        assert!(Instance::null().is_null());
        assert!(Device::default().is_null());
        assert_eq!(Instance::null(), Instance::from_raw(core::ptr::null_mut()));
    }

    #[test]
    fn test_handle_roundtrip() {
        let raw = 0x1000 as *mut c_void;
        let device = Device::from_raw(raw);
        assert!(!device.is_null());
        assert_eq!(device.as_raw(), raw);
    }
}
