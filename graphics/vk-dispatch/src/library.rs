//! Vulkan library discovery
//!
//! Finds the platform's Vulkan implementation and pulls the root resolver,
//! `vkGetInstanceProcAddr`, out of it. Opening goes through
//! [`LibraryLoader`] so that something other than the OS loader can stand in.

use core::ffi::{c_void, CStr};
use core::fmt;
use core::mem;

use crate::ffi::{PFN_vkGetInstanceProcAddr, VoidFunction};
use crate::loader::LoaderError;

/// Symbol every Vulkan implementation exports
pub const ENTRY_POINT: &CStr = c"vkGetInstanceProcAddr";

/// Library names tried in order when none are configured
#[cfg(windows)]
pub const LIBRARY_NAMES: &[&str] = &["vulkan-1.dll"];

#[cfg(any(target_os = "macos", target_os = "ios"))]
pub const LIBRARY_NAMES: &[&str] = &["libvulkan.dylib", "libvulkan.1.dylib", "libMoltenVK.dylib"];

#[cfg(all(unix, not(any(target_os = "macos", target_os = "ios"))))]
pub const LIBRARY_NAMES: &[&str] = &["libvulkan.so.1", "libvulkan.so"];

#[cfg(not(any(windows, unix)))]
pub const LIBRARY_NAMES: &[&str] = &[];

/// An open shared library. Dropping it releases the library.
pub trait Library: Send + Sync {
    /// Name the library was opened by
    fn name(&self) -> &str;

    /// Address of an exported function, or `None` if it is not exported
    fn symbol(&self, name: &CStr) -> Option<VoidFunction>;
}

/// Opens libraries by name
pub trait LibraryLoader {
    fn open(&self, name: &str) -> Result<Box<dyn Library>, LoaderError>;
}

/// [`LibraryLoader`] backed by the OS dynamic loader
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLibraryLoader;

impl LibraryLoader for SystemLibraryLoader {
    fn open(&self, name: &str) -> Result<Box<dyn Library>, LoaderError> {
        // Opening runs the library's initializers. Vulkan implementations
        // are built to be loaded this way.
        let library = unsafe { open_library(name) }.map_err(|err| {
            LoaderError::LibraryLoadFailed {
                name: name.into(),
                reason: err.to_string(),
            }
        })?;

        Ok(Box::new(SystemLibrary {
            name: name.into(),
            library,
        }))
    }
}

#[cfg(unix)]
unsafe fn open_library(name: &str) -> Result<libloading::Library, libloading::Error> {
    use libloading::os::unix::{Library, RTLD_LOCAL, RTLD_NOW};

    Library::open(Some(name), RTLD_NOW | RTLD_LOCAL).map(Into::into)
}

#[cfg(not(unix))]
unsafe fn open_library(name: &str) -> Result<libloading::Library, libloading::Error> {
    libloading::Library::new(name)
}

struct SystemLibrary {
    name: String,
    library: libloading::Library,
}

impl Library for SystemLibrary {
    fn name(&self) -> &str {
        &self.name
    }

    fn symbol(&self, name: &CStr) -> Option<VoidFunction> {
        let address = unsafe { self.library.get::<*mut c_void>(name.to_bytes_with_nul()) }.ok()?;
        let address = *address;
        if address.is_null() {
            return None;
        }
        Some(unsafe { mem::transmute::<*mut c_void, VoidFunction>(address) })
    }
}

impl fmt::Debug for SystemLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemLibrary")
            .field("name", &self.name)
            .finish()
    }
}

/// Open the first library in `names` that loads and look up the root
/// resolver in it.
///
/// A library that opens but does not export [`ENTRY_POINT`] is released and
/// ends the search.
pub(crate) fn acquire<S: AsRef<str>>(
    loader: &dyn LibraryLoader,
    names: &[S],
) -> Result<(Box<dyn Library>, PFN_vkGetInstanceProcAddr), LoaderError> {
    let mut tried = Vec::with_capacity(names.len());

    for name in names {
        let name = name.as_ref();
        let library = match loader.open(name) {
            Ok(library) => library,
            Err(e) => {
                log::debug!("{}", e);
                tried.push(name.to_string());
                continue;
            }
        };

        let Some(get_instance_proc_addr) = library.symbol(ENTRY_POINT) else {
            log::warn!("{} does not export {}", name, ENTRY_POINT.to_string_lossy());
            return Err(LoaderError::MissingEntryPoint(
                ENTRY_POINT.to_string_lossy().into_owned(),
            ));
        };

        log::info!("Loaded Vulkan library {}", library.name());
        let get_instance_proc_addr = unsafe {
            mem::transmute::<VoidFunction, PFN_vkGetInstanceProcAddr>(get_instance_proc_addr)
        };
        return Ok((library, get_instance_proc_addr));
    }

    Err(LoaderError::LibraryNotFound { tried })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    unsafe extern "system" fn entry() {}

    struct FakeLibrary {
        name: String,
        exports_entry: bool,
        released: Arc<AtomicUsize>,
    }

    impl Library for FakeLibrary {
        fn name(&self) -> &str {
            &self.name
        }

        fn symbol(&self, name: &CStr) -> Option<VoidFunction> {
            (self.exports_entry && name == ENTRY_POINT).then_some(entry as VoidFunction)
        }
    }

    impl Drop for FakeLibrary {
        fn drop(&mut self) {
            self.released.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct FakeLoader {
        available: &'static [&'static str],
        exports_entry: bool,
        attempts: RefCell<Vec<String>>,
        released: Arc<AtomicUsize>,
    }

    impl FakeLoader {
        fn new(available: &'static [&'static str]) -> Self {
            Self {
                available,
                exports_entry: true,
                attempts: RefCell::new(Vec::new()),
                released: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    impl LibraryLoader for FakeLoader {
        fn open(&self, name: &str) -> Result<Box<dyn Library>, LoaderError> {
            self.attempts.borrow_mut().push(name.to_string());
            if !self.available.contains(&name) {
                return Err(LoaderError::LibraryLoadFailed {
                    name: name.into(),
                    reason: "not found".into(),
                });
            }
            Ok(Box::new(FakeLibrary {
                name: name.into(),
                exports_entry: self.exports_entry,
                released: self.released.clone(),
            }))
        }
    }

    #[test]
    fn test_first_candidate_wins() {
        let loader = FakeLoader::new(&["libvulkan.so.1", "libvulkan.so"]);
        let (library, _) = acquire(&loader, &["libvulkan.so.1", "libvulkan.so"]).unwrap();
        assert_eq!(library.name(), "libvulkan.so.1");
        assert_eq!(*loader.attempts.borrow(), ["libvulkan.so.1"]);
    }

    #[test]
    fn test_falls_back_to_next_candidate() {
        let loader = FakeLoader::new(&["libvulkan.so"]);
        let (library, get_instance_proc_addr) =
            acquire(&loader, &["libvulkan.so.1", "libvulkan.so"]).unwrap();
        assert_eq!(library.name(), "libvulkan.so");
        assert_eq!(get_instance_proc_addr as usize, entry as usize);
        assert_eq!(*loader.attempts.borrow(), ["libvulkan.so.1", "libvulkan.so"]);
    }

    #[test]
    fn test_no_candidate_opens() {
        let loader = FakeLoader::new(&[]);
        let err = acquire(&loader, &["a.so", "b.so"]).err().unwrap();
        assert_eq!(
            err,
            LoaderError::LibraryNotFound {
                tried: vec!["a.so".into(), "b.so".into()]
            }
        );
    }

    #[test]
    fn test_no_candidates() {
        let loader = FakeLoader::new(&["a.so"]);
        let names: [&str; 0] = [];
        assert!(matches!(
            acquire(&loader, &names),
            Err(LoaderError::LibraryNotFound { tried }) if tried.is_empty()
        ));
    }

    #[test]
    fn test_missing_entry_point_releases_library() {
        let mut loader = FakeLoader::new(&["a.so", "b.so"]);
        loader.exports_entry = false;

        let err = acquire(&loader, &["a.so", "b.so"]).err().unwrap();
        assert_eq!(err, LoaderError::MissingEntryPoint("vkGetInstanceProcAddr".into()));
        assert_eq!(loader.released.load(Ordering::SeqCst), 1);
        assert_eq!(*loader.attempts.borrow(), ["a.so"]);
    }

    #[test]
    fn test_default_names() {
        #[cfg(windows)]
        assert_eq!(LIBRARY_NAMES, ["vulkan-1.dll"]);
        #[cfg(target_os = "macos")]
        assert_eq!(LIBRARY_NAMES[2], "libMoltenVK.dylib");
        #[cfg(target_os = "linux")]
        assert_eq!(LIBRARY_NAMES, ["libvulkan.so.1", "libvulkan.so"]);
    }

    #[test]
    fn test_system_loader_missing_library() {
        let err = SystemLibraryLoader
            .open("libvk-dispatch-does-not-exist.so")
            .err()
            .unwrap();
        assert!(matches!(err, LoaderError::LibraryLoadFailed { ref name, .. } if name == "libvk-dispatch-does-not-exist.so"));
    }
}
