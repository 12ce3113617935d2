//! Vulkan loader implementation

use core::ffi::CStr;
use core::fmt;

use crate::dispatch::{DispatchTable, Passes};
use crate::features::FeatureSet;
use crate::ffi::{
    Device, Instance, PFN_vkEnumerateInstanceVersion, PFN_vkGetDeviceProcAddr,
    PFN_vkGetInstanceProcAddr, VkResult, VoidFunction, VK_ERROR_INITIALIZATION_FAILED, VK_SUCCESS,
};
use crate::library::{self, Library, LibraryLoader, SystemLibraryLoader, LIBRARY_NAMES};
use crate::table::{Command, Tier, HEADER_VERSION};
use crate::VulkanVersion;

/// Loader error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoaderError {
    /// None of the candidate libraries could be opened
    LibraryNotFound { tried: Vec<String> },
    /// A library failed to open
    LibraryLoadFailed { name: String, reason: String },
    /// The library does not export a required entry point
    MissingEntryPoint(String),
}

impl fmt::Display for LoaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoaderError::LibraryNotFound { tried } if tried.is_empty() => {
                write!(f, "No Vulkan library candidates for this platform")
            }
            LoaderError::LibraryNotFound { tried } => {
                write!(f, "No Vulkan library found (tried {})", tried.join(", "))
            }
            LoaderError::LibraryLoadFailed { name, reason } => {
                write!(f, "Failed to load {}: {}", name, reason)
            }
            LoaderError::MissingEntryPoint(name) => write!(f, "Missing entry point {}", name),
        }
    }
}

impl std::error::Error for LoaderError {}

/// Outcome of loader construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    /// No Vulkan implementation could be found; the loader is inert
    InitializationFailed,
}

impl Status {
    pub fn is_success(self) -> bool {
        self == Status::Success
    }

    /// Equivalent `VkResult`
    pub fn as_raw(self) -> VkResult {
        match self {
            Status::Success => VK_SUCCESS,
            Status::InitializationFailed => VK_ERROR_INITIALIZATION_FAILED,
        }
    }
}

/// Which contexts the slots were last resolved through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Only loader-tier slots are filled
    Unbound,
    /// Instance- and device-tier slots resolved through an instance
    InstanceBound,
    /// Device-tier slots resolved through a device
    DeviceBound,
    /// Every slot cleared and the library released
    TornDown,
}

/// Configures how a [`VulkanLoader`] finds its implementation
pub struct LoaderBuilder {
    proc_addr: Option<PFN_vkGetInstanceProcAddr>,
    library_names: Option<Vec<String>>,
    library_loader: Option<Box<dyn LibraryLoader>>,
    features: Option<FeatureSet>,
}

impl LoaderBuilder {
    pub fn new() -> Self {
        Self {
            proc_addr: None,
            library_names: None,
            library_loader: None,
            features: None,
        }
    }

    /// Use this root resolver instead of opening a library
    pub fn proc_addr(mut self, get_instance_proc_addr: PFN_vkGetInstanceProcAddr) -> Self {
        self.proc_addr = Some(get_instance_proc_addr);
        self
    }

    /// Library names or paths to try, in order, instead of the platform
    /// defaults
    pub fn library_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.library_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Open libraries through `loader` instead of the OS loader
    pub fn library_loader(mut self, loader: impl LibraryLoader + 'static) -> Self {
        self.library_loader = Some(Box::new(loader));
        self
    }

    /// Evaluate entry point predicates against `features` instead of the
    /// build-time set
    pub fn features(mut self, features: FeatureSet) -> Self {
        self.features = Some(features);
        self
    }

    /// Acquire the implementation and resolve the loader tier.
    ///
    /// Never fails outright; check [`VulkanLoader::status`].
    pub fn build(self) -> VulkanLoader {
        let features = self.features.unwrap_or_else(FeatureSet::compiled);
        let table = DispatchTable::new(&features);

        let acquired = match self.proc_addr {
            Some(get_instance_proc_addr) => Ok((None, get_instance_proc_addr)),
            None => {
                let loader = self
                    .library_loader
                    .unwrap_or_else(|| Box::new(SystemLibraryLoader));
                let acquired = match &self.library_names {
                    Some(names) => library::acquire(&*loader, names.as_slice()),
                    None => library::acquire(&*loader, LIBRARY_NAMES),
                };
                acquired.map(|(library, get_instance_proc_addr)| {
                    (Some(library), get_instance_proc_addr)
                })
            }
        };

        let mut loader = VulkanLoader {
            status: Ok(()),
            library: None,
            get_instance_proc_addr: None,
            features,
            table,
            loaded_instance: None,
            loaded_device: None,
            state: State::Unbound,
        };

        match acquired {
            Ok((library, get_instance_proc_addr)) => {
                loader.library = library;
                loader.get_instance_proc_addr = Some(get_instance_proc_addr);
                loader.table.load(Tier::Loader, |name| unsafe {
                    get_instance_proc_addr(Instance::null(), name.as_ptr())
                });
                log::info!(
                    "Vulkan loader ready ({}/{} loader entry points)",
                    loader.table.resolved(Tier::Loader),
                    loader.table.available(Tier::Loader).count()
                );
            }
            Err(e) => {
                log::warn!("Vulkan loader initialization failed: {}", e);
                loader.status = Err(e);
            }
        }

        loader
    }
}

impl Default for LoaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LoaderBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoaderBuilder")
            .field("proc_addr", &self.proc_addr.map(|f| f as usize))
            .field("library_names", &self.library_names)
            .field("custom_library_loader", &self.library_loader.is_some())
            .field("features", &self.features.as_ref().map(FeatureSet::len))
            .finish()
    }
}

/// Vulkan entry point loader
///
/// Owns the Vulkan library (when it opened one) and one slot per entry
/// point. Slots are resolved in three tiers: the loader tier at
/// construction, the instance tier by [`load_instance`](Self::load_instance)
/// and the device tier by [`load_device`](Self::load_device).
///
/// Device-tier slots reflect the most recently loaded device only. Use one
/// loader, or a [`device_table`](Self::device_table), per device when
/// several are live at once.
pub struct VulkanLoader {
    status: Result<(), LoaderError>,
    library: Option<Box<dyn Library>>,
    get_instance_proc_addr: Option<PFN_vkGetInstanceProcAddr>,
    features: FeatureSet,
    table: DispatchTable,
    loaded_instance: Option<Instance>,
    loaded_device: Option<Device>,
    state: State,
}

impl VulkanLoader {
    /// Load the platform's Vulkan library
    pub fn new() -> Self {
        log::info!("Creating Vulkan loader");
        Self::builder().build()
    }

    /// Use a root resolver the caller already has
    pub fn with_proc_addr(get_instance_proc_addr: PFN_vkGetInstanceProcAddr) -> Self {
        Self::builder().proc_addr(get_instance_proc_addr).build()
    }

    pub fn builder() -> LoaderBuilder {
        LoaderBuilder::new()
    }

    /// Header revision the entry point table was built from
    pub fn header_version(&self) -> u32 {
        HEADER_VERSION
    }

    pub fn status(&self) -> Status {
        match self.status {
            Ok(()) => Status::Success,
            Err(_) => Status::InitializationFailed,
        }
    }

    /// Why initialization failed, if it did
    pub fn error(&self) -> Option<&LoaderError> {
        self.status.as_ref().err()
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Highest instance-level API version the implementation supports
    ///
    /// Asks `vkEnumerateInstanceVersion` when available, otherwise reports
    /// 1.0 if `vkCreateInstance` resolved. `None` means Vulkan is not usable.
    pub fn instance_version(&self) -> Option<VulkanVersion> {
        let enumerate = unsafe {
            self.table
                .get_as::<PFN_vkEnumerateInstanceVersion>(Command::EnumerateInstanceVersion)
        };
        if let Some(enumerate) = enumerate {
            let mut version = 0;
            if unsafe { enumerate(&mut version) } == VK_SUCCESS {
                return Some(VulkanVersion::from_u32(version));
            }
        }

        self.table
            .create_instance()
            .map(|_| VulkanVersion::VK_1_0)
    }

    /// Resolve the instance tier through `instance`, then the device tier
    /// through it as well.
    ///
    /// The device-tier pointers go through the loader's dispatch and work for
    /// any device of the instance. [`load_device`](Self::load_device)
    /// replaces them with direct ones.
    pub fn load_instance(&mut self, instance: Instance) {
        self.bind_instance(instance, Passes::INSTANCE | Passes::DEVICE);
    }

    /// Resolve only the instance tier through `instance`.
    ///
    /// Device-tier slots are left alone; call
    /// [`load_device`](Self::load_device) afterwards.
    pub fn load_instance_only(&mut self, instance: Instance) {
        self.bind_instance(instance, Passes::INSTANCE);
    }

    fn bind_instance(&mut self, instance: Instance, passes: Passes) {
        let Some(get_instance_proc_addr) = self.live_proc_addr() else {
            log::warn!("Ignoring {:?}: loader is not initialized", instance);
            return;
        };

        self.loaded_instance = Some(instance);
        self.table.load_passes(passes, |name| unsafe {
            get_instance_proc_addr(instance, name.as_ptr())
        });
        self.state = State::InstanceBound;
    }

    /// Resolve the device tier through `device`, replacing whatever the
    /// instance pass stored.
    ///
    /// Needs `vkGetDeviceProcAddr` from a previous instance load; without it
    /// this does nothing.
    pub fn load_device(&mut self, device: Device) {
        let Some(get_device_proc_addr) = self.device_proc_addr() else {
            log::warn!("Ignoring {:?}: no vkGetDeviceProcAddr, load an instance first", device);
            return;
        };

        self.loaded_device = Some(device);
        self.table.load(Tier::Device, |name| unsafe {
            get_device_proc_addr(device, name.as_ptr())
        });
        self.state = State::DeviceBound;
    }

    /// Build a separate table holding the device tier resolved for `device`.
    ///
    /// The loader's own slots and recorded device are unchanged. Returns
    /// `None` under the same conditions that make
    /// [`load_device`](Self::load_device) a no-op.
    pub fn device_table(&self, device: Device) -> Option<DispatchTable> {
        let get_device_proc_addr = self.device_proc_addr()?;

        let mut table = DispatchTable::new(&self.features);
        table.load(Tier::Device, |name| unsafe {
            get_device_proc_addr(device, name.as_ptr())
        });
        Some(table)
    }

    /// Instance passed to the last instance load
    pub fn loaded_instance(&self) -> Option<Instance> {
        self.loaded_instance
    }

    /// Device passed to the last successful device load
    pub fn loaded_device(&self) -> Option<Device> {
        self.loaded_device
    }

    pub fn table(&self) -> &DispatchTable {
        &self.table
    }

    #[inline]
    pub fn get(&self, command: Command) -> Option<VoidFunction> {
        self.table.get(command)
    }

    /// Root resolver, if initialization succeeded and the loader is live
    pub fn get_instance_proc_addr(&self) -> Option<PFN_vkGetInstanceProcAddr> {
        self.get_instance_proc_addr
    }

    /// Resolve a single name through the root resolver with no instance
    pub fn proc_addr(&self, name: &CStr) -> Option<VoidFunction> {
        let get_instance_proc_addr = self.get_instance_proc_addr?;
        unsafe { get_instance_proc_addr(Instance::null(), name.as_ptr()) }
    }

    pub fn features(&self) -> &FeatureSet {
        &self.features
    }

    /// Name of the library the loader opened, if it opened one
    pub fn library_name(&self) -> Option<&str> {
        self.library.as_ref().map(|library| library.name())
    }

    /// Clear every slot and release the library.
    ///
    /// Runs on drop. Later loads do nothing.
    pub fn unload(&mut self) {
        if self.state == State::TornDown {
            return;
        }

        self.get_instance_proc_addr = None;
        self.table.clear(Passes::all());

        if let Some(library) = self.library.take() {
            log::info!("Releasing Vulkan library {}", library.name());
            drop(library);
        }

        self.loaded_instance = None;
        self.loaded_device = None;
        self.state = State::TornDown;
    }

    fn live_proc_addr(&self) -> Option<PFN_vkGetInstanceProcAddr> {
        if self.state == State::TornDown {
            return None;
        }
        self.get_instance_proc_addr
    }

    fn device_proc_addr(&self) -> Option<PFN_vkGetDeviceProcAddr> {
        self.live_proc_addr()?;
        unsafe { self.table.get_as::<PFN_vkGetDeviceProcAddr>(Command::GetDeviceProcAddr) }
    }
}

impl Default for VulkanLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for VulkanLoader {
    fn drop(&mut self) {
        self.unload();
    }
}

impl fmt::Debug for VulkanLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VulkanLoader")
            .field("status", &self.status())
            .field("state", &self.state)
            .field("library", &self.library_name())
            .field("loaded_instance", &self.loaded_instance)
            .field("loaded_device", &self.loaded_device)
            .field("table", &self.table)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::ffi::c_char;

    unsafe extern "system" fn create_instance_stub() {}

    unsafe extern "system" fn enumerate_v13(version: *mut u32) -> VkResult {
        *version = VulkanVersion::VK_1_3.to_u32();
        VK_SUCCESS
    }

    unsafe extern "system" fn enumerate_fails(_version: *mut u32) -> VkResult {
        -1
    }

    unsafe extern "system" fn gipa_v13(_instance: Instance, name: *const c_char) -> Option<VoidFunction> {
        match CStr::from_ptr(name).to_bytes() {
            b"vkEnumerateInstanceVersion" => Some(core::mem::transmute::<
                PFN_vkEnumerateInstanceVersion,
                VoidFunction,
            >(enumerate_v13)),
            b"vkCreateInstance" => Some(create_instance_stub as VoidFunction),
            _ => None,
        }
    }

    unsafe extern "system" fn gipa_broken_enumerate(
        _instance: Instance,
        name: *const c_char,
    ) -> Option<VoidFunction> {
        match CStr::from_ptr(name).to_bytes() {
            b"vkEnumerateInstanceVersion" => Some(core::mem::transmute::<
                PFN_vkEnumerateInstanceVersion,
                VoidFunction,
            >(enumerate_fails)),
            b"vkCreateInstance" => Some(create_instance_stub as VoidFunction),
            _ => None,
        }
    }

    unsafe extern "system" fn gipa_1_0(_instance: Instance, name: *const c_char) -> Option<VoidFunction> {
        (CStr::from_ptr(name).to_bytes() == b"vkCreateInstance").then_some(create_instance_stub as VoidFunction)
    }

    unsafe extern "system" fn gipa_empty(_instance: Instance, _name: *const c_char) -> Option<VoidFunction> {
        None
    }

    #[test]
    fn test_instance_version_enumerated() {
        let loader = VulkanLoader::with_proc_addr(gipa_v13);
        assert_eq!(loader.status(), Status::Success);
        assert_eq!(loader.instance_version(), Some(VulkanVersion::VK_1_3));
    }

    #[test]
    fn test_instance_version_falls_back_to_1_0() {
        let loader = VulkanLoader::with_proc_addr(gipa_1_0);
        assert_eq!(loader.instance_version(), Some(VulkanVersion::VK_1_0));

        let loader = VulkanLoader::with_proc_addr(gipa_broken_enumerate);
        assert_eq!(loader.instance_version(), Some(VulkanVersion::VK_1_0));
    }

    #[test]
    fn test_instance_version_unsupported() {
        let loader = VulkanLoader::with_proc_addr(gipa_empty);
        assert_eq!(loader.status(), Status::Success);
        assert_eq!(loader.instance_version(), None);
    }

    #[test]
    fn test_instance_version_gated_by_features() {
        let mut features = FeatureSet::compiled();
        features.disable("VK_BASE_VERSION_1_1");
        let loader = VulkanLoader::builder()
            .proc_addr(gipa_v13)
            .features(features)
            .build();
        assert!(loader.table().enumerate_instance_version().is_none());
        assert_eq!(loader.instance_version(), Some(VulkanVersion::VK_1_0));
    }

    #[test]
    fn test_supplied_resolver_opens_no_library() {
        let loader = VulkanLoader::with_proc_addr(gipa_1_0);
        assert_eq!(loader.library_name(), None);
        assert_eq!(loader.state(), State::Unbound);
        assert_eq!(loader.header_version(), HEADER_VERSION);
        assert!(loader.proc_addr(c"vkCreateInstance").is_some());
        assert!(loader.proc_addr(c"vkDestroyInstance").is_none());
    }

    #[test]
    fn test_unload_is_idempotent() {
        let mut loader = VulkanLoader::with_proc_addr(gipa_v13);
        loader.unload();
        loader.unload();
        assert_eq!(loader.state(), State::TornDown);
        assert!(loader.get_instance_proc_addr().is_none());
        assert!(loader.table().is_empty());
        assert_eq!(loader.instance_version(), None);
    }

    #[test]
    fn test_status_raw() {
        assert_eq!(Status::Success.as_raw(), 0);
        assert_eq!(Status::InitializationFailed.as_raw(), -3);
        assert!(!Status::InitializationFailed.is_success());
    }

    #[test]
    fn test_error_display() {
        let err = LoaderError::LibraryNotFound {
            tried: vec!["libvulkan.so.1".into(), "libvulkan.so".into()],
        };
        assert_eq!(
            err.to_string(),
            "No Vulkan library found (tried libvulkan.so.1, libvulkan.so)"
        );
        assert_eq!(
            LoaderError::MissingEntryPoint("vkGetInstanceProcAddr".into()).to_string(),
            "Missing entry point vkGetInstanceProcAddr"
        );
        assert_eq!(
            LoaderError::LibraryNotFound { tried: vec![] }.to_string(),
            "No Vulkan library candidates for this platform"
        );
    }
}
