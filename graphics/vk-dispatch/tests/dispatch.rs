use std::ffi::{c_char, c_void, CStr};
use std::mem;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use vk_dispatch::ffi::PFN_vkGetDeviceProcAddr;
use vk_dispatch::{
    Command, Device, FeatureSet, Instance, Library, LibraryLoader, LoaderError, State, Status,
    Tier, VoidFunction, VulkanLoader,
};

// Distinct bodies keep the linker from folding these into one address.
static LOADER_HITS: AtomicUsize = AtomicUsize::new(0);
static INSTANCE_HITS: AtomicUsize = AtomicUsize::new(0);
static SECOND_INSTANCE_HITS: AtomicUsize = AtomicUsize::new(0);
static DEVICE_HITS: AtomicUsize = AtomicUsize::new(0);
static SECOND_DEVICE_HITS: AtomicUsize = AtomicUsize::new(0);

unsafe extern "system" fn loader_fn() {
    LOADER_HITS.fetch_add(1, Ordering::Relaxed);
}

unsafe extern "system" fn instance_fn() {
    INSTANCE_HITS.fetch_add(1, Ordering::Relaxed);
}

unsafe extern "system" fn second_instance_fn() {
    SECOND_INSTANCE_HITS.fetch_add(1, Ordering::Relaxed);
}

unsafe extern "system" fn device_fn() {
    DEVICE_HITS.fetch_add(1, Ordering::Relaxed);
}

unsafe extern "system" fn second_device_fn() {
    SECOND_DEVICE_HITS.fetch_add(1, Ordering::Relaxed);
}

const FIRST_INSTANCE: usize = 0x1000;
const SECOND_INSTANCE: usize = 0x2000;
const FIRST_DEVICE: usize = 0x3000;
const SECOND_DEVICE: usize = 0x4000;

/// Loader-tier names the fake implementation exports
const LOADER_EXPORTS: &[&str] = &["vkCreateInstance", "vkEnumerateInstanceExtensionProperties"];

fn instance(raw: usize) -> Instance {
    Instance::from_raw(raw as *mut c_void)
}

fn device(raw: usize) -> Device {
    Device::from_raw(raw as *mut c_void)
}

fn addr(function: Option<VoidFunction>) -> usize {
    function.map_or(0, |f| f as usize)
}

unsafe extern "system" fn fake_get_device_proc_addr(
    device: Device,
    _name: *const c_char,
) -> Option<VoidFunction> {
    match device.as_raw() as usize {
        FIRST_DEVICE => Some(device_fn as VoidFunction),
        SECOND_DEVICE => Some(second_device_fn as VoidFunction),
        _ => None,
    }
}

/// Resolves loader-tier names in `LOADER_EXPORTS` with no instance, and
/// every name for the first instance. The second instance resolves
/// everything except KHR entry points.
unsafe extern "system" fn fake_get_instance_proc_addr(
    instance: Instance,
    name: *const c_char,
) -> Option<VoidFunction> {
    let name = CStr::from_ptr(name).to_str().ok()?;

    if instance.is_null() {
        return LOADER_EXPORTS
            .contains(&name)
            .then_some(loader_fn as VoidFunction);
    }

    if name == "vkGetDeviceProcAddr" {
        return Some(mem::transmute::<PFN_vkGetDeviceProcAddr, VoidFunction>(
            fake_get_device_proc_addr,
        ));
    }

    match instance.as_raw() as usize {
        FIRST_INSTANCE => Some(instance_fn as VoidFunction),
        SECOND_INSTANCE if !name.ends_with("KHR") => Some(second_instance_fn as VoidFunction),
        _ => None,
    }
}

#[derive(Default)]
struct Counters {
    opened: Mutex<Vec<String>>,
    released: AtomicUsize,
}

struct FakeLibrary {
    name: String,
    counters: Arc<Counters>,
}

impl Library for FakeLibrary {
    fn name(&self) -> &str {
        &self.name
    }

    fn symbol(&self, name: &CStr) -> Option<VoidFunction> {
        (name.to_bytes() == b"vkGetInstanceProcAddr").then(|| unsafe {
            mem::transmute::<vk_dispatch::ffi::PFN_vkGetInstanceProcAddr, VoidFunction>(
                fake_get_instance_proc_addr,
            )
        })
    }
}

impl Drop for FakeLibrary {
    fn drop(&mut self) {
        self.counters.released.fetch_add(1, Ordering::SeqCst);
    }
}

/// Opens only the names in `available`
struct FakeLoader {
    available: Vec<&'static str>,
    counters: Arc<Counters>,
}

impl LibraryLoader for FakeLoader {
    fn open(&self, name: &str) -> Result<Box<dyn Library>, LoaderError> {
        if !self.available.contains(&name) {
            return Err(LoaderError::LibraryLoadFailed {
                name: name.into(),
                reason: "no such file".into(),
            });
        }
        self.counters.opened.lock().unwrap().push(name.to_string());
        Ok(Box::new(FakeLibrary {
            name: name.into(),
            counters: self.counters.clone(),
        }))
    }
}

fn fake_loader(available: &[&'static str]) -> (VulkanLoader, Arc<Counters>) {
    let counters = Arc::new(Counters::default());
    let loader = VulkanLoader::builder()
        .library_names(["libvulkan.so.1", "libvulkan.so"])
        .library_loader(FakeLoader {
            available: available.to_vec(),
            counters: counters.clone(),
        })
        .build();
    (loader, counters)
}

fn tier_slots(loader: &VulkanLoader, tier: Tier) -> Vec<(Command, usize)> {
    loader
        .table()
        .available(tier)
        .map(|command| (command, addr(loader.get(command))))
        .collect()
}

fn assert_all_empty(loader: &VulkanLoader) {
    for (command, function) in loader.table().iter() {
        assert!(function.is_none(), "{} still set", command);
    }
}

#[test]
fn test_loader_tier_allow_list() {
    let loader = VulkanLoader::with_proc_addr(fake_get_instance_proc_addr);
    assert_eq!(loader.status(), Status::Success);
    assert_eq!(loader.state(), State::Unbound);

    for command in loader.table().available(Tier::Loader) {
        let exported = LOADER_EXPORTS.contains(&command.name().to_str().unwrap());
        assert_eq!(loader.get(command).is_some(), exported, "{}", command);
    }
    assert_eq!(addr(loader.table().create_instance()), loader_fn as usize);
    assert!(loader.table().enumerate_instance_version().is_none());
    assert_eq!(loader.table().resolved(Tier::Instance), 0);
    assert_eq!(loader.table().resolved(Tier::Device), 0);
}

#[test]
fn test_instance_load_fills_instance_and_device_tiers() {
    let mut loader = VulkanLoader::with_proc_addr(fake_get_instance_proc_addr);
    loader.load_instance(instance(FIRST_INSTANCE));

    assert_eq!(loader.state(), State::InstanceBound);
    assert_eq!(loader.loaded_instance(), Some(instance(FIRST_INSTANCE)));
    assert_eq!(loader.loaded_device(), None);

    for (command, function) in tier_slots(&loader, Tier::Instance) {
        if command == Command::GetDeviceProcAddr {
            assert_eq!(function, fake_get_device_proc_addr as usize);
        } else {
            assert_eq!(function, instance_fn as usize, "{}", command);
        }
    }
    for (command, function) in tier_slots(&loader, Tier::Device) {
        assert_eq!(function, instance_fn as usize, "{}", command);
    }
}

#[test]
fn test_instance_only_skips_device_tier() {
    let mut loader = VulkanLoader::with_proc_addr(fake_get_instance_proc_addr);
    loader.load_instance_only(instance(FIRST_INSTANCE));

    assert_eq!(loader.state(), State::InstanceBound);
    assert!(loader.table().resolved(Tier::Instance) > 0);
    assert_eq!(loader.table().resolved(Tier::Device), 0);

    loader.load_device(device(FIRST_DEVICE));
    for (command, function) in tier_slots(&loader, Tier::Device) {
        assert_eq!(function, device_fn as usize, "{}", command);
    }
}

#[test]
fn test_device_load_overrides_instance_fallback() {
    let mut loader = VulkanLoader::with_proc_addr(fake_get_instance_proc_addr);
    loader.load_instance(instance(FIRST_INSTANCE));
    loader.load_device(device(FIRST_DEVICE));

    assert_eq!(loader.state(), State::DeviceBound);
    assert_eq!(loader.loaded_device(), Some(device(FIRST_DEVICE)));
    for (command, function) in tier_slots(&loader, Tier::Device) {
        assert_eq!(function, device_fn as usize, "{}", command);
    }
    // instance tier is untouched by the device pass
    assert_eq!(addr(loader.table().enumerate_physical_devices()), instance_fn as usize);
}

#[test]
fn test_device_reload_uses_latest_device() {
    let mut loader = VulkanLoader::with_proc_addr(fake_get_instance_proc_addr);
    loader.load_instance(instance(FIRST_INSTANCE));
    loader.load_device(device(FIRST_DEVICE));
    loader.load_device(device(SECOND_DEVICE));

    assert_eq!(loader.loaded_device(), Some(device(SECOND_DEVICE)));
    assert_eq!(addr(loader.table().queue_submit()), second_device_fn as usize);
    assert_eq!(addr(loader.table().cmd_draw()), second_device_fn as usize);
}

#[test]
fn test_loader_tier_unaffected_by_binding() {
    let mut loader = VulkanLoader::with_proc_addr(fake_get_instance_proc_addr);
    let before = tier_slots(&loader, Tier::Loader);

    loader.load_instance(instance(FIRST_INSTANCE));
    assert_eq!(tier_slots(&loader, Tier::Loader), before);

    loader.load_device(device(FIRST_DEVICE));
    assert_eq!(tier_slots(&loader, Tier::Loader), before);

    loader.load_instance_only(instance(SECOND_INSTANCE));
    assert_eq!(tier_slots(&loader, Tier::Loader), before);
}

#[test]
fn test_rebinding_instance_leaves_no_residue() {
    let mut loader = VulkanLoader::with_proc_addr(fake_get_instance_proc_addr);
    loader.load_instance(instance(FIRST_INSTANCE));
    loader.load_instance(instance(SECOND_INSTANCE));

    assert_eq!(loader.loaded_instance(), Some(instance(SECOND_INSTANCE)));
    for (command, function) in tier_slots(&loader, Tier::Instance) {
        let name = command.name().to_str().unwrap();
        let expected = if command == Command::GetDeviceProcAddr {
            fake_get_device_proc_addr as usize
        } else if name.ends_with("KHR") {
            0
        } else {
            second_instance_fn as usize
        };
        assert_eq!(function, expected, "{}", command);
    }
    assert!(loader.table().destroy_surface_khr().is_none());
    assert!(loader.table().create_swapchain_khr().is_none());
}

#[test]
fn test_disabled_predicate_never_resolves() {
    let mut features = FeatureSet::compiled();
    features.disable("VK_KHR_swapchain");
    features.disable("VK_EXT_debug_utils");

    let mut loader = VulkanLoader::builder()
        .proc_addr(fake_get_instance_proc_addr)
        .features(features)
        .build();

    let gated = [
        Command::CreateSwapchainKHR,
        Command::QueuePresentKHR,
        Command::AcquireNextImage2KHR,
        Command::CreateDebugUtilsMessengerEXT,
        Command::CmdBeginDebugUtilsLabelEXT,
    ];

    let check = |loader: &VulkanLoader| {
        for command in gated {
            assert!(!loader.table().is_available(command), "{}", command);
            assert!(loader.get(command).is_none(), "{}", command);
        }
    };

    check(&loader);
    loader.load_instance(instance(FIRST_INSTANCE));
    check(&loader);
    loader.load_device(device(FIRST_DEVICE));
    check(&loader);
    loader.load_instance_only(instance(FIRST_INSTANCE));
    check(&loader);

    // the rest of the table still loads
    assert_eq!(addr(loader.table().queue_submit()), device_fn as usize);
}

#[test]
fn test_teardown_clears_and_releases_once() {
    let (mut loader, counters) = fake_loader(&["libvulkan.so.1"]);
    assert_eq!(loader.status(), Status::Success);
    assert_eq!(loader.library_name(), Some("libvulkan.so.1"));

    loader.load_instance(instance(FIRST_INSTANCE));
    loader.load_device(device(FIRST_DEVICE));
    assert!(loader.table().resolved(Tier::Device) > 0);

    loader.unload();
    assert_eq!(loader.state(), State::TornDown);
    assert_all_empty(&loader);
    assert!(loader.get_instance_proc_addr().is_none());
    assert_eq!(loader.loaded_instance(), None);
    assert_eq!(loader.loaded_device(), None);
    assert_eq!(counters.released.load(Ordering::SeqCst), 1);

    drop(loader);
    assert_eq!(counters.released.load(Ordering::SeqCst), 1);
}

#[test]
fn test_repeated_construct_destroy() {
    let counters = Arc::new(Counters::default());
    for _ in 0..3 {
        let mut loader = VulkanLoader::builder()
            .library_names(["libvulkan.so.1"])
            .library_loader(FakeLoader {
                available: vec!["libvulkan.so.1"],
                counters: counters.clone(),
            })
            .build();
        loader.load_instance(instance(FIRST_INSTANCE));
    }
    assert_eq!(counters.opened.lock().unwrap().len(), 3);
    assert_eq!(counters.released.load(Ordering::SeqCst), 3);
}

#[test]
fn test_bind_after_teardown_is_noop() {
    let (mut loader, _counters) = fake_loader(&["libvulkan.so.1"]);
    loader.unload();

    loader.load_instance(instance(FIRST_INSTANCE));
    loader.load_device(device(FIRST_DEVICE));

    assert_eq!(loader.state(), State::TornDown);
    assert_eq!(loader.loaded_instance(), None);
    assert_all_empty(&loader);
}

#[test]
fn test_library_fallback() {
    let (loader, counters) = fake_loader(&["libvulkan.so"]);
    assert_eq!(loader.status(), Status::Success);
    assert_eq!(loader.library_name(), Some("libvulkan.so"));
    assert_eq!(*counters.opened.lock().unwrap(), ["libvulkan.so"]);
    assert_eq!(addr(loader.table().create_instance()), loader_fn as usize);
}

#[test]
fn test_failed_initialization_is_inert() {
    let (mut loader, counters) = fake_loader(&[]);

    assert_eq!(loader.status(), Status::InitializationFailed);
    assert_eq!(loader.status().as_raw(), -3);
    assert_eq!(
        loader.error(),
        Some(&LoaderError::LibraryNotFound {
            tried: vec!["libvulkan.so.1".into(), "libvulkan.so".into()]
        })
    );
    assert_all_empty(&loader);
    assert_eq!(loader.instance_version(), None);

    loader.load_instance(instance(FIRST_INSTANCE));
    loader.load_instance_only(instance(FIRST_INSTANCE));
    loader.load_device(device(FIRST_DEVICE));

    assert_all_empty(&loader);
    assert_eq!(loader.state(), State::Unbound);
    assert_eq!(loader.loaded_instance(), None);
    assert_eq!(loader.loaded_device(), None);
    assert!(loader.device_table(device(FIRST_DEVICE)).is_none());

    drop(loader);
    assert_eq!(counters.released.load(Ordering::SeqCst), 0);
}

#[test]
fn test_device_before_instance_is_rejected() {
    let mut loader = VulkanLoader::with_proc_addr(fake_get_instance_proc_addr);
    loader.load_device(device(FIRST_DEVICE));

    assert_eq!(loader.state(), State::Unbound);
    assert_eq!(loader.loaded_device(), None);
    assert_eq!(loader.table().resolved(Tier::Device), 0);
    assert!(loader.device_table(device(FIRST_DEVICE)).is_none());
}

#[test]
fn test_device_table_is_separate() {
    let mut loader = VulkanLoader::with_proc_addr(fake_get_instance_proc_addr);
    loader.load_instance(instance(FIRST_INSTANCE));

    let second = loader.device_table(device(SECOND_DEVICE)).unwrap();
    assert_eq!(addr(second.queue_submit()), second_device_fn as usize);
    assert_eq!(second.resolved(Tier::Loader), 0);
    assert_eq!(second.resolved(Tier::Instance), 0);

    assert_eq!(addr(loader.table().queue_submit()), instance_fn as usize);
    assert_eq!(loader.loaded_device(), None);
    assert_eq!(loader.state(), State::InstanceBound);
}

#[test]
fn test_instance_version_through_library() {
    let (loader, _counters) = fake_loader(&["libvulkan.so.1"]);
    // vkEnumerateInstanceVersion is not exported, vkCreateInstance is
    assert_eq!(loader.instance_version(), Some(vk_dispatch::VulkanVersion::VK_1_0));
}
