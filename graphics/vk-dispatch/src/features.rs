//! Feature and extension availability
//!
//! Every entry point in the table carries a [`Predicate`] over named
//! features: core versions (`VK_VERSION_1_3`, `VK_BASE_VERSION_1_1`, ...)
//! and extensions (`VK_KHR_swapchain`, ...). A [`FeatureSet`] decides which
//! of those names exist for a given loader. The default set is fixed at build
//! time from the crate's Cargo features.

use std::borrow::Cow;
use std::collections::HashMap;

use crate::table::ENTRIES;

/// Availability condition of one entry point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    /// Feature or extension is present
    Has(&'static str),
    /// Extension is present with at least this revision
    SpecVersion(&'static str, u32),
    /// Every sub-predicate holds
    All(&'static [Predicate]),
    /// At least one sub-predicate holds
    Any(&'static [Predicate]),
}

impl Predicate {
    /// Evaluate against a feature set
    pub fn evaluate(&self, features: &FeatureSet) -> bool {
        match *self {
            Predicate::Has(name) => features.contains(name),
            Predicate::SpecVersion(name, min) => {
                features.spec_version(name).is_some_and(|rev| rev >= min)
            }
            Predicate::All(preds) => preds.iter().all(|p| p.evaluate(features)),
            Predicate::Any(preds) => preds.iter().any(|p| p.evaluate(features)),
        }
    }

    /// Visit every feature name mentioned by this predicate
    pub fn for_each_name(&self, f: &mut impl FnMut(&'static str)) {
        match *self {
            Predicate::Has(name) | Predicate::SpecVersion(name, _) => f(name),
            Predicate::All(preds) | Predicate::Any(preds) => {
                for pred in preds {
                    pred.for_each_name(f);
                }
            }
        }
    }
}

/// Window-system and platform extension groups
///
/// These extensions live in platform headers and are only compiled in when
/// the matching Cargo feature is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Win32,
    Xlib,
    XlibXrandr,
    Xcb,
    Wayland,
    Android,
    Metal,
    MacOs,
    Ios,
    Fuchsia,
    Ggp,
    Vi,
    DirectFb,
    Screen,
    Ohos,
    /// Provisional extensions
    Beta,
}

impl Platform {
    pub const ALL: [Platform; 16] = [
        Platform::Win32,
        Platform::Xlib,
        Platform::XlibXrandr,
        Platform::Xcb,
        Platform::Wayland,
        Platform::Android,
        Platform::Metal,
        Platform::MacOs,
        Platform::Ios,
        Platform::Fuchsia,
        Platform::Ggp,
        Platform::Vi,
        Platform::DirectFb,
        Platform::Screen,
        Platform::Ohos,
        Platform::Beta,
    ];

    /// Whether this platform group was enabled at build time
    pub const fn is_enabled(self) -> bool {
        match self {
            Platform::Win32 => cfg!(feature = "win32"),
            Platform::Xlib => cfg!(feature = "xlib"),
            Platform::XlibXrandr => cfg!(feature = "xlib-xrandr"),
            Platform::Xcb => cfg!(feature = "xcb"),
            Platform::Wayland => cfg!(feature = "wayland"),
            Platform::Android => cfg!(feature = "android"),
            Platform::Metal => cfg!(feature = "metal"),
            Platform::MacOs => cfg!(feature = "macos"),
            Platform::Ios => cfg!(feature = "ios"),
            Platform::Fuchsia => cfg!(feature = "fuchsia"),
            Platform::Ggp => cfg!(feature = "ggp"),
            Platform::Vi => cfg!(feature = "vi"),
            Platform::DirectFb => cfg!(feature = "directfb"),
            Platform::Screen => cfg!(feature = "screen"),
            Platform::Ohos => cfg!(feature = "ohos"),
            Platform::Beta => cfg!(feature = "beta"),
        }
    }

    /// Extensions that belong to this group
    pub const fn extensions(self) -> &'static [&'static str] {
        match self {
            Platform::Win32 => &[
                "VK_KHR_win32_surface",
                "VK_KHR_external_memory_win32",
                "VK_KHR_external_semaphore_win32",
                "VK_KHR_external_fence_win32",
                "VK_NV_external_memory_win32",
                "VK_EXT_full_screen_exclusive",
                "VK_NV_acquire_winrt_display",
            ],
            Platform::Xlib => &["VK_KHR_xlib_surface"],
            Platform::XlibXrandr => &["VK_EXT_acquire_xlib_display"],
            Platform::Xcb => &["VK_KHR_xcb_surface"],
            Platform::Wayland => &["VK_KHR_wayland_surface"],
            Platform::Android => &[
                "VK_KHR_android_surface",
                "VK_ANDROID_external_memory_android_hardware_buffer",
            ],
            Platform::Metal => &[
                "VK_EXT_metal_surface",
                "VK_EXT_metal_objects",
                "VK_EXT_external_memory_metal",
            ],
            Platform::MacOs => &["VK_MVK_macos_surface"],
            Platform::Ios => &["VK_MVK_ios_surface"],
            Platform::Fuchsia => &[
                "VK_FUCHSIA_imagepipe_surface",
                "VK_FUCHSIA_external_memory",
                "VK_FUCHSIA_external_semaphore",
                "VK_FUCHSIA_buffer_collection",
            ],
            Platform::Ggp => &["VK_GGP_stream_descriptor_surface"],
            Platform::Vi => &["VK_NN_vi_surface"],
            Platform::DirectFb => &["VK_EXT_directfb_surface"],
            Platform::Screen => &[
                "VK_QNX_screen_surface",
                "VK_QNX_external_memory_screen_buffer",
            ],
            Platform::Ohos => &[
                "VK_OHOS_surface",
                "VK_OHOS_external_memory",
                "VK_OHOS_native_buffer",
            ],
            Platform::Beta => &["VK_AMDX_shader_enqueue", "VK_NV_cuda_kernel_launch"],
        }
    }

    /// Platform group an extension belongs to, if any
    pub fn of(name: &str) -> Option<Platform> {
        Platform::ALL
            .into_iter()
            .find(|platform| platform.extensions().contains(&name))
    }
}

/// Extension revisions that predicates compare against. Anything not listed
/// is revision 1.
const SPEC_VERSIONS: &[(&str, u32)] = &[
    ("VK_EXT_discard_rectangles", 2),
    ("VK_NV_scissor_exclusive", 2),
];

fn default_spec_version(name: &str) -> u32 {
    SPEC_VERSIONS
        .iter()
        .find(|(ext, _)| *ext == name)
        .map_or(1, |&(_, rev)| rev)
}

/// Set of enabled features, each with its revision
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureSet {
    features: HashMap<Cow<'static, str>, u32>,
}

impl FeatureSet {
    /// Empty set; every predicate that needs a feature is false
    pub fn new() -> Self {
        Self::default()
    }

    /// The build-time set: everything the entry point table mentions, minus
    /// platform extensions whose Cargo feature is off.
    pub fn compiled() -> Self {
        let mut set = Self::new();
        for entry in ENTRIES.iter() {
            entry.predicate.for_each_name(&mut |name| {
                if Platform::of(name).map_or(true, Platform::is_enabled) {
                    set.features.insert(Cow::Borrowed(name), default_spec_version(name));
                }
            });
        }
        set
    }

    /// Enable a feature at revision 1, or at its known revision for
    /// revision-gated extensions
    pub fn enable(&mut self, name: impl Into<Cow<'static, str>>) -> &mut Self {
        let name = name.into();
        let rev = default_spec_version(&name);
        self.features.insert(name, rev);
        self
    }

    /// Enable a feature at an explicit revision
    pub fn enable_version(&mut self, name: impl Into<Cow<'static, str>>, rev: u32) -> &mut Self {
        self.features.insert(name.into(), rev);
        self
    }

    pub fn disable(&mut self, name: &str) -> &mut Self {
        self.features.remove(name);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.features.contains_key(name)
    }

    pub fn spec_version(&self, name: &str) -> Option<u32> {
        self.features.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.features.iter().map(|(name, &rev)| (name.as_ref(), rev))
    }
}

impl<N: Into<Cow<'static, str>>> FromIterator<N> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        let mut set = Self::new();
        for name in iter {
            set.enable(name);
        }
        set
    }
}

impl<N: Into<Cow<'static, str>>> Extend<N> for FeatureSet {
    fn extend<I: IntoIterator<Item = N>>(&mut self, iter: I) {
        for name in iter {
            self.enable(name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEVICE_GROUP_PRESENT: Predicate = Predicate::Any(&[
        Predicate::All(&[Predicate::Has("VK_KHR_device_group"), Predicate::Has("VK_KHR_surface")]),
        Predicate::All(&[Predicate::Has("VK_KHR_swapchain"), Predicate::Has("VK_VERSION_1_1")]),
    ]);

    #[test]
    fn test_has() {
        let set: FeatureSet = ["VK_KHR_surface"].into_iter().collect();
        assert!(Predicate::Has("VK_KHR_surface").evaluate(&set));
        assert!(!Predicate::Has("VK_KHR_swapchain").evaluate(&set));
    }

    #[test]
    fn test_nested_any_all() {
        let empty = FeatureSet::new();
        assert!(!DEVICE_GROUP_PRESENT.evaluate(&empty));

        let only_surface: FeatureSet = ["VK_KHR_surface"].into_iter().collect();
        assert!(!DEVICE_GROUP_PRESENT.evaluate(&only_surface));

        let first: FeatureSet = ["VK_KHR_device_group", "VK_KHR_surface"].into_iter().collect();
        assert!(DEVICE_GROUP_PRESENT.evaluate(&first));

        let second: FeatureSet = ["VK_KHR_swapchain", "VK_VERSION_1_1"].into_iter().collect();
        assert!(DEVICE_GROUP_PRESENT.evaluate(&second));
    }

    #[test]
    fn test_spec_version() {
        let pred = Predicate::All(&[
            Predicate::Has("VK_EXT_discard_rectangles"),
            Predicate::SpecVersion("VK_EXT_discard_rectangles", 2),
        ]);

        let mut set = FeatureSet::new();
        set.enable_version("VK_EXT_discard_rectangles", 1);
        assert!(!pred.evaluate(&set));

        set.enable_version("VK_EXT_discard_rectangles", 2);
        assert!(pred.evaluate(&set));

        // enable() picks up the known revision
        let set: FeatureSet = ["VK_EXT_discard_rectangles"].into_iter().collect();
        assert_eq!(set.spec_version("VK_EXT_discard_rectangles"), Some(2));
        assert!(pred.evaluate(&set));
    }

    #[test]
    fn test_empty_combinators() {
        let set = FeatureSet::new();
        assert!(Predicate::All(&[]).evaluate(&set));
        assert!(!Predicate::Any(&[]).evaluate(&set));
    }

    #[test]
    fn test_for_each_name() {
        let mut names = Vec::new();
        DEVICE_GROUP_PRESENT.for_each_name(&mut |name| names.push(name));
        assert_eq!(
            names,
            ["VK_KHR_device_group", "VK_KHR_surface", "VK_KHR_swapchain", "VK_VERSION_1_1"]
        );
    }

    #[test]
    fn test_disable() {
        let mut set: FeatureSet = ["VK_KHR_surface", "VK_KHR_swapchain"].into_iter().collect();
        set.disable("VK_KHR_surface");
        assert!(!set.contains("VK_KHR_surface"));
        assert!(set.contains("VK_KHR_swapchain"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_platform_lookup() {
        assert_eq!(Platform::of("VK_KHR_win32_surface"), Some(Platform::Win32));
        assert_eq!(Platform::of("VK_EXT_acquire_xlib_display"), Some(Platform::XlibXrandr));
        assert_eq!(Platform::of("VK_KHR_swapchain"), None);
    }

    #[test]
    fn test_compiled_core() {
        let set = FeatureSet::compiled();
        assert!(set.contains("VK_BASE_VERSION_1_0"));
        assert!(set.contains("VK_VERSION_1_3"));
        assert!(set.contains("VK_KHR_swapchain"));
        assert_eq!(set.spec_version("VK_NV_scissor_exclusive"), Some(2));
    }

    #[test]
    fn test_compiled_platform_gating() {
        let set = FeatureSet::compiled();
        for platform in Platform::ALL {
            for ext in platform.extensions() {
                assert_eq!(set.contains(ext), platform.is_enabled(), "{}", ext);
            }
        }
    }
}
