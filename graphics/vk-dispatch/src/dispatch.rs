//! Function pointer slots and tier passes

use core::ffi::CStr;
use core::fmt;
use core::mem;

use bitflags::bitflags;

use crate::features::FeatureSet;
use crate::ffi::VoidFunction;
use crate::table::{Command, Entry, Tier};

bitflags! {
    /// Tiers a resolution pass walks
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Passes: u8 {
        const LOADER = 1 << 0;
        const INSTANCE = 1 << 1;
        const DEVICE = 1 << 2;
    }
}

impl From<Tier> for Passes {
    fn from(tier: Tier) -> Self {
        match tier {
            Tier::Loader => Passes::LOADER,
            Tier::Instance => Passes::INSTANCE,
            Tier::Device => Passes::DEVICE,
        }
    }
}

impl Passes {
    /// Selected tiers, in resolution order
    pub fn tiers(self) -> impl Iterator<Item = Tier> {
        Tier::ALL
            .into_iter()
            .filter(move |&tier| self.contains(Passes::from(tier)))
    }
}

/// One function pointer per entry point
///
/// Slots start out empty and only change through a pass. Entries whose
/// predicate is false for the table's feature set are left out of every
/// pass, so their slots stay empty for the table's whole life.
#[derive(Clone)]
pub struct DispatchTable {
    slots: [Option<VoidFunction>; Command::COUNT],
    /// Entries that exist under the feature set, per tier
    active: [Vec<&'static Entry>; 3],
}

impl DispatchTable {
    /// Create an empty table, keeping only entries whose predicate holds
    pub fn new(features: &FeatureSet) -> Self {
        let active = Tier::ALL.map(|tier| {
            tier.entries()
                .iter()
                .filter(|entry| entry.predicate.evaluate(features))
                .collect::<Vec<_>>()
        });

        Self {
            slots: [None; Command::COUNT],
            active,
        }
    }

    /// Resolve every active entry of `tier` and store the result.
    ///
    /// Returns the number of entry points that resolved.
    pub fn load<F>(&mut self, tier: Tier, mut resolve: F) -> usize
    where
        F: FnMut(&'static CStr) -> Option<VoidFunction>,
    {
        let entries = &self.active[tier as usize];
        let mut resolved = 0;

        for entry in entries {
            let function = resolve(entry.name);
            if function.is_some() {
                resolved += 1;
            } else {
                log::trace!("{} not resolved", entry.command);
            }
            self.slots[entry.command as usize] = function;
        }

        log::debug!(
            "{:?} pass: {}/{} entry points resolved",
            tier,
            resolved,
            entries.len()
        );
        resolved
    }

    /// Run one pass per selected tier, in tier order, with the same resolver
    pub fn load_passes<F>(&mut self, passes: Passes, mut resolve: F) -> usize
    where
        F: FnMut(&'static CStr) -> Option<VoidFunction>,
    {
        passes
            .tiers()
            .map(|tier| self.load(tier, &mut resolve))
            .sum()
    }

    /// Empty every slot of the selected tiers
    pub fn clear(&mut self, passes: Passes) {
        self.load_passes(passes, |_| None);
    }

    #[inline]
    pub fn get(&self, command: Command) -> Option<VoidFunction> {
        self.slots[command as usize]
    }

    /// Read a slot as a concrete function pointer type.
    ///
    /// # Safety
    ///
    /// `F` must be the function pointer type of the entry point named by
    /// `command`.
    ///
    /// # Panics
    ///
    /// If `F` is not pointer sized.
    pub unsafe fn get_as<F: Copy>(&self, command: Command) -> Option<F> {
        assert_eq!(
            mem::size_of::<F>(),
            mem::size_of::<VoidFunction>(),
            "{} read as a non function pointer type",
            command
        );
        self.get(command)
            .map(|function| mem::transmute_copy::<VoidFunction, F>(&function))
    }

    /// Whether the entry point exists under this table's feature set
    pub fn is_available(&self, command: Command) -> bool {
        self.active[command.tier() as usize]
            .iter()
            .any(|entry| entry.command == command)
    }

    /// Entries of `tier` that exist under this table's feature set
    pub fn available(&self, tier: Tier) -> impl Iterator<Item = Command> + '_ {
        self.active[tier as usize].iter().map(|entry| entry.command)
    }

    /// Every slot, in table order
    pub fn iter(&self) -> impl Iterator<Item = (Command, Option<VoidFunction>)> + '_ {
        Command::ALL
            .iter()
            .map(move |&command| (command, self.get(command)))
    }

    /// Number of filled slots in `tier`
    pub fn resolved(&self, tier: Tier) -> usize {
        tier.entries()
            .iter()
            .filter(|entry| self.slots[entry.command as usize].is_some())
            .count()
    }

    /// Whether every slot is empty
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

impl fmt::Debug for DispatchTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("DispatchTable");
        for tier in Tier::ALL {
            s.field(
                &format!("{:?}", tier).to_lowercase(),
                &format_args!(
                    "{}/{}",
                    self.resolved(tier),
                    self.active[tier as usize].len()
                ),
            );
        }
        s.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::ffi::c_char;

    unsafe extern "system" fn stub() {}

    fn all_features() -> FeatureSet {
        FeatureSet::compiled()
    }

    #[test]
    fn test_new_table_is_empty() {
        let table = DispatchTable::new(&all_features());
        assert!(table.is_empty());
        assert_eq!(table.iter().count(), Command::COUNT);
    }

    #[test]
    fn test_load_single_tier() {
        let mut table = DispatchTable::new(&all_features());
        let resolved = table.load(Tier::Loader, |_| Some(stub as VoidFunction));

        assert_eq!(resolved, table.available(Tier::Loader).count());
        assert!(table.create_instance().is_some());
        assert!(table.enumerate_instance_layer_properties().is_some());
        assert_eq!(table.resolved(Tier::Instance), 0);
        assert_eq!(table.resolved(Tier::Device), 0);
    }

    #[test]
    fn test_load_passes_in_order() {
        let mut table = DispatchTable::new(&all_features());
        let mut seen = Vec::new();
        table.load_passes(Passes::DEVICE | Passes::INSTANCE, |name| {
            seen.push(name);
            None
        });

        let first_device = seen
            .iter()
            .position(|name| Command::from_name(name.to_str().unwrap()).unwrap().tier() == Tier::Device)
            .unwrap();
        assert!(seen[..first_device]
            .iter()
            .all(|name| Command::from_name(name.to_str().unwrap()).unwrap().tier() == Tier::Instance));
        assert!(seen.iter().all(|name| name.to_bytes() != b"vkCreateInstance"));
    }

    #[test]
    fn test_resolver_miss_leaves_slot_empty() {
        let mut table = DispatchTable::new(&all_features());
        table.load(Tier::Loader, |name| {
            (name.to_bytes() == b"vkCreateInstance").then_some(stub as VoidFunction)
        });
        assert!(table.create_instance().is_some());
        assert!(table.enumerate_instance_version().is_none());
        assert_eq!(table.resolved(Tier::Loader), 1);
    }

    #[test]
    fn test_clear() {
        let mut table = DispatchTable::new(&all_features());
        table.load_passes(Passes::all(), |_| Some(stub as VoidFunction));
        assert!(!table.is_empty());

        table.clear(Passes::DEVICE);
        assert_eq!(table.resolved(Tier::Device), 0);
        assert!(table.resolved(Tier::Instance) > 0);

        table.clear(Passes::all());
        assert!(table.is_empty());
    }

    #[test]
    fn test_predicate_gated_entries_skipped() {
        let mut features = all_features();
        features.disable("VK_KHR_swapchain");

        let mut table = DispatchTable::new(&features);
        let mut asked = Vec::new();
        table.load_passes(Passes::all(), |name| {
            asked.push(name);
            Some(stub as VoidFunction)
        });

        assert!(!table.is_available(Command::CreateSwapchainKHR));
        assert!(table.create_swapchain_khr().is_none());
        assert!(!asked.iter().any(|name| name.to_bytes() == b"vkCreateSwapchainKHR"));
        assert!(table.queue_submit().is_some());
    }

    #[test]
    fn test_get_as() {
        type CreateInstance = unsafe extern "system" fn(*const c_char) -> i32;

        let mut table = DispatchTable::new(&all_features());
        assert!(unsafe { table.get_as::<CreateInstance>(Command::CreateInstance) }.is_none());

        table.load(Tier::Loader, |_| Some(stub as VoidFunction));
        let function = unsafe { table.get_as::<CreateInstance>(Command::CreateInstance) };
        assert_eq!(function.map(|f| f as usize), Some(stub as usize));
    }

    #[test]
    #[should_panic]
    fn test_get_as_wrong_size() {
        let mut table = DispatchTable::new(&all_features());
        table.load(Tier::Loader, |_| Some(stub as VoidFunction));
        let _ = unsafe { table.get_as::<[usize; 2]>(Command::CreateInstance) };
    }

    #[test]
    fn test_passes_tiers() {
        assert_eq!(Passes::all().tiers().collect::<Vec<_>>(), Tier::ALL);
        assert_eq!(
            (Passes::DEVICE | Passes::LOADER).tiers().collect::<Vec<_>>(),
            [Tier::Loader, Tier::Device]
        );
        assert_eq!(Passes::empty().tiers().count(), 0);
    }
}
