//! Name, OID and NID lookups.
//!
//! A registry is an immutable base table (the built-in objects) plus an
//! overlay for entries added at runtime. Lookups consult the overlay first,
//! so runtime registrations shadow built-in aliases without rebuilding the
//! base. Alias order is registration order; an overwritten alias keeps its
//! original position.

use std::collections::HashMap;
use std::sync::{OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use asnkit_types::EncodeError;
use log::{debug, warn};

use super::builtin::BUILTIN_OBJECTS;
use super::Oid;

static GLOBAL: OnceLock<OidRegistry> = OnceLock::new();

#[derive(Debug, Default, Clone)]
struct OidTable {
    /// `(alias, oid)` pairs in registration order, alias in original casing.
    aliases: Vec<(String, String)>,
    /// Lowercased alias -> index into `aliases`.
    alias_index: HashMap<String, usize>,
    display: HashMap<String, String>,
    oid_to_nid: HashMap<String, u32>,
    nid_to_oid: HashMap<u32, String>,
    nid_to_sn: HashMap<u32, String>,
    nid_to_ln: HashMap<u32, String>,
    /// Long name, exact case -> OID.
    ln_to_oid: HashMap<String, String>,
}

impl OidTable {
    fn seeded() -> Self {
        let mut table = Self::default();
        for info in BUILTIN_OBJECTS {
            if let Err(err) = table.add_object(info.nid, info.short_name, info.long_name, info.oid)
            {
                warn!("skipping builtin object {}: {err}", info.nid);
            }
        }
        table
    }

    fn alias(&self, key: &str) -> Option<&str> {
        self.alias_index
            .get(key)
            .map(|&i| self.aliases[i].1.as_str())
    }

    fn put_alias(&mut self, alias: &str, oid: &str) {
        let entry = (alias.to_string(), oid.to_string());
        let key = alias.to_lowercase();
        match self.alias_index.get(&key) {
            Some(&i) => self.aliases[i] = entry,
            None => {
                self.alias_index.insert(key, self.aliases.len());
                self.aliases.push(entry);
            }
        }
    }

    fn add_object(
        &mut self,
        nid: u32,
        short_name: Option<&str>,
        long_name: Option<&str>,
        oid: Option<&str>,
    ) -> Result<(), EncodeError> {
        let (Some(oid), Some(display)) = (oid, short_name.or(long_name)) else {
            return Ok(());
        };
        let oid = oid.parse::<Oid>()?.to_dot_string();

        if let Some(sn) = short_name {
            self.put_alias(sn, &oid);
        }
        if let Some(ln) = long_name {
            self.put_alias(ln, &oid);
            self.ln_to_oid.insert(ln.to_string(), oid.clone());
        }
        self.display.insert(oid.clone(), display.to_string());
        self.oid_to_nid.insert(oid.clone(), nid);
        self.nid_to_oid.insert(nid, oid);
        set_or_clear(&mut self.nid_to_sn, nid, short_name);
        set_or_clear(&mut self.nid_to_ln, nid, long_name);
        Ok(())
    }

    fn register(&mut self, oid: &str, short_alias: &str, long_alias: &str) -> Result<(), EncodeError> {
        let oid = oid.parse::<Oid>()?.to_dot_string();
        self.put_alias(short_alias, &oid);
        self.put_alias(long_alias, &oid);
        self.display.insert(oid, short_alias.to_string());
        Ok(())
    }
}

fn set_or_clear(map: &mut HashMap<u32, String>, nid: u32, name: Option<&str>) {
    match name {
        Some(name) => {
            map.insert(nid, name.to_string());
        }
        None => {
            map.remove(&nid);
        }
    }
}

/// Bidirectional name <-> OID <-> NID registry.
///
/// Use [`OidRegistry::global`] for the process-wide instance, or
/// [`OidRegistry::new`] for an isolated handle that starts from the same
/// built-in objects.
#[derive(Debug)]
pub struct OidRegistry {
    base: OidTable,
    overlay: RwLock<OidTable>,
}

impl OidRegistry {
    /// A registry seeded with the built-in object table.
    pub fn new() -> Self {
        Self {
            base: OidTable::seeded(),
            overlay: RwLock::new(OidTable::default()),
        }
    }

    /// A registry with no objects at all.
    pub fn empty() -> Self {
        Self {
            base: OidTable::default(),
            overlay: RwLock::new(OidTable::default()),
        }
    }

    /// The process-wide registry, built on first use.
    pub fn global() -> &'static OidRegistry {
        GLOBAL.get_or_init(|| {
            let registry = Self::new();
            debug!(
                "oid registry initialized with {} objects",
                registry.base.nid_to_oid.len()
            );
            registry
        })
    }

    fn overlay(&self) -> RwLockReadGuard<'_, OidTable> {
        self.overlay.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn overlay_mut(&self) -> RwLockWriteGuard<'_, OidTable> {
        self.overlay.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add an object row.
    ///
    /// Does nothing unless `oid` and at least one name are present. Fails
    /// only when `oid` is not a well-formed dotted OID.
    pub fn add_object(
        &self,
        nid: u32,
        short_name: Option<&str>,
        long_name: Option<&str>,
        oid: Option<&str>,
    ) -> Result<(), EncodeError> {
        self.overlay_mut()
            .add_object(nid, short_name, long_name, oid)
    }

    /// Register a runtime alias pair for `oid`; `short_alias` becomes its
    /// display name. Existing aliases with the same (case-folded) name are
    /// redirected.
    pub fn register(&self, oid: &str, short_alias: &str, long_alias: &str) -> Result<(), EncodeError> {
        self.overlay_mut().register(oid, short_alias, long_alias)?;
        debug!("registered oid {oid} as {short_alias} / {long_alias}");
        Ok(())
    }

    /// Drop every runtime registration, leaving only the base table.
    pub fn clear_registered(&self) {
        *self.overlay_mut() = OidTable::default();
    }

    /// Look up an alias, case-insensitively.
    pub fn oid_for_name(&self, name: &str) -> Option<String> {
        let key = name.to_lowercase();
        let overlay = self.overlay();
        overlay
            .alias(&key)
            .or_else(|| self.base.alias(&key))
            .map(str::to_string)
    }

    /// Look up an object by its exact long name.
    pub fn long_name_to_oid(&self, long_name: &str) -> Option<String> {
        let overlay = self.overlay();
        overlay
            .ln_to_oid
            .get(long_name)
            .or_else(|| self.base.ln_to_oid.get(long_name))
            .cloned()
    }

    /// Resolve a name or OID to a dotted OID.
    ///
    /// Unknown input is returned unchanged and is not validated.
    pub fn resolve(&self, name_or_oid: &str) -> String {
        self.oid_for_name(name_or_oid)
            .unwrap_or_else(|| name_or_oid.to_string())
    }

    /// NID of `name_or_oid`, if the object was added with one.
    pub fn nid_for(&self, name_or_oid: &str) -> Option<u32> {
        let oid = self.resolve(name_or_oid);
        let overlay = self.overlay();
        overlay
            .oid_to_nid
            .get(&oid)
            .or_else(|| self.base.oid_to_nid.get(&oid))
            .copied()
    }

    /// Preferred name for `oid`: the short name when one was given.
    pub fn display_name_for(&self, name_or_oid: &str) -> Option<String> {
        let oid = self.resolve(name_or_oid);
        let overlay = self.overlay();
        overlay
            .display
            .get(&oid)
            .or_else(|| self.base.display.get(&oid))
            .cloned()
    }

    pub fn oid_for_nid(&self, nid: u32) -> Option<String> {
        let overlay = self.overlay();
        overlay
            .nid_to_oid
            .get(&nid)
            .or_else(|| self.base.nid_to_oid.get(&nid))
            .cloned()
    }

    pub fn short_name_for_nid(&self, nid: u32) -> Option<String> {
        let overlay = self.overlay();
        if overlay.nid_to_oid.contains_key(&nid) {
            return overlay.nid_to_sn.get(&nid).cloned();
        }
        self.base.nid_to_sn.get(&nid).cloned()
    }

    pub fn long_name_for_nid(&self, nid: u32) -> Option<String> {
        let overlay = self.overlay();
        if overlay.nid_to_oid.contains_key(&nid) {
            return overlay.nid_to_ln.get(&nid).cloned();
        }
        self.base.nid_to_ln.get(&nid).cloned()
    }

    /// Name of the object by NID: its long name, else its short name.
    pub fn object_name(&self, name_or_oid: &str) -> Option<String> {
        let nid = self.nid_for(name_or_oid)?;
        self.long_name_for_nid(nid)
            .or_else(|| self.short_name_for_nid(nid))
    }

    /// Shortest alias mapping to the same OID as `name_or_oid`.
    pub fn short_name_for(&self, name_or_oid: &str) -> Option<String> {
        self.pick_alias(name_or_oid, |candidate, best| candidate < best)
    }

    /// Longest alias mapping to the same OID as `name_or_oid`.
    pub fn long_name_for(&self, name_or_oid: &str) -> Option<String> {
        self.pick_alias(name_or_oid, |candidate, best| candidate > best)
    }

    /// Scan aliases in registration order, replacing the pick only when
    /// `better(len, best_len)` holds, so ties keep the earliest alias.
    fn pick_alias(&self, name_or_oid: &str, better: impl Fn(usize, usize) -> bool) -> Option<String> {
        let oid = self.resolve(name_or_oid);
        let overlay = self.overlay();

        let base = self.base.aliases.iter().map(|(alias, target)| {
            let key = alias.to_lowercase();
            match overlay.alias_index.get(&key) {
                Some(&i) => {
                    let (alias, target) = &overlay.aliases[i];
                    (alias, target)
                }
                None => (alias, target),
            }
        });
        let added = overlay
            .aliases
            .iter()
            .filter(|(alias, _)| !self.base.alias_index.contains_key(&alias.to_lowercase()))
            .map(|(alias, target)| (alias, target));

        let mut best: Option<&String> = None;
        for (alias, target) in base.chain(added) {
            if *target != oid {
                continue;
            }
            if best.map_or(true, |b| better(alias.len(), b.len())) {
                best = Some(alias);
            }
        }
        best.cloned()
    }
}

impl Default for OidRegistry {
    fn default() -> Self {
        Self::new()
    }
}
