use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[cfg(not(feature = "hydrate"))]
use crate::preference::MemoryStore;
use crate::preference::DarkModePreference;
#[cfg(feature = "hydrate")]
use crate::preference::{PreferenceError, PreferenceStore, DARK_MODE_KEY};

/// Browser `localStorage` holding the preference as a JSON boolean.
///
/// `use_local_storage` swallows write failures, so whether storage exists at
/// all is checked up front and reported from `save`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy)]
struct LocalStore {
    stored: Signal<Option<bool>>,
    set_stored: WriteSignal<Option<bool>>,
    available: bool,
}

#[cfg(feature = "hydrate")]
impl LocalStore {
    fn new() -> Self {
        let (stored, set_stored, _) =
            use_local_storage::<Option<bool>, JsonSerdeWasmCodec>(DARK_MODE_KEY);
        // private browsing and sandboxed frames can throw or return nothing here
        let available = window().local_storage().ok().flatten().is_some();
        if !available {
            log::warn!("localStorage unavailable, dark mode will not persist");
        }
        Self {
            stored,
            set_stored,
            available,
        }
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStore {
    fn load(&self) -> Option<bool> {
        self.stored.get_untracked()
    }

    fn save(&self, enabled: bool) -> Result<(), PreferenceError> {
        if !self.available {
            return Err(PreferenceError::Unavailable);
        }
        self.set_stored.set(Some(enabled));
        Ok(())
    }
}

#[derive(Clone, Copy)]
pub struct DarkMode {
    pub preference: ReadSignal<DarkModePreference>,
    pub toggle: Callback<()>,
}

/// Sets up the dark mode preference for the page and shares it via context.
///
/// The server always renders the default; the stored value is applied once
/// the client has hydrated so both renders agree.
pub fn provide_dark_mode() -> DarkMode {
    let (preference, set_preference) = signal(DarkModePreference::default());

    #[cfg(feature = "hydrate")]
    let store = LocalStore::new();
    #[cfg(not(feature = "hydrate"))]
    let store = MemoryStore::default();
    let store = StoredValue::new(store);

    Effect::watch(
        || (),
        move |_, _, _| {
            store.with_value(|s| set_preference.set(DarkModePreference::load(s)));
        },
        true,
    );

    let toggle = Callback::new(move |()| {
        store.with_value(|s| {
            set_preference.update(|p| {
                p.toggle(s);
            })
        });
    });

    let dark_mode = DarkMode { preference, toggle };
    provide_context(dark_mode);
    dark_mode
}

pub fn use_dark_mode() -> DarkMode {
    expect_context::<DarkMode>()
}
