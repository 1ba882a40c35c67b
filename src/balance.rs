//! The balance store shared by every table.
//!
//! Engines never own the bankroll. They read and write it through
//! [`BalanceStore`], which lets one store back several tables and lets tests
//! swap in [`MemoryBalanceStore`].

use alloc::sync::Arc;

use crate::sync::Mutex;

/// Balance a fresh or reset bankroll starts from.
pub const DEFAULT_BALANCE: usize = 1000;

/// Persisted balance and last winnings.
///
/// Methods take `&self`; implementations use interior mutability so that a
/// single store can be handed to several engines.
pub trait BalanceStore {
    /// Returns the spendable balance.
    fn balance(&self) -> usize;

    /// Replaces the spendable balance.
    fn set_balance(&self, balance: usize);

    /// Returns the amount credited by the last winning round.
    fn winnings(&self) -> usize;

    /// Replaces the winnings figure.
    fn set_winnings(&self, winnings: usize);

    /// Restores the default balance and clears winnings.
    fn reset(&self) {
        self.set_balance(DEFAULT_BALANCE);
        self.set_winnings(0);
    }
}

impl<S: BalanceStore + ?Sized> BalanceStore for &S {
    fn balance(&self) -> usize {
        (**self).balance()
    }

    fn set_balance(&self, balance: usize) {
        (**self).set_balance(balance);
    }

    fn winnings(&self) -> usize {
        (**self).winnings()
    }

    fn set_winnings(&self, winnings: usize) {
        (**self).set_winnings(winnings);
    }

    fn reset(&self) {
        (**self).reset();
    }
}

impl<S: BalanceStore + ?Sized> BalanceStore for Arc<S> {
    fn balance(&self) -> usize {
        (**self).balance()
    }

    fn set_balance(&self, balance: usize) {
        (**self).set_balance(balance);
    }

    fn winnings(&self) -> usize {
        (**self).winnings()
    }

    fn set_winnings(&self, winnings: usize) {
        (**self).set_winnings(winnings);
    }

    fn reset(&self) {
        (**self).reset();
    }
}

/// The two persisted figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Balances {
    /// Spendable balance.
    pub balance: usize,
    /// Amount credited by the last winning round.
    pub winnings: usize,
}

impl Default for Balances {
    fn default() -> Self {
        Self {
            balance: DEFAULT_BALANCE,
            winnings: 0,
        }
    }
}

/// An in-memory balance store.
#[derive(Debug, Default)]
pub struct MemoryBalanceStore {
    inner: Mutex<Balances>,
}

impl MemoryBalanceStore {
    /// Creates a store holding the default balance and no winnings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_values(DEFAULT_BALANCE, 0)
    }

    /// Creates a store holding the given figures.
    #[must_use]
    pub const fn with_values(balance: usize, winnings: usize) -> Self {
        Self {
            inner: Mutex::new(Balances { balance, winnings }),
        }
    }

    /// Returns both figures read under one lock.
    pub fn balances(&self) -> Balances {
        *self.inner.lock()
    }
}

impl BalanceStore for MemoryBalanceStore {
    fn balance(&self) -> usize {
        self.inner.lock().balance
    }

    fn set_balance(&self, balance: usize) {
        self.inner.lock().balance = balance;
    }

    fn winnings(&self) -> usize {
        self.inner.lock().winnings
    }

    fn set_winnings(&self, winnings: usize) {
        self.inner.lock().winnings = winnings;
    }

    fn reset(&self) {
        *self.inner.lock() = Balances::default();
    }
}

#[cfg(feature = "std")]
pub use file::FileBalanceStore;

#[cfg(feature = "std")]
mod file {
    use std::fs;
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    use tracing::{debug, warn};

    use super::{BalanceStore, Balances};
    use crate::error::StoreError;
    use crate::sync::Mutex;

    /// A balance store persisted as a small JSON file.
    ///
    /// Every update is written through. A failed write is logged and the new
    /// figures stay in memory; [`FileBalanceStore::flush`] retries and reports
    /// the failure.
    #[derive(Debug)]
    pub struct FileBalanceStore {
        path: PathBuf,
        inner: Mutex<Balances>,
    }

    impl FileBalanceStore {
        /// Opens the store at `path`, starting from defaults if the file does
        /// not exist yet.
        ///
        /// # Errors
        ///
        /// Returns an error if the file exists but cannot be read or parsed.
        pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
            let path = path.as_ref().to_path_buf();
            let balances = match fs::read_to_string(&path) {
                Ok(contents) => serde_json::from_str(&contents)?,
                Err(err) if err.kind() == ErrorKind::NotFound => {
                    debug!(path = %path.display(), "no balance file, using defaults");
                    Balances::default()
                }
                Err(err) => return Err(err.into()),
            };

            Ok(Self {
                path,
                inner: Mutex::new(balances),
            })
        }

        /// Returns the backing file path.
        #[must_use]
        pub fn path(&self) -> &Path {
            &self.path
        }

        /// Returns both figures read under one lock.
        pub fn balances(&self) -> Balances {
            *self.inner.lock()
        }

        /// Writes the current figures to disk.
        ///
        /// # Errors
        ///
        /// Returns an error if serialization or the write fails.
        pub fn flush(&self) -> Result<(), StoreError> {
            let balances = self.balances();
            self.write(&balances)
        }

        fn write(&self, balances: &Balances) -> Result<(), StoreError> {
            let json = serde_json::to_string(balances)?;
            fs::write(&self.path, json)?;
            Ok(())
        }

        fn update(&self, apply: impl FnOnce(&mut Balances)) {
            let mut balances = self.inner.lock();
            apply(&mut *balances);
            if let Err(err) = self.write(&*balances) {
                warn!(path = %self.path.display(), %err, "failed to persist balance");
            }
        }
    }

    impl BalanceStore for FileBalanceStore {
        fn balance(&self) -> usize {
            self.inner.lock().balance
        }

        fn set_balance(&self, balance: usize) {
            self.update(|balances| balances.balance = balance);
        }

        fn winnings(&self) -> usize {
            self.inner.lock().winnings
        }

        fn set_winnings(&self, winnings: usize) {
            self.update(|balances| balances.winnings = winnings);
        }

        fn reset(&self) {
            self.update(|balances| *balances = Balances::default());
        }
    }
}
