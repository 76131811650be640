//! Shared, lock-guarded command line

use super::error::CmdlineError;
use super::options::AppendAllOptions;
use super::parameter::Parameter;
use super::parameters::Parameters;
use super::source::CmdlineSource;
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A set of kernel parameters that can be shared between threads.
///
/// Every method takes the internal lock once and releases it before
/// returning, so each call is atomic on its own. A `get` followed by a `set`
/// is not.
#[derive(Debug, Default)]
pub struct Cmdline {
    parameters: Mutex<Parameters>,
}

impl Cmdline {
    /// Parse `line` into a new, caller-owned store
    pub fn new(line: &str) -> Self {
        Self::from(Parameters::parse(line))
    }

    /// Read the raw line from `source` once and parse it
    pub fn read_from<S: CmdlineSource + ?Sized>(source: &S) -> Result<Self, CmdlineError> {
        let line = source.read()?;
        tracing::debug!("Read kernel command line from {}", source.describe());
        Ok(Self::new(&line))
    }

    fn lock(&self) -> MutexGuard<'_, Parameters> {
        // Every write leaves a well-formed collection, so poisoning is ignored
        self.parameters.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the parameter stored under `key`
    pub fn get(&self, key: &str) -> Option<Parameter> {
        self.lock().get(key).cloned()
    }

    /// Replace `key`'s entry in place, or add it at the end
    pub fn set(&self, key: &str, parameter: Parameter) {
        tracing::trace!("Setting parameter '{}'", key);
        self.lock().set(key, parameter);
    }

    /// Parse `args` and overwrite every key they name
    pub fn set_all<I, T>(&self, args: I)
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let incoming = Parameters::parse_args(args);
        let mut parameters = self.lock();
        for parameter in incoming {
            let key = parameter.key().to_string();
            parameters.set(&key, parameter);
        }
    }

    /// Add `value` to `key`, keeping any existing values
    pub fn append(&self, key: &str, value: impl Into<String>) {
        tracing::trace!("Appending to parameter '{}'", key);
        self.lock().append(key, value);
    }

    /// Parse `args` and merge them in, per `options`
    ///
    /// ```
    /// use kcmdline::{AppendAllOptions, Cmdline};
    ///
    /// let cmdline = Cmdline::new("console=tty0 ip=dhcp");
    /// let options = AppendAllOptions::default().with_overwrite_keys(["console"]);
    /// cmdline.append_all(["console=ttyS0", "ip=none"], &options);
    ///
    /// assert_eq!(cmdline.to_string(), "console=ttyS0 ip=dhcp ip=none");
    /// ```
    pub fn append_all<I, T>(&self, args: I, options: &AppendAllOptions)
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let incoming = Parameters::parse_args(args);
        tracing::trace!(
            "Merging {} parameters ({} overwrite keys)",
            incoming.len(),
            options.overwrite_keys.len()
        );
        self.lock().merge(incoming, options);
    }

    /// Snapshot of all parameters in order
    pub fn parameters(&self) -> Parameters {
        self.lock().clone()
    }

    pub fn keys(&self) -> Vec<String> {
        self.lock().keys().map(str::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn strings(&self) -> Vec<String> {
        self.lock().strings()
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }
}

impl From<Parameters> for Cmdline {
    fn from(parameters: Parameters) -> Self {
        Self {
            parameters: Mutex::new(parameters),
        }
    }
}

impl Clone for Cmdline {
    fn clone(&self) -> Self {
        Self::from(self.parameters())
    }
}

impl fmt::Display for Cmdline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parameters = self.lock();
        write!(f, "{}", parameters)
    }
}
